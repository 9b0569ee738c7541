use crate::foundation::error::{FerryteError, FerryteResult};

pub use kurbo::{Point, Vec2};

/// Stable identifier of a cell within its diagram.
///
/// Ids are assigned once at construction (reading order: row by row, left to
/// right) and survive every transform; only positions change.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CellId(pub u32);

/// Grid position of a cell: `row` counts down from the corner, `col` right.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct GridPos {
    /// Zero-based row index (downward).
    pub row: usize,
    /// Zero-based column index (rightward).
    pub col: usize,
}

impl GridPos {
    /// Build a position from row and column indices.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Diagonal distance from the corner: `min(row, col)`.
    pub fn layer(self) -> usize {
        self.row.min(self.col)
    }

    /// Mirror the position across the main diagonal.
    pub fn transpose(self) -> Self {
        Self {
            row: self.col,
            col: self.row,
        }
    }
}

/// A validated integer partition: an ordered sequence of positive parts.
///
/// The sequence carries no implicit ordering requirement; transforms that
/// need canonical (non-increasing) form check [`Partition::is_canonical`]
/// themselves.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Partition(Vec<u32>);

impl Partition {
    /// Validate a part sequence. Fails on an empty sequence or a zero part.
    pub fn new(parts: Vec<u32>) -> FerryteResult<Self> {
        if parts.is_empty() {
            return Err(FerryteError::invalid_partition(
                "partition must have at least one part",
            ));
        }
        for (index, &part) in parts.iter().enumerate() {
            if part == 0 {
                return Err(FerryteError::invalid_partition(format!(
                    "part {index} must be positive"
                )));
            }
        }
        Ok(Self(parts))
    }

    /// Build from a sequence already known to be valid (non-empty, all
    /// parts positive).
    pub(crate) fn from_parts_unchecked(parts: Vec<u32>) -> Self {
        debug_assert!(!parts.is_empty() && parts.iter().all(|&p| p > 0));
        Self(parts)
    }

    /// The part sequence.
    pub fn parts(&self) -> &[u32] {
        &self.0
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for `len`/`is_empty` API symmetry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all parts.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&p| u64::from(p)).sum()
    }

    /// Largest part.
    pub fn max_part(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// True when the sequence is non-increasing.
    pub fn is_canonical(&self) -> bool {
        self.0.windows(2).all(|w| w[0] >= w[1])
    }

    /// The conjugate sequence: `newP[i]` counts the parts larger than `i`.
    pub fn conjugate(&self) -> Partition {
        let max = self.max_part();
        let conjugated = (0..max)
            .map(|i| self.0.iter().filter(|&&p| p > i).count() as u32)
            .collect();
        // Counts below max_part are never zero for a valid partition.
        Partition(conjugated)
    }
}
