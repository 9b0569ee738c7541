use crate::foundation::core::{CellId, GridPos, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Which transform produced a plan.
pub enum TransformKind {
    /// Transpose across the main diagonal.
    Conjugate,
    /// Rearrange parts into canonical (non-increasing) order.
    SortParts,
    /// Collapse layers into rows (hook decomposition).
    Convolve,
    /// Franklin's involution.
    FranklinInvolute,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Logical sub-step of a transform; a renderer animates stages in order.
pub enum StageKind {
    /// Every off-diagonal cell mirrors across the main diagonal.
    Transpose,
    /// Displaced parts move vertically into canonical order.
    Reorder,
    /// One simultaneous step of a layer's cells along the hook order; tail
    /// cells extend one column to the right.
    LayerShift {
        /// Layer being collapsed.
        layer: usize,
        /// 1-based step within that layer's collapse.
        step: usize,
    },
    /// Staggered rows shift left into a left-justified diagram.
    Justify,
    /// The bottom part climbs onto the ends of the leading parts.
    BottomToDiagonal,
    /// The staircase diagonal drops down to form a new bottom part.
    DiagonalToBottom,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A single cell's motion: old and new position, in grid and world space.
pub struct CellMove {
    /// Cell being moved.
    pub cell: CellId,
    /// Grid position before the stage.
    pub from: GridPos,
    /// Grid position after the stage.
    pub to: GridPos,
    /// World-space center before the stage.
    pub from_center: Point,
    /// World-space center after the stage.
    pub to_center: Point,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// An ordered group of moves a renderer may animate as one phase.
pub struct MoveStage {
    /// Which sub-step this stage realizes.
    pub kind: StageKind,
    /// Moves of this stage; simultaneous within the stage.
    pub moves: Vec<CellMove>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Ordered per-cell motion instructions emitted by one transform.
///
/// Stages reflect the transform's logical sub-steps (for convolution, every
/// per-layer shift step precedes the final justification), so a renderer
/// can stage sequential animation phases without re-deriving the algorithm.
/// Cells that do not move emit no entry; a benign no-op call yields an
/// empty plan with `changed == false`.
pub struct MovePlan {
    /// Transform that produced this plan.
    pub transform: TransformKind,
    /// `false` for the two benign no-op cases (already-sorted sort,
    /// fixed-point Franklin involution) and for motionless transposes.
    pub changed: bool,
    /// Ordered sub-steps.
    pub stages: Vec<MoveStage>,
}

impl MovePlan {
    pub(crate) fn no_op(transform: TransformKind) -> Self {
        Self {
            transform,
            changed: false,
            stages: Vec::new(),
        }
    }

    pub(crate) fn staged(transform: TransformKind, stages: Vec<MoveStage>) -> Self {
        let stages: Vec<MoveStage> = stages
            .into_iter()
            .filter(|stage| !stage.moves.is_empty())
            .collect();
        let changed = !stages.is_empty();
        Self {
            transform,
            changed,
            stages,
        }
    }

    /// All moves across all stages, in plan order.
    pub fn moves(&self) -> impl Iterator<Item = &CellMove> {
        self.stages.iter().flat_map(|stage| stage.moves.iter())
    }

    /// Total number of moves.
    pub fn move_count(&self) -> usize {
        self.stages.iter().map(|stage| stage.moves.len()).sum()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/moves.rs"]
mod tests;
