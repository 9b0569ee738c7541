/// Convenience result type used across Ferryte.
pub type FerryteResult<T> = Result<T, FerryteError>;

/// Top-level error taxonomy used by diagram and transform APIs.
///
/// Every variant is a caller-recoverable precondition violation raised
/// synchronously at the point of the offending call; a failed transform
/// leaves its diagram untouched.
#[derive(thiserror::Error, Debug)]
pub enum FerryteError {
    /// A supplied partition sequence is empty or contains a zero part.
    #[error("invalid partition: {0}")]
    InvalidPartition(String),

    /// Diagonal continuity was violated while computing layers: a row past
    /// the end of the diagonal is wider than an earlier, shorter row.
    #[error("fragmented layer: row {later_row} is wider than row {row} past the diagonal")]
    FragmentedLayer {
        /// Row whose length first fell short of its index.
        row: usize,
        /// Later row that is wider than `row`.
        later_row: usize,
    },

    /// An operation was requested that its input cannot support.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Franklin involution was requested on a diagram not in canonical
    /// (non-increasing) form.
    #[error("unsorted diagram: {0}")]
    UnsortedDiagram(String),
}

impl FerryteError {
    /// Build a [`FerryteError::InvalidPartition`] value.
    pub fn invalid_partition(msg: impl Into<String>) -> Self {
        Self::InvalidPartition(msg.into())
    }

    /// Build a [`FerryteError::FragmentedLayer`] value.
    pub fn fragmented(row: usize, later_row: usize) -> Self {
        Self::FragmentedLayer { row, later_row }
    }

    /// Build a [`FerryteError::InvalidOperation`] value.
    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }

    /// Build a [`FerryteError::UnsortedDiagram`] value.
    pub fn unsorted(msg: impl Into<String>) -> Self {
        Self::UnsortedDiagram(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
