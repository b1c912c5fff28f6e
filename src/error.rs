/// Errors surfaced by the percolation engine and its disjoint-set backing.
///
/// Both kinds are raised synchronously at the offending call and leave the
/// structure in its previous valid state.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercolationError {
    /// Construction was asked for an empty grid or element universe.
    #[error("size must be at least 1, got {0}")]
    InvalidSize(usize),

    /// A coordinate or element label fell outside its valid domain.
    #[error("index {index} out of range (limit {limit})")]
    OutOfRange { index: usize, limit: usize },
}
