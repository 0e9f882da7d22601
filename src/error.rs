use thiserror::Error;

/// Errors raised by the heap and the search entry points.
///
/// Absence of a path is not an error: searches report it as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// [MinHeap::pop](crate::heap::MinHeap::pop) was called on an empty heap.
    #[error("heap is empty, unable to pop")]
    EmptyHeap,

    /// Random access into the heap outside of `[0, len)`.
    #[error("index {index} out of bounds for heap of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Grid dimensions, endpoints or blockers that violate the search preconditions.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
