//! Error type returned by fallible list operations.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqListError {
    /// An argument was rejected before the list was touched.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },

    /// A positional access fell outside `0..len`.
    #[error("index: {index}, size: {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, SeqListError>;
