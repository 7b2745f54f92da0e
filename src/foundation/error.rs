/// Convenience result type used across the engine.
pub type FlipbookResult<T> = Result<T, FlipbookError>;

/// Top-level error taxonomy returned by engine APIs.
///
/// Every variant is recoverable at the call boundary: a failed operation
/// leaves prior state untouched and the session remains usable.
#[derive(thiserror::Error, Debug)]
pub enum FlipbookError {
    /// A frame index past the end of the store.
    #[error("frame index {index} out of range (store holds {len} frames)")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Store length at the time of the call.
        len: usize,
    },

    /// Tweening was requested on a store with fewer than two frames.
    #[error("tweening requires at least two frames (store holds {len})")]
    InsufficientFrames {
        /// Store length at the time of the call.
        len: usize,
    },

    /// Tween endpoints are equal or outside the store.
    #[error("invalid tween range: {0}")]
    InvalidRange(String),

    /// Archive is structurally present but internally inconsistent.
    #[error("corrupt archive: {0}")]
    CorruptArchive(String),

    /// Input bytes are not any known project representation.
    #[error("unrecognized project format: {0}")]
    UnrecognizedFormat(String),

    /// Invalid user-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlipbookError {
    /// Build an [`FlipbookError::OutOfRange`] value.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    /// Build an [`FlipbookError::InvalidRange`] value.
    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange(msg.into())
    }

    /// Build an [`FlipbookError::CorruptArchive`] value.
    pub fn corrupt_archive(msg: impl Into<String>) -> Self {
        Self::CorruptArchive(msg.into())
    }

    /// Build an [`FlipbookError::UnrecognizedFormat`] value.
    pub fn unrecognized_format(msg: impl Into<String>) -> Self {
        Self::UnrecognizedFormat(msg.into())
    }

    /// Build an [`FlipbookError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
