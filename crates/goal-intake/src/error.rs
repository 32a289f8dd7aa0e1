//! Submission validation errors
//!
//! Every variant blocks creation of the goal. None of them is fatal, and the
//! goal store is never touched when one is returned.

/// Validation errors for a goal submission
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Title is empty or whitespace only
    #[error("goal title must not be empty")]
    EmptyTitle,

    /// Progress is not an integer
    #[error("progress must be a whole number, got {raw:?}")]
    InvalidProgress {
        /// Input as typed
        raw: String,
    },

    /// Progress is an integer outside 0..=100
    ///
    /// Only produced under [`ProgressPolicy::Reject`](crate::ProgressPolicy::Reject);
    /// the default policy clamps instead.
    #[error("progress {value} is outside 0..=100")]
    OutOfRangeProgress {
        /// Parsed value, saturated to the `i64` range
        value: i64,
    },
}

impl ValidationError {
    /// Name of the form field the error belongs to
    #[inline]
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "title",
            Self::InvalidProgress { .. } | Self::OutOfRangeProgress { .. } => "progress",
        }
    }
}
