//! Error types for the goal tracker
//!
//! Wraps the per-crate errors so callers handle one type:
//! - submission validation failures
//! - store invariant violations
//! - configuration loading errors

use goal_intake::ValidationError;
use goal_model::GoalId;
use goal_store::StoreError;

/// Main tracker error type
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// Submission failed validation; nothing was stored
    #[error("invalid submission: {0}")]
    Validation(#[from] ValidationError),

    /// Store rejected the goal
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// No goal with this id
    #[error("goal not found: {0}")]
    UnknownGoal(GoalId),
}

impl TrackerError {
    /// Whether the user can fix this by editing the form
    #[inline]
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path as given
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// TOML could not be decoded
    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field failed validation
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_error_display() {
        let err = TrackerError::from(ValidationError::EmptyTitle);
        assert!(err.to_string().starts_with("invalid submission"));
        assert!(err.is_user_error());

        let err = TrackerError::UnknownGoal(GoalId::from(4));
        assert_eq!(err.to_string(), "goal not found: 4");
        assert!(!err.is_user_error());
    }

    #[test]
    fn store_error_converts() {
        let err: TrackerError = StoreError::DuplicateId(GoalId::from(1)).into();
        assert!(matches!(err, TrackerError::Store(_)));
    }
}
