//! Error types for the goal model

/// Identifier normalization errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// Token is empty after trimming
    #[error("goal id must not be empty")]
    Empty,
}

/// Progress construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    /// Value lies outside 0..=100
    #[error("progress {0} is outside 0..=100")]
    OutOfRange(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert!(IdError::Empty.to_string().contains("empty"));
        assert_eq!(
            ProgressError::OutOfRange(150).to_string(),
            "progress 150 is outside 0..=100"
        );
    }
}
