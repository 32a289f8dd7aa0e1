//! Goal Intake
//!
//! Validates raw form input and turns it into a [`Goal`](goal_model::Goal).
//!
//! # Example
//!
//! ```rust
//! use goal_intake::parse_submission;
//! use goal_model::SequentialIds;
//!
//! let mut ids = SequentialIds::new();
//! let goal = parse_submission("Read", "40", "a, b ,, c", "x,, y", &mut ids).unwrap();
//!
//! assert_eq!(goal.milestones, vec!["a", "b", "c"]);
//! assert_eq!(goal.comments, vec!["x", "y"]);
//! assert_eq!(goal.progress.value(), 40);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod parser;

// Re-exports
pub use error::ValidationError;
pub use parser::{
    parse_progress, parse_submission, split_list, ProgressPolicy, Submission, SubmissionParser,
    LIST_DELIMITER,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
