//! Goal Model
//!
//! Closed record types shared by every goal-tracker crate.
//!
//! # Overview
//!
//! - **GoalId**: canonical string identifier with a single normalization point
//! - **IdGenerator**: sequential or ULID identifier sources
//! - **Goal**: title, optional description, bounded progress, milestones, comments
//! - **Comment**: free-standing annotation linked to a goal by id
//! - **Progress**: percentage that cannot leave 0..=100
//!
//! # Example
//!
//! ```rust
//! use goal_model::{Goal, GoalId, IdGenerator, Progress, SequentialIds};
//!
//! let mut ids = SequentialIds::new();
//! let goal = Goal::new(ids.next_id(), "Read a book", Progress::clamped(150))
//!     .with_milestones(["Chapter 1", "Chapter 2"]);
//!
//! assert_eq!(goal.id, GoalId::from(1));
//! assert_eq!(goal.progress.value(), 100);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod goal;
pub mod id;

// Re-exports
pub use error::{IdError, ProgressError};
pub use goal::{Comment, CommentMode, Goal, Progress};
pub use id::{GoalId, IdGenerator, IdStrategy, SequentialIds, UlidIds};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
