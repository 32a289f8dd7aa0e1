//! Goal Store
//!
//! In-memory, single-writer storage for goals and their comments.
//!
//! - [`GoalStore`]: append-only goals in creation order
//! - [`CommentBook`]: free-standing comments matched to goals by id
//! - [`milestones_of`]: identity view of a goal's milestones
//!
//! # Example
//!
//! ```rust
//! use goal_model::{Comment, Goal, GoalId, Progress};
//! use goal_store::{CommentBook, GoalStore};
//!
//! let mut store = GoalStore::new();
//! store.add(Goal::new(GoalId::from(1), "Read", Progress::clamped(40))).unwrap();
//!
//! let mut book = CommentBook::new();
//! book.add(Comment::new(GoalId::from(1), "Alice", "Nice"));
//! book.add(Comment::new(GoalId::from(9), "Bob", "Lost"));
//!
//! assert_eq!(book.comments_for(&GoalId::from(1)).len(), 1);
//! assert_eq!(book.dangling(&store).len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod comments;
mod store;

// Re-exports
pub use comments::{milestones_of, CommentBook};
pub use store::{GoalStore, StoreError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
