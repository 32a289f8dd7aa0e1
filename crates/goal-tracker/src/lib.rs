//! Goal Tracker
//!
//! The session object a presentation layer talks to:
//! - Validates form submissions and stores the resulting goals
//! - Lists goals in creation order
//! - Associates free-standing comments with their goals
//! - Derives percentages, chart series and render-ready cards
//!
//! # Example
//!
//! ```rust
//! use goal_tracker::{GoalTracker, TrackerConfig};
//! use goal_model::IdStrategy;
//!
//! let config = TrackerConfig::new().with_id_strategy(IdStrategy::Sequential);
//! let mut tracker = GoalTracker::new(config);
//!
//! tracker.submit_form("Read", "150", "a, b ,, c", "x,, y").unwrap();
//! assert!(tracker.submit_form("   ", "10", "", "").is_err());
//!
//! let goals = tracker.list_goals();
//! assert_eq!(goals.len(), 1);
//! assert_eq!(tracker.percent_complete(goals[0]), 100);
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
mod samples;
pub mod tracker;
pub mod view;

// Re-exports for convenience
pub use config::{TrackerConfig, DEFAULT_AUTHOR};
pub use error::{ConfigError, TrackerError};
pub use tracker::GoalTracker;
pub use view::{CardComment, Dashboard, GoalCard};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the goal tracker
    pub use crate::{Dashboard, GoalCard, GoalTracker, TrackerConfig, TrackerError};
    pub use goal_intake::{ProgressPolicy, Submission};
    pub use goal_model::{Comment, CommentMode, Goal, GoalId, IdStrategy, Progress};
    pub use goal_progress::{ChartSeries, ChartSubject};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
