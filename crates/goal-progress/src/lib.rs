//! Goal Progress
//!
//! Derived, presentation-ready values computed on demand from goals:
//!
//! - [`percent_complete`]: the goal's stored percentage
//! - [`completion_split`]: `Completed` / `Remaining` pie series
//! - [`trend_series`]: illustrative progress over labeled periods
//! - [`summarize`]: totals and mean across a collection
//!
//! # Example
//!
//! ```rust
//! use goal_model::{Goal, GoalId, Progress};
//! use goal_progress::{ChartSubject, ProgressAggregator};
//!
//! let goal = Goal::new(GoalId::from(1), "Read", Progress::clamped(80));
//! let aggregator = ProgressAggregator::new();
//!
//! let series = aggregator.chart_series(ChartSubject::Goal(&goal));
//! assert_eq!(series.pairs(), vec![("Completed", 80), ("Remaining", 20)]);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod aggregate;
mod series;

// Re-exports
pub use aggregate::{
    completion_split, percent_complete, summarize, trend_series, ChartSubject,
    ProgressAggregator, ProgressSummary,
};
pub use series::{default_trend, ChartPoint, ChartSeries, COMPLETED_LABEL, REMAINING_LABEL};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
