//! Progress aggregation
//!
//! Every function here is a pure read of its inputs. Nothing is cached and
//! nothing is written back to the goals.

use crate::series::{default_trend, ChartPoint, ChartSeries, COMPLETED_LABEL, REMAINING_LABEL};
use goal_model::{Goal, Progress};
use serde::{Deserialize, Serialize};

/// Completion percentage of a goal
///
/// Progress is stored directly on the goal; milestones do not contribute.
#[inline]
#[must_use]
pub fn percent_complete(goal: &Goal) -> u8 {
    goal.progress.value()
}

/// Two-category split: completed vs remaining, summing to 100
#[must_use]
pub fn completion_split(goal: &Goal) -> ChartSeries {
    let progress = goal.progress;
    ChartSeries::from(vec![
        ChartPoint::new(COMPLETED_LABEL, progress),
        ChartPoint::new(REMAINING_LABEL, Progress::clamped(i64::from(progress.remaining()))),
    ])
}

/// Trend series over the given labeled periods
#[must_use]
pub fn trend_series(points: &[ChartPoint]) -> ChartSeries {
    points.iter().cloned().collect()
}

/// What a chart is drawn for
#[derive(Debug, Clone, Copy)]
pub enum ChartSubject<'a> {
    /// A single goal: completion split
    Goal(&'a Goal),
    /// A collection of goals: trend over periods
    Collection(&'a [&'a Goal]),
}

/// Collection-level counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    /// Number of goals
    pub total: usize,
    /// Goals at 100%
    pub completed: usize,
    /// Mean progress, rounded down; 0 for no goals
    pub average: u8,
}

/// Summarize a collection of goals
#[must_use]
pub fn summarize(goals: &[&Goal]) -> ProgressSummary {
    if goals.is_empty() {
        return ProgressSummary::default();
    }
    let sum: u64 = goals.iter().map(|g| u64::from(percent_complete(g))).sum();
    let completed = goals.iter().filter(|g| g.progress.is_complete()).count();
    let mean = sum / goals.len() as u64;
    ProgressSummary {
        total: goals.len(),
        completed,
        average: u8::try_from(mean).unwrap_or(100),
    }
}

/// Progress aggregator with a configurable trend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressAggregator {
    trend: Vec<ChartPoint>,
}

impl ProgressAggregator {
    /// Aggregator using [`default_trend`]
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With custom trend points
    #[inline]
    #[must_use]
    pub fn with_trend(mut self, trend: Vec<ChartPoint>) -> Self {
        self.trend = trend;
        self
    }

    /// Configured trend points
    #[inline]
    #[must_use]
    pub fn trend(&self) -> &[ChartPoint] {
        &self.trend
    }

    /// Completion percentage of a goal
    #[inline]
    #[must_use]
    pub fn percent_complete(&self, goal: &Goal) -> u8 {
        percent_complete(goal)
    }

    /// Chart-ready series for a goal or a collection
    ///
    /// A goal yields its completion split; a collection yields the
    /// configured trend, since no historical data is recorded.
    #[must_use]
    pub fn chart_series(&self, subject: ChartSubject<'_>) -> ChartSeries {
        match subject {
            ChartSubject::Goal(goal) => completion_split(goal),
            ChartSubject::Collection(_) => trend_series(&self.trend),
        }
    }

    /// Summarize a collection of goals
    #[inline]
    #[must_use]
    pub fn summarize(&self, goals: &[&Goal]) -> ProgressSummary {
        summarize(goals)
    }
}

impl Default for ProgressAggregator {
    fn default() -> Self {
        Self {
            trend: default_trend(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goal_model::GoalId;
    use proptest::prelude::*;

    fn goal(progress: i64) -> Goal {
        Goal::new(GoalId::from(1), "g", Progress::clamped(progress))
    }

    #[test]
    fn percent_complete_reads_stored_progress() {
        let g = goal(80).with_milestones(["a", "b", "c"]);
        assert_eq!(percent_complete(&g), 80);
    }

    #[test]
    fn completion_split_for_eighty() {
        let series = completion_split(&goal(80));
        assert_eq!(series.pairs(), vec![("Completed", 80), ("Remaining", 20)]);
        assert_eq!(series.total(), 100);
    }

    #[test]
    fn completion_split_edges() {
        assert_eq!(
            completion_split(&goal(0)).pairs(),
            vec![("Completed", 0), ("Remaining", 100)]
        );
        assert_eq!(
            completion_split(&goal(100)).pairs(),
            vec![("Completed", 100), ("Remaining", 0)]
        );
    }

    #[test]
    fn collection_uses_configured_trend() {
        let custom = vec![ChartPoint::new("Jan", Progress::clamped(10))];
        let aggregator = ProgressAggregator::new().with_trend(custom.clone());
        let g = goal(50);
        let goals = [&g];

        let series = aggregator.chart_series(ChartSubject::Collection(&goals));
        assert_eq!(series.points(), custom.as_slice());
    }

    #[test]
    fn summarize_rounds_down() {
        let (a, b, c) = (goal(100), goal(40), goal(61));
        let summary = summarize(&[&a, &b, &c]);
        assert_eq!(
            summary,
            ProgressSummary {
                total: 3,
                completed: 1,
                average: 67,
            }
        );
        assert_eq!(summarize(&[]), ProgressSummary::default());
    }

    proptest! {
        #[test]
        fn prop_split_sums_to_hundred(p in 0i64..=100) {
            let g = goal(p);
            let series = completion_split(&g);
            prop_assert_eq!(series.total(), 100);
            prop_assert_eq!(series.points()[0].value.value(), percent_complete(&g));
        }

        #[test]
        fn prop_reads_are_idempotent(p in 0i64..=100) {
            let g = goal(p);
            let aggregator = ProgressAggregator::new();
            let goals = [&g];
            prop_assert_eq!(aggregator.percent_complete(&g), aggregator.percent_complete(&g));
            prop_assert_eq!(
                aggregator.chart_series(ChartSubject::Collection(&goals)),
                aggregator.chart_series(ChartSubject::Collection(&goals))
            );
        }
    }
}
