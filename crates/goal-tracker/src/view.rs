//! Render-ready snapshots handed to the presentation layer

use goal_model::{Comment, Goal, GoalId};
use goal_progress::{ChartSeries, ProgressSummary};
use serde::Serialize;

/// One line in a goal's comment list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardComment {
    /// Author, if the comment was linked rather than inline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Comment body
    pub text: String,
}

impl CardComment {
    pub(crate) fn inline(text: &str) -> Self {
        Self {
            author: None,
            text: text.to_string(),
        }
    }

    pub(crate) fn linked(comment: &Comment) -> Self {
        Self {
            author: Some(comment.author.clone()),
            text: comment.text.clone(),
        }
    }
}

/// Everything needed to draw one goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalCard {
    /// Goal id
    pub id: GoalId,
    /// Title
    pub title: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Percent complete
    pub percent: u8,
    /// Milestones in order
    pub milestones: Vec<String>,
    /// Inline comments followed by linked comments
    pub comments: Vec<CardComment>,
    /// Completed / remaining split
    pub chart: ChartSeries,
}

impl GoalCard {
    pub(crate) fn build(goal: &Goal, linked: &[&Comment], percent: u8, chart: ChartSeries) -> Self {
        let comments = goal
            .comments
            .iter()
            .map(|text| CardComment::inline(text))
            .chain(linked.iter().map(|c| CardComment::linked(c)))
            .collect();
        Self {
            id: goal.id.clone(),
            title: goal.title.clone(),
            description: goal.description.clone(),
            percent,
            milestones: goal.milestones.clone(),
            comments,
            chart,
        }
    }
}

/// Snapshot of every goal plus collection charts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    /// Cards in creation order
    pub goals: Vec<GoalCard>,
    /// Collection trend
    pub trend: ChartSeries,
    /// Collection counters
    pub summary: ProgressSummary,
}
