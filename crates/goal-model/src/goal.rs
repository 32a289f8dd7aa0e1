//! Goal, comment and progress records

use crate::error::ProgressError;
use crate::id::GoalId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Percent complete, always within 0..=100
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "u8")]
pub struct Progress(u8);

impl Progress {
    /// Lower bound
    pub const MIN: Progress = Progress(0);
    /// Upper bound
    pub const MAX: Progress = Progress(100);

    /// Checked construction
    ///
    /// # Errors
    /// [`ProgressError::OutOfRange`] if `value` is outside 0..=100.
    pub fn new(value: i64) -> Result<Self, ProgressError> {
        match u8::try_from(value) {
            Ok(v) if v <= 100 => Ok(Self(v)),
            _ => Err(ProgressError::OutOfRange(value)),
        }
    }

    /// Saturating construction: values below 0 become 0, above 100 become 100
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        // 0..=100 always fits in u8
        Self(u8::try_from(value.clamp(0, 100)).unwrap_or(100))
    }

    /// Percentage as an integer
    #[inline]
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Percentage still outstanding
    #[inline]
    #[must_use]
    pub fn remaining(self) -> u8 {
        100 - self.0
    }

    /// Whether the goal is finished
    #[inline]
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 == 100
    }
}

impl TryFrom<i64> for Progress {
    type Error = ProgressError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Progress> for u8 {
    fn from(p: Progress) -> Self {
        p.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// A tracked objective
///
/// Milestones and inline comments keep insertion order; nothing in the
/// workspace re-sorts them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique, immutable identifier
    pub id: GoalId,
    /// Non-empty display title
    #[serde(deserialize_with = "non_blank")]
    pub title: String,
    /// Optional longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Percent complete
    pub progress: Progress,
    /// Chronological milestone labels
    #[serde(default)]
    pub milestones: Vec<String>,
    /// Inline comments (simple comment mode)
    #[serde(default)]
    pub comments: Vec<String>,
}

impl Goal {
    /// Create goal with no milestones or comments
    #[inline]
    #[must_use]
    pub fn new(id: GoalId, title: impl Into<String>, progress: Progress) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            progress,
            milestones: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// With milestones
    #[inline]
    #[must_use]
    pub fn with_milestones<I, S>(mut self, milestones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.milestones = milestones.into_iter().map(Into::into).collect();
        self
    }

    /// With inline comments
    #[inline]
    #[must_use]
    pub fn with_comments<I, S>(mut self, comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comments = comments.into_iter().map(Into::into).collect();
        self
    }
}

fn non_blank<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let title = String::deserialize(deserializer)?;
    if title.trim().is_empty() {
        return Err(serde::de::Error::custom("goal title must not be empty"));
    }
    Ok(title)
}

/// Free-standing comment linked to one goal by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Owning goal; may be stale
    pub goal_id: GoalId,
    /// Display name of the author
    pub author: String,
    /// Comment body
    pub text: String,
}

impl Comment {
    /// Create comment
    #[inline]
    #[must_use]
    pub fn new(goal_id: GoalId, author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            goal_id,
            author: author.into(),
            text: text.into(),
        }
    }
}

/// Where submitted comments are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentMode {
    /// Stored inline on [`Goal::comments`]
    #[default]
    Simple,
    /// Stored as [`Comment`] records keyed by goal id
    Extended,
}
