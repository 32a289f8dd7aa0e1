//! Submission parser
//!
//! Turns raw form fields into a validated [`Goal`]:
//! - title is trimmed and must be non-empty
//! - progress must be an integer; out-of-range integers follow [`ProgressPolicy`]
//! - milestone and comment fields are comma-separated lists
//!
//! Validation runs to completion before an id is minted, so a rejected
//! submission never consumes an identifier.

use crate::error::ValidationError;
use goal_model::{Goal, IdGenerator, Progress};
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;

/// List delimiter for milestone and comment fields
pub const LIST_DELIMITER: char = ',';

/// What to do with integer progress outside 0..=100
///
/// Clamping is a UX choice for forgiving form handling, not a requirement of
/// the data model. `Reject` is available for callers that prefer strictness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressPolicy {
    /// Saturate to the nearest bound (recovered condition, not an error)
    #[default]
    Clamp,
    /// Fail with [`ValidationError::OutOfRangeProgress`]
    Reject,
}

/// Raw form fields exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Submission {
    /// Goal title
    pub title: String,
    /// Progress percentage
    pub progress: String,
    /// Comma-separated milestones
    pub milestones: String,
    /// Comma-separated comments
    pub comments: String,
    /// Optional description
    pub description: Option<String>,
}

impl Submission {
    /// Create submission with title and progress
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>, progress: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            progress: progress.into(),
            ..Self::default()
        }
    }

    /// With milestones field
    #[inline]
    #[must_use]
    pub fn with_milestones(mut self, raw: impl Into<String>) -> Self {
        self.milestones = raw.into();
        self
    }

    /// With comments field
    #[inline]
    #[must_use]
    pub fn with_comments(mut self, raw: impl Into<String>) -> Self {
        self.comments = raw.into();
        self
    }

    /// With description field
    #[inline]
    #[must_use]
    pub fn with_description(mut self, raw: impl Into<String>) -> Self {
        self.description = Some(raw.into());
        self
    }
}

/// Validating parser for goal submissions
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmissionParser {
    policy: ProgressPolicy,
}

impl SubmissionParser {
    /// Parser with the default clamp policy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With progress policy
    #[inline]
    #[must_use]
    pub fn with_policy(mut self, policy: ProgressPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Active progress policy
    #[inline]
    #[must_use]
    pub fn policy(&self) -> ProgressPolicy {
        self.policy
    }

    /// Validate `submission` and mint a goal
    ///
    /// # Errors
    /// See [`ValidationError`]. `ids` is not advanced on error.
    pub fn parse(
        &self,
        submission: &Submission,
        ids: &mut dyn IdGenerator,
    ) -> Result<Goal, ValidationError> {
        let title = submission.title.trim();
        if title.is_empty() {
            tracing::warn!("submission rejected: empty title");
            return Err(ValidationError::EmptyTitle);
        }

        let progress = parse_progress(&submission.progress, self.policy).map_err(|e| {
            tracing::warn!(error = %e, "submission rejected");
            e
        })?;

        let milestones = split_list(&submission.milestones);
        let comments = split_list(&submission.comments);
        let description = submission
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        let id = ids.next_id();
        tracing::debug!(
            goal_id = %id,
            %progress,
            milestones = milestones.len(),
            comments = comments.len(),
            "submission parsed"
        );

        Ok(Goal {
            id,
            title: title.to_string(),
            description,
            progress,
            milestones,
            comments,
        })
    }
}

/// Parse a submission with the default clamp policy
///
/// # Errors
/// [`ValidationError::EmptyTitle`] or [`ValidationError::InvalidProgress`].
pub fn parse_submission(
    title: &str,
    progress_raw: &str,
    milestones_raw: &str,
    comments_raw: &str,
    ids: &mut dyn IdGenerator,
) -> Result<Goal, ValidationError> {
    let submission = Submission::new(title, progress_raw)
        .with_milestones(milestones_raw)
        .with_comments(comments_raw);
    SubmissionParser::new().parse(&submission, ids)
}

/// Parse progress input under `policy`
///
/// Integers too large for `i64` are treated as saturated `i64` values, so
/// they clamp like any other out-of-range number.
///
/// # Errors
/// [`ValidationError::InvalidProgress`] for non-integer input,
/// [`ValidationError::OutOfRangeProgress`] under [`ProgressPolicy::Reject`].
pub fn parse_progress(raw: &str, policy: ProgressPolicy) -> Result<Progress, ValidationError> {
    let trimmed = raw.trim();
    let value = match trimmed.parse::<i64>() {
        Ok(v) => v,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => {
                return Err(ValidationError::InvalidProgress {
                    raw: raw.to_string(),
                })
            }
        },
    };

    match policy {
        ProgressPolicy::Clamp => {
            let progress = Progress::clamped(value);
            if i64::from(progress.value()) != value {
                tracing::debug!(input = value, clamped = progress.value(), "progress clamped");
            }
            Ok(progress)
        }
        ProgressPolicy::Reject => {
            Progress::new(value).map_err(|_| ValidationError::OutOfRangeProgress { value })
        }
    }
}

/// Split a comma-separated field into trimmed, non-empty tokens
#[must_use]
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(LIST_DELIMITER)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
