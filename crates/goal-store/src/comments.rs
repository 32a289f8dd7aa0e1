//! Milestones and comment association
//!
//! Comments live in a flat, declaration-ordered [`CommentBook`] and are
//! matched to goals by exact [`GoalId`] equality. A comment whose goal does
//! not exist is hidden from every goal, never removed.

use crate::store::GoalStore;
use goal_model::{Comment, Goal, GoalId};

/// Milestones of a goal, unchanged
#[inline]
#[must_use]
pub fn milestones_of(goal: &Goal) -> &[String] {
    &goal.milestones
}

/// Global comment collection
#[derive(Debug, Clone, Default)]
pub struct CommentBook {
    comments: Vec<Comment>,
}

impl CommentBook {
    /// Create empty book
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a comment
    ///
    /// The goal id is not checked; dangling references are tolerated.
    pub fn add(&mut self, comment: Comment) {
        tracing::trace!(goal_id = %comment.goal_id, author = %comment.author, "comment recorded");
        self.comments.push(comment);
    }

    /// Comments attached to `goal_id`, in declaration order
    #[must_use]
    pub fn comments_for(&self, goal_id: &GoalId) -> Vec<&Comment> {
        self.comments
            .iter()
            .filter(|c| &c.goal_id == goal_id)
            .collect()
    }

    /// Comments whose goal is missing from `store`
    #[must_use]
    pub fn dangling<'a>(&'a self, store: &GoalStore) -> Vec<&'a Comment> {
        let dangling: Vec<&Comment> = self
            .comments
            .iter()
            .filter(|c| !store.contains(&c.goal_id))
            .collect();
        if !dangling.is_empty() {
            tracing::warn!(count = dangling.len(), "comments reference unknown goals");
        }
        dangling
    }

    /// Every comment in declaration order
    #[inline]
    #[must_use]
    pub fn all(&self) -> &[Comment] {
        &self.comments
    }

    /// Number of comments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Check if book is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

impl Extend<Comment> for CommentBook {
    fn extend<T: IntoIterator<Item = Comment>>(&mut self, iter: T) {
        for comment in iter {
            self.add(comment);
        }
    }
}

impl FromIterator<Comment> for CommentBook {
    fn from_iter<T: IntoIterator<Item = Comment>>(iter: T) -> Self {
        let mut book = Self::new();
        book.extend(iter);
        book
    }
}
