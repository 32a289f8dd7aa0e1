//! Goal tracker session
//!
//! Owns the goal store, the comment book and the id generator for one user
//! session. All mutations go through `&mut self`, so there is exactly one
//! writer; reads never cache and never mutate.

use crate::config::TrackerConfig;
use crate::error::TrackerError;
use crate::samples;
use crate::view::{Dashboard, GoalCard};
use goal_intake::{Submission, SubmissionParser};
use goal_model::{Comment, CommentMode, Goal, GoalId, IdGenerator};
use goal_progress::{ChartSeries, ChartSubject, ProgressAggregator, ProgressSummary};
use goal_store::{milestones_of, CommentBook, GoalStore};

/// Single-user goal tracking session
#[derive(Debug)]
pub struct GoalTracker {
    /// Configuration
    config: TrackerConfig,
    /// Goals in creation order
    store: GoalStore,
    /// Free-standing comments
    comments: CommentBook,
    /// Identifier source
    ids: Box<dyn IdGenerator + Send>,
    /// Submission validation
    parser: SubmissionParser,
    /// Derived values
    aggregator: ProgressAggregator,
}

impl GoalTracker {
    /// Create empty session
    #[must_use]
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            ids: config.id_strategy.generator(),
            parser: SubmissionParser::new().with_policy(config.progress_policy),
            aggregator: ProgressAggregator::new().with_trend(config.trend.clone()),
            store: GoalStore::new(),
            comments: CommentBook::new(),
            config,
        }
    }

    /// Replace the id generator
    #[inline]
    #[must_use]
    pub fn with_id_generator(mut self, ids: Box<dyn IdGenerator + Send>) -> Self {
        self.ids = ids;
        self
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Validate a form submission and store the resulting goal
    ///
    /// In extended comment mode the submitted comments are moved into the
    /// comment book under the configured default author.
    ///
    /// # Errors
    /// [`TrackerError::Validation`] if the form is invalid. The session is
    /// unchanged on any error.
    pub fn submit(&mut self, submission: &Submission) -> Result<&Goal, TrackerError> {
        let mut goal = self.parser.parse(submission, self.ids.as_mut())?;

        let linked = match self.config.comment_mode {
            CommentMode::Simple => Vec::new(),
            CommentMode::Extended => std::mem::take(&mut goal.comments),
        };
        if self.store.contains(&goal.id) {
            return Err(goal_store::StoreError::DuplicateId(goal.id).into());
        }
        for text in linked {
            self.comments.add(Comment::new(
                goal.id.clone(),
                self.config.default_author.clone(),
                text,
            ));
        }
        self.add_goal(goal)
    }

    /// Submit raw form fields
    ///
    /// # Errors
    /// See [`GoalTracker::submit`].
    pub fn submit_form(
        &mut self,
        title: &str,
        progress: &str,
        milestones: &str,
        comments: &str,
    ) -> Result<&Goal, TrackerError> {
        let submission = Submission::new(title, progress)
            .with_milestones(milestones)
            .with_comments(comments);
        self.submit(&submission)
    }

    /// Append an already-validated goal
    ///
    /// # Errors
    /// [`TrackerError::Store`] if the id is already in use or the title is
    /// blank.
    pub fn add_goal(&mut self, goal: Goal) -> Result<&Goal, TrackerError> {
        let stored = self.store.add(goal)?;
        tracing::info!(
            goal_id = %stored.id,
            title = %stored.title,
            progress = %stored.progress,
            "goal added"
        );
        Ok(stored)
    }

    /// Record a free-standing comment
    ///
    /// The goal does not need to exist; unknown ids are hidden on read.
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.add(comment);
    }

    /// All goals in creation order
    #[must_use]
    pub fn list_goals(&self) -> Vec<&Goal> {
        self.store.list()
    }

    /// Lookup by id
    #[inline]
    #[must_use]
    pub fn goal(&self, id: &GoalId) -> Option<&Goal> {
        self.store.get(id)
    }

    /// Number of goals
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if no goals exist
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Comments linked to `goal_id`, in declaration order
    ///
    /// Empty when no goal has this id, even if comments reference it.
    #[must_use]
    pub fn comments_for(&self, goal_id: &GoalId) -> Vec<&Comment> {
        if !self.store.contains(goal_id) {
            return Vec::new();
        }
        self.comments.comments_for(goal_id)
    }

    /// Comments whose goal does not exist
    #[must_use]
    pub fn dangling_comments(&self) -> Vec<&Comment> {
        self.comments.dangling(&self.store)
    }

    /// Milestones of a goal
    #[inline]
    #[must_use]
    pub fn milestones_of<'g>(&self, goal: &'g Goal) -> &'g [String] {
        milestones_of(goal)
    }

    /// Completion percentage of a goal
    #[inline]
    #[must_use]
    pub fn percent_complete(&self, goal: &Goal) -> u8 {
        self.aggregator.percent_complete(goal)
    }

    /// Chart-ready series for a goal or a collection
    #[inline]
    #[must_use]
    pub fn chart_series(&self, subject: ChartSubject<'_>) -> ChartSeries {
        self.aggregator.chart_series(subject)
    }

    /// Trend series over every goal
    #[must_use]
    pub fn collection_chart(&self) -> ChartSeries {
        let goals = self.store.list();
        self.chart_series(ChartSubject::Collection(&goals))
    }

    /// Counters over every goal
    #[must_use]
    pub fn summary(&self) -> ProgressSummary {
        self.aggregator.summarize(&self.store.list())
    }

    /// Render-ready card for one goal
    ///
    /// # Errors
    /// [`TrackerError::UnknownGoal`] if no goal has this id.
    pub fn card(&self, id: &GoalId) -> Result<GoalCard, TrackerError> {
        let goal = self
            .store
            .get(id)
            .ok_or_else(|| TrackerError::UnknownGoal(id.clone()))?;
        Ok(self.build_card(goal))
    }

    /// Render-ready snapshot of the whole session
    #[must_use]
    pub fn dashboard(&self) -> Dashboard {
        let goals = self.store.list();
        Dashboard {
            goals: goals.iter().map(|g| self.build_card(g)).collect(),
            trend: self.chart_series(ChartSubject::Collection(&goals)),
            summary: self.aggregator.summarize(&goals),
        }
    }

    /// Load the demo goals and comments
    ///
    /// # Errors
    /// [`TrackerError::Store`] if a minted id collides with an existing goal.
    pub fn seed_samples(&mut self) -> Result<(), TrackerError> {
        let ids = &mut self.ids;
        let goals = samples::goals(|| ids.next_id());
        let count = goals.len();
        for goal in goals {
            self.add_goal(goal)?;
        }
        self.comments.extend(samples::comments());
        tracing::info!(goals = count, comments = self.comments.len(), "sample data loaded");
        Ok(())
    }

    fn build_card(&self, goal: &Goal) -> GoalCard {
        let linked = self.comments.comments_for(&goal.id);
        GoalCard::build(
            goal,
            &linked,
            self.percent_complete(goal),
            self.chart_series(ChartSubject::Goal(goal)),
        )
    }
}

impl Default for GoalTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goal_model::{IdStrategy, SequentialIds};

    fn sequential() -> GoalTracker {
        GoalTracker::new(TrackerConfig::new().with_id_strategy(IdStrategy::Sequential))
    }

    #[test]
    fn submit_stores_goal() {
        let mut tracker = sequential();
        let goal = tracker.submit_form("Read", "40", "a, b", "x").unwrap();
        assert_eq!(goal.id, GoalId::from(1));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn simple_mode_keeps_comments_inline() {
        let mut tracker = sequential();
        let id = tracker.submit_form("Read", "40", "", "x, y").unwrap().id.clone();
        assert_eq!(tracker.goal(&id).unwrap().comments, vec!["x", "y"]);
        assert!(tracker.comments_for(&id).is_empty());
    }

    #[test]
    fn extended_mode_links_comments() {
        let mut tracker = GoalTracker::new(
            TrackerConfig::new()
                .with_id_strategy(IdStrategy::Sequential)
                .with_comment_mode(CommentMode::Extended)
                .with_default_author("Me"),
        );
        let id = tracker.submit_form("Read", "40", "", "x, y").unwrap().id.clone();

        assert!(tracker.goal(&id).unwrap().comments.is_empty());
        let linked = tracker.comments_for(&id);
        assert_eq!(linked.len(), 2);
        assert!(linked.iter().all(|c| c.author == "Me"));
        assert_eq!(linked[1].text, "y");
    }

    #[test]
    fn collision_leaves_session_unchanged() {
        let mut tracker = GoalTracker::new(
            TrackerConfig::new().with_comment_mode(CommentMode::Extended),
        )
        .with_id_generator(Box::new(SequentialIds::starting_at(1)));
        tracker.submit_form("a", "1", "", "").unwrap();

        let mut tracker = tracker.with_id_generator(Box::new(SequentialIds::starting_at(1)));
        let err = tracker.submit_form("b", "1", "", "orphan").unwrap_err();
        assert!(matches!(err, TrackerError::Store(_)));
        assert_eq!(tracker.len(), 1);
        assert!(tracker.dangling_comments().is_empty());
        assert!(tracker.comments_for(&GoalId::from(1)).is_empty());
    }

    #[test]
    fn unknown_card() {
        let tracker = sequential();
        let err = tracker.card(&GoalId::from(1)).unwrap_err();
        assert!(matches!(err, TrackerError::UnknownGoal(_)));
    }
}
