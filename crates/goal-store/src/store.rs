//! Ordered goal store
//!
//! Goals are kept in creation order. Lookup by id is O(1) through the
//! [`IndexMap`] key, and a duplicate id can never be inserted.

use goal_model::{Goal, GoalId};
use indexmap::IndexMap;

/// Store errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A goal with this id already exists
    #[error("goal id already in use: {0}")]
    DuplicateId(GoalId),

    /// Title is empty or whitespace only
    #[error("goal {0} has an empty title")]
    EmptyTitle(GoalId),
}

/// Append-only, insertion-ordered collection of goals
#[derive(Debug, Clone, Default)]
pub struct GoalStore {
    goals: IndexMap<GoalId, Goal>,
}

impl GoalStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a goal
    ///
    /// Existing entries are never touched. Ids minted by an
    /// [`IdGenerator`](goal_model::IdGenerator) cannot collide, so this only
    /// fails for hand-built goals that reuse an id.
    ///
    /// # Errors
    /// [`StoreError::DuplicateId`] if the id is already present,
    /// [`StoreError::EmptyTitle`] if the title is blank. The store is
    /// unchanged in either case.
    pub fn add(&mut self, goal: Goal) -> Result<&Goal, StoreError> {
        if goal.title.trim().is_empty() {
            tracing::warn!(goal_id = %goal.id, "rejected goal with empty title");
            return Err(StoreError::EmptyTitle(goal.id));
        }
        if self.goals.contains_key(&goal.id) {
            tracing::warn!(goal_id = %goal.id, "rejected goal with duplicate id");
            return Err(StoreError::DuplicateId(goal.id));
        }
        let id = goal.id.clone();
        tracing::debug!(goal_id = %id, position = self.goals.len(), "goal appended");
        let (index, _) = self.goals.insert_full(id, goal);
        Ok(&self.goals[index])
    }

    /// All goals in creation order
    #[must_use]
    pub fn list(&self) -> Vec<&Goal> {
        self.goals.values().collect()
    }

    /// Iterate goals in creation order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Goal> {
        self.goals.values()
    }

    /// Lookup by id
    #[inline]
    #[must_use]
    pub fn get(&self, id: &GoalId) -> Option<&Goal> {
        self.goals.get(id)
    }

    /// Whether a goal with this id exists
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &GoalId) -> bool {
        self.goals.contains_key(id)
    }

    /// Number of goals
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    /// Check if store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goal_model::Progress;

    fn goal(id: u64, title: &str) -> Goal {
        Goal::new(GoalId::from(id), title, Progress::new(10).unwrap())
    }

    #[test]
    fn add_returns_stored_goal() {
        let mut store = GoalStore::new();
        let stored = store.add(goal(1, "a")).unwrap();
        assert_eq!(stored.title, "a");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_id_leaves_store_unchanged() {
        let mut store = GoalStore::new();
        store.add(goal(1, "first")).unwrap();

        let err = store.add(goal(1, "second")).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId(GoalId::from(1)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&GoalId::from(1)).unwrap().title, "first");
    }

    #[test]
    fn blank_title_leaves_store_unchanged() {
        let mut store = GoalStore::new();
        for title in ["", "   ", "\t\n"] {
            let err = store.add(goal(1, title)).unwrap_err();
            assert_eq!(err, StoreError::EmptyTitle(GoalId::from(1)));
        }
        assert!(store.is_empty());
        assert!(store.add(goal(1, "real")).is_ok());
    }

    #[test]
    fn lookup_by_normalized_id() {
        let mut store = GoalStore::new();
        store.add(goal(5, "x")).unwrap();
        assert!(store.contains(&GoalId::parse(" 5 ").unwrap()));
        assert!(store.get(&GoalId::from(6)).is_none());
    }

    #[test]
    fn empty_store() {
        let store = GoalStore::new();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
        assert_eq!(store.iter().len(), 0);
    }
}
