//! Testing utilities for the goal tracker workspace
//!
//! Shared fixtures and a scripted id generator.

#![allow(missing_docs)]

use goal_model::{Comment, Goal, GoalId, IdGenerator, Progress};
use std::collections::VecDeque;

pub fn id(raw: &str) -> GoalId {
    GoalId::parse(raw).unwrap()
}

pub fn create_goal(id: u64, title: &str, progress: i64) -> Goal {
    Goal::new(GoalId::from(id), title, Progress::new(progress).unwrap())
}

pub fn create_goal_with_milestones(id: u64, title: &str, progress: i64, milestones: &[&str]) -> Goal {
    create_goal(id, title, progress).with_milestones(milestones.iter().copied())
}

pub fn create_comment(goal_id: u64, author: &str, text: &str) -> Comment {
    Comment::new(GoalId::from(goal_id), author, text)
}

/// Hands out a fixed list of ids, then panics.
#[derive(Debug, Clone)]
pub struct ScriptedIds {
    queue: VecDeque<GoalId>,
}

impl ScriptedIds {
    pub fn new<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            queue: ids.into_iter().map(id).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl IdGenerator for ScriptedIds {
    fn next_id(&mut self) -> GoalId {
        self.queue.pop_front().expect("scripted ids exhausted")
    }
}
