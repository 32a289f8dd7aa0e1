//! Demo goals and comments
//!
//! The comments reference goals "1", "2" and "3". They attach when ids are
//! sequential and stay hidden when ids are ULIDs.

use goal_model::{Comment, Goal, GoalId, Progress};

struct SampleGoal {
    title: &'static str,
    progress: i64,
    description: &'static str,
    milestones: &'static [&'static str],
}

const SAMPLE_GOALS: [SampleGoal; 3] = [
    SampleGoal {
        title: "Goal 1",
        progress: 80,
        description: "Complete coding challenges for the week.",
        milestones: &["Start working", "50% completed", "Goal achieved"],
    },
    SampleGoal {
        title: "Goal 2",
        progress: 40,
        description: "Read a book and summarize chapters.",
        milestones: &["Read 2 chapters", "50% completed"],
    },
    SampleGoal {
        title: "Goal 3",
        progress: 60,
        description: "Build a personal website.",
        milestones: &["Design homepage", "50% completed", "Finish project"],
    },
];

const SAMPLE_COMMENTS: [(u64, &str, &str); 3] = [
    (1, "Alice", "Great progress! Keep it up."),
    (2, "Bob", "I like how you are managing your time."),
    (3, "Charlie", "Looking good, add some more features!"),
];

/// Sample goals with ids taken from `next_id`
pub(crate) fn goals(mut next_id: impl FnMut() -> GoalId) -> Vec<Goal> {
    SAMPLE_GOALS
        .iter()
        .map(|s| {
            Goal::new(next_id(), s.title, Progress::clamped(s.progress))
                .with_description(s.description)
                .with_milestones(s.milestones.iter().copied())
        })
        .collect()
}

/// Sample comments keyed to goals "1", "2", "3"
pub(crate) fn comments() -> Vec<Comment> {
    SAMPLE_COMMENTS
        .iter()
        .map(|&(id, author, text)| Comment::new(GoalId::from(id), author, text))
        .collect()
}
