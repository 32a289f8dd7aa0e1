use goal_model::GoalId;
use goal_store::{milestones_of, CommentBook, GoalStore};
use goal_test_utils::{create_comment, create_goal, create_goal_with_milestones};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_list_preserves_creation_order() {
    let mut store = GoalStore::new();
    let g1 = create_goal(2, "second id, first added", 10);
    let g2 = create_goal(1, "first id, second added", 90);

    store.add(g1.clone()).unwrap();
    store.add(g2.clone()).unwrap();

    assert_eq!(store.list(), vec![&g1, &g2]);
}

#[test]
fn test_list_is_a_pure_read() {
    let mut store = GoalStore::new();
    store.add(create_goal(1, "a", 10)).unwrap();
    store.add(create_goal(2, "b", 20)).unwrap();

    let first: Vec<_> = store.list().into_iter().cloned().collect();
    let second: Vec<_> = store.list().into_iter().cloned().collect();
    assert_eq!(first, second);
}

#[test]
fn test_milestones_keep_insertion_order() {
    let goal = create_goal_with_milestones(1, "g", 0, &["Start working", "50% completed", "Goal achieved"]);
    assert_eq!(
        milestones_of(&goal),
        ["Start working", "50% completed", "Goal achieved"]
    );
}

#[test]
fn test_dangling_comments_hidden_not_erased() {
    let mut store = GoalStore::new();
    store.add(create_goal(1, "a", 10)).unwrap();
    store.add(create_goal(2, "b", 20)).unwrap();

    let book: CommentBook = vec![
        create_comment(1, "Alice", "on a"),
        create_comment(3, "Ghost", "nobody home"),
        create_comment(2, "Bob", "on b"),
    ]
    .into_iter()
    .collect();

    let mut shown = 0;
    for goal in store.iter() {
        let comments = book.comments_for(&goal.id);
        assert!(comments.iter().all(|c| c.goal_id == goal.id));
        shown += comments.len();
    }
    assert_eq!(shown, 2);

    let dangling = book.dangling(&store);
    assert_eq!(dangling.len(), 1);
    assert_eq!(dangling[0].author, "Ghost");
    assert_eq!(book.len(), 3);
}

proptest! {
    #[test]
    fn prop_store_order_matches_insertion(ids in proptest::collection::hash_set(0u64..10_000, 0..40)) {
        let ids: Vec<u64> = ids.into_iter().collect();
        let mut store = GoalStore::new();
        for &id in &ids {
            store.add(create_goal(id, "g", 50)).unwrap();
        }
        let listed: Vec<GoalId> = store.iter().map(|g| g.id.clone()).collect();
        let expected: Vec<GoalId> = ids.iter().copied().map(GoalId::from).collect();
        prop_assert_eq!(listed, expected);
    }

    #[test]
    fn prop_comment_partition_is_exact(goal_ids in proptest::collection::vec(0u64..6, 0..30)) {
        let mut store = GoalStore::new();
        for id in 0..3 {
            store.add(create_goal(id, "g", 0)).unwrap();
        }
        let book: CommentBook = goal_ids
            .iter()
            .map(|&id| create_comment(id, "u", "t"))
            .collect();

        let attached: usize = store.iter().map(|g| book.comments_for(&g.id).len()).sum();
        prop_assert_eq!(attached + book.dangling(&store).len(), book.len());
    }
}
