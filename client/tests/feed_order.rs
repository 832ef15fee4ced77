use client::feed::{
    FeedSnapshot,
    PostView,
};
use solana_sdk::{
    pubkey,
    pubkey::Pubkey,
};

const AUTHOR: Pubkey = pubkey!("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA");

fn post(body: &str, position: u64) -> PostView {
    PostView {
        address: Pubkey::new_unique(),
        author: AUTHOR,
        body: body.to_string(),
        tag: "test".to_string(),
        position,
        flag: false,
    }
}

#[test]
fn snapshot_orders_by_position_descending() {
    let snapshot = FeedSnapshot::from_unordered(vec![
        post("third", 3),
        post("first", 1),
        post("second", 2),
    ]);

    let positions: Vec<u64> = snapshot.iter().map(|p| p.position).collect();
    assert_eq!(positions, vec![3, 2, 1]);

    for pair in snapshot.windows(2) {
        assert!(pair[0].position >= pair[1].position);
    }
}

#[test]
fn snapshot_sort_is_stable_on_ties() {
    // Concurrent submitters can claim the same position; equal keys must keep
    // their incoming order so refreshes don't reshuffle the feed.
    let snapshot = FeedSnapshot::from_unordered(vec![
        post("tied a", 5),
        post("tied b", 5),
        post("older", 1),
        post("tied c", 5),
    ]);

    let bodies: Vec<&str> = snapshot.iter().map(|p| p.body.as_str()).collect();
    assert_eq!(bodies, vec!["tied a", "tied b", "tied c", "older"]);
}

#[test]
fn empty_feed_is_a_snapshot_not_a_failure() {
    let snapshot = FeedSnapshot::from_unordered(Vec::new());
    assert!(snapshot.is_empty());
    assert_eq!(snapshot, FeedSnapshot::default());
}
