//! The front-end-facing store: the last successful snapshot plus a busy
//! flag, with the submit-then-refresh coupling the feed's consistency story
//! depends on.

use solana_sdk::signature::Signature;

use crate::{
    feed::{
        synchronize,
        FeedSnapshot,
    },
    provider::FeedProvider,
    submit::submit_post,
};

/// Holds what a front-end renders.
///
/// The snapshot/busy pair covers the three observable states: nothing loaded
/// and not busy is idle, busy means a synchronization is in flight, and a
/// present snapshot is the loaded feed. A failed cycle leaves the previously
/// installed snapshot in place; only a successful one replaces it, wholesale.
#[derive(Default)]
pub struct FeedStore {
    snapshot: Option<FeedSnapshot>,
    busy: bool,
}

impl FeedStore {
    pub fn new() -> Self {
        FeedStore::default()
    }

    /// The last successfully synchronized feed, if any.
    pub fn snapshot(&self) -> Option<&FeedSnapshot> {
        self.snapshot.as_ref()
    }

    /// True while a synchronization is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The position a new post should claim: the current feed length.
    pub fn next_position(&self) -> u64 {
        self.snapshot.as_ref().map_or(0, |s| s.len() as u64)
    }

    /// Marks a cycle as started. Returns false when one is already in
    /// flight: re-triggers while busy are ignored, not queued.
    fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    /// Records a cycle's outcome. The busy flag clears either way; the
    /// snapshot only changes on success.
    fn finish(&mut self, outcome: anyhow::Result<FeedSnapshot>) -> anyhow::Result<()> {
        self.busy = false;
        self.snapshot = Some(outcome?);
        Ok(())
    }

    /// Runs one full synchronization cycle and installs the result.
    ///
    /// Returns `Ok(false)` when skipped because a cycle was already running.
    pub async fn refresh(&mut self, provider: &FeedProvider) -> anyhow::Result<bool> {
        if !self.begin() {
            return Ok(false);
        }
        let outcome = synchronize(provider).await;
        self.finish(outcome).map(|()| true)
    }

    /// Submits a post at the end of the known feed, then re-synchronizes.
    ///
    /// The new record is only ever observed through the follow-up refresh; a
    /// failed submission surfaces its error and triggers no refresh.
    pub async fn submit_and_refresh(
        &mut self,
        provider: &FeedProvider,
        body: &str,
        tag: &str,
    ) -> anyhow::Result<Signature> {
        let signature = submit_post(provider, body, tag, self.next_position()).await?;
        self.refresh(provider).await?;
        Ok(signature)
    }
}

#[cfg(test)]
mod tests {
    use solana_sdk::pubkey::Pubkey;

    use super::FeedStore;
    use crate::feed::{
        FeedSnapshot,
        PostView,
    };

    fn post(position: u64) -> PostView {
        PostView {
            address: Pubkey::new_unique(),
            author: Pubkey::new_unique(),
            body: format!("post {position}"),
            tag: "test".to_string(),
            position,
            flag: false,
        }
    }

    fn snapshot_of(positions: &[u64]) -> FeedSnapshot {
        FeedSnapshot::from_unordered(positions.iter().copied().map(post).collect())
    }

    #[test]
    fn successful_cycle_installs_snapshot() {
        let mut store = FeedStore::new();
        assert!(!store.is_busy());
        assert!(store.snapshot().is_none());

        assert!(store.begin());
        assert!(store.is_busy());

        store.finish(Ok(snapshot_of(&[0, 1]))).unwrap();
        assert!(!store.is_busy());
        assert_eq!(store.snapshot().unwrap().len(), 2);
    }

    #[test]
    fn failed_cycle_keeps_previous_snapshot() {
        let mut store = FeedStore::new();
        assert!(store.begin());
        store.finish(Ok(snapshot_of(&[0, 1, 2]))).unwrap();
        let before = store.snapshot().unwrap().clone();

        assert!(store.begin());
        let outcome = store.finish(Err(anyhow::Error::msg("decode failed")));
        assert!(outcome.is_err());
        assert!(!store.is_busy());
        assert_eq!(store.snapshot().unwrap(), &before);
    }

    #[test]
    fn retrigger_while_busy_is_ignored() {
        let mut store = FeedStore::new();
        assert!(store.begin());
        assert!(!store.begin());

        store.finish(Ok(snapshot_of(&[]))).unwrap();
        assert!(store.begin());
    }

    #[test]
    fn next_position_tracks_feed_length() {
        let mut store = FeedStore::new();
        assert_eq!(store.next_position(), 0);

        assert!(store.begin());
        store.finish(Ok(snapshot_of(&[0, 1, 2]))).unwrap();
        assert_eq!(store.next_position(), 3);
    }

    #[test]
    fn appended_post_shows_up_exactly_once_after_refresh() {
        let mut store = FeedStore::new();
        assert!(store.begin());
        store.finish(Ok(snapshot_of(&[0, 1]))).unwrap();

        // Submitting claims position == len; the follow-up cycle then
        // observes the grown feed.
        let claimed = store.next_position();
        assert_eq!(claimed, 2);

        assert!(store.begin());
        store.finish(Ok(snapshot_of(&[0, 1, claimed]))).unwrap();

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.len(), 3);
        let appended: Vec<_> = snapshot.iter().filter(|p| p.position == claimed).collect();
        assert_eq!(appended.len(), 1);
    }
}
