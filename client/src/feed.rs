//! Feed synchronization: discover every program-owned post account, decode
//! each one, and produce the ordered snapshot a front-end renders.

use anyhow::Context;
use derive_more::{
    Deref,
    IntoIterator,
};
use futures::future::try_join_all;
use postfeed_interface::{
    program,
    state::FeedPost,
};
use solana_sdk::pubkey::Pubkey;

use crate::provider::FeedProvider;

/// A decoded post paired with the address of the account holding it. The
/// address is unique per record; `position` is not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostView {
    pub address: Pubkey,
    pub author: Pubkey,
    pub body: String,
    pub tag: String,
    pub position: u64,
    pub flag: bool,
}

impl From<(Pubkey, FeedPost)> for PostView {
    fn from((address, post): (Pubkey, FeedPost)) -> Self {
        PostView {
            address,
            author: post.author(),
            body: post.body,
            tag: post.tag,
            position: post.position,
            flag: post.flag,
        }
    }
}

/// One complete synchronization result, ordered for display.
///
/// Snapshots are installed wholesale and never merged or partially updated;
/// the next cycle supersedes this one entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deref, IntoIterator)]
pub struct FeedSnapshot(Vec<PostView>);

impl FeedSnapshot {
    /// Orders decoded posts for display: highest `position` first. The sort
    /// is stable, so records sharing a position keep their incoming order
    /// instead of reshuffling on every refresh.
    pub fn from_unordered(mut posts: Vec<PostView>) -> Self {
        posts.sort_by(|a, b| b.position.cmp(&a.position));
        FeedSnapshot(posts)
    }
}

/// Fetches and decodes the entire feed as one atomic snapshot.
///
/// Every account currently owned by the program is re-read and decoded
/// concurrently; the first failure aborts the whole cycle, so a partial feed
/// is never surfaced. Zero owned accounts is a successful, empty snapshot.
pub async fn synchronize(provider: &FeedProvider) -> anyhow::Result<FeedSnapshot> {
    let accounts = provider
        .rpc()
        .get_program_accounts(&program::ID)
        .await
        .context("Failed to list post accounts")?;

    let posts = try_join_all(
        accounts
            .into_iter()
            .map(|(address, _)| fetch_post(provider, address)),
    )
    .await?;

    Ok(FeedSnapshot::from_unordered(posts))
}

/// Reads one post account's latest content and decodes it.
async fn fetch_post(provider: &FeedProvider, address: Pubkey) -> anyhow::Result<PostView> {
    let account = provider
        .rpc()
        .get_account(&address)
        .await
        .with_context(|| format!("Failed to fetch post account {address}"))?;

    let post = FeedPost::try_from_account(&account.owner, &account.data)
        .with_context(|| format!("Failed to decode post account {address}"))?;

    Ok(PostView::from((address, post)))
}
