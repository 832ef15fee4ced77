//! Post submission: build, sign, and confirm one create-post transaction.

use anyhow::Context;
use postfeed_interface::instructions::CreatePost;
use solana_sdk::signature::{
    Keypair,
    Signature,
    Signer,
};

use crate::{
    provider::FeedProvider,
    transactions::send_transaction,
};

/// Submits a new post and waits for cluster acknowledgment.
///
/// A fresh keypair becomes the post account's address; the wallet pays fees
/// and is recorded as the author. `position` is the feed length the caller
/// last observed. No snapshot is touched here: observing the new record is
/// the follow-up synchronization's job, and a failure surfaces as-is with no
/// retry.
pub async fn submit_post(
    provider: &FeedProvider,
    body: &str,
    tag: &str,
    position: u64,
) -> anyhow::Result<Signature> {
    if body.is_empty() || tag.is_empty() {
        anyhow::bail!("A post needs both body and tag text");
    }

    let post_keypair = Keypair::new();
    let author = provider.wallet().pubkey();

    let instruction = CreatePost {
        post_account: &post_keypair.pubkey(),
        author: &author,
        body,
        tag,
        position,
    }
    .instruction();

    send_transaction(provider, &[&post_keypair], &[instruction])
        .await
        .context("Failed to submit post")
}
