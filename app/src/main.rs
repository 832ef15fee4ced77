//! Renders the post feed in a terminal and submits new posts through the
//! connected wallet.

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use client::{
    feed::{
        FeedSnapshot,
        PostView,
    },
    logs::{
        log_error,
        log_info,
        log_success,
    },
    provider::FeedProvider,
    wallet::{
        ConnectMode,
        LocalWallet,
    },
    FeedStore,
};
use colored::Colorize;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{
        read_keypair_file,
        Keypair,
        Signer,
    },
};

use crate::cli::{
    Cli,
    Command,
};

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let keypair = match &args.keypair {
        Some(path) => read_keypair_file(path)
            .map_err(|e| anyhow::Error::msg(format!("Failed to read keypair file: {e}")))?,
        None => Keypair::new(),
    };
    let wallet = LocalWallet::new(keypair, args.trusted);
    let provider = FeedProvider::try_new(&args.rpc_url, Some(Box::new(wallet)))?;

    // Silent startup handshake. Refusal leaves the app usable read-only.
    let connected = match provider.connect(ConnectMode::OnlyIfTrusted) {
        Ok(address) => {
            log_info("Wallet", short_address(&address));
            true
        }
        Err(err) => {
            log_error("Wallet", err);
            false
        }
    };

    if args.airdrop {
        fund_wallet(&provider).await?;
    }

    let mut store = FeedStore::new();

    match args.command {
        Command::Feed => {
            if let Err(err) = store.refresh(&provider).await {
                log_error("Synchronize", format!("{err:#}"));
            }
            render_feed(store.snapshot());
        }
        Command::Post { body, tag } => {
            if !connected {
                provider
                    .connect(ConnectMode::Interactive)
                    .context("Wallet refused the connection")?;
            }
            // The position hint comes from the feed length visible right now.
            store
                .refresh(&provider)
                .await
                .context("Couldn't synchronize the feed before posting")?;

            let signature = store.submit_and_refresh(&provider, &body, &tag).await?;
            log_success("Posted", signature);
            render_feed(store.snapshot());
        }
    }

    Ok(())
}

/// Requests an airdrop for the wallet and waits for it to land.
async fn fund_wallet(provider: &FeedProvider) -> anyhow::Result<()> {
    let address = provider.wallet().pubkey();
    let signature = provider
        .rpc()
        .request_airdrop(&address, 1_000_000_000)
        .await
        .context("Failed to request airdrop")?;

    let mut i = 0;
    while !provider
        .rpc()
        .confirm_transaction(&signature)
        .await
        .context("Couldn't confirm airdrop")?
        && i < 10
    {
        tokio::time::sleep(Duration::from_millis(500)).await;
        i += 1;
    }

    log_success("Airdrop", short_address(&address));
    Ok(())
}

fn render_feed(snapshot: Option<&FeedSnapshot>) {
    let Some(snapshot) = snapshot else {
        log_error("Feed", "Nothing synchronized yet");
        return;
    };
    if snapshot.is_empty() {
        log_info("Feed", "No posts yet");
        return;
    }

    println!();
    for post in snapshot.iter() {
        render_post(post);
    }
}

fn render_post(post: &PostView) {
    println!(
        "{} {}",
        short_address(&post.author).bright_black(),
        format!("#{}", post.tag).cyan()
    );
    println!("  {}\n", post.body);
}

/// Truncated form of an address for display, e.g. `Feed...tYni`.
fn short_address(address: &Pubkey) -> String {
    let s = address.to_string();
    format!("{}...{}", &s[..4], &s[s.len() - 4..])
}
