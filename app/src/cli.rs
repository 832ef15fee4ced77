use std::path::PathBuf;

use clap::{
    Parser,
    Subcommand,
};

#[derive(Parser)]
#[command(about = "Terminal front-end for the post feed program")]
pub struct Cli {
    /// RPC endpoint of the target cluster.
    #[arg(long, default_value = "http://127.0.0.1:8899")]
    pub rpc_url: String,

    /// Path to the wallet keypair file. A throwaway keypair is generated
    /// when omitted.
    #[arg(long)]
    pub keypair: Option<PathBuf>,

    /// Treat the wallet as having previously approved this client, enabling
    /// the silent startup connect.
    #[arg(long)]
    pub trusted: bool,

    /// Request an airdrop for the wallet before running the command. Only
    /// works on test clusters.
    #[arg(long)]
    pub airdrop: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Synchronize the feed and render it.
    Feed,
    /// Submit a new post, then re-synchronize and render the feed.
    Post {
        /// The post's content.
        body: String,
        /// The post's hashtag.
        tag: String,
    },
}
