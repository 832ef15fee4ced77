//! The capability object every core operation takes: one RPC endpoint handle
//! plus one wallet session, constructed once at process start and passed by
//! reference into everything that reads or writes the ledger.

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;

use crate::wallet::{
    ConnectMode,
    WalletError,
    WalletSession,
};

pub struct FeedProvider {
    rpc: RpcClient,
    wallet: Box<dyn WalletSession>,
}

impl FeedProvider {
    /// Builds a provider from an endpoint and a wallet capability.
    ///
    /// Fails with [`WalletError::Missing`] when no wallet is supplied: reads
    /// and signed writes share this object, so a signing identity has to
    /// exist up front. Performs no network I/O.
    pub fn try_new(
        rpc_url: impl ToString,
        wallet: Option<Box<dyn WalletSession>>,
    ) -> anyhow::Result<Self> {
        let wallet = wallet.ok_or(WalletError::Missing)?;
        let rpc =
            RpcClient::new_with_commitment(rpc_url.to_string(), CommitmentConfig::processed());
        Ok(FeedProvider { rpc, wallet })
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    pub fn wallet(&self) -> &dyn WalletSession {
        self.wallet.as_ref()
    }

    /// Runs the wallet's consent handshake.
    pub fn connect(&self, mode: ConnectMode) -> Result<Pubkey, WalletError> {
        self.wallet.try_connect(mode)
    }
}
