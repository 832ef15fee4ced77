//! The wallet seam: an external signing identity whose consent flow this
//! client consumes but does not implement.

use solana_sdk::{
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    signer::SignerError,
};

/// How a connection attempt may interact with the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectMode {
    /// Succeed only if the wallet already trusts this client. Used for the
    /// silent handshake on startup.
    OnlyIfTrusted,
    /// May prompt the user for consent. Used on explicit user action.
    Interactive,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WalletError {
    Missing,
    NotTrusted,
}

impl From<WalletError> for &'static str {
    fn from(value: WalletError) -> Self {
        match value {
            WalletError::Missing => "No wallet capability is available",
            WalletError::NotTrusted => "Wallet hasn't previously trusted this client",
        }
    }
}

impl core::fmt::Display for WalletError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.clone().into())
    }
}

impl std::error::Error for WalletError {}

/// A signing identity controlled by the end user.
///
/// [`Signer`] supplies the signature side of the contract; `try_connect`
/// models the wallet's consent handshake. Implementations decide what
/// "trusted" means for them.
pub trait WalletSession: Signer {
    /// Runs the consent handshake, returning the wallet's public key.
    fn try_connect(&self, mode: ConnectMode) -> Result<Pubkey, WalletError>;
}

/// A keypair-backed wallet for terminals and tests.
///
/// `trusted` stands in for a browser wallet's "previously approved" state: an
/// untrusted local wallet still connects interactively, but refuses the
/// silent startup path.
pub struct LocalWallet {
    keypair: Keypair,
    trusted: bool,
}

impl LocalWallet {
    pub fn new(keypair: Keypair, trusted: bool) -> Self {
        LocalWallet { keypair, trusted }
    }
}

impl Signer for LocalWallet {
    fn try_pubkey(&self) -> Result<Pubkey, SignerError> {
        self.keypair.try_pubkey()
    }

    fn try_sign_message(&self, message: &[u8]) -> Result<Signature, SignerError> {
        self.keypair.try_sign_message(message)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

impl WalletSession for LocalWallet {
    fn try_connect(&self, mode: ConnectMode) -> Result<Pubkey, WalletError> {
        match mode {
            ConnectMode::OnlyIfTrusted if !self.trusted => Err(WalletError::NotTrusted),
            _ => Ok(self.keypair.pubkey()),
        }
    }
}
