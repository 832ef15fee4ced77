use client::{
    provider::FeedProvider,
    submit::submit_post,
    wallet::{
        ConnectMode,
        LocalWallet,
        WalletError,
        WalletSession,
    },
};
use solana_sdk::signature::Keypair;

const RPC_URL: &str = "http://127.0.0.1:8899";

fn trusted_provider() -> FeedProvider {
    let wallet = LocalWallet::new(Keypair::new(), true);
    FeedProvider::try_new(RPC_URL, Some(Box::new(wallet))).unwrap()
}

#[test]
fn provider_without_wallet_is_unauthenticated() {
    let result = FeedProvider::try_new(RPC_URL, None);

    let error = result.err().unwrap();
    assert_eq!(
        error.downcast_ref::<WalletError>(),
        Some(&WalletError::Missing)
    );
}

#[test]
fn silent_connect_requires_prior_trust() {
    let wallet = LocalWallet::new(Keypair::new(), false);

    assert_eq!(
        wallet.try_connect(ConnectMode::OnlyIfTrusted),
        Err(WalletError::NotTrusted)
    );
    assert!(wallet.try_connect(ConnectMode::Interactive).is_ok());
}

#[test]
fn trusted_wallet_connects_silently() {
    let provider = trusted_provider();
    assert!(provider.connect(ConnectMode::OnlyIfTrusted).is_ok());
}

#[tokio::test]
async fn submission_rejects_empty_fields_before_any_network_call() {
    // The RPC endpoint doesn't exist; reaching the network would error with a
    // connection failure instead of the field guard.
    let provider = trusted_provider();

    let err = submit_post(&provider, "", "tag", 0).await.err().unwrap();
    assert!(err.to_string().contains("body and tag"));

    let err = submit_post(&provider, "body", "", 0).await.err().unwrap();
    assert!(err.to_string().contains("body and tag"));
}
