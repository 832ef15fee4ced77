use anyhow::Context;
use solana_client::{
    client_error::{
        ClientError,
        ClientErrorKind,
    },
    rpc_response::RpcSimulateTransactionResult,
};
use solana_instruction::Instruction;
use solana_sdk::{
    message::Message,
    signature::{
        Signature,
        Signer,
    },
    transaction::Transaction,
};

use crate::{
    logs::{
        log_error,
        log_info,
    },
    provider::FeedProvider,
};

/// Assembles, signs, and sends one transaction, waiting for confirmation.
///
/// The provider's wallet is always the fee payer and first signer;
/// `extra_signers` covers fresh account keypairs that must co-sign.
pub async fn send_transaction(
    provider: &FeedProvider,
    extra_signers: &[&dyn Signer],
    instructions: &[Instruction],
) -> anyhow::Result<Signature> {
    let rpc = provider.rpc();
    let wallet = provider.wallet();

    let blockhash = rpc
        .get_latest_blockhash()
        .await
        .context("Failed to fetch a recent blockhash")?;

    let message = Message::new(instructions, Some(&wallet.pubkey()));
    let mut tx = Transaction::new_unsigned(message);

    let signers: Vec<&dyn Signer> = std::iter::once(wallet as &dyn Signer)
        .chain(extra_signers.iter().copied())
        .collect();
    tx.try_sign(&signers, blockhash)
        .context("Failed to sign transaction")?;

    match rpc.send_and_confirm_transaction(&tx).await {
        Ok(signature) => Ok(signature),
        Err(error) => {
            log_preflight_failure(&error);
            log_info("Payer", wallet.pubkey());

            Err(error).context("Failed transaction submission")
        }
    }
}

/// Surfaces the simulation failure buried inside a preflight rejection before
/// the error propagates to the caller.
fn log_preflight_failure(error: &ClientError) {
    use solana_client::rpc_request::{
        RpcError::RpcResponseError,
        RpcResponseErrorData,
    };

    let kind = error.kind();
    if let ClientErrorKind::RpcError(RpcResponseError {
        data:
            RpcResponseErrorData::SendTransactionPreflightFailure(RpcSimulateTransactionResult {
                err: Some(tx_err),
                logs,
                ..
            }),
        ..
    }) = kind
    {
        log_error("Preflight failure", tx_err);
        if let Some(lines) = logs {
            for line in lines {
                log_error("Program log", line);
            }
        }
    }
}
