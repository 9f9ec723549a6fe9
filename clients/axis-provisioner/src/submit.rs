// Transaction submission
//
// Every step goes through a `Submitter`, so the same step code runs against
// a live cluster (RpcSubmitter) or an in-process SVM in tests.

use solana_commitment_config::CommitmentConfig;
use solana_client::{rpc_client::RpcClient, rpc_config::RpcSendTransactionConfig};
use solana_sdk::{
    hash::Hash,
    instruction::Instruction,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};

use crate::errors::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SendOptions {
    pub skip_preflight: bool,
}

impl SendOptions {
    pub const SKIP_PREFLIGHT: SendOptions = SendOptions { skip_preflight: true };
    pub const PREFLIGHT: SendOptions = SendOptions { skip_preflight: false };
}

pub trait Submitter {
    fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> Result<u64>;

    fn latest_blockhash(&self) -> Result<Hash>;

    /// Submit a signed transaction and block until it is confirmed or rejected.
    fn send_and_confirm(&mut self, transaction: &Transaction, options: SendOptions) -> Result<Signature>;
}

pub struct RpcSubmitter {
    client: RpcClient,
}

impl RpcSubmitter {
    pub fn new(rpc_url: &str) -> Self {
        Self {
            client: RpcClient::new_with_commitment(rpc_url.to_string(), CommitmentConfig::confirmed()),
        }
    }

    pub fn client(&self) -> &RpcClient {
        &self.client
    }
}

impl Submitter for RpcSubmitter {
    fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> Result<u64> {
        Ok(self.client.get_minimum_balance_for_rent_exemption(data_len)?)
    }

    fn latest_blockhash(&self) -> Result<Hash> {
        Ok(self.client.get_latest_blockhash()?)
    }

    fn send_and_confirm(&mut self, transaction: &Transaction, options: SendOptions) -> Result<Signature> {
        let config = RpcSendTransactionConfig {
            skip_preflight: options.skip_preflight,
            ..RpcSendTransactionConfig::default()
        };

        Ok(self.client.send_and_confirm_transaction_with_spinner_and_config(
            transaction,
            self.client.commitment(),
            config,
        )?)
    }
}

// Build an unsigned transaction paid by `payer`, sign it with a fresh blockhash and submit it
pub fn sign_and_send<S: Submitter + ?Sized>(
    submitter: &mut S,
    instructions: &[Instruction],
    payer: &Keypair,
    signers: &[&Keypair],
    options: SendOptions,
) -> Result<Signature> {
    let mut transaction = Transaction::new_with_payer(instructions, Some(&payer.pubkey()));
    let blockhash = submitter.latest_blockhash()?;
    transaction.try_sign(signers, blockhash)?;
    submitter.send_and_confirm(&transaction, options)
}
