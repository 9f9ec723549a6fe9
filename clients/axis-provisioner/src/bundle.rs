// Jito bundle relay
//
// Forwards pre-signed transactions to a Jito block engine over JSON-RPC.
// Jito has no devnet block engine, so on devnet the transactions are sent one
// by one through the regular RPC instead and the first signature stands in
// for the bundle id.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::{info, warn};
use rand::seq::SliceRandom;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use solana_commitment_config::CommitmentConfig;
use solana_client::{rpc_client::RpcClient, rpc_config::RpcSendTransactionConfig};
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::Signature,
    transaction::{Transaction, VersionedTransaction},
};
use solana_system_interface::instruction as system_instruction;

use crate::{
    config::{BundleConfig, Cluster},
    constants::*,
    errors::*,
};

#[derive(Serialize)]
struct JsonRpcRequest<'a, P> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: P,
}

#[derive(Deserialize)]
struct JsonRpcResponse<T> {
    result: Option<T>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    #[serde(default)]
    code: i64,
    message: String,
}

#[derive(Deserialize)]
struct BundleStatuses {
    value: Vec<Option<BundleStatus>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BundleStatus {
    pub bundle_id: String,
    #[serde(default)]
    pub transactions: Vec<String>,
    pub slot: u64,
    pub confirmation_status: Option<String>,
    #[serde(default)]
    pub err: serde_json::Value,
}

pub struct BundleClient {
    config: BundleConfig,
    http: reqwest::blocking::Client,
    rpc: RpcClient,
}

impl BundleClient {
    pub fn new(config: BundleConfig) -> Self {
        let rpc = RpcClient::new_with_commitment(config.rpc_url.clone(), CommitmentConfig::confirmed());

        Self {
            config,
            http: reqwest::blocking::Client::new(),
            rpc,
        }
    }

    pub fn config(&self) -> &BundleConfig {
        &self.config
    }

    /// Tip accounts reported by the block engine, or the configured fallback list
    /// when running on devnet or when the query fails.
    pub fn tip_accounts(&self) -> Vec<Pubkey> {
        if self.config.cluster == Cluster::Devnet {
            return self.config.fallback_tip_accounts.clone();
        }

        match self.fetch_tip_accounts() {
            Ok(accounts) if !accounts.is_empty() => accounts,
            Ok(_) => {
                warn!("[Jito] Block engine returned no tip accounts, using fallback list");
                self.config.fallback_tip_accounts.clone()
            }
            Err(err) => {
                warn!("[Jito] Failed to get tip accounts: {}, using fallback list", err);
                self.config.fallback_tip_accounts.clone()
            }
        }
    }

    pub fn random_tip_account(&self) -> Result<Pubkey> {
        self.tip_accounts()
            .choose(&mut rand::thread_rng())
            .copied()
            .ok_or(ProvisionError::NoTipAccounts)
    }

    // System transfer of `lamports` from `payer` to a random tip account
    pub fn tip_instruction(&self, payer: &Pubkey, lamports: u64) -> Result<Instruction> {
        Ok(system_instruction::transfer(payer, &self.random_tip_account()?, lamports))
    }

    /// Send base-64 encoded signed transactions as one bundle, returning the bundle id.
    pub fn send_bundle(&self, encoded_transactions: &[String]) -> Result<String> {
        info!(
            "[Jito] Sending bundle with {} transactions, network: {}",
            encoded_transactions.len(),
            self.config.cluster
        );

        match self.config.cluster {
            Cluster::Devnet => self.send_via_rpc(encoded_transactions),
            Cluster::Mainnet => self.send_via_jito(encoded_transactions),
        }
    }

    pub fn bundle_status(&self, bundle_id: &str) -> Option<BundleStatus> {
        match self.call::<_, BundleStatuses>("getBundleStatuses", [[bundle_id]]) {
            Ok(statuses) => statuses.value.into_iter().next().flatten(),
            Err(err) => {
                warn!("[Jito] Status check failed: {}", err);
                None
            }
        }
    }

    fn fetch_tip_accounts(&self) -> Result<Vec<Pubkey>> {
        let accounts: Vec<String> = self.call("getTipAccounts", Vec::<()>::new())?;

        accounts
            .iter()
            .map(|account| {
                account
                    .parse()
                    .map_err(|_| ProvisionError::InvalidTipAccount(account.clone()))
            })
            .collect()
    }

    fn send_via_jito(&self, encoded_transactions: &[String]) -> Result<String> {
        let base58_transactions = encoded_transactions
            .iter()
            .map(|tx| base64_to_base58(tx))
            .collect::<Result<Vec<_>>>()?;

        let bundle_id: String = self.call("sendBundle", [base58_transactions])?;
        info!("[Jito] Bundle sent successfully: {}", bundle_id);
        Ok(bundle_id)
    }

    fn send_via_rpc(&self, encoded_transactions: &[String]) -> Result<String> {
        info!("[Jito] Using standard RPC for devnet");

        let config = RpcSendTransactionConfig {
            skip_preflight: true,
            max_retries: Some(BUNDLE_SEND_MAX_RETRIES),
            ..RpcSendTransactionConfig::default()
        };

        let mut signatures: Vec<Signature> = Vec::with_capacity(encoded_transactions.len());
        for encoded in encoded_transactions {
            let bytes = decode_base64(encoded)?;

            // Versioned first, legacy as fallback
            let signature = match bincode::deserialize::<VersionedTransaction>(&bytes) {
                Ok(tx) => self.rpc.send_transaction_with_config(&tx, config)?,
                Err(_) => {
                    let tx: Transaction = bincode::deserialize(&bytes)
                        .map_err(|e| ProvisionError::UndecodableTransaction(e.to_string()))?;
                    self.rpc.send_transaction_with_config(&tx, config)?
                }
            };

            info!("[RPC] Transaction sent: {}", signature);
            signatures.push(signature);
        }

        Ok(match signatures.first() {
            Some(signature) => signature.to_string(),
            None => format!("devnet-{}", unix_millis()),
        })
    }

    fn call<P, T>(&self, method: &'static str, params: P) -> Result<T>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        };

        let response = self
            .http
            .post(&self.config.block_engine_url)
            .json(&request)
            .send()?;

        // Rejections and rate limits come back as JSON-RPC errors with a non-2xx status
        let status_error = response.error_for_status_ref().err();
        let body = response.text()?;

        match (serde_json::from_str::<JsonRpcResponse<T>>(&body), status_error) {
            (Ok(JsonRpcResponse { error: Some(error), .. }), _) => Err(ProvisionError::Relay {
                code: error.code,
                message: error.message,
            }),
            (_, Some(status_error)) => Err(status_error.into()),
            (Ok(response), None) => response.result.ok_or(ProvisionError::EmptyRelayResult(method)),
            (Err(e), None) => Err(ProvisionError::MalformedRelayResponse(e.to_string())),
        }
    }
}

// Jito expects base-58 transactions; wallets hand over base-64
pub fn base64_to_base58(encoded: &str) -> Result<String> {
    Ok(bs58::encode(decode_base64(encoded)?).into_string())
}

fn decode_base64(encoded: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(encoded.trim())
        .map_err(|e| ProvisionError::UndecodableTransaction(e.to_string()))
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}
