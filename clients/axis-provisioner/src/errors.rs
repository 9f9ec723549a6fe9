use std::path::PathBuf;

use solana_client::client_error::ClientError;
use solana_sdk::{pubkey::Pubkey, signer::SignerError};
use thiserror::Error;

use crate::launch::Step;

pub type Result<T, E = ProvisionError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ProvisionError {
    // Configuration
    #[error("Missing required environment variable {0}")]
    MissingEnv(&'static str),

    #[error("Invalid value for {key}: {reason}")]
    InvalidConfig { key: &'static str, reason: String },

    #[error("Secret key is not a valid keypair: {0}")]
    InvalidSecretKey(String),

    #[error("Keypair not found at {}", .0.display())]
    KeypairFileMissing(PathBuf),

    #[error("Failed to read keypair file {}: {source}", .path.display())]
    KeypairFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine the home directory for the default keypair path")]
    HomeDirUnavailable,

    // Arithmetic and validation
    #[error("Supply of {supply} with {decimals} decimals overflows u64 base units")]
    SupplyOverflow { supply: u64, decimals: u8 },

    #[error("Fee of {fee_bps} bps cannot be expressed with bin step {bin_step}")]
    UnrepresentableFee { bin_step: u16, fee_bps: u16 },

    #[error("Token mints must be different - cannot create pool with same token")]
    IdenticalTokenMints,

    #[error("Metadata field {field} exceeds {max} bytes")]
    MetadataFieldTooLong { field: &'static str, max: usize },

    // Building and signing
    #[error("Instruction build failed: {0}")]
    Instruction(String),

    #[error("Instruction data encoding failed: {0}")]
    Encoding(#[from] std::io::Error),

    #[error("Transaction signing failed: {0}")]
    Signing(#[from] SignerError),

    // Network
    #[error("RPC request failed: {0}")]
    Rpc(#[from] Box<ClientError>),

    #[error("Transaction rejected: {0}")]
    TransactionRejected(String),

    #[error("Relay request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Relay returned error {code}: {message}")]
    Relay { code: i64, message: String },

    #[error("Relay returned an invalid tip account: {0}")]
    InvalidTipAccount(String),

    #[error("Relay returned an empty result for {0}")]
    EmptyRelayResult(&'static str),

    #[error("Relay response is not valid JSON-RPC: {0}")]
    MalformedRelayResponse(String),

    #[error("No tip accounts configured")]
    NoTipAccounts,

    #[error("Transaction payload could not be decoded: {0}")]
    UndecodableTransaction(String),

    // Flow
    #[error("{step} failed for mint {mint} (confirmed before failure: {completed:?}): {source}")]
    StepFailed {
        step: Step,
        mint: Pubkey,
        completed: Vec<Step>,
        #[source]
        source: Box<ProvisionError>,
    },

    #[error("initialize pool failed for pair {lb_pair} ({token_x} / {token_y}): {source}")]
    PoolFailed {
        lb_pair: Pubkey,
        token_x: Pubkey,
        token_y: Pubkey,
        #[source]
        source: Box<ProvisionError>,
    },
}

impl From<ClientError> for ProvisionError {
    fn from(err: ClientError) -> Self {
        ProvisionError::Rpc(Box::new(err))
    }
}
