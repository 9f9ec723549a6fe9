// Runtime configuration
//
// Each flow reads its settings through a key lookup so that every network and
// program constant can be overridden per cluster. `from_env` reads the process
// environment; `from_lookup` takes any source (tests pass a map).
// Required keys are checked here, before any network client is created.

use std::{fmt, path::PathBuf, str::FromStr};

use solana_sdk::{pubkey::Pubkey, signature::Keypair};

use crate::{
    constants::*,
    errors::*,
    state::ActivationType,
    wallet::{default_keypair_path, load_base58_keypair},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cluster {
    Devnet,
    Mainnet,
}

impl FromStr for Cluster {
    type Err = ProvisionError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "devnet" => Ok(Cluster::Devnet),
            "mainnet" | "mainnet-beta" => Ok(Cluster::Mainnet),
            other => Err(ProvisionError::InvalidConfig {
                key: ENV_CLUSTER,
                reason: format!("unknown cluster '{}'", other),
            }),
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cluster::Devnet => write!(f, "devnet"),
            Cluster::Mainnet => write!(f, "mainnet"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub supply: u64,
    pub decimals: u8,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_TOKEN_NAME.to_string(),
            symbol: DEFAULT_TOKEN_SYMBOL.to_string(),
            uri: DEFAULT_TOKEN_URI.to_string(),
            supply: DEFAULT_TOKEN_SUPPLY,
            decimals: DEFAULT_DECIMALS,
        }
    }
}

pub struct LaunchConfig {
    pub rpc_url: String,
    pub admin: Keypair,
    pub token: TokenConfig,
    pub priority_fee_micro_lamports: u64,
    pub metadata_program: Pubkey,
}

impl LaunchConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup(ENV_SECRET_KEY).ok_or(ProvisionError::MissingEnv(ENV_SECRET_KEY))?;
        let admin = load_base58_keypair(&secret)?;

        let token = TokenConfig {
            name: lookup(ENV_TOKEN_NAME).unwrap_or_else(|| DEFAULT_TOKEN_NAME.to_string()),
            symbol: lookup(ENV_TOKEN_SYMBOL).unwrap_or_else(|| DEFAULT_TOKEN_SYMBOL.to_string()),
            uri: lookup(ENV_TOKEN_URI).unwrap_or_else(|| DEFAULT_TOKEN_URI.to_string()),
            supply: parse_or(&lookup, ENV_TOKEN_SUPPLY, DEFAULT_TOKEN_SUPPLY)?,
            decimals: parse_or(&lookup, ENV_TOKEN_DECIMALS, DEFAULT_DECIMALS)?,
        };

        Ok(Self {
            rpc_url: rpc_url(&lookup),
            admin,
            token,
            priority_fee_micro_lamports: parse_or(&lookup, ENV_PRIORITY_FEE, DEFAULT_PRIORITY_FEE_MICRO_LAMPORTS)?,
            metadata_program: parse_or(&lookup, ENV_METADATA_PROGRAM_ID, TOKEN_METADATA_PROGRAM_ID)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    pub rpc_url: String,
    pub keypair_path: PathBuf,
    pub dlmm_program: Pubkey,
    pub quote_mint: Pubkey,
    pub base_mint: Pubkey,
    pub bin_step: u16,
    pub fee_bps: u16,
    pub active_id: i32,
    pub activation_type: ActivationType,
}

impl PoolConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let keypair_path = match lookup(ENV_KEYPAIR_PATH) {
            Some(path) => PathBuf::from(path),
            None => default_keypair_path()?,
        };

        Ok(Self {
            rpc_url: rpc_url(&lookup),
            keypair_path,
            dlmm_program: parse_or(&lookup, ENV_DLMM_PROGRAM_ID, DLMM_PROGRAM_ID)?,
            quote_mint: parse_or(&lookup, ENV_QUOTE_MINT, USDC_DEVNET_MINT)?,
            base_mint: parse_or(&lookup, ENV_BASE_MINT, WSOL_MINT)?,
            bin_step: parse_or(&lookup, ENV_BIN_STEP, DEFAULT_BIN_STEP)?,
            fee_bps: parse_or(&lookup, ENV_FEE_BPS, DEFAULT_FEE_BPS)?,
            active_id: parse_or(&lookup, ENV_ACTIVE_ID, DEFAULT_ACTIVE_ID)?,
            activation_type: ActivationType::Slot,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BundleConfig {
    pub cluster: Cluster,
    pub rpc_url: String,
    pub block_engine_url: String,
    pub fallback_tip_accounts: Vec<Pubkey>,
}

impl BundleConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cluster = match lookup(ENV_CLUSTER) {
            Some(value) => value.parse()?,
            None => Cluster::Devnet,
        };

        let region = lookup(ENV_JITO_REGION).unwrap_or_else(|| DEFAULT_JITO_REGION.to_string());
        let block_engine_url = match lookup(ENV_JITO_ENDPOINT) {
            Some(url) => url,
            None => block_engine_url(&region)?,
        };

        let fallback_tip_accounts = match lookup(ENV_TIP_ACCOUNTS) {
            Some(list) => parse_pubkey_list(ENV_TIP_ACCOUNTS, list.split(','))?,
            None => parse_pubkey_list(ENV_TIP_ACCOUNTS, DEFAULT_TIP_ACCOUNTS.iter().copied())?,
        };

        Ok(Self {
            cluster,
            rpc_url: rpc_url(&lookup),
            block_engine_url,
            fallback_tip_accounts,
        })
    }
}

// Jito block engine bundles endpoint for a mainnet region
pub fn block_engine_url(region: &str) -> Result<String> {
    match region {
        "ny" | "amsterdam" | "frankfurt" | "tokyo" => Ok(format!(
            "https://{}.mainnet.block-engine.jito.wtf{}",
            region, JITO_BUNDLES_PATH
        )),
        other => Err(ProvisionError::InvalidConfig {
            key: ENV_JITO_REGION,
            reason: format!("unknown region '{}'", other),
        }),
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

fn rpc_url<F>(lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(ENV_RPC_URL).unwrap_or_else(|| DEFAULT_RPC_URL.to_string())
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ProvisionError::InvalidConfig {
            key,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

fn parse_pubkey_list<'a, I>(key: &'static str, items: I) -> Result<Vec<Pubkey>>
where
    I: Iterator<Item = &'a str>,
{
    let accounts = items
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            Pubkey::from_str(item).map_err(|e| ProvisionError::InvalidConfig {
                key,
                reason: format!("{}: {}", item, e),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if accounts.is_empty() {
        return Err(ProvisionError::InvalidConfig {
            key,
            reason: "at least one tip account is required".to_string(),
        });
    }

    Ok(accounts)
}
