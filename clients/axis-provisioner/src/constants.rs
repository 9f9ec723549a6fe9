// Axis Provisioner Constants

use solana_sdk::{pubkey, pubkey::Pubkey};

// Network
pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";

// Token defaults
pub const DEFAULT_TOKEN_NAME: &str = "Axis Protocol ETF";
pub const DEFAULT_TOKEN_SYMBOL: &str = "AXIS";
pub const DEFAULT_TOKEN_URI: &str = "https://axis-api.yusukekikuta-05.workers.dev/metadata/AXIS";
pub const DEFAULT_TOKEN_SUPPLY: u64 = 1_000_000_000; // 1B whole tokens
pub const DEFAULT_DECIMALS: u8 = 9;
pub const DEFAULT_PRIORITY_FEE_MICRO_LAMPORTS: u64 = 500_000;

// Token Metadata program
pub const TOKEN_METADATA_PROGRAM_ID: Pubkey = pubkey!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");
pub const METADATA_SEED: &[u8] = b"metadata";
pub const CREATE_METADATA_ACCOUNT_V3_TAG: u8 = 33;
pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_SYMBOL_LENGTH: usize = 10;
pub const MAX_URI_LENGTH: usize = 200;

// Meteora DLMM program
pub const DLMM_PROGRAM_ID: Pubkey = pubkey!("LBUZKhRxPF3XUpBCjp4YzTKgLccjZhTSDM9YuVaPwxo");
pub const ILM_BASE_KEY: Pubkey = pubkey!("MFGQxwAmB91SwuYX36okv2Qmdc9aMuHTwWGUrp4AtB1");
pub const ORACLE_SEED: &[u8] = b"oracle";
pub const BITMAP_SEED: &[u8] = b"bitmap";
pub const EVENT_AUTHORITY_SEED: &[u8] = b"__event_authority";
pub const INITIALIZE_CUSTOMIZABLE_PAIR_IX: &str = "initialize_customizable_permissionless_lb_pair";
pub const BASIS_POINT_MAX: u64 = 10_000;
pub const MAX_BIN_PER_ARRAY: i32 = 70;
pub const BIN_ARRAY_BITMAP_SIZE: i32 = 512;

// Pool defaults
pub const USDC_DEVNET_MINT: Pubkey = pubkey!("Gh9ZwEmdLJ8DscKNTkTqPbNwLNNBjuSzaG9Vp2KGtKJr");
pub const WSOL_MINT: Pubkey = pubkey!("So11111111111111111111111111111111111111112");
pub const DEFAULT_BIN_STEP: u16 = 100;
pub const DEFAULT_FEE_BPS: u16 = 200; // 2%
pub const DEFAULT_ACTIVE_ID: i32 = 10_000;

// Jito block engine
pub const JITO_BUNDLES_PATH: &str = "/api/v1/bundles";
pub const DEFAULT_JITO_REGION: &str = "tokyo";
pub const DEFAULT_TIP_LAMPORTS: u64 = 1_000;
pub const DEFAULT_TIP_ACCOUNTS: [&str; 5] = [
    "96gYZGLnJYVFmbjzopPSU6QiEV5fGqZNyN9nmNhvrZU5",
    "HFqU5x63VTqvQss8hp11i4bVe4Rb5s5PN37khvGxD4Nj",
    "Cw8CFyM9FkoMi7K7Crf6HNQqf4uEMzpKw6QNghXLvLkY",
    "ADaUMid9yfUytqMBgopwjb2DTLSokTSzL1zt6iGPaS49",
    "DfXygSm4jCyNCybVYYK6DwvWqjKee8pbDmJGdLWRUWXQ",
];
pub const BUNDLE_SEND_MAX_RETRIES: usize = 3;

// Environment keys
pub const ENV_SECRET_KEY: &str = "SERVER_PRIVATE_KEY";
pub const ENV_RPC_URL: &str = "HELIUS_RPC_URL";
pub const ENV_CLUSTER: &str = "AXIS_CLUSTER";
pub const ENV_TOKEN_NAME: &str = "AXIS_TOKEN_NAME";
pub const ENV_TOKEN_SYMBOL: &str = "AXIS_TOKEN_SYMBOL";
pub const ENV_TOKEN_URI: &str = "AXIS_TOKEN_URI";
pub const ENV_TOKEN_SUPPLY: &str = "AXIS_TOKEN_SUPPLY";
pub const ENV_TOKEN_DECIMALS: &str = "AXIS_TOKEN_DECIMALS";
pub const ENV_PRIORITY_FEE: &str = "AXIS_PRIORITY_FEE_MICRO_LAMPORTS";
pub const ENV_METADATA_PROGRAM_ID: &str = "METADATA_PROGRAM_ID";
pub const ENV_DLMM_PROGRAM_ID: &str = "DLMM_PROGRAM_ID";
pub const ENV_QUOTE_MINT: &str = "AXIS_QUOTE_MINT";
pub const ENV_BASE_MINT: &str = "AXIS_BASE_MINT";
pub const ENV_BIN_STEP: &str = "AXIS_BIN_STEP";
pub const ENV_FEE_BPS: &str = "AXIS_FEE_BPS";
pub const ENV_ACTIVE_ID: &str = "AXIS_ACTIVE_ID";
pub const ENV_KEYPAIR_PATH: &str = "SOLANA_KEYPAIR_PATH";
pub const ENV_JITO_REGION: &str = "JITO_REGION";
pub const ENV_JITO_ENDPOINT: &str = "JITO_BLOCK_ENGINE_URL";
pub const ENV_TIP_ACCOUNTS: &str = "JITO_TIP_ACCOUNTS";
