// Signing identity loaders

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use solana_sdk::signature::Keypair;

use crate::errors::*;

/// Decode a base-58 encoded 64-byte secret key.
pub fn load_base58_keypair(secret: &str) -> Result<Keypair> {
    let bytes = bs58::decode(secret.trim())
        .into_vec()
        .map_err(|e| ProvisionError::InvalidSecretKey(e.to_string()))?;

    keypair_from_bytes(&bytes)
}

/// Read a keypair file in the Solana CLI format (JSON array of 64 bytes).
pub fn load_keypair_file(path: &Path) -> Result<Keypair> {
    if !path.exists() {
        return Err(ProvisionError::KeypairFileMissing(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path).map_err(|source| ProvisionError::KeypairFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let bytes: Vec<u8> = serde_json::from_str(&contents)
        .map_err(|e| ProvisionError::InvalidSecretKey(e.to_string()))?;

    keypair_from_bytes(&bytes)
}

// ~/.config/solana/id.json
pub fn default_keypair_path() -> Result<PathBuf> {
    let home = env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .ok_or(ProvisionError::HomeDirUnavailable)?;

    Ok(PathBuf::from(home).join(".config").join("solana").join("id.json"))
}

fn keypair_from_bytes(bytes: &[u8]) -> Result<Keypair> {
    if bytes.len() != 64 {
        return Err(ProvisionError::InvalidSecretKey(format!(
            "expected 64 bytes, got {}",
            bytes.len()
        )));
    }

    Keypair::try_from(bytes).map_err(|e| ProvisionError::InvalidSecretKey(e.to_string()))
}
