// Provisioning Helper Functions
//
// Pure calculation and address-derivation helpers shared by the
// instruction builders. Nothing in here touches the network.

use sha2::{Digest, Sha256};
use solana_sdk::pubkey::Pubkey;

use crate::{constants::*, errors::*};

// AMOUNT HELPERS

// Scale a whole-token supply to base units: supply * 10^decimals
// Integer-only so large supplies never lose precision
pub fn scale_supply(supply: u64, decimals: u8) -> Result<u64> {
    10u64
        .checked_pow(decimals as u32)
        .and_then(|unit| supply.checked_mul(unit))
        .ok_or(ProvisionError::SupplyOverflow { supply, decimals })
}

// POOL HELPERS

// Order two mints into the pool's (X, Y) pair
// X is the mint whose base-58 address string sorts first
pub fn order_mints(a: &Pubkey, b: &Pubkey) -> Result<(Pubkey, Pubkey)> {
    if a == b {
        return Err(ProvisionError::IdenticalTokenMints);
    }

    if a.to_string() < b.to_string() {
        Ok((*a, *b))
    } else {
        Ok((*b, *a))
    }
}

// Convert a fee in basis points into the DLMM (base_factor, base_fee_power_factor) pair
// Formula: fee_bps = base_factor * bin_step * 10^power / BASIS_POINT_MAX
//
// The base factor is a u16, so large fees are scaled down by powers of ten.
// Any remainder means the fee is not representable and is rejected.
pub fn compute_base_factor(bin_step: u16, fee_bps: u16) -> Result<(u16, u8)> {
    let unrepresentable = ProvisionError::UnrepresentableFee { bin_step, fee_bps };

    if bin_step == 0 || fee_bps == 0 {
        return Err(unrepresentable);
    }

    let scaled = (fee_bps as u64) * BASIS_POINT_MAX;
    if scaled % bin_step as u64 != 0 {
        return Err(unrepresentable);
    }

    let mut base_factor = scaled / bin_step as u64;
    let mut power_factor: u8 = 0;

    while base_factor > u16::MAX as u64 {
        if base_factor % 10 != 0 {
            return Err(unrepresentable);
        }
        base_factor /= 10;
        power_factor += 1;
    }

    Ok((base_factor as u16, power_factor))
}

// Index of the bin array holding `bin_id` (floor division, also for negative ids)
pub fn bin_id_to_bin_array_index(bin_id: i32) -> i32 {
    bin_id.div_euclid(MAX_BIN_PER_ARRAY)
}

// The pair's built-in bitmap covers bin array indexes -512..=511
// Anything outside requires the bitmap extension account
pub fn requires_bitmap_extension(active_id: i32) -> bool {
    let index = bin_id_to_bin_array_index(active_id);
    index < -BIN_ARRAY_BITMAP_SIZE || index > BIN_ARRAY_BITMAP_SIZE - 1
}

/// Anchor instruction discriminator: first 8 bytes of sha256("global:<name>")
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash = Sha256::digest(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash[..8]);
    discriminator
}

// PDA HELPERS

/// Metadata account: seeds ["metadata", metadata_program, mint]
pub fn derive_metadata_pda(metadata_program: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[METADATA_SEED, metadata_program.as_ref(), mint.as_ref()],
        metadata_program,
    )
}

/// Customizable permissionless pair: seeds [ILM_BASE_KEY, min(x, y), max(x, y)]
/// The seed order uses raw key bytes, independent of the (X, Y) string ordering.
pub fn derive_customizable_lb_pair_pda(
    dlmm_program: &Pubkey,
    token_x: &Pubkey,
    token_y: &Pubkey,
) -> (Pubkey, u8) {
    let (min_key, max_key) = if token_x < token_y {
        (token_x, token_y)
    } else {
        (token_y, token_x)
    };

    Pubkey::find_program_address(
        &[ILM_BASE_KEY.as_ref(), min_key.as_ref(), max_key.as_ref()],
        dlmm_program,
    )
}

pub fn derive_reserve_pda(dlmm_program: &Pubkey, lb_pair: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[lb_pair.as_ref(), mint.as_ref()], dlmm_program)
}

pub fn derive_oracle_pda(dlmm_program: &Pubkey, lb_pair: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ORACLE_SEED, lb_pair.as_ref()], dlmm_program)
}

pub fn derive_bitmap_extension_pda(dlmm_program: &Pubkey, lb_pair: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[BITMAP_SEED, lb_pair.as_ref()], dlmm_program)
}

pub fn derive_event_authority_pda(dlmm_program: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[EVENT_AUTHORITY_SEED], dlmm_program)
}
