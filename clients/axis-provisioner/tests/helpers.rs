// Tests for pure helpers and instruction encoding (no SVM needed)

use axis_provisioner::{
    constants::*,
    errors::ProvisionError,
    helpers::*,
    instructions::{InitializePool, RegisterMetadata},
    state::{ActivationType, CreateMetadataAccountArgsV3, CustomizableParams},
};
use borsh::BorshDeserialize;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use spl_associated_token_account::get_associated_token_address;

// ======================== AMOUNTS ========================

#[test]
fn test_scale_supply_is_exact() {
    assert_eq!(scale_supply(1_000_000_000, 9).unwrap(), 1_000_000_000_000_000_000);
    assert_eq!(scale_supply(10, 2).unwrap(), 1_000);
    assert_eq!(scale_supply(7, 0).unwrap(), 7);
}

#[test]
fn test_scale_supply_overflow() {
    // 19 * 10^18 > u64::MAX
    assert!(matches!(
        scale_supply(19, 18),
        Err(ProvisionError::SupplyOverflow { supply: 19, decimals: 18 })
    ));
    // 10^20 alone does not fit
    assert!(matches!(scale_supply(1, 20), Err(ProvisionError::SupplyOverflow { .. })));
}

// ======================== POOL ORDERING ========================

#[test]
fn test_order_mints_by_address_string() {
    // 'G' < 'S'
    let (x, y) = order_mints(&WSOL_MINT, &USDC_DEVNET_MINT).unwrap();
    assert_eq!(x, USDC_DEVNET_MINT);
    assert_eq!(y, WSOL_MINT);

    let (x, y) = order_mints(&USDC_DEVNET_MINT, &WSOL_MINT).unwrap();
    assert_eq!(x, USDC_DEVNET_MINT);
    assert_eq!(y, WSOL_MINT);
}

#[test]
fn test_order_mints_matches_string_comparison() {
    for _ in 0..32 {
        let a = Pubkey::new_unique();
        let b = Keypair::new().pubkey();
        let (x, y) = order_mints(&a, &b).unwrap();
        assert!(x.to_string() < y.to_string());
    }
}

#[test]
fn test_order_mints_rejects_identical() {
    assert!(matches!(
        order_mints(&WSOL_MINT, &WSOL_MINT),
        Err(ProvisionError::IdenticalTokenMints)
    ));
}

// ======================== FEES & BINS ========================

#[test]
fn test_compute_base_factor() {
    // 200 bps at bin step 100 -> 200 * 10_000 / 100
    assert_eq!(compute_base_factor(100, 200).unwrap(), (20_000, 0));
    assert_eq!(compute_base_factor(25, 25).unwrap(), (10_000, 0));
    // 1000 bps at bin step 1 -> 10_000_000, scaled to 10_000 * 10^3
    assert_eq!(compute_base_factor(1, 1_000).unwrap(), (10_000, 3));
}

#[test]
fn test_compute_base_factor_rejects_unrepresentable() {
    // 1 * 10_000 / 3 is not an integer
    assert!(matches!(
        compute_base_factor(3, 1),
        Err(ProvisionError::UnrepresentableFee { bin_step: 3, fee_bps: 1 })
    ));
    assert!(compute_base_factor(0, 200).is_err());
    assert!(compute_base_factor(100, 0).is_err());
}

#[test]
fn test_bitmap_extension_range() {
    assert_eq!(bin_id_to_bin_array_index(0), 0);
    assert_eq!(bin_id_to_bin_array_index(69), 0);
    assert_eq!(bin_id_to_bin_array_index(70), 1);
    assert_eq!(bin_id_to_bin_array_index(-1), -1);
    assert_eq!(bin_id_to_bin_array_index(-70), -1);
    assert_eq!(bin_id_to_bin_array_index(-71), -2);

    assert!(!requires_bitmap_extension(DEFAULT_ACTIVE_ID));
    assert!(!requires_bitmap_extension(511 * 70 + 69));
    assert!(requires_bitmap_extension(512 * 70));
    assert!(!requires_bitmap_extension(-512 * 70));
    assert!(requires_bitmap_extension(-512 * 70 - 1));
}

#[test]
fn test_anchor_discriminator_is_sighash_prefix() {
    let a = anchor_discriminator(INITIALIZE_CUSTOMIZABLE_PAIR_IX);
    let b = anchor_discriminator(INITIALIZE_CUSTOMIZABLE_PAIR_IX);
    assert_eq!(a, b);
    assert_ne!(a, anchor_discriminator("initialize_lb_pair"));
}

// ======================== METADATA ========================

#[test]
fn test_metadata_pda_is_deterministic() {
    let mint = Pubkey::new_unique();

    let (first, bump) = derive_metadata_pda(&TOKEN_METADATA_PROGRAM_ID, &mint);
    let (second, _) = derive_metadata_pda(&TOKEN_METADATA_PROGRAM_ID, &mint);
    assert_eq!(first, second);

    let expected = Pubkey::create_program_address(
        &[b"metadata", TOKEN_METADATA_PROGRAM_ID.as_ref(), mint.as_ref(), &[bump]],
        &TOKEN_METADATA_PROGRAM_ID,
    )
    .unwrap();
    assert_eq!(first, expected);

    let (other, _) = derive_metadata_pda(&TOKEN_METADATA_PROGRAM_ID, &Pubkey::new_unique());
    assert_ne!(first, other);
}

#[test]
fn test_register_metadata_instruction() {
    let authority = Keypair::new();
    let mint = Pubkey::new_unique();

    let register = RegisterMetadata {
        authority: &authority,
        mint,
        metadata_program: TOKEN_METADATA_PROGRAM_ID,
        name: DEFAULT_TOKEN_NAME,
        symbol: DEFAULT_TOKEN_SYMBOL,
        uri: DEFAULT_TOKEN_URI,
    };
    let ix = register.instruction().unwrap();

    assert_eq!(ix.program_id, TOKEN_METADATA_PROGRAM_ID);
    assert_eq!(ix.accounts[0].pubkey, derive_metadata_pda(&TOKEN_METADATA_PROGRAM_ID, &mint).0);
    assert!(ix.accounts[0].is_writable);
    assert_eq!(ix.accounts[1].pubkey, mint);
    assert!(ix.accounts[2].is_signer, "Mint authority signs");
    assert!(ix.accounts[3].is_signer && ix.accounts[3].is_writable, "Payer signs and pays");

    assert_eq!(ix.data[0], CREATE_METADATA_ACCOUNT_V3_TAG);
    let args = CreateMetadataAccountArgsV3::try_from_slice(&ix.data[1..]).unwrap();
    assert_eq!(args.data.name, DEFAULT_TOKEN_NAME);
    assert_eq!(args.data.symbol, DEFAULT_TOKEN_SYMBOL);
    assert_eq!(args.data.uri, DEFAULT_TOKEN_URI);
    assert_eq!(args.data.seller_fee_basis_points, 0);
    assert!(args.data.creators.is_none() && args.data.collection.is_none() && args.data.uses.is_none());
    assert!(args.is_mutable);
    assert!(args.collection_details.is_none());
}

// ======================== POOL INSTRUCTION ========================

#[test]
fn test_initialize_pool_plan() {
    let funder = Keypair::new();

    let pool = InitializePool {
        funder: &funder,
        dlmm_program: DLMM_PROGRAM_ID,
        mint_a: WSOL_MINT,
        mint_b: USDC_DEVNET_MINT,
        bin_step: DEFAULT_BIN_STEP,
        fee_bps: DEFAULT_FEE_BPS,
        active_id: DEFAULT_ACTIVE_ID,
        activation_type: ActivationType::Slot,
        activation_point: None,
        has_alpha_vault: false,
    };
    let plan = pool.plan().unwrap();

    assert_eq!(plan.token_x, USDC_DEVNET_MINT);
    assert_eq!(plan.token_y, WSOL_MINT);
    assert_eq!(
        plan.lb_pair,
        derive_customizable_lb_pair_pda(&DLMM_PROGRAM_ID, &WSOL_MINT, &USDC_DEVNET_MINT).0,
        "Pair address must not depend on argument order"
    );
    assert!(plan.bitmap_extension.is_none());
    assert_eq!(plan.transactions.len(), 1);

    let ix = &plan.transactions[0][0];
    assert_eq!(ix.program_id, DLMM_PROGRAM_ID);
    assert_eq!(ix.accounts[0].pubkey, plan.lb_pair);
    assert_eq!(ix.accounts[1].pubkey, DLMM_PROGRAM_ID, "Omitted bitmap extension");
    assert_eq!(ix.accounts[2].pubkey, plan.token_x);
    assert_eq!(ix.accounts[3].pubkey, plan.token_y);
    assert_eq!(ix.accounts[4].pubkey, plan.reserve_x);
    assert_eq!(ix.accounts[5].pubkey, plan.reserve_y);
    assert_eq!(ix.accounts[6].pubkey, plan.oracle);
    assert_eq!(ix.accounts[7].pubkey, get_associated_token_address(&funder.pubkey(), &plan.token_x));
    assert_eq!(ix.accounts[8].pubkey, funder.pubkey());
    assert!(ix.accounts[8].is_signer);
    assert_eq!(ix.accounts[11].pubkey, get_associated_token_address(&funder.pubkey(), &plan.token_y));

    assert_eq!(ix.data[..8], anchor_discriminator(INITIALIZE_CUSTOMIZABLE_PAIR_IX));
    let params = CustomizableParams::try_from_slice(&ix.data[8..]).unwrap();
    assert_eq!(params, plan.params);
    assert_eq!(params.active_id, DEFAULT_ACTIVE_ID);
    assert_eq!(params.bin_step, DEFAULT_BIN_STEP);
    assert_eq!(params.base_factor, 20_000);
    assert_eq!(params.base_fee_power_factor, 0);
    assert_eq!(params.activation_type, ActivationType::Slot as u8);
    assert!(!params.has_alpha_vault);
    assert!(params.activation_point.is_none());
}

#[test]
fn test_initialize_pool_plan_with_far_active_bin() {
    let funder = Keypair::new();

    let pool = InitializePool {
        funder: &funder,
        dlmm_program: DLMM_PROGRAM_ID,
        mint_a: WSOL_MINT,
        mint_b: USDC_DEVNET_MINT,
        bin_step: DEFAULT_BIN_STEP,
        fee_bps: DEFAULT_FEE_BPS,
        active_id: 512 * MAX_BIN_PER_ARRAY,
        activation_type: ActivationType::Timestamp,
        activation_point: Some(1_700_000_000),
        has_alpha_vault: false,
    };
    let plan = pool.plan().unwrap();

    let extension = derive_bitmap_extension_pda(&DLMM_PROGRAM_ID, &plan.lb_pair).0;
    assert_eq!(plan.bitmap_extension, Some(extension));

    let ix = &plan.transactions[0][0];
    assert_eq!(ix.accounts[1].pubkey, extension);
    assert!(ix.accounts[1].is_writable);
}
