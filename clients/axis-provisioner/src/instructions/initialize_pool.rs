// Initialize Pool
//
// Creates a DLMM customizable permissionless pair for two mints.
// The pair is keyed by the ordered mints, so the same inputs always target
// the same pair address. There is no existence check before submitting.

use log::info;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use solana_system_interface::program::ID as SYSTEM_PROGRAM_ID;
use spl_associated_token_account::get_associated_token_address;

use crate::{
    constants::*,
    errors::*,
    helpers::*,
    state::{ActivationType, CustomizableParams},
    submit::{SendOptions, Submitter},
};

pub struct InitializePool<'a> {
    pub funder: &'a Keypair,         // Pays for the pair, must hold both tokens' ATAs
    pub dlmm_program: Pubkey,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    pub bin_step: u16,
    pub fee_bps: u16,
    pub active_id: i32,
    pub activation_type: ActivationType,
    pub activation_point: Option<u64>,
    pub has_alpha_vault: bool,
}

// Addresses and unsigned transactions produced for one pool creation
#[derive(Clone, Debug)]
pub struct PoolPlan {
    pub token_x: Pubkey,
    pub token_y: Pubkey,
    pub lb_pair: Pubkey,
    pub reserve_x: Pubkey,
    pub reserve_y: Pubkey,
    pub oracle: Pubkey,
    pub bitmap_extension: Option<Pubkey>,
    pub params: CustomizableParams,
    pub transactions: Vec<Vec<Instruction>>,
}

impl InitializePool<'_> {
    pub fn params(&self) -> Result<CustomizableParams> {
        let (base_factor, base_fee_power_factor) = compute_base_factor(self.bin_step, self.fee_bps)?;

        Ok(CustomizableParams {
            active_id: self.active_id,
            bin_step: self.bin_step,
            base_factor,
            activation_type: self.activation_type as u8,
            has_alpha_vault: self.has_alpha_vault,
            activation_point: self.activation_point,
            creator_pool_on_off_control: false,
            base_fee_power_factor,
            padding: [0u8; 62],
        })
    }

    pub fn plan(&self) -> Result<PoolPlan> {
        let program = self.dlmm_program;
        let funder = self.funder.pubkey();

        let (token_x, token_y) = order_mints(&self.mint_a, &self.mint_b)?;
        let params = self.params()?;

        let (lb_pair, _) = derive_customizable_lb_pair_pda(&program, &token_x, &token_y);
        let (reserve_x, _) = derive_reserve_pda(&program, &lb_pair, &token_x);
        let (reserve_y, _) = derive_reserve_pda(&program, &lb_pair, &token_y);
        let (oracle, _) = derive_oracle_pda(&program, &lb_pair);
        let (event_authority, _) = derive_event_authority_pda(&program);

        let bitmap_extension = requires_bitmap_extension(params.active_id)
            .then(|| derive_bitmap_extension_pda(&program, &lb_pair).0);

        let mut data = anchor_discriminator(INITIALIZE_CUSTOMIZABLE_PAIR_IX).to_vec();
        data.extend_from_slice(&borsh::to_vec(&params)?);

        // Anchor passes the program id in place of an omitted optional account
        let bitmap_meta = match bitmap_extension {
            Some(extension) => AccountMeta::new(extension, false),
            None => AccountMeta::new_readonly(program, false),
        };

        let instruction = Instruction {
            program_id: program,
            accounts: vec![
                AccountMeta::new(lb_pair, false),
                bitmap_meta,
                AccountMeta::new_readonly(token_x, false),
                AccountMeta::new_readonly(token_y, false),
                AccountMeta::new(reserve_x, false),
                AccountMeta::new(reserve_y, false),
                AccountMeta::new(oracle, false),
                AccountMeta::new_readonly(get_associated_token_address(&funder, &token_x), false),
                AccountMeta::new(funder, true),
                AccountMeta::new_readonly(spl_token::ID, false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
                AccountMeta::new_readonly(get_associated_token_address(&funder, &token_y), false),
                AccountMeta::new_readonly(event_authority, false),
                AccountMeta::new_readonly(program, false),
            ],
            data,
        };

        Ok(PoolPlan {
            token_x,
            token_y,
            lb_pair,
            reserve_x,
            reserve_y,
            oracle,
            bitmap_extension,
            params,
            transactions: vec![vec![instruction]],
        })
    }

    // Sign and submit every planned transaction in order, stopping at the first failure
    pub fn send<S: Submitter + ?Sized>(&self, submitter: &mut S) -> Result<(PoolPlan, Vec<Signature>)> {
        let plan = self.plan()?;
        let payer = self.funder.pubkey();

        info!("Token X: {}", plan.token_x);
        info!("Token Y: {}", plan.token_y);
        info!("Pair: {}", plan.lb_pair);

        let mut signatures = Vec::with_capacity(plan.transactions.len());
        for instructions in &plan.transactions {
            let mut transaction = Transaction::new_with_payer(instructions, Some(&payer));
            transaction.try_sign(&[self.funder], submitter.latest_blockhash()?)?;

            let signature = submitter.send_and_confirm(&transaction, SendOptions::PREFLIGHT)?;
            info!("Tx sent: {}", signature);
            signatures.push(signature);
        }

        Ok((plan, signatures))
    }
}
