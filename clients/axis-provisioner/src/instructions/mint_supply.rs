// Mint Supply
//
// Creates the authority's associated token account (if absent) and mints
// the whole fixed supply into it.

use log::info;
use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
};
use spl_associated_token_account::{
    get_associated_token_address, instruction::create_associated_token_account_idempotent,
};

use crate::{
    errors::*,
    helpers::scale_supply,
    submit::{sign_and_send, SendOptions, Submitter},
};

pub struct MintSupply<'a> {
    pub authority: &'a Keypair,      // Mint authority, receives the supply
    pub mint: Pubkey,
    pub supply: u64,                 // Whole tokens
    pub decimals: u8,
    pub priority_fee_micro_lamports: u64,
}

impl MintSupply<'_> {
    pub fn token_account(&self) -> Pubkey {
        get_associated_token_address(&self.authority.pubkey(), &self.mint)
    }

    pub fn base_units(&self) -> Result<u64> {
        scale_supply(self.supply, self.decimals)
    }

    pub fn instructions(&self) -> Result<Vec<Instruction>> {
        let authority = self.authority.pubkey();
        let token_account = self.token_account();

        let create_ata_ix = create_associated_token_account_idempotent(
            &authority,
            &authority,
            &self.mint,
            &spl_token::ID,
        );

        let mint_to_ix = spl_token::instruction::mint_to(
            &spl_token::ID,
            &self.mint,
            &token_account,
            &authority,
            &[],
            self.base_units()?,
        )
        .map_err(|e| ProvisionError::Instruction(e.to_string()))?;

        Ok(vec![
            ComputeBudgetInstruction::set_compute_unit_price(self.priority_fee_micro_lamports),
            create_ata_ix,
            mint_to_ix,
        ])
    }

    pub fn send<S: Submitter + ?Sized>(&self, submitter: &mut S) -> Result<Signature> {
        let instructions = self.instructions()?;

        let signature = sign_and_send(
            submitter,
            &instructions,
            self.authority,
            &[self.authority],
            SendOptions::SKIP_PREFLIGHT,
        )?;

        info!(
            "Minted {} base units ({} tokens) into {}",
            self.base_units()?,
            self.supply,
            self.token_account()
        );
        Ok(signature)
    }
}
