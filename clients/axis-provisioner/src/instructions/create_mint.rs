// Create Mint
//
// Creates the token mint account and initializes it in a single transaction:
// priority fee, system account creation sized for a mint, mint initialization.

use log::info;
use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_program_pack::Pack;
use solana_sdk::{
    instruction::Instruction,
    signature::{Keypair, Signature, Signer},
};
use solana_system_interface::instruction as system_instruction;
use spl_token::state::Mint;

use crate::{
    errors::*,
    submit::{sign_and_send, SendOptions, Submitter},
};

pub struct CreateMint<'a> {
    pub payer: &'a Keypair,          // Funds rent, becomes mint authority
    pub mint: &'a Keypair,           // Fresh account for the mint
    pub decimals: u8,
    pub priority_fee_micro_lamports: u64,
}

impl CreateMint<'_> {
    pub fn instructions(&self, rent_lamports: u64) -> Result<Vec<Instruction>> {
        let payer = self.payer.pubkey();
        let mint = self.mint.pubkey();

        let create_account_ix = system_instruction::create_account(
            &payer,
            &mint,
            rent_lamports,
            Mint::LEN as u64,
            &spl_token::ID,
        );

        // No freeze authority
        let initialize_mint_ix =
            spl_token::instruction::initialize_mint2(&spl_token::ID, &mint, &payer, None, self.decimals)
                .map_err(|e| ProvisionError::Instruction(e.to_string()))?;

        Ok(vec![
            ComputeBudgetInstruction::set_compute_unit_price(self.priority_fee_micro_lamports),
            create_account_ix,
            initialize_mint_ix,
        ])
    }

    pub fn send<S: Submitter + ?Sized>(&self, submitter: &mut S) -> Result<Signature> {
        let rent_lamports = submitter.minimum_balance_for_rent_exemption(Mint::LEN)?;
        let instructions = self.instructions(rent_lamports)?;

        let signature = sign_and_send(
            submitter,
            &instructions,
            self.payer,
            &[self.payer, self.mint],
            SendOptions::SKIP_PREFLIGHT,
        )?;

        info!("Token created: {} ({} decimals)", self.mint.pubkey(), self.decimals);
        Ok(signature)
    }
}
