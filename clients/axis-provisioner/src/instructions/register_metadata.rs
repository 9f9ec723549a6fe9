// Register Metadata
//
// Creates the Token Metadata account for a mint. The mint must already exist.

use log::info;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
};
use solana_system_interface::program::ID as SYSTEM_PROGRAM_ID;

use crate::{
    constants::*,
    errors::*,
    helpers::derive_metadata_pda,
    state::{CreateMetadataAccountArgsV3, DataV2},
    submit::{sign_and_send, SendOptions, Submitter},
};

pub struct RegisterMetadata<'a> {
    pub authority: &'a Keypair,      // Mint authority, payer and update authority
    pub mint: Pubkey,
    pub metadata_program: Pubkey,
    pub name: &'a str,
    pub symbol: &'a str,
    pub uri: &'a str,
}

impl RegisterMetadata<'_> {
    pub fn metadata_address(&self) -> Pubkey {
        derive_metadata_pda(&self.metadata_program, &self.mint).0
    }

    pub fn instruction(&self) -> Result<Instruction> {
        let authority = self.authority.pubkey();

        let args = CreateMetadataAccountArgsV3 {
            data: DataV2::fungible(self.name, self.symbol, self.uri)?,
            is_mutable: true,
            collection_details: None,
        };

        let mut data = vec![CREATE_METADATA_ACCOUNT_V3_TAG];
        data.extend_from_slice(&borsh::to_vec(&args)?);

        Ok(Instruction {
            program_id: self.metadata_program,
            accounts: vec![
                AccountMeta::new(self.metadata_address(), false),       // metadata
                AccountMeta::new_readonly(self.mint, false),            // mint
                AccountMeta::new_readonly(authority, true),             // mint_authority
                AccountMeta::new(authority, true),                      // payer
                AccountMeta::new_readonly(authority, true),             // update_authority
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),    // system_program
            ],
            data,
        })
    }

    pub fn send<S: Submitter + ?Sized>(&self, submitter: &mut S) -> Result<Signature> {
        let instruction = self.instruction()?;

        let signature = sign_and_send(
            submitter,
            &[instruction],
            self.authority,
            &[self.authority],
            SendOptions::SKIP_PREFLIGHT,
        )?;

        info!("Metadata set: {} ({})", self.metadata_address(), self.symbol);
        Ok(signature)
    }
}
