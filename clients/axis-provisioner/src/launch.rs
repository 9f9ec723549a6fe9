// Token launch and pool flows
//
// Steps run strictly in order and each one blocks until confirmed.
// A failed step ends the run: nothing is retried and nothing already
// confirmed on-chain is rolled back. The error lists which steps were
// confirmed so the partial state can be reconciled by hand.

use std::fmt;

use log::{error, info};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
};

use crate::{
    config::{LaunchConfig, PoolConfig},
    errors::*,
    instructions::*,
    submit::Submitter,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    CreateMint,
    RegisterMetadata,
    MintSupply,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::CreateMint => "create mint",
            Step::RegisterMetadata => "register metadata",
            Step::MintSupply => "mint supply",
        };
        f.write_str(name)
    }
}

// UNSTARTED -> SUBMITTED -> CONFIRMED | FAILED
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Unstarted,
    Submitted,
    Confirmed(Signature),
    Failed,
}

#[derive(Clone, Debug)]
pub struct LaunchReport {
    pub mint: Pubkey,
    pub metadata: Pubkey,
    pub admin_token_account: Pubkey,
    pub base_units: u64,
    steps: Vec<(Step, StepStatus)>,
}

impl LaunchReport {
    fn new(mint: Pubkey, metadata: Pubkey, admin_token_account: Pubkey, base_units: u64) -> Self {
        Self {
            mint,
            metadata,
            admin_token_account,
            base_units,
            steps: [Step::CreateMint, Step::RegisterMetadata, Step::MintSupply]
                .into_iter()
                .map(|step| (step, StepStatus::Unstarted))
                .collect(),
        }
    }

    pub fn status(&self, step: Step) -> StepStatus {
        self.steps
            .iter()
            .find(|(s, _)| *s == step)
            .map(|(_, status)| *status)
            .unwrap_or(StepStatus::Unstarted)
    }

    pub fn confirmed_steps(&self) -> Vec<Step> {
        self.steps
            .iter()
            .filter(|(_, status)| matches!(status, StepStatus::Confirmed(_)))
            .map(|(step, _)| *step)
            .collect()
    }

    fn set(&mut self, step: Step, status: StepStatus) {
        if let Some(entry) = self.steps.iter_mut().find(|(s, _)| *s == step) {
            entry.1 = status;
        }
    }

    // Drive one step through the state machine
    fn run<F>(&mut self, step: Step, submit: F) -> Result<Signature>
    where
        F: FnOnce() -> Result<Signature>,
    {
        self.set(step, StepStatus::Submitted);

        match submit() {
            Ok(signature) => {
                self.set(step, StepStatus::Confirmed(signature));
                Ok(signature)
            }
            Err(source) => {
                self.set(step, StepStatus::Failed);
                error!("{} failed for mint {}: {}", step, self.mint, source);
                Err(ProvisionError::StepFailed {
                    step,
                    mint: self.mint,
                    completed: self.confirmed_steps(),
                    source: Box::new(source),
                })
            }
        }
    }
}

/// Create the mint, register its metadata and mint the full supply to the admin.
pub fn launch_token<S: Submitter + ?Sized>(
    submitter: &mut S,
    config: &LaunchConfig,
    mint: &Keypair,
) -> Result<LaunchReport> {
    let admin = &config.admin;
    let token = &config.token;

    let create_mint = CreateMint {
        payer: admin,
        mint,
        decimals: token.decimals,
        priority_fee_micro_lamports: config.priority_fee_micro_lamports,
    };

    let register_metadata = RegisterMetadata {
        authority: admin,
        mint: mint.pubkey(),
        metadata_program: config.metadata_program,
        name: &token.name,
        symbol: &token.symbol,
        uri: &token.uri,
    };

    let mint_supply = MintSupply {
        authority: admin,
        mint: mint.pubkey(),
        supply: token.supply,
        decimals: token.decimals,
        priority_fee_micro_lamports: config.priority_fee_micro_lamports,
    };

    // Everything that can be checked offline is checked before the first submission
    register_metadata.instruction()?;
    let base_units = mint_supply.base_units()?;

    let mut report = LaunchReport::new(
        mint.pubkey(),
        register_metadata.metadata_address(),
        mint_supply.token_account(),
        base_units,
    );

    info!("Admin: {}", admin.pubkey());
    info!("Mint address: {}", mint.pubkey());

    report.run(Step::CreateMint, || create_mint.send(submitter))?;
    report.run(Step::RegisterMetadata, || register_metadata.send(submitter))?;
    report.run(Step::MintSupply, || mint_supply.send(submitter))?;

    info!(
        "Done! Admin now holds {} {} in {}",
        token.supply, token.symbol, report.admin_token_account
    );
    Ok(report)
}

#[derive(Clone, Debug)]
pub struct PoolReport {
    pub plan: PoolPlan,
    pub signatures: Vec<Signature>,
}

/// Create the DLMM pair for the configured quote and base mints.
pub fn create_pool<S: Submitter + ?Sized>(
    submitter: &mut S,
    config: &PoolConfig,
    funder: &Keypair,
) -> Result<PoolReport> {
    let initialize_pool = InitializePool {
        funder,
        dlmm_program: config.dlmm_program,
        mint_a: config.base_mint,
        mint_b: config.quote_mint,
        bin_step: config.bin_step,
        fee_bps: config.fee_bps,
        active_id: config.active_id,
        activation_type: config.activation_type,
        activation_point: None,
        has_alpha_vault: false,
    };

    // Mint ordering and fee encoding are checked before anything is submitted
    let expected = initialize_pool.plan()?;

    info!("Initializing pool with wallet: {}", funder.pubkey());

    let (plan, signatures) = initialize_pool.send(submitter).map_err(|source| {
        error!("initialize pool failed for pair {}: {}", expected.lb_pair, source);
        ProvisionError::PoolFailed {
            lb_pair: expected.lb_pair,
            token_x: expected.token_x,
            token_y: expected.token_y,
            source: Box::new(source),
        }
    })?;

    info!("Pool created: {}", plan.lb_pair);
    Ok(PoolReport { plan, signatures })
}
