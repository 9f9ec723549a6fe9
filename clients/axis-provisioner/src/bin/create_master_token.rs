// Creates the AXIS mint, registers its metadata and mints the full supply to the admin.
//
// Required: SERVER_PRIVATE_KEY (base-58). Optional: HELIUS_RPC_URL and the AXIS_TOKEN_* overrides.

use anyhow::Result;
use axis_provisioner::{config::LaunchConfig, launch_token, RpcSubmitter};
use log::info;
use solana_sdk::signature::Keypair;

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = LaunchConfig::from_env()?;
    let mut submitter = RpcSubmitter::new(&config.rpc_url);

    let mint = Keypair::new();
    let report = launch_token(&mut submitter, &config, &mint)?;

    info!("Mint Address: {}", report.mint);
    info!("Metadata: {}", report.metadata);
    info!("Admin token account: {}", report.admin_token_account);
    Ok(())
}
