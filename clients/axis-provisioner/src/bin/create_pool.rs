// Creates the DLMM pair for the configured quote and base mints using the local CLI keypair.

use anyhow::Result;
use axis_provisioner::{config::PoolConfig, create_pool, wallet::load_keypair_file, RpcSubmitter};
use log::info;

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PoolConfig::from_env()?;
    let funder = load_keypair_file(&config.keypair_path)?;
    let mut submitter = RpcSubmitter::new(&config.rpc_url);

    let report = create_pool(&mut submitter, &config, &funder)?;

    info!(
        "Pool Created! {} ({} transaction(s))",
        report.plan.lb_pair,
        report.signatures.len()
    );
    Ok(())
}
