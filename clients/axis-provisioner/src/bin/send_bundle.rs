// Forwards base-64 signed transactions (one per argument) as a bundle.
// With no arguments, prints the tip accounts currently in use.

use anyhow::Result;
use axis_provisioner::{bundle::BundleClient, config::BundleConfig};
use log::info;

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let client = BundleClient::new(BundleConfig::from_env()?);
    let transactions: Vec<String> = std::env::args().skip(1).collect();

    if transactions.is_empty() {
        for account in client.tip_accounts() {
            info!("Tip account: {}", account);
        }
        return Ok(());
    }

    let bundle_id = client.send_bundle(&transactions)?;
    info!("Bundle id: {}", bundle_id);

    if let Some(status) = client.bundle_status(&bundle_id) {
        info!(
            "Bundle status: slot {} ({})",
            status.slot,
            status.confirmation_status.as_deref().unwrap_or("unknown")
        );
    }
    Ok(())
}
