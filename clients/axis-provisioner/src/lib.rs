// Axis Provisioner
//
// Client-side provisioning for the Axis index token and its liquidity.
//
// Flows:
// - launch_token: create mint -> register metadata -> mint full supply to admin
// - create_pool: create a DLMM customizable permissionless pair (X/Y by address order)
// - BundleClient::send_bundle: forward signed transactions to a Jito block engine
//
// Every flow is sequential and blocking. A failed step ends the run with no
// retry and no rollback.

pub mod bundle;
pub mod config;
pub mod constants;
pub mod errors;
pub mod helpers;
pub mod instructions;
pub mod launch;
pub mod state;
pub mod submit;
pub mod wallet;

pub use errors::{ProvisionError, Result};
pub use launch::{create_pool, launch_token, LaunchReport, PoolReport, Step, StepStatus};
pub use submit::{RpcSubmitter, SendOptions, Submitter};
