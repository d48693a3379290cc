//! Persisted deployment state.
//!
//! The state file (`groundwork-state.json` in the state directory) records
//! what a previous `groundwork` run created. Commands treat it as read-only
//! input; its lifecycle belongs to the state store.

use serde::{Deserialize, Serialize};

/// File name of the persisted state inside the state directory.
pub const STATE_FILE: &str = "groundwork-state.json";

/// Deployment state persisted to `<state-dir>/groundwork-state.json`.
///
/// Every field defaults so that older, sparser state files still load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeploymentState {
    /// State schema version.
    pub version: u64,
    /// Cloud provider the environment was created on, e.g. `"azure"`.
    pub iaas: String,
    /// When true, the environment has no BOSH director; only terraform
    /// outputs exist.
    pub no_director: bool,
    /// Director credentials, empty in no-director mode.
    pub director: Director,
    /// Jumpbox (bastion) descriptor.
    pub jumpbox: Jumpbox,
}

/// BOSH director credentials and endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Director {
    pub username: String,
    pub password: String,
    /// Director API endpoint, e.g. `"https://10.0.0.6:25555"`.
    pub address: String,
    /// CA certificate for the director's TLS endpoint (PEM).
    pub ca_cert: String,
}

/// Jumpbox descriptor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Jumpbox {
    /// `host:port` the SSH tunnel dials, e.g. `"203.0.113.4:22"`.
    pub url: String,
}
