//! Terraform CLI abstraction — implements the `TerraformManager` port.
//!
//! Only reads outputs (`terraform output -json`); plans and applies live
//! elsewhere in the provisioning pipeline.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::application::ports::{CommandRunner, TerraformManager, TerraformOutputs};

/// One entry of `terraform output -json`.
#[derive(Debug, Deserialize)]
struct TfOutput {
    value: serde_json::Value,
}

/// `terraform` CLI wrapper rooted at the environment's terraform
/// directory.
pub struct TerraformCli<R> {
    runner: R,
    working_dir: PathBuf,
}

impl<R: CommandRunner> TerraformCli<R> {
    #[must_use]
    pub fn new(runner: R, working_dir: PathBuf) -> Self {
        Self {
            runner,
            working_dir,
        }
    }
}

impl<R: CommandRunner> TerraformManager for TerraformCli<R> {
    async fn get_outputs(&self) -> Result<TerraformOutputs> {
        let chdir = format!("-chdir={}", self.working_dir.display());
        let output = self
            .runner
            .run("terraform", &[chdir.as_str(), "output", "-json"])
            .await?;
        anyhow::ensure!(
            output.status.success(),
            "terraform output failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );

        let raw: HashMap<String, TfOutput> =
            serde_json::from_slice(&output.stdout).context("parsing terraform outputs")?;
        let map = raw.into_iter().map(|(k, v)| (k, v.value)).collect();
        Ok(TerraformOutputs::new(map))
    }
}
