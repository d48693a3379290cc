//! Azure CLI abstraction — implements the `GroupsClient` port.
//!
//! Shells out to the `az` binary rather than linking an SDK; the CLI
//! carries its own auth (`az login`) and JSON output is stable.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::application::ports::{CommandRunner, GroupsClient};
use crate::domain::ResourceGroup;
use crate::infra::command_runner::DELETE_TIMEOUT;

/// One entry of `az group list --output json`. Other fields are ignored.
#[derive(Debug, Deserialize)]
struct AzGroup {
    name: String,
}

/// `az` CLI wrapper over an injected command runner.
pub struct AzCli<R> {
    runner: R,
}

impl<R: CommandRunner> AzCli<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    async fn run_checked(&self, args: &[&str]) -> Result<Vec<u8>> {
        let output = self.runner.run("az", args).await?;
        anyhow::ensure!(
            output.status.success(),
            "az {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        );
        Ok(output.stdout)
    }
}

impl<R: CommandRunner> GroupsClient for AzCli<R> {
    async fn list(&self, query: &str, page_cap: Option<u32>) -> Result<Vec<ResourceGroup>> {
        let mut args = vec!["group", "list", "--output", "json"];
        if !query.is_empty() {
            args.extend(["--query", query]);
        }

        let stdout = self.run_checked(&args).await?;
        let groups: Vec<AzGroup> =
            serde_json::from_slice(&stdout).context("parsing az group list output")?;

        let mut groups: Vec<ResourceGroup> = groups
            .into_iter()
            .map(|g| ResourceGroup { name: g.name })
            .collect();
        if let Some(cap) = page_cap {
            groups.truncate(cap as usize);
        }
        Ok(groups)
    }

    async fn delete(&self, name: &str) -> Result<()> {
        let args = ["group", "delete", "--name", name, "--yes"];
        let output = self.runner.run_with_timeout("az", &args, DELETE_TIMEOUT).await?;
        anyhow::ensure!(
            output.status.success(),
            "az group delete failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
        Ok(())
    }
}
