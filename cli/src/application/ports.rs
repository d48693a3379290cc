//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Output;

use anyhow::Result;

use crate::domain::ResourceGroup;

// ── Value Types ───────────────────────────────────────────────────────────────

/// Terraform outputs as a key → value mapping.
///
/// Values keep their raw JSON shape; most consumers only want strings.
#[derive(Debug, Clone, Default)]
pub struct TerraformOutputs {
    map: HashMap<String, serde_json::Value>,
}

impl TerraformOutputs {
    #[must_use]
    pub fn new(map: HashMap<String, serde_json::Value>) -> Self {
        Self { map }
    }

    /// Get a string output, or `""` when the key is missing or not a string.
    #[must_use]
    pub fn get_string(&self, key: &str) -> String {
        self.map
            .get(key)
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string()
    }
}

// ── Provider Ports ────────────────────────────────────────────────────────────

/// Provider listing/deletion client for Azure resource groups.
#[allow(async_fn_in_trait)]
pub trait GroupsClient {
    /// List resource groups. `query` is a provider-side filter expression
    /// (empty means no filter); `page_cap` bounds the result count when set.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider call fails.
    async fn list(&self, query: &str, page_cap: Option<u32>) -> Result<Vec<ResourceGroup>>;

    /// Delete the named resource group.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider rejects or fails the deletion.
    async fn delete(&self, name: &str) -> Result<()>;
}

/// Interactive yes/no confirmation before destructive actions.
pub trait Prompter {
    /// Ask whether `kind` `name` should be deleted. `false` skips the
    /// resource without error.
    fn confirm_deletion(&self, kind: &str, name: &str) -> bool;
}

// ── Deployment State Ports ────────────────────────────────────────────────────

/// Validates that a deployment state exists before a command runs.
pub trait StateValidator {
    /// # Errors
    ///
    /// Returns an error if no usable state is present.
    fn validate(&self) -> Result<()>;
}

/// Fetches terraform outputs for the environment.
#[allow(async_fn_in_trait)]
pub trait TerraformManager {
    /// # Errors
    ///
    /// Returns an error if the outputs cannot be obtained.
    async fn get_outputs(&self) -> Result<TerraformOutputs>;
}

/// Retrieves a deployment's SSH private key.
pub trait SshKeyGetter {
    /// # Errors
    ///
    /// Returns an error if the key is missing or unreadable.
    fn get(&self, deployment: &str) -> Result<String>;
}

/// Retrieves credhub connection details for the environment.
pub trait CredhubGetter {
    /// # Errors
    ///
    /// Returns an error if the server address cannot be derived.
    fn get_server(&self) -> Result<String>;

    /// # Errors
    ///
    /// Returns an error if the CA certificates cannot be read.
    fn get_certs(&self) -> Result<String>;

    /// # Errors
    ///
    /// Returns an error if the CLI password cannot be read.
    fn get_password(&self) -> Result<String>;
}

// ── Filesystem and Output Ports ───────────────────────────────────────────────

/// Narrow file operations the export flow needs.
pub trait FileIo {
    /// Create a fresh temporary directory and return its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    fn temp_dir(&self) -> Result<PathBuf>;

    /// Write `contents` to `path`. A failed write must not leave a partial
    /// file behind.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<()>;
}

/// Line-oriented output sink. Two instances are injected into the export
/// flow: one stdout-backed for export statements, one stderr-backed for
/// warnings.
pub trait Logger {
    fn println(&self, line: &str);
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so vendor CLI wrappers can be swapped or
/// mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output, using the instance's default
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or times out.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;

    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds
    /// `timeout`. On timeout, the child process must be killed (not left
    /// orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: std::time::Duration,
    ) -> Result<Output>;
}
