//! Deployment state store — loads `groundwork-state.json` from the state
//! directory and implements the `StateValidator` port.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::StateValidator;
use crate::domain::DeploymentState;
use crate::domain::error::StateError;
use crate::domain::state::STATE_FILE;

/// Read-only store over `<state-dir>/groundwork-state.json`. Commands in
/// this slice never write state; provisioning owns that.
pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(STATE_FILE)
    }

    /// Load and parse the state file.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::EnvironmentNotFound`] when the file is
    /// missing and [`StateError::Malformed`] when it does not parse.
    pub fn load(&self) -> Result<DeploymentState> {
        let path = self.path();
        if !path.exists() {
            return Err(StateError::EnvironmentNotFound {
                dir: self.dir.clone(),
            }
            .into());
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("reading state file {}", path.display()))?;
        let state = serde_json::from_str(&contents)
            .map_err(|cause| StateError::Malformed { path, cause })?;
        Ok(state)
    }
}

impl StateValidator for StateStore {
    fn validate(&self) -> Result<()> {
        if !self.path().exists() {
            return Err(StateError::EnvironmentNotFound {
                dir: self.dir.clone(),
            }
            .into());
        }
        Ok(())
    }
}
