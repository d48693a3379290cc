//! `groundwork print-env` — print export statements for the BOSH CLI,
//! credhub, and the jumpbox SSH tunnel.
//!
//! Pipe the output through `eval` to load a shell:
//! `eval "$(groundwork print-env)"`.

use std::path::Path;

use anyhow::Result;

use crate::application::services::print_env;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::fs::TempFileIo;
use crate::infra::state::StateStore;
use crate::infra::terraform::TerraformCli;
use crate::infra::vars::VarsDir;
use crate::output::{Stderr, Stdout};

/// Run `groundwork print-env` against the given state directory.
///
/// # Errors
///
/// Fails fast when no environment exists there; otherwise propagates the
/// fatal collaborator errors of the export flow.
pub async fn run(state_dir: &Path) -> Result<()> {
    let store = StateStore::new(state_dir);
    print_env::check_fast_fails(&store)?;
    let state = store.load()?;

    let vars = VarsDir::new(state_dir);
    let terraform = TerraformCli::new(
        TokioCommandRunner::default(),
        state_dir.join("terraform"),
    );

    print_env::execute(
        &Stdout,
        &Stderr,
        &vars,
        &vars,
        &terraform,
        &TempFileIo,
        &state,
    )
    .await
}
