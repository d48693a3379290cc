//! Command implementations

pub mod cleanup;
pub mod print_env;

use clap::Args;

/// Arguments for the cleanup command.
#[derive(Args)]
pub struct CleanupArgs {
    /// Only consider resources whose name contains this substring
    #[arg(long, default_value = "")]
    pub filter: String,

    /// Delete without asking about each resource
    #[arg(long)]
    pub no_confirm: bool,
}
