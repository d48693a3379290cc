//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::infra::azure::AzCli;
use crate::infra::command_runner::TokioCommandRunner;
use crate::output::OutputContext;
use crate::output::prompt::{AlwaysConfirm, ConfirmPrompt};

/// Bootstrap and tear down BOSH deployment environments
#[derive(Parser)]
#[command(
    name = "groundwork",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Directory holding the environment's state and vars files
    #[arg(long, global = true, default_value = ".", value_name = "DIR")]
    pub state_dir: PathBuf,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print export statements for the BOSH CLI, credhub, and the jumpbox tunnel
    PrintEnv,

    /// List and delete leftover cloud resources
    Cleanup(commands::CleanupArgs),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            state_dir,
            quiet,
            no_color,
            command,
        } = self;
        match command {
            Command::PrintEnv => commands::print_env::run(&state_dir).await,
            Command::Cleanup(args) => {
                let ctx = OutputContext::new(no_color, quiet);
                let client = AzCli::new(TokioCommandRunner::default());
                if args.no_confirm {
                    commands::cleanup::run(&ctx, &client, &AlwaysConfirm, &args.filter).await
                } else {
                    commands::cleanup::run(&ctx, &client, &ConfirmPrompt, &args.filter).await
                }
            }
        }
    }
}
