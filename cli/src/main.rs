//! Groundwork CLI - Bootstrap and tear down BOSH deployment environments

use clap::Parser;

use groundwork_cli::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
