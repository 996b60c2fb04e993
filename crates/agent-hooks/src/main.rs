use anyhow::Result;
use clap::Parser;

mod cli;
mod doctor;
mod event_cmd;
mod pretooluse_cmd;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout belongs to the hook protocols.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Event => event_cmd::run().await,
        Commands::PreToolUse { patterns } => {
            let code = pretooluse_cmd::run(patterns.as_deref());
            std::process::exit(code);
        }
        Commands::Doctor { patterns } => doctor::run(patterns.as_deref()),
    }
}
