use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ah")]
#[command(about = "Agent Hooks: desktop notifications and damage control for coding assistants")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Handle one lifecycle event from stdin (notifies on session.idle and
    /// permission.asked, ignores everything else)
    Event,

    /// Screen one PreToolUse tool call from stdin (exit 0 allows, exit 2
    /// blocks, ask decisions print hook JSON)
    #[command(name = "pretooluse")]
    PreToolUse {
        /// Pattern set (YAML file or patterns directory) replacing the
        /// built-in defaults
        #[arg(long)]
        patterns: Option<PathBuf>,
    },

    /// Check notifier availability and pattern configuration
    Doctor {
        /// Pattern set (YAML file or patterns directory) replacing the
        /// built-in defaults
        #[arg(long)]
        patterns: Option<PathBuf>,
    },
}
