//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod stack;

pub use stack::StackCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Stack management
    Stack {
        #[command(subcommand)]
        command: StackCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Stack { command } => stack::handle_stack_command(command, config).await,
    }
}
