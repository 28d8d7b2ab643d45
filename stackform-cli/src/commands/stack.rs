//! Stack command handlers
//!
//! Handles rendering, creating and updating stacks from definition files,
//! and generating starter definitions.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use stackform_client::StackApi;
use stackform_core::domain::stack::{StackId, StackRef};
use stackform_core::dto::stack::StackInput;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;
use crate::definition::{StackOverrides, VendorKind, load_definition, template};

/// Stack subcommands
#[derive(Subcommand)]
pub enum StackCommands {
    /// Print the request body a definition produces, without sending it
    Render {
        /// Path to the JSON stack definition
        #[arg(short, long)]
        file: PathBuf,

        #[command(flatten)]
        overrides: StackOverrides,
    },
    /// Create a stack from a definition
    Create {
        /// Path to the JSON stack definition
        #[arg(short, long)]
        file: PathBuf,

        /// Let the platform manage Terraform state
        #[arg(long)]
        manage_state: bool,

        #[command(flatten)]
        overrides: StackOverrides,
    },
    /// Update an existing stack from a definition
    Update {
        /// Stack ID
        id: String,

        /// Path to the JSON stack definition
        #[arg(short, long)]
        file: PathBuf,

        #[command(flatten)]
        overrides: StackOverrides,
    },
    /// Print a starter definition
    Template {
        /// Vendor integration to configure
        #[arg(long, value_enum, default_value = "terraform")]
        vendor: VendorKind,
    },
}

/// Handle stack commands
///
/// Routes stack subcommands to their respective handlers.
///
/// # Arguments
/// * `command` - The stack command to execute
/// * `config` - The CLI configuration
pub async fn handle_stack_command(command: StackCommands, config: &Config) -> Result<()> {
    match command {
        StackCommands::Render { file, overrides } => render_stack(&file, overrides),
        StackCommands::Create {
            file,
            manage_state,
            overrides,
        } => {
            let client = config.client()?;
            create_stack(&client, &file, manage_state, overrides).await
        }
        StackCommands::Update {
            id,
            file,
            overrides,
        } => {
            let client = config.client()?;
            update_stack(&client, &StackId::new(id), &file, overrides).await
        }
        StackCommands::Template { vendor } => {
            println!("{}", template(vendor).to_json_string()?);
            Ok(())
        }
    }
}

/// Load a definition and apply command-line overrides
fn prepare(file: &Path, overrides: StackOverrides) -> Result<StackInput> {
    let mut input = load_definition(file)?;
    overrides.apply(&mut input);
    debug!(name = %input.name, file = %file.display(), "Prepared stack input");
    Ok(input)
}

/// Print the wire form of a definition
fn render_stack(file: &Path, overrides: StackOverrides) -> Result<()> {
    let input = prepare(file, overrides)?;
    println!("{}", input.to_json_string()?);
    Ok(())
}

/// Create a stack from a definition file
async fn create_stack(
    api: &dyn StackApi,
    file: &Path,
    manage_state: bool,
    overrides: StackOverrides,
) -> Result<()> {
    let input = prepare(file, overrides)?;

    let stack = api
        .create_stack(&input, manage_state)
        .await
        .with_context(|| format!("Failed to create stack {}", input.name))?;

    println!("{}", "✓ Stack created successfully!".green().bold());
    print_stack_summary(&stack, &input);

    Ok(())
}

/// Update a stack from a definition file
async fn update_stack(
    api: &dyn StackApi,
    id: &StackId,
    file: &Path,
    overrides: StackOverrides,
) -> Result<()> {
    let input = prepare(file, overrides)?;

    let stack = api
        .update_stack(id, &input)
        .await
        .with_context(|| format!("Failed to update stack {}", id))?;

    println!("{}", "✓ Stack updated successfully!".green().bold());
    print_stack_summary(&stack, &input);

    Ok(())
}

/// Print what was sent alongside the platform's answer
fn print_stack_summary(stack: &StackRef, input: &StackInput) {
    println!("  ID:         {}", stack.id.to_string().cyan());
    println!("  Name:       {}", stack.name.bold());
    println!(
        "  Repository: {}",
        format!("{}@{}", input.repository, input.branch).dimmed()
    );
    if let Some(vendor) = &input.vendor_config {
        println!("  Vendor:     {}", vendor.to_string().yellow());
    }
    if let Some(space) = &input.space {
        println!("  Space:      {}", space.dimmed());
    }
    if let Some(labels) = input.labels.as_ref().filter(|l| !l.is_empty()) {
        println!("  Labels:     {}", labels.join(", ").dimmed());
    }
    for (phase, timing, commands) in input.hooks.iter() {
        println!(
            "  {:<11} {}",
            format!("{}{}:", timing, phase),
            format!("{} command(s)", commands.len()).dimmed()
        );
    }
}
