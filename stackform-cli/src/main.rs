//! Stackform CLI
//!
//! Command-line interface for defining stacks and submitting them to the
//! platform's GraphQL API.

mod commands;
mod config;
mod definition;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "stackform")]
#[command(about = "Stack definition and provisioning CLI", long_about = None)]
struct Cli {
    /// GraphQL endpoint of the platform
    #[arg(
        long,
        env = "STACKFORM_API_URL",
        default_value = "http://localhost:8080/graphql"
    )]
    api_url: String,

    /// API token sent as a bearer token
    #[arg(long, env = "STACKFORM_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so rendered output stays pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stackform=info,stackform_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
        api_token: cli.api_token,
    };

    handle_command(cli.command, &config).await
}
