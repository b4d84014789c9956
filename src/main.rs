use anyhow::Context;
use clap::{Parser, Subcommand};
use random_core::{
    config::state_file_from_env_value, constants::STATE_FILE_ENV, parse_keeper, CoreConfig,
    LocalHost, Resource, UuidState,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "random-provider")]
#[command(about = "Drive the random_uuid resource lifecycle against a local state file")]
struct Cli {
    /// State file (defaults to $RANDOM_STATE_FILE, then random-state.json)
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the resource schema as JSON
    Schema,
    /// Create a resource with a freshly generated UUID
    Create {
        /// Resource address, e.g. random_uuid.app
        address: String,
        /// Keeper entry as key=value (repeatable)
        #[arg(long = "keeper", value_parser = parse_keeper)]
        keepers: Vec<(String, String)>,
    },
    /// Import an existing UUID
    Import {
        /// Resource address, e.g. random_uuid.app
        address: String,
        /// UUID to import
        id: String,
    },
    /// Show the state of a resource
    Read {
        /// Resource address
        address: String,
    },
    /// Remove a resource from state
    Delete {
        /// Resource address
        address: String,
    },
    /// List all tracked resources
    List,
}

/// JSON view of one tracked resource.
#[derive(Serialize)]
struct ResourceView<'a> {
    address: &'a str,
    #[serde(flatten)]
    state: &'a UuidState,
}

/// Entry point for the local `random_uuid` host.
///
/// Results are printed to stdout as JSON; logs go to stderr.
///
/// # Environment Variables
/// - `RANDOM_STATE_FILE`: state file path (default: "random-state.json")
/// - `RUST_LOG`: log filter (default directive: "random=info")
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("random=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let state_file =
        state_file_from_env_value(cli.state_file, std::env::var(STATE_FILE_ENV).ok());
    let config = CoreConfig::new(state_file)?;
    tracing::debug!("using state file {}", config.state_file().display());

    let host = LocalHost::new(config);

    match cli.command {
        Commands::Schema => print_json(&host.resource().schema())?,
        Commands::Create { address, keepers } => {
            let state = host
                .create(&address, keepers.into_iter().collect())
                .with_context(|| format!("failed to create {address}"))?;
            print_json(&ResourceView {
                address: &address,
                state: &state,
            })?;
        }
        Commands::Import { address, id } => {
            let state = host
                .import(&address, &id)
                .with_context(|| format!("failed to import {address}"))?;
            print_json(&ResourceView {
                address: &address,
                state: &state,
            })?;
        }
        Commands::Read { address } => {
            let state = host
                .read(&address)
                .with_context(|| format!("failed to read {address}"))?;
            print_json(&ResourceView {
                address: &address,
                state: &state,
            })?;
        }
        Commands::Delete { address } => {
            host.delete(&address)
                .with_context(|| format!("failed to delete {address}"))?;
        }
        Commands::List => {
            let entries = host.list()?;
            let views: Vec<ResourceView<'_>> = entries
                .iter()
                .map(|(address, state)| ResourceView { address, state })
                .collect();
            print_json(&views)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
