//! structgen CLI - Type declarations from example JSON
//!
//! Commands:
//! - `structgen generate` - Generate declarations from a JSON document
//! - `structgen list` - List available generators
//! - `structgen plugin` - Add, remove and list script plugins
//! - `structgen serve` - Serve generators over HTTP

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use structgen_core::Registry;
use structgen_plugins::{PluginStore, build_registry};

mod config;
mod generate;
mod logging;
mod plugin;
mod server;

use config::Settings;
use plugin::PluginCommand;

#[derive(Parser)]
#[command(name = "structgen")]
#[command(author, version, about = "Generate type declarations from example JSON", long_about = None)]
struct Cli {
    /// Path to structgen.toml (default: ./structgen.toml when present)
    #[arg(short, long, global = true, env = "STRUCTGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate code from a JSON document
    #[command(after_help = "Examples:\n  \
        structgen generate go-struct schema.json\n  \
        structgen generate ts-interface -i '{\"name\": \"string\", \"age\": 30}'")]
    Generate {
        /// Generator name (see `structgen list`)
        template: String,

        /// File containing the JSON document
        input_file: Option<PathBuf>,

        /// JSON document given inline; takes precedence over the file
        #[arg(short, long)]
        input: Option<String>,

        /// Write the code to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List available generators
    List,

    /// Manage script plugins
    #[command(subcommand)]
    Plugin(PluginCommand),

    /// Start the HTTP server
    Serve {
        /// Address to bind (default: server.host from settings)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (default: server.port from settings)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?;
    logging::init(cli.verbose, cli.quiet, &settings.log_level);
    tracing::debug!(?settings, "loaded settings");

    match cli.command {
        Commands::Generate {
            template,
            input_file,
            input,
            output,
        } => {
            let registry = load_registry(&settings)?;
            generate::run(&registry, &template, input_file, input, output)?;
        }
        Commands::List => {
            let registry = load_registry(&settings)?;
            generate::list(&registry);
        }
        Commands::Plugin(command) => {
            plugin::run(command, &settings)?;
        }
        Commands::Serve { host, port } => {
            let registry = Arc::new(load_registry(&settings)?);
            let host = host.unwrap_or_else(|| settings.server.host.clone());
            let port = port.unwrap_or(settings.server.port);

            tokio::runtime::Runtime::new()
                .context("Failed to start async runtime")?
                .block_on(server::serve(registry, &host, port))?;
        }
    }

    Ok(())
}

fn load_registry(settings: &Settings) -> Result<Registry> {
    let store = PluginStore::open(settings.plugins_path());
    build_registry(
        &settings.official_plugins_dir,
        &store,
        settings.interpreter.as_deref(),
    )
    .context("Failed to load plugins")
}
