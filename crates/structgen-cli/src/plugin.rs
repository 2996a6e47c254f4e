//! `plugin` command implementation

use crate::config::Settings;
use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::PathBuf;
use structgen_plugins::{PluginInfo, PluginStore, list_plugins};

#[derive(Debug, Subcommand)]
pub enum PluginCommand {
    /// Register a script as a custom plugin
    Add {
        /// Path to the plugin script
        path: PathBuf,
    },

    /// Remove a custom plugin
    Remove {
        /// Plugin name
        name: String,
    },

    /// List built-in, official and custom plugins
    List,
}

pub fn run(command: PluginCommand, settings: &Settings) -> Result<()> {
    let store = PluginStore::open(settings.plugins_path());

    match command {
        PluginCommand::Add { path } => {
            let path = std::path::absolute(&path)
                .with_context(|| format!("Failed to resolve plugin path: {:?}", path))?;
            let plugin = store.add(&path).context("Failed to add plugin")?;
            println!("Plugin added successfully: {}", plugin.name);
        }
        PluginCommand::Remove { name } => {
            store.remove(&name).context("Failed to remove plugin")?;
            println!("Plugin removed successfully: {name}");
        }
        PluginCommand::List => {
            let plugins = list_plugins(&settings.official_plugins_dir, &store)
                .context("Failed to list plugins")?;
            println!("{}", format_plugins(&plugins));
        }
    }

    Ok(())
}

pub fn format_plugins(plugins: &[PluginInfo]) -> String {
    if plugins.is_empty() {
        return "No plugins found.".to_string();
    }

    let mut out = String::from("Available plugins:\n==================\n");
    for plugin in plugins {
        out.push_str(&format!(
            "Name: {}\nDescription: {}\nType: {}\nPath: {}\n---\n",
            plugin.name, plugin.description, plugin.kind, plugin.path
        ));
    }
    out.truncate(out.trim_end().len());
    out
}
