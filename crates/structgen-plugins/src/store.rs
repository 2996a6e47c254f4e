//! JSON-backed record of custom plugins.

use crate::{SCRIPT_EXTENSION, StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use structgen_core::Target;

/// How a plugin produces code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginKind {
    /// Compiled into structgen.
    #[serde(alias = "go")]
    Builtin,

    /// External script run through an interpreter.
    #[serde(alias = "python")]
    Script,
}

impl std::fmt::Display for PluginKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginKind::Builtin => write!(f, "builtin"),
            PluginKind::Script => write!(f, "script"),
        }
    }
}

/// A plugin as recorded in the plugins file or shown by `plugin list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Generator name the plugin registers under.
    pub name: String,

    /// Short description.
    pub description: String,

    /// Builtin or script.
    #[serde(rename = "type")]
    pub kind: PluginKind,

    /// Script location, or `builtin` for built-in generators.
    pub path: String,
}

impl PluginInfo {
    /// Entry describing a built-in generator.
    pub fn builtin(target: Target) -> Self {
        Self {
            name: target.generator_name().to_string(),
            description: target.description().to_string(),
            kind: PluginKind::Builtin,
            path: "builtin".to_string(),
        }
    }

    /// Entry describing a script plugin.
    pub fn script(name: impl Into<String>, description: impl Into<String>, path: &Path) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: PluginKind::Script,
            path: path.display().to_string(),
        }
    }
}

/// Persistent list of custom plugins stored as pretty-printed JSON.
///
/// Every operation re-reads the file, so concurrent CLI invocations see each
/// other's changes (last writer wins).
#[derive(Debug, Clone)]
pub struct PluginStore {
    path: PathBuf,
}

impl PluginStore {
    /// Open a store backed by `path`. The file need not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the plugins file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all recorded plugins. A missing or empty file yields no plugins.
    pub fn load(&self) -> StoreResult<Vec<PluginInfo>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    /// Record the script at `script_path` as a plugin named after its file stem.
    pub fn add(&self, script_path: impl AsRef<Path>) -> StoreResult<PluginInfo> {
        let script_path = script_path.as_ref();
        if !script_path.is_file() {
            return Err(StoreError::ScriptMissing(script_path.to_path_buf()));
        }

        let name = script_path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| StoreError::InvalidScriptPath(script_path.to_path_buf()))?;

        if script_path.extension().and_then(|e| e.to_str()) != Some(SCRIPT_EXTENSION) {
            tracing::warn!(path = %script_path.display(), "plugin script is not a .{} file", SCRIPT_EXTENSION);
        }

        let mut plugins = self.load()?;
        if plugins.iter().any(|p| p.name == name) {
            return Err(StoreError::AlreadyExists(name.to_string()));
        }

        let plugin = PluginInfo::script(name, format!("Custom plugin: {name}"), script_path);
        plugins.push(plugin.clone());
        self.save(&plugins)?;

        tracing::info!(plugin = %plugin.name, store = %self.path.display(), "added plugin");
        Ok(plugin)
    }

    /// Remove the plugin called `name`, returning its entry.
    pub fn remove(&self, name: &str) -> StoreResult<PluginInfo> {
        let mut plugins = self.load()?;
        let index = plugins
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;

        let removed = plugins.remove(index);
        self.save(&plugins)?;

        tracing::info!(plugin = name, store = %self.path.display(), "removed plugin");
        Ok(removed)
    }

    fn save(&self, plugins: &[PluginInfo]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(plugins)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store/store_tests.rs"]
mod store_tests;
