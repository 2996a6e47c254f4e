//! Discovery of official script plugins shipped in a directory.

use crate::{PluginInfo, SCRIPT_EXTENSION, StoreResult};
use std::fs;
use std::path::Path;

/// List every `*.py` file directly inside `dir` as a script plugin.
///
/// Plugins are named after the file stem and sorted by name. A missing
/// directory yields no plugins.
pub fn discover_scripts(dir: impl AsRef<Path>) -> StoreResult<Vec<PluginInfo>> {
    let dir = dir.as_ref();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(dir = %dir.display(), "official plugins directory not found");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut plugins = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(SCRIPT_EXTENSION)
        {
            continue;
        }

        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            tracing::warn!(path = %path.display(), "skipping script with non UTF-8 name");
            continue;
        };

        plugins.push(PluginInfo::script(
            name,
            format!("Script plugin: {name}"),
            &path,
        ));
    }

    plugins.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::debug!(dir = %dir.display(), count = plugins.len(), "discovered script plugins");
    Ok(plugins)
}
