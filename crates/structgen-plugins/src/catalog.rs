//! Assembly of the generator registry from all plugin sources.

use crate::{PluginInfo, PluginKind, PluginStore, StoreResult, discover_scripts};
use std::path::Path;
use structgen_core::{GeneratorDescriptor, Registry, ScriptGenerator, Target};

/// Build a registry of built-in generators, official scripts from
/// `official_dir`, and custom plugins from `store`, registered in that
/// order so later sources replace earlier ones on a name clash.
///
/// `interpreter` pins the interpreter for every script generator.
pub fn build_registry(
    official_dir: impl AsRef<Path>,
    store: &PluginStore,
    interpreter: Option<&str>,
) -> StoreResult<Registry> {
    let mut registry = Registry::with_builtins();

    let official = discover_scripts(official_dir)?;
    let custom = store.load()?;
    let (official_count, custom_count) = (official.len(), custom.len());

    for plugin in official.into_iter().chain(custom) {
        if plugin.kind != PluginKind::Script {
            tracing::warn!(plugin = %plugin.name, "ignoring non-script plugin entry");
            continue;
        }
        registry.register(script_descriptor(plugin, interpreter));
    }

    tracing::info!(
        generators = registry.len(),
        official = official_count,
        custom = custom_count,
        "registry populated"
    );
    Ok(registry)
}

/// All plugins for display: built-ins, then official scripts, then custom
/// plugins.
pub fn list_plugins(
    official_dir: impl AsRef<Path>,
    store: &PluginStore,
) -> StoreResult<Vec<PluginInfo>> {
    let mut plugins: Vec<PluginInfo> = Target::ALL.into_iter().map(PluginInfo::builtin).collect();
    plugins.extend(discover_scripts(official_dir)?);
    plugins.extend(store.load()?);
    Ok(plugins)
}

fn script_descriptor(plugin: PluginInfo, interpreter: Option<&str>) -> GeneratorDescriptor {
    let mut script = ScriptGenerator::new(plugin.path);
    if let Some(interpreter) = interpreter {
        script = script.with_interpreter(interpreter);
    }
    GeneratorDescriptor::script(plugin.name, plugin.description, script)
}
