#![allow(non_snake_case)]

use super::*;
use tempfile::TempDir;
use test_case::test_case;

fn write_script(dir: &TempDir, file_name: &str) -> PathBuf {
    let path = dir.path().join(file_name);
    fs::write(&path, "print('ok')\n").unwrap();
    path
}

// ============================================================================
// PluginKind / PluginInfo serialization
// ============================================================================

#[test_case("\"builtin\"", PluginKind::Builtin ; "builtin")]
#[test_case("\"script\"", PluginKind::Script ; "script")]
#[test_case("\"go\"", PluginKind::Builtin ; "legacy go")]
#[test_case("\"python\"", PluginKind::Script ; "legacy python")]
fn PluginKind___deserialize___accepts_names_and_aliases(json: &str, expected: PluginKind) {
    let kind: PluginKind = serde_json::from_str(json).unwrap();

    assert_eq!(kind, expected);
}

#[test]
fn PluginInfo___serialize___uses_type_key() {
    let info = PluginInfo::script("gen", "Custom plugin: gen", Path::new("/p/gen.py"));

    let json = serde_json::to_value(&info).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "name": "gen",
            "description": "Custom plugin: gen",
            "type": "script",
            "path": "/p/gen.py"
        })
    );
}

#[test]
fn PluginInfo___builtin___uses_target_name_and_builtin_path() {
    let info = PluginInfo::builtin(Target::Go);

    assert_eq!(info.name, "go-struct");
    assert_eq!(info.kind, PluginKind::Builtin);
    assert_eq!(info.path, "builtin");
}

// ============================================================================
// PluginStore
// ============================================================================

#[test]
fn PluginStore___load_missing_file___returns_empty() {
    let dir = TempDir::new().unwrap();
    let store = PluginStore::open(dir.path().join("plugins.json"));

    assert!(store.load().unwrap().is_empty());
}

#[test]
fn PluginStore___load_empty_file___returns_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plugins.json");
    fs::write(&path, "  \n").unwrap();

    assert!(PluginStore::open(path).load().unwrap().is_empty());
}

#[test]
fn PluginStore___load_corrupt_file___returns_json_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plugins.json");
    fs::write(&path, "{not json").unwrap();

    let err = PluginStore::open(path).load().unwrap_err();

    assert!(matches!(err, StoreError::Json(_)));
}

#[test]
fn PluginStore___load_legacy_file___reads_entries() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plugins.json");
    fs::write(
        &path,
        r#"[{"name":"my_plugin","description":"Custom plugin: my_plugin","type":"python","path":"/x/my_plugin.py"}]"#,
    )
    .unwrap();

    let plugins = PluginStore::open(path).load().unwrap();

    assert_eq!(plugins.len(), 1);
    assert_eq!(plugins[0].kind, PluginKind::Script);
}

#[test]
fn PluginStore___add___records_plugin_named_after_stem() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "rust_struct_gen.py");
    let store = PluginStore::open(dir.path().join("plugins.json"));

    let added = store.add(&script).unwrap();

    assert_eq!(added.name, "rust_struct_gen");
    assert_eq!(added.description, "Custom plugin: rust_struct_gen");
    assert_eq!(added.kind, PluginKind::Script);
    assert_eq!(store.load().unwrap(), vec![added]);
}

#[test]
fn PluginStore___add___creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "gen.py");
    let store = PluginStore::open(dir.path().join("nested/deeper/plugins.json"));

    store.add(&script).unwrap();

    assert!(store.path().is_file());
}

#[test]
fn PluginStore___add___writes_pretty_json() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "gen.py");
    let store = PluginStore::open(dir.path().join("plugins.json"));

    store.add(&script).unwrap();

    let content = fs::read_to_string(store.path()).unwrap();
    assert!(content.starts_with("[\n  {"));
}

#[test]
fn PluginStore___add_duplicate___returns_already_exists() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "gen.py");
    let store = PluginStore::open(dir.path().join("plugins.json"));
    store.add(&script).unwrap();

    let err = store.add(&script).unwrap_err();

    assert!(matches!(err, StoreError::AlreadyExists(name) if name == "gen"));
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn PluginStore___add_missing_script___returns_script_missing() {
    let dir = TempDir::new().unwrap();
    let store = PluginStore::open(dir.path().join("plugins.json"));

    let err = store.add(dir.path().join("nope.py")).unwrap_err();

    assert!(matches!(err, StoreError::ScriptMissing(_)));
    assert!(!store.path().exists());
}

#[test]
fn PluginStore___remove___deletes_entry() {
    let dir = TempDir::new().unwrap();
    let store = PluginStore::open(dir.path().join("plugins.json"));
    store.add(write_script(&dir, "a.py")).unwrap();
    store.add(write_script(&dir, "b.py")).unwrap();

    let removed = store.remove("a").unwrap();

    assert_eq!(removed.name, "a");
    let remaining: Vec<String> = store.load().unwrap().into_iter().map(|p| p.name).collect();
    assert_eq!(remaining, vec!["b"]);
}

#[test]
fn PluginStore___remove_unknown___returns_not_found() {
    let dir = TempDir::new().unwrap();
    let store = PluginStore::open(dir.path().join("plugins.json"));

    let err = store.remove("ghost").unwrap_err();

    assert!(matches!(err, StoreError::NotFound(name) if name == "ghost"));
}
