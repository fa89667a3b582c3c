use super::*;
use crate::kernel::services::ports::TemplateCatalog;
use crate::kernel::template::BuiltinTemplates;

fn new_state() -> WorkspaceState {
    let template = BuiltinTemplates.template("vue").unwrap();
    WorkspaceState::new(WorkspaceSettings::default(), &template)
}

#[test]
fn new_state_installs_preset_files_with_main_active() {
    let state = new_state();

    let names: Vec<&str> = state.files.names().collect();
    assert_eq!(
        names,
        [
            "src/App.vue",
            "src/index.html",
            BUILD_CONFIG_FILE,
            MACROS_CONFIG_FILE,
            TSCONFIG_FILE
        ]
    );
    assert_eq!(state.main_file, "src/App.vue");
    assert_eq!(state.active_filename, "src/App.vue");
}

#[test]
fn install_template_keeps_import_map_file() {
    let mut state = new_state();
    state
        .files
        .insert(VirtualFile::new(IMPORT_MAP_FILE, r#"{"imports":{}}"#));
    state.files.insert(VirtualFile::new("src/Extra.vue", ""));

    let vine = BuiltinTemplates.template("vine").unwrap();
    state.install_template(&vine);

    assert!(state.files.contains(IMPORT_MAP_FILE));
    assert!(!state.files.contains("src/Extra.vue"));
    assert!(!state.files.contains("src/App.vue"));
    assert_eq!(state.main_file, "src/App.vine.ts");
}

#[test]
fn resolved_active_falls_back_to_main() {
    let mut state = new_state();
    state.active_filename = "src/Missing.vue".to_string();
    assert_eq!(state.resolved_active_filename(), "src/App.vue");

    state.active_filename = TSCONFIG_FILE.to_string();
    assert_eq!(state.resolved_active_filename(), "src/App.vue");

    state.active_filename = "src/index.html".to_string();
    assert_eq!(state.resolved_active_filename(), "src/index.html");
}

#[test]
fn prefix_is_added_and_stripped_for_regular_files_only() {
    let state = new_state();
    assert_eq!(state.prefixed("App.vue"), "src/App.vue");
    assert_eq!(state.prefixed("src/App.vue"), "src/App.vue");
    assert_eq!(state.prefixed(IMPORT_MAP_FILE), IMPORT_MAP_FILE);
    assert_eq!(state.strip_prefix("src/App.vue"), "App.vue");
    assert_eq!(state.strip_prefix(TSCONFIG_FILE), TSCONFIG_FILE);
}

#[test]
fn hidden_files_are_not_visible() {
    let mut state = new_state();
    state
        .files
        .insert(VirtualFile::new("src/secret.ts", "").hidden(true));

    assert!(state.visible_files().all(|f| f.filename != "src/secret.ts"));
    assert!(state.files.contains("src/secret.ts"));
}

#[test]
fn merged_map_ignores_malformed_user_layer() {
    let mut state = new_state();
    state.builtin_import_map = ImportMap::default().with_import("vue", "https://A");
    state.files.insert(VirtualFile::new(IMPORT_MAP_FILE, "nope"));

    let merged = state.merged_import_map();

    assert_eq!(merged, state.builtin_import_map);
    assert!(state.errors.is_empty());
}
