use super::*;

fn map(entries: &[(&str, &str)]) -> ImportMap {
    entries
        .iter()
        .fold(ImportMap::default(), |m, (k, v)| m.with_import(*k, *v))
}

#[test]
fn merge_lets_user_entries_override_builtin() {
    let builtin = map(&[("vue", "https://A"), ("pinia", "https://P")]);
    let user = map(&[("vue", "https://A2"), ("foo", "https://B")]);

    let merged = merge(&builtin, &user);

    assert_eq!(
        merged,
        map(&[("vue", "https://A2"), ("pinia", "https://P"), ("foo", "https://B")])
    );
}

#[test]
fn merge_of_equal_entry_keeps_single_value() {
    let builtin = map(&[("vue", "https://A")]);
    let user = map(&[("vue", "https://A"), ("foo", "https://B")]);

    let merged = merge(&builtin, &user);

    assert_eq!(merged, map(&[("vue", "https://A"), ("foo", "https://B")]));
    assert_eq!(merged.overrides_of(&builtin), map(&[("foo", "https://B")]));
}

#[test]
fn merge_replaces_scope_maps_without_deep_merging() {
    let mut builtin = ImportMap::default();
    builtin.scopes.insert(
        "https://x/".to_string(),
        [("a".to_string(), "1".to_string()), ("b".to_string(), "2".to_string())].into(),
    );
    let mut user = ImportMap::default();
    user.scopes
        .insert("https://x/".to_string(), [("a".to_string(), "9".to_string())].into());

    let merged = merge(&builtin, &user);

    let scope = &merged.scopes["https://x/"];
    assert_eq!(scope.len(), 1);
    assert_eq!(scope["a"], "9");
}

#[test]
fn apply_rewrites_mirror_host_and_creates_file() {
    let mut files = FileMap::new();
    let m = map(&[("vue", "https://cdn.jsdelivr.net/npm/vue")]);

    assert!(apply(&mut files, &m, &CdnMirror::default()));
    assert!(!apply(&mut files, &m, &CdnMirror::default()));

    let code = files.code(IMPORT_MAP_FILE).unwrap();
    assert!(code.contains("https://fastly.jsdelivr.net/npm/vue"));
    assert!(!code.contains("cdn.jsdelivr.net"));
    assert!(code.contains('\n'), "expected pretty-printed json");
}

#[test]
fn effective_parses_current_file() {
    let mut files = FileMap::new();
    files.insert(VirtualFile::new(
        IMPORT_MAP_FILE,
        r#"{"imports":{"foo":"https://B"}}"#,
    ));
    let mut errors = ErrorList::default();

    let m = effective(&files, &mut errors);

    assert_eq!(m, map(&[("foo", "https://B")]));
    assert!(errors.is_empty());
}

#[test]
fn malformed_import_map_yields_one_diagnostic_and_empty_map() {
    let mut files = FileMap::new();
    files.insert(VirtualFile::new(IMPORT_MAP_FILE, "{ not json"));
    let mut errors = ErrorList::default();

    let m = effective(&files, &mut errors);

    assert!(m.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.items()[0].filename(), Some(IMPORT_MAP_FILE));
    assert!(errors.items()[0].text().contains(IMPORT_MAP_FILE));
}

#[test]
fn missing_import_map_file_is_empty_without_error() {
    let files = FileMap::new();
    let mut errors = ErrorList::default();
    assert!(effective(&files, &mut errors).is_empty());
    assert!(errors.is_empty());
}

#[test]
fn overrides_drop_empty_scopes() {
    let mut user = map(&[("vue", "https://A")]);
    user.scopes.insert("https://s/".to_string(), SpecifierMap::new());
    let builtin = map(&[("vue", "https://A")]);

    assert!(user.overrides_of(&builtin).is_empty());
}

#[test]
fn mirrored_builtin_entries_are_not_overrides() {
    let builtin = map(&[("vue", "https://cdn.jsdelivr.net/npm/vue.js")]);
    let user = map(&[
        ("vue", "https://fastly.jsdelivr.net/npm/vue.js"),
        ("foo", "https://example.com/foo.js"),
    ]);

    let overrides = user.overrides_of_mirrored(&builtin, &CdnMirror::default());

    assert_eq!(overrides, map(&[("foo", "https://example.com/foo.js")]));
}

#[test]
fn builtin_map_pins_framework_version() {
    let m = builtin_import_map(Some("3.4.21"), "https://cdn.jsdelivr.net/npm/");

    assert_eq!(
        m.imports["vue"],
        "https://cdn.jsdelivr.net/npm/@vue/runtime-dom@3.4.21/dist/runtime-dom.esm-browser.js"
    );
    assert!(m.imports["vue/server-renderer"].contains("@vue/server-renderer@3.4.21"));
    assert_eq!(m.imports.len(), 2);
    assert!(m.scopes.is_empty());

    let unpinned = builtin_import_map(None, "https://cdn.jsdelivr.net/npm");
    assert!(unpinned.imports["vue"].contains("/@vue/runtime-dom/dist/"));
}
