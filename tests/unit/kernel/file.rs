use super::*;

fn names(map: &FileMap) -> Vec<&str> {
    map.names().collect()
}

#[test]
fn insert_preserves_order_and_replaces_in_place() {
    let mut map = FileMap::new();
    map.insert(VirtualFile::new("src/a.vue", "a"));
    map.insert(VirtualFile::new("src/b.vue", "b"));
    map.insert(VirtualFile::new("src/c.vue", "c"));

    let prev = map.insert(VirtualFile::new("src/a.vue", "a2"));

    assert_eq!(prev.map(|f| f.code), Some("a".to_string()));
    assert_eq!(names(&map), ["src/a.vue", "src/b.vue", "src/c.vue"]);
    assert_eq!(map.code("src/a.vue"), Some("a2"));
}

#[test]
fn rename_keeps_position_and_updates_filename() {
    let mut map: FileMap = ["src/a.vue", "src/b.vue", "src/c.vue"]
        .into_iter()
        .map(|n| VirtualFile::new(n, n))
        .collect();

    assert!(map.rename("src/b.vue", "src/z.vue"));

    assert_eq!(names(&map), ["src/a.vue", "src/z.vue", "src/c.vue"]);
    let file = map.get("src/z.vue").unwrap();
    assert_eq!(file.filename, "src/z.vue");
    assert_eq!(file.code, "src/b.vue");
    assert!(!map.contains("src/b.vue"));
}

#[test]
fn rename_refuses_missing_source_and_taken_target() {
    let mut map: FileMap = ["src/a.vue", "src/b.vue"]
        .into_iter()
        .map(|n| VirtualFile::new(n, ""))
        .collect();

    assert!(!map.rename("src/missing.vue", "src/x.vue"));
    assert!(!map.rename("src/a.vue", "src/b.vue"));
    assert_eq!(names(&map), ["src/a.vue", "src/b.vue"]);
}

#[test]
fn remove_drops_key_and_order_slot() {
    let mut map: FileMap = ["src/a.vue", "src/b.vue"]
        .into_iter()
        .map(|n| VirtualFile::new(n, ""))
        .collect();

    assert!(map.remove("src/a.vue").is_some());
    assert!(map.remove("src/a.vue").is_none());
    assert_eq!(names(&map), ["src/b.vue"]);
}

#[test]
fn compiled_artifacts_slots_by_kind() {
    let mut compiled = CompiledArtifacts::default();
    assert!(compiled.is_empty());

    compiled.set(OutputKind::Style, ".a{}");
    compiled.set(OutputKind::ServerScript, "ssr");

    assert_eq!(compiled.get(OutputKind::Script), "");
    assert_eq!(compiled.get(OutputKind::Style), ".a{}");
    assert_eq!(compiled.get(OutputKind::ServerScript), "ssr");
    assert!(!compiled.is_empty());
}

#[test]
fn reserved_names_are_recognized() {
    for name in RESERVED_FILES {
        assert!(is_reserved(name));
    }
    assert!(!is_reserved("src/App.vue"));
    assert!(!is_reserved("src/import-map.json"));
}

#[test]
fn virtual_file_language_follows_extension() {
    let file = VirtualFile::new("src/Comp.vue", "").hidden(true);
    assert_eq!(file.language(), FileLanguage::Vue);
    assert!(file.hidden);
}
