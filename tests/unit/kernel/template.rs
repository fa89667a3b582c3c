use super::*;

#[test]
fn every_listed_preset_resolves() {
    let catalog = BuiltinTemplates;
    for name in catalog.names() {
        let template = catalog.template(&name).expect("listed preset resolves");
        assert!(!template.main_source.is_empty(), "{name}");
        assert!(!template.build_config_source.is_empty(), "{name}");
        assert!(!template.new_file_boilerplate.is_empty(), "{name}");
    }
}

#[test]
fn unknown_preset_is_none() {
    assert!(BuiltinTemplates.template("svelte").is_none());
}

#[test]
fn presets_differ_in_main_file() {
    let vue = BuiltinTemplates.template("vue").unwrap();
    let vine = BuiltinTemplates.template("vine").unwrap();
    assert_eq!(vue.main_file, "App.vue");
    assert!(vine.main_file.ends_with(BOILERPLATE_EXTENSION));
    assert!(serde_json::from_str::<serde_json::Value>(&vue.tsconfig_source).is_ok());
}
