use super::*;

#[test]
fn partial_settings_fill_missing_keys_with_defaults() {
    let settings = WorkspaceSettings::from_json_str(r#"{"template":"vine"}"#);

    assert_eq!(settings.template, "vine");
    assert_eq!(settings.file_prefix, "src/");
    assert_eq!(settings.cdn_mirror, CdnMirror::default());
}

#[test]
fn malformed_settings_fall_back_to_defaults() {
    let settings = WorkspaceSettings::from_json_str("{ template: ");
    assert_eq!(settings, WorkspaceSettings::default());
}

#[test]
fn settings_serde_roundtrip_preserves_values() {
    let original = WorkspaceSettings {
        framework_version: Some("3.4.21".to_string()),
        locale: Some("en".to_string()),
        ..WorkspaceSettings::default()
    };
    let json = serde_json::to_string(&original).expect("serialize WorkspaceSettings");
    let decoded = WorkspaceSettings::from_json_str(&json);
    assert_eq!(decoded, original);
}
