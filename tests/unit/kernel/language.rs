use crate::kernel::language::FileLanguage;

#[test]
fn from_filename_maps_all_recognized_extensions() {
    let cases = [
        ("src/App.vue", FileLanguage::Vue),
        ("src/index.html", FileLanguage::Html),
        ("src/style.css", FileLanguage::Css),
        ("src/util.ts", FileLanguage::TypeScript),
        ("src/App.vine.ts", FileLanguage::TypeScript),
        ("vite.config.ts", FileLanguage::TypeScript),
        ("src/main.js", FileLanguage::JavaScript),
        ("import-map.json", FileLanguage::JavaScript),
        ("README", FileLanguage::JavaScript),
    ];

    for (name, expected) in cases {
        assert_eq!(FileLanguage::from_filename(name), expected, "{name}");
    }
}

#[test]
fn language_id_mapping_is_correct() {
    let cases = [
        (FileLanguage::Vue, "vue"),
        (FileLanguage::Html, "html"),
        (FileLanguage::Css, "css"),
        (FileLanguage::TypeScript, "typescript"),
        (FileLanguage::JavaScript, "javascript"),
    ];

    for (language, expected) in cases {
        assert_eq!(language.language_id(), expected);
    }
}

#[test]
fn extension_match_is_case_sensitive() {
    assert_eq!(FileLanguage::from_filename("App.VUE"), FileLanguage::JavaScript);
}
