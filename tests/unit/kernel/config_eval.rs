use super::*;
use crate::kernel::services::ports::Plugin;
use std::sync::Mutex;

fn builtin() -> ImportMap {
    ImportMap::default()
        .with_import("vue", "https://cdn/vue.js")
        .with_import("vue/server-renderer", "https://cdn/ssr.js")
}

#[test]
fn rewrites_specifiers_after_from_only() {
    let source = r#"import { ref } from 'vue'
import { renderToString } from "vue/server-renderer"
import Other from 'vue-router'
const s = 'vue'
"#;

    let out = rewrite_specifiers(source, &builtin());

    assert!(out.contains("from 'https://cdn/vue.js'"));
    assert!(out.contains(r#"from "https://cdn/ssr.js""#));
    assert!(out.contains("from 'vue-router'"));
    assert!(out.contains("const s = 'vue'"));
}

#[test]
fn rewrite_tolerates_whitespace_and_is_case_sensitive() {
    let out = rewrite_specifiers("import a from   'vue'\nimport b FROM 'vue'", &builtin());
    assert!(out.contains("from   'https://cdn/vue.js'"));
    assert!(out.contains("FROM 'vue'"));
}

#[test]
fn rewrite_requires_matching_quotes() {
    let source = "import a from 'vue\"\nimport b from \"vue'\nimport c from \"vue\"";

    let out = rewrite_specifiers(source, &builtin());

    assert!(out.contains("from 'vue\""));
    assert!(out.contains("from \"vue'"));
    assert!(out.contains(r#"from "https://cdn/vue.js""#));
    assert!(!out.contains("from 'https://cdn/vue.js\""));
}

#[test]
fn module_url_roundtrips_rewritten_code() {
    let url = to_module_url("import { a } from 'vue'\nexport default { plugins: [] }", &builtin());

    assert!(url.starts_with("data:text/javascript;charset=utf-8,"));
    let code = decode_module_url(&url).unwrap();
    assert_eq!(code, "import { a } from 'https://cdn/vue.js'\nexport default { plugins: [] }");
}

struct Named(&'static str);

impl Plugin for Named {
    fn name(&self) -> &str {
        self.0
    }
}

#[derive(Default)]
struct RecordingEvaluator {
    seen: Mutex<Vec<String>>,
}

impl ModuleEvaluator for RecordingEvaluator {
    fn evaluate(&self, module_url: String) -> BoxFuture<Result<BuildConfig, EvalError>> {
        let code = decode_module_url(&module_url).unwrap_or_default();
        self.seen.lock().unwrap().push(code.clone());
        Box::pin(async move {
            if code.contains("throw") {
                return Err(EvalError("config threw".to_string()));
            }
            Ok(BuildConfig {
                plugins: vec![Arc::new(Named("macros"))],
            })
        })
    }
}

#[tokio::test]
async fn evaluate_passes_rewritten_module_and_returns_default_export() {
    let recorder = Arc::new(RecordingEvaluator::default());
    let evaluator = ConfigEvaluator::new(recorder.clone());

    let config = evaluator
        .evaluate("import x from 'vue'\nexport default {}", &builtin())
        .await
        .unwrap();

    assert_eq!(config.plugin_names(), ["macros"]);
    let seen = recorder.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].contains("from 'https://cdn/vue.js'"));
}

#[tokio::test]
async fn evaluate_rejects_when_module_throws() {
    let evaluator = ConfigEvaluator::new(Arc::new(RecordingEvaluator::default()));
    let err = evaluator
        .evaluate("throw new Error()", &builtin())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "config threw");
}
