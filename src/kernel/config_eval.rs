//! Turns build-config and macro-config source into loadable modules.
//!
//! Bare specifiers that the built-in import map knows are swapped for their
//! URLs, but only where they directly follow `from` and a quote. The result is
//! wrapped into a `data:` URL so the evaluator can import it without a server.

use std::sync::Arc;

use regex::Regex;

use super::import_map::ImportMap;
use super::services::ports::{BoxFuture, BuildConfig, EvalError, ModuleEvaluator};

const MODULE_URL_PREFIX: &str = "data:text/javascript;charset=utf-8,";

pub fn rewrite_specifiers(source: &str, import_map: &ImportMap) -> String {
    let mut code = source.to_string();
    for (specifier, url) in &import_map.imports {
        // The closing quote must match the opening one.
        for quote in ['\'', '"'] {
            let pattern = format!(r"(from\s*{quote}){}({quote})", regex::escape(specifier));
            let Ok(re) = Regex::new(&pattern) else {
                continue;
            };
            code = re
                .replace_all(&code, |caps: &regex::Captures<'_>| {
                    format!("{}{}{}", &caps[1], url, &caps[2])
                })
                .into_owned();
        }
    }
    code
}

pub fn to_module_url(source: &str, import_map: &ImportMap) -> String {
    let code = rewrite_specifiers(source, import_map);
    format!("{MODULE_URL_PREFIX}{}", urlencoding::encode(&code))
}

pub fn decode_module_url(url: &str) -> Option<String> {
    let encoded = url.strip_prefix(MODULE_URL_PREFIX)?;
    urlencoding::decode(encoded).ok().map(|s| s.into_owned())
}

#[derive(Clone)]
pub struct ConfigEvaluator {
    evaluator: Arc<dyn ModuleEvaluator>,
}

impl ConfigEvaluator {
    pub fn new(evaluator: Arc<dyn ModuleEvaluator>) -> Self {
        Self { evaluator }
    }

    /// Rejects when the module fails to parse or throws while evaluating.
    pub fn evaluate(
        &self,
        source: &str,
        import_map: &ImportMap,
    ) -> BoxFuture<Result<BuildConfig, EvalError>> {
        let url = to_module_url(source, import_map);
        self.evaluator.evaluate(url)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/config_eval.rs"]
mod tests;
