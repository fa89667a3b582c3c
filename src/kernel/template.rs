use super::services::ports::{Template, TemplateCatalog};

/// Extension whose new files start from the preset boilerplate.
pub const BOILERPLATE_EXTENSION: &str = ".vine.ts";

const INDEX_HTML: &str = r#"<div id="app"></div>
<script type="module" src="./main.ts"></script>
"#;

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ESNext",
    "module": "ESNext",
    "moduleResolution": "Bundler",
    "strict": true,
    "jsx": "preserve",
    "lib": ["ESNext", "DOM"],
    "types": []
  }
}
"#;

const VUE_APP: &str = r#"<script setup lang="ts">
import { ref } from 'vue'

const msg = ref('Hello World!')
</script>

<template>
  <h1>{{ msg }}</h1>
  <input v-model="msg" />
</template>
"#;

const VUE_BUILD_CONFIG: &str = r#"import Vue from '@vitejs/plugin-vue'

export default {
  plugins: [Vue()],
}
"#;

const VUE_MACROS_CONFIG: &str = r#"export default {
  defineModels: true,
}
"#;

const VUE_NEW_FILE: &str = r#"<script setup lang="ts">
</script>

<template>
  <div />
</template>
"#;

const VINE_APP: &str = r#"import { ref } from 'vue'

export function App() {
  const msg = ref('Hello Vine!')

  return vine`
    <h1>{{ msg }}</h1>
    <input v-model="msg" />
  `
}
"#;

const VINE_BUILD_CONFIG: &str = r#"import { VineVitePlugin } from 'vue-vine/vite'

export default {
  plugins: [VineVitePlugin()],
}
"#;

const VINE_MACROS_CONFIG: &str = r#"export default {}
"#;

const VINE_NEW_FILE: &str = r#"export function Comp() {
  return vine`<div />`
}
"#;

#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub const NAMES: [&'static str; 2] = ["vue", "vine"];
}

impl TemplateCatalog for BuiltinTemplates {
    fn template(&self, name: &str) -> Option<Template> {
        let (main_file, main_source, build_config, macros_config, new_file) = match name {
            "vue" => (
                "App.vue",
                VUE_APP,
                VUE_BUILD_CONFIG,
                VUE_MACROS_CONFIG,
                VUE_NEW_FILE,
            ),
            "vine" => (
                "App.vine.ts",
                VINE_APP,
                VINE_BUILD_CONFIG,
                VINE_MACROS_CONFIG,
                VINE_NEW_FILE,
            ),
            _ => return None,
        };

        Some(Template {
            main_file: main_file.to_string(),
            markup_entry: INDEX_HTML.to_string(),
            main_source: main_source.to_string(),
            build_config_source: build_config.to_string(),
            macros_config_source: macros_config.to_string(),
            tsconfig_source: TSCONFIG.to_string(),
            new_file_boilerplate: new_file.to_string(),
        })
    }

    fn names(&self) -> Vec<String> {
        Self::NAMES.iter().map(|n| n.to_string()).collect()
    }
}

pub fn default_tsconfig() -> &'static str {
    TSCONFIG
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/template.rs"]
mod tests;
