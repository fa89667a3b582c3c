use std::path::PathBuf;
use std::process::ExitCode;

use repl_store::kernel::codec;
use repl_store::kernel::services::adapters::{ensure_settings_file, load_settings};
use repl_store::kernel::services::ports::WorkspaceSettings;
use repl_store::kernel::{Action, Effect, Store};

mod logging;

const SETTINGS_ENV: &str = "REPL_STORE_SETTINGS";

const USAGE: &str = "usage:
  repl-store decode <state>       print the file set stored in a URL fragment
  repl-store encode <json-file>   print the URL fragment for a {filename: code} object
  repl-store inspect <state>      load a fragment into a workspace and list its files";

fn main() -> ExitCode {
    let _logging = logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.as_slice() {
        [cmd, state] if cmd == "decode" => decode(state),
        [cmd, path] if cmd == "encode" => encode(PathBuf::from(path)),
        [cmd, state] if cmd == "inspect" => inspect(state),
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            tracing::error!(%message, "command failed");
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn decode(state: &str) -> Result<String, String> {
    let json = codec::decode_fragment(state).map_err(|e| e.to_string())?;
    let value: serde_json::Value = serde_json::from_str(&json).map_err(|e| e.to_string())?;
    serde_json::to_string_pretty(&value).map_err(|e| e.to_string())
}

fn encode(path: PathBuf) -> Result<String, String> {
    let text = std::fs::read_to_string(&path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let value: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&text).map_err(|e| e.to_string())?;
    let json = serde_json::Value::Object(value).to_string();
    codec::encode_fragment(&json).map_err(|e| e.to_string())
}

fn inspect(state: &str) -> Result<String, String> {
    let settings = match std::env::var_os(SETTINGS_ENV) {
        Some(path) => {
            let path = PathBuf::from(path);
            if let Err(e) = ensure_settings_file(&path) {
                tracing::warn!(path = %path.display(), error = %e, "failed to create settings file");
            }
            load_settings(&path)
        }
        None => WorkspaceSettings::default(),
    };
    let mut store = Store::new(settings);
    let result = store.dispatch(Action::LoadState(state.to_string()));
    if let Some(Effect::Alert(message)) = result
        .effects
        .iter()
        .find(|effect| matches!(effect, Effect::Alert(_)))
    {
        return Err(message.clone());
    }

    let state = store.state();
    let mut lines = vec![format!("main: {}", state.main_file)];
    if let Some(version) = &state.versions.framework {
        lines.push(format!("version: {version}"));
    }
    for file in state.files.iter() {
        let marker = if file.hidden { " (hidden)" } else { "" };
        lines.push(format!(
            "{} [{}] {} bytes{marker}",
            file.filename,
            file.language().display_name(),
            file.code.len()
        ));
    }
    Ok(lines.join("\n"))
}
