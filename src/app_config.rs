//! Reads the default app name from the project's `app.json`.

use serde::Deserialize;
use std::path::Path;

/// Location of the app manifest, relative to the project root.
pub const APP_CONFIG_FILE: &str = "./app.json";

#[derive(Debug, Deserialize)]
struct AppManifest {
    #[serde(default)]
    name: Option<serde_json::Value>,
}

/// App name from `./app.json`, if one can be resolved.
pub fn extract_app_name() -> Option<String> {
    read_app_name(Path::new(APP_CONFIG_FILE))
}

/// Returns the trimmed `name` field of the manifest at `path`.
///
/// A missing file, invalid JSON, a missing or non-string `name`, or a blank
/// name all yield `None`.
pub fn read_app_name(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let manifest: AppManifest = serde_json::from_str(&content).ok()?;

    let name = manifest.name?;
    let name = name.as_str()?.trim();
    if name.is_empty() {
        return None;
    }

    Some(name.to_string())
}
