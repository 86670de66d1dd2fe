//! Per-tag persistence for user interface settings.
//!
//! Settings are a flat string→value mapping serialized as JSON to one file
//! per tag (`settings.<tag>.json`). Loading merges the persisted mapping
//! over a caller-supplied default mapping, so callers can rely on every key
//! of the default being present in the result. A missing or corrupt file
//! falls back to the defaults.

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A string→value settings mapping.
pub type SettingsMap = Map<String, Value>;

fn settings_file(dir: &Path, tag: &str) -> PathBuf {
    dir.join(format!("settings.{tag}.json"))
}

/// Store a settings mapping to disk.
///
/// Failures are logged and swallowed.
pub fn save_settings(dir: &Path, tag: &str, settings: &SettingsMap) {
    let path = settings_file(dir, tag);
    debug!(tag, path = %path.display(), "storing settings");
    let result = serde_json::to_string_pretty(&Value::Object(settings.clone()))
        .map_err(|err| err.to_string())
        .and_then(|content| fs::write(&path, content).map_err(|err| err.to_string()));
    if let Err(err) = result {
        warn!(tag, %err, "problems storing settings");
    }
}

/// Load a settings mapping from disk, merged over `default_settings`.
///
/// Persisted values win key-by-key; keys present only in the defaults
/// survive the merge. A missing or unparsable file returns the defaults
/// unchanged.
pub fn load_settings(dir: &Path, tag: &str, mut default_settings: SettingsMap) -> SettingsMap {
    let path = settings_file(dir, tag);
    debug!(tag, path = %path.display(), "loading settings");
    let loaded = fs::read_to_string(&path)
        .map_err(|err| err.to_string())
        .and_then(|content| {
            serde_json::from_str::<Value>(&content).map_err(|err| err.to_string())
        });
    match loaded {
        Ok(Value::Object(stored)) => {
            for (key, value) in stored {
                default_settings.insert(key, value);
            }
        }
        Ok(_) => warn!(tag, "stored settings are not an object, switching to defaults"),
        Err(err) => warn!(tag, %err, "problems reloading stored settings, switching to defaults"),
    }
    default_settings
}
