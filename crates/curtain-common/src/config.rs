//! JSON configuration loading with dataset-key lookup.
//!
//! A configuration file is a single JSON document. Callers may either load
//! the whole document or pull one dataset section out of it, optionally
//! supplying a default value to fall back on when the file or the key is
//! absent. A syntax error in the file is always fatal and is never
//! replaced by a default.

use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, error};

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found or unreadable: {path}")]
    NotFound { path: String },

    #[error("config file {path} has a syntax error: {message}")]
    Syntax { path: String, message: String },

    #[error("key '{0}' not defined in config file and no default supplied")]
    KeyNotFound(String),
}

/// Load a JSON configuration document, optionally selecting one dataset.
///
/// * With `dataset = None`, returns the whole document.
/// * With `dataset = Some(key)`, returns the value stored under `key` at
///   the top level of the document.
/// * `default` is returned when the file cannot be read, or when `dataset`
///   is given but the key is missing. It does NOT mask syntax errors.
pub fn load_config(
    path: &Path,
    dataset: Option<&str>,
    default: Option<Value>,
) -> Result<Value, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            error!(path = %path.display(), %err, "config file error");
            return match default {
                Some(value) => Ok(value),
                None => Err(ConfigError::NotFound {
                    path: path.display().to_string(),
                }),
            };
        }
    };

    let data: Value = serde_json::from_str(&content).map_err(|err| ConfigError::Syntax {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;

    let Some(key) = dataset else {
        return Ok(data);
    };

    match data.get(key) {
        Some(value) => Ok(value.clone()),
        None => {
            debug!(path = %path.display(), key, "key not defined in config file");
            match default {
                Some(value) => Ok(value),
                None => Err(ConfigError::KeyNotFound(key.to_string())),
            }
        }
    }
}
