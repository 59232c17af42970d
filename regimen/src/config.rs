//! Editor configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding the configuration file path.
pub const CONFIG_ENV: &str = "REGIMEN_CONFIG";

const DEFAULT_INDENTATION_WIDTH: f32 = 50.0;
const DEFAULT_OUTLINE_INDENT: usize = 2;

/// Errors emitted while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// User-tunable editor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    indentation_width: f32,
    outline_indent: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            indentation_width: DEFAULT_INDENTATION_WIDTH,
            outline_indent: DEFAULT_OUTLINE_INDENT,
        }
    }
}

impl EditorConfig {
    /// Width of one nesting level, in pixels.
    ///
    /// Non-finite or non-positive values fall back to the default.
    pub fn indentation_width(&self) -> f32 {
        if self.indentation_width.is_finite() && self.indentation_width > 0.0 {
            self.indentation_width
        } else {
            DEFAULT_INDENTATION_WIDTH
        }
    }

    /// Spaces per nesting level in the text outline.
    pub fn outline_indent(&self) -> usize {
        self.outline_indent
    }
}

/// Return the path to the configuration file.
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("regimen")
            .join("config.json");
    }
    std::env::temp_dir().join("regimen").join("config.json")
}

/// Load the configuration from a file, using defaults when it is missing.
pub fn load_config_from(path: &Path) -> Result<EditorConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(EditorConfig::default());
        },
        Err(err) => return Err(err.into()),
    };
    let config: EditorConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Load the configuration, falling back to defaults on error.
pub fn load_initial_config() -> EditorConfig {
    let path = config_path();
    match load_config_from(&path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!(
                "Failed to load config from {}, using defaults: {err}",
                path.display()
            );
            EditorConfig::default()
        },
    }
}
