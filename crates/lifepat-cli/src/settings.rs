//! Settings persistence - load and save the editor configuration.
//!
//! Settings live in the platform-specific config folder unless `--config`
//! points elsewhere:
//! - macOS: ~/Library/Application Support/io.github.lifepat.lifepat/
//! - Windows: %APPDATA%/lifepat/lifepat/config/
//! - Linux: ~/.config/lifepat/

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use lifepat_model::EditorConfig;

const APP_QUALIFIER: &str = "io.github";
const APP_ORG: &str = "lifepat";
const APP_NAME: &str = "lifepat";
const CONFIG_FILENAME: &str = "settings.toml";

/// Values given on the command line. `None` keeps the file setting.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub rows: Option<i32>,
    pub cols: Option<i32>,
    pub history: Option<usize>,
    pub threshold: Option<u8>,
    pub pattern_name: Option<String>,
}

/// Get the path to the default settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Resolves `explicit` or the platform default.
pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(settings_path)
}

/// Load the configuration.
///
/// Returns defaults if the file doesn't exist, cannot be read or parsed, or
/// no settings location can be determined.
pub fn load_config(explicit: Option<&Path>) -> EditorConfig {
    let Some(path) = resolve_path(explicit) else {
        tracing::warn!("could not determine settings path, using defaults");
        return EditorConfig::default();
    };

    match fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded settings");
                config
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to parse settings, using defaults");
                EditorConfig::default()
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no settings file, using defaults");
            EditorConfig::default()
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "failed to read settings, using defaults");
            EditorConfig::default()
        }
    }
}

/// Save the configuration, creating the parent directory if needed.
///
/// Returns the path written.
pub fn save_config(config: &EditorConfig, explicit: Option<&Path>) -> Result<PathBuf> {
    let path = resolve_path(explicit).ok_or_else(|| anyhow!("could not determine settings path"))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory {}", parent.display()))?;
    }
    let content = toml::to_string_pretty(config).context("serialize settings")?;
    fs::write(&path, content).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), "saved settings");
    Ok(path)
}

/// Applies command-line overrides on top of file settings.
pub fn apply_overrides(mut config: EditorConfig, overrides: &ConfigOverrides) -> EditorConfig {
    if let Some(rows) = overrides.rows {
        config.rows = rows;
    }
    if let Some(cols) = overrides.cols {
        config.cols = cols;
    }
    if let Some(capacity) = overrides.history {
        config.history_capacity = capacity;
    }
    if let Some(threshold) = overrides.threshold {
        config.threshold = threshold;
    }
    if let Some(name) = &overrides.pattern_name {
        config.pattern_name.clone_from(name);
    }
    config
}
