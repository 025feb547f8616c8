//! Settings file discovery and loading

use std::path::{Path, PathBuf};

use lpview_core::prelude::*;

use super::types::Settings;

/// Environment variable that points at an alternative settings file
pub const CONFIG_ENV_VAR: &str = "LPVIEW_CONFIG";

pub const CONFIG_FILENAME: &str = "config.toml";

const CONFIG_DIR: &str = "lpview";

/// `<config dir>/lpview/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Pick the settings file to read
///
/// Precedence: explicit `--config` path, then `LPVIEW_CONFIG`, then the
/// platform default.
pub fn resolve_config_path(cli_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_path {
        return Some(path.to_path_buf());
    }

    match std::env::var(CONFIG_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => Some(PathBuf::from(value)),
        _ => default_config_path(),
    }
}

/// Load settings from `config_path`
///
/// A missing file yields defaults. An unreadable or unparseable file is
/// logged and also yields defaults, so a broken config never blocks startup.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}
