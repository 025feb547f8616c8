//! Configuration file parsing for Launchpad Viewer
//!
//! Settings live in a single `config.toml` under the platform config
//! directory (`~/.config/lpview/config.toml` on Linux). The location can be
//! overridden with `LPVIEW_CONFIG` or the `--config` flag.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, load_settings, resolve_config_path, CONFIG_ENV_VAR, CONFIG_FILENAME,
};
pub use types::*;
