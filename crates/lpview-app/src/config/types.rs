//! Configuration types for Launchpad Viewer
//!
//! Defines:
//! - `Settings` - Top-level settings file
//! - `ApiSettings`, `CacheSettings`, `UiSettings` - one per `[section]`
//! - `IconMode` - glyph set for the TUI

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Application settings loaded from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub cache: CacheSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// `[api]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Root URL of the SpaceX API; endpoint paths are appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    lpview_api::DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

/// `[cache]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CacheSettings {
    /// Serve repeated requests from memory
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// How long a cached response stays fresh, in seconds
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl CacheSettings {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_secs: default_ttl_secs(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_ttl_secs() -> u64 {
    300
}

/// `[ui]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub icons: IconMode,
}

/// Which glyph set the TUI draws with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Plain Unicode symbols, safe in any terminal font
    #[default]
    Unicode,
    /// Nerd Font private-use glyphs
    NerdFonts,
}
