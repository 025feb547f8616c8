//! Application entry point shared by the TUI and headless modes

use std::path::PathBuf;

use lpview_api::{ClientOptions, SpacexClient};
use lpview_app::config::{self, Settings};
use lpview_app::{Engine, RouteParams};
use lpview_core::prelude::*;

use crate::headless::runner::run_headless;

/// Command-line choices, after parsing
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Overrides `[api] base_url`
    pub base_url: Option<String>,
    /// Forces `[cache] enabled = false`
    pub no_cache: bool,
    /// Settings file, ahead of `LPVIEW_CONFIG`
    pub config: Option<PathBuf>,
    pub headless: bool,
    /// Launch to open on top of the list
    pub launch: Option<String>,
}

/// Main application entry point
pub async fn run(options: RunOptions) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logs go to a file; the TUI owns the terminal
    lpview_core::logging::init()?;

    let settings = resolve_settings(&options);
    info!(
        "Settings: base_url={} cache={} ttl={}s",
        settings.api.base_url, settings.cache.enabled, settings.cache.ttl_secs
    );

    let client_options = ClientOptions::new(&settings.api.base_url, settings.api.timeout())
        .context("Invalid [api] settings")?;
    let client = SpacexClient::new(client_options).context("Failed to create API client")?;
    let engine = Engine::new(client, settings);
    let launch = options.launch.map(|id| RouteParams {
        launch_id: Some(id),
    });

    let result = if options.headless {
        run_headless(engine, launch).await
    } else {
        lpview_tui::run(engine, launch).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Launchpad Viewer exiting");
    result
}

/// Settings file (or defaults) with command-line overrides applied
pub fn resolve_settings(options: &RunOptions) -> Settings {
    let settings = match config::resolve_config_path(options.config.as_deref()) {
        Some(path) => config::load_settings(&path),
        None => Settings::default(),
    };
    apply_overrides(settings, options)
}

fn apply_overrides(mut settings: Settings, options: &RunOptions) -> Settings {
    if let Some(base_url) = &options.base_url {
        settings.api.base_url = base_url.clone();
    }
    if options.no_cache {
        settings.cache.enabled = false;
    }
    settings
}
