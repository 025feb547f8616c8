//! Launchpad Viewer - browse SpaceX launchpads and launches in the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use launchpad_viewer::RunOptions;
use lpview_core::prelude::*;

/// Launchpad Viewer - browse SpaceX launchpads and launches in the terminal
#[derive(Parser, Debug)]
#[command(name = "lpview", version)]
#[command(about = "Browse SpaceX launchpads and launches in the terminal", long_about = None)]
struct Args {
    /// API root URL [default: https://api.spacexdata.com]
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Always fetch from the network
    #[arg(long)]
    no_cache: bool,

    /// Settings file (takes precedence over LPVIEW_CONFIG)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Open this launch on top of the launchpad list
    #[arg(long, value_name = "ID")]
    launch: Option<String>,
}

impl From<Args> for RunOptions {
    fn from(args: Args) -> Self {
        Self {
            base_url: args.base_url,
            no_cache: args.no_cache,
            config: args.config,
            headless: args.headless,
            launch: args.launch,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    launchpad_viewer::run(args.into()).await
}
