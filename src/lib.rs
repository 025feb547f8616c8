//! Launchpad Viewer Library
//!
//! A terminal viewer for SpaceX launchpads and their launches.

pub mod app;
pub mod headless;

// Re-export main entry points
pub use app::{run, RunOptions};
pub use headless::runner::run_headless;
