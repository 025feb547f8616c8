//! lpview-app - Application state and orchestration for Launchpad Viewer
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management,
//! the Engine abstraction for shared orchestration, navigation between the two
//! screens, the response cache, and configuration loading.

pub mod actions;
pub mod cache;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod load_state;
pub mod message;
pub mod navigation;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use load_state::{FetchToken, LoadState};
pub use message::Message;
pub use navigation::{RouteParams, Screen};
pub use state::AppState;
