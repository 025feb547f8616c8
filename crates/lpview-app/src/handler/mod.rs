//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key bindings per screen
//! - `screens`: Mount, fetch-result and selection handlers

pub(crate) mod keys;
pub(crate) mod screens;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use lpview_core::LaunchId;

use crate::load_state::FetchToken;
use crate::message::Message;
use crate::navigation::Screen;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch all launchpads for the Home screen
    FetchLaunchpads { token: FetchToken },

    /// Fetch one launch for the Second screen
    FetchLaunch { token: FetchToken, id: LaunchId },

    /// Abort a screen's in-flight fetch (screen unmounted)
    CancelFetch { screen: Screen, token: FetchToken },
}

impl UpdateAction {
    /// Screen whose fetch this action concerns
    pub fn screen(&self) -> Screen {
        match self {
            UpdateAction::FetchLaunchpads { .. } => Screen::Home,
            UpdateAction::FetchLaunch { .. } => Screen::Second,
            UpdateAction::CancelFetch { screen, .. } => *screen,
        }
    }
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn with_action(mut self, action: UpdateAction) -> Self {
        self.action = Some(action);
        self
    }
}
