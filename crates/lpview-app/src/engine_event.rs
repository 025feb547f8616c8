//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into JSON lines.

use std::sync::Arc;

use lpview_core::{Launch, Launchpad};
use serde::Serialize;

use crate::navigation::Screen;

/// Domain events emitted by the Engine.
///
/// Subscribers see a consistent view: events are derived from before/after
/// snapshots of a whole processing cycle.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// A different screen is now on top of the stack
    ScreenChanged { from: Screen, to: Screen },

    /// A screen started waiting on the network
    FetchStarted { screen: Screen },

    /// The Home screen has launchpads to show
    LaunchpadsLoaded {
        launchpads: Arc<Vec<Launchpad>>,
        from_cache: bool,
    },

    /// The Second screen has a launch to show
    LaunchLoaded {
        launch: Arc<Launch>,
        from_cache: bool,
    },

    /// A screen's fetch ended in its Failed state
    FetchFailed {
        screen: Screen,
        kind: String,
        message: String,
    },

    /// The engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Short name used as the `event` field of serialized output
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::ScreenChanged { .. } => "screen_changed",
            EngineEvent::FetchStarted { .. } => "fetch_started",
            EngineEvent::LaunchpadsLoaded { .. } => "launchpads_loaded",
            EngineEvent::LaunchLoaded { .. } => "launch_loaded",
            EngineEvent::FetchFailed { .. } => "fetch_failed",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}

/// Serializable launchpad card as displayed on Home
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchpadCard<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub details: &'a str,
    pub status: &'a str,
    /// Raw identifiers of the top launches; empty means "No Launch Available"
    pub top_launches: Vec<&'a str>,
}

impl<'a> From<&'a Launchpad> for LaunchpadCard<'a> {
    fn from(pad: &'a Launchpad) -> Self {
        Self {
            id: &pad.id,
            name: &pad.name,
            details: pad.details_text(),
            status: &pad.status,
            top_launches: pad.top_launches().iter().map(|id| id.as_str()).collect(),
        }
    }
}

/// Serializable launch fields as displayed on Second
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchDetails<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub details: &'a str,
    pub date: &'a str,
    pub reused: &'static str,
}

impl<'a> From<&'a Launch> for LaunchDetails<'a> {
    fn from(launch: &'a Launch) -> Self {
        Self {
            id: launch.id.as_str(),
            name: &launch.name,
            details: launch.details_display(),
            date: launch.date_display(),
            reused: launch.reused_display(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lpview_api::test_utils::{test_launch, test_launchpad};

    #[test]
    fn test_card_truncates_launches() {
        let pad = test_launchpad("Pad", &["a", "b", "c", "d"]);
        let card = LaunchpadCard::from(&pad);
        assert_eq!(card.top_launches, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_launch_details_formatting() {
        let launch = test_launch("x", "Demo-2", &[Some(true), Some(false)]);
        let details = LaunchDetails::from(&launch);
        assert_eq!(details.date, "2020-05-30");
        assert_eq!(details.details, "None");
        assert_eq!(details.reused, "true");
    }

    #[test]
    fn test_event_type_names() {
        assert_eq!(EngineEvent::Shutdown.event_type(), "shutdown");
        assert_eq!(
            EngineEvent::FetchStarted {
                screen: Screen::Home
            }
            .event_type(),
            "fetch_started"
        );
    }
}
