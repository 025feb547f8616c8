//! Headless mode - JSON event output instead of the TUI
//!
//! Events are written as NDJSON (one object per line) to stdout. Each has an
//! `event` field naming its type and a `timestamp` in milliseconds.
//!
//! # Example Output
//!
//! ```json
//! {"event":"fetch_started","screen":"Home","timestamp":1704700001000}
//! {"event":"launchpads_loaded","from_cache":false,"launchpads":[{"id":"5e9e4501f509094ba4566f84","name":"CCSFS SLC 40","details":"...","status":"active","top_launches":["5eb87cddffd86e000604b32f"]}],"timestamp":1704700001200}
//! ```

pub mod runner;

use std::io::Write;

use chrono::Utc;
use serde::Serialize;
use tracing::error;

use lpview_app::engine_event::{LaunchDetails, LaunchpadCard};
use lpview_app::EngineEvent;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent<'a> {
    /// A screen started waiting on the network
    FetchStarted { screen: &'static str, timestamp: i64 },

    /// A different screen is on top
    ScreenChanged {
        from: &'static str,
        to: &'static str,
        timestamp: i64,
    },

    /// Launchpad cards as the list screen shows them
    LaunchpadsLoaded {
        from_cache: bool,
        launchpads: Vec<LaunchpadCard<'a>>,
        timestamp: i64,
    },

    /// Launch fields as the detail screen shows them
    LaunchLoaded {
        from_cache: bool,
        launch: LaunchDetails<'a>,
        timestamp: i64,
    },

    FetchFailed {
        screen: &'static str,
        kind: String,
        message: String,
        timestamp: i64,
    },
}

impl<'a> HeadlessEvent<'a> {
    /// Map an engine event; `None` for events with no output line
    pub fn from_engine(event: &'a EngineEvent) -> Option<Self> {
        let timestamp = Self::now();
        let event = match event {
            EngineEvent::FetchStarted { screen } => Self::FetchStarted {
                screen: screen.name(),
                timestamp,
            },
            EngineEvent::ScreenChanged { from, to } => Self::ScreenChanged {
                from: from.name(),
                to: to.name(),
                timestamp,
            },
            EngineEvent::LaunchpadsLoaded {
                launchpads,
                from_cache,
            } => Self::LaunchpadsLoaded {
                from_cache: *from_cache,
                launchpads: launchpads.iter().map(LaunchpadCard::from).collect(),
                timestamp,
            },
            EngineEvent::LaunchLoaded { launch, from_cache } => Self::LaunchLoaded {
                from_cache: *from_cache,
                launch: LaunchDetails::from(launch.as_ref()),
                timestamp,
            },
            EngineEvent::FetchFailed {
                screen,
                kind,
                message,
            } => Self::FetchFailed {
                screen: screen.name(),
                kind: kind.clone(),
                message: message.clone(),
                timestamp,
            },
            EngineEvent::Shutdown => return None,
        };
        Some(event)
    }

    /// Write this event to `out` as one JSON line
    pub fn emit(&self, out: &mut impl Write) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(out, "{}", json) {
            error!("Failed to write headless event: {}", e);
            return;
        }

        // Flush so consumers see each line immediately
        if let Err(e) = out.flush() {
            error!("Failed to flush headless output: {}", e);
        }
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use lpview_api::test_utils::{test_launch, test_launchpad};
    use lpview_app::Screen;

    fn to_value(event: &EngineEvent) -> serde_json::Value {
        let mut out = Vec::new();
        HeadlessEvent::from_engine(event)
            .expect("event has output")
            .emit(&mut out);
        let line = String::from_utf8(out).unwrap();
        assert!(line.ends_with('\n'));
        serde_json::from_str(line.trim_end()).expect("invalid JSON")
    }

    #[test]
    fn test_fetch_started_serialization() {
        let value = to_value(&EngineEvent::FetchStarted {
            screen: Screen::Home,
        });

        assert_eq!(value["event"], "fetch_started");
        assert_eq!(value["screen"], "Home");
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_launchpads_loaded_carries_cards() {
        let value = to_value(&EngineEvent::LaunchpadsLoaded {
            launchpads: Arc::new(vec![
                test_launchpad("KSC LC 39A", &["a", "b", "c", "d"]),
                test_launchpad("VAFB SLC 4W", &[]),
            ]),
            from_cache: true,
        });

        assert_eq!(value["event"], "launchpads_loaded");
        assert_eq!(value["from_cache"], true);
        assert_eq!(value["launchpads"][0]["name"], "KSC LC 39A");
        assert_eq!(
            value["launchpads"][0]["top_launches"],
            serde_json::json!(["a", "b", "c"])
        );
        assert_eq!(value["launchpads"][1]["top_launches"], serde_json::json!([]));
    }

    #[test]
    fn test_launch_loaded_uses_display_fields() {
        let value = to_value(&EngineEvent::LaunchLoaded {
            launch: Arc::new(test_launch("x", "Demo-2", &[Some(false), Some(true)])),
            from_cache: false,
        });

        assert_eq!(value["event"], "launch_loaded");
        assert_eq!(value["launch"]["date"], "2020-05-30");
        assert_eq!(value["launch"]["details"], "None");
        assert_eq!(value["launch"]["reused"], "false");
    }

    #[test]
    fn test_fetch_failed_serialization() {
        let value = to_value(&EngineEvent::FetchFailed {
            screen: Screen::Second,
            kind: "Network error".to_string(),
            message: "Network error: timed out".to_string(),
        });

        assert_eq!(value["event"], "fetch_failed");
        assert_eq!(value["screen"], "Second");
        assert_eq!(value["kind"], "Network error");
    }

    #[test]
    fn test_shutdown_has_no_line() {
        assert!(HeadlessEvent::from_engine(&EngineEvent::Shutdown).is_none());
    }
}
