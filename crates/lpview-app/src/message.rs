//! Message types for the application (TEA pattern)

use lpview_core::{Launch, Launchpad, Result};

use crate::input_key::InputKey;
use crate::load_state::FetchToken;
use crate::navigation::{RouteParams, Screen};

/// All messages that can update application state
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// A screen became the top of the stack and should load its data
    Mount(Screen),

    /// Push the detail screen for the given launch
    OpenLaunch { params: RouteParams },

    /// Open the launch row currently selected on Home
    OpenSelected,

    /// Pop the top screen (no-op on Home)
    Back,

    /// Invalidate the current screen's cached response and fetch again
    Refresh,

    // ─────────────────────────────────────────────────────────
    // Selection Messages (Home)
    // ─────────────────────────────────────────────────────────
    /// Move to the next launch row
    SelectNext,
    /// Move to the previous launch row
    SelectPrevious,
    /// Jump to the first launch row of the next launchpad
    SelectNextPad,
    /// Jump to the first launch row of the previous launchpad
    SelectPreviousPad,
    /// Jump to the first launch row
    SelectFirst,
    /// Jump to the last launch row
    SelectLast,

    // ─────────────────────────────────────────────────────────
    // Fetch Results
    // ─────────────────────────────────────────────────────────
    /// Result of `GET /v4/launchpads`
    LaunchpadsFetched {
        token: FetchToken,
        result: Result<Vec<Launchpad>>,
    },

    /// Result of `GET /v4/launches/{id}`
    LaunchFetched {
        token: FetchToken,
        result: Result<Launch>,
    },
}
