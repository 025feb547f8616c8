//! Main update function - handles state transitions (TEA pattern)

use lpview_core::prelude::*;

use crate::message::Message;
use crate::navigation::{RouteParams, Screen};
use crate::state::{AppPhase, AppState};

use super::{keys::handle_key, screens, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.is_loading() {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Mount(Screen::Home) => screens::mount_home(state),
        Message::Mount(Screen::Second) => screens::mount_second(state),

        Message::OpenLaunch { params } => {
            debug!("Opening launch {:?}", params.launch_id);
            let replaced = state.detail.take();
            state.nav.push_second(params);

            let result = UpdateResult::message(Message::Mount(Screen::Second));
            match replaced {
                Some(detail) => result.with_action(UpdateAction::CancelFetch {
                    screen: Screen::Second,
                    token: detail.token,
                }),
                None => result,
            }
        }

        Message::OpenSelected => {
            if state.current_screen() != Screen::Home {
                return UpdateResult::none();
            }
            match state.home.selected_launch_id() {
                Some(id) => UpdateResult::message(Message::OpenLaunch {
                    params: RouteParams::launch(id),
                }),
                None => UpdateResult::none(),
            }
        }

        Message::Back => match state.nav.pop() {
            Some(route) => {
                debug!("Leaving {}", route.screen);
                let result = UpdateResult::message(Message::Mount(Screen::Home));
                match state.detail.take() {
                    Some(detail) if detail.load.is_loading() => {
                        result.with_action(UpdateAction::CancelFetch {
                            screen: Screen::Second,
                            token: detail.token,
                        })
                    }
                    _ => result,
                }
            }
            None => UpdateResult::none(),
        },

        Message::Refresh => screens::refresh(state),

        // ─────────────────────────────────────────────────────────
        // Selection
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => screens::move_selection(state, 1),
        Message::SelectPrevious => screens::move_selection(state, -1),
        Message::SelectNextPad => screens::jump_pad(state, true),
        Message::SelectPreviousPad => screens::jump_pad(state, false),
        Message::SelectFirst => screens::select_edge(state, false),
        Message::SelectLast => screens::select_edge(state, true),

        // ─────────────────────────────────────────────────────────
        // Fetch results
        // ─────────────────────────────────────────────────────────
        Message::LaunchpadsFetched { token, result } => {
            screens::handle_launchpads_fetched(state, token, result)
        }
        Message::LaunchFetched { token, result } => {
            screens::handle_launch_fetched(state, token, result)
        }
    }
}
