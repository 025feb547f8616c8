//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::load_state::LoadState;
use crate::message::Message;
use crate::navigation::RouteParams;
use crate::state::{AppPhase, AppState};
use lpview_api::test_utils::{test_launch, test_launchpad};
use lpview_core::{Error, LaunchId, Launchpad};

/// Run a message and its follow-ups the way the event loop does, collecting
/// actions instead of spawning them
fn run(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn pads() -> Vec<Launchpad> {
    vec![
        test_launchpad("CCSFS SLC 40", &["a1", "a2", "a3", "a4"]),
        test_launchpad("VAFB SLC 4W", &[]),
        test_launchpad("KSC LC 39A", &["c1", "c2"]),
    ]
}

/// State with Home mounted and launchpads loaded
fn home_loaded() -> AppState {
    let mut state = AppState::new();
    let actions = run(&mut state, Message::Mount(Screen::Home));
    let token = match actions.as_slice() {
        [UpdateAction::FetchLaunchpads { token }] => *token,
        other => panic!("unexpected actions {other:?}"),
    };
    run(
        &mut state,
        Message::LaunchpadsFetched {
            token,
            result: Ok(pads()),
        },
    );
    state
}

fn fetch_launch_token(actions: &[UpdateAction]) -> (FetchToken, LaunchId) {
    actions
        .iter()
        .find_map(|action| match action {
            UpdateAction::FetchLaunch { token, id } => Some((*token, id.clone())),
            _ => None,
        })
        .expect("no FetchLaunch action")
}

// ─────────────────────────────────────────────────────────
// Quit / keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_and_ctrl_c_quit_on_every_screen() {
    let mut state = home_loaded();
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));

    run(&mut state, Message::OpenSelected);
    assert_eq!(state.current_screen(), Screen::Second);
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_home_navigation_keys() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Down),
        Some(Message::SelectNext)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('k')),
        Some(Message::SelectPrevious)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Enter),
        Some(Message::OpenSelected)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::PageDown),
        Some(Message::SelectNextPad)
    ));
    assert!(handle_key(&state, InputKey::Esc).is_none());
}

#[test]
fn test_second_back_keys() {
    let mut state = home_loaded();
    run(&mut state, Message::OpenSelected);

    for key in [
        InputKey::Esc,
        InputKey::Backspace,
        InputKey::Left,
        InputKey::Char('h'),
    ] {
        assert!(matches!(handle_key(&state, key), Some(Message::Back)));
    }
    assert!(handle_key(&state, InputKey::Down).is_none());
}

// ─────────────────────────────────────────────────────────
// Home loading
// ─────────────────────────────────────────────────────────

#[test]
fn test_mount_home_starts_loading_and_fetches() {
    let mut state = AppState::new();
    let actions = run(&mut state, Message::Mount(Screen::Home));

    assert!(state.home.load.is_loading());
    assert_eq!(
        actions,
        vec![UpdateAction::FetchLaunchpads {
            token: state.home.token
        }]
    );
}

#[test]
fn test_launchpads_loaded_in_response_order() {
    let state = home_loaded();
    let names: Vec<&str> = state
        .home
        .launchpads()
        .iter()
        .map(|pad| pad.name.as_str())
        .collect();
    assert_eq!(names, vec!["CCSFS SLC 40", "VAFB SLC 4W", "KSC LC 39A"]);
    assert!(state.home.fetched_at.is_some());
    assert!(!state.home.from_cache);
}

#[test]
fn test_launchpads_failure_leaves_loading() {
    let mut state = AppState::new();
    run(&mut state, Message::Mount(Screen::Home));
    let token = state.home.token;

    run(
        &mut state,
        Message::LaunchpadsFetched {
            token,
            result: Err(Error::network("connection refused")),
        },
    );

    assert!(state.home.load.is_failed());
    assert!(!state.is_loading());
}

#[test]
fn test_stale_launchpads_result_is_discarded() {
    let mut state = AppState::new();
    run(&mut state, Message::Mount(Screen::Home));
    let stale = state.home.token;
    run(&mut state, Message::Refresh);

    run(
        &mut state,
        Message::LaunchpadsFetched {
            token: stale,
            result: Ok(pads()),
        },
    );

    assert!(state.home.load.is_loading());
    assert!(state.cache.is_empty());
}

#[test]
fn test_remount_home_uses_cache() {
    let mut state = home_loaded();
    let actions = run(&mut state, Message::Mount(Screen::Home));

    assert!(actions.is_empty());
    assert!(state.home.from_cache);
    assert_eq!(state.home.launchpads().len(), 3);
}

#[test]
fn test_refresh_home_invalidates_and_refetches() {
    let mut state = home_loaded();
    let actions = run(&mut state, Message::Key(InputKey::Char('r')));

    assert!(state.home.load.is_loading());
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::FetchLaunchpads { .. }]
    ));
}

#[test]
fn test_refetching_identical_content_yields_identical_state() {
    let mut state = home_loaded();
    let before = state.home.launchpads().to_vec();

    run(&mut state, Message::Refresh);
    let token = state.home.token;
    run(
        &mut state,
        Message::LaunchpadsFetched {
            token,
            result: Ok(pads()),
        },
    );

    assert_eq!(state.home.launchpads(), before.as_slice());
}

#[test]
fn test_cache_disabled_always_fetches() {
    let mut settings = crate::config::Settings::default();
    settings.cache.enabled = false;
    let mut state = AppState::with_settings(settings);

    run(&mut state, Message::Mount(Screen::Home));
    let token = state.home.token;
    run(
        &mut state,
        Message::LaunchpadsFetched {
            token,
            result: Ok(pads()),
        },
    );

    let actions = run(&mut state, Message::Mount(Screen::Home));
    assert_eq!(actions.len(), 1);
}

// ─────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────

#[test]
fn test_selection_moves_across_launch_rows() {
    let mut state = home_loaded();
    assert_eq!(state.home.selected_launch_id().unwrap().as_str(), "a1");

    for _ in 0..3 {
        run(&mut state, Message::SelectNext);
    }
    // Only the first three launches of a pad are selectable
    assert_eq!(state.home.selected_launch_id().unwrap().as_str(), "c1");

    run(&mut state, Message::SelectLast);
    assert_eq!(state.home.selected_launch_id().unwrap().as_str(), "c2");
    run(&mut state, Message::SelectNext);
    assert_eq!(state.home.selected_launch_id().unwrap().as_str(), "c2");

    run(&mut state, Message::SelectFirst);
    run(&mut state, Message::SelectPrevious);
    assert_eq!(state.home.selected, 0);
}

#[test]
fn test_pad_jumps_skip_empty_pads() {
    let mut state = home_loaded();

    run(&mut state, Message::SelectNextPad);
    assert_eq!(state.home.selected_launch_id().unwrap().as_str(), "c1");

    run(&mut state, Message::SelectNext);
    run(&mut state, Message::SelectPreviousPad);
    assert_eq!(state.home.selected_launch_id().unwrap().as_str(), "c1");

    run(&mut state, Message::SelectPreviousPad);
    assert_eq!(state.home.selected_launch_id().unwrap().as_str(), "a1");
}

#[test]
fn test_selection_ignored_while_loading() {
    let mut state = AppState::new();
    run(&mut state, Message::Mount(Screen::Home));
    run(&mut state, Message::SelectNext);
    assert_eq!(state.home.selected, 0);

    let actions = run(&mut state, Message::OpenSelected);
    assert!(actions.is_empty());
    assert_eq!(state.current_screen(), Screen::Home);
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_open_nth_entry_navigates_with_its_identifier() {
    let mut state = home_loaded();
    run(&mut state, Message::SelectNext);

    let actions = run(&mut state, Message::OpenSelected);

    assert_eq!(state.current_screen(), Screen::Second);
    assert_eq!(state.nav.current().params.launch_id.as_deref(), Some("a2"));
    let (_, id) = fetch_launch_token(&actions);
    assert_eq!(id.as_str(), "a2");
    assert!(state.detail.as_ref().unwrap().load.is_loading());
}

#[test]
fn test_launch_loaded_on_detail() {
    let mut state = home_loaded();
    let actions = run(&mut state, Message::OpenSelected);
    let (token, _) = fetch_launch_token(&actions);

    run(
        &mut state,
        Message::LaunchFetched {
            token,
            result: Ok(test_launch("a1", "Demo-2", &[Some(true), Some(false)])),
        },
    );

    let launch = state.detail.as_ref().unwrap().launch().unwrap();
    assert_eq!(launch.name, "Demo-2");
    assert_eq!(launch.reused_display(), "true");
}

#[test]
fn test_missing_param_fails_without_fetching() {
    let mut state = home_loaded();
    let actions = run(
        &mut state,
        Message::OpenLaunch {
            params: RouteParams::default(),
        },
    );

    assert!(actions.is_empty());
    let detail = state.detail.as_ref().unwrap();
    assert!(matches!(
        detail.load,
        LoadState::Failed(Error::NavigationParamMissing { .. })
    ));
}

#[test]
fn test_back_cancels_in_flight_fetch_and_discards_late_result() {
    let mut state = home_loaded();
    let actions = run(&mut state, Message::OpenSelected);
    let (token, _) = fetch_launch_token(&actions);

    let actions = run(&mut state, Message::Back);
    assert_eq!(state.current_screen(), Screen::Home);
    assert!(state.detail.is_none());
    assert!(actions.contains(&UpdateAction::CancelFetch {
        screen: Screen::Second,
        token
    }));

    run(
        &mut state,
        Message::LaunchFetched {
            token,
            result: Ok(test_launch("a1", "Late", &[None])),
        },
    );
    assert!(state.detail.is_none());
    assert!(state
        .cache
        .launch(&LaunchId::parse("a1").unwrap())
        .is_none());
}

#[test]
fn test_back_on_home_is_noop() {
    let mut state = home_loaded();
    let actions = run(&mut state, Message::Back);
    assert!(actions.is_empty());
    assert_eq!(state.current_screen(), Screen::Home);
    assert!(!state.should_quit());
}

#[test]
fn test_reopening_cached_launch_skips_fetch() {
    let mut state = home_loaded();
    let actions = run(&mut state, Message::OpenSelected);
    let (token, _) = fetch_launch_token(&actions);
    run(
        &mut state,
        Message::LaunchFetched {
            token,
            result: Ok(test_launch("a1", "Demo-2", &[Some(false)])),
        },
    );
    let fetched_at = state.detail.as_ref().unwrap().fetched_at;
    assert!(fetched_at.is_some());
    run(&mut state, Message::Back);

    let actions = run(&mut state, Message::OpenSelected);
    assert!(actions.is_empty());
    let detail = state.detail.as_ref().unwrap();
    assert!(detail.from_cache);
    assert_eq!(detail.fetched_at, fetched_at);
    assert_eq!(detail.launch().unwrap().reused_display(), "false");
}

#[test]
fn test_refresh_on_detail_refetches_same_launch() {
    let mut state = home_loaded();
    let actions = run(&mut state, Message::OpenSelected);
    let (token, _) = fetch_launch_token(&actions);
    run(
        &mut state,
        Message::LaunchFetched {
            token,
            result: Err(Error::malformed("/v4/launches/a1", "launch has no core records")),
        },
    );
    assert!(state.detail.as_ref().unwrap().load.is_failed());

    let actions = run(&mut state, Message::Refresh);
    let (new_token, id) = fetch_launch_token(&actions);
    assert_ne!(new_token, token);
    assert_eq!(id.as_str(), "a1");
    assert!(state.detail.as_ref().unwrap().load.is_loading());
}

#[test]
fn test_tick_advances_spinner_only_while_loading() {
    let mut state = AppState::new();
    run(&mut state, Message::Mount(Screen::Home));
    run(&mut state, Message::Tick);
    assert_eq!(state.spinner_frame, 1);

    let mut state = home_loaded();
    run(&mut state, Message::Tick);
    assert_eq!(state.spinner_frame, 0);
}
