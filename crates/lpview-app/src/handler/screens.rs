//! Screen lifecycle, fetch results and Home selection

use std::sync::Arc;

use chrono::Local;
use lpview_core::prelude::*;
use lpview_core::{Launch, Launchpad};

use crate::cache::CacheKey;
use crate::load_state::{FetchToken, LoadState};
use crate::navigation::Screen;
use crate::state::{AppState, DetailState};

use super::{UpdateAction, UpdateResult};

/// Show the launchpad list, from cache when fresh
///
/// Issues a fresh token, so any fetch still in flight for an earlier mount
/// is ignored when it lands.
pub(crate) fn mount_home(state: &mut AppState) -> UpdateResult {
    let token = state.next_token();
    state.home.token = token;

    if let Some(hit) = state.cache.launchpads() {
        debug!("Launchpads served from cache ({} records)", hit.value.len());
        state.home.load = LoadState::Loaded(hit.value);
        state.home.fetched_at = Some(hit.fetched_at);
        state.home.from_cache = true;
        state.home.clamp_selection();
        return UpdateResult::none();
    }

    state.home.load = LoadState::Loading;
    state.home.from_cache = false;
    UpdateResult::action(UpdateAction::FetchLaunchpads { token })
}

/// Mount the detail screen for the route on top of the stack
pub(crate) fn mount_second(state: &mut AppState) -> UpdateResult {
    if state.current_screen() != Screen::Second {
        return UpdateResult::none();
    }

    let params = state.nav.current().params.clone();
    let token = state.next_token();
    let mut detail = DetailState::new(token, params);

    let result = match detail.params.resolve_launch_id() {
        Err(e) => {
            warn!("Cannot mount {}: {}", Screen::Second, e);
            detail.load = LoadState::Failed(e);
            UpdateResult::none()
        }
        Ok(id) => match state.cache.launch(&id) {
            Some(hit) => {
                debug!("Launch {} served from cache", id);
                detail.load = LoadState::Loaded(hit.value);
                detail.fetched_at = Some(hit.fetched_at);
                detail.from_cache = true;
                UpdateResult::none()
            }
            None => UpdateResult::action(UpdateAction::FetchLaunch { token, id }),
        },
    };

    state.detail = Some(detail);
    result
}

/// Drop the current screen's cache entry and load it again
pub(crate) fn refresh(state: &mut AppState) -> UpdateResult {
    match state.current_screen() {
        Screen::Home => {
            info!("Refreshing launchpads");
            state.cache.invalidate(&CacheKey::Launchpads);
            mount_home(state)
        }
        Screen::Second => {
            let id = state
                .detail
                .as_ref()
                .and_then(|detail| detail.params.resolve_launch_id().ok());
            if let Some(id) = id {
                info!("Refreshing launch {}", id);
                state.cache.invalidate(&CacheKey::Launch(id));
            }
            mount_second(state)
        }
    }
}

pub(crate) fn handle_launchpads_fetched(
    state: &mut AppState,
    token: FetchToken,
    result: Result<Vec<Launchpad>>,
) -> UpdateResult {
    if token != state.home.token {
        debug!("Discarding stale launchpads result {}", token);
        return UpdateResult::none();
    }

    match result {
        Ok(pads) => {
            info!("Loaded {} launchpads", pads.len());
            let pads = Arc::new(pads);
            let fetched_at = Local::now();
            state.cache.store_launchpads(Arc::clone(&pads), fetched_at);
            state.home.load = LoadState::Loaded(pads);
            state.home.fetched_at = Some(fetched_at);
            state.home.from_cache = false;
            state.home.clamp_selection();
        }
        Err(e) => {
            warn!("Failed to load launchpads: {}", e);
            state.home.load = LoadState::Failed(e);
        }
    }
    UpdateResult::none()
}

pub(crate) fn handle_launch_fetched(
    state: &mut AppState,
    token: FetchToken,
    result: Result<Launch>,
) -> UpdateResult {
    let Some(detail) = state.detail.as_mut().filter(|detail| detail.token == token) else {
        debug!("Discarding stale launch result {}", token);
        return UpdateResult::none();
    };

    match result {
        Ok(launch) => {
            info!("Loaded launch {} ({})", launch.id, launch.name);
            let launch = Arc::new(launch);
            let fetched_at = Local::now();
            state.cache.store_launch(Arc::clone(&launch), fetched_at);
            detail.load = LoadState::Loaded(launch);
            detail.fetched_at = Some(fetched_at);
            detail.from_cache = false;
        }
        Err(e) => {
            warn!("Failed to load launch: {}", e);
            detail.load = LoadState::Failed(e);
        }
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Home selection
// ─────────────────────────────────────────────────────────

fn home_row_count(state: &AppState) -> Option<usize> {
    if state.current_screen() != Screen::Home {
        return None;
    }
    match state.home.row_count() {
        0 => None,
        n => Some(n),
    }
}

pub(crate) fn move_selection(state: &mut AppState, delta: isize) -> UpdateResult {
    if let Some(count) = home_row_count(state) {
        let target = state.home.selected.saturating_add_signed(delta);
        state.home.selected = target.min(count - 1);
    }
    UpdateResult::none()
}

/// Jump to the first row of the next launchpad, or back to the first row of
/// the current (then previous) launchpad
pub(crate) fn jump_pad(state: &mut AppState, forward: bool) -> UpdateResult {
    if home_row_count(state).is_none() {
        return UpdateResult::none();
    }

    let rows = state.home.rows();
    let Some(current) = rows.get(state.home.selected).copied() else {
        return UpdateResult::none();
    };

    let target = if forward {
        rows.iter().position(|row| row.pad_index > current.pad_index)
    } else if current.launch_index > 0 {
        rows.iter().position(|row| row.pad_index == current.pad_index)
    } else {
        rows.iter()
            .rposition(|row| row.pad_index < current.pad_index)
            .map(|last| last - rows[last].launch_index)
    };

    if let Some(target) = target {
        state.home.selected = target;
    }
    UpdateResult::none()
}

pub(crate) fn select_edge(state: &mut AppState, last: bool) -> UpdateResult {
    if let Some(count) = home_row_count(state) {
        state.home.selected = if last { count - 1 } else { 0 };
    }
    UpdateResult::none()
}
