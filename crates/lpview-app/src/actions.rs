//! Action handlers: UpdateAction dispatch and background fetch tasks
//!
//! Every fetch runs as its own tokio task and reports back through the
//! message channel. At most one fetch per screen is alive: spawning a new one
//! aborts its predecessor, and `CancelFetch` aborts it when the screen
//! unmounts. Results that still slip through carry a stale [`FetchToken`] and
//! are dropped by the update function.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use lpview_api::LaunchApi;
use lpview_core::prelude::*;
use lpview_core::LaunchId;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::load_state::FetchToken;
use crate::message::Message;
use crate::navigation::Screen;
use crate::UpdateAction;

/// In-flight fetch per screen
pub type FetchTaskMap = Arc<Mutex<HashMap<Screen, (FetchToken, JoinHandle<()>)>>>;

pub fn new_fetch_task_map() -> FetchTaskMap {
    Arc::new(Mutex::new(HashMap::new()))
}

/// Execute an action by spawning (or aborting) a background task
pub fn handle_action<A>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    api: Arc<A>,
    fetch_tasks: FetchTaskMap,
    shutdown_rx: watch::Receiver<bool>,
) where
    A: LaunchApi + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchLaunchpads { token } => {
            spawn_launchpads_fetch(token, msg_tx, api, fetch_tasks, shutdown_rx);
        }

        UpdateAction::FetchLaunch { token, id } => {
            spawn_launch_fetch(token, id, msg_tx, api, fetch_tasks, shutdown_rx);
        }

        UpdateAction::CancelFetch { screen, token } => {
            cancel_fetch(&fetch_tasks, screen, token);
        }
    }
}

fn spawn_launchpads_fetch<A>(
    token: FetchToken,
    msg_tx: mpsc::Sender<Message>,
    api: Arc<A>,
    fetch_tasks: FetchTaskMap,
    mut shutdown_rx: watch::Receiver<bool>,
) where
    A: LaunchApi + Send + Sync + 'static,
{
    let registry = fetch_tasks.clone();
    register(&fetch_tasks, Screen::Home, token, move || {
        tokio::spawn(async move {
            debug!("Fetching launchpads {}", token);
            let result = tokio::select! {
                result = api.launchpads() => result,
                Ok(()) = shutdown_rx.changed() => return,
            };
            let _ = msg_tx
                .send(Message::LaunchpadsFetched { token, result })
                .await;
            unregister(&registry, Screen::Home, token);
        })
    });
}

fn spawn_launch_fetch<A>(
    token: FetchToken,
    id: LaunchId,
    msg_tx: mpsc::Sender<Message>,
    api: Arc<A>,
    fetch_tasks: FetchTaskMap,
    mut shutdown_rx: watch::Receiver<bool>,
) where
    A: LaunchApi + Send + Sync + 'static,
{
    let registry = fetch_tasks.clone();
    register(&fetch_tasks, Screen::Second, token, move || {
        tokio::spawn(async move {
            debug!("Fetching launch {} {}", id, token);
            let result = tokio::select! {
                result = api.launch(&id) => result,
                Ok(()) = shutdown_rx.changed() => return,
            };
            let _ = msg_tx.send(Message::LaunchFetched { token, result }).await;
            unregister(&registry, Screen::Second, token);
        })
    });
}

/// Spawn under the registry lock so the task cannot unregister before it is
/// registered, aborting whatever the screen had in flight
fn register<F>(fetch_tasks: &FetchTaskMap, screen: Screen, token: FetchToken, spawn: F)
where
    F: FnOnce() -> JoinHandle<()>,
{
    let Ok(mut tasks) = fetch_tasks.lock() else {
        warn!("Fetch task registry poisoned; {} fetch not tracked", screen);
        drop(spawn());
        return;
    };

    if let Some((previous, handle)) = tasks.remove(&screen) {
        debug!("Aborting superseded {} fetch {}", screen, previous);
        handle.abort();
    }
    tasks.insert(screen, (token, spawn()));
}

fn unregister(fetch_tasks: &FetchTaskMap, screen: Screen, token: FetchToken) {
    if let Ok(mut tasks) = fetch_tasks.lock() {
        if tasks.get(&screen).is_some_and(|(current, _)| *current == token) {
            tasks.remove(&screen);
        }
    }
}

/// Abort a screen's fetch if it is still the one identified by `token`
pub fn cancel_fetch(fetch_tasks: &FetchTaskMap, screen: Screen, token: FetchToken) {
    let Ok(mut tasks) = fetch_tasks.lock() else {
        return;
    };
    match tasks.get(&screen) {
        Some((current, _)) if *current == token => {
            if let Some((_, handle)) = tasks.remove(&screen) {
                info!("Cancelled {} fetch {}", screen, token);
                handle.abort();
            }
        }
        _ => trace!("No {} fetch {} to cancel", screen, token),
    }
}

/// Abort every in-flight fetch
pub fn abort_all(fetch_tasks: &FetchTaskMap) {
    if let Ok(mut tasks) = fetch_tasks.lock() {
        for (screen, (token, handle)) in tasks.drain() {
            debug!("Aborting {} fetch {} on shutdown", screen, token);
            handle.abort();
        }
    }
}
