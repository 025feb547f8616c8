//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the fetch task
//! registry, the shutdown signal and the API client. Both frontends drive it
//! the same way: feed messages in, read state (or subscribe to events) out.

use std::sync::Arc;

use lpview_api::LaunchApi;
use lpview_core::prelude::*;
use tokio::sync::{broadcast, mpsc, watch};

use crate::actions::{self, FetchTaskMap};
use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::load_state::{FetchToken, LoadState};
use crate::message::Message;
use crate::navigation::{RouteParams, Screen};
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Per-screen load status, compared across a processing cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LoadSnapshot {
    token: FetchToken,
    label: &'static str,
}

impl LoadSnapshot {
    fn of<T>(token: FetchToken, load: &LoadState<T>) -> Self {
        Self {
            token,
            label: load.label(),
        }
    }
}

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, Copy)]
struct StateSnapshot {
    screen: Screen,
    home: LoadSnapshot,
    detail: Option<LoadSnapshot>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            screen: state.current_screen(),
            home: LoadSnapshot::of(state.home.token, &state.home.load),
            detail: state
                .detail
                .as_ref()
                .map(|detail| LoadSnapshot::of(detail.token, &detail.load)),
        }
    }
}

/// Orchestration engine for Launchpad Viewer.
pub struct Engine<A: LaunchApi + Send + Sync + 'static> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, fetch tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// In-flight fetch per screen
    pub fetch_tasks: FetchTaskMap,

    /// Send `true` to stop every background task
    pub shutdown_tx: watch::Sender<bool>,

    pub shutdown_rx: watch::Receiver<bool>,

    api: Arc<A>,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl<A: LaunchApi + Send + Sync + 'static> Engine<A> {
    /// Create an Engine around `api`.
    ///
    /// Must be called inside a tokio runtime: it spawns the signal handler.
    pub fn new(api: A, settings: Settings) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (event_tx, _) = broadcast::channel(256);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            fetch_tasks: actions::new_fetch_task_map(),
            shutdown_tx,
            shutdown_rx,
            api: Arc::new(api),
            event_tx,
        }
    }

    /// Mount Home, then optionally open a launch on top of it
    pub fn start(&mut self, launch: Option<RouteParams>) {
        self.process_message(Message::Mount(Screen::Home));
        if let Some(params) = launch {
            self.process_message(Message::OpenLaunch { params });
        }
    }

    /// Subscribe to engine events.
    ///
    /// Slow subscribers lose the oldest events
    /// (`broadcast::error::RecvError::Lagged`).
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit the
    /// resulting events.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.api,
            &self.fetch_tasks,
            &self.shutdown_rx,
        );

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message on the channel
    pub async fn next_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    /// Stop background work and notify subscribers
    pub fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
        let _ = self.shutdown_tx.send(true);
        actions::abort_all(&self.fetch_tasks);
        info!("Engine shut down");
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.screen != post.screen {
            self.emit(EngineEvent::ScreenChanged {
                from: pre.screen,
                to: post.screen,
            });
        }

        if pre.home != post.home {
            let home = &self.state.home;
            self.emit_load(
                Screen::Home,
                &home.load,
                |pads| EngineEvent::LaunchpadsLoaded {
                    launchpads: Arc::clone(pads),
                    from_cache: home.from_cache,
                },
            );
        }

        if let (Some(detail), Some(snapshot)) = (self.state.detail.as_ref(), post.detail) {
            if pre.detail != Some(snapshot) {
                self.emit_load(Screen::Second, &detail.load, |launch| {
                    EngineEvent::LaunchLoaded {
                        launch: Arc::clone(launch),
                        from_cache: detail.from_cache,
                    }
                });
            }
        }
    }

    fn emit_load<T>(
        &self,
        screen: Screen,
        load: &LoadState<T>,
        loaded: impl FnOnce(&T) -> EngineEvent,
    ) {
        let event = match load {
            LoadState::Loading => EngineEvent::FetchStarted { screen },
            LoadState::Loaded(data) => loaded(data),
            LoadState::Failed(e) => EngineEvent::FetchFailed {
                screen,
                kind: e.kind_label().to_string(),
                message: e.to_string(),
            },
        };
        self.emit(event);
    }

    /// `send()` fails only when nobody is subscribed, which is fine.
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}
