//! Headless mode runner - event loop without the TUI
//!
//! Drives the Engine until the requested screen has loaded or failed, and
//! prints every engine event as a JSON line on the way.

use std::io::Write;

use tokio::sync::broadcast::{self, error::TryRecvError};
use tokio::sync::mpsc;

use lpview_api::LaunchApi;
use lpview_app::{Engine, EngineEvent, LoadState, Message, RouteParams, Screen};
use lpview_core::prelude::*;

use super::HeadlessEvent;

/// How a headless run ended
#[derive(Debug)]
pub enum HeadlessOutcome {
    /// The requested screen finished loading
    Loaded,
    /// The requested screen's fetch failed
    Failed(Error),
    /// Quit by signal, stdin, or a closed channel
    Quit,
}

/// Run in headless mode, printing JSON events to stdout
///
/// Returns the fetch error when the requested screen fails, so the process
/// exits non-zero.
pub async fn run_headless<A: LaunchApi + Send + Sync + 'static>(
    mut engine: Engine<A>,
    launch: Option<RouteParams>,
) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Launchpad Viewer starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    let stdin_tx = engine.msg_sender();
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(stdin_tx);
    });

    let mut stdout = std::io::stdout();
    let outcome = drive(&mut engine, launch, &mut stdout).await;

    engine.shutdown();
    info!("Headless mode exiting: {:?}", outcome);

    match outcome {
        HeadlessOutcome::Failed(e) => Err(e),
        HeadlessOutcome::Loaded | HeadlessOutcome::Quit => Ok(()),
    }
}

/// Start the engine and process messages until the target screen settles
///
/// The target is `Second` when `launch` is given, `Home` otherwise.
pub async fn drive<A: LaunchApi + Send + Sync + 'static>(
    engine: &mut Engine<A>,
    launch: Option<RouteParams>,
    out: &mut impl Write,
) -> HeadlessOutcome {
    let target = if launch.is_some() {
        Screen::Second
    } else {
        Screen::Home
    };
    let mut events = engine.subscribe();

    engine.start(launch);

    loop {
        if flush_events(&mut events, target, out) {
            return outcome_for(engine, target);
        }

        if engine.should_quit() {
            info!("Quit requested");
            return HeadlessOutcome::Quit;
        }

        match engine.next_message().await {
            Some(msg) => engine.process_message(msg),
            None => {
                info!("Message channel closed");
                return HeadlessOutcome::Quit;
            }
        }
    }
}

/// Print pending events; true once `target` reached Loaded or Failed
fn flush_events(
    events: &mut broadcast::Receiver<EngineEvent>,
    target: Screen,
    out: &mut impl Write,
) -> bool {
    let mut settled = false;
    loop {
        match events.try_recv() {
            Ok(event) => {
                if let Some(line) = HeadlessEvent::from_engine(&event) {
                    line.emit(out);
                }
                settled |= settles(&event, target);
            }
            Err(TryRecvError::Lagged(skipped)) => {
                warn!("Headless output skipped {} events", skipped);
            }
            Err(TryRecvError::Empty | TryRecvError::Closed) => return settled,
        }
    }
}

fn settles(event: &EngineEvent, target: Screen) -> bool {
    match event {
        EngineEvent::LaunchpadsLoaded { .. } => target == Screen::Home,
        EngineEvent::LaunchLoaded { .. } => target == Screen::Second,
        EngineEvent::FetchFailed { screen, .. } => *screen == target,
        _ => false,
    }
}

fn outcome_for<A: LaunchApi + Send + Sync + 'static>(
    engine: &Engine<A>,
    target: Screen,
) -> HeadlessOutcome {
    let error = match target {
        Screen::Home => match &engine.state.home.load {
            LoadState::Failed(e) => Some(e.clone()),
            _ => None,
        },
        Screen::Second => engine
            .state
            .detail
            .as_ref()
            .and_then(|detail| detail.load.error().cloned()),
    };

    match error {
        Some(e) => HeadlessOutcome::Failed(e),
        None => HeadlessOutcome::Loaded,
    }
}

/// Read commands from stdin and forward them to the engine (blocking)
fn spawn_stdin_reader_blocking(msg_tx: mpsc::Sender<Message>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(line) => match line.trim() {
                "q" | "quit" => {
                    info!("Stdin: quit requested");
                    let _ = msg_tx.blocking_send(Message::Quit);
                    break;
                }
                "r" | "refresh" => {
                    info!("Stdin: refresh requested");
                    let _ = msg_tx.blocking_send(Message::Refresh);
                }
                "" => {}
                other => warn!("Unknown stdin command: {}", other),
            },
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    info!("Stdin reader exiting");
}
