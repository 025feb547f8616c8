//! Main TUI runner - entry point and event loop

use lpview_api::LaunchApi;
use lpview_app::{Engine, RouteParams};
use lpview_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI until the user quits or a termination signal arrives
///
/// `launch` opens the detail screen for that launch on top of the list.
pub async fn run<A: LaunchApi + Send + Sync + 'static>(
    mut engine: Engine<A>,
    launch: Option<RouteParams>,
) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    engine.start(launch);
    info!("TUI started on {}", engine.state.current_screen());

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    terminal::restore();

    result
}

/// Main event loop
fn run_loop<A: LaunchApi + Send + Sync + 'static>(
    terminal: &mut ratatui::DefaultTerminal,
    engine: &mut Engine<A>,
) -> Result<()> {
    while !engine.should_quit() {
        // Fetch results and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
