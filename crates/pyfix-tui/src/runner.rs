//! Main TUI runner - entry point and event loop

use pyfix_app::Engine;
use pyfix_client::AnalysisService;
use pyfix_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI until the user quits or a signal arrives.
///
/// Messages already queued on the engine (a file given on the command line)
/// are processed before the first frame.
pub async fn run<S>(mut engine: Engine<S>) -> Result<()>
where
    S: AnalysisService + Send + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = ratatui::init();

    engine.spawn_signal_handler();
    info!("TUI started, uploading to {}", engine.state.server_label);

    let result = run_loop(&mut term, &mut engine);

    ratatui::restore();
    info!("TUI stopped");
    result
}

/// Main event loop
fn run_loop<S>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<S>) -> Result<()>
where
    S: AnalysisService + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Background results and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }
    Ok(())
}
