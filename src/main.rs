use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::info;

use pizza_party::config::{LogConfig, fetch_config};
use pizza_party::session::Simulator;
use pizza_party::tui::event::{spawn_event_reader, spawn_job, spawn_tick_timer, update};
use pizza_party::tui::{Action, App, Tui, render, restore_terminal, setup_terminal, shutdown};
use pizza_party::{PartyError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let app_config = fetch_config()?;
    init_tracing(&app_config.logging)?;

    let simulator = Simulator::from_config(&app_config.simulation);
    let mut app = App::new(app_config.event);

    let mut terminal = setup_terminal()?;
    info!("exchange started");

    let result = run(&mut terminal, &mut app, simulator, app_config.ui.tick_ms).await;

    let restored = restore_terminal(&mut terminal);
    shutdown(result, restored)
}

/// Draws and dispatches messages until the app asks to quit.
async fn run(terminal: &mut Tui, app: &mut App, simulator: Simulator, tick_ms: u64) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_event_reader(tx.clone());
    spawn_tick_timer(tx.clone(), Duration::from_millis(tick_ms));

    loop {
        terminal
            .draw(|frame| render(frame, app))
            .map_err(|e| PartyError::Io(format!("failed to draw: {e}")))?;

        let Some(message) = rx.recv().await else {
            break;
        };
        if let Some(Action::Run(job)) = update(app, message) {
            spawn_job(simulator.clone(), job, tx.clone());
        }

        if app.should_quit {
            break;
        }
    }

    app.controller.logout();
    Ok(())
}

/// Sends tracing output to the configured log file.
///
/// Nothing is installed without a file, since stdout belongs to the terminal UI.
fn init_tracing(config: &LogConfig) -> Result<()> {
    let Some(path) = &config.file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| PartyError::Io(format!("failed to open {}: {e}", path.display())))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(config.level)
        .init();
    Ok(())
}
