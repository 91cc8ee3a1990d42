//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::models::Screen;
use crate::session::{Completion, Job, Simulator};

use super::app::App;

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),
    /// A simulated job finished.
    Completed(Completion),
}

/// Actions that require external handling.
#[derive(Debug)]
pub enum Action {
    /// Run a simulated backend job.
    Run(Job),
}

/// How long one blocking poll waits for terminal input.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Forwards terminal input to `tx` until the receiver is dropped.
///
/// Key releases and repeats are dropped here, so handlers only see presses.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            let event = match tokio::task::spawn_blocking(read_input).await {
                Ok(Ok(event)) => event,
                Ok(Err(e)) => {
                    warn!(error = %e, "terminal input failed");
                    break;
                }
                Err(_) => break,
            };
            if let Some(event) = event
                && tx.send(Message::Input(event)).is_err()
            {
                break;
            }
        }
    });
}

/// Waits up to [`INPUT_POLL`] for one relevant terminal event.
fn read_input() -> std::io::Result<Option<Event>> {
    if !event::poll(INPUT_POLL)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
        _ => None,
    })
}

/// Sends a tick every `period`, skipping ticks the loop fell behind on.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, period: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately.
        interval.tick().await;
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Runs `job` in the background and posts its completion, if any.
pub fn spawn_job(simulator: Simulator, job: Job, tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        if let Some(completion) = simulator.run(job).await {
            let _ = tx.send(Message::Completed(completion));
        }
    });
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) -> Option<Action> {
    let action = match message {
        Message::Input(event) => handle_input(app, event),
        Message::Completed(completion) => {
            if !app.controller.complete(completion) {
                debug!("completion ignored");
            }
            None
        }
    };
    app.sync_screen();
    action
}

/// Handles input events and updates application state.
fn handle_input(app: &mut App, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Key(_) | Event::Resize(_, _) => None,
        Event::Tick => {
            app.ticks = app.ticks.wrapping_add(1);
            app.clear_stale_notices();
            None
        }
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    // Global keys (work on every screen)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return None;
    }

    // Screen-specific handling
    let job = match app.screen() {
        Screen::Login => handle_login_keys(app, key),
        Screen::Exchange => handle_exchange_keys(app, key),
        Screen::Confirmation => handle_confirmation_keys(app, key),
    };
    job.map(Action::Run)
}

/// Handles keys on the login screen (text input).
fn handle_login_keys(app: &mut App, key: KeyEvent) -> Option<Job> {
    if key.code == KeyCode::Esc {
        app.should_quit = true;
        return None;
    }
    if key.code == KeyCode::Enter {
        return app.submit_login();
    }
    // The field is disabled while signing in.
    if app.controller.is_loading() {
        return None;
    }

    let input = &mut app.login.email;
    match key.code {
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL) => {
            return None;
        }
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => return None,
    }
    app.login.error = None;
    None
}

/// Handles keys on the exchange (wallet) screen.
fn handle_exchange_keys(app: &mut App, key: KeyEvent) -> Option<Job> {
    // The scanner modal captures input until it is closed.
    if app.exchange.scanner.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('c')) {
            app.close_scanner();
        }
        return None;
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
            None
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_selected(),
        KeyCode::Char(c @ '1'..='3') => {
            app.toggle_task(c as u8 - b'0');
            None
        }
        KeyCode::Char('e') => app.request_exchange(),
        KeyCode::Char('o') => {
            app.logout();
            None
        }
        KeyCode::Char('q') => {
            app.should_quit = true;
            None
        }
        _ => None,
    }
}

/// Handles keys on the confirmation screen.
fn handle_confirmation_keys(app: &mut App, key: KeyEvent) -> Option<Job> {
    match key.code {
        KeyCode::Enter => app.controller.reset_to_exchange(),
        KeyCode::Char('o') => app.logout(),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
    None
}
