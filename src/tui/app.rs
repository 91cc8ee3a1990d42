//! Application state for the TUI.

use std::time::{Duration, Instant};

use crate::config::EventConfig;
use crate::controller::Controller;
use crate::models::{Checklist, Screen, TokenKind};
use crate::session::Job;

use super::input::{TextInput, validate_email};

/// How long a notice stays in the status bar.
const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Central application state container.
pub struct App {
    /// Flow state machine (screen, user, tokens, loading).
    pub controller: Controller,
    /// Event branding.
    pub event: EventConfig,

    // -- Screen-local State --
    /// Login form; rebuilt whenever the login screen is entered.
    pub login: LoginForm,
    /// Wallet screen; rebuilt whenever the exchange screen is entered.
    pub exchange: ExchangeView,

    // -- UI State --
    /// Transient message shown in the status bar.
    pub notice: Option<Notice>,
    /// Tick counter driving the spinner and scan-line animations.
    pub ticks: u64,
    /// Screen seen after the previous update.
    last_screen: Screen,

    // -- Internal --
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates a new App instance on the login screen.
    pub fn new(event: EventConfig) -> Self {
        Self {
            controller: Controller::new(),
            event,
            login: LoginForm::default(),
            exchange: ExchangeView::default(),
            notice: None,
            ticks: 0,
            last_screen: Screen::Login,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.controller.screen()
    }

    /// Validates the email field and starts signing in.
    pub fn submit_login(&mut self) -> Option<Job> {
        if self.controller.is_loading() {
            return None;
        }
        if let Err(message) = validate_email(self.login.email.as_str()) {
            self.login.error = Some(message.to_string());
            return None;
        }
        self.login.error = None;
        self.controller.login(self.login.email.as_str())
    }

    /// Flips checklist task `id`.
    pub fn toggle_task(&mut self, id: u8) {
        if self.controller.has_exchanged() {
            return;
        }
        self.exchange.checklist.toggle(id);
    }

    /// Whether the exchange button is enabled.
    pub fn can_exchange(&self) -> bool {
        self.exchange.checklist.all_completed()
            && !self.controller.is_loading()
            && !self.controller.has_exchanged()
    }

    /// Starts the exchange if the checklist allows it.
    pub fn request_exchange(&mut self) -> Option<Job> {
        if self.controller.has_exchanged() || self.controller.is_loading() {
            return None;
        }
        if !self.exchange.checklist.all_completed() {
            let checklist = &self.exchange.checklist;
            let remaining = checklist.tasks().len() - checklist.completed_count();
            self.show_notice(format!("Completa {remaining} tarea(s) para canjear"));
            return None;
        }
        self.controller.exchange()
    }

    /// Whether the token at `index` can be redeemed right now.
    pub fn is_redeemable(&self, index: usize) -> bool {
        self.controller.has_exchanged()
            && self
                .controller
                .tokens()
                .get(index)
                .is_some_and(|t| t.is_funded())
    }

    /// Opens the scanner for the token at `index` when it is redeemable.
    pub fn open_scanner(&mut self, index: usize) {
        if !self.is_redeemable(index) {
            self.show_notice("Aún no tienes este token para canjear");
            return;
        }
        self.exchange.scanner = self.controller.tokens().get(index).map(|t| t.kind);
    }

    /// Closes the scanner modal.
    pub fn close_scanner(&mut self) {
        self.exchange.scanner = None;
    }

    /// Returns the selectable items of the exchange screen, top to bottom.
    pub fn exchange_items(&self) -> Vec<ExchangeItem> {
        let mut items = Vec::with_capacity(7);
        if !self.controller.has_exchanged() {
            items.extend(self.exchange.checklist.tasks().iter().map(|t| ExchangeItem::Task(t.id)));
            items.push(ExchangeItem::ExchangeButton);
        }
        items.extend((0..self.controller.tokens().len()).map(ExchangeItem::Token));
        items.push(ExchangeItem::Logout);
        items
    }

    /// Returns the currently highlighted exchange item.
    pub fn selected_item(&self) -> Option<ExchangeItem> {
        let items = self.exchange_items();
        items
            .get(self.exchange.selected.min(items.len().saturating_sub(1)))
            .copied()
    }

    /// Moves the highlight down.
    pub fn select_next(&mut self) {
        let len = self.exchange_items().len();
        if self.exchange.selected + 1 < len {
            self.exchange.selected += 1;
        }
    }

    /// Moves the highlight up.
    pub fn select_previous(&mut self) {
        self.exchange.selected = self.exchange.selected.saturating_sub(1);
    }

    /// Activates the highlighted exchange item.
    pub fn activate_selected(&mut self) -> Option<Job> {
        match self.selected_item()? {
            ExchangeItem::Task(id) => {
                self.toggle_task(id);
                None
            }
            ExchangeItem::ExchangeButton => self.request_exchange(),
            ExchangeItem::Token(index) => {
                self.open_scanner(index);
                None
            }
            ExchangeItem::Logout => {
                self.logout();
                None
            }
        }
    }

    /// Signs out and cancels any pending job.
    pub fn logout(&mut self) {
        self.controller.logout();
        self.show_notice("Sesión cerrada");
    }

    /// Rebuilds screen-local state when the controller changed screens.
    ///
    /// Runs the signed-out redirect first, then resets the login form or
    /// the wallet view for the screen being entered.
    pub fn sync_screen(&mut self) {
        self.controller.redirect_if_signed_out();
        let screen = self.controller.screen();
        if screen == self.last_screen {
            return;
        }
        match screen {
            Screen::Login => self.login = LoginForm::default(),
            Screen::Exchange => self.exchange = ExchangeView::default(),
            Screen::Confirmation => {}
        }
        self.last_screen = screen;
    }

    /// Sets a notice to display.
    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice {
            message: message.into(),
            timestamp: Instant::now(),
        });
    }

    /// Clears notices older than the display window.
    pub fn clear_stale_notices(&mut self) {
        if let Some(ref notice) = self.notice
            && notice.timestamp.elapsed() > NOTICE_TTL
        {
            self.notice = None;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(EventConfig::default())
    }
}

/// Login screen form state.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    /// Email being typed.
    pub email: TextInput,
    /// Validation message from the last submit.
    pub error: Option<String>,
}

/// Wallet screen state.
#[derive(Clone, Debug, Default)]
pub struct ExchangeView {
    /// Tasks gating the exchange.
    pub checklist: Checklist,
    /// Index into [`App::exchange_items`].
    pub selected: usize,
    /// Token shown in the scanner modal, if open.
    pub scanner: Option<TokenKind>,
}

/// Selectable rows of the exchange screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExchangeItem {
    /// Checklist task by id.
    Task(u8),
    /// "CANJEAR TOKENS".
    ExchangeButton,
    /// Token row by index.
    Token(usize),
    /// "Cerrar Sesión".
    Logout,
}

/// Status bar message with timestamp for auto-clear.
#[derive(Clone, Debug)]
pub struct Notice {
    pub message: String,
    pub timestamp: Instant,
}
