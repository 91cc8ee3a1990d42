//! Application configuration loaded from environment variables.
//!
//! Every variable is optional:
//! - `PARTY_LOGIN_DELAY_MS`: simulated sign-in delay (default 1500)
//! - `PARTY_EXCHANGE_DELAY_MS`: simulated settlement delay (default 2000)
//! - `PARTY_TICK_MS`: UI animation tick (default 100)
//! - `PARTY_LOG_FILE`: append tracing output to this file
//! - `PARTY_LOG_LEVEL`: tracing level (default `info`)
//! - `PARTY_EVENT_FILE`: JSON file overriding the event branding

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use tracing::Level;

/// Default simulated authentication delay.
const DEFAULT_LOGIN_DELAY_MS: u64 = 1500;

/// Default simulated settlement delay.
const DEFAULT_EXCHANGE_DELAY_MS: u64 = 2000;

/// Default UI tick interval.
const DEFAULT_TICK_MS: u64 = 100;

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    pub ui: UiConfig,
    pub logging: LogConfig,
    pub event: EventConfig,
}

/// Delays of the simulated backend.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub login_delay: Duration,
    pub exchange_delay: Duration,
}

/// Terminal UI settings.
#[derive(Debug, Clone)]
pub struct UiConfig {
    pub tick_ms: u64,
}

/// Tracing output settings.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log file; logging is off when absent since the TUI owns stdout.
    pub file: Option<PathBuf>,
    pub level: Level,
}

/// Event branding shown on the screens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    /// Headline of the login screen.
    pub title: String,
    /// Line under the headline.
    pub tagline: String,
    /// Titles of the promotional cards shown after the exchange.
    pub ads: Vec<String>,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            title: "GLOBAL PIZZA PARTY 2026".to_string(),
            tagline: "Ingresa para canjear tus tokens".to_string(),
            ads: vec![
                "Conoce Soroswap".to_string(),
                "¿Qué es XLM?".to_string(),
                "¿Quieres participar en PizzaDAOApp?".to_string(),
            ],
        }
    }
}

impl EventConfig {
    /// Loads event branding from a JSON file. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            crate::PartyError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                login_delay: Duration::from_millis(DEFAULT_LOGIN_DELAY_MS),
                exchange_delay: Duration::from_millis(DEFAULT_EXCHANGE_DELAY_MS),
            },
            ui: UiConfig {
                tick_ms: DEFAULT_TICK_MS,
            },
            logging: LogConfig {
                file: None,
                level: Level::INFO,
            },
            event: EventConfig::default(),
        }
    }
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`PartyError::Config`](crate::PartyError::Config) if a delay is not
/// a whole number of milliseconds, the tick is zero, the log level is unknown,
/// or the event file cannot be read, and
/// [`PartyError::Json`](crate::PartyError::Json) if the event file is malformed.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let login_delay = millis_var("PARTY_LOGIN_DELAY_MS", DEFAULT_LOGIN_DELAY_MS)?;
    let exchange_delay = millis_var("PARTY_EXCHANGE_DELAY_MS", DEFAULT_EXCHANGE_DELAY_MS)?;
    let tick_ms = millis_var("PARTY_TICK_MS", DEFAULT_TICK_MS)?;
    if tick_ms == 0 {
        return Err(crate::PartyError::Config(
            "PARTY_TICK_MS must be greater than zero".to_string(),
        ));
    }

    let level = match non_empty_var("PARTY_LOG_LEVEL") {
        Some(raw) => Level::from_str(&raw).map_err(|_| {
            crate::PartyError::Config(format!("PARTY_LOG_LEVEL has unknown level {raw:?}"))
        })?,
        None => Level::INFO,
    };

    let event = match non_empty_var("PARTY_EVENT_FILE") {
        Some(path) => EventConfig::load(Path::new(&path))?,
        None => EventConfig::default(),
    };

    Ok(AppConfig {
        simulation: SimulationConfig {
            login_delay: Duration::from_millis(login_delay),
            exchange_delay: Duration::from_millis(exchange_delay),
        },
        ui: UiConfig { tick_ms },
        logging: LogConfig {
            file: non_empty_var("PARTY_LOG_FILE").map(PathBuf::from),
            level,
        },
        event,
    })
}

/// Reads a millisecond count, falling back to `default` when unset.
fn millis_var(name: &str, default: u64) -> crate::Result<u64> {
    match non_empty_var(name) {
        Some(raw) => raw.trim().parse().map_err(|_| {
            crate::PartyError::Config(format!("{name} must be a whole number of milliseconds, got {raw:?}"))
        }),
        None => Ok(default),
    }
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
