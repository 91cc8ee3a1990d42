//! Shared test utilities.

#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;

use pizza_party::session::{Completion, Job, Simulator};
use pizza_party::tui::App;

/// Sign-in delay used by the flow tests.
pub const LOGIN_DELAY: Duration = Duration::from_millis(1500);

/// Settlement delay used by the flow tests.
pub const EXCHANGE_DELAY: Duration = Duration::from_millis(2000);

/// Path to the test fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Simulator with the default delays.
pub fn simulator() -> Simulator {
    Simulator::new(LOGIN_DELAY, EXCHANGE_DELAY)
}

/// Runs `job` to completion on the (paused) tokio clock.
pub async fn finish(job: Job) -> Completion {
    simulator()
        .run(job)
        .await
        .expect("job should not be cancelled")
}

/// Types `email` into the login form.
pub fn type_email(app: &mut App, email: &str) {
    for c in email.chars() {
        app.login.email.insert(c);
    }
}
