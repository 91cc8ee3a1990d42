//! Signed-in guest.

/// Placeholder display name given to every guest.
pub const GUEST_NAME: &str = "Vegeta";

/// The guest created by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Email entered on the login form.
    pub email: String,
    /// Display name shown in the wallet header.
    pub name: String,
    /// Loyalty score awarded by exchanges.
    pub beny_points: u32,
}

impl User {
    /// Creates a guest with the placeholder name and no points.
    pub fn guest(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: GUEST_NAME.to_string(),
            beny_points: 0,
        }
    }

    /// Adds `points` to the Beny total.
    pub fn award(&mut self, points: u32) {
        self.beny_points = self.beny_points.saturating_add(points);
    }
}
