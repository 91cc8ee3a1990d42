//! Root state machine of the exchange flow.
//!
//! ```text
//! Login ──login──▶ Exchange ──exchange──▶ Confirmation
//!                     ▲                        │
//!                     └────reset_to_exchange───┘
//! any screen ──logout──▶ Login
//! ```
//!
//! [`login`](Controller::login) and [`exchange`](Controller::exchange) only
//! raise the loading flag and hand back a [`Job`]; the state change happens
//! when the job's [`Completion`] is passed to
//! [`complete`](Controller::complete). [`logout`](Controller::logout) cancels
//! the pending job and advances the session epoch, so a completion issued
//! before it is discarded even if it was already queued.

use tracing::{debug, info, warn};

use crate::models::task::{POINTS_PER_TASK, TASK_COUNT};
use crate::models::{Screen, Token, User, initial_tokens};
use crate::session::{CancelHandle, Completion, Job, Outcome, Request};

/// Beny points credited by one exchange: every checklist task's worth.
pub const EXCHANGE_REWARD: u32 = POINTS_PER_TASK * TASK_COUNT as u32;

/// Owns all flow state and the transitions between screens.
#[derive(Debug)]
pub struct Controller {
    screen: Screen,
    user: Option<User>,
    tokens: [Token; 2],
    loading: bool,
    has_exchanged: bool,
    epoch: u64,
    cancel: CancelHandle,
}

impl Controller {
    /// Creates a controller on the login screen with nobody signed in.
    pub fn new() -> Self {
        Self {
            screen: Screen::Login,
            user: None,
            tokens: initial_tokens(),
            loading: false,
            has_exchanged: false,
            epoch: 0,
            cancel: CancelHandle::default(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn tokens(&self) -> &[Token; 2] {
        &self.tokens
    }

    /// Whether a simulated operation is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the exchange settled during this session.
    pub fn has_exchanged(&self) -> bool {
        self.has_exchanged
    }

    /// Current session epoch; advanced by every logout.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Starts signing in `email`.
    ///
    /// Returns `None` without changing state when already loading, when not
    /// on the login screen, or when `email` is blank.
    pub fn login(&mut self, email: &str) -> Option<Job> {
        let email = email.trim();
        if self.loading || self.screen != Screen::Login || email.is_empty() {
            debug!(screen = ?self.screen, loading = self.loading, "login ignored");
            return None;
        }

        self.loading = true;
        info!(email, epoch = self.epoch, "signing in");
        Some(self.job(Request::Authenticate {
            email: email.to_string(),
        }))
    }

    /// Starts the token exchange.
    ///
    /// The caller is responsible for the checklist gate. Returns `None`
    /// without changing state when already loading, when not on the
    /// exchange screen, when nobody is signed in, or when the exchange
    /// already settled.
    pub fn exchange(&mut self) -> Option<Job> {
        if self.loading
            || self.screen != Screen::Exchange
            || self.user.is_none()
            || self.has_exchanged
        {
            debug!(screen = ?self.screen, loading = self.loading, "exchange ignored");
            return None;
        }

        self.loading = true;
        info!(epoch = self.epoch, "submitting exchange");
        Some(self.job(Request::Settle {
            reward: EXCHANGE_REWARD,
        }))
    }

    /// Goes back from the confirmation to the wallet, keeping balances.
    pub fn reset_to_exchange(&mut self) {
        if self.screen != Screen::Confirmation {
            debug!(screen = ?self.screen, "reset ignored");
            return;
        }
        self.screen = Screen::Exchange;
        info!("back to wallet");
    }

    /// Signs out from any screen and restores the initial state.
    pub fn logout(&mut self) {
        self.cancel.cancel();
        self.cancel = CancelHandle::default();
        self.epoch += 1;

        self.user = None;
        self.tokens = initial_tokens();
        self.has_exchanged = false;
        self.loading = false;
        self.screen = Screen::Login;
        info!(epoch = self.epoch, "signed out");
    }

    /// Applies the result of a job.
    ///
    /// Returns false if the completion belongs to an earlier session and
    /// was dropped.
    pub fn complete(&mut self, completion: Completion) -> bool {
        if completion.epoch != self.epoch {
            debug!(
                stale = completion.epoch,
                current = self.epoch,
                "dropping stale completion"
            );
            return false;
        }

        match completion.outcome {
            Outcome::Authenticated(user) => {
                info!(email = %user.email, "signed in");
                self.user = Some(user);
                self.screen = Screen::Exchange;
            }
            Outcome::Settled(settlement) => {
                for token in &mut self.tokens {
                    token.balance = token.balance.saturating_add(settlement.units_per_token);
                }
                if let Some(user) = self.user.as_mut() {
                    user.award(settlement.reward);
                }
                self.has_exchanged = true;
                self.screen = Screen::Confirmation;
                info!(reward = settlement.reward, "exchange settled");
            }
        }
        self.loading = false;
        true
    }

    /// Sends the exchange screen back to login when nobody is signed in.
    ///
    /// Returns true if it redirected. No transition leaves the exchange
    /// screen without a user, so this is not expected to fire.
    pub fn redirect_if_signed_out(&mut self) -> bool {
        if self.screen == Screen::Exchange && self.user.is_none() {
            warn!("exchange screen without a user, redirecting to login");
            self.screen = Screen::Login;
            return true;
        }
        false
    }

    fn job(&self, request: Request) -> Job {
        Job {
            epoch: self.epoch,
            request,
            token: self.cancel.token(),
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Settlement;

    fn authenticated(controller: &Controller, email: &str) -> Completion {
        Completion {
            epoch: controller.epoch(),
            outcome: Outcome::Authenticated(User::guest(email)),
        }
    }

    fn settled(controller: &Controller) -> Completion {
        Completion {
            epoch: controller.epoch(),
            outcome: Outcome::Settled(Settlement {
                units_per_token: 1,
                reward: EXCHANGE_REWARD,
            }),
        }
    }

    fn signed_in() -> Controller {
        let mut controller = Controller::new();
        controller.login("a@b.com").unwrap();
        let done = authenticated(&controller, "a@b.com");
        assert!(controller.complete(done));
        controller
    }

    fn balances(controller: &Controller) -> Vec<u32> {
        controller.tokens().iter().map(|t| t.balance).collect()
    }

    #[test]
    fn exchange_reward_is_the_checklist_total() {
        let checklist = crate::models::Checklist::new();
        assert_eq!(checklist.tasks().len(), TASK_COUNT);
        assert_eq!(EXCHANGE_REWARD, 60);
    }

    #[test]
    fn starts_signed_out_on_login() {
        let controller = Controller::new();
        assert_eq!(controller.screen(), Screen::Login);
        assert!(controller.user().is_none());
        assert!(!controller.is_loading());
        assert!(!controller.has_exchanged());
        assert_eq!(balances(&controller), vec![0, 0]);
    }

    #[test]
    fn login_sets_loading_and_issues_authenticate_job() {
        let mut controller = Controller::new();
        let job = controller.login("  a@b.com ").unwrap();

        assert!(controller.is_loading());
        assert_eq!(controller.screen(), Screen::Login);
        assert_eq!(
            job.request,
            Request::Authenticate {
                email: "a@b.com".to_string()
            }
        );
        assert_eq!(job.epoch, 0);
    }

    #[test]
    fn login_ignored_for_blank_email_or_while_loading() {
        let mut controller = Controller::new();
        assert!(controller.login("   ").is_none());
        assert!(!controller.is_loading());

        controller.login("a@b.com").unwrap();
        assert!(controller.login("c@d.com").is_none());
    }

    #[test]
    fn login_completion_enters_exchange() {
        let controller = signed_in();
        assert_eq!(controller.screen(), Screen::Exchange);
        assert!(!controller.is_loading());

        let user = controller.user().unwrap();
        assert_eq!(user.name, "Vegeta");
        assert_eq!(user.beny_points, 0);
        assert_eq!(balances(&controller), vec![0, 0]);
    }

    #[test]
    fn exchange_ignored_before_login() {
        let mut controller = Controller::new();
        assert!(controller.exchange().is_none());
        assert!(!controller.is_loading());
    }

    #[test]
    fn exchange_credits_one_unit_per_token_and_sixty_points() {
        let mut controller = signed_in();
        let job = controller.exchange().unwrap();
        assert_eq!(job.request, Request::Settle { reward: 60 });
        assert!(controller.is_loading());

        let done = settled(&controller);
        assert!(controller.complete(done));

        assert_eq!(balances(&controller), vec![1, 1]);
        assert_eq!(controller.user().unwrap().beny_points, 60);
        assert!(controller.has_exchanged());
        assert_eq!(controller.screen(), Screen::Confirmation);
        assert!(!controller.is_loading());
    }

    #[test]
    fn exchange_only_once_per_session() {
        let mut controller = signed_in();
        controller.exchange().unwrap();
        let done = settled(&controller);
        controller.complete(done);
        controller.reset_to_exchange();

        assert!(controller.exchange().is_none());
    }

    #[test]
    fn reset_keeps_balances_and_points() {
        let mut controller = signed_in();
        controller.exchange().unwrap();
        let done = settled(&controller);
        controller.complete(done);

        controller.reset_to_exchange();

        assert_eq!(controller.screen(), Screen::Exchange);
        assert_eq!(balances(&controller), vec![1, 1]);
        assert_eq!(controller.user().unwrap().beny_points, 60);
        assert!(controller.has_exchanged());
    }

    #[test]
    fn reset_ignored_outside_confirmation() {
        let mut controller = Controller::new();
        controller.reset_to_exchange();
        assert_eq!(controller.screen(), Screen::Login);
    }

    #[test]
    fn logout_restores_initial_state_from_any_screen() {
        let mut controller = signed_in();
        controller.exchange().unwrap();
        let done = settled(&controller);
        controller.complete(done);

        controller.logout();

        assert_eq!(controller.screen(), Screen::Login);
        assert!(controller.user().is_none());
        assert!(!controller.has_exchanged());
        assert_eq!(controller.tokens(), &initial_tokens());
        assert_eq!(controller.epoch(), 1);
    }

    #[test]
    fn logout_cancels_the_pending_job() {
        let mut controller = signed_in();
        let job = controller.exchange().unwrap();

        controller.logout();

        assert!(job.token.is_cancelled());
        assert!(!controller.is_loading());
    }

    #[test]
    fn stale_completion_after_logout_is_dropped() {
        let mut controller = signed_in();
        controller.exchange().unwrap();
        let late = settled(&controller);

        controller.logout();

        assert!(!controller.complete(late));
        assert_eq!(controller.screen(), Screen::Login);
        assert!(controller.user().is_none());
        assert_eq!(balances(&controller), vec![0, 0]);
    }

    #[test]
    fn new_session_jobs_are_not_cancelled() {
        let mut controller = signed_in();
        controller.logout();

        let job = controller.login("a@b.com").unwrap();

        assert_eq!(job.epoch, 1);
        assert!(!job.token.is_cancelled());
    }

    #[test]
    fn redirects_exchange_screen_without_user() {
        let mut controller = Controller::new();
        controller.screen = Screen::Exchange;

        assert!(controller.redirect_if_signed_out());
        assert_eq!(controller.screen(), Screen::Login);
    }

    #[test]
    fn no_redirect_when_signed_in() {
        let mut controller = signed_in();
        assert!(!controller.redirect_if_signed_out());
        assert_eq!(controller.screen(), Screen::Exchange);
    }
}
