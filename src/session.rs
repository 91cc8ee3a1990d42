//! Simulated backend for the exchange flow.
//!
//! Authentication and settlement are stand-ins that resolve after a fixed
//! delay. Each one is issued by the [`Controller`](crate::Controller) as a
//! [`Job`] tagged with the session epoch and a [`CancellationToken`]; the
//! event loop runs it with [`Simulator::run`] and feeds the resulting
//! [`Completion`] back to the controller.

use std::time::Duration;

use tokio::sync::watch;
use tracing::debug;

use crate::config::SimulationConfig;
use crate::models::User;

/// Owning side of a cancellation flag.
///
/// Dropping the handle also cancels every token it issued, so pending jobs
/// never outlive the controller that started them.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Issues a token observing this handle.
    pub fn token(&self) -> CancellationToken {
        CancellationToken {
            rx: self.tx.subscribe(),
        }
    }

    /// Cancels every token issued by this handle.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

impl Default for CancelHandle {
    /// Creates a handle in the not-cancelled state.
    fn default() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }
}

/// Observing side of a cancellation flag, carried by each [`Job`].
#[derive(Debug, Clone)]
pub struct CancellationToken {
    rx: watch::Receiver<bool>,
}

impl CancellationToken {
    /// Returns true once the handle cancelled or was dropped.
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow() || self.rx.has_changed().is_err()
    }

    /// Resolves once the handle cancels or is dropped.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                return;
            }
        }
    }
}

/// What a job asks the simulated backend to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Magic-link style sign-in for `email`.
    Authenticate { email: String },
    /// Ledger settlement crediting one unit per token and `reward` points.
    Settle { reward: u32 },
}

impl Request {
    pub fn label(&self) -> &'static str {
        match self {
            Request::Authenticate { .. } => "authenticate",
            Request::Settle { .. } => "settle",
        }
    }
}

/// A pending simulated operation.
#[derive(Debug, Clone)]
pub struct Job {
    /// Session epoch the job was issued under.
    pub epoch: u64,
    pub request: Request,
    pub token: CancellationToken,
}

/// Result of a settled exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Units credited to every token.
    pub units_per_token: u32,
    /// Beny points credited to the guest.
    pub reward: u32,
}

/// What a finished job produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Authenticated(User),
    Settled(Settlement),
}

/// A finished job, tagged with the epoch it was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub epoch: u64,
    pub outcome: Outcome,
}

/// Delays used by the simulated backend.
#[derive(Debug, Clone)]
pub struct Simulator {
    login_delay: Duration,
    exchange_delay: Duration,
}

impl Simulator {
    pub fn new(login_delay: Duration, exchange_delay: Duration) -> Self {
        Self {
            login_delay,
            exchange_delay,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.login_delay, config.exchange_delay)
    }

    /// Returns how long `request` takes to resolve.
    pub fn delay_for(&self, request: &Request) -> Duration {
        match request {
            Request::Authenticate { .. } => self.login_delay,
            Request::Settle { .. } => self.exchange_delay,
        }
    }

    /// Waits out the job's delay and produces its completion.
    ///
    /// Returns `None` if the job's token is cancelled first.
    pub async fn run(&self, job: Job) -> Option<Completion> {
        let delay = self.delay_for(&job.request);
        let label = job.request.label();

        tokio::select! {
            biased;
            _ = job.token.cancelled() => {
                debug!(epoch = job.epoch, job = label, "job cancelled");
                None
            }
            _ = tokio::time::sleep(delay) => {
                debug!(epoch = job.epoch, job = label, "job resolved");
                Some(Completion {
                    epoch: job.epoch,
                    outcome: resolve(job.request),
                })
            }
        }
    }
}

fn resolve(request: Request) -> Outcome {
    match request {
        Request::Authenticate { email } => Outcome::Authenticated(User::guest(email)),
        Request::Settle { reward } => Outcome::Settled(Settlement {
            units_per_token: 1,
            reward,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_pending, assert_ready_eq, task};

    fn simulator() -> Simulator {
        Simulator::new(Duration::from_millis(1500), Duration::from_millis(2000))
    }

    fn job(handle: &CancelHandle, request: Request) -> Job {
        Job {
            epoch: 0,
            request,
            token: handle.token(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn authenticate_resolves_to_guest_after_delay() {
        let handle = CancelHandle::default();
        let request = Request::Authenticate {
            email: "a@b.com".to_string(),
        };

        let completion = simulator().run(job(&handle, request)).await.unwrap();

        assert_eq!(completion.epoch, 0);
        assert_eq!(
            completion.outcome,
            Outcome::Authenticated(User::guest("a@b.com"))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn settle_is_pending_until_delay_elapses() {
        let handle = CancelHandle::default();
        let sim = simulator();
        let mut fut = task::spawn(sim.run(job(&handle, Request::Settle { reward: 60 })));

        assert_pending!(fut.poll());
        tokio::time::advance(Duration::from_millis(1999)).await;
        assert_pending!(fut.poll());
        tokio::time::advance(Duration::from_millis(1)).await;
        assert_ready_eq!(
            fut.poll(),
            Some(Completion {
                epoch: 0,
                outcome: Outcome::Settled(Settlement {
                    units_per_token: 1,
                    reward: 60,
                }),
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_job_yields_nothing() {
        let handle = CancelHandle::default();
        let sim = simulator();
        let pending = job(&handle, Request::Settle { reward: 60 });

        handle.cancel();

        assert!(pending.token.is_cancelled());
        assert_eq!(sim.run(pending).await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_cancels_its_tokens() {
        let handle = CancelHandle::default();
        let token = handle.token();
        assert!(!token.is_cancelled());

        drop(handle);

        assert!(token.is_cancelled());
        token.cancelled().await;
    }

    #[test]
    fn delays_follow_the_request_kind() {
        let sim = simulator();
        let login = Request::Authenticate {
            email: String::new(),
        };
        assert_eq!(sim.delay_for(&login), Duration::from_millis(1500));
        assert_eq!(
            sim.delay_for(&Request::Settle { reward: 0 }),
            Duration::from_millis(2000)
        );
    }
}
