use crate::{Error, Result};
use std::future::Future;
use std::time::{Duration, Instant};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Condition-wait policy: poll a predicate at a fixed interval until it
/// produces a value, with an optional overall time budget.
///
/// Every wait site in the workflow goes through this type, so the difference
/// between a bounded element wait and a deliberately unbounded page poll is
/// visible at the call site instead of buried in a hand-rolled loop.
#[derive(Clone, Copy, Debug)]
pub struct Wait {
    interval: Duration,
    timeout: Option<Duration>,
}

impl Wait {
    /// Wait that fails with `Error::ElementTimeout` once `timeout` elapses.
    pub fn bounded(timeout: Duration) -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: Some(timeout),
        }
    }

    /// Wait with no time budget. Relies on eventual external state change;
    /// callers opt into this explicitly.
    pub fn unbounded() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: None,
        }
    }

    /// Bounded if a timeout is given, unbounded otherwise.
    pub fn maybe_bounded(timeout: Option<Duration>) -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Poll `probe` until it yields `Some(value)`.
    ///
    /// `probe` returning `Ok(None)` means "not yet"; errors propagate
    /// immediately. `what` names the awaited condition in the timeout error.
    pub async fn until<T, F, Fut>(&self, what: &str, mut probe: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Option<T>>>,
    {
        let started = Instant::now();

        loop {
            if let Some(value) = probe().await? {
                return Ok(value);
            }

            if let Some(timeout) = self.timeout {
                if started.elapsed() >= timeout {
                    return Err(Error::ElementTimeout {
                        what: what.to_string(),
                        timeout,
                    });
                }
            }

            tokio::time::sleep(self.interval).await;
        }
    }
}
