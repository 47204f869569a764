//! HTTP client settings and retry logic.
//!
//! This module holds the knobs that shape how requests reach SOLUS IO and the
//! bounded retry loop used by the executor.

use std::future::Future;
use std::time::Duration;
use tracing::warn;

use crate::error::{Error, Result};

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT: u64 = 35;

/// Default connect timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT: u64 = 10;

/// Default maximum number of retries after the first attempt
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Default delay between retries in milliseconds
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;

/// Upper bound on a single backoff delay in milliseconds
pub const DEFAULT_RETRY_MAX_DELAY_MS: u64 = 10_000;

/// Hard ceiling on attempts for a single call, whatever the retry policy says.
pub const MAX_ATTEMPTS: u32 = 10;

/// Default user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("solus-rust/", env!("CARGO_PKG_VERSION"));

/// Retry policy for transient failures.
///
/// With the default multiplier of 1 the delay is fixed; a larger multiplier
/// turns it into exponential backoff capped at `max_delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of retries after the first attempt
    pub max_retries: u32,

    /// Delay before the first retry
    pub initial_delay: Duration,

    /// Maximum delay between retries
    pub max_delay: Duration,

    /// Backoff multiplier (1 keeps the delay fixed)
    pub backoff_multiplier: u32,
}

impl RetryPolicy {
    /// Five retries one second apart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            initial_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
            max_delay: Duration::from_millis(DEFAULT_RETRY_MAX_DELAY_MS),
            backoff_multiplier: 1,
        }
    }

    /// A single attempt per call.
    #[must_use]
    pub const fn no_retry() -> Self {
        Self {
            max_retries: 0,
            initial_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            backoff_multiplier: 1,
        }
    }

    /// Retries allowed after the first attempt.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Delay before the first retry.
    #[must_use]
    pub const fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Cap applied to the backoff delay.
    #[must_use]
    pub const fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Factor applied to the delay after each retry.
    #[must_use]
    pub const fn with_backoff_multiplier(mut self, multiplier: u32) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Calculate the delay before retry number `attempt` (1-based).
    ///
    /// delay = min(initial_delay * multiplier^(attempt - 1), max_delay)
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }

        let factor = self.backoff_multiplier.saturating_pow(attempt - 1);
        let delay = self.initial_delay.saturating_mul(factor);

        std::cmp::min(delay, self.max_delay.max(self.initial_delay))
    }

    /// Returns true while attempt number `attempt` (1-based) may be followed by another.
    #[must_use]
    pub const fn allows_retry_after(&self, attempt: u32) -> bool {
        attempt <= self.max_retries
    }

    /// Returns false for a single-attempt policy.
    #[must_use]
    pub const fn has_retries(&self) -> bool {
        self.max_retries > 0
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// Transport settings shared by every call of an [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Timeout of a single HTTP attempt
    pub timeout: Duration,

    /// Connect timeout of a single HTTP attempt
    pub connect_timeout: Duration,

    /// Deadline for a whole call, retries included
    pub deadline: Option<Duration>,

    /// Retry policy
    pub retry_policy: RetryPolicy,

    /// Whether to verify TLS certificates
    pub tls_verify: bool,

    /// Value of the `User-Agent` header
    pub user_agent: String,

    /// Extra static headers sent with every request
    pub headers: Vec<(String, String)>,
}

impl ClientConfig {
    /// Defaults: 35 s per attempt, TLS verified, no deadline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT),
            deadline: None,
            retry_policy: RetryPolicy::new(),
            tls_verify: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: Vec::new(),
        }
    }

    /// Set request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set connect timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Bound every call, retries included.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set retry policy.
    #[must_use]
    pub const fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Disable retries.
    #[must_use]
    pub const fn without_retries(mut self) -> Self {
        self.retry_policy = RetryPolicy::no_retry();
        self
    }

    /// Skip TLS certificate verification.
    #[must_use]
    pub const fn allow_insecure(mut self) -> Self {
        self.tls_verify = false;
        self
    }

    /// Set the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a static header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of one attempt inside [`retry`].
#[derive(Debug)]
pub enum Attempt<T> {
    /// The attempt produced a final value.
    Done(T),
    /// The attempt failed and another one should follow.
    Retry(Error),
    /// The attempt failed and no other should follow.
    Fail(Error),
}

/// Run `op` until it stops asking for retries.
///
/// `op` receives the 1-based attempt number. Once [`MAX_ATTEMPTS`] attempts
/// have asked for a retry the loop gives up with [`Error::RetryLimitExceeded`]
/// instead of the last error.
pub async fn retry<T, F, Fut>(mut op: F) -> Result<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Attempt<T>>,
{
    let mut attempt = 1;
    loop {
        match op(attempt).await {
            Attempt::Done(value) => return Ok(value),
            Attempt::Fail(err) => return Err(err),
            Attempt::Retry(err) => {
                if attempt >= MAX_ATTEMPTS {
                    warn!(attempt, error = %err, "giving up after hard retry ceiling");
                    return Err(Error::RetryLimitExceeded);
                }
                warn!(attempt, error = %err, "retrying request");
                attempt += 1;
            }
        }
    }
}
