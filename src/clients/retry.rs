//! Retry policy for transient transport failures.
//!
//! Only failures that happen before any response arrives are candidates for
//! a retry. A status code returned by the server is authoritative and is
//! never retried. By default the policy retries read timeouts only.
//!
//! Retrying a `POST` after a read timeout can create the resource twice if
//! the first request was processed server-side before the timeout fired.
//! Callers who cannot tolerate this should install [`RetryPolicy::none`].

use std::time::Duration;

use rand::Rng;

/// Predicate deciding whether a transport error is eligible for a retry.
pub type RetryPredicate = fn(&reqwest::Error) -> bool;

/// Returns `true` for a timeout that fired after the connection was made.
#[must_use]
pub fn is_read_timeout(error: &reqwest::Error) -> bool {
    error.is_timeout() && !error.is_connect()
}

/// Default ceiling of the jitter-free delay between two attempts.
pub const DEFAULT_MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Exponential backoff with random jitter, bounded by an attempt ceiling.
///
/// The delay before retry `n` (zero based) is
/// `initial_backoff * multiplier^n`, capped at `max_backoff`, plus a jitter
/// drawn uniformly from `[0, max_jitter)`.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use tactill::clients::RetryPolicy;
///
/// let policy = RetryPolicy::new(4, Duration::from_millis(100))
///     .with_multiplier(3.0)
///     .with_max_jitter(Duration::ZERO);
///
/// assert_eq!(policy.backoff(0), Duration::from_millis(100));
/// assert_eq!(policy.backoff(1), Duration::from_millis(300));
/// assert_eq!(policy.backoff(2), Duration::from_millis(900));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    max_attempts: u32,
    initial_backoff: Duration,
    max_backoff: Duration,
    multiplier: f64,
    max_jitter: Duration,
    retry_on: RetryPredicate,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(500))
    }
}

impl RetryPolicy {
    /// Creates a policy doubling `initial_backoff` after every retry up to
    /// [`DEFAULT_MAX_BACKOFF`], with up to 250 ms of jitter, retrying read
    /// timeouts only.
    ///
    /// `max_attempts` counts the first try, so `1` disables retries.
    #[must_use]
    pub fn new(max_attempts: u32, initial_backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_backoff,
            max_backoff: DEFAULT_MAX_BACKOFF,
            multiplier: 2.0,
            max_jitter: Duration::from_millis(250),
            retry_on: is_read_timeout,
        }
    }

    /// A policy that never retries.
    #[must_use]
    pub fn none() -> Self {
        Self::new(1, Duration::ZERO).with_max_jitter(Duration::ZERO)
    }

    /// Sets the growth factor applied to the backoff after every retry.
    ///
    /// Values below `1.0` are clamped so the schedule never shrinks.
    #[must_use]
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier.max(1.0);
        self
    }

    /// Sets the ceiling of the delay before jitter is added.
    #[must_use]
    pub const fn with_max_backoff(mut self, max_backoff: Duration) -> Self {
        self.max_backoff = max_backoff;
        self
    }

    /// Sets the upper bound of the random jitter added to each delay.
    #[must_use]
    pub const fn with_max_jitter(mut self, max_jitter: Duration) -> Self {
        self.max_jitter = max_jitter;
        self
    }

    /// Replaces the predicate selecting retryable errors.
    #[must_use]
    pub const fn retry_on(mut self, predicate: RetryPredicate) -> Self {
        self.retry_on = predicate;
        self
    }

    /// Total number of attempts, including the first one.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Ceiling of the delay before jitter is added.
    #[must_use]
    pub const fn max_backoff(&self) -> Duration {
        self.max_backoff
    }

    /// Upper bound of the jitter added to each delay.
    #[must_use]
    pub const fn max_jitter(&self) -> Duration {
        self.max_jitter
    }

    /// Returns whether `error` should be retried after attempt number
    /// `attempt` (one based).
    #[must_use]
    pub fn should_retry(&self, error: &reqwest::Error, attempt: u32) -> bool {
        attempt < self.max_attempts && (self.retry_on)(error)
    }

    /// The jitter-free delay before retry `retry` (zero based), never more
    /// than `max_backoff`.
    #[must_use]
    pub fn base_delay(&self, retry: u32) -> Duration {
        if self.initial_backoff.is_zero() {
            return Duration::ZERO;
        }
        let exponent = i32::try_from(retry).unwrap_or(i32::MAX);
        let secs = self.initial_backoff.as_secs_f64() * self.multiplier.powi(exponent);
        // Overflow and infinity saturate at the ceiling
        Duration::try_from_secs_f64(secs)
            .map_or(self.max_backoff, |delay| delay.min(self.max_backoff))
    }

    /// The delay before retry `retry` (zero based), jitter included.
    #[must_use]
    pub fn backoff(&self, retry: u32) -> Duration {
        let base = self.base_delay(retry);
        if self.max_jitter.is_zero() {
            return base;
        }
        let jitter = rand::thread_rng().gen_range(Duration::ZERO..self.max_jitter);
        base.saturating_add(jitter)
    }
}
