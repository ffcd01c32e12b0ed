use crate::{AuthError, Result as AuthErrorResult};

use std::net::IpAddr;
use std::num::NonZeroU32;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use governor::{
    Quota, RateLimiter,
    clock::{Clock as _, DefaultClock},
    state::keyed::DefaultKeyedStateStore,
};

type KeyedLimiter = RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>;

/// Per-client, per-identifier throttle on login attempts.
///
/// Buckets are keyed on the client address plus the identifier, so one
/// client hammering an account does not lock its owner out from elsewhere.
/// Identifiers are trimmed and lowercased before keying so `Alice` and
/// `alice ` share one bucket.
pub struct LoginRateLimiter {
    limiter: KeyedLimiter,
    clock: DefaultClock,
    max_attempts: u32,
    window_secs: u64,
}

impl LoginRateLimiter {
    pub fn new(max_attempts: u32, window: Duration) -> Self {
        let burst = NonZeroU32::new(max_attempts).unwrap_or(NonZeroU32::MIN);
        let quota = window
            .checked_div(burst.get())
            .filter(|period| !period.is_zero())
            .and_then(Quota::with_period)
            .map(|quota| quota.allow_burst(burst))
            .unwrap_or_else(|| Quota::per_second(burst));

        Self {
            limiter: RateLimiter::keyed(quota),
            clock: DefaultClock::default(),
            max_attempts: burst.get(),
            window_secs: window.as_secs(),
        }
    }

    #[track_caller]
    pub fn check(&self, client: Option<IpAddr>, identifier: &str) -> AuthErrorResult<()> {
        let key = bucket_key(client, identifier);
        self.limiter.check_key(&key).map_err(|not_until| {
            let wait = not_until.wait_time_from(self.clock.now());
            log::warn!(
                "Login rate limit hit ({} attempts per {}s)",
                self.max_attempts,
                self.window_secs
            );
            AuthError::RateLimited {
                retry_after_secs: wait.as_secs().max(1),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Drop buckets that have fully replenished
    pub fn prune(&self) {
        self.limiter.retain_recent();
    }

    pub fn tracked_keys(&self) -> usize {
        self.limiter.len()
    }
}

fn bucket_key(client: Option<IpAddr>, identifier: &str) -> String {
    let identifier = identifier.trim().to_lowercase();
    match client {
        Some(addr) => format!("{addr}|{identifier}"),
        None => identifier,
    }
}
