use crate::{AuthError, LoginRateLimiter};

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

#[test]
fn given_rate_limiter_when_under_limit_then_allows_attempts() {
    let limiter = LoginRateLimiter::new(10, Duration::from_secs(60));

    for _ in 0..10 {
        assert!(limiter.check(None, "alice").is_ok());
    }
}

#[test]
fn given_rate_limiter_when_limit_exhausted_then_rejects_with_retry_hint() {
    // Given
    let limiter = LoginRateLimiter::new(3, Duration::from_secs(60));
    for _ in 0..3 {
        let _ = limiter.check(None, "alice");
    }

    // When
    let result = limiter.check(None, "alice");

    // Then
    match result {
        Err(AuthError::RateLimited {
            retry_after_secs, ..
        }) => assert!(retry_after_secs >= 1),
        other => panic!("expected RateLimited, got {other:?}"),
    }
}

#[test]
fn given_rate_limiter_when_identifiers_differ_then_buckets_are_independent() {
    let limiter = LoginRateLimiter::new(1, Duration::from_secs(60));

    assert!(limiter.check(None, "alice").is_ok());
    assert!(limiter.check(None, "bob").is_ok());
    assert!(limiter.check(None, "alice").is_err());
    assert_eq!(limiter.tracked_keys(), 2);
}

#[test]
fn given_identifier_case_and_whitespace_variants_then_share_a_bucket() {
    let limiter = LoginRateLimiter::new(1, Duration::from_secs(60));

    assert!(limiter.check(None, "Alice@X.com").is_ok());
    assert!(limiter.check(None, "  alice@x.com ").is_err());
}

#[test]
fn given_zero_attempts_configured_when_checked_then_allows_one() {
    let limiter = LoginRateLimiter::new(0, Duration::from_secs(60));

    assert!(limiter.check(None, "alice").is_ok());
    assert!(limiter.check(None, "alice").is_err());
}

#[test]
fn given_exhausted_bucket_for_one_client_when_other_client_logs_in_then_allowed() {
    // Given
    let attacker = Some(IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7)));
    let owner = Some(IpAddr::V4(Ipv4Addr::new(198, 51, 100, 20)));
    let limiter = LoginRateLimiter::new(2, Duration::from_secs(60));
    for _ in 0..2 {
        let _ = limiter.check(attacker, "alice");
    }

    // When / Then
    assert!(limiter.check(attacker, "alice").is_err());
    assert!(limiter.check(owner, "alice").is_ok());
    assert_eq!(limiter.tracked_keys(), 2);
}
