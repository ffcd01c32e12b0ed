use crate::{
    AuthError, Claims, Clock, JwtAlgorithm, Result as AuthErrorResult, SystemClock, TokenError,
};

use hr_core::User;

use std::collections::HashSet;
use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::Deserialize;

pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Only the `alg` field; read before the library sees the header
#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}

/// Issues and parses signed, time-bounded claim tokens.
///
/// The shared secret is fixed at construction. Time checks run against the
/// injected [`Clock`] rather than the library's own wall clock:
/// a token is not yet valid while `now + leeway < nbf` and expired once
/// `now >= exp + leeway`.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    algorithm: JwtAlgorithm,
    ttl_secs: i64,
    leeway_secs: i64,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    pub fn new(
        secret: &[u8],
        algorithm: JwtAlgorithm,
        ttl: Duration,
        leeway: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let mut validation = Validation::new(algorithm.algorithm());
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.required_spec_claims = ["exp", "iat", "nbf", "sub"]
            .into_iter()
            .map(String::from)
            .collect::<HashSet<_>>();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            algorithm,
            ttl_secs: i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX),
            leeway_secs: i64::try_from(leeway.as_secs()).unwrap_or(i64::MAX),
            clock,
        }
    }

    /// HS256, default TTL, no leeway, wall clock
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self::new(
            secret,
            JwtAlgorithm::HS256,
            DEFAULT_TOKEN_TTL,
            Duration::ZERO,
            Arc::new(SystemClock),
        )
    }

    /// Build fresh claims for `user`, valid from now until now + ttl
    pub fn claims_for(&self, user: &User) -> Claims {
        let now = self.now().timestamp();
        Claims::for_user(user, now, now.saturating_add(self.ttl_secs))
    }

    #[track_caller]
    pub fn issue(&self, claims: &Claims) -> AuthErrorResult<String> {
        let header = Header::new(self.algorithm.algorithm());
        encode(&header, claims, &self.encoding_key).map_err(|source| {
            AuthError::TokenIssuanceFailure {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    pub fn parse(&self, token: &str) -> Result<Claims, TokenError> {
        self.check_algorithm(token)?;

        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)?.claims;
        claims.validate()?;

        let now = self.clock.now().timestamp();
        if now.saturating_add(self.leeway_secs) < claims.nbf {
            return Err(TokenError::NotYetValid { nbf: claims.nbf });
        }
        if now >= claims.exp.saturating_add(self.leeway_secs) {
            return Err(TokenError::Expired { exp: claims.exp });
        }

        Ok(claims)
    }

    /// Any `alg` other than the configured one, including `none` and names
    /// the library cannot represent, is an unsupported algorithm
    fn check_algorithm(&self, token: &str) -> Result<(), TokenError> {
        let malformed = |detail: String| TokenError::Malformed { detail };

        let segment = token
            .split('.')
            .next()
            .filter(|segment| !segment.is_empty())
            .ok_or_else(|| malformed("missing header segment".to_string()))?;
        let bytes = URL_SAFE_NO_PAD
            .decode(segment)
            .map_err(|e| malformed(format!("header is not base64url: {e}")))?;
        let header: RawHeader = serde_json::from_slice(&bytes)
            .map_err(|e| malformed(format!("header is not valid JSON: {e}")))?;

        if header.alg != self.algorithm.as_str() {
            return Err(TokenError::UnsupportedAlgorithm);
        }
        Ok(())
    }

    /// Current time on the codec's clock
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn algorithm(&self) -> JwtAlgorithm {
        self.algorithm
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }
}
