use crate::{AuthError, IdentityContext, Result as AuthErrorResult, TokenCodec};

pub const MISSING_HEADER: &str = "Authorization header is required";
pub const MALFORMED_HEADER: &str = "Authorization header format must be Bearer {token}";

const BEARER_SCHEME: &str = "bearer";

/// Resolve an `Authorization` header value to the caller's identity.
///
/// The value must be exactly two parts separated by a single space, a
/// case-insensitive `Bearer` scheme followed by a non-empty token. No store access
/// happens here: the token's claims are the identity.
#[track_caller]
pub fn authenticate(
    header: Option<&str>,
    codec: &TokenCodec,
) -> AuthErrorResult<IdentityContext> {
    let Some(header) = header else {
        log::warn!("Rejected request: missing Authorization header");
        return Err(AuthError::unauthenticated(MISSING_HEADER));
    };

    let Some(token) = bearer_token(header) else {
        log::warn!("Rejected request: malformed Authorization header");
        return Err(AuthError::unauthenticated(MALFORMED_HEADER));
    };

    let claims = codec.parse(token).map_err(|e| {
        log::warn!("Rejected token: {}", e);
        AuthError::from(e)
    })?;

    IdentityContext::try_from(claims).map_err(|e| {
        log::warn!("Rejected token: {}", e);
        AuthError::from(e)
    })
}

fn bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None)
            if scheme.eq_ignore_ascii_case(BEARER_SCHEME) && !token.is_empty() =>
        {
            Some(token)
        }
        _ => None,
    }
}
