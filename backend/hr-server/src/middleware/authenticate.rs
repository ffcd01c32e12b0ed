use crate::{ApiError, AppState};

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

/// Authentication gate for the protected route groups.
///
/// Validates the bearer token and attaches the resulting
/// [`hr_auth::IdentityContext`] to the request extensions.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // A non-ASCII header value is treated like a malformed one
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or_default());

    let identity = hr_auth::authenticate(header, state.codec())?;

    log::debug!(
        "Authenticated {} ({}) for {}",
        identity.username,
        identity.role,
        request.uri().path()
    );
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}
