use crate::ApiError;

use hr_auth::{IdentityContext, RoleAllowList};

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Authorization gate for one route group; layer it inside [`authenticate`].
///
/// [`authenticate`]: crate::middleware::authenticate::authenticate
pub async fn require_roles(
    State(allowed): State<Arc<RoleAllowList>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = request.extensions().get::<IdentityContext>();
    if identity.is_none() {
        log::error!(
            "No identity on {}; authorization gate is mounted without authentication",
            request.uri().path()
        );
    }

    if let Err(e) = hr_auth::authorize(identity, &allowed) {
        log::warn!(
            "Denied {} to role '{}' (allowed: {})",
            request.uri().path(),
            identity.map(|i| i.role.as_str()).unwrap_or_default(),
            allowed.roles().join(", ")
        );
        return Err(e.into());
    }

    Ok(next.run(request).await)
}
