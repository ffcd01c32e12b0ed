//! Axum extractor for the authenticated caller

use crate::ApiError;

use hr_auth::{AuthError, IdentityContext};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The [`IdentityContext`] the authentication middleware attached to the request.
///
/// Rejects with 401 when the handler is mounted outside the authenticated group.
pub struct Identity(pub IdentityContext);

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match parts.extensions.get::<IdentityContext>() {
                Some(identity) => Ok(Identity(identity.clone())),
                None => {
                    log::error!("Identity requested on a route without authentication middleware");
                    Err(AuthError::unauthenticated("Authentication required").into())
                }
            }
        }
    }
}
