use crate::{Identity, MeResponse};

use axum::Json;

/// GET /api/v1/me
///
/// Answers from the token's claims; no store lookup
pub async fn me(Identity(identity): Identity) -> Json<MeResponse> {
    Json(identity.into())
}
