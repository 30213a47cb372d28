use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use homa_core::models::staff::Role;

use crate::error::ApiError;
use crate::state::AppState;

/// Bearer-token middleware for the protected routes.
///
/// Validates the `Authorization: Bearer <token>` header against the
/// server's signing secret and inserts [`AuthUser`] into request
/// extensions for handlers to use.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("authentication required".to_string()))?;

    let claims = state.tokens.validate(token)?;
    req.extensions_mut().insert(AuthUser {
        id: claims.sub,
        role: claims.role,
    });

    Ok(next.run(req).await)
}

/// Authenticated staff member extracted from the session token.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: Uuid,
    pub role: Role,
}
