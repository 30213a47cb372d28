use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use homa_auth::flows::{self, Session, Signup};
use homa_core::models::staff::Role;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    role: Option<Role>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

#[derive(Serialize)]
pub struct LogoutResponse {
    message: &'static str,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Session>), ApiError> {
    let Json(body) = payload?;
    let (Some(name), Some(email), Some(password)) =
        (present(body.name), present(body.email), present(body.password))
    else {
        return Err(ApiError::BadRequest(
            "Name, email, and password are required".to_string(),
        ));
    };

    let request = Signup {
        name,
        email,
        password,
        phone: body.phone,
        role: body.role.unwrap_or_default(),
    };

    // Argon2 hashing blocks; run it off the async workers.
    let session = tokio::task::spawn_blocking(move || {
        flows::signup(&state.store, &state.tokens, request)
    })
    .await??;

    tracing::info!(staff_id = %session.user.id, role = %session.user.role.as_str(), "staff signed up");
    Ok((StatusCode::CREATED, Json(session)))
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<Session>, ApiError> {
    let Json(body) = payload?;
    let (Some(email), Some(password)) = (present(body.email), present(body.password)) else {
        return Err(ApiError::BadRequest(
            "Email and password are required".to_string(),
        ));
    };

    let session = tokio::task::spawn_blocking(move || {
        flows::login(&state.store, &state.tokens, &email, &password)
    })
    .await??;

    Ok(Json(session))
}

/// Sessions are stateless bearer tokens, so there is nothing to revoke
/// server-side; clients discard the token.
pub async fn logout() -> Json<LogoutResponse> {
    Json(LogoutResponse {
        message: "Logged out successfully",
    })
}
