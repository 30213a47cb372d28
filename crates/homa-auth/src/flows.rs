use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use homa_core::error::CoreError;
use homa_core::models::staff::{Role, Staff, StaffProfile};
use homa_core::validation;
use homa_storage::Store;

use crate::error::AuthError;
use crate::jwt::TokenIssuer;
use crate::password;

/// A new staff account request.
#[derive(Debug, Clone, Deserialize)]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Role,
}

/// An authenticated staff member and their session token.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub user: StaffProfile,
    pub token: String,
}

/// Emails are compared case-insensitively.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Create a staff account and sign the new member in.
pub fn signup(store: &Store, issuer: &TokenIssuer, request: Signup) -> Result<Session, AuthError> {
    let name = request.name.trim().to_string();
    if name.is_empty() {
        return Err(CoreError::MissingField("Name is required".to_string()).into());
    }
    let email = normalize_email(&request.email);
    validation::validate_email(&email)?;
    validation::validate_password(&request.password)?;

    let phone = validation::validate_optional_phone(request.phone)?;

    let staff = Staff {
        id: Uuid::new_v4(),
        name,
        email,
        phone,
        role: request.role,
        is_active: true,
        password_hash: password::hash_password(&request.password)?,
        created_at: jiff::Timestamp::now(),
    };
    store.insert_staff(&staff)?;

    let token = issuer.issue(&staff)?;
    Ok(Session {
        user: staff.profile(),
        token,
    })
}

/// Check credentials and issue a session token.
///
/// Unknown email and wrong password are indistinguishable to the caller.
/// A deactivated account is only reported once the password matched.
pub fn login(
    store: &Store,
    issuer: &TokenIssuer,
    email: &str,
    password: &str,
) -> Result<Session, AuthError> {
    let email = normalize_email(email);
    info!(email = %email, "login attempt");

    let staff = store
        .find_staff_by_email(&email)?
        .ok_or(AuthError::InvalidCredentials)?;

    if !password::verify_password(password, &staff.password_hash)? {
        return Err(AuthError::InvalidCredentials);
    }
    if !staff.is_active {
        return Err(AuthError::AccountDisabled);
    }

    let token = issuer.issue(&staff)?;
    info!(staff_id = %staff.id, "login succeeded");
    Ok(Session {
        user: staff.profile(),
        token,
    })
}
