use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use homa_core::models::staff::{Role, Staff};

use crate::error::AuthError;

pub const DEFAULT_TOKEN_TTL: jiff::SignedDuration = jiff::SignedDuration::from_secs(7 * 24 * 60 * 60);

/// Claims carried in a staff session token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffClaims {
    pub sub: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and validates HS256 session tokens with a shared secret.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: jiff::SignedDuration,
}

impl TokenIssuer {
    pub fn new(secret: &[u8], ttl: jiff::SignedDuration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Sign a token for `staff`, valid from now for the configured TTL.
    pub fn issue(&self, staff: &Staff) -> Result<String, AuthError> {
        let iat = jiff::Timestamp::now().as_second();
        let claims = StaffClaims {
            sub: staff.id,
            email: staff.email.clone(),
            name: staff.name.clone(),
            role: staff.role,
            iat,
            exp: iat + self.ttl.as_secs(),
        };
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verify signature and expiry, returning the claims.
    pub fn validate(&self, token: &str) -> Result<StaffClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        decode::<StaffClaims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            })
    }
}
