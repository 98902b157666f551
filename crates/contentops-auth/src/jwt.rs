//! Session token creation and verification.
//!
//! Tokens are HS256 JWTs signed with [`SessionConfig::secret`]. The identity
//! provider is the normal issuer; [`create_session_token`] exists so that
//! tooling and tests can mint sessions with the same secret.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use contentops_config::SessionConfig;
use contentops_core::AppError;

use crate::claims::SessionClaims;
use crate::principal::Principal;

/// Creates a session token for `principal` that expires after
/// `config.expiry_secs`.
pub fn create_session_token(principal: &Principal, config: &SessionConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp().max(0) as usize;
    let exp = now + config.expiry_secs.max(0) as usize;

    let claims = SessionClaims {
        sub: principal.user_id,
        org: principal.organization_id,
        acct: principal.account_id,
        email: principal.email.clone(),
        roles: principal.role_names(),
        exp,
        iat: now,
    };

    encode_claims(&claims, config)
}

pub(crate) fn encode_claims(claims: &SessionClaims, config: &SessionConfig) -> Result<String, AppError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create session token: {}", e)))
}

/// Verifies signature and expiry of a session token.
///
/// # Errors
///
/// Returns an unauthorized error if the token is malformed, expired, or
/// signed with a different secret.
pub fn verify_session_token(token: &str, config: &SessionConfig) -> Result<SessionClaims, AppError> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired session"))
}
