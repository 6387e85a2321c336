//! Admin login and bearer-token verification.

use axum::{extract::FromRequestParts, http::request::Parts};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use time::OffsetDateTime;
use tracing::warn;

use crate::{
    config::TOKEN_TTL_HOURS,
    dto::auth::{Claims, LoginRequest, LoginResponse},
    error::{AppError, ServiceError},
    state::SharedState,
};

/// Verify the submitted credentials and issue a signed, time-limited token.
pub async fn login(
    state: &SharedState,
    request: LoginRequest,
) -> Result<LoginResponse, ServiceError> {
    let config = state.config();

    let Some(expected_hash) = config.admin_password_hash.as_deref() else {
        warn!("login attempt while admin login is disabled");
        return Err(ServiceError::Unauthorized("admin login is disabled".into()));
    };

    if request.username != config.admin_username {
        return Err(ServiceError::Unauthorized("unknown user".into()));
    }

    let password_ok = bcrypt::verify(&request.password, expected_hash)
        .map_err(|_| ServiceError::Unauthorized("invalid credentials".into()))?;
    if !password_ok {
        return Err(ServiceError::Unauthorized("invalid credentials".into()));
    }

    let token = issue_token(&config.jwt_secret, &request.username)?;
    Ok(LoginResponse { token })
}

/// Sign a token for the given subject, valid for [`TOKEN_TTL_HOURS`].
pub fn issue_token(secret: &str, subject: &str) -> Result<String, ServiceError> {
    let claims = Claims {
        sub: subject.to_string(),
        exp: OffsetDateTime::now_utc().unix_timestamp() + TOKEN_TTL_HOURS * 3600,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|err| ServiceError::InvalidInput(format!("failed to sign token: {err}")))
}

/// Decode and verify a bearer token, rejecting expired or tampered tokens.
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, ServiceError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|err| ServiceError::Forbidden(format!("invalid token: {err}")))
}

/// Extractor guarding admin-only routes.
///
/// A missing `Authorization` header yields 401; a present but invalid or
/// expired token yields 403.
#[derive(Debug, Clone)]
pub struct AdminClaims(pub Claims);

impl FromRequestParts<SharedState> for AdminClaims {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("missing bearer token".into()))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized("missing bearer token".into()))?;

        let claims = verify_token(&state.config().jwt_secret, token).map_err(AppError::from)?;
        Ok(AdminClaims(claims))
    }
}
