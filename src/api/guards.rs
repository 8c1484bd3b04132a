use async_trait::async_trait;
use axum::extract::{FromRequestParts, State};
use axum::http::{header, request::Parts};

use crate::api::errors::ApiError;
use crate::core::state::AppState;
use crate::domain::models::{SessionIdentity, StudentAccount, TeacherAccount};

pub(crate) struct CurrentTeacher(pub(crate) TeacherAccount);
pub(crate) struct CurrentStudent(pub(crate) StudentAccount);

/// Raw session token, for handlers that act on the session itself (logout).
pub(crate) struct SessionToken(pub(crate) String);

#[async_trait]
impl FromRequestParts<AppState> for SessionToken {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(SessionToken(bearer_token(parts)?.to_string()))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentTeacher {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match current_identity(parts, state).await? {
            SessionIdentity::Teacher(account) => Ok(CurrentTeacher(account)),
            SessionIdentity::Student(_) => Err(ApiError::Forbidden("Teacher session required")),
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentStudent {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match current_identity(parts, state).await? {
            SessionIdentity::Student(account) => Ok(CurrentStudent(account)),
            SessionIdentity::Teacher(_) => Err(ApiError::Forbidden("Student session required")),
        }
    }
}

/// Resolves the bearer token against the session store only. The snapshot
/// taken at login is returned as-is; the backing store is never consulted.
async fn current_identity(parts: &mut Parts, state: &AppState) -> Result<SessionIdentity, ApiError> {
    let State(app_state) = State::<AppState>::from_request_parts(parts, state)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to access application state"))?;

    let token = bearer_token(parts)?;

    app_state
        .sessions()
        .get(token)
        .await
        .ok_or(ApiError::Unauthorized("Invalid session credentials"))
}

fn bearer_token(parts: &Parts) -> Result<&str, ApiError> {
    let auth_header = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(ApiError::Unauthorized("Invalid session credentials"))?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::Unauthorized("Invalid session credentials"))
}
