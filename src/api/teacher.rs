use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::guards::{CurrentTeacher, SessionToken};
use crate::core::state::AppState;
use crate::core::time::now_utc;
use crate::schemas::auth::{LoginRequest, SessionResponse};
use crate::schemas::grade::{RecordGradeRequest, RecordGradeResponse};
use crate::schemas::subject::SubjectResponse;
use crate::services;
use crate::services::PortalError;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/subjects", get(subjects))
        .route("/grades", post(record_grade))
        .route("/logout", post(logout))
}

async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let identity =
        services::auth::login_teacher(state.teacher_store(), &payload.code, &payload.password)
            .await?;

    let token = state.sessions().insert(identity.clone()).await;
    Ok(Json(SessionResponse::new(token, &identity)))
}

async fn subjects(
    State(state): State<AppState>,
    CurrentTeacher(teacher): CurrentTeacher,
) -> Result<Json<Vec<SubjectResponse>>, ApiError> {
    let subjects =
        services::queries::list_subjects_for(state.teacher_store(), state.cache(), &teacher.code)
            .await?;

    Ok(Json(subjects.into_iter().map(SubjectResponse::from_domain).collect()))
}

async fn record_grade(
    State(state): State<AppState>,
    CurrentTeacher(teacher): CurrentTeacher,
    Json(payload): Json<RecordGradeRequest>,
) -> Result<Json<RecordGradeResponse>, ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let subject = payload.subject.trim();
    let assigned =
        services::queries::list_subjects_for(state.teacher_store(), state.cache(), &teacher.code)
            .await?;
    if !assigned.iter().any(|item| item.subject_name == subject) {
        return Err(ApiError::Forbidden("Subject is not assigned to this teacher"));
    }

    let result = services::grades::record_grade(
        state.teacher_store(),
        &payload.student_code,
        subject,
        payload.grade,
        now_utc(),
    )
    .await;

    match result {
        Ok(()) => Ok(Json(RecordGradeResponse::recorded(payload.grade))),
        Err(PortalError::Validation(reason)) => {
            tracing::debug!(reason, "Grade write skipped");
            Ok(Json(RecordGradeResponse::skipped()))
        }
        Err(PortalError::TargetNotFound(_)) => {
            Err(ApiError::NotFound("Invalid student code".to_string()))
        }
        Err(err) => Err(err.into()),
    }
}

async fn logout(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> StatusCode {
    state.sessions().remove(&token).await;
    StatusCode::NO_CONTENT
}
