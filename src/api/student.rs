use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::api::errors::ApiError;
use crate::api::guards::{CurrentStudent, SessionToken};
use crate::core::state::AppState;
use crate::schemas::auth::{LoginRequest, SessionResponse};
use crate::schemas::grade::GradeResponse;
use crate::schemas::material::MaterialResponse;
use crate::schemas::student::StudentProfileResponse;
use crate::services;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/profile", get(profile))
        .route("/materials", get(materials))
        .route("/grades", get(grades))
        .route("/logout", post(logout))
}

async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let identity =
        services::auth::login_student(state.student_store(), &payload.code, &payload.password)
            .await?;

    let token = state.sessions().insert(identity.clone()).await;
    Ok(Json(SessionResponse::new(token, &identity)))
}

/// The profile is the login-time snapshot; later edits to the Students row do
/// not show up here until the next login.
async fn profile(
    CurrentStudent(student): CurrentStudent,
) -> Result<Json<StudentProfileResponse>, ApiError> {
    let profile = StudentProfileResponse::from_account(&student).map_err(|err| {
        tracing::warn!(error = %err, code = %student.code, "Malformed balance cells");
        ApiError::BadRequest("Malformed balance data".to_string())
    })?;

    Ok(Json(profile))
}

async fn materials(
    State(state): State<AppState>,
    CurrentStudent(_student): CurrentStudent,
) -> Result<Json<Vec<MaterialResponse>>, ApiError> {
    let materials =
        services::queries::list_materials(state.student_store(), state.cache()).await?;

    Ok(Json(materials.into_iter().map(MaterialResponse::from_domain).collect()))
}

async fn grades(
    State(state): State<AppState>,
    CurrentStudent(student): CurrentStudent,
) -> Result<Json<Vec<GradeResponse>>, ApiError> {
    let grades =
        services::queries::list_grades_for(state.student_store(), state.cache(), &student.code)
            .await?;

    Ok(Json(grades.into_iter().map(GradeResponse::from_domain).collect()))
}

async fn logout(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> StatusCode {
    state.sessions().remove(&token).await;
    StatusCode::NO_CONTENT
}
