use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::GradeEntry;
use crate::domain::types::GradeValue;

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct RecordGradeRequest {
    #[serde(default)]
    pub(crate) student_code: String,
    #[validate(length(min = 1, message = "subject must not be empty"))]
    pub(crate) subject: String,
    pub(crate) grade: GradeValue,
}

#[derive(Debug, Serialize)]
pub(crate) struct RecordGradeResponse {
    pub(crate) status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) grade: Option<GradeValue>,
}

impl RecordGradeResponse {
    pub(crate) fn recorded(grade: GradeValue) -> Self {
        Self { status: "recorded", grade: Some(grade) }
    }

    pub(crate) fn skipped() -> Self {
        Self { status: "skipped", grade: None }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GradeResponse {
    pub(crate) subject: String,
    pub(crate) score: String,
    pub(crate) status: String,
    pub(crate) date: String,
}

impl GradeResponse {
    pub(crate) fn from_domain(entry: GradeEntry) -> Self {
        Self {
            subject: entry.subject,
            score: entry.score,
            status: entry.status,
            date: entry.date,
        }
    }
}
