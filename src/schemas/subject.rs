use serde::Serialize;

use crate::domain::models::Subject;

#[derive(Debug, Serialize)]
pub(crate) struct SubjectResponse {
    pub(crate) subject_name: String,
    pub(crate) year_level: String,
}

impl SubjectResponse {
    pub(crate) fn from_domain(subject: Subject) -> Self {
        Self { subject_name: subject.subject_name, year_level: subject.year_level }
    }
}
