use time::OffsetDateTime;

use crate::core::time::format_timestamp;
use crate::domain::types::GradeValue;
use crate::services::PortalError;
use crate::store::{SheetStore, StoreError};

/// Append a grade row to the worksheet literally named by the student code.
/// The row shape is fixed: `[label, grade, timestamp, ""]`. An unset grade or
/// an empty code is a `Validation` failure the interaction boundary turns
/// into a silent skip; a missing worksheet is reported as an invalid student
/// code even when the worksheet vanished for another reason.
pub(crate) async fn record_grade(
    store: &dyn SheetStore,
    student_code: &str,
    subject_label: &str,
    grade: GradeValue,
    recorded_at: OffsetDateTime,
) -> Result<(), PortalError> {
    let student_code = student_code.trim();
    if student_code.is_empty() {
        return Err(PortalError::Validation("student code is empty"));
    }
    if grade.is_unset() {
        return Err(PortalError::Validation("grade value is unset"));
    }

    let row = [
        subject_label.to_string(),
        grade.as_str().to_string(),
        format_timestamp(recorded_at),
        String::new(),
    ];

    store.append_row(student_code, &row).await.map_err(|err| match err {
        StoreError::WorksheetNotFound(_) => {
            PortalError::TargetNotFound(format!("student worksheet {student_code}"))
        }
        other => other.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::now_utc;
    use crate::test_support::InMemorySheets;

    async fn store_with_student(code: &str) -> InMemorySheets {
        let store = InMemorySheets::new("users_database");
        store.insert_worksheet(code, vec![vec!["Result", "Grade", "Date", "Note"]]).await;
        store
    }

    #[tokio::test]
    async fn appends_the_fixed_row_shape() {
        let store = store_with_student("S100").await;

        record_grade(&store, "S100", "Mathematics", GradeValue::Pass, now_utc())
            .await
            .expect("record");

        let rows = store.rows("S100").await;
        assert_eq!(rows.len(), 2);
        let appended = &rows[1];
        assert_eq!(appended[0], "Mathematics");
        assert_eq!(appended[1], "ناجح");
        assert!(!appended[2].is_empty());
        assert_eq!(appended[3], "");
    }

    #[tokio::test]
    async fn trims_the_student_code_before_opening() {
        let store = store_with_student("S100").await;

        record_grade(&store, " S100 ", "Mathematics", GradeValue::Excellent, now_utc())
            .await
            .expect("record");

        assert_eq!(store.rows("S100").await.len(), 2);
    }

    #[tokio::test]
    async fn unset_grade_is_a_validation_failure_and_writes_nothing() {
        let store = store_with_student("S100").await;

        let result = record_grade(&store, "S100", "Mathematics", GradeValue::Unset, now_utc()).await;
        assert!(matches!(result, Err(PortalError::Validation(_))));
        assert_eq!(store.rows("S100").await.len(), 1);
    }

    #[tokio::test]
    async fn empty_student_code_is_a_validation_failure() {
        let store = store_with_student("S100").await;

        let result = record_grade(&store, "  ", "Mathematics", GradeValue::Pass, now_utc()).await;
        assert!(matches!(result, Err(PortalError::Validation(_))));
        assert_eq!(store.rows("S100").await.len(), 1);
    }

    #[tokio::test]
    async fn missing_worksheet_maps_to_target_not_found() {
        let store = store_with_student("S100").await;

        let result = record_grade(&store, "S999", "Mathematics", GradeValue::Fail, now_utc()).await;
        assert!(
            matches!(result, Err(PortalError::TargetNotFound(target)) if target.contains("S999"))
        );
        assert_eq!(store.rows("S100").await.len(), 1);
    }
}
