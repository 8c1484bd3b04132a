use crate::domain::models::{SessionIdentity, StudentAccount, TeacherAccount};
use crate::services::PortalError;
use crate::store::SheetStore;

pub(crate) const TEACHERS_WORKSHEET: &str = "Teachers_Main";
pub(crate) const STUDENTS_WORKSHEET: &str = "Students";

/// Dual-match strategy: scan the account worksheet for a row whose trimmed
/// code and password both equal the submitted pair. First match wins. The
/// denial does not distinguish an unknown code from a wrong password.
pub(crate) async fn login_teacher(
    store: &dyn SheetStore,
    code: &str,
    password: &str,
) -> Result<SessionIdentity, PortalError> {
    let code = code.trim();
    let password = password.trim();

    let records = store.worksheet_records(TEACHERS_WORKSHEET).await?;
    let matched = records
        .into_iter()
        .find(|record| {
            record.get_trimmed("Code") == code && record.get_trimmed("Password") == password
        })
        .ok_or(PortalError::Authentication)?;

    Ok(SessionIdentity::Teacher(TeacherAccount::from_record(matched)))
}

/// Find-then-compare strategy: locate the first row containing the code, then
/// check the fixed-position password cell. An empty stored password means the
/// account is not provisioned yet and never matches, whatever was submitted.
pub(crate) async fn login_student(
    store: &dyn SheetStore,
    code: &str,
    password: &str,
) -> Result<SessionIdentity, PortalError> {
    let code = code.trim().to_string();
    let password = password.trim();

    let row =
        store.find_row(STUDENTS_WORKSHEET, &code).await?.ok_or(PortalError::Authentication)?;

    let stored = row
        .get(StudentAccount::PASSWORD_COLUMN)
        .map(|cell| cell.trim())
        .unwrap_or("");
    if stored.is_empty() || stored != password {
        return Err(PortalError::Authentication);
    }

    Ok(SessionIdentity::Student(StudentAccount::from_row(code, row)))
}
