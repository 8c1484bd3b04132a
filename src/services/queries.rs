use std::sync::Arc;

use crate::domain::models::{GradeEntry, Material, Subject};
use crate::domain::types::MaterialKind;
use crate::services::cache::WorksheetCache;
use crate::services::PortalError;
use crate::store::{Record, SheetStore};

pub(crate) const SUBJECTS_WORKSHEET: &str = "Subjects_Data";
pub(crate) const MATERIALS_WORKSHEET: &str = "Materials";
pub(crate) const GRADES_WORKSHEET: &str = "Grades";

/// Subjects a teacher may grade, matched on the trimmed teacher code. An
/// empty result is a valid answer, not an error.
pub(crate) async fn list_subjects_for(
    store: &dyn SheetStore,
    cache: &WorksheetCache,
    teacher_code: &str,
) -> Result<Vec<Subject>, PortalError> {
    let code = teacher_code.trim();
    let records = cached_filter(store, cache, SUBJECTS_WORKSHEET, code, |record| {
        record.get_trimmed("Teacher_Code") == code
    })
    .await?;

    Ok(records.iter().map(Subject::from_record).collect())
}

/// Every Global and Subject material, for any account. Subject rows are not
/// scoped to the posting teacher.
pub(crate) async fn list_materials(
    store: &dyn SheetStore,
    cache: &WorksheetCache,
) -> Result<Vec<Material>, PortalError> {
    let records = cached_filter(store, cache, MATERIALS_WORKSHEET, "", |record| {
        MaterialKind::parse(record.get("Type")).is_some()
    })
    .await?;

    Ok(records.iter().filter_map(Material::from_record).collect())
}

pub(crate) async fn list_grades_for(
    store: &dyn SheetStore,
    cache: &WorksheetCache,
    student_id: &str,
) -> Result<Vec<GradeEntry>, PortalError> {
    let id = student_id.trim();
    let records = cached_filter(store, cache, GRADES_WORKSHEET, id, |record| {
        record.get_trimmed("StudentID") == id
    })
    .await?;

    Ok(records.iter().map(GradeEntry::from_record).collect())
}

/// Serve the filtered rows from the freshness cache when present, otherwise
/// re-fetch the full worksheet and cache the filtered result under the call
/// arguments.
async fn cached_filter(
    store: &dyn SheetStore,
    cache: &WorksheetCache,
    worksheet: &str,
    argument: &str,
    keep: impl Fn(&Record) -> bool,
) -> Result<Arc<Vec<Record>>, PortalError> {
    if let Some(records) = cache.get(store.document(), worksheet, argument).await {
        return Ok(records);
    }

    let records = store.worksheet_records(worksheet).await?;
    let filtered: Vec<Record> = records.into_iter().filter(keep).collect();
    Ok(cache.put(store.document(), worksheet, argument, filtered).await)
}
