use crate::domain::types::{MaterialKind, PortalRole};
use crate::store::Record;

/// Snapshot of one Teachers_Main row taken at login.
#[derive(Debug, Clone)]
pub(crate) struct TeacherAccount {
    pub(crate) code: String,
    pub(crate) name: String,
    pub(crate) record: Record,
}

impl TeacherAccount {
    pub(crate) fn from_record(record: Record) -> Self {
        Self {
            code: record.get_trimmed("Code").to_string(),
            name: record.get_trimmed("Name").to_string(),
            record,
        }
    }
}

/// Snapshot of one Students row taken at login. The row shape is positional:
/// index 0 code, 1 name, 3 total fees, 4 paid fees, 5 password.
#[derive(Debug, Clone)]
pub(crate) struct StudentAccount {
    pub(crate) code: String,
    pub(crate) name: String,
    pub(crate) row: Vec<String>,
}

impl StudentAccount {
    pub(crate) const NAME_COLUMN: usize = 1;
    pub(crate) const TOTAL_FEES_COLUMN: usize = 3;
    pub(crate) const PAID_FEES_COLUMN: usize = 4;
    pub(crate) const PASSWORD_COLUMN: usize = 5;

    pub(crate) fn from_row(code: String, row: Vec<String>) -> Self {
        let name = row.get(Self::NAME_COLUMN).map(|cell| cell.trim().to_string()).unwrap_or_default();
        Self { code, name, row }
    }

    pub(crate) fn cell(&self, index: usize) -> &str {
        self.row.get(index).map(String::as_str).unwrap_or("")
    }
}

/// Role-tagged account snapshot held by the session store.
#[derive(Debug, Clone)]
pub(crate) enum SessionIdentity {
    Teacher(TeacherAccount),
    Student(StudentAccount),
}

impl SessionIdentity {
    pub(crate) fn role(&self) -> PortalRole {
        match self {
            SessionIdentity::Teacher(_) => PortalRole::Teacher,
            SessionIdentity::Student(_) => PortalRole::Student,
        }
    }

    pub(crate) fn code(&self) -> &str {
        match self {
            SessionIdentity::Teacher(account) => &account.code,
            SessionIdentity::Student(account) => &account.code,
        }
    }

    pub(crate) fn name(&self) -> &str {
        match self {
            SessionIdentity::Teacher(account) => &account.name,
            SessionIdentity::Student(account) => &account.name,
        }
    }
}

/// One Subjects_Data row: a subject a teacher may grade.
#[derive(Debug, Clone)]
pub(crate) struct Subject {
    pub(crate) teacher_code: String,
    pub(crate) subject_name: String,
    pub(crate) year_level: String,
}

impl Subject {
    pub(crate) fn from_record(record: &Record) -> Self {
        Self {
            teacher_code: record.get_trimmed("Teacher_Code").to_string(),
            subject_name: record.get_trimmed("Subject_Name").to_string(),
            year_level: record.get_trimmed("Year_Level").to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Material {
    pub(crate) title: String,
    pub(crate) link: String,
    pub(crate) kind: MaterialKind,
}

impl Material {
    pub(crate) fn from_record(record: &Record) -> Option<Self> {
        let kind = MaterialKind::parse(record.get("Type"))?;
        Some(Self {
            title: record.get_trimmed("Title").to_string(),
            link: record.get_trimmed("Link").to_string(),
            kind,
        })
    }
}

/// One row of the shared Grades table, as shown on the student dashboard.
#[derive(Debug, Clone)]
pub(crate) struct GradeEntry {
    pub(crate) subject: String,
    pub(crate) score: String,
    pub(crate) status: String,
    pub(crate) date: String,
}

impl GradeEntry {
    pub(crate) fn from_record(record: &Record) -> Self {
        Self {
            subject: record.get_trimmed("Subject").to_string(),
            score: record.get_trimmed("Score").to_string(),
            status: record.get_trimmed("Status").to_string(),
            date: record.get_trimmed("Date").to_string(),
        }
    }
}
