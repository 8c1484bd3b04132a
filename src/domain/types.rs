use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum PortalRole {
    Teacher,
    Student,
}

/// Result values a grade cell may hold. `Unset` is the placeholder shown
/// before a value is picked and is never written to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum GradeValue {
    #[serde(rename = "-")]
    Unset,
    #[serde(rename = "ناجح")]
    Pass,
    #[serde(rename = "راسب")]
    Fail,
    #[serde(rename = "امتياز")]
    Excellent,
}

impl GradeValue {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            GradeValue::Unset => "-",
            GradeValue::Pass => "ناجح",
            GradeValue::Fail => "راسب",
            GradeValue::Excellent => "امتياز",
        }
    }

    pub(crate) fn is_unset(self) -> bool {
        matches!(self, GradeValue::Unset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum MaterialKind {
    Global,
    Subject,
}

impl MaterialKind {
    /// Rows carrying any other type tag are not visible to the portals.
    pub(crate) fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "Global" => Some(MaterialKind::Global),
            "Subject" => Some(MaterialKind::Subject),
            _ => None,
        }
    }
}
