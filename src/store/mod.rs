pub(crate) mod sheets;

use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("store connection failed: {0}")]
    Connection(String),
    #[error("worksheet {0} not found")]
    WorksheetNotFound(String),
}

/// One worksheet row keyed by the worksheet's header labels. Cell values come
/// back from the store as formatted strings, so comparisons trim before
/// matching and numeric cells compare as their string rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    pub(crate) fn from_header(header: &[String], row: &[String]) -> Self {
        let fields = header
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let value = row.get(index).cloned().unwrap_or_default();
                (label.trim().to_string(), value)
            })
            .collect();
        Self { fields }
    }

    pub(crate) fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }

    pub(crate) fn get_trimmed(&self, field: &str) -> &str {
        self.get(field).trim()
    }
}

/// Worksheet-scoped access to one backing document. A handle is bound to a
/// document title at construction; every call names the worksheet explicitly.
#[async_trait]
pub(crate) trait SheetStore: Send + Sync {
    /// Title of the backing document this handle is bound to.
    fn document(&self) -> &str;

    /// All data rows of a worksheet as field-named records (first row is the
    /// header).
    async fn worksheet_records(&self, worksheet: &str) -> Result<Vec<Record>, StoreError>;

    /// First row containing a cell exactly equal to `value`, as raw cell
    /// values in column order.
    async fn find_row(&self, worksheet: &str, value: &str)
        -> Result<Option<Vec<String>>, StoreError>;

    async fn append_row(&self, worksheet: &str, row: &[String]) -> Result<(), StoreError>;

    async fn health(&self) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn from_header_zips_labels_and_values() {
        let record = Record::from_header(
            &strings(&["Code", "Name", "Password"]),
            &strings(&["T1", "Dr. Salma", "abc"]),
        );
        assert_eq!(record.get("Code"), "T1");
        assert_eq!(record.get("Name"), "Dr. Salma");
        assert_eq!(record.get("Password"), "abc");
    }

    #[test]
    fn from_header_pads_short_rows() {
        let record =
            Record::from_header(&strings(&["Code", "Name", "Password"]), &strings(&["T1"]));
        assert_eq!(record.get("Name"), "");
        assert_eq!(record.get("Password"), "");
    }

    #[test]
    fn header_labels_are_trimmed() {
        let record = Record::from_header(&strings(&[" Code "]), &strings(&["T1"]));
        assert_eq!(record.get("Code"), "T1");
    }

    #[test]
    fn get_trimmed_strips_cell_whitespace() {
        let record = Record::from_header(&strings(&["Code"]), &strings(&[" T1 "]));
        assert_eq!(record.get("Code"), " T1 ");
        assert_eq!(record.get_trimmed("Code"), "T1");
    }

    #[test]
    fn missing_field_reads_as_empty() {
        let record = Record::from_header(&strings(&["Code"]), &strings(&["T1"]));
        assert_eq!(record.get("Absent"), "");
    }
}
