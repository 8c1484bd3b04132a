pub(crate) mod auth;
pub(crate) mod cache;
pub(crate) mod grades;
pub(crate) mod queries;

use thiserror::Error;

use crate::store::StoreError;

/// Failure taxonomy for portal interactions. Categories stay distinct
/// internally even where the user-facing message collapses to one generic
/// denial.
#[derive(Debug, Error)]
pub(crate) enum PortalError {
    #[error("store connection failed: {0}")]
    Connection(String),
    #[error("invalid credentials")]
    Authentication,
    #[error("{0} not found")]
    TargetNotFound(String),
    #[error("invalid input: {0}")]
    Validation(&'static str),
}

impl From<StoreError> for PortalError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Connection(message) => PortalError::Connection(message),
            StoreError::WorksheetNotFound(name) => {
                PortalError::TargetNotFound(format!("worksheet {name}"))
            }
        }
    }
}
