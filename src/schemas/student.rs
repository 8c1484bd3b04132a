use std::num::ParseFloatError;

use serde::Serialize;

use crate::domain::models::StudentAccount;

#[derive(Debug, Serialize)]
pub(crate) struct StudentProfileResponse {
    pub(crate) code: String,
    pub(crate) name: String,
    pub(crate) fees_total: f64,
    pub(crate) fees_paid: f64,
    pub(crate) fees_remaining: f64,
}

impl StudentProfileResponse {
    /// Balance cells hold numbers rendered as strings; a cell that does not
    /// parse is surfaced to the caller rather than shown as zero.
    pub(crate) fn from_account(account: &StudentAccount) -> Result<Self, ParseFloatError> {
        let fees_total = account.cell(StudentAccount::TOTAL_FEES_COLUMN).trim().parse::<f64>()?;
        let fees_paid = account.cell(StudentAccount::PAID_FEES_COLUMN).trim().parse::<f64>()?;

        Ok(Self {
            code: account.code.clone(),
            name: account.name.clone(),
            fees_total,
            fees_paid,
            fees_remaining: fees_total - fees_paid,
        })
    }
}
