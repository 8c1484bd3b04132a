use serde::{Deserialize, Serialize};

use crate::domain::models::SessionIdentity;
use crate::domain::types::PortalRole;

#[derive(Debug, Deserialize)]
pub(crate) struct LoginRequest {
    pub(crate) code: String,
    pub(crate) password: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SessionResponse {
    pub(crate) session_token: String,
    pub(crate) role: PortalRole,
    pub(crate) code: String,
    pub(crate) name: String,
}

impl SessionResponse {
    pub(crate) fn new(session_token: String, identity: &SessionIdentity) -> Self {
        Self {
            session_token,
            role: identity.role(),
            code: identity.code().to_string(),
            name: identity.name().to_string(),
        }
    }
}
