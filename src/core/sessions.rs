use std::collections::HashMap;
use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use tokio::sync::RwLock;

use crate::domain::models::SessionIdentity;

/// Browser-session state: an opaque token keyed to the identity snapshot taken
/// at login. The snapshot is never re-validated against the store; it lives
/// until logout removes it.
#[derive(Clone)]
pub(crate) struct SessionStore {
    entries: Arc<RwLock<HashMap<String, SessionIdentity>>>,
}

impl SessionStore {
    pub(crate) fn new() -> Self {
        Self { entries: Arc::new(RwLock::new(HashMap::new())) }
    }

    pub(crate) async fn insert(&self, identity: SessionIdentity) -> String {
        let token = generate_session_token();
        let mut entries = self.entries.write().await;
        entries.insert(token.clone(), identity);
        token
    }

    pub(crate) async fn get(&self, token: &str) -> Option<SessionIdentity> {
        let entries = self.entries.read().await;
        entries.get(token).cloned()
    }

    pub(crate) async fn remove(&self, token: &str) -> bool {
        let mut entries = self.entries.write().await;
        entries.remove(token).is_some()
    }
}

fn generate_session_token() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
