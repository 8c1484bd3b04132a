pub(crate) mod api;
pub(crate) mod core;
pub(crate) mod domain;
pub(crate) mod schemas;
pub(crate) mod services;
pub(crate) mod store;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use crate::core::sessions::SessionStore;
use crate::core::state::AppState;
use crate::core::{config::Settings, telemetry};
use crate::services::cache::WorksheetCache;
use crate::store::sheets::SheetsClient;
use crate::store::SheetStore;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    telemetry::init_tracing(&settings)?;
    core::metrics::init(&settings)?;

    let client = SheetsClient::from_settings(&settings)?;
    let teacher_store: Arc<dyn SheetStore> =
        Arc::new(client.open(settings.store().teacher_document.clone()));
    let student_store: Arc<dyn SheetStore> =
        Arc::new(client.open(settings.store().student_document.clone()));

    let cache = WorksheetCache::new(settings.cache().freshness_window());
    let sessions = SessionStore::new();
    let state = AppState::new(settings, teacher_store, student_store, cache, sessions);

    let app = api::router::router(state.clone());
    let listener = tokio::net::TcpListener::bind(state.settings().server_addr()).await?;

    tracing::info!(
        host = %state.settings().server_host(),
        port = state.settings().server_port(),
        environment = %state.settings().runtime().environment.as_str(),
        "Classportal Rust API listening"
    );

    axum::serve(listener, app).with_graceful_shutdown(core::shutdown::shutdown_signal()).await?;

    Ok(())
}
