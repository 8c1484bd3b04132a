use std::sync::Arc;

use crate::core::{config::Settings, sessions::SessionStore};
use crate::services::cache::WorksheetCache;
use crate::store::SheetStore;

#[derive(Clone)]
pub(crate) struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    settings: Settings,
    teacher_store: Arc<dyn SheetStore>,
    student_store: Arc<dyn SheetStore>,
    cache: WorksheetCache,
    sessions: SessionStore,
}

impl AppState {
    pub(crate) fn new(
        settings: Settings,
        teacher_store: Arc<dyn SheetStore>,
        student_store: Arc<dyn SheetStore>,
        cache: WorksheetCache,
        sessions: SessionStore,
    ) -> Self {
        Self {
            inner: Arc::new(InnerState {
                settings,
                teacher_store,
                student_store,
                cache,
                sessions,
            }),
        }
    }

    pub(crate) fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    pub(crate) fn teacher_store(&self) -> &dyn SheetStore {
        self.inner.teacher_store.as_ref()
    }

    pub(crate) fn student_store(&self) -> &dyn SheetStore {
        self.inner.student_store.as_ref()
    }

    pub(crate) fn cache(&self) -> &WorksheetCache {
        &self.inner.cache
    }

    pub(crate) fn sessions(&self) -> &SessionStore {
        &self.inner.sessions
    }
}
