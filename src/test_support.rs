use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, Response},
    Router,
};
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use crate::api;
use crate::core::sessions::SessionStore;
use crate::core::state::AppState;
use crate::core::config::Settings;
use crate::services::cache::WorksheetCache;
use crate::store::{Record, SheetStore, StoreError};

pub(crate) struct TestContext {
    pub(crate) app: Router,
    pub(crate) teacher_store: InMemorySheets,
    pub(crate) student_store: InMemorySheets,
    _guard: OwnedMutexGuard<()>,
}

pub(crate) async fn env_lock() -> OwnedMutexGuard<()> {
    static LOCK: OnceLock<Arc<Mutex<()>>> = OnceLock::new();
    let lock = LOCK.get_or_init(|| Arc::new(Mutex::new(()))).clone();
    lock.lock_owned().await
}

pub(crate) fn set_test_env() {
    std::env::set_var("CLASSPORTAL_ENV", "test");
    std::env::set_var("CLASSPORTAL_STRICT_CONFIG", "0");
    std::env::set_var("PROMETHEUS_ENABLED", "0");
    std::env::set_var("CACHE_FRESHNESS_SECONDS", "5");
    std::env::remove_var("BACKEND_CORS_ORIGINS");
    std::env::remove_var("STORE_SERVICE_ACCOUNT_JSON");
    std::env::remove_var("STORE_SERVICE_ACCOUNT_FILE");
}

/// In-memory rendition of the worksheet store contract. Row 0 of every
/// worksheet is the header; the mutation helpers let tests change the backing
/// data underneath a running app.
#[derive(Clone)]
pub(crate) struct InMemorySheets {
    document: String,
    worksheets: Arc<RwLock<HashMap<String, Vec<Vec<String>>>>>,
}

impl InMemorySheets {
    pub(crate) fn new(document: &str) -> Self {
        Self { document: document.to_string(), worksheets: Arc::new(RwLock::new(HashMap::new())) }
    }

    pub(crate) async fn insert_worksheet(&self, name: &str, rows: Vec<Vec<&str>>) {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.to_string()).collect())
            .collect();
        let mut worksheets = self.worksheets.write().await;
        worksheets.insert(name.to_string(), rows);
    }

    pub(crate) async fn push_row(&self, name: &str, row: Vec<&str>) {
        let mut worksheets = self.worksheets.write().await;
        let worksheet = worksheets.entry(name.to_string()).or_default();
        worksheet.push(row.into_iter().map(|cell| cell.to_string()).collect());
    }

    pub(crate) async fn set_cell(&self, name: &str, row: usize, column: usize, value: &str) {
        let mut worksheets = self.worksheets.write().await;
        let worksheet = worksheets.get_mut(name).expect("worksheet");
        worksheet[row][column] = value.to_string();
    }

    pub(crate) async fn rows(&self, name: &str) -> Vec<Vec<String>> {
        let worksheets = self.worksheets.read().await;
        worksheets.get(name).cloned().unwrap_or_default()
    }

    pub(crate) async fn row_count(&self, name: &str) -> usize {
        self.rows(name).await.len()
    }
}

#[async_trait]
impl SheetStore for InMemorySheets {
    fn document(&self) -> &str {
        &self.document
    }

    async fn worksheet_records(&self, worksheet: &str) -> Result<Vec<Record>, StoreError> {
        let worksheets = self.worksheets.read().await;
        let rows = worksheets
            .get(worksheet)
            .ok_or_else(|| StoreError::WorksheetNotFound(worksheet.to_string()))?;

        let Some((header, data)) = rows.split_first() else {
            return Ok(Vec::new());
        };
        Ok(data.iter().map(|row| Record::from_header(header, row)).collect())
    }

    async fn find_row(
        &self,
        worksheet: &str,
        value: &str,
    ) -> Result<Option<Vec<String>>, StoreError> {
        let worksheets = self.worksheets.read().await;
        let rows = worksheets
            .get(worksheet)
            .ok_or_else(|| StoreError::WorksheetNotFound(worksheet.to_string()))?;

        Ok(rows.iter().find(|row| row.iter().any(|cell| cell == value)).cloned())
    }

    async fn append_row(&self, worksheet: &str, row: &[String]) -> Result<(), StoreError> {
        let mut worksheets = self.worksheets.write().await;
        let rows = worksheets
            .get_mut(worksheet)
            .ok_or_else(|| StoreError::WorksheetNotFound(worksheet.to_string()))?;

        rows.push(row.to_vec());
        Ok(())
    }

    async fn health(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

pub(crate) async fn setup_test_context() -> TestContext {
    let guard = env_lock().await;
    set_test_env();

    let settings = Settings::load().expect("settings");

    let teacher_store = InMemorySheets::new(&settings.store().teacher_document);
    let student_store = InMemorySheets::new(&settings.store().student_document);
    seed_teacher_document(&teacher_store).await;
    seed_student_document(&student_store).await;

    let cache = WorksheetCache::new(settings.cache().freshness_window());
    let state = AppState::new(
        settings,
        Arc::new(teacher_store.clone()),
        Arc::new(student_store.clone()),
        cache,
        SessionStore::new(),
    );
    let app = api::router::router(state);

    TestContext { app, teacher_store, student_store, _guard: guard }
}

pub(crate) async fn seed_teacher_document(store: &InMemorySheets) {
    store
        .insert_worksheet(
            "Teachers_Main",
            vec![
                vec!["Code", "Name", "Password"],
                vec!["T1", "Dr. Salma", "abc"],
                vec![" T2 ", "Dr. Nabil", " xyz "],
            ],
        )
        .await;
    store
        .insert_worksheet(
            "Subjects_Data",
            vec![
                vec!["Teacher_Code", "Subject_Name", "Year_Level"],
                vec!["T1", "Mathematics", "1"],
                vec![" T1 ", "Physics", "2"],
            ],
        )
        .await;
    store.insert_worksheet("S1", vec![vec!["Result", "Grade", "Date", "Note"]]).await;
}

pub(crate) async fn seed_student_document(store: &InMemorySheets) {
    store
        .insert_worksheet(
            "Students",
            vec![
                vec!["Code", "Name", "Year", "Total_Fees", "Paid_Fees", "Password"],
                vec!["S100", "Omar Hassan", "1", "5000", "3000", "pw100"],
                vec!["S200", "Lina Adel", "2", "5000", "5000", ""],
            ],
        )
        .await;
    store
        .insert_worksheet(
            "Materials",
            vec![
                vec!["Title", "Link", "Type"],
                vec!["Syllabus", "http://x", "Global"],
                vec!["Lecture 1", "http://y", "Subject"],
                vec!["Draft notes", "http://z", "Draft"],
            ],
        )
        .await;
    store
        .insert_worksheet(
            "Grades",
            vec![
                vec!["StudentID", "Subject", "Score", "Status", "Date"],
                vec!["S100", "Mathematics", "85", "ناجح", "2026-01-10"],
                vec!["S999", "Mathematics", "40", "راسب", "2026-01-10"],
            ],
        )
        .await;
}

pub(crate) fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    }
}

pub(crate) async fn read_json(response: Response<Body>) -> serde_json::Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    if body.is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_slice(&body).expect("json body")
}

pub(crate) async fn login(app: &Router, portal: &str, code: &str, password: &str) -> String {
    let response = tower::ServiceExt::oneshot(
        app.clone(),
        json_request(
            Method::POST,
            &format!("/api/v1/{portal}/login"),
            None,
            Some(serde_json::json!({ "code": code, "password": password })),
        ),
    )
    .await
    .expect("login response");

    let status = response.status();
    let json = read_json(response).await;
    assert!(status.is_success(), "login failed: {json}");
    json["session_token"].as_str().expect("session token").to_string()
}
