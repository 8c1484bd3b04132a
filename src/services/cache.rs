use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::store::Record;

/// Time-bounded cache over worksheet reads, keyed by document, worksheet and
/// call argument. Entries are returned unchanged until the freshness window
/// lapses; writes never invalidate them, staleness up to the window is an
/// accepted tradeoff.
#[derive(Clone)]
pub(crate) struct WorksheetCache {
    window: Duration,
    entries: Arc<RwLock<HashMap<CacheKey, CacheEntry>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    document: String,
    worksheet: String,
    argument: String,
}

#[derive(Clone)]
struct CacheEntry {
    fetched_at: Instant,
    records: Arc<Vec<Record>>,
}

impl WorksheetCache {
    pub(crate) fn new(window: Duration) -> Self {
        Self { window, entries: Arc::new(RwLock::new(HashMap::new())) }
    }

    pub(crate) async fn get(
        &self,
        document: &str,
        worksheet: &str,
        argument: &str,
    ) -> Option<Arc<Vec<Record>>> {
        let entries = self.entries.read().await;
        let entry = entries.get(&CacheKey {
            document: document.to_string(),
            worksheet: worksheet.to_string(),
            argument: argument.to_string(),
        })?;

        if entry.fetched_at.elapsed() < self.window {
            Some(entry.records.clone())
        } else {
            None
        }
    }

    pub(crate) async fn put(
        &self,
        document: &str,
        worksheet: &str,
        argument: &str,
        records: Vec<Record>,
    ) -> Arc<Vec<Record>> {
        let records = Arc::new(records);
        let mut entries = self.entries.write().await;
        entries.insert(
            CacheKey {
                document: document.to_string(),
                worksheet: worksheet.to_string(),
                argument: argument.to_string(),
            },
            CacheEntry { fetched_at: Instant::now(), records: records.clone() },
        );
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str) -> Record {
        Record::from_header(&["Code".to_string()], &[code.to_string()])
    }

    #[tokio::test]
    async fn entry_is_served_within_the_window() {
        let cache = WorksheetCache::new(Duration::from_secs(5));
        cache.put("doc", "Grades", "S100", vec![record("S100")]).await;

        let cached = cache.get("doc", "Grades", "S100").await.expect("cached");
        assert_eq!(cached.len(), 1);
    }

    #[tokio::test]
    async fn entry_expires_after_the_window() {
        let cache = WorksheetCache::new(Duration::from_millis(20));
        cache.put("doc", "Grades", "S100", vec![record("S100")]).await;

        tokio::time::sleep(Duration::from_millis(40)).await;
        assert!(cache.get("doc", "Grades", "S100").await.is_none());
    }

    #[tokio::test]
    async fn entries_are_keyed_by_argument() {
        let cache = WorksheetCache::new(Duration::from_secs(5));
        cache.put("doc", "Grades", "S100", vec![record("S100")]).await;

        assert!(cache.get("doc", "Grades", "S200").await.is_none());
        assert!(cache.get("other-doc", "Grades", "S100").await.is_none());
    }

    #[tokio::test]
    async fn zero_window_disables_reuse() {
        let cache = WorksheetCache::new(Duration::ZERO);
        cache.put("doc", "Grades", "S100", vec![record("S100")]).await;

        assert!(cache.get("doc", "Grades", "S100").await.is_none());
    }
}
