use applink_core::error::Result;
use applink_core::log::RequestLog;
use applink_core::record::RequestRecord;
use async_trait::async_trait;
use parking_lot::Mutex;

/// In-memory request log.
///
/// Records live for the lifetime of the process. Used when no database is
/// configured and as a test double.
#[derive(Debug, Default)]
pub struct InMemoryRequestLog {
    records: Mutex<Vec<RequestRecord>>,
}

impl InMemoryRequestLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Returns a copy of every record in insertion order.
    pub fn snapshot(&self) -> Vec<RequestRecord> {
        self.records.lock().clone()
    }
}

#[async_trait]
impl RequestLog for InMemoryRequestLog {
    async fn initialize(&self) -> Result<()> {
        Ok(())
    }

    async fn record(&self, record: RequestRecord) -> Result<()> {
        self.records.lock().push(record);
        Ok(())
    }

    async fn recent(&self, limit: u32) -> Result<Vec<RequestRecord>> {
        let mut records = self.snapshot();
        // Stable sort keeps insertion order between equal timestamps.
        records.sort_by_key(|record| record.timestamp);

        let skip = records.len().saturating_sub(limit as usize);
        Ok(records.split_off(skip))
    }

    async fn purge(&self) -> Result<u64> {
        let mut records = self.records.lock();
        let removed = records.len() as u64;
        records.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;

    fn record_at(ts: &str, path: &str) -> RequestRecord {
        RequestRecord {
            timestamp: ts.parse::<Timestamp>().unwrap(),
            path: path.to_string(),
            user_agent: None,
            client_ip: None,
        }
    }

    #[tokio::test]
    async fn record_and_read_back() {
        let log = InMemoryRequestLog::new();
        let record = RequestRecord {
            timestamp: "2024-12-24T18:30:00.5Z".parse().unwrap(),
            path: "/promoXmas".to_string(),
            user_agent: Some("Mozilla/5.0".to_string()),
            client_ip: Some("203.0.113.7".to_string()),
        };

        log.record(record.clone()).await.unwrap();

        assert_eq!(log.recent(1).await.unwrap(), vec![record]);
    }

    #[tokio::test]
    async fn recent_returns_newest_in_ascending_order() {
        let log = InMemoryRequestLog::new();
        log.record(record_at("2024-01-03T00:00:00Z", "/c")).await.unwrap();
        log.record(record_at("2024-01-01T00:00:00Z", "/a")).await.unwrap();
        log.record(record_at("2024-01-02T00:00:00Z", "/b")).await.unwrap();

        let paths: Vec<_> = log
            .recent(2)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.path)
            .collect();
        assert_eq!(paths, ["/b", "/c"]);
    }

    #[tokio::test]
    async fn recent_with_large_limit_returns_everything() {
        let log = InMemoryRequestLog::new();
        log.record(record_at("2024-01-01T00:00:00Z", "/a")).await.unwrap();

        assert_eq!(log.recent(10).await.unwrap().len(), 1);
        assert!(log.recent(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn purge_clears_records() {
        let log = InMemoryRequestLog::new();
        log.record(record_at("2024-01-01T00:00:00Z", "/a")).await.unwrap();
        log.record(record_at("2024-01-02T00:00:00Z", "/b")).await.unwrap();

        assert_eq!(log.purge().await.unwrap(), 2);
        assert!(log.is_empty());
        assert_eq!(log.purge().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn initialize_keeps_records() {
        let log = InMemoryRequestLog::new();
        log.record(record_at("2024-01-01T00:00:00Z", "/a")).await.unwrap();

        log.initialize().await.unwrap();
        log.initialize().await.unwrap();

        assert_eq!(log.len(), 1);
    }
}
