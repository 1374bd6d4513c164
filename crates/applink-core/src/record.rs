use crate::error::StorageError;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// One inbound request, as written to the request log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRecord {
    /// When the request arrived (UTC).
    pub timestamp: Timestamp,
    /// Request path as received, including the leading `/`.
    pub path: String,
    pub user_agent: Option<String>,
    pub client_ip: Option<String>,
}

impl RequestRecord {
    /// Creates a record stamped with the current time, truncated to the
    /// microsecond precision the log stores.
    pub fn now(
        path: impl Into<String>,
        user_agent: Option<String>,
        client_ip: Option<String>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            timestamp: Timestamp::from_microsecond(now.as_microsecond()).unwrap_or(now),
            path: path.into(),
            user_agent,
            client_ip,
        }
    }

    /// Renders the timestamp as ISO-8601 UTC with fixed microsecond
    /// precision, so stored values sort lexically in time order.
    pub fn timestamp_text(&self) -> String {
        format_timestamp(self.timestamp)
    }
}

pub fn format_timestamp(timestamp: Timestamp) -> String {
    format!("{timestamp:.6}")
}

pub fn parse_timestamp(text: &str) -> Result<Timestamp, StorageError> {
    text.parse().map_err(|e| {
        StorageError::InvalidData(format!("invalid timestamp '{text}': {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_text_has_fixed_precision() {
        let ts: Timestamp = "2024-12-24T18:30:00Z".parse().unwrap();
        assert_eq!(format_timestamp(ts), "2024-12-24T18:30:00.000000Z");
    }

    #[test]
    fn timestamp_text_round_trips_at_microseconds() {
        let ts: Timestamp = "2024-12-24T18:30:00.123456Z".parse().unwrap();
        let parsed = parse_timestamp(&format_timestamp(ts)).unwrap();
        assert_eq!(parsed, ts);
    }

    #[test]
    fn now_survives_storage_precision() {
        let record = RequestRecord::now("/promo", None, None);
        let parsed = parse_timestamp(&record.timestamp_text()).unwrap();
        assert_eq!(parsed, record.timestamp);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(StorageError::InvalidData(_))
        ));
    }
}
