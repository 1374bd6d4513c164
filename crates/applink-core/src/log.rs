use crate::error::Result;
use crate::record::RequestRecord;
use async_trait::async_trait;

/// Append-only store of inbound requests.
///
/// Records are inserted and never updated. Implementations must accept
/// concurrent writers; serialization is left to the backend.
#[async_trait]
pub trait RequestLog: Send + Sync + 'static {
    /// Creates the backing store if it is missing.
    ///
    /// Safe to call any number of times; existing records are kept.
    async fn initialize(&self) -> Result<()>;

    /// Appends one record.
    async fn record(&self, record: RequestRecord) -> Result<()>;

    /// Returns the `limit` most recent records, oldest first.
    async fn recent(&self, limit: u32) -> Result<Vec<RequestRecord>>;

    /// Deletes every record, returning how many were removed.
    async fn purge(&self) -> Result<u64>;
}
