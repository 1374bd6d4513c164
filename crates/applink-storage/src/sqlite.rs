use std::path::Path;
use std::time::Duration;

use applink_core::error::{Result, StorageError};
use applink_core::log::RequestLog;
use applink_core::record::{parse_timestamp, RequestRecord};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use tracing::debug;

const MAX_CONNECTIONS: u32 = 4;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite primary result codes that mean another connection holds the lock.
const SQLITE_BUSY: i32 = 5;
const SQLITE_LOCKED: i32 = 6;

/// SQLite implementation of the request log.
///
/// Connections are pooled and reused across requests. The database runs in
/// WAL mode with a busy timeout, so concurrent writers queue on SQLite's own
/// lock instead of failing.
#[derive(Debug, Clone)]
pub struct SqliteRequestLog {
    pool: SqlitePool,
}

impl SqliteRequestLog {
    /// Creates a log from an existing pool. The table is not created.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens (creating if missing) the database at `path` and ensures the
    /// `requests` table exists.
    pub async fn connect(path: impl AsRef<Path>) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .map_err(map_sqlx_error)?;

        let log = Self::new(pool);
        log.initialize().await?;
        debug!(path = %path.as_ref().display(), "opened request log");
        Ok(log)
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    let primary_code = err
        .as_database_error()
        .and_then(|e| e.code())
        .and_then(|code| code.parse::<i32>().ok())
        .map(|code| code & 0xff);
    if matches!(primary_code, Some(SQLITE_BUSY | SQLITE_LOCKED)) {
        return StorageError::Timeout(message);
    }

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Configuration(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl RequestLog for SqliteRequestLog {
    async fn initialize(&self) -> Result<()> {
        sqlx::query(include_str!("../ddl/sqlite/requests.sql"))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn record(&self, record: RequestRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO requests (timestamp, path, user_agent, ip)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(record.timestamp_text())
        .bind(record.path)
        .bind(record.user_agent)
        .bind(record.client_ip)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn recent(&self, limit: u32) -> Result<Vec<RequestRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT timestamp, path, user_agent, ip
            FROM (
                SELECT rowid AS seq, timestamp, path, user_agent, ip
                FROM requests
                ORDER BY timestamp DESC, rowid DESC
                LIMIT ?
            )
            ORDER BY timestamp ASC, seq ASC
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.iter()
            .map(|row| -> Result<RequestRecord> {
                let timestamp: String = row.try_get("timestamp").map_err(map_sqlx_error)?;
                Ok(RequestRecord {
                    timestamp: parse_timestamp(&timestamp)?,
                    path: row.try_get("path").map_err(map_sqlx_error)?,
                    user_agent: row.try_get("user_agent").map_err(map_sqlx_error)?,
                    client_ip: row.try_get("ip").map_err(map_sqlx_error)?,
                })
            })
            .collect()
    }

    async fn purge(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM requests")
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}
