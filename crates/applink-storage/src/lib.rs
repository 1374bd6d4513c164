pub mod memory;
pub mod sqlite;

pub use applink_core::log::RequestLog;
pub use applink_core::{RequestRecord, StorageError};
pub use memory::InMemoryRequestLog;
pub use sqlite::SqliteRequestLog;
