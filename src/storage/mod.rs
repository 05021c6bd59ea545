//! Device-local key-value persistence.
//!
//! `KeyValueStore` is the raw contract; `records` layers the typed survey flag
//! and daily selection record on top of it.

mod memory;
mod migrations;
pub mod records;
mod sqlite;

use anyhow::Result;
use async_trait::async_trait;

pub use memory::MemoryStore;
pub use records::{DailySelection, SelectionRecords};
pub use sqlite::SqliteStore;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
