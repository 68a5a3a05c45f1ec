//! Record storage behind a small get/put/list interface.
//!
//! - `MemoryStore` - in-process only
//! - `JsonFileStore` - one JSON document holding every record
//! - `SqliteStore` - embedded database (feature `sqlite`)

mod json_file;
mod memory;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::record::AssociateRecord;

/// Associate records keyed by name. Writes are last-write-wins.
pub trait RecordStore {
    fn get(&self, name: &str) -> Result<Option<AssociateRecord>>;

    fn put(&mut self, name: &str, record: &AssociateRecord) -> Result<()>;

    /// All records, sorted by key
    fn list(&self) -> Result<Vec<(String, AssociateRecord)>>;

    fn contains(&self, name: &str) -> Result<bool> {
        Ok(self.get(name)?.is_some())
    }

    fn names(&self) -> Result<Vec<String>> {
        Ok(self.list()?.into_iter().map(|(name, _)| name).collect())
    }
}

impl<S: RecordStore + ?Sized> RecordStore for Box<S> {
    fn get(&self, name: &str) -> Result<Option<AssociateRecord>> {
        (**self).get(name)
    }

    fn put(&mut self, name: &str, record: &AssociateRecord) -> Result<()> {
        (**self).put(name, record)
    }

    fn list(&self) -> Result<Vec<(String, AssociateRecord)>> {
        (**self).list()
    }
}
