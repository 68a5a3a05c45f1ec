use std::collections::BTreeMap;

use super::RecordStore;
use crate::error::Result;
use crate::record::AssociateRecord;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: BTreeMap<String, AssociateRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, name: &str) -> Result<Option<AssociateRecord>> {
        Ok(self.records.get(name).cloned())
    }

    fn put(&mut self, name: &str, record: &AssociateRecord) -> Result<()> {
        self.records.insert(name.to_string(), record.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<(String, AssociateRecord)>> {
        Ok(self
            .records
            .iter()
            .map(|(name, record)| (name.clone(), record.clone()))
            .collect())
    }
}
