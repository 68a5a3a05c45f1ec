use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, warn};

use super::RecordStore;
use crate::error::Result;
use crate::record::AssociateRecord;

/// Every record in one pretty-printed JSON object keyed by associate name.
///
/// The file is read once when the store is opened and rewritten in full on
/// each `put`. Entries that do not parse as records are kept verbatim and
/// written back untouched.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    records: BTreeMap<String, AssociateRecord>,
    unreadable: BTreeMap<String, Value>,
    /// The file on disk could not be fully read; copy it aside before the first write
    backup_pending: bool,
}

/// Parsed file contents
#[derive(Debug, Default)]
struct Loaded {
    records: BTreeMap<String, AssociateRecord>,
    unreadable: BTreeMap<String, Value>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing, unreadable or corrupt file
    /// yields an empty store instead of an error, and a record that fails to
    /// parse is skipped without hiding the others.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let (loaded, backup_pending) = match Self::read_records(&path) {
            Ok(Some(loaded)) => {
                info!("Loaded {} associates from {}", loaded.records.len(), path.display());
                if !loaded.unreadable.is_empty() {
                    warn!(
                        "Skipped {} unreadable associates in {}",
                        loaded.unreadable.len(),
                        path.display()
                    );
                }
                let pending = !loaded.unreadable.is_empty();
                (loaded, pending)
            }
            Ok(None) => {
                debug!("No store at {}, starting empty", path.display());
                (Loaded::default(), false)
            }
            Err(e) => {
                warn!("Failed to load store {}: {}, starting empty", path.display(), e);
                (Loaded::default(), true)
            }
        };

        Self {
            path,
            records: loaded.records,
            unreadable: loaded.unreadable,
            backup_pending,
        }
    }

    fn read_records(path: &Path) -> Result<Option<Loaded>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        let raw: BTreeMap<String, Value> = serde_json::from_str(&content)?;

        let mut loaded = Loaded::default();
        for (name, value) in raw {
            match serde_json::from_value::<AssociateRecord>(value.clone()) {
                Ok(record) => {
                    loaded.records.insert(name, record);
                }
                Err(e) => {
                    warn!("Skipping unreadable associate {:?}: {}", name, e);
                    loaded.unreadable.insert(name, value);
                }
            }
        }
        Ok(Some(loaded))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where the original file is copied before the first rewrite after a failed load
    pub fn backup_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".bak");
        PathBuf::from(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Names of stored entries that could not be read as records
    pub fn unreadable_names(&self) -> impl Iterator<Item = &str> {
        self.unreadable.keys().map(String::as_str)
    }

    fn save(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        if self.backup_pending && self.path.exists() {
            let backup = self.backup_path();
            fs::copy(&self.path, &backup)?;
            warn!("Copied unreadable store {} to {}", self.path.display(), backup.display());
        }
        self.backup_pending = false;

        let mut document = self.unreadable.clone();
        for (name, record) in &self.records {
            document.insert(name.clone(), serde_json::to_value(record)?);
        }
        fs::write(&self.path, serde_json::to_string_pretty(&document)?)?;
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn get(&self, name: &str) -> Result<Option<AssociateRecord>> {
        Ok(self.records.get(name).cloned())
    }

    fn put(&mut self, name: &str, record: &AssociateRecord) -> Result<()> {
        if self.unreadable.remove(name).is_some() {
            warn!("Replacing unreadable associate {:?}", name);
        }
        self.records.insert(name.to_string(), record.clone());
        self.save()
    }

    fn list(&self) -> Result<Vec<(String, AssociateRecord)>> {
        Ok(self
            .records
            .iter()
            .map(|(name, record)| (name.clone(), record.clone()))
            .collect())
    }
}
