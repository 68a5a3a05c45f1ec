//! Form session: the open associate plus the store it is saved to.

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::grid::{CellInput, CellUpdate, Level, Segment, Totals};
use crate::record::{AssociateRecord, ProfileUpdate};
use crate::store::RecordStore;

/// Open associate record, keyed by the name it was opened with
#[derive(Debug, Clone)]
struct OpenRecord {
    key: String,
    record: AssociateRecord,
}

/// Drives one editing session against an injected store.
///
/// Edits stay in memory until `save` is called, except that opening a name
/// for the first time stores the fresh record right away.
pub struct FormSession<S: RecordStore> {
    store: S,
    current: Option<OpenRecord>,
}

impl<S: RecordStore> FormSession<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load `name`, creating and storing an empty record on first use
    pub fn open(&mut self, name: &str) -> Result<&AssociateRecord> {
        let key = name.trim();
        if key.is_empty() {
            return Err(Error::EmptyName);
        }

        let record = match self.store.get(key)? {
            Some(record) => record,
            None => {
                let record = AssociateRecord::new(key);
                self.store.put(key, &record)?;
                info!("Created associate {}", key);
                record
            }
        };

        let open = self.current.insert(OpenRecord {
            key: key.to_string(),
            record,
        });
        Ok(&open.record)
    }

    pub fn key(&self) -> Option<&str> {
        self.current.as_ref().map(|open| open.key.as_str())
    }

    pub fn current(&self) -> Option<&AssociateRecord> {
        self.current.as_ref().map(|open| &open.record)
    }

    fn current_mut(&mut self) -> Result<&mut OpenRecord> {
        self.current.as_mut().ok_or(Error::NoAssociate)
    }

    pub fn set_cell(
        &mut self,
        level: Level,
        segment: Segment,
        input: impl CellInput,
    ) -> Result<CellUpdate> {
        let open = self.current_mut()?;
        let update = open.record.scores.set_cell(level, segment, input);
        log_update(&open.key, &update);
        Ok(update)
    }

    pub fn set_cell_by_key(
        &mut self,
        level: &str,
        segment: &str,
        input: impl CellInput,
    ) -> Result<CellUpdate> {
        let level = Level::from_key(level)?;
        let segment = Segment::from_key(segment)?;
        self.set_cell(level, segment, input)
    }

    pub fn set_row<I: CellInput>(&mut self, level: Level, inputs: &[I]) -> Result<Vec<CellUpdate>> {
        let open = self.current_mut()?;
        let updates = open.record.scores.set_row(level, inputs)?;
        for update in &updates {
            log_update(&open.key, update);
        }
        Ok(updates)
    }

    pub fn update_profile(&mut self, update: &ProfileUpdate) -> Result<()> {
        let open = self.current_mut()?;
        update.apply(&mut open.record.profile);
        Ok(())
    }

    /// Live totals of the open grid
    pub fn totals(&self) -> Result<Totals> {
        self.current()
            .map(|record| record.scores.compute_totals())
            .ok_or(Error::NoAssociate)
    }

    /// Snapshot totals and write the open record to the store
    pub fn save(&mut self) -> Result<()> {
        let open = self.current.as_mut().ok_or(Error::NoAssociate)?;
        open.record.refresh();
        self.store.put(&open.key, &open.record)?;
        info!("Saved associate {}", open.key);
        Ok(())
    }

    pub fn associates(&self) -> Result<Vec<(String, AssociateRecord)>> {
        self.store.list()
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn log_update(key: &str, update: &CellUpdate) {
    if update.rejected {
        warn!(
            "{}: {}/{} cleared, only numbers 1-8 are allowed",
            key, update.level, update.segment
        );
    }
    for segment in &update.cleared {
        warn!(
            "{}: {}/{} cleared, each number can be used once per level",
            key, update.level, segment
        );
    }
}
