use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::{debug, warn};

use super::RecordStore;
use crate::error::Result;
use crate::grid::{ScoreGrid, Totals};
use crate::record::{AssociateRecord, Profile};

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS associates (
    key         TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    mobile      TEXT NOT NULL DEFAULT '',
    email       TEXT NOT NULL DEFAULT '',
    manager     TEXT NOT NULL DEFAULT '',
    scores_json TEXT NOT NULL,
    totals_json TEXT NOT NULL,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
);
";

const SELECT_COLUMNS: &str =
    "key, name, mobile, email, manager, scores_json, totals_json, created_at, updated_at";

/// One relational row per associate, grid and totals stored as JSON text
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        debug!("Opened SQLite store at {}", path.display());
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self { conn })
    }
}

/// Raw column values; JSON and timestamps are decoded outside the row callback
struct StoredRow {
    key: String,
    profile: Profile,
    scores_json: String,
    totals_json: String,
    created_at: String,
    updated_at: String,
}

impl StoredRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            key: row.get(0)?,
            profile: Profile {
                name: row.get(1)?,
                mobile: row.get(2)?,
                email: row.get(3)?,
                manager: row.get(4)?,
            },
            scores_json: row.get(5)?,
            totals_json: row.get(6)?,
            created_at: row.get(7)?,
            updated_at: row.get(8)?,
        })
    }

    fn into_record(self) -> Result<(String, AssociateRecord)> {
        let scores: ScoreGrid = serde_json::from_str(&self.scores_json)?;
        let totals: Totals = serde_json::from_str(&self.totals_json)?;
        let record = AssociateRecord {
            profile: self.profile,
            scores,
            totals,
            created_at: parse_timestamp(&self.key, "created_at", &self.created_at),
            updated_at: parse_timestamp(&self.key, "updated_at", &self.updated_at),
        };
        Ok((self.key, record))
    }
}

/// RFC3339 column value; unparsable text falls back to now
fn parse_timestamp(key: &str, column: &str, value: &str) -> DateTime<Utc> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(t) => t.with_timezone(&Utc),
        Err(e) => {
            warn!("Bad {} {:?} for associate {}: {}, using current time", column, value, key, e);
            Utc::now()
        }
    }
}

impl RecordStore for SqliteStore {
    fn get(&self, name: &str) -> Result<Option<AssociateRecord>> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT {SELECT_COLUMNS} FROM associates WHERE key = ?1"),
                params![name],
                StoredRow::from_row,
            )
            .optional()?;

        match row {
            Some(row) => Ok(Some(row.into_record()?.1)),
            None => Ok(None),
        }
    }

    fn put(&mut self, name: &str, record: &AssociateRecord) -> Result<()> {
        self.conn.execute(
            "INSERT INTO associates (
               key, name, mobile, email, manager, scores_json, totals_json, created_at, updated_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
             ON CONFLICT(key) DO UPDATE SET
               name = excluded.name,
               mobile = excluded.mobile,
               email = excluded.email,
               manager = excluded.manager,
               scores_json = excluded.scores_json,
               totals_json = excluded.totals_json,
               updated_at = excluded.updated_at",
            params![
                name,
                record.profile.name,
                record.profile.mobile,
                record.profile.email,
                record.profile.manager,
                serde_json::to_string(&record.scores)?,
                serde_json::to_string(&record.totals)?,
                record.created_at.to_rfc3339(),
                record.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<(String, AssociateRecord)>> {
        let mut statement = self
            .conn
            .prepare(&format!("SELECT {SELECT_COLUMNS} FROM associates ORDER BY key"))?;
        let rows = statement.query_map([], StoredRow::from_row)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?.into_record()?);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Level, Segment};

    #[test]
    fn test_put_and_get() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let mut record = AssociateRecord::new("Alex Tan");
        record.profile.email = "alex@example.com".to_string();
        record.scores.set_cell(Level::Market, Segment::Referral, "6");
        record.refresh();

        store.put("Alex Tan", &record).unwrap();

        let loaded = store.get("Alex Tan").unwrap().unwrap();
        assert_eq!(loaded.profile, record.profile);
        assert_eq!(loaded.scores, record.scores);
        assert_eq!(loaded.totals.get(Segment::Referral), 6);
        assert!(store.get("Nobody").unwrap().is_none());
    }

    #[test]
    fn test_upsert_keeps_created_at() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let mut record = AssociateRecord::new("Alex");
        store.put("Alex", &record).unwrap();
        let created = store.get("Alex").unwrap().unwrap().created_at;

        record.created_at = Utc::now();
        record.profile.manager = "Lee".to_string();
        store.put("Alex", &record).unwrap();

        let loaded = store.get("Alex").unwrap().unwrap();
        assert_eq!(loaded.profile.manager, "Lee");
        assert_eq!(loaded.created_at, created);
    }

    #[test]
    fn test_list_sorted_by_key() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        for name in ["Zoe", "Alex"] {
            store.put(name, &AssociateRecord::new(name)).unwrap();
        }
        assert_eq!(store.names().unwrap(), vec!["Alex", "Zoe"]);
    }

    #[test]
    fn test_bad_timestamps_still_load() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store
            .conn
            .execute(
                "INSERT INTO associates (key, name, scores_json, totals_json, created_at, updated_at)
                 VALUES ('Alex', 'Alex', '{}', '{}', 'yesterday', '')",
                [],
            )
            .unwrap();

        let before = Utc::now();
        let record = store.get("Alex").unwrap().unwrap();
        assert!(record.created_at >= before);
        assert_eq!(record.scores.filled_count(), 0);

        // Upserts leave the stored created_at text alone
        store.put("Alex", &record).unwrap();
        let created: String = store
            .conn
            .query_row("SELECT created_at FROM associates WHERE key = 'Alex'", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(created, "yesterday");
    }
}
