use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Profile;
use crate::grid::{ScoreGrid, Totals};

/// One associate's profiling map as persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociateRecord {
    pub profile: Profile,
    #[serde(default)]
    pub scores: ScoreGrid,
    /// Snapshot taken at the last save; use `scores.compute_totals()` for live values
    #[serde(default)]
    pub totals: Totals,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl AssociateRecord {
    pub fn new(name: &str) -> Self {
        let now = Utc::now();
        Self {
            profile: Profile::new(name),
            scores: ScoreGrid::new(),
            totals: Totals::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Recompute the totals snapshot from the grid and bump `updated_at`
    pub fn refresh(&mut self) {
        self.totals = self.scores.compute_totals();
        self.updated_at = Utc::now();
    }

    pub fn is_complete(&self) -> bool {
        self.scores.is_grid_complete()
    }
}

/// The `{profile, scores, totals}` mapping written by the JSON export
#[derive(Debug, Clone, Serialize)]
pub struct MappingExport<'a> {
    pub profile: &'a Profile,
    pub scores: &'a ScoreGrid,
    pub totals: Totals,
}

impl<'a> MappingExport<'a> {
    pub fn from_record(record: &'a AssociateRecord) -> Self {
        Self {
            profile: &record.profile,
            scores: &record.scores,
            totals: record.scores.compute_totals(),
        }
    }
}
