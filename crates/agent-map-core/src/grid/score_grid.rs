use std::collections::BTreeMap;

use serde::de::{Deserializer, IgnoredAny};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};
use tracing::{debug, warn};

use super::key::resolve_keys;
use super::{CellInput, Level, Rank, Segment, Totals};
use crate::error::{Error, Result};

type Row = [Option<Rank>; Segment::COUNT];

/// Outcome of writing one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellUpdate {
    pub level: Level,
    pub segment: Segment,
    /// Value held by the cell once the row has been re-validated
    pub stored: Option<Rank>,
    /// Input was neither blank nor a valid rank, so the cell was cleared
    pub rejected: bool,
    /// Cells cleared because they repeated an earlier value in the row
    pub cleared: Vec<Segment>,
}

impl CellUpdate {
    pub fn has_warning(&self) -> bool {
        self.rejected || !self.cleared.is_empty()
    }
}

/// 9x8 table of optional ranks. Non-empty values within a row are always
/// pairwise distinct once a mutating call returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreGrid {
    cells: [Row; Level::COUNT],
}

impl ScoreGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, level: Level, segment: Segment) -> Option<Rank> {
        self.cells[level.index()][segment.index()]
    }

    /// Cells of one level in fixed segment order
    pub fn row(&self, level: Level) -> impl Iterator<Item = (Segment, Option<Rank>)> + '_ {
        let row = &self.cells[level.index()];
        Segment::iter().map(move |segment| (segment, row[segment.index()]))
    }

    /// Write a cell and re-validate its row.
    ///
    /// Invalid input clears the cell instead of failing.
    pub fn set_cell(&mut self, level: Level, segment: Segment, input: impl CellInput) -> CellUpdate {
        let rank = input.to_rank();
        let rejected = rank.is_none() && !input.is_blank();
        if rejected {
            debug!("Clearing {}/{}: input is not a rank 1-8", level, segment);
        }
        self.cells[level.index()][segment.index()] = rank;
        let cleared = self.validate_row(level);

        CellUpdate {
            level,
            segment,
            stored: self.get(level, segment),
            rejected,
            cleared,
        }
    }

    /// `set_cell` with textual keys (index or name)
    pub fn set_cell_by_key(
        &mut self,
        level: &str,
        segment: &str,
        input: impl CellInput,
    ) -> Result<CellUpdate> {
        let level = Level::from_key(level)?;
        let segment = Segment::from_key(segment)?;
        Ok(self.set_cell(level, segment, input))
    }

    /// Replace a whole row at once, then validate it
    pub fn set_row<I: CellInput>(&mut self, level: Level, inputs: &[I]) -> Result<Vec<CellUpdate>> {
        if inputs.len() != Segment::COUNT {
            return Err(Error::RowLength {
                expected: Segment::COUNT,
                actual: inputs.len(),
            });
        }

        let mut rejected = [false; Segment::COUNT];
        for (segment, input) in Segment::iter().zip(inputs) {
            let rank = input.to_rank();
            rejected[segment.index()] = rank.is_none() && !input.is_blank();
            self.cells[level.index()][segment.index()] = rank;
        }
        let cleared = self.validate_row(level);

        Ok(Segment::iter()
            .map(|segment| CellUpdate {
                level,
                segment,
                stored: self.get(level, segment),
                rejected: rejected[segment.index()],
                cleared: cleared.iter().copied().filter(|&s| s == segment).collect(),
            })
            .collect())
    }

    /// Keep the first occurrence of each value scanning left to right and
    /// clear later duplicates. Returns the cleared segments.
    pub fn validate_row(&mut self, level: Level) -> Vec<Segment> {
        let row = &mut self.cells[level.index()];
        let mut seen = [false; Rank::MAX as usize + 1];
        let mut cleared = Vec::new();

        for segment in Segment::iter() {
            let cell = &mut row[segment.index()];
            if let Some(rank) = *cell {
                let slot = &mut seen[rank.value() as usize];
                if *slot {
                    debug!("Clearing duplicate {} at {}/{}", rank, level, segment);
                    *cell = None;
                    cleared.push(segment);
                } else {
                    *slot = true;
                }
            }
        }

        cleared
    }

    /// Validate every row, e.g. after loading stored data
    pub fn validate_all(&mut self) -> Vec<(Level, Segment)> {
        Level::iter()
            .flat_map(|level| {
                self.validate_row(level)
                    .into_iter()
                    .map(move |segment| (level, segment))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// True when the row holds exactly the ranks 1 through 8
    pub fn is_row_complete(&self, level: Level) -> bool {
        let mut seen = [false; Rank::MAX as usize + 1];
        for cell in &self.cells[level.index()] {
            match cell {
                Some(rank) if !seen[rank.value() as usize] => seen[rank.value() as usize] = true,
                _ => return false,
            }
        }
        true
    }

    pub fn is_grid_complete(&self) -> bool {
        Level::iter().all(|level| self.is_row_complete(level))
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Per-segment sums across levels; empty cells count as zero
    pub fn compute_totals(&self) -> Totals {
        let mut totals = Totals::new();
        for row in &self.cells {
            for segment in Segment::iter() {
                if let Some(rank) = row[segment.index()] {
                    totals.add(segment, u32::from(rank.value()));
                }
            }
        }
        totals
    }
}

struct RowRef<'a>(&'a Row);

impl Serialize for RowRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Segment::COUNT))?;
        for segment in Segment::iter() {
            match self.0[segment.index()] {
                Some(rank) => map.serialize_entry(segment.name(), &rank.value())?,
                None => map.serialize_entry(segment.name(), "")?,
            }
        }
        map.end()
    }
}

impl Serialize for ScoreGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Level::COUNT))?;
        for level in Level::iter() {
            map.serialize_entry(level.name(), &RowRef(&self.cells[level.index()]))?;
        }
        map.end()
    }
}

/// Stored cell value: a number, a digit string, or blank. Anything else
/// (booleans, arrays, objects) is kept as `Other` and read as empty.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredCell {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

impl StoredCell {
    fn to_rank(&self) -> Option<Rank> {
        match self {
            Self::Integer(n) => n.to_rank(),
            Self::Float(f) if f.fract() == 0.0 => (*f as i64).to_rank(),
            Self::Float(_) | Self::Other(_) => None,
            Self::Text(s) => Rank::parse(s),
        }
    }
}

impl<'de> Deserialize<'de> for ScoreGrid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = BTreeMap::<String, BTreeMap<String, Option<StoredCell>>>::deserialize(deserializer)?;
        let mut grid = ScoreGrid::new();
        let mut assigned = [[false; Segment::COUNT]; Level::COUNT];

        for (level, level_key, row) in resolve_keys(raw, Level::from_key, Level::name, "level") {
            for (segment, segment_key, value) in
                resolve_keys(row, Segment::from_key, Segment::name, "segment")
            {
                let slot = &mut assigned[level.index()][segment.index()];
                if *slot {
                    warn!(
                        "Ignoring {:?}/{:?}: {}/{} was already read under another spelling",
                        level_key, segment_key, level, segment
                    );
                    continue;
                }
                *slot = true;

                if let Some(StoredCell::Other(_)) = value {
                    warn!("Ignoring non-numeric score at {}/{}", level, segment);
                }
                grid.cells[level.index()][segment.index()] =
                    value.as_ref().and_then(StoredCell::to_rank);
            }
        }

        let cleared = grid.validate_all();
        if !cleared.is_empty() {
            warn!("Cleared {} duplicate scores from stored grid", cleared.len());
        }
        Ok(grid)
    }
}
