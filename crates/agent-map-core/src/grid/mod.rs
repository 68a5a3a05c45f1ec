//! The profiling grid: levels, segments, ranks and totals.
//!
//! - `Level` - the nine rating dimensions (rows)
//! - `Segment` - the eight business categories (columns)
//! - `Rank` - a cell value 1-8, and `CellInput` for raw user input
//! - `ScoreGrid` - the table with per-row uniqueness
//! - `Totals` - per-segment sums

mod key;
mod level;
mod rank;
mod score_grid;
mod segment;
mod totals;

pub use level::*;
pub use rank::*;
pub use score_grid::*;
pub use segment::*;
pub use totals::*;
