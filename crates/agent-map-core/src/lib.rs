pub mod config;
pub mod error;
pub mod export;
pub mod grid;
pub mod guide;
pub mod record;
pub mod session;
pub mod store;

pub use config::{Config, StoreBackend};
pub use error::{Error, Result};
pub use export::{ExportFormat, PieChart, PieSlice};
pub use grid::{CellInput, CellUpdate, Level, Rank, ScoreGrid, Segment, Totals};
pub use record::{AssociateRecord, Profile, ProfileUpdate};
pub use session::FormSession;
#[cfg(feature = "sqlite")]
pub use store::SqliteStore;
pub use store::{JsonFileStore, MemoryStore, RecordStore};
