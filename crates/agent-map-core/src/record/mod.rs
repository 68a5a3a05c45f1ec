//! Persisted associate records.

mod associate;
mod profile;

pub use associate::*;
pub use profile::*;
