mod collection;
pub mod lenient;
pub mod models;
pub mod snapshot;

pub use collection::DivisionCollection;
pub use models::*;
pub use snapshot::{DivisionSnapshot, SnapshotFile, TournamentSnapshot, DEFAULT_DIVISION};
