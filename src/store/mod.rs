mod snapshots;

pub use snapshots::{is_valid_key, read_snapshot_file, SnapshotStore};
