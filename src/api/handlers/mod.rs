use crate::services::bracket::BracketService;
use crate::store::SnapshotStore;

pub mod brackets;
pub mod snapshots;

#[derive(Clone)]
pub struct AppState {
    pub store: SnapshotStore,
    pub brackets: BracketService,
}
