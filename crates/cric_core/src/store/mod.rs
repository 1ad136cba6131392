// Flat JSON record stores: players, teams, match history and the active match.
// Whole-file load/save; a missing file is an empty store.

pub mod manager;

pub use manager::{load_records, save_records, StoreManager};
