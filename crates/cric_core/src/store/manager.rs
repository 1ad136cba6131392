use crate::config::StorageConfig;
use crate::error::StoreError;
use crate::models::{CompletedMatch, Player, Scorecard, Team};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, rename, File};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Loads an ordered record sequence. A missing file is an empty store.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    Ok(load_document(path)?.unwrap_or_default())
}

/// Overwrites the store with the full record sequence.
pub fn save_records<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StoreError> {
    save_document(path, &records)
}

fn load_document<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("{:?} not found, starting empty", path);
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let value = serde_json::from_slice(&data)
        .map_err(|source| StoreError::Corrupted { path: path.display().to_string(), source })?;

    log::debug!("Loaded {} bytes from {:?}", data.len(), path);
    Ok(Some(value))
}

fn save_document<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let data = serde_json::to_vec_pretty(value)?;

    // write to temp file, then rename over the store
    let temp_path = path.with_extension("tmp");
    {
        let mut file = File::create(&temp_path)?;
        file.write_all(&data)?;
        file.flush()?;
        file.sync_all()?;
    }
    rename(&temp_path, path)?;

    log::debug!("Saved {} bytes to {:?}", data.len(), path);
    Ok(())
}

/// Typed access to the four JSON files under one data directory.
#[derive(Debug, Clone)]
pub struct StoreManager {
    config: StorageConfig,
}

impl StoreManager {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    pub fn load_players(&self) -> Result<Vec<Player>, StoreError> {
        load_records(&self.config.players_path())
    }

    pub fn save_players(&self, players: &[Player]) -> Result<(), StoreError> {
        save_records(&self.config.players_path(), players)?;
        log::info!("Saved {} players", players.len());
        Ok(())
    }

    pub fn load_teams(&self) -> Result<Vec<Team>, StoreError> {
        load_records(&self.config.teams_path())
    }

    pub fn save_teams(&self, teams: &[Team]) -> Result<(), StoreError> {
        save_records(&self.config.teams_path(), teams)?;
        log::info!("Saved {} teams", teams.len());
        Ok(())
    }

    pub fn load_matches(&self) -> Result<Vec<CompletedMatch>, StoreError> {
        load_records(&self.config.matches_path())
    }

    pub fn save_matches(&self, matches: &[CompletedMatch]) -> Result<(), StoreError> {
        save_records(&self.config.matches_path(), matches)?;
        log::info!("Saved {} completed matches", matches.len());
        Ok(())
    }

    pub fn load_active_match(&self) -> Result<Option<Scorecard>, StoreError> {
        load_document(&self.config.active_match_path())
    }

    pub fn save_active_match(&self, scorecard: &Scorecard) -> Result<(), StoreError> {
        save_document(&self.config.active_match_path(), scorecard)
    }

    pub fn clear_active_match(&self) -> Result<(), StoreError> {
        match fs::remove_file(self.config.active_match_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BallOutcome, PlayerRole, Side};
    use crate::scoring::BallInput;
    use chrono::Utc;
    use tempfile::TempDir;

    fn manager(dir: &TempDir) -> StoreManager {
        StoreManager::new(StorageConfig::default().with_data_dir(dir.path()))
    }

    #[test]
    fn test_missing_files_are_empty_stores() {
        let dir = TempDir::new().unwrap();
        let store = manager(&dir);

        assert!(store.load_players().unwrap().is_empty());
        assert!(store.load_teams().unwrap().is_empty());
        assert!(store.load_matches().unwrap().is_empty());
        assert!(store.load_active_match().unwrap().is_none());
    }

    #[test]
    fn test_players_roundtrip_preserves_order() {
        let dir = TempDir::new().unwrap();
        let store = manager(&dir);

        let mut players = vec![
            Player::new("Zed", 30, PlayerRole::Bowler),
            Player::new("Asha", 24, PlayerRole::Batsman),
            Player::new("Asha", 19, PlayerRole::Wicketkeeper),
        ];
        players[1].runs = 88;
        store.save_players(&players).unwrap();

        assert_eq!(store.load_players().unwrap(), players);
    }

    #[test]
    fn test_teams_and_matches_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = manager(&dir);

        let teams = vec![
            Team::new("Falcons", vec!["Asha".into(), "Ben".into()]),
            Team::new("Hawks", Vec::new()),
        ];
        store.save_teams(&teams).unwrap();
        assert_eq!(store.load_teams().unwrap(), teams);

        let mut sc = Scorecard::with_openers("Falcons", "Hawks", 2, "Asha", "Ben");
        sc.record_ball(BallInput::new(Side::Team1, "Asha", "Cara", BallOutcome::Four));
        sc.record_ball(BallInput::new(Side::Team1, "Ben", "Cara", BallOutcome::Dot).with_wicket());
        let matches = vec![sc.complete(Utc::now())];
        store.save_matches(&matches).unwrap();
        assert_eq!(store.load_matches().unwrap(), matches);
    }

    #[test]
    fn test_active_match_save_and_clear() {
        let dir = TempDir::new().unwrap();
        let store = manager(&dir);
        let sc = Scorecard::new("Falcons", "Hawks", 10);

        store.save_active_match(&sc).unwrap();
        assert_eq!(store.load_active_match().unwrap(), Some(sc));

        store.clear_active_match().unwrap();
        assert!(store.load_active_match().unwrap().is_none());
        // clearing twice is fine
        store.clear_active_match().unwrap();
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = manager(&dir);
        store.save_players(&[Player::new("Asha", 24, PlayerRole::Batsman)]).unwrap();

        let path = store.config().players_path();
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_corrupted_store_reports_path() {
        let dir = TempDir::new().unwrap();
        let store = manager(&dir);
        fs::write(store.config().teams_path(), "{ not json").unwrap();

        let err = store.load_teams().unwrap_err();
        assert!(matches!(err, StoreError::Corrupted { .. }));
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("teams.json"));
    }
}
