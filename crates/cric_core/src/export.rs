//! CSV export of the full player store.

use crate::error::StoreError;
use crate::models::Player;
use std::io;
use std::path::Path;

/// Writes one header row (`name,age,role,runs,wickets,matches`) and one row
/// per player, in store order.
pub fn write_players_csv<W: io::Write>(players: &[Player], writer: W) -> Result<(), StoreError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if players.is_empty() {
        csv_writer.write_record(["name", "age", "role", "runs", "wickets", "matches"])?;
    }
    for player in players {
        csv_writer.serialize(player)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn players_csv_string(players: &[Player]) -> Result<String, StoreError> {
    let mut buf = Vec::new();
    write_players_csv(players, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn export_players_csv(path: &Path, players: &[Player]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path)?;
    write_players_csv(players, file)?;
    log::info!("Exported {} players to {:?}", players.len(), path);
    Ok(())
}
