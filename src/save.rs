//! Save files: one pretty-printed JSON file per slot under a save
//! directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use starlance_core::Game;
use starlance_engine::Persistence;

/// Saves the campaign record as `save<slot>.json` in `dir`.
///
/// The directory is created on first write, so a fresh install saves
/// without any setup step.
#[derive(Debug, Clone)]
pub struct JsonSave {
    dir: PathBuf,
}

impl JsonSave {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn slot_path(&self, slot: u8) -> PathBuf {
        self.dir.join(format!("save{slot:02}.json"))
    }

    /// Read a slot back. Missing or unreadable files are errors; callers
    /// treat them as "no save here".
    pub fn load_game(&self, slot: u8) -> Result<Game> {
        let path = self.slot_path(slot);
        let text = fs::read_to_string(&path)
            .with_context(|| format!("reading save file {}", path.display()))?;
        let game = serde_json::from_str(&text)
            .with_context(|| format!("parsing save file {}", path.display()))?;
        Ok(game)
    }
}

impl Persistence for JsonSave {
    fn save_game(&mut self, slot: u8, game: &Game) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating save directory {}", self.dir.display()))?;

        let path = self.slot_path(slot);
        let text = serde_json::to_string_pretty(game).context("encoding save file")?;
        fs::write(&path, text).with_context(|| format!("writing save file {}", path.display()))?;
        Ok(())
    }
}
