use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Persisted progress. Only the unlock frontier is saved; move history never
/// survives a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    pub highest_unlocked: usize,
}

/// Save-progress bookkeeping backed by one JSON file. Missing or malformed
/// files read as a fresh profile; unlocking only ever raises the stored
/// value.
pub struct SaveFile {
    path: PathBuf,
    data: SaveData,
}

impl SaveFile {
    pub fn load(path: impl Into<PathBuf>) -> SaveFile {
        let path = path.into();
        let data = fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        SaveFile { path, data }
    }

    pub fn highest_unlocked(&self) -> usize {
        self.data.highest_unlocked
    }

    pub fn unlock_up_to(&mut self, index: usize) -> io::Result<()> {
        if index <= self.data.highest_unlocked {
            return Ok(());
        }
        self.data.highest_unlocked = index;
        self.write()
    }

    pub fn reset(&mut self) -> io::Result<()> {
        self.data = SaveData::default();
        self.write()
    }

    fn write(&self) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&self.data).map_err(io::Error::other)?;
        fs::write(&self.path, json)
    }
}
