use std::{fs, io, path::PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::{
    catalog::SongId,
    library::{Library, Playlist},
    util::paths,
};

const LIKED_ENTRY: &str = "liked";
const PLAYLISTS_ENTRY: &str = "playlists";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// On-disk mirror of the library, one JSON file per entry.
///
/// `liked` holds an array of song-id strings, `playlists` an object mapping
/// playlist name to an array of song ids. An absent or unparsable entry loads
/// as the empty collection; nothing here ever surfaces an error to the user.
pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    pub fn open() -> Result<Self, StoreError> {
        let dir = paths::state_dir();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn load(&self) -> Library {
        let liked: Vec<SongId> = self
            .read_entry(LIKED_ENTRY)
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default();

        let playlists = self
            .read_entry(PLAYLISTS_ENTRY)
            .and_then(|value| serde_json::from_value::<Map<String, Value>>(value).ok())
            .map(|map| {
                map.into_iter()
                    .map(|(name, songs)| Playlist {
                        name,
                        songs: serde_json::from_value(songs).unwrap_or_default(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Library::new(liked, playlists)
    }

    pub fn save(&self, library: &Library) -> Result<(), StoreError> {
        self.write_entry(LIKED_ENTRY, &serde_json::to_value(library.liked())?)?;

        let mut playlists = Map::new();
        for playlist in library.playlists() {
            playlists.insert(playlist.name.clone(), Value::from(playlist.songs.clone()));
        }
        self.write_entry(PLAYLISTS_ENTRY, &Value::Object(playlists))
    }

    fn entry_path(&self, entry: &str) -> PathBuf {
        self.dir.join(format!("{entry}.json"))
    }

    fn read_entry(&self, entry: &str) -> Option<Value> {
        let raw = fs::read_to_string(self.entry_path(entry)).ok()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("discarding malformed `{entry}` entry: {e}");
                None
            }
        }
    }

    fn write_entry(&self, entry: &str, value: &Value) -> Result<(), StoreError> {
        fs::write(self.entry_path(entry), serde_json::to_string(value)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, StateStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::at(dir.path());
        (dir, store)
    }

    #[test]
    fn round_trips_liked_and_playlists() {
        let (_dir, store) = store();

        let mut library = Library::default();
        library.toggle_like("2");
        library.toggle_like("4");
        library.create_playlist("Gym");
        library.add_to_playlist("Gym", "1");
        library.add_to_playlist("Gym", "3");

        store.save(&library).unwrap();
        assert_eq!(store.load(), library);
    }

    #[test]
    fn absent_entries_load_as_empty() {
        let (_dir, store) = store();
        assert_eq!(store.load(), Library::default());
    }

    #[test]
    fn malformed_entries_load_as_empty() {
        let (dir, store) = store();
        fs::write(dir.path().join("liked.json"), "not json at all").unwrap();
        fs::write(dir.path().join("playlists.json"), "[1, 2, 3]").unwrap();

        assert_eq!(store.load(), Library::default());
    }

    #[test]
    fn playlist_order_survives_the_disk() {
        let (_dir, store) = store();

        let mut library = Library::default();
        for name in ["Zebra", "Alpha", "Mango"] {
            library.create_playlist(name);
        }
        store.save(&library).unwrap();

        let names: Vec<_> = store
            .load()
            .playlists()
            .iter()
            .map(|p| p.name.clone())
            .collect();
        assert_eq!(names, ["Zebra", "Alpha", "Mango"]);
    }
}
