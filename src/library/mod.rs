pub mod store;

use crate::catalog::SongId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub name: String,
    pub songs: Vec<SongId>,
}

impl Playlist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            songs: Vec::new(),
        }
    }

    pub fn contains(&self, song_id: &str) -> bool {
        self.songs.iter().any(|id| id == song_id)
    }
}

/// The user's mutable library: liked song ids plus named playlists.
///
/// Every mutation is total over its input domain; invalid input (missing
/// playlist, duplicate name) is a silent no-op. Ordering is insertion order
/// for both liked ids and playlists, uniqueness is enforced here rather than
/// by the storage format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    liked: Vec<SongId>,
    playlists: Vec<Playlist>,
}

impl Library {
    pub fn new(liked: Vec<SongId>, playlists: Vec<Playlist>) -> Self {
        Self { liked, playlists }
    }

    pub fn liked(&self) -> &[SongId] {
        &self.liked
    }

    pub fn is_liked(&self, song_id: &str) -> bool {
        self.liked.iter().any(|id| id == song_id)
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.name == name)
    }

    /// Adds the id to the liked set if absent, removes it otherwise.
    pub fn toggle_like(&mut self, song_id: &str) {
        if let Some(idx) = self.liked.iter().position(|id| id == song_id) {
            self.liked.remove(idx);
        } else {
            self.liked.push(song_id.to_string());
        }
    }

    pub fn unlike_all(&mut self) {
        self.liked.clear();
    }

    /// Creates an empty playlist under the trimmed name. Empty and duplicate
    /// names are ignored.
    pub fn create_playlist(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() || self.playlist(name).is_some() {
            return;
        }
        self.playlists.push(Playlist::new(name));
    }

    pub fn delete_playlist(&mut self, name: &str) {
        self.playlists.retain(|p| p.name != name);
    }

    /// Appends the song to the playlist unless it is already there.
    pub fn add_to_playlist(&mut self, name: &str, song_id: &str) {
        if let Some(playlist) = self.playlists.iter_mut().find(|p| p.name == name)
            && !playlist.contains(song_id)
        {
            playlist.songs.push(song_id.to_string());
        }
    }

    pub fn remove_from_playlist(&mut self, name: &str, song_id: &str) {
        if let Some(playlist) = self.playlists.iter_mut().find(|p| p.name == name) {
            playlist.songs.retain(|id| id != song_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_like_twice_restores_membership() {
        let mut library = Library::default();

        assert!(!library.is_liked("2"));
        library.toggle_like("2");
        assert!(library.is_liked("2"));
        library.toggle_like("2");
        assert!(!library.is_liked("2"));

        library.toggle_like("1");
        library.toggle_like("3");
        library.toggle_like("1");
        assert_eq!(library.liked(), ["3"]);
    }

    #[test]
    fn unlike_all_clears_everything() {
        let mut library = Library::default();
        library.toggle_like("1");
        library.toggle_like("2");

        library.unlike_all();
        assert!(library.liked().is_empty());
    }

    #[test]
    fn create_playlist_rejects_blank_names() {
        let mut library = Library::default();

        library.create_playlist("");
        library.create_playlist("  ");
        assert!(library.playlists().is_empty());
    }

    #[test]
    fn create_playlist_trims_and_deduplicates() {
        let mut library = Library::default();

        library.create_playlist("Road Trip");
        library.add_to_playlist("Road Trip", "1");
        library.create_playlist("  Road Trip  ");

        assert_eq!(library.playlists().len(), 1);
        assert_eq!(library.playlist("Road Trip").unwrap().songs, ["1"]);
    }

    #[test]
    fn add_to_playlist_is_idempotent() {
        let mut library = Library::default();
        library.create_playlist("Gym");

        library.add_to_playlist("Gym", "3");
        library.add_to_playlist("Gym", "3");
        assert_eq!(library.playlist("Gym").unwrap().songs, ["3"]);

        // Unknown playlist is a no-op.
        library.add_to_playlist("Focus", "3");
        assert!(library.playlist("Focus").is_none());
    }

    #[test]
    fn remove_from_playlist_is_idempotent() {
        let mut library = Library::default();
        library.create_playlist("Gym");
        library.add_to_playlist("Gym", "1");
        library.add_to_playlist("Gym", "3");

        library.remove_from_playlist("Gym", "1");
        library.remove_from_playlist("Gym", "1");
        assert_eq!(library.playlist("Gym").unwrap().songs, ["3"]);

        library.remove_from_playlist("Focus", "3");
    }

    #[test]
    fn delete_playlist_removes_entry() {
        let mut library = Library::default();
        library.create_playlist("Gym");
        library.create_playlist("Chill");

        library.delete_playlist("Gym");
        assert!(library.playlist("Gym").is_none());
        assert_eq!(library.playlists().len(), 1);

        library.delete_playlist("Gym");
        assert_eq!(library.playlists().len(), 1);
    }
}
