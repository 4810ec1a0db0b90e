pub type SongId = String;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub artist: String,
    pub src: String,
    pub cover: Option<String>,
}

/// The fixed set of playable songs, populated once at startup.
///
/// The catalog is never mutated during a session; everything else in the
/// application refers to its entries by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    pub fn new(songs: Vec<Song>) -> Self {
        Self { songs }
    }

    pub fn builtin() -> Self {
        let songs = [
            ("1", "Lost in the Echo", "Linkin Park", "audio/lost_in_the_echo.mp3", Some("img/lost_in_the_echo.jpg")),
            ("2", "Blinding Lights", "The Weeknd", "audio/blinding_lights.mp3", Some("img/blinding_lights.webp")),
            ("3", "Levitating", "Dua Lipa", "audio/levitating.mp3", Some("img/levitating.jpg")),
            ("4", "Shape of You", "Ed Sheeran", "audio/shape_of_you.mp3", Some("img/shape_of_you.jpg")),
            ("5", "Dance Monkey", "Tones and I", "audio/dance_monkey.mp3", Some("img/dance_monkey.jpg")),
        ]
        .into_iter()
        .map(|(id, title, artist, src, cover)| Song {
            id: id.to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            src: src.to_string(),
            cover: cover.map(str::to_string),
        })
        .collect();

        Self { songs }
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.songs.iter().position(|s| s.id == id)
    }

    /// Circular neighbor in catalog order: `offset` steps from `id`, wrapping
    /// at both ends. `None` when `id` is not in the catalog.
    pub fn neighbor(&self, id: &str, offset: isize) -> Option<&Song> {
        let idx = self.position(id)?;
        let len = self.songs.len() as isize;
        let next = (idx as isize + offset).rem_euclid(len);
        self.songs.get(next as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_wraps_both_ends() {
        let catalog = Catalog::builtin();

        let first = &catalog.songs()[0];
        let last = &catalog.songs()[catalog.len() - 1];

        assert_eq!(catalog.neighbor(&first.id, -1).unwrap().id, last.id);
        assert_eq!(catalog.neighbor(&last.id, 1).unwrap().id, first.id);
        assert_eq!(catalog.neighbor("2", 1).unwrap().id, "3");
    }

    #[test]
    fn neighbor_of_unknown_id_is_none() {
        let catalog = Catalog::builtin();
        assert!(catalog.neighbor("404", 1).is_none());
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get("3").unwrap().title, "Levitating");
        assert!(catalog.get("404").is_none());
    }
}
