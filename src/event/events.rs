use crate::{catalog::SongId, ui::state::Route};

/// Everything that flows through the app channel: notifications produced by
/// background tasks plus the commands views emit instead of mutating state
/// themselves. A single handler drains these each loop iteration.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    // Events
    ViewLoaded(Route),
    ProgressTick,

    // Commands
    Play(SongId),
    TogglePlayPause,
    Next,
    Previous,
    Seek(f64),
    SeekForward(u32),
    SeekBackward(u32),
    ToggleLike(SongId),
    UnlikeAll,
    CreatePlaylist(String),
    DeletePlaylist(String),
    AddToPlaylist(String, SongId),
    RemoveFromPlaylist(String, SongId),
    OpenPlaylist(String),
    OpenPlaylistPicker(SongId),
}
