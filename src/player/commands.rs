use crate::catalog::SongId;

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    Play(SongId),
    TogglePlayPause,
    Next,
    Previous,
    /// Absolute position as a fraction of the track duration, clamped to [0, 1].
    Seek(f64),
    SeekForward(u32),
    SeekBackward(u32),
}
