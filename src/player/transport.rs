use crate::{
    catalog::{Catalog, SongId},
    player::commands::PlayerCommand,
};

/// Every song reports the same fixed length; nothing is actually decoded.
pub const TRACK_DURATION_SECS: u32 = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing,
    Paused,
}

/// The playback state machine: current song, play/pause flag, elapsed time.
///
/// Time only moves through [`Transport::tick`], driven by an external clock,
/// so tests can advance playback deterministically. `Playing` and `Paused`
/// always carry a current song; `Idle` never does.
#[derive(Debug, Clone, Default)]
pub struct Transport {
    state: PlaybackState,
    current_song_id: Option<SongId>,
    current_time: u32,
}

impl Transport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn current_song_id(&self) -> Option<&str> {
        self.current_song_id.as_deref()
    }

    /// Elapsed seconds, always within `[0, duration]`.
    pub fn current_time(&self) -> u32 {
        self.current_time
    }

    pub fn duration(&self) -> u32 {
        TRACK_DURATION_SECS
    }

    /// Progress through the current track in `[0, 100]`.
    pub fn progress_percent(&self) -> f64 {
        (self.current_time as f64 / TRACK_DURATION_SECS as f64 * 100.0).min(100.0)
    }

    pub fn handle_command(&mut self, cmd: PlayerCommand, catalog: &Catalog) {
        match cmd {
            PlayerCommand::Play(song_id) => self.play(&song_id, catalog),
            PlayerCommand::TogglePlayPause => self.toggle_play_pause(),
            PlayerCommand::Next => self.advance(1, catalog),
            PlayerCommand::Previous => self.advance(-1, catalog),
            PlayerCommand::Seek(fraction) => self.seek(fraction),
            PlayerCommand::SeekForward(secs) => self.seek_by(secs as i64),
            PlayerCommand::SeekBackward(secs) => self.seek_by(-(secs as i64)),
        }
    }

    /// Starts the given song from the beginning. Unknown ids are ignored.
    pub fn play(&mut self, song_id: &str, catalog: &Catalog) {
        if catalog.get(song_id).is_none() {
            return;
        }
        self.current_song_id = Some(song_id.to_string());
        self.current_time = 0;
        self.state = PlaybackState::Playing;
    }

    pub fn toggle_play_pause(&mut self) {
        self.state = match self.state {
            PlaybackState::Idle => PlaybackState::Idle,
            PlaybackState::Playing => PlaybackState::Paused,
            PlaybackState::Paused => PlaybackState::Playing,
        };
    }

    /// Jumps to `fraction` of the track duration, clamped to [0, 1]. Keeps
    /// the play/pause state as-is; no-op without a current song.
    pub fn seek(&mut self, fraction: f64) {
        if self.current_song_id.is_none() {
            return;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        self.current_time = (fraction * TRACK_DURATION_SECS as f64).round() as u32;
    }

    fn seek_by(&mut self, delta_secs: i64) {
        if self.current_song_id.is_none() {
            return;
        }
        let time = (self.current_time as i64 + delta_secs).clamp(0, TRACK_DURATION_SECS as i64);
        self.current_time = time as u32;
    }

    /// Moves `offset` entries through the catalog's fixed order, wrapping
    /// circularly at both ends, and starts the target from zero. Forces
    /// `Playing` even when invoked while paused.
    fn advance(&mut self, offset: isize, catalog: &Catalog) {
        let Some(current) = self.current_song_id.as_deref() else {
            return;
        };
        if let Some(song) = catalog.neighbor(current, offset) {
            self.current_song_id = Some(song.id.clone());
            self.current_time = 0;
            self.state = PlaybackState::Playing;
        }
    }

    /// One second of simulated playback. Only advances time while `Playing`;
    /// the driving clock keeps ticking through pauses. Hitting the duration
    /// boundary auto-advances to the next catalog entry and keeps playing.
    /// Returns `true` when the tick switched tracks.
    pub fn tick(&mut self, catalog: &Catalog) -> bool {
        if self.state != PlaybackState::Playing || self.current_song_id.is_none() {
            return false;
        }
        self.current_time += 1;
        if self.current_time >= TRACK_DURATION_SECS {
            self.advance(1, catalog);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    #[test]
    fn play_starts_from_zero() {
        let catalog = catalog();
        let mut transport = Transport::new();

        transport.play("3", &catalog);
        assert_eq!(transport.current_song_id(), Some("3"));
        assert_eq!(transport.current_time(), 0);
        assert!(transport.is_playing());
    }

    #[test]
    fn play_with_unknown_id_stays_idle() {
        let catalog = catalog();
        let mut transport = Transport::new();

        transport.play("404", &catalog);
        assert_eq!(transport.state(), PlaybackState::Idle);
        assert_eq!(transport.current_song_id(), None);
    }

    #[test]
    fn full_track_of_ticks_auto_advances() {
        let catalog = catalog();
        let mut transport = Transport::new();
        transport.play("3", &catalog);

        for _ in 0..TRACK_DURATION_SECS - 1 {
            assert!(!transport.tick(&catalog));
        }
        assert_eq!(transport.current_time(), TRACK_DURATION_SECS - 1);

        // The boundary tick wraps to the next catalog entry, still playing.
        assert!(transport.tick(&catalog));
        assert_eq!(transport.current_song_id(), Some("4"));
        assert_eq!(transport.current_time(), 0);
        assert!(transport.is_playing());
    }

    #[test]
    fn next_and_previous_wrap_circularly() {
        let catalog = catalog();
        let mut transport = Transport::new();

        transport.play("5", &catalog);
        transport.handle_command(PlayerCommand::Next, &catalog);
        assert_eq!(transport.current_song_id(), Some("1"));

        transport.handle_command(PlayerCommand::Previous, &catalog);
        assert_eq!(transport.current_song_id(), Some("5"));
    }

    #[test]
    fn next_forces_playing_and_resets_time() {
        let catalog = catalog();
        let mut transport = Transport::new();
        transport.play("1", &catalog);
        transport.seek(0.5);
        transport.toggle_play_pause();

        transport.handle_command(PlayerCommand::Next, &catalog);
        assert_eq!(transport.current_time(), 0);
        assert!(transport.is_playing());
    }

    #[test]
    fn seek_clamps_to_track_bounds() {
        let catalog = catalog();
        let mut transport = Transport::new();
        transport.play("1", &catalog);

        transport.seek(0.5);
        assert_eq!(transport.current_time(), 90);

        transport.seek(1.5);
        assert_eq!(transport.current_time(), 180);

        transport.seek(-0.2);
        assert_eq!(transport.current_time(), 0);
    }

    #[test]
    fn seek_does_not_change_play_state() {
        let catalog = catalog();
        let mut transport = Transport::new();
        transport.play("1", &catalog);
        transport.toggle_play_pause();

        transport.seek(0.25);
        assert_eq!(transport.state(), PlaybackState::Paused);
        assert_eq!(transport.current_time(), 45);
    }

    #[test]
    fn transport_ops_are_noops_while_idle() {
        let catalog = catalog();
        let mut transport = Transport::new();

        transport.toggle_play_pause();
        transport.seek(0.5);
        transport.handle_command(PlayerCommand::Next, &catalog);
        transport.handle_command(PlayerCommand::Previous, &catalog);
        assert!(!transport.tick(&catalog));

        assert_eq!(transport.state(), PlaybackState::Idle);
        assert_eq!(transport.current_song_id(), None);
        assert_eq!(transport.current_time(), 0);
    }

    #[test]
    fn time_is_frozen_while_paused() {
        let catalog = catalog();
        let mut transport = Transport::new();
        transport.play("2", &catalog);
        transport.tick(&catalog);
        transport.toggle_play_pause();

        // The clock keeps firing while paused; nothing moves.
        for _ in 0..10 {
            assert!(!transport.tick(&catalog));
        }
        assert_eq!(transport.current_time(), 1);

        transport.toggle_play_pause();
        transport.tick(&catalog);
        assert_eq!(transport.current_time(), 2);
    }

    #[test]
    fn seek_steps_clamp_at_both_ends() {
        let catalog = catalog();
        let mut transport = Transport::new();
        transport.play("1", &catalog);

        transport.handle_command(PlayerCommand::SeekBackward(5), &catalog);
        assert_eq!(transport.current_time(), 0);

        transport.seek(1.0);
        transport.handle_command(PlayerCommand::SeekForward(5), &catalog);
        assert_eq!(transport.current_time(), 180);
    }
}
