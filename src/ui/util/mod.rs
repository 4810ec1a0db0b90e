pub mod handler;

use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::{
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::ListItem,
};

use crate::{catalog::Song, util::colors};

pub fn get_active_track_icon(is_playing: bool) -> &'static str {
    if is_playing {
        const FRAME_STEP_MS: u64 = 100;

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis() as u64;
        let step = (now / FRAME_STEP_MS) as usize % 6;

        match step {
            0 | 5 => "·",
            1 | 4 => "•",
            _ => "●",
        }
    } else {
        "•"
    }
}

/// One song row, shared by every grid: active-track marker, title, artist
/// and a heart for liked songs.
pub fn song_row<'a>(song: &Song, is_current: bool, is_playing: bool, is_liked: bool) -> ListItem<'a> {
    let prefix = if is_current {
        format!("{} ", get_active_track_icon(is_playing))
    } else {
        "  ".to_string()
    };

    let mut spans = vec![
        Span::raw(prefix),
        Span::raw(song.title.clone()),
        Span::raw(" - "),
        Span::raw(song.artist.clone()).fg(colors::NEUTRAL),
    ];
    if is_liked {
        spans.push(Span::raw("  ♥").fg(colors::ACCENT));
    }

    let mut item = ListItem::new(Line::from(spans));
    if is_current {
        item = item.style(
            Style::default()
                .fg(colors::SECONDARY)
                .add_modifier(Modifier::BOLD),
        );
    }
    item
}
