use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    symbols::border,
    text::{Line, ToSpan},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use crate::{catalog::Song, util::colors};

/// The player bar: current song, elapsed/total time and a progress gauge.
/// Purely a projection of the transport; it never mutates anything.
pub struct PlayerWidget<'a> {
    song: Option<&'a Song>,
    is_playing: bool,
    current_time: u32,
    duration: u32,
    percent: f64,
}

impl<'a> PlayerWidget<'a> {
    pub fn new(
        song: Option<&'a Song>,
        is_playing: bool,
        current_time: u32,
        duration: u32,
        percent: f64,
    ) -> Self {
        Self {
            song,
            is_playing,
            current_time,
            duration,
            percent,
        }
    }
}

impl<'a> Widget for PlayerWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED);

        let Some(song) = self.song else {
            Paragraph::new("No song playing")
                .style(Style::default().fg(colors::NEUTRAL))
                .centered()
                .block(block)
                .render(area, buf);
            return;
        };

        let status = if self.is_playing {
            "Playing...".fg(colors::PRIMARY)
        } else {
            "Paused".fg(colors::NEUTRAL)
        };

        let title = format!("{}  {} - {}", play_icon(self.is_playing), song.title, song.artist);
        let times = format!(
            "{} / {}",
            format_time(self.current_time),
            format_time(self.duration)
        );

        let gauge = Gauge::default()
            .block(
                block
                    .title_top(title)
                    .title_alignment(Alignment::Center)
                    .title_top(Line::from(status).right_aligned())
                    .title_bottom(
                        Line::from(" p prev · space pause · n next · H/L seek ")
                            .right_aligned()
                            .fg(colors::NEUTRAL),
                    ),
            )
            .gauge_style(Style::default().fg(colors::SECONDARY).bg(colors::NEUTRAL))
            .ratio((self.percent / 100.0).clamp(0.0, 1.0))
            .label(times.to_span().fg(ratatui::style::Color::White));

        gauge.render(area, buf);
    }
}

fn play_icon(is_playing: bool) -> &'static str {
    if is_playing { "▶" } else { "❚❚" }
}

/// `m:ss`, seconds zero-padded, minutes as-is.
fn format_time(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero_padded_seconds() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(9), "0:09");
        assert_eq!(format_time(90), "1:30");
        assert_eq!(format_time(180), "3:00");
    }
}
