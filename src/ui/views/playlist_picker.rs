use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

use crate::{
    catalog::SongId,
    event::events::Event,
    ui::{
        context::AppContext,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

/// Overlay for dropping one song into an existing playlist.
pub struct PlaylistPicker {
    song_id: SongId,
    list_state: ListState,
}

impl PlaylistPicker {
    pub fn new(song_id: SongId) -> Self {
        Self {
            song_id,
            list_state: ListState::default(),
        }
    }
}

fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[async_trait]
impl View for PlaylistPicker {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, ctx: &AppContext) {
        let playlists = ctx.library.playlists();
        let height = (playlists.len().max(1) as u16 + 2).min(area.height);
        let popup = popup_area(area, 40.min(area.width), height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::PRIMARY))
            .title(" Add to playlist ");

        f.render_widget(Clear, popup);

        if playlists.is_empty() {
            f.render_widget(List::new(vec![ListItem::new("No playlists")]).block(block), popup);
            return;
        }

        let items: Vec<ListItem> = playlists
            .iter()
            .map(|playlist| {
                let marker = if playlist.contains(&self.song_id) {
                    "✓ "
                } else {
                    "  "
                };
                ListItem::new(format!("{}{}", marker, playlist.name))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        if self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }

        f.render_stateful_widget(list, popup, &mut self.list_state);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        let len = ctx.library.playlists().len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Some(Action::Back),
            KeyCode::Down | KeyCode::Char('j') => {
                if len > 0 {
                    let i = self
                        .list_state
                        .selected()
                        .map_or(0, |i| if i >= len - 1 { i } else { i + 1 });
                    self.list_state.select(Some(i));
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if len > 0 {
                    let i = self
                        .list_state
                        .selected()
                        .map_or(0, |i| if i == 0 { 0 } else { i - 1 });
                    self.list_state.select(Some(i));
                }
            }
            KeyCode::Enter => {
                if let Some(playlist) = self
                    .list_state
                    .selected()
                    .and_then(|i| ctx.library.playlists().get(i))
                {
                    let _ = ctx.event_tx.send(Event::AddToPlaylist(
                        playlist.name.clone(),
                        self.song_id.clone(),
                    ));
                }
                return Some(Action::Back);
            }
            _ => {}
        }
        Some(Action::None)
    }
}
