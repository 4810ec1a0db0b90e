use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::{
    catalog::Song,
    event::events::Event,
    ui::util::song_row,
    ui::{
        context::AppContext,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

/// One playlist's songs, plus a collapsible list of catalog songs not yet in
/// it. Not a route of its own: navigation away and back lands on the list.
pub struct PlaylistDetail {
    name: String,
    list_state: ListState,
    add_state: ListState,
    is_adding: bool,
}

impl PlaylistDetail {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            list_state: ListState::default(),
            add_state: ListState::default(),
            is_adding: false,
        }
    }

    fn songs<'a>(&self, ctx: &'a AppContext) -> Vec<&'a Song> {
        // Stale ids from an old persisted state simply render as absent.
        ctx.library
            .playlist(&self.name)
            .map(|playlist| {
                playlist
                    .songs
                    .iter()
                    .filter_map(|id| ctx.catalog.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn addable<'a>(&self, ctx: &'a AppContext) -> Vec<&'a Song> {
        let Some(playlist) = ctx.library.playlist(&self.name) else {
            return Vec::new();
        };
        ctx.catalog
            .songs()
            .iter()
            .filter(|song| !playlist.contains(&song.id))
            .collect()
    }

    fn selected_id(&self, ctx: &AppContext) -> Option<String> {
        let songs = self.songs(ctx);
        self.list_state
            .selected()
            .and_then(|i| songs.get(i))
            .map(|song| song.id.clone())
    }
}

#[async_trait]
impl View for PlaylistDetail {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, ctx: &AppContext) {
        let (songs_area, add_area) = if self.is_adding {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(9)])
                .split(area);
            (chunks[0], Some(chunks[1]))
        } else {
            (area, None)
        };

        let songs = self.songs(ctx);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.name))
            .title_bottom(" esc back · a add songs · x remove ");

        if songs.is_empty() {
            f.render_widget(
                List::new(vec![ListItem::new("No songs in this playlist.")]).block(block),
                songs_area,
            );
        } else {
            let current_id = ctx.player.current_song_id();
            let is_playing = ctx.player.is_playing();
            let items: Vec<ListItem> = songs
                .iter()
                .map(|song| {
                    song_row(
                        song,
                        current_id == Some(song.id.as_str()),
                        is_playing,
                        ctx.library.is_liked(&song.id),
                    )
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

            match self.list_state.selected() {
                Some(i) if i >= songs.len() => self.list_state.select(Some(songs.len() - 1)),
                None => self.list_state.select(Some(0)),
                _ => {}
            }

            f.render_stateful_widget(list, songs_area, &mut self.list_state);
        }

        if let Some(add_area) = add_area {
            let addable = self.addable(ctx);
            let add_block = Block::default()
                .borders(Borders::ALL)
                .title(" Add songs ")
                .border_style(Style::default().fg(colors::PRIMARY));

            if addable.is_empty() {
                f.render_widget(
                    List::new(vec![ListItem::new("All songs are in this playlist.")])
                        .block(add_block),
                    add_area,
                );
                return;
            }

            let items: Vec<ListItem> = addable
                .iter()
                .map(|song| ListItem::new(format!("{} - {}", song.title, song.artist)))
                .collect();

            let list = List::new(items)
                .block(add_block)
                .highlight_style(
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("+ ");

            match self.add_state.selected() {
                Some(i) if i >= addable.len() => self.add_state.select(Some(addable.len() - 1)),
                None => self.add_state.select(Some(0)),
                _ => {}
            }

            f.render_stateful_widget(list, add_area, &mut self.add_state);
        }
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        if self.is_adding {
            let addable = self.addable(ctx);
            let len = addable.len();
            match key.code {
                KeyCode::Esc | KeyCode::Char('a') => self.is_adding = false,
                KeyCode::Down | KeyCode::Char('j') => {
                    if len > 0 {
                        let i = self
                            .add_state
                            .selected()
                            .map_or(0, |i| if i >= len - 1 { i } else { i + 1 });
                        self.add_state.select(Some(i));
                    }
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    if len > 0 {
                        let i = self
                            .add_state
                            .selected()
                            .map_or(0, |i| if i == 0 { 0 } else { i - 1 });
                        self.add_state.select(Some(i));
                    }
                }
                KeyCode::Enter => {
                    if let Some(song) = self.add_state.selected().and_then(|i| addable.get(i)) {
                        let _ = ctx
                            .event_tx
                            .send(Event::AddToPlaylist(self.name.clone(), song.id.clone()));
                    }
                }
                _ => {}
            }
            return Some(Action::None);
        }

        let len = self.songs(ctx).len();
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => return Some(Action::Back),
            KeyCode::Char('a') => self.is_adding = true,
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
                if let Some(id) = self.selected_id(ctx) {
                    let _ = ctx.event_tx.send(Event::Play(id));
                }
            }
            KeyCode::Char('x') => {
                if let Some(id) = self.selected_id(ctx) {
                    let _ = ctx
                        .event_tx
                        .send(Event::RemoveFromPlaylist(self.name.clone(), id));
                }
            }
            KeyCode::Char('f') => {
                if let Some(id) = self.selected_id(ctx) {
                    let _ = ctx.event_tx.send(Event::ToggleLike(id));
                }
            }
            _ => return None,
        }
        Some(Action::None)
    }
}
