use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    catalog::Song,
    event::events::Event,
    ui::util::song_row,
    ui::{
        components::spinner::Spinner,
        context::AppContext,
        state::{AppState, Route},
        traits::{Action, View},
    },
    util::colors,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortKey {
    Title,
    Artist,
}

impl SortKey {
    fn as_str(&self) -> &str {
        match self {
            SortKey::Title => "title",
            SortKey::Artist => "artist",
        }
    }

    fn toggle(&self) -> Self {
        match self {
            SortKey::Title => SortKey::Artist,
            SortKey::Artist => SortKey::Title,
        }
    }
}

/// The full-catalog grid with text search and a title/artist sort toggle.
/// Search and sort only shape what is rendered; the catalog itself is fixed.
pub struct Home {
    list_state: ListState,
    query: String,
    is_searching: bool,
    sort: SortKey,
    loading: bool,
}

impl Default for Home {
    fn default() -> Self {
        Self {
            list_state: ListState::default(),
            query: String::new(),
            is_searching: false,
            sort: SortKey::Title,
            loading: true,
        }
    }
}

impl Home {
    fn visible<'a>(&self, ctx: &'a AppContext) -> Vec<&'a Song> {
        let query = self.query.to_lowercase();
        let mut songs: Vec<&Song> = ctx
            .catalog
            .songs()
            .iter()
            .filter(|song| {
                query.is_empty()
                    || song.title.to_lowercase().contains(&query)
                    || song.artist.to_lowercase().contains(&query)
            })
            .collect();
        songs.sort_by(|a, b| match self.sort {
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Artist => a.artist.cmp(&b.artist),
        });
        songs
    }

    fn selected_id(&self, ctx: &AppContext) -> Option<String> {
        let songs = self.visible(ctx);
        self.list_state
            .selected()
            .and_then(|i| songs.get(i))
            .map(|song| song.id.clone())
    }
}

#[async_trait]
impl View for Home {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, ctx: &AppContext) {
        if self.loading {
            let spinner = Spinner::default()
                .with_style(Style::default().fg(colors::PRIMARY))
                .with_label("Loading songs...".to_string());
            f.render_widget(spinner, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        let input_style = if self.is_searching {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };
        let input_block = Block::default()
            .borders(Borders::ALL)
            .title("Search songs (/)")
            .title_top(
                Line::from(format!(" sort: {} (s) ", self.sort.as_str())).right_aligned(),
            )
            .border_style(input_style);
        f.render_widget(Paragraph::new(self.query.clone()).block(input_block), chunks[0]);

        let songs = self.visible(ctx);
        if songs.is_empty() {
            f.render_widget(List::new(vec![ListItem::new("No songs found.")]), chunks[1]);
            return;
        }

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

        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        if self.is_searching {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => self.is_searching = false,
                KeyCode::Backspace => {
                    self.query.pop();
                }
                KeyCode::Char(c) => self.query.push(c),
                _ => {}
            }
            return Some(Action::None);
        }

        let len = self.visible(ctx).len();
        match key.code {
            KeyCode::Char('/') => {
                self.is_searching = true;
            }
            KeyCode::Char('s') => {
                self.sort = self.sort.toggle();
            }
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
            KeyCode::Char('g') => {
                if len > 0 {
                    self.list_state.select(Some(0));
                }
            }
            KeyCode::Char('G') => {
                if len > 0 {
                    self.list_state.select(Some(len - 1));
                }
            }
            KeyCode::Enter => {
                if let Some(id) = self.selected_id(ctx) {
                    let _ = ctx.event_tx.send(Event::Play(id));
                }
            }
            KeyCode::Char('f') => {
                if let Some(id) = self.selected_id(ctx) {
                    let _ = ctx.event_tx.send(Event::ToggleLike(id));
                }
            }
            KeyCode::Char('a') => {
                if let Some(id) = self.selected_id(ctx) {
                    let _ = ctx.event_tx.send(Event::OpenPlaylistPicker(id));
                }
            }
            _ => return None,
        }
        Some(Action::None)
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        if let Event::ViewLoaded(Route::Home) = event {
            self.loading = false;
        }
    }

    fn scroll_offset(&self) -> usize {
        self.list_state.offset()
    }

    fn restore_scroll(&mut self, offset: usize) {
        self.list_state.select(Some(offset));
        *self.list_state.offset_mut() = offset;
    }
}
