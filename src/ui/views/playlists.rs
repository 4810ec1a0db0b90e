use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    event::events::Event,
    ui::{
        components::spinner::Spinner,
        context::AppContext,
        state::{AppState, Route},
        traits::{Action, View},
    },
    util::colors,
};

/// Playlist list with inline creation; Enter opens the detail sub-view.
pub struct Playlists {
    list_state: ListState,
    name_input: String,
    is_editing: bool,
    loading: bool,
}

impl Default for Playlists {
    fn default() -> Self {
        Self {
            list_state: ListState::default(),
            name_input: String::new(),
            is_editing: false,
            loading: true,
        }
    }
}

impl Playlists {
    fn selected_name(&self, ctx: &AppContext) -> Option<String> {
        self.list_state
            .selected()
            .and_then(|i| ctx.library.playlists().get(i))
            .map(|p| p.name.clone())
    }
}

#[async_trait]
impl View for Playlists {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, ctx: &AppContext) {
        if self.loading {
            let spinner = Spinner::default()
                .with_style(Style::default().fg(colors::PRIMARY))
                .with_label("Loading playlists...".to_string());
            f.render_widget(spinner, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        let input_style = if self.is_editing {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };
        let input_block = Block::default()
            .borders(Borders::ALL)
            .title("New playlist name (n)")
            .border_style(input_style);
        f.render_widget(
            Paragraph::new(self.name_input.clone()).block(input_block),
            chunks[0],
        );

        let playlists = ctx.library.playlists();
        if playlists.is_empty() {
            f.render_widget(List::new(vec![ListItem::new("No playlists yet.")]), chunks[1]);
            return;
        }

        let items: Vec<ListItem> = playlists
            .iter()
            .map(|playlist| {
                ListItem::new(format!(
                    "{} ({} songs)",
                    playlist.name,
                    playlist.songs.len()
                ))
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
            Some(i) if i >= playlists.len() => self.list_state.select(Some(playlists.len() - 1)),
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
        if self.is_editing {
            match key.code {
                KeyCode::Enter => {
                    if !self.name_input.trim().is_empty() {
                        let _ = ctx
                            .event_tx
                            .send(Event::CreatePlaylist(self.name_input.clone()));
                        self.name_input.clear();
                    }
                    self.is_editing = false;
                }
                KeyCode::Esc => {
                    self.name_input.clear();
                    self.is_editing = false;
                }
                KeyCode::Backspace => {
                    self.name_input.pop();
                }
                KeyCode::Char(c) => self.name_input.push(c),
                _ => {}
            }
            return Some(Action::None);
        }

        let len = ctx.library.playlists().len();
        match key.code {
            KeyCode::Char('n') => {
                self.is_editing = true;
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
            KeyCode::Char('d') => {
                if let Some(name) = self.selected_name(ctx) {
                    let _ = ctx.event_tx.send(Event::DeletePlaylist(name));
                }
            }
            KeyCode::Enter => {
                if let Some(name) = self.selected_name(ctx) {
                    let _ = ctx.event_tx.send(Event::OpenPlaylist(name));
                }
            }
            _ => return None,
        }
        Some(Action::None)
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        if let Event::ViewLoaded(Route::Playlists) = event {
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
