use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, ListState},
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

/// Liked songs in catalog order, with a shortcut to clear the lot.
pub struct Liked {
    list_state: ListState,
    loading: bool,
}

impl Default for Liked {
    fn default() -> Self {
        Self {
            list_state: ListState::default(),
            loading: true,
        }
    }
}

impl Liked {
    fn liked_songs<'a>(&self, ctx: &'a AppContext) -> Vec<&'a Song> {
        ctx.catalog
            .songs()
            .iter()
            .filter(|song| ctx.library.is_liked(&song.id))
            .collect()
    }

    fn selected_id(&self, ctx: &AppContext) -> Option<String> {
        let songs = self.liked_songs(ctx);
        self.list_state
            .selected()
            .and_then(|i| songs.get(i))
            .map(|song| song.id.clone())
    }
}

#[async_trait]
impl View for Liked {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, ctx: &AppContext) {
        if self.loading {
            let spinner = Spinner::default()
                .with_style(Style::default().fg(colors::PRIMARY))
                .with_label("Loading liked songs...".to_string());
            f.render_widget(spinner, area);
            return;
        }

        let songs = self.liked_songs(ctx);
        if songs.is_empty() {
            f.render_widget(List::new(vec![ListItem::new("No liked songs yet.")]), area);
            return;
        }

        let current_id = ctx.player.current_song_id();
        let is_playing = ctx.player.is_playing();
        let items: Vec<ListItem> = songs
            .iter()
            .map(|song| song_row(song, current_id == Some(song.id.as_str()), is_playing, true))
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

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        let len = self.liked_songs(ctx).len();
        match key.code {
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
            KeyCode::Char('U') => {
                let _ = ctx.event_tx.send(Event::UnlikeAll);
            }
            _ => return None,
        }
        Some(Action::None)
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        if let Event::ViewLoaded(Route::Liked) = event {
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
