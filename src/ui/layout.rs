use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders},
};

use crate::{
    ui::{
        app::App,
        components::{player::PlayerWidget, sidebar::Sidebar},
        state::Route,
    },
    util::colors,
};

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(area);

        let main_area = chunks[0];
        let player_area = chunks[1];

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(22), Constraint::Min(1)])
            .split(main_area);

        let sidebar_area = main_chunks[0];
        let content_area = main_chunks[1];

        let sidebar_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title("mixtape")
            .title_alignment(Alignment::Center);

        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title(self.app.state.nav.current().title())
            .title_alignment(Alignment::Center);

        let sidebar_inner = sidebar_block.inner(sidebar_area);
        let content_inner = content_block.inner(content_area);

        f.render_widget(sidebar_block, sidebar_area);
        f.render_widget(content_block, content_area);

        let sidebar_items = Route::ALL.iter().map(|route| route.title()).collect();
        f.render_widget(
            Sidebar::new(sidebar_items, self.app.state.nav.current().index()),
            sidebar_inner,
        );

        self.app
            .router
            .render(f, content_inner, &self.app.state, &self.app.ctx);

        let player = &self.app.ctx.player;
        let song = player
            .current_song_id()
            .and_then(|id| self.app.ctx.catalog.get(id));
        let player_widget = PlayerWidget::new(
            song,
            player.is_playing(),
            player.current_time(),
            player.duration(),
            player.progress_percent(),
        );
        f.render_widget(player_widget, player_area);
    }
}
