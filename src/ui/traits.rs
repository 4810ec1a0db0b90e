use async_trait::async_trait;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::{
    event::events::Event,
    ui::{context::AppContext, state::AppState},
};

/// Results a view hands back to the app instead of mutating it directly.
/// Everything else a view wants done goes through the event channel.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Back,
    /// Consumed without further effect; stops the key from reaching the
    /// global keymap (text entry would otherwise trigger it).
    None,
}

#[async_trait]
pub trait View: Send {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext);

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action>;

    async fn on_event(&mut self, _event: &Event, _ctx: &AppContext) {}

    /// Vertical offset recorded when navigation leaves this view.
    fn scroll_offset(&self) -> usize {
        0
    }

    /// Reapplies a recorded offset once the view's content is revealed.
    fn restore_scroll(&mut self, _offset: usize) {}
}
