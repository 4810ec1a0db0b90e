use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Widget},
};

use crate::util::colors;

/// Navigation affordance: one row per route, the active one highlighted.
pub struct Sidebar<'a> {
    items: Vec<&'a str>,
    active_index: usize,
}

impl<'a> Sidebar<'a> {
    pub fn new(items: Vec<&'a str>, active_index: usize) -> Self {
        Self {
            items,
            active_index,
        }
    }
}

impl<'a> Widget for Sidebar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if i == self.active_index {
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::NEUTRAL)
                };
                ListItem::new(format!("  {} {}", i + 1, item)).style(style)
            })
            .collect();

        List::new(items).render(area, buf);
    }
}
