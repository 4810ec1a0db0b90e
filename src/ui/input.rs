use crate::ui::message::AppMessage;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    /// Global keymap, consulted only after the active view declined the key.
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('q'), _) => Some(AppMessage::Quit),
            (KeyCode::Char(' '), _) => Some(AppMessage::TogglePlayPause),
            (KeyCode::Char('n'), _) => Some(AppMessage::NextTrack),
            (KeyCode::Char('p'), _) => Some(AppMessage::PreviousTrack),
            (KeyCode::Char('H'), _) => Some(AppMessage::SeekBackward),
            (KeyCode::Char('L'), _) => Some(AppMessage::SeekForward),
            (KeyCode::Esc, _) => Some(AppMessage::GoBack),
            (KeyCode::Tab, _) => Some(AppMessage::NextSidebarItem),
            (KeyCode::BackTab, _) => Some(AppMessage::PreviousSidebarItem),
            (KeyCode::Char('1'), _) => Some(AppMessage::SetSidebarIndex(0)),
            (KeyCode::Char('2'), _) => Some(AppMessage::SetSidebarIndex(1)),
            (KeyCode::Char('3'), _) => Some(AppMessage::SetSidebarIndex(2)),
            _ => None,
        }
    }
}
