use crate::ui::state::Route;

/// User intents from the global keymap, translated by the app into transport
/// commands or navigation.
#[derive(Debug, Clone)]
pub enum AppMessage {
    // User input
    Quit,
    TogglePlayPause,
    NextTrack,
    PreviousTrack,
    SeekForward,
    SeekBackward,

    // Navigation
    NavigateTo(Route),
    GoBack,
    NextSidebarItem,
    PreviousSidebarItem,
    SetSidebarIndex(usize),
}
