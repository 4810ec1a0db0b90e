use std::collections::HashMap;

/// The three top-level views. Playlist detail renders inside `Playlists` but
/// is not a route of its own; re-entering `Playlists` always lands on the
/// list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    Liked,
    Playlists,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::Liked, Route::Playlists];

    /// External entry point, the fragment analog: unrecognized names resolve
    /// to `None` and are ignored by the caller.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "home" => Some(Route::Home),
            "liked" => Some(Route::Liked),
            "playlists" => Some(Route::Playlists),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Route::Home => 0,
            Route::Liked => 1,
            Route::Playlists => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Liked => "Liked Songs",
            Route::Playlists => "Playlists",
        }
    }
}

/// Which route is active plus the remembered scroll offset per route.
/// Offsets live only for the session; they are never persisted.
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    current: Route,
    scroll_positions: HashMap<Route, usize>,
}

impl Navigation {
    pub fn start_at(route: Route) -> Self {
        Self {
            current: route,
            ..Self::default()
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Records the outgoing route's offset and activates the target. Returns
    /// `false` without touching anything when the target is already active.
    pub fn switch(&mut self, target: Route, outgoing_offset: usize) -> bool {
        if self.current == target {
            return false;
        }
        self.scroll_positions.insert(self.current, outgoing_offset);
        self.current = target;
        true
    }

    pub fn saved_offset(&self, route: Route) -> usize {
        self.scroll_positions.get(&route).copied().unwrap_or(0)
    }
}

#[derive(Debug, Default)]
pub struct AppState {
    pub nav: Navigation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognizes_the_three_routes() {
        assert_eq!(Route::parse("home"), Some(Route::Home));
        assert_eq!(Route::parse("liked"), Some(Route::Liked));
        assert_eq!(Route::parse("playlists"), Some(Route::Playlists));
        assert_eq!(Route::parse("queue"), None);
        assert_eq!(Route::parse(""), None);
    }

    #[test]
    fn switching_to_the_active_route_is_a_noop() {
        let mut nav = Navigation::default();
        nav.switch(Route::Liked, 7);

        let before = nav.scroll_positions.clone();
        assert!(!nav.switch(Route::Liked, 42));
        assert_eq!(nav.scroll_positions, before);
        assert_eq!(nav.current(), Route::Liked);
    }

    #[test]
    fn switching_records_the_outgoing_offset() {
        let mut nav = Navigation::default();

        assert!(nav.switch(Route::Playlists, 13));
        assert_eq!(nav.saved_offset(Route::Home), 13);
        // Unvisited routes come back at the top.
        assert_eq!(nav.saved_offset(Route::Liked), 0);

        assert!(nav.switch(Route::Home, 2));
        assert_eq!(nav.saved_offset(Route::Playlists), 2);
        assert_eq!(nav.current(), Route::Home);
    }
}
