pub mod home;
pub mod liked;
pub mod playlist_detail;
pub mod playlist_picker;
pub mod playlists;

pub use home::Home;
pub use liked::Liked;
pub use playlist_detail::PlaylistDetail;
pub use playlist_picker::PlaylistPicker;
pub use playlists::Playlists;

use crate::ui::{state::Route, traits::View};

/// Fresh root view for a route; navigation always rebuilds content from
/// scratch.
pub fn view_for(route: Route) -> Box<dyn View> {
    match route {
        Route::Home => Box::new(Home::default()),
        Route::Liked => Box::new(Liked::default()),
        Route::Playlists => Box::new(Playlists::default()),
    }
}
