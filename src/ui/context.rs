use flume::Sender;

use crate::{
    catalog::Catalog, event::events::Event, library::Library, library::store::StateStore,
    player::transport::Transport,
};

/// Everything views read from and the channel they talk back through. Only
/// the event handler mutates the library and transport, so handlers never
/// observe a half-applied change.
pub struct AppContext {
    pub catalog: Catalog,
    pub library: Library,
    pub store: StateStore,
    pub player: Transport,
    pub event_tx: Sender<Event>,
}
