use std::time::Duration;

use flume::{Receiver, Sender};

use ratatui::Frame;

use crate::{
    catalog::Catalog,
    event::events::Event,
    library::store::StateStore,
    player::{clock, transport::Transport},
    ui::{
        context::AppContext,
        layout::AppLayout,
        message::AppMessage,
        router::Router,
        state::{AppState, Navigation, Route},
        tui,
        util::handler::EventHandler,
        views,
    },
    util::task::TaskManager,
};

/// Simulated content-load delay shown behind the loading indicator.
const VIEW_LOAD_DELAY: Duration = Duration::from_millis(300);
/// Step for keyboard and mouse-wheel seeking.
pub const SEEK_STEP_SECS: u32 = 5;

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub ctx: AppContext,
    pub state: AppState,
    pub router: Router,
    pub task_manager: TaskManager,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(initial_route: Route) -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let store = StateStore::open()?;
        let library = store.load();

        let ctx = AppContext {
            catalog: Catalog::builtin(),
            library,
            store,
            player: Transport::new(),
            event_tx: event_tx.clone(),
        };

        Ok(Self {
            event_rx,
            event_tx,
            ctx,
            state: AppState {
                nav: Navigation::start_at(initial_route),
            },
            router: Router::new(views::view_for(initial_route)),
            task_manager: TaskManager::new(),
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        // The initial view goes through the same simulated load as any
        // navigation.
        self.load_view(self.state.nav.current());

        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.task_manager.abort_all();
        tui.exit()?;
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            AppLayout::new(self).render(frame, frame.area());
        }
    }

    pub async fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::TogglePlayPause => self.send(Event::TogglePlayPause),
            AppMessage::NextTrack => self.send(Event::Next),
            AppMessage::PreviousTrack => self.send(Event::Previous),
            AppMessage::SeekForward => self.send(Event::SeekForward(SEEK_STEP_SECS)),
            AppMessage::SeekBackward => self.send(Event::SeekBackward(SEEK_STEP_SECS)),
            AppMessage::NavigateTo(route) => self.navigate(route),
            AppMessage::GoBack => {
                if self.router.has_overlay() {
                    self.router.clear_overlay();
                } else {
                    self.router.pop();
                }
            }
            AppMessage::NextSidebarItem => {
                let idx = (self.state.nav.current().index() + 1) % Route::ALL.len();
                self.navigate(Route::ALL[idx]);
            }
            AppMessage::PreviousSidebarItem => {
                let idx =
                    (self.state.nav.current().index() + Route::ALL.len() - 1) % Route::ALL.len();
                self.navigate(Route::ALL[idx]);
            }
            AppMessage::SetSidebarIndex(idx) => {
                if let Some(route) = Route::ALL.get(idx) {
                    self.navigate(*route);
                }
            }
        }
    }

    fn send(&self, event: Event) {
        let _ = self.event_tx.send(event);
    }

    /// Route switch: records the outgoing view's scroll offset, then rebuilds
    /// the target's content from scratch behind the simulated load. Requests
    /// for the active route are no-ops.
    pub fn navigate(&mut self, route: Route) {
        let offset = self.router.scroll_offset();
        if !self.state.nav.switch(route, offset) {
            return;
        }
        self.router.replace_root(views::view_for(route));
        self.load_view(route);
    }

    /// The keyed spawn aborts a stale timer when navigation changes again
    /// mid-delay, and the completion event carries its route, so a fast
    /// double-navigation cannot reveal the wrong view.
    fn load_view(&mut self, route: Route) {
        let tx = self.event_tx.clone();
        self.task_manager.spawn(
            "view_load",
            tokio::spawn(async move {
                tokio::time::sleep(VIEW_LOAD_DELAY).await;
                let _ = tx.send_async(Event::ViewLoaded(route)).await;
            }),
        );
    }

    /// (Re)starts the 1-second progress clock; the keyed spawn guarantees at
    /// most one is ever live.
    pub fn start_progress_clock(&mut self) {
        self.task_manager
            .spawn("progress", clock::spawn_tick_clock(self.event_tx.clone()));
    }
}
