use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Size;
use tracing::{debug, info, warn};

use crate::{
    event::events::Event,
    player::commands::PlayerCommand,
    ui::{
        app::App,
        input::InputHandler,
        message::AppMessage,
        traits::Action,
        tui::{TerminalEvent, Tui},
        views::{PlaylistDetail, PlaylistPicker},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_terminal_event(app, evt, tui).await?;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_event(app, evt).await;
        }

        Ok(())
    }

    async fn handle_terminal_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::Init | TerminalEvent::Tick | TerminalEvent::Resize(..) => {}
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key).await,
            TerminalEvent::Mouse(mouse) => {
                let size = tui.size().ok();
                Self::handle_mouse_event(app, mouse, size).await;
            }
        }

        Ok(())
    }

    /// The single place where library, transport and router state mutate, so
    /// every event observes a consistent application state.
    pub async fn handle_event(app: &mut App, evt: Event) {
        app.router.on_event(&evt, &app.ctx).await;

        match evt {
            Event::ViewLoaded(route) => {
                // Content is revealed now; put the view back where the user
                // left it last time.
                if route == app.state.nav.current() {
                    let offset = app.state.nav.saved_offset(route);
                    if let Some(view) = app.router.active_view_mut() {
                        view.restore_scroll(offset);
                    }
                }
            }
            Event::ProgressTick => {
                if app.ctx.player.tick(&app.ctx.catalog) {
                    debug!(
                        "auto-advanced to {:?}",
                        app.ctx.player.current_song_id()
                    );
                }
            }
            Event::Play(song_id) => {
                info!("play {song_id}");
                app.ctx
                    .player
                    .handle_command(PlayerCommand::Play(song_id), &app.ctx.catalog);
                app.start_progress_clock();
            }
            Event::TogglePlayPause => {
                app.ctx
                    .player
                    .handle_command(PlayerCommand::TogglePlayPause, &app.ctx.catalog);
            }
            Event::Next => {
                app.ctx
                    .player
                    .handle_command(PlayerCommand::Next, &app.ctx.catalog);
            }
            Event::Previous => {
                app.ctx
                    .player
                    .handle_command(PlayerCommand::Previous, &app.ctx.catalog);
            }
            Event::Seek(fraction) => {
                app.ctx
                    .player
                    .handle_command(PlayerCommand::Seek(fraction), &app.ctx.catalog);
            }
            Event::SeekForward(secs) => {
                app.ctx
                    .player
                    .handle_command(PlayerCommand::SeekForward(secs), &app.ctx.catalog);
            }
            Event::SeekBackward(secs) => {
                app.ctx
                    .player
                    .handle_command(PlayerCommand::SeekBackward(secs), &app.ctx.catalog);
            }
            Event::ToggleLike(song_id) => {
                app.ctx.library.toggle_like(&song_id);
                Self::persist(app);
            }
            Event::UnlikeAll => {
                app.ctx.library.unlike_all();
                Self::persist(app);
            }
            Event::CreatePlaylist(name) => {
                app.ctx.library.create_playlist(&name);
                Self::persist(app);
            }
            Event::DeletePlaylist(name) => {
                app.ctx.library.delete_playlist(&name);
                Self::persist(app);
            }
            Event::AddToPlaylist(name, song_id) => {
                app.ctx.library.add_to_playlist(&name, &song_id);
                Self::persist(app);
            }
            Event::RemoveFromPlaylist(name, song_id) => {
                app.ctx.library.remove_from_playlist(&name, &song_id);
                Self::persist(app);
            }
            Event::OpenPlaylist(name) => {
                app.router.push(Box::new(PlaylistDetail::new(name)));
            }
            Event::OpenPlaylistPicker(song_id) => {
                app.router.set_overlay(Box::new(PlaylistPicker::new(song_id)));
            }
        }
    }

    /// Library changes mirror to disk after every mutation; a failed write is
    /// logged and the session carries on from memory.
    fn persist(app: &App) {
        if let Err(e) = app.ctx.store.save(&app.ctx.library) {
            warn!("failed to persist library: {e}");
        }
    }

    async fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }

        match evt.code {
            KeyCode::Char('c') if evt.modifiers == KeyModifiers::CONTROL => {
                app.update(AppMessage::Quit).await;
                return;
            }
            KeyCode::Tab => {
                app.update(AppMessage::NextSidebarItem).await;
                return;
            }
            KeyCode::BackTab => {
                app.update(AppMessage::PreviousSidebarItem).await;
                return;
            }
            _ => {}
        }

        let action = app.router.handle_input(evt, &app.state, &app.ctx).await;

        if let Some(action) = action {
            Self::dispatch_action(app, action).await;
            return;
        }

        if let Some(msg) = InputHandler::handle_key(evt) {
            app.update(msg).await;
        }
    }

    async fn dispatch_action(app: &mut App, action: Action) {
        match action {
            Action::Quit => app.should_quit = true,
            Action::Back => app.update(AppMessage::GoBack).await,
            Action::None => {}
        }
    }

    async fn handle_mouse_event(app: &mut App, evt: MouseEvent, size: Option<Size>) {
        match evt.kind {
            // A click on the player bar seeks to that point of the track.
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(size) = size else { return };
                if evt.row >= size.height.saturating_sub(3) && size.width > 2 {
                    let fraction =
                        evt.column.saturating_sub(1) as f64 / (size.width - 2) as f64;
                    let _ = app.event_tx.send(Event::Seek(fraction));
                }
            }
            MouseEventKind::ScrollUp => app.update(AppMessage::SeekForward).await,
            MouseEventKind::ScrollDown => app.update(AppMessage::SeekBackward).await,
            _ => {}
        }
    }
}
