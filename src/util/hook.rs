use crate::ui::tui;

pub fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Leave the terminal usable before the report prints.
        let _ = tui::Tui::restore();
        tracing::error!("panic: {panic_info}");
        hook(panic_info);
    }));
}
