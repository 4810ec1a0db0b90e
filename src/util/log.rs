use tracing_error::ErrorLayer;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::util::paths;

const LOG_ENV: &str = "MIXTAPE_LOG";
const LOG_FILE: &str = "mixtape.log";

/// Logs go to a file in the state directory; the terminal belongs to the UI.
/// The filter comes from `MIXTAPE_LOG`, then `RUST_LOG`, defaulting to `info`
/// for this crate.
pub fn initialize_logging() -> color_eyre::Result<()> {
    let directory = paths::state_dir();
    std::fs::create_dir_all(&directory)?;
    let log_file = std::fs::File::create(directory.join(LOG_FILE))?;

    let env_filter = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")));

    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(tracing_subscriber::EnvFilter::new(env_filter));

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .init();
    Ok(())
}
