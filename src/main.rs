use mixtape::{
    ui::{app::App, state::Route},
    util::{hook::set_panic_hook, log::initialize_logging},
};

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> color_eyre::Result<()> {
    setup()?;

    // Optional view name on the command line, the fragment analog;
    // unrecognized names fall back to home.
    let initial_route = std::env::args()
        .nth(1)
        .and_then(|name| Route::parse(&name))
        .unwrap_or_default();

    let mut app = App::new(initial_route)?;
    app.run().await
}

fn setup() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenv::dotenv().ok();
    set_panic_hook();
    initialize_logging()
}
