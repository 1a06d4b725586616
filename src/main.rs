mod calling;
mod commands;
mod components;
mod config;
mod error;
mod platform;
mod session;
mod theme;

use components::App;

fn init_logging() -> anyhow::Result<()> {
    #[cfg(target_arch = "wasm32")]
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO)
        .map_err(|e| anyhow::anyhow!("logger init failed: {}", e))?;
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::try_init()?;
    Ok(())
}

fn main() {
    // Logging is best effort; the app runs without it
    if let Err(e) = init_logging() {
        eprintln!("{}", e);
    }

    // Launch the Dioxus web application
    dioxus::launch(App);
}
