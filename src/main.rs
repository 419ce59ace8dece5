use anyhow::Result;
use promanage::config::AppConfig;
use promanage::ui_dioxus::App;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<()> {
    use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
    use tracing_subscriber::EnvFilter;

    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(e) = load_error {
        tracing::warn!(error = %e, "using default configuration");
    }
    tracing::info!(title = %config.window.title, "launching desktop window");

    let window = WindowBuilder::new()
        .with_title(config.window.title.clone())
        .with_inner_size(LogicalSize::new(config.window.width, config.window.height));

    dioxus_desktop::launch::launch(App, vec![], Config::new().with_window(window));

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() -> Result<()> {
    // No config directory in the browser
    let config = AppConfig::default();
    wasm_logger::init(wasm_logger::Config::default());
    tracing::info!(title = %config.window.title, "launching web app");

    dioxus_web::launch::launch(App, vec![], dioxus_web::Config::default());

    Ok(())
}
