mod backend;
mod frontend;
mod utils;

use crate::backend::supabase::{SessionStore, SupabaseClient};
use crate::backend::utils::config::AppConfig;
use crate::frontend::app::App;
use crate::frontend::services::AppContext;
use anyhow::Context;
use dioxus::LaunchBuilder;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use std::sync::OnceLock;
use tokio::runtime::Runtime;

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load();
    utils::logging::init(&config.logging.level);
    log::info!("Starting AI Studio against {}", config.backend.url);

    if config.backend.anon_key.is_empty() {
        log::warn!(
            "No anon key configured; set {} or backend.anon_key in config.json",
            backend::utils::config::ANON_KEY_ENV
        );
    }

    // Backend calls need a tokio context regardless of the renderer's executor.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to create runtime")?;
    let _guard = RUNTIME.get_or_init(|| runtime).enter();

    let client = SupabaseClient::new(&config.backend, SessionStore::in_app_dir())
        .context("Failed to create backend client")?;
    let context = AppContext::new(client, config);

    let size = LogicalSize::new(1280.0, 832.0);
    let desktop = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("AI Studio")
                .with_inner_size(size)
                .with_min_inner_size(LogicalSize::new(800.0, 600.0)),
        )
        .with_menu(None);

    LaunchBuilder::new()
        .with_cfg(desktop)
        .with_context(context)
        .launch(App);

    Ok(())
}
