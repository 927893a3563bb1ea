//! Repo Compass
//!
//! A GUI dashboard for exploring the health of open-source repositories.

use anyhow::{anyhow, Context};
use clap::Parser;
use eframe::egui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::runtime::Runtime;

use repocompass::analysis::HttpProjectService;
use repocompass::app::{App, AppWrapper, Dispatcher};
use repocompass::config::{Settings, API_BASE_ENV};

#[derive(Parser, Debug)]
#[command(name = "repocompass", version, about = "Open-source repository health dashboard")]
struct Cli {
    /// Base URL of the analysis API
    #[arg(long, env = API_BASE_ENV)]
    api_base: Option<String>,

    /// Settings file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Navigation token to open, e.g. "/project-explorer"
    #[arg(long)]
    route: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let settings_path = cli.config.clone().or_else(Settings::default_path);
    let mut settings = match &settings_path {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    settings.apply_env();
    if let Some(api_base) = cli.api_base {
        settings.api_base = api_base;
    }
    let initial_route = cli.route.unwrap_or_else(|| settings.last_route.clone());
    log::info!("Using analysis API at {}", settings.api_base);

    // Initialize the Tokio runtime
    let rt = Runtime::new().context("Failed to start async runtime")?;
    let service = Arc::new(
        HttpProjectService::from_settings(&settings).context("Failed to build HTTP client")?,
    );
    let app = Arc::new(Mutex::new(App::new(&initial_route, &settings.default_project)));
    let dispatcher = Dispatcher::new(Arc::clone(&app), service, rt.handle().clone());

    let _guard = rt.enter();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Repo Compass"),
        ..Default::default()
    };

    eframe::run_native(
        "Repo Compass",
        options,
        Box::new(|cc| {
            let dispatcher = dispatcher.with_repaint(cc.egui_ctx.clone());
            Ok(Box::new(AppWrapper::new(dispatcher)) as Box<dyn eframe::App>)
        }),
    )
    .map_err(|e| anyhow!("Error running application: {}", e))?;

    // Remember the page for the next start
    if let Some(path) = settings_path {
        match app.lock() {
            Ok(app) => settings.last_route = app.current_token().to_string(),
            Err(e) => log::warn!("Could not read final navigation state: {}", e),
        }
        if let Err(e) = settings.save(&path) {
            log::warn!("Failed to save settings to {}: {}", path.display(), e);
        }
    }

    Ok(())
}
