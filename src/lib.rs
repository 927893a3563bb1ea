//! # Repo Compass
//!
//! `repocompass` is a desktop dashboard for judging how healthy an open-source
//! repository is before contributing to it. Metrics are computed by a remote
//! analysis API; this crate turns them into color-coded indicators and drives
//! the page, tab and request state of the dashboard.
//!
//! ## Features
//!
//! - Pick a repository from a built-in catalog or type any `owner/repo`
//! - Activity trend, bus-factor and issue-resolution tiers
//! - Contribution recommendations grouped by priority
//! - Stale responses are never allowed to overwrite newer ones
//! - API availability indicator
//!
//! ## Example
//!
//! ```no_run
//! use repocompass::analysis::HttpProjectService;
//! use repocompass::app::{App, AppWrapper, Dispatcher};
//! use repocompass::config::Settings;
//! use std::sync::{Arc, Mutex};
//!
//! # fn main() -> anyhow::Result<()> {
//! let runtime = tokio::runtime::Runtime::new()?;
//! let settings = Settings::default();
//! let service = Arc::new(HttpProjectService::from_settings(&settings)?);
//! let app = Arc::new(Mutex::new(App::new(&settings.last_route, &settings.default_project)));
//! let dispatcher = Dispatcher::new(app, service, runtime.handle().clone());
//!
//! let _guard = runtime.enter();
//! eframe::run_native(
//!     "Repo Compass",
//!     eframe::NativeOptions::default(),
//!     Box::new(|cc| {
//!         let dispatcher = dispatcher.with_repaint(cc.egui_ctx.clone());
//!         Ok(Box::new(AppWrapper::new(dispatcher)))
//!     }),
//! )
//! .map_err(|e| anyhow::anyhow!("{}", e))?;
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod app;
pub mod config;
pub mod error;
pub mod metrics;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use app::App as RepoCompassApp;
pub use error::ServiceError;
pub use types::{AnalysisResult, Recommendation, RepositoryIdentifier};
