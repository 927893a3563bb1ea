use std::sync::{Arc, Mutex};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::App;
use crate::analysis::ProjectService;

/// Runs service requests in the background and applies their outcomes to the
/// shared [`App`].
///
/// `begin_*` transitions happen synchronously on the caller's `&mut App`
/// (the UI already holds the lock); completions re-acquire the lock after the
/// request finishes, so the lock is never held across an await.
#[derive(Clone)]
pub struct Dispatcher {
    app: Arc<Mutex<App>>,
    service: Arc<dyn ProjectService>,
    runtime: Handle,
    repaint: Option<egui::Context>,
}

impl Dispatcher {
    pub fn new(app: Arc<Mutex<App>>, service: Arc<dyn ProjectService>, runtime: Handle) -> Self {
        Self {
            app,
            service,
            runtime,
            repaint: None,
        }
    }

    /// Request a repaint of `ctx` whenever a request completes.
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    pub fn app(&self) -> &Arc<Mutex<App>> {
        &self.app
    }

    /// Analyze the repository currently selected in `app`.
    pub fn analyze(&self, app: &mut App) -> JoinHandle<()> {
        let (token, id) = app.begin_analysis();
        let this = self.clone();

        self.runtime.spawn(async move {
            let outcome = this.service.fetch_analysis(&id).await;
            this.apply(|app| {
                app.complete_analysis(token, outcome);
            });
        })
    }

    /// Fetch recommendations if the recommendations tab needs them.
    pub fn refresh_recommendations(&self, app: &mut App) -> Option<JoinHandle<()>> {
        let (token, id) = app.begin_recommendations()?;
        let this = self.clone();

        Some(self.runtime.spawn(async move {
            let outcome = this.service.fetch_recommendations(&id).await;
            this.apply(|app| {
                app.complete_recommendations(token, outcome);
            });
        }))
    }

    /// Probe the health endpoint and record the API status.
    pub fn check_health(&self) -> JoinHandle<()> {
        let this = self.clone();

        self.runtime.spawn(async move {
            let outcome = this.service.check_health().await;
            this.apply(|app| app.set_api_status(outcome));
        })
    }

    fn apply(&self, update: impl FnOnce(&mut App)) {
        match self.app.lock() {
            Ok(mut app) => update(&mut app),
            Err(e) => {
                log::error!("Failed to acquire app lock: {}", e);
                return;
            }
        }
        if let Some(ctx) = &self.repaint {
            ctx.request_repaint();
        }
    }
}
