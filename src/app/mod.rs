pub mod catalog;
pub mod request;
pub mod state;
pub mod styles;
pub mod tasks;
pub mod ui;
pub mod view;

use eframe::App as EApp;
use std::sync::{Arc, Mutex};

pub use catalog::{Category, Selection, CATALOG};
pub use request::{RequestLane, RequestState, RequestToken};
pub use state::{ApiStatus, App};
pub use tasks::Dispatcher;
pub use view::{NavigationHistory, Page, Tab, ViewState};

/// Thread-safe wrapper around App for use with eframe
pub struct AppWrapper {
    pub app: Arc<Mutex<App>>,
    pub dispatcher: Dispatcher,
}

impl AppWrapper {
    /// Wrap the shared state and kick off the API health probe.
    pub fn new(dispatcher: Dispatcher) -> Self {
        dispatcher.check_health();
        Self {
            app: Arc::clone(dispatcher.app()),
            dispatcher,
        }
    }
}

impl EApp for AppWrapper {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Ok(mut app) = self.app.lock() {
            ui::draw_ui(&mut app, ctx, &self.dispatcher);
        } else {
            log::error!("Failed to acquire app lock in update");
        }
    }
}
