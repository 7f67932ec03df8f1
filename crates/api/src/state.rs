use std::sync::Arc;

use forecast_core::edit_window::EditWindow;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: forecast_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// The timesheet edit window gate from the active configuration.
    pub fn edit_window(&self) -> EditWindow {
        self.config.edit_window()
    }
}
