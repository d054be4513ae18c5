pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod migrator;
pub mod models;
pub mod repositories;

use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;

use repositories::WarehouseRepository;

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<WarehouseRepository>,
}

impl AppState {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            store: Arc::new(WarehouseRepository::new(db)),
        }
    }
}

/// Assembles the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/warehouse", handlers::warehouses::warehouse_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
