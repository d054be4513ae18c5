#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use sea_orm::DatabaseConnection;

use fulfilment_api::{
    db::{self, DbConfig},
    models::Warehouse,
    repositories::{WarehouseRepository, WarehouseStore},
    AppState,
};

/// Helper harness for spinning up an application backed by an in-memory
/// SQLite database with migrations applied.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<WarehouseRepository>,
    pub db: Arc<DatabaseConnection>,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        // A single connection keeps every operation on the same in-memory
        // database.
        let cfg = DbConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        };

        let pool = db::establish_connection_with_config(&cfg)
            .await
            .expect("failed to connect to test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations");

        let db = Arc::new(pool);
        let state = AppState::new(db.clone());
        let store = state.store.clone();
        let router = fulfilment_api::app(state);

        Self { router, store, db }
    }

    /// Seed the three reference warehouses plus one archived record.
    pub async fn seed_reference_warehouses(&self) {
        for record in [
            warehouse("MWH.001", "AMSTERDAM-001", 50, 10, 1),
            warehouse("MWH.012", "ZWOLLE-001", 30, 5, 2),
            warehouse("MWH.023", "AMSTERDAM-001", 70, 20, 3),
        ] {
            self.store.create(&record).await.expect("seed warehouse");
        }

        let mut archived = warehouse("MWH.900", "AMSTERDAM-001", 60, 0, 4);
        archived.archived_at = Some(ts(10));
        self.store.create(&archived).await.expect("seed warehouse");
    }
}

/// Deterministic timestamp within January 2024.
pub fn ts(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap()
}

pub fn warehouse(
    code: &str,
    location: &str,
    capacity: i32,
    stock: i32,
    created_day: u32,
) -> Warehouse {
    Warehouse {
        business_unit_code: code.to_string(),
        location: location.to_string(),
        capacity,
        stock,
        created_at: ts(created_day),
        archived_at: None,
    }
}

/// Business unit codes of a result set, in result order.
pub fn codes(records: &[Warehouse]) -> Vec<&str> {
    records
        .iter()
        .map(|w| w.business_unit_code.as_str())
        .collect()
}
