use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub mod warehouse_repository;

pub use warehouse_repository::WarehouseRepository;

use crate::db::query_builder::SearchParams;
use crate::errors::ServiceError;
use crate::models::Warehouse;

/// Sole gateway to persisted warehouse records. Callers depend on this port;
/// the SeaORM-backed `WarehouseRepository` is the one concrete adapter.
#[async_trait]
pub trait WarehouseStore: Send + Sync {
    /// Every persisted record, active and archived.
    async fn get_all(&self) -> Result<Vec<Warehouse>, ServiceError>;

    /// Inserts a new record copying all fields verbatim, including a
    /// caller-supplied `created_at`/`archived_at`. Fails with `Conflict` if
    /// the business unit code already exists.
    async fn create(&self, warehouse: &Warehouse) -> Result<Warehouse, ServiceError>;

    /// Overwrites location, capacity, stock and archived_at of the record
    /// identified by `warehouse.business_unit_code`; the code and
    /// `created_at` of the persisted record are left untouched. Fails with
    /// `NotFound` if no such record exists. Durably visible before return.
    async fn update(&self, warehouse: &Warehouse) -> Result<Warehouse, ServiceError>;

    /// Hard delete is deliberately unsupported; always fails with
    /// `UnsupportedOperation`.
    async fn remove(&self, warehouse: &Warehouse) -> Result<(), ServiceError>;

    /// Exact-match lookup by business unit code; `None` when absent.
    async fn find_by_business_unit_code(
        &self,
        code: &str,
    ) -> Result<Option<Warehouse>, ServiceError>;

    /// Filtered, sorted and paginated read over active records only.
    async fn search(&self, params: SearchParams) -> Result<Vec<Warehouse>, ServiceError>;
}

/// Repository trait for common database operations
pub trait Repository {
    fn get_db(&self) -> &DatabaseConnection;
}

#[derive(Debug)]
pub struct BaseRepository {
    db: Arc<DatabaseConnection>,
}

impl BaseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl Repository for BaseRepository {
    fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}
