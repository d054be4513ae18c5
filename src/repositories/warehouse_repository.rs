use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
    TransactionTrait,
};
use std::sync::Arc;
use tracing::instrument;

use crate::db::query_builder::{build_search, SearchParams};
use crate::entities::warehouse::{ActiveModel, Column, Entity as WarehouseEntity};
use crate::errors::ServiceError;
use crate::models::Warehouse;
use crate::repositories::{BaseRepository, Repository, WarehouseStore};

/// SeaORM-backed warehouse store
#[derive(Debug)]
pub struct WarehouseRepository {
    base: BaseRepository,
}

impl WarehouseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl WarehouseStore for WarehouseRepository {
    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Warehouse>, ServiceError> {
        let records = WarehouseEntity::find().all(self.base.get_db()).await?;
        Ok(records.into_iter().map(Warehouse::from).collect())
    }

    #[instrument(skip(self), fields(code = %warehouse.business_unit_code))]
    async fn create(&self, warehouse: &Warehouse) -> Result<Warehouse, ServiceError> {
        let record = ActiveModel {
            business_unit_code: Set(warehouse.business_unit_code.clone()),
            location: Set(warehouse.location.clone()),
            capacity: Set(warehouse.capacity),
            stock: Set(warehouse.stock),
            created_at: Set(warehouse.created_at),
            archived_at: Set(warehouse.archived_at),
            ..Default::default()
        };

        let inserted = record
            .insert(self.base.get_db())
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => ServiceError::Conflict(format!(
                    "warehouse with business unit code '{}' already exists",
                    warehouse.business_unit_code
                )),
                _ => ServiceError::DatabaseError(e),
            })?;

        Ok(inserted.into())
    }

    #[instrument(skip(self), fields(code = %warehouse.business_unit_code))]
    async fn update(&self, warehouse: &Warehouse) -> Result<Warehouse, ServiceError> {
        // Explicit transaction: the write is committed, and therefore visible
        // to subsequent reads, before this call returns.
        let txn = self.base.get_db().begin().await?;

        let existing = WarehouseEntity::find()
            .filter(Column::BusinessUnitCode.eq(warehouse.business_unit_code.as_str()))
            .one(&txn)
            .await?;

        let Some(existing) = existing else {
            txn.rollback().await?;
            return Err(ServiceError::NotFound(format!(
                "warehouse with business unit code '{}' not found",
                warehouse.business_unit_code
            )));
        };

        // business_unit_code and created_at keep their persisted values
        let mut record: ActiveModel = existing.into();
        record.location = Set(warehouse.location.clone());
        record.capacity = Set(warehouse.capacity);
        record.stock = Set(warehouse.stock);
        record.archived_at = Set(warehouse.archived_at);

        let updated = record.update(&txn).await?;
        txn.commit().await?;

        Ok(updated.into())
    }

    async fn remove(&self, warehouse: &Warehouse) -> Result<(), ServiceError> {
        Err(ServiceError::UnsupportedOperation(format!(
            "remove is not supported (requested for '{}')",
            warehouse.business_unit_code
        )))
    }

    #[instrument(skip(self))]
    async fn find_by_business_unit_code(
        &self,
        code: &str,
    ) -> Result<Option<Warehouse>, ServiceError> {
        let record = WarehouseEntity::find()
            .filter(Column::BusinessUnitCode.eq(code))
            .one(self.base.get_db())
            .await?;

        Ok(record.map(Warehouse::from))
    }

    #[instrument(skip(self))]
    async fn search(&self, params: SearchParams) -> Result<Vec<Warehouse>, ServiceError> {
        let records = build_search(&params).all(self.base.get_db()).await?;
        Ok(records.into_iter().map(Warehouse::from).collect())
    }
}

impl Repository for WarehouseRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}
