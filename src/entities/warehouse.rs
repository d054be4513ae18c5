use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Persisted warehouse row. The surrogate `id` is never exposed; callers
/// resolve records by `business_unit_code`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "warehouse")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub business_unit_code: String,
    pub location: String,
    pub capacity: i32,
    pub stock: i32,
    pub created_at: DateTimeUtc,
    /// `None` means active; set once to archive (soft delete), never unset.
    pub archived_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
