use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::warehouse;

/// Detached domain representation of a warehouse. This is the only shape
/// callers hold; the persisted row stays owned by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub business_unit_code: String,
    pub location: String,
    pub capacity: i32,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub archived_at: Option<DateTime<Utc>>,
}

impl Warehouse {
    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }
}

impl From<warehouse::Model> for Warehouse {
    fn from(model: warehouse::Model) -> Self {
        Self {
            business_unit_code: model.business_unit_code,
            location: model.location,
            capacity: model.capacity,
            stock: model.stock,
            created_at: model.created_at,
            archived_at: model.archived_at,
        }
    }
}
