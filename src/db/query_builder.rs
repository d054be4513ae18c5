use sea_orm::{ColumnTrait, Condition, QueryFilter, QueryOrder, QuerySelect, Select};

use crate::entities::warehouse::{Column, Entity as Warehouse};

/// Default page window applied by callers that do not specify one.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Typed search parameters for active warehouses. Filters combine with AND;
/// absent filters are not applied. `page` is 0-indexed.
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub location: Option<String>,
    pub min_capacity: Option<i32>,
    pub max_capacity: Option<i32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: u64,
    pub page_size: u64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            location: None,
            min_capacity: None,
            max_capacity: None,
            sort_by: None,
            sort_order: None,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Column the result set is ordered by. Unrecognized or absent `sortBy`
/// values fall back to capacity; this mirrors the documented precedent
/// behavior and is pinned by tests.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortKey {
    CreatedAt,
    Capacity,
}

impl SortKey {
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.eq_ignore_ascii_case("createdAt") => SortKey::CreatedAt,
            _ => SortKey::Capacity,
        }
    }

    fn column(self) -> Column {
        match self {
            SortKey::CreatedAt => Column::CreatedAt,
            SortKey::Capacity => Column::Capacity,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }
}

/// Builds the single parameterized query behind `WarehouseStore::search`:
/// archived records are always excluded, optional filters are ANDed in, one
/// sort key is applied and the page window is sliced with OFFSET/LIMIT so
/// cost scales with the page size rather than the table size.
pub fn build_search(params: &SearchParams) -> Select<Warehouse> {
    use sea_orm::EntityTrait;

    let mut condition = Condition::all().add(Column::ArchivedAt.is_null());
    if let Some(location) = &params.location {
        condition = condition.add(Column::Location.eq(location.as_str()));
    }
    if let Some(min_capacity) = params.min_capacity {
        condition = condition.add(Column::Capacity.gte(min_capacity));
    }
    if let Some(max_capacity) = params.max_capacity {
        condition = condition.add(Column::Capacity.lte(max_capacity));
    }

    let query = Warehouse::find().filter(condition);
    let column = SortKey::resolve(params.sort_by.as_deref()).column();
    let query = match SortDirection::resolve(params.sort_order.as_deref()) {
        SortDirection::Asc => query.order_by_asc(column),
        SortDirection::Desc => query.order_by_desc(column),
    };

    // The offset multiply must not wrap on hostile page values; saturating
    // keeps an oversized page an empty window.
    let offset = params.page.saturating_mul(params.page_size);
    query.offset(offset).limit(params.page_size)
}
