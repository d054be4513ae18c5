use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::db::query_builder::{SearchParams, DEFAULT_PAGE_SIZE};
use crate::errors::ServiceError;
use crate::models::Warehouse;
use crate::repositories::WarehouseStore;
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWarehouseRequest {
    #[validate(length(min = 1))]
    pub business_unit_code: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(range(min = 0))]
    pub capacity: i32,
    #[validate(range(min = 0))]
    pub stock: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub archived_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWarehouseRequest {
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(range(min = 0))]
    pub capacity: i32,
    #[validate(range(min = 0))]
    pub stock: i32,
    pub archived_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub location: Option<String>,
    pub min_capacity: Option<i32>,
    pub max_capacity: Option<i32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

impl From<SearchQuery> for SearchParams {
    fn from(query: SearchQuery) -> Self {
        Self {
            location: query.location,
            min_capacity: query.min_capacity,
            max_capacity: query.max_capacity,
            sort_by: query.sort_by,
            sort_order: query.sort_order,
            page: query.page.unwrap_or(0),
            page_size: query.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

/// Create the warehouse router
pub fn warehouse_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_warehouses).post(create_warehouse))
        .route("/search", get(search_warehouses))
        .route(
            "/:code",
            get(get_warehouse)
                .put(update_warehouse)
                .delete(delete_warehouse),
        )
}

/// List every warehouse, active and archived
pub async fn list_warehouses(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let warehouses = state.store.get_all().await?;
    Ok(Json(warehouses))
}

/// Create a new warehouse
pub async fn create_warehouse(
    State(state): State<AppState>,
    Json(req): Json<CreateWarehouseRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    req.validate()?;

    let warehouse = Warehouse {
        business_unit_code: req.business_unit_code,
        location: req.location,
        capacity: req.capacity,
        stock: req.stock,
        created_at: req.created_at.unwrap_or_else(Utc::now),
        archived_at: req.archived_at,
    };

    let created = state.store.create(&warehouse).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Look up a warehouse by business unit code
pub async fn get_warehouse(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let warehouse = state
        .store
        .find_by_business_unit_code(&code)
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound(format!("warehouse with business unit code '{code}' not found"))
        })?;

    Ok(Json(warehouse))
}

/// Update an existing warehouse in place
pub async fn update_warehouse(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(req): Json<UpdateWarehouseRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    req.validate()?;

    // created_at here is a placeholder; the store keeps the persisted value
    let warehouse = Warehouse {
        business_unit_code: code,
        location: req.location,
        capacity: req.capacity,
        stock: req.stock,
        created_at: Utc::now(),
        archived_at: req.archived_at,
    };

    let updated = state.store.update(&warehouse).await?;
    Ok(Json(updated))
}

/// Hard delete; the store rejects this unconditionally
pub async fn delete_warehouse(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let warehouse = state
        .store
        .find_by_business_unit_code(&code)
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound(format!("warehouse with business unit code '{code}' not found"))
        })?;

    state.store.remove(&warehouse).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Search active warehouses with optional filters, sort and pagination
pub async fn search_warehouses(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let warehouses = state.store.search(query.into()).await?;
    Ok(Json(warehouses))
}
