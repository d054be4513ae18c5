mod common;

use common::{ts, warehouse, TestApp};
use fulfilment_api::errors::ServiceError;
use fulfilment_api::repositories::WarehouseStore;

#[tokio::test]
async fn create_then_lookup_round_trips_all_fields() {
    let app = TestApp::new().await;

    let record = warehouse("MWH.100", "UTRECHT-001", 80, 12, 5);
    let created = app.store.create(&record).await.unwrap();
    assert_eq!(created, record);

    let found = app
        .store
        .find_by_business_unit_code("MWH.100")
        .await
        .unwrap()
        .expect("created warehouse should be found");
    assert_eq!(found, record);
}

#[tokio::test]
async fn create_preserves_caller_supplied_archived_at() {
    let app = TestApp::new().await;

    let mut record = warehouse("MWH.101", "UTRECHT-001", 80, 12, 5);
    record.archived_at = Some(ts(6));

    let created = app.store.create(&record).await.unwrap();
    assert_eq!(created.archived_at, Some(ts(6)));
    assert!(created.is_archived());
}

#[tokio::test]
async fn create_with_duplicate_code_conflicts_and_leaves_existing_untouched() {
    let app = TestApp::new().await;
    app.seed_reference_warehouses().await;

    let duplicate = warehouse("MWH.001", "ROTTERDAM-001", 999, 0, 9);
    let err = app.store.create(&duplicate).await.unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)), "got {err:?}");

    let existing = app
        .store
        .find_by_business_unit_code("MWH.001")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(existing.location, "AMSTERDAM-001");
    assert_eq!(existing.capacity, 50);
}

#[tokio::test]
async fn update_overwrites_mutable_fields_only() {
    let app = TestApp::new().await;
    app.seed_reference_warehouses().await;

    // created_at in the argument is deliberately wrong; the store must keep
    // the persisted value.
    let mut changes = warehouse("MWH.001", "ROTTERDAM-001", 55, 42, 28);
    changes.archived_at = Some(ts(15));

    let updated = app.store.update(&changes).await.unwrap();
    assert_eq!(updated.business_unit_code, "MWH.001");
    assert_eq!(updated.location, "ROTTERDAM-001");
    assert_eq!(updated.capacity, 55);
    assert_eq!(updated.stock, 42);
    assert_eq!(updated.archived_at, Some(ts(15)));
    assert_eq!(updated.created_at, ts(1), "created_at must never change");

    // Durably visible to a subsequent read
    let reread = app
        .store
        .find_by_business_unit_code("MWH.001")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reread, updated);
}

#[tokio::test]
async fn update_missing_code_is_not_found_and_store_unchanged() {
    let app = TestApp::new().await;
    app.seed_reference_warehouses().await;

    let err = app
        .store
        .update(&warehouse("MWH.999", "NOWHERE-001", 1, 1, 1))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)), "got {err:?}");

    assert_eq!(app.store.get_all().await.unwrap().len(), 4);
}

#[tokio::test]
async fn remove_always_fails_with_unsupported_operation() {
    let app = TestApp::new().await;
    app.seed_reference_warehouses().await;

    let existing = app
        .store
        .find_by_business_unit_code("MWH.001")
        .await
        .unwrap()
        .unwrap();
    let err = app.store.remove(&existing).await.unwrap_err();
    assert!(
        matches!(err, ServiceError::UnsupportedOperation(_)),
        "got {err:?}"
    );

    let missing = warehouse("MWH.999", "NOWHERE-001", 1, 1, 1);
    let err = app.store.remove(&missing).await.unwrap_err();
    assert!(
        matches!(err, ServiceError::UnsupportedOperation(_)),
        "got {err:?}"
    );

    // Nothing was deleted
    assert_eq!(app.store.get_all().await.unwrap().len(), 4);
}

#[tokio::test]
async fn find_by_business_unit_code_returns_none_when_absent() {
    let app = TestApp::new().await;

    let found = app
        .store
        .find_by_business_unit_code("MWH.404")
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn get_all_includes_archived_records() {
    let app = TestApp::new().await;
    app.seed_reference_warehouses().await;

    let all = app.store.get_all().await.unwrap();
    assert_eq!(all.len(), 4);
    assert!(all.iter().any(|w| w.is_archived()));
}
