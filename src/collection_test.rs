use super::*;
use crate::brand::fixture::{brand, valid_draft, BrandBuilder};
use crate::store::mock::MockRecordStore;
use serde_json::json;

fn user(id: &str) -> User {
    User {
        id: id.to_string(),
        email: format!("{}@example.com", id),
    }
}

#[tokio::test]
async fn test_load_reads_all_brands() {
    let store = MockRecordStore::with_brands(&[
        brand("1", "Alpha", "US", 40),
        brand("2", "Beta", "US", 80),
    ]);
    let (collection, report) = BrandCollection::load(&store).await;

    assert_eq!(collection.brands().len(), 2);
    assert_eq!(report.loaded, 2);
    assert!(report.quarantined.is_empty());
    assert!(report.error.is_none());
}

#[tokio::test]
async fn test_load_quarantines_bad_records() {
    let store = MockRecordStore::with_brands(&[brand("1", "Alpha", "US", 40)]);
    store.add_raw(json!({ "id": "2", "name": "Broken" }));

    let (collection, report) = BrandCollection::load(&store).await;

    assert_eq!(collection.brands().len(), 1);
    assert_eq!(report.quarantined.len(), 1);
    assert_eq!(report.quarantined[0].id.as_deref(), Some("2"));
}

#[tokio::test]
async fn test_load_failure_yields_empty_collection() {
    let store = MockRecordStore::with_brands(&[brand("1", "Alpha", "US", 40)]);
    store.fail_requests();

    let (collection, report) = BrandCollection::load(&store).await;

    assert!(collection.brands().is_empty());
    assert!(report.error.unwrap().contains("503"));
}

#[tokio::test]
async fn test_add_prepends_and_persists() {
    let store = MockRecordStore::with_brands(&[brand("1", "Alpha", "US", 40)]);
    let (mut collection, _) = BrandCollection::load(&store).await;

    let added_id = collection
        .add(&store, valid_draft(), Some(&user("u1")))
        .await
        .unwrap()
        .id
        .clone();

    assert_eq!(collection.brands()[0].id, added_id);
    assert_eq!(collection.brands()[0].user_id.as_deref(), Some("u1"));
    assert_eq!(collection.brands().len(), 2);
    assert!(store.get(&added_id).is_some());
}

#[tokio::test]
async fn test_add_invalid_draft_does_not_touch_store() {
    let store = MockRecordStore::new();
    let mut collection = BrandCollection::default();
    let draft = BrandDraft {
        sustainability_score: 120,
        ..valid_draft()
    };

    let result = collection.add(&store, draft, None).await;

    assert!(matches!(result, Err(CatalogError::Validation(_))));
    assert!(store.ids().is_empty());
    assert!(collection.brands().is_empty());
}

#[tokio::test]
async fn test_update_replaces_whole_record() {
    let original = BrandBuilder::new("1", "Alpha").owner("u1").build();
    let store = MockRecordStore::with_brands(&[original]);
    let (mut collection, _) = BrandCollection::load(&store).await;

    let draft = BrandDraft {
        name: "Alpha Renewed".to_string(),
        description: None,
        ..valid_draft()
    };
    collection
        .update(&store, "1", draft, Some(&user("u1")))
        .await
        .unwrap();

    let stored = store.get("1").unwrap();
    assert_eq!(stored.name, "Alpha Renewed");
    assert_eq!(stored.user_id.as_deref(), Some("u1"));
    assert_eq!(collection.get("1").unwrap(), &stored);
}

#[tokio::test]
async fn test_update_by_other_user_is_rejected() {
    let store = MockRecordStore::with_brands(&[BrandBuilder::new("1", "Alpha").owner("u1").build()]);
    let (mut collection, _) = BrandCollection::load(&store).await;

    let result = collection
        .update(&store, "1", valid_draft(), Some(&user("u2")))
        .await;

    assert!(matches!(result, Err(CatalogError::NotOwner { .. })));
    assert_eq!(store.get("1").unwrap().name, "Alpha");
}

#[tokio::test]
async fn test_update_unknown_id() {
    let store = MockRecordStore::new();
    let mut collection = BrandCollection::default();
    let result = collection.update(&store, "9", valid_draft(), None).await;
    assert!(matches!(result, Err(CatalogError::BrandNotFound(_))));
}

#[tokio::test]
async fn test_remove_drops_from_collection_and_favorites() {
    let store = MockRecordStore::with_brands(&[
        brand("1", "Alpha", "US", 40),
        brand("2", "Beta", "US", 80),
    ]);
    let (mut collection, _) = BrandCollection::load(&store).await;
    collection.toggle_favorite("1").unwrap();
    collection.toggle_favorite("2").unwrap();

    let removed = collection.remove(&store, "1", None).await.unwrap();

    assert_eq!(removed.name, "Alpha");
    assert!(collection.get("1").is_none());
    assert!(!collection.favorites().contains("1"));
    assert_eq!(collection.favorites().len(), 1);
    assert_eq!(store.ids(), vec!["2"]);
}

#[tokio::test]
async fn test_remove_keeps_collection_when_store_fails() {
    let store = MockRecordStore::with_brands(&[brand("1", "Alpha", "US", 40)]);
    let (mut collection, _) = BrandCollection::load(&store).await;
    store.fail_requests();

    let result = collection.remove(&store, "1", None).await;

    assert!(result.is_err());
    assert!(collection.get("1").is_some());
}

#[test]
fn test_toggle_favorite_unknown_id_fails() {
    let mut collection = BrandCollection::new(vec![brand("1", "Alpha", "US", 40)]);
    assert!(collection.toggle_favorite("2").is_err());
    assert!(collection.toggle_favorite("1").unwrap());
    assert_eq!(collection.favorite_brands().len(), 1);
}
