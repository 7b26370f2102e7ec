mod common;

use common::setup_test_db;
use sea_orm::{EntityTrait, Set};

use notes_backend::errors::internal::ItemError;
use notes_backend::errors::InternalError;
use notes_backend::stores::ItemStore;
use notes_backend::types::db::item;

fn is_not_found(err: &InternalError) -> bool {
    matches!(err, InternalError::Item(ItemError::NotFound(_)))
}

#[tokio::test]
async fn test_create_assigns_id_and_timestamp() {
    let db = setup_test_db().await;
    let store = ItemStore::new(db);

    let created = store.create("groceries").await.expect("create should succeed");

    assert!(created.id >= 1);
    assert_eq!(created.name, "groceries");
    assert!(created.created_at > 0);
}

#[tokio::test]
async fn test_create_persists_name_verbatim() {
    // Trimming happens in the handlers; the store writes what it is given
    let db = setup_test_db().await;
    let store = ItemStore::new(db);

    let created = store.create("a  b  c").await.expect("create should succeed");
    let fetched = store.get(created.id).await.expect("get should succeed");

    assert_eq!(fetched.name, "a  b  c");
}

#[tokio::test]
async fn test_get_missing_item_is_not_found() {
    let db = setup_test_db().await;
    let store = ItemStore::new(db);

    let err = store.get(999).await.expect_err("missing id should fail");
    assert!(is_not_found(&err));
}

#[tokio::test]
async fn test_list_empty_storage_returns_empty_vec() {
    let db = setup_test_db().await;
    let store = ItemStore::new(db);

    let items = store.list().await.expect("list should succeed");
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_list_orders_by_created_at_descending() {
    let db = setup_test_db().await;
    let store = ItemStore::new(db.clone());

    // Seed rows with explicit timestamps so the ordering is deterministic
    let mut ids = Vec::new();
    for (name, created_at) in [("first", 1_000), ("second", 2_000), ("third", 3_000)] {
        let insert = item::Entity::insert(item::ActiveModel {
            name: Set(name.to_string()),
            created_at: Set(created_at),
            ..Default::default()
        })
        .exec(&db)
        .await
        .expect("Failed to seed item");
        ids.push(insert.last_insert_id);
    }

    let items = store.list().await.expect("list should succeed");

    let listed: Vec<i32> = items.iter().map(|i| i.id).collect();
    assert_eq!(listed, vec![ids[2], ids[1], ids[0]]);
    assert_eq!(items[0].name, "third");
    assert_eq!(items[2].name, "first");
}

#[tokio::test]
async fn test_update_replaces_name_and_keeps_timestamp() {
    let db = setup_test_db().await;
    let store = ItemStore::new(db);

    let created = store.create("before").await.expect("create should succeed");
    let updated = store
        .update(created.id, "after")
        .await
        .expect("update should succeed");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "after");
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn test_update_missing_item_is_not_found() {
    let db = setup_test_db().await;
    let store = ItemStore::new(db);

    let err = store
        .update(999, "x")
        .await
        .expect_err("missing id should fail");
    assert!(is_not_found(&err));

    // Nothing was written
    let items = store.list().await.expect("list should succeed");
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_delete_removes_the_row() {
    let db = setup_test_db().await;
    let store = ItemStore::new(db);

    let created = store.create("ephemeral").await.expect("create should succeed");
    store.delete(created.id).await.expect("delete should succeed");

    let err = store
        .get(created.id)
        .await
        .expect_err("deleted id should fail");
    assert!(is_not_found(&err));
}

#[tokio::test]
async fn test_delete_missing_item_is_not_found() {
    let db = setup_test_db().await;
    let store = ItemStore::new(db);

    let err = store.delete(999).await.expect_err("missing id should fail");
    assert!(is_not_found(&err));
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let db = setup_test_db().await;
    let store = ItemStore::new(db);

    let first = store.create("one").await.expect("create should succeed");
    store.delete(first.id).await.expect("delete should succeed");

    let second = store.create("two").await.expect("create should succeed");
    assert!(second.id > first.id);
}
