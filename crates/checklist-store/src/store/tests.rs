use super::SqliteStore;
use checklist_core::traits::LocalStore;

async fn test_store() -> SqliteStore {
    SqliteStore::open(":memory:").await.unwrap()
}

#[tokio::test]
async fn test_get_missing_key() {
    let store = test_store().await;
    assert_eq!(store.get("formData").await.unwrap(), None);
}

#[tokio::test]
async fn test_set_then_get() {
    let store = test_store().await;
    store.set("formData", r#"{"chef":"ivan"}"#).await.unwrap();
    assert_eq!(
        store.get("formData").await.unwrap().as_deref(),
        Some(r#"{"chef":"ivan"}"#)
    );
}

#[tokio::test]
async fn test_set_overwrites() {
    let store = test_store().await;
    store.set("formData", "one").await.unwrap();
    store.set("formData", "two").await.unwrap();
    assert_eq!(store.get("formData").await.unwrap().as_deref(), Some("two"));
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_clear_removes_every_key() {
    let store = test_store().await;
    store.set("formData", "{}").await.unwrap();
    store.set("other", "x").await.unwrap();
    store.clear().await.unwrap();
    assert_eq!(store.count().await.unwrap(), 0);
    assert_eq!(store.get("other").await.unwrap(), None);
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let store = test_store().await;
    SqliteStore::run_migrations(&store.pool).await.unwrap();
    store.set("k", "v").await.unwrap();
    assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
}

#[tokio::test]
async fn test_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data/store.db");
    let path = path.to_str().unwrap();

    let store = SqliteStore::open(path).await.unwrap();
    store.set("formData", "persisted").await.unwrap();
    store.pool.close().await;

    let reopened = SqliteStore::open(path).await.unwrap();
    assert_eq!(
        reopened.get("formData").await.unwrap().as_deref(),
        Some("persisted")
    );
}
