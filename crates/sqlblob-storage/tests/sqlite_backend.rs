use std::sync::Arc;

use sqlblob_storage::{ObjectStore, SqlBackend, StorageError, StoreKind};
use tempfile::TempDir;

async fn open_store() -> (SqlBackend, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("objects.db");

    let backend = SqlBackend::connect(StoreKind::Sqlite, db_path.to_str().unwrap())
        .await
        .unwrap();
    backend.ensure_schema().await.unwrap();
    (backend, temp_dir)
}

#[tokio::test]
async fn test_round_trip_preserves_bytes() {
    let (store, _dir) = open_store().await;

    let payloads: Vec<Vec<u8>> = vec![
        Vec::new(),
        vec![0],
        b"apiVersion: v2\nname: app\n".to_vec(),
        (0..=255).collect(),
        vec![0xff; 64 * 1024],
    ];

    for (i, payload) in payloads.iter().enumerate() {
        let path = format!("blob-{i}");
        store.put_object(&path, payload).await.unwrap();
        let obj = store.get_object(&path).await.unwrap();
        assert_eq!(obj.path, path);
        assert_eq!(&obj.content, payload);
    }
}

#[tokio::test]
async fn test_put_twice_keeps_one_record() {
    let (store, _dir) = open_store().await;

    store.put_object("charts/app.tgz", b"first").await.unwrap();
    let before = store.get_object("charts/app.tgz").await.unwrap();
    store.put_object("charts/app.tgz", b"second").await.unwrap();

    let listing = store.list_objects("").await.unwrap();
    assert_eq!(listing.len(), 1);

    let after = store.get_object("charts/app.tgz").await.unwrap();
    assert_eq!(after.content, b"second");
    assert!(after.last_modified >= before.last_modified);
}

#[tokio::test]
async fn test_delete_missing_path_is_ok() {
    let (store, _dir) = open_store().await;
    store.put_object("keep", b"x").await.unwrap();

    store.delete_object("never-written").await.unwrap();

    let listing = store.list_objects("").await.unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].path, "keep");
}

#[tokio::test]
async fn test_list_excludes_content() {
    let (store, _dir) = open_store().await;
    store.put_object("a", &[1, 2, 3]).await.unwrap();

    let listing = store.list_objects("").await.unwrap();
    let entry = listing.iter().find(|o| o.path == "a").unwrap();
    assert!(entry.content.is_empty());

    let obj = store.get_object("a").await.unwrap();
    assert_eq!(obj.content, vec![1, 2, 3]);
    assert_eq!(obj.last_modified, entry.last_modified);
}

#[tokio::test]
async fn test_list_is_ordered_by_path() {
    let (store, _dir) = open_store().await;
    for path in ["c", "a", "b"] {
        store.put_object(path, b"").await.unwrap();
    }

    let paths: Vec<String> = store
        .list_objects("")
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.path)
        .collect();
    assert_eq!(paths, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_prefix_listing_is_rejected() {
    let (store, _dir) = open_store().await;
    store.put_object("foo/bar", b"x").await.unwrap();

    for prefix in ["foo/", "f", "nothing-matches"] {
        match store.list_objects(prefix).await {
            Err(StorageError::UnsupportedOperation(msg)) => assert!(msg.contains(prefix)),
            other => panic!("expected UnsupportedOperation, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_get_missing_path() {
    let (store, _dir) = open_store().await;

    let err = store.get_object("nope").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("nope"));
}

#[tokio::test]
async fn test_chart_lifecycle() {
    let (store, _dir) = open_store().await;
    let chart = b"\x1f\x8b\x08\x00fake-gzip-chart".to_vec();

    store
        .put_object("charts/app-1.0.0.tgz", &chart)
        .await
        .unwrap();

    let listing = store.list_objects("").await.unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].path, "charts/app-1.0.0.tgz");
    assert!(listing[0].has_extension("tgz"));

    let obj = store.get_object("charts/app-1.0.0.tgz").await.unwrap();
    assert_eq!(obj.content, chart);

    store.delete_object("charts/app-1.0.0.tgz").await.unwrap();
    let err = store.get_object("charts/app-1.0.0.tgz").await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound(path) if path == "charts/app-1.0.0.tgz"));
    assert!(store.list_objects("").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_puts_on_one_path() {
    let (store, _dir) = open_store().await;
    let store = Arc::new(store);

    let mut handles = Vec::new();
    for i in 0..8u8 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store.put_object("contended", &[i]).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let listing = store.list_objects("").await.unwrap();
    assert_eq!(listing.len(), 1);
    let obj = store.get_object("contended").await.unwrap();
    assert_eq!(obj.content.len(), 1);
    assert!(obj.content[0] < 8);
}

#[tokio::test]
async fn test_ensure_schema_is_idempotent() {
    let (store, _dir) = open_store().await;
    store.put_object("a", b"1").await.unwrap();

    store.ensure_schema().await.unwrap();
    store.ensure_schema().await.unwrap();

    assert_eq!(store.get_object("a").await.unwrap().content, b"1");
}

#[tokio::test]
async fn test_corrupt_content_is_reported() {
    let (store, _dir) = open_store().await;

    sqlx::query(
        "INSERT INTO objects (path, content, created_at, updated_at) VALUES (?, ?, ?, ?)",
    )
    .bind("broken")
    .bind("this is not base64!")
    .bind(0i64)
    .bind(0i64)
    .execute(store.pool())
    .await
    .unwrap();

    match store.get_object("broken").await {
        Err(StorageError::CorruptData { path, .. }) => assert_eq!(path, "broken"),
        other => panic!("expected CorruptData, got {other:?}"),
    }

    // Listing does not decode payloads
    assert_eq!(store.list_objects("").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("objects.db");
    let db_path = db_path.to_str().unwrap();

    let store = SqlBackend::sqlite(db_path).await.unwrap();
    store.ensure_schema().await.unwrap();
    store.put_object("index.yaml", b"entries: {}").await.unwrap();
    store.close().await;

    let reopened = SqlBackend::sqlite(db_path).await.unwrap();
    let obj = reopened.get_object("index.yaml").await.unwrap();
    assert_eq!(obj.content, b"entries: {}");
}

#[tokio::test]
async fn test_usable_as_trait_object() {
    let (backend, _dir) = open_store().await;
    let store: Box<dyn ObjectStore> = Box::new(backend);

    store.put_object("a", b"1").await.unwrap();
    assert_eq!(store.get_object("a").await.unwrap().content, b"1");
    store.delete_object("a").await.unwrap();
    assert!(store.get_object("a").await.unwrap_err().is_not_found());
}
