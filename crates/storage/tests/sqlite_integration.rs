use storage::repository::{KeyValueStore, Storage};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_round_trips_and_overwrites_values() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.save("eduaid_goal", "learn rust").await.unwrap();
    repo.save("eduaid_goal", "learn sql").await.unwrap();

    let loaded = repo.load("eduaid_goal").await.expect("load");
    assert_eq!(loaded.as_deref(), Some("learn sql"));
}

#[tokio::test]
async fn sqlite_remove_clears_only_that_key() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_remove?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.save("eduaid_roadmap", "Goal: x").await.unwrap();
    repo.save("eduaid_progress", r#"{"Topics-0":true}"#).await.unwrap();

    repo.remove("eduaid_roadmap").await.unwrap();
    repo.remove("eduaid_roadmap").await.unwrap();

    assert_eq!(repo.load("eduaid_roadmap").await.unwrap(), None);
    assert_eq!(
        repo.load("eduaid_progress").await.unwrap().as_deref(),
        Some(r#"{"Topics-0":true}"#)
    );
}

#[tokio::test]
async fn sqlite_migrations_are_rerunnable() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    repo.save("k", "v").await.unwrap();
    assert_eq!(repo.load("k").await.unwrap().as_deref(), Some("v"));
}

#[tokio::test]
async fn storage_sqlite_exposes_the_kv_repository() {
    let storage = Storage::sqlite("sqlite:file:memdb_kv_storage?mode=memory&cache=shared")
        .await
        .expect("storage");

    storage.kv.save("eduaid_goal", "learn zig").await.unwrap();
    assert_eq!(
        storage.kv.load("eduaid_goal").await.unwrap().as_deref(),
        Some("learn zig")
    );
}
