//! SQLite backend behind the store and admin service

use std::sync::Arc;

use signinglog_admin::database::Database;
use signinglog_admin::error::ErrorKind;
use signinglog_admin::signinglog::{
    AdminQueryService, NewSigningLogEntry, SigningLogBackend, SigningLogStore,
};

async fn seeded_db(count: usize) -> Database {
    let db = Database::new_in_memory().await.expect("Failed to create test database");
    for i in 1..=count {
        db.append(NewSigningLogEntry::new(
            "canonical",
            "pc-amd64",
            &format!("SN{:05}", i),
            "fingerprint-a",
        ))
        .await
        .expect("Failed to append signing log");
    }
    db
}

fn ids(result: &signinglog_admin::signinglog::QueryResult) -> Vec<u64> {
    result.signing_log().iter().map(|e| e.id).collect()
}

#[tokio::test]
async fn test_database_fixture_scenario() {
    let db = seeded_db(10).await;
    let service = AdminQueryService::new(SigningLogStore::new(Arc::new(db)));

    assert_eq!(ids(&service.list(None).await), (1..=10).collect::<Vec<_>>());
    assert_eq!(ids(&service.list(Some("5")).await), vec![1, 2, 3, 4]);
    assert_eq!(service.list(Some("bad")).await.signing_log().len(), 10);

    assert!(service.delete("1").await.success());
    assert_eq!(service.delete("1").await.error_kind(), Some(ErrorKind::NotFound));
    assert_eq!(service.delete("22").await.error_kind(), Some(ErrorKind::NotFound));
    assert_eq!(
        service
            .delete("99999999999999999999999999999999999999999999999")
            .await
            .error_kind(),
        Some(ErrorKind::Validation)
    );
}

#[tokio::test]
async fn test_database_payload_round_trip() {
    let db = Database::new_in_memory().await.unwrap();
    let stored = db
        .append(NewSigningLogEntry::new("canonical", "pi3", "R00042", "fp-9"))
        .await
        .unwrap();

    let page = db.list_from(None, 10).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, stored.id);
    assert_eq!(page[0].model, "pi3");
    assert_eq!(page[0].serial_number, "R00042");
    assert_eq!(page[0].fingerprint, "fp-9");
    assert_eq!(page[0].created.timestamp(), stored.created.timestamp());
}

#[tokio::test]
async fn test_database_ids_not_reused() {
    let db = seeded_db(3).await;
    db.delete_by_id(3).await.unwrap();

    let next = db
        .append(NewSigningLogEntry::new("canonical", "pc", "SN-new", "fp"))
        .await
        .unwrap();
    assert_eq!(next.id, 4);
}

#[tokio::test]
async fn test_database_file_persists() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("signinglog.db").display());

    {
        let db = Database::new(&url).await.unwrap();
        db.run_migrations().await.unwrap();
        db.append(NewSigningLogEntry::new("canonical", "pc", "SN1", "fp"))
            .await
            .unwrap();
        db.pool().close().await;
    }

    let db = Database::new(&url).await.unwrap();
    db.run_migrations().await.unwrap();
    assert_eq!(db.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_database_page_size_from_config() {
    let db = seeded_db(12).await;
    let store = SigningLogStore::with_page_size(Arc::new(db), 5);

    let page: Vec<u64> = store.list(None).await.unwrap().iter().map(|e| e.id).collect();
    assert_eq!(page, vec![8, 9, 10, 11, 12]);
}
