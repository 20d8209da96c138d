use stocktake_core::db::open_db_in_memory;
use stocktake_core::{
    ArticleCode, ExportOptions, InMemoryCatalog, InventoryService, ServiceError,
    SqliteSnapshotRepository,
};

fn art(code: &str) -> ArticleCode {
    ArticleCode::parse(code).unwrap()
}

fn service_with_catalog(codes: &[&str]) -> InventoryService<InMemoryCatalog> {
    let catalog = InMemoryCatalog::with_codes(codes.iter().copied().map(art).collect());
    InventoryService::with_catalog(catalog)
}

#[test]
fn add_delete_modify_happy_path() {
    let mut service = service_with_catalog(&["90515689"]);
    service.create_file("zone-1").unwrap();

    service.add_record("zone-1", "90515689", "1000").unwrap();
    service
        .modify_record("zone-1", "90515689", "1000", "500")
        .unwrap();
    service.delete_record("zone-1", "90515689", "500").unwrap();

    let registry = service.registries().registry("zone-1").unwrap();
    assert_eq!(registry.record_count(), 0);
    assert!(registry.contains_article(&art("90515689")));
}

#[test]
fn commands_reject_unknown_files() {
    let mut service = service_with_catalog(&["90515689"]);
    let err = service.add_record("nowhere", "90515689", "1000").unwrap_err();
    assert!(matches!(err, ServiceError::UnknownFile(name) if name == "nowhere"));
}

#[test]
fn add_record_validates_article_and_quantity() {
    let mut service = service_with_catalog(&["90515689"]);
    service.create_file("zone-1").unwrap();

    assert!(matches!(
        service.add_record("zone-1", "bad", "1000").unwrap_err(),
        ServiceError::InvalidArticle(_)
    ));
    assert!(matches!(
        service.add_record("zone-1", "90515689", "12.5").unwrap_err(),
        ServiceError::InvalidQuantity(_)
    ));
    // Well-formed but not in the master catalog.
    assert!(matches!(
        service.add_record("zone-1", "12567345", "10").unwrap_err(),
        ServiceError::UnknownArticle(_)
    ));
}

#[test]
fn delete_of_unrecorded_quantity_is_record_not_found() {
    let mut service = service_with_catalog(&["90515689"]);
    service.create_file("zone-1").unwrap();
    service.add_record("zone-1", "90515689", "1000").unwrap();

    let err = service
        .delete_record("zone-1", "90515689", "999")
        .unwrap_err();
    assert!(matches!(err, ServiceError::RecordNotFound { .. }));
}

#[test]
fn file_lifecycle_commands_map_to_typed_errors() {
    let mut service = service_with_catalog(&[]);
    service.create_file("zone-1").unwrap();

    assert!(matches!(
        service.create_file("zone-1").unwrap_err(),
        ServiceError::FileExists(_)
    ));
    assert!(matches!(
        service.create_file("  ").unwrap_err(),
        ServiceError::InvalidFileName
    ));
    assert!(matches!(
        service.remove_file("missing").unwrap_err(),
        ServiceError::UnknownFile(_)
    ));

    service.rename_file("zone-1", "zone-renamed").unwrap();
    assert_eq!(service.list_files(), vec!["zone-renamed"]);
}

#[test]
fn scan_pair_is_classified_then_recorded() {
    let mut service = service_with_catalog(&["90515689"]);
    service.create_file("zone-1").unwrap();

    // Reversed order on purpose: quantity first, article second.
    let record = service
        .ingest_scan_pair("zone-1", "1000", "90515689")
        .unwrap();
    assert_eq!(record.article.as_str(), "90515689");
    assert_eq!(record.quantity.as_str(), "1000");
    assert_eq!(service.registries().export("zone-1").len(), 1);
}

#[test]
fn unclassifiable_scan_pair_is_reported_not_guessed() {
    let mut service = service_with_catalog(&["90515689"]);
    service.create_file("zone-1").unwrap();

    let err = service.ingest_scan_pair("zone-1", "abc", "def").unwrap_err();
    assert!(matches!(err, ServiceError::Scan(_)));
    assert!(service.registries().export("zone-1").is_empty());
}

#[test]
fn register_article_grows_the_catalog() {
    let mut service = service_with_catalog(&[]);
    service.create_file("zone-1").unwrap();

    assert!(matches!(
        service.add_record("zone-1", "90515689", "10").unwrap_err(),
        ServiceError::UnknownArticle(_)
    ));

    service.register_article("90515689").unwrap();
    service.add_record("zone-1", "90515689", "10").unwrap();

    assert!(matches!(
        service.register_article("90515689").unwrap_err(),
        ServiceError::ArticleAlreadyRegistered(_)
    ));
}

#[test]
fn register_article_without_catalog_is_rejected() {
    let mut service: InventoryService<InMemoryCatalog> = InventoryService::new();
    assert!(matches!(
        service.register_article("90515689").unwrap_err(),
        ServiceError::NoCatalog
    ));
}

#[test]
fn export_file_writes_csv_into_the_configured_dir() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = service_with_catalog(&["90515689"]);
    service.create_file("zone-1").unwrap();
    service.add_record("zone-1", "90515689", "007").unwrap();

    let path = service
        .export_file("zone-1", dir.path(), ExportOptions::default())
        .unwrap();
    let text = std::fs::read_to_string(path).unwrap();
    assert_eq!(text, "Article;Quantity\n90515689;007\n");

    assert!(matches!(
        service
            .export_file("missing", dir.path(), ExportOptions::default())
            .unwrap_err(),
        ServiceError::UnknownFile(_)
    ));
}

#[test]
fn save_and_load_round_trip_through_the_service() {
    let mut conn = open_db_in_memory().unwrap();

    let mut service = service_with_catalog(&["90515689"]);
    service.create_file("zone-1").unwrap();
    service.add_record("zone-1", "90515689", "1000").unwrap();

    {
        let mut repo = SqliteSnapshotRepository::new(&mut conn);
        service.save_to(&mut repo).unwrap();
    }

    let mut fresh = service_with_catalog(&["90515689"]);
    fresh.create_file("local-only").unwrap();
    {
        let mut repo = SqliteSnapshotRepository::new(&mut conn);
        fresh.load_from(&mut repo).unwrap();
    }

    // Load merges over the current set instead of replacing it.
    assert!(fresh.registries().contains("local-only"));
    assert_eq!(fresh.registries().export("zone-1").len(), 1);
}
