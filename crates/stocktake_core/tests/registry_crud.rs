use stocktake_core::{ArticleCode, Quantity, Record, Registry};

fn art(code: &str) -> ArticleCode {
    ArticleCode::parse(code).unwrap()
}

fn qty(value: &str) -> Quantity {
    Quantity::parse(value).unwrap()
}

#[test]
fn insert_then_delete_restores_prior_state() {
    let mut registry = Registry::new();
    registry.insert(art("90515689"), qty("500"));
    let before = registry.clone();

    assert!(registry.insert(art("90515689"), qty("1000")));
    assert!(registry.delete(&art("90515689"), &qty("1000")));

    assert_eq!(registry, before);
}

#[test]
fn delete_on_absent_article_or_quantity_fails_unchanged() {
    let mut registry = Registry::new();
    registry.insert(art("90515689"), qty("1000"));
    let before = registry.clone();

    assert!(!registry.delete(&art("12567345"), &qty("1000")));
    assert!(!registry.delete(&art("90515689"), &qty("999")));
    assert_eq!(registry, before);
}

#[test]
fn modify_replaces_first_occurrence_only() {
    let mut registry = Registry::new();
    registry.insert(art("90515689"), qty("1000"));
    registry.insert(art("90515689"), qty("1000"));

    assert!(registry.modify(&art("90515689"), &qty("1000"), qty("500")));

    let quantities = registry.quantities(&art("90515689")).unwrap();
    assert_eq!(quantities, &[qty("500"), qty("1000")]);
}

#[test]
fn modify_on_absent_article_or_quantity_fails_unchanged() {
    let mut registry = Registry::new();
    registry.insert(art("90515689"), qty("1000"));
    let before = registry.clone();

    assert!(!registry.modify(&art("12567345"), &qty("1000"), qty("500")));
    assert!(!registry.modify(&art("90515689"), &qty("999"), qty("500")));
    assert_eq!(registry, before);
}

#[test]
fn article_key_survives_last_quantity_removal() {
    let mut registry = Registry::new();
    registry.insert(art("90515689"), qty("1000"));
    assert!(registry.delete(&art("90515689"), &qty("1000")));

    assert!(registry.contains_article(&art("90515689")));
    assert_eq!(registry.quantities(&art("90515689")), Some(&[][..]));
    assert_eq!(registry.article_count(), 1);
    assert_eq!(registry.record_count(), 0);
}

#[test]
fn insert_many_rejects_empty_input() {
    let mut registry = Registry::new();
    assert!(!registry.insert_many(Vec::new()));
    assert!(registry.is_empty());
}

#[test]
fn insert_many_adds_exactly_n_records() {
    let mut registry = Registry::new();
    let records = vec![
        Record::new(art("90515689"), qty("1000")),
        Record::new(art("90515689"), qty("500")),
        Record::new(art("12567345"), qty("300")),
    ];

    assert!(registry.insert_many(records));
    assert_eq!(registry.record_count(), 3);
    assert_eq!(registry.article_count(), 2);
}

#[test]
fn export_reproduces_insertion_order_without_dedup() {
    let mut registry = Registry::new();
    registry.insert(art("90515689"), qty("1000"));
    registry.insert(art("12567345"), qty("500"));
    registry.insert(art("90515689"), qty("1000"));

    let records = registry.export();
    assert_eq!(
        records,
        vec![
            Record::new(art("90515689"), qty("1000")),
            Record::new(art("90515689"), qty("1000")),
            Record::new(art("12567345"), qty("500")),
        ]
    );
}

#[test]
fn duplicate_quantities_are_kept_in_order() {
    let mut registry = Registry::new();
    registry.insert(art("90515689"), qty("007"));
    registry.insert(art("90515689"), qty("007"));

    assert_eq!(
        registry.quantities(&art("90515689")).unwrap(),
        &[qty("007"), qty("007")]
    );
}
