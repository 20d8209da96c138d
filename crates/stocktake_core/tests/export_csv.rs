use stocktake_core::{
    export_to_dir, write_csv, ArticleCode, ExportOptions, Quantity, Record,
};

fn record(code: &str, value: &str) -> Record {
    Record::new(
        ArticleCode::parse(code).unwrap(),
        Quantity::parse(value).unwrap(),
    )
}

#[test]
fn unsorted_export_preserves_record_order() {
    let records = vec![
        record("90515689", "1000"),
        record("12567345", "500"),
        record("90515689", "007"),
    ];

    let mut out = Vec::new();
    write_csv(&mut out, &records, ExportOptions::default()).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "Article;Quantity\n90515689;1000\n12567345;500\n90515689;007\n"
    );
}

#[test]
fn sorted_export_orders_by_article_then_numeric_quantity() {
    let records = vec![
        record("90515689", "75"),
        record("12567345", "500"),
        record("90515689", "007"),
    ];

    let mut out = Vec::new();
    write_csv(&mut out, &records, ExportOptions { sorted: true }).unwrap();

    let text = String::from_utf8(out).unwrap();
    // "007" sorts before "75" numerically, and its zeros are kept verbatim.
    assert_eq!(
        text,
        "Article;Quantity\n12567345;500\n90515689;007\n90515689;75\n"
    );
}

#[test]
fn leading_zeros_in_articles_are_written_as_text() {
    let records = vec![record("00515689", "10")];

    let mut out = Vec::new();
    write_csv(&mut out, &records, ExportOptions::default()).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("00515689;10"));
}

#[test]
fn export_to_dir_creates_the_destination_and_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("exports");

    let path = export_to_dir(
        &nested,
        "warehouse-a",
        &[record("90515689", "1000")],
        ExportOptions::default(),
    )
    .unwrap();

    assert_eq!(path, nested.join("warehouse-a.csv"));
    let text = std::fs::read_to_string(path).unwrap();
    assert_eq!(text, "Article;Quantity\n90515689;1000\n");
}

#[test]
fn empty_file_exports_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = export_to_dir(dir.path(), "empty", &[], ExportOptions::default()).unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap(), "Article;Quantity\n");
}
