use sales_analytics::error::RowErrorKind;
use sales_analytics::ingestion::csv::{ingest_csv_from_path, ingest_csv_from_reader};
use sales_analytics::ingestion::{ingest_from_path, IngestionOptions};
use sales_analytics::types::SalesRecord;
use sales_analytics::SalesError;

#[test]
fn ingest_csv_from_path_happy_path() {
    let out = ingest_csv_from_path("tests/fixtures/sales.csv", b',').unwrap();

    assert_eq!(out.records.len(), 3);
    assert_eq!(out.skipped(), 0);
    assert_eq!(
        out.records[0],
        SalesRecord::new("2024-01-01", "Widget", 10, 100.0, "North")
    );
}

#[test]
fn malformed_rows_are_skipped_with_line_numbers() {
    let out = ingest_csv_from_path("tests/fixtures/sales_malformed.csv", b',').unwrap();

    assert_eq!(out.records.len(), 3);
    assert_eq!(out.skipped(), 3);
    assert_eq!(out.records.len() + out.skipped(), 6);

    let lines: Vec<usize> = out.rejected.iter().map(|e| e.line).collect();
    assert_eq!(lines, vec![3, 4, 5]);
    assert_eq!(out.rejected[0].kind, RowErrorKind::FieldCount { found: 4 });
    assert!(matches!(out.rejected[1].kind, RowErrorKind::InvalidQuantity { .. }));
    assert!(matches!(out.rejected[2].kind, RowErrorKind::InvalidAmount { .. }));

    let msg = out.rejected[1].to_string();
    assert!(msg.starts_with("line 4: invalid quantity 'many'"));
}

#[test]
fn invalid_utf8_row_is_skipped_not_fatal() {
    let out = ingest_csv_from_path("tests/fixtures/sales_invalid_utf8.csv", b',').unwrap();

    assert_eq!(out.records.len(), 2);
    assert_eq!(out.skipped(), 1);
    assert_eq!(out.rejected[0].line, 3);
    assert_eq!(out.rejected[0].kind, RowErrorKind::InvalidUtf8 { field: 1 });
    assert!(out.records.iter().all(|r| r.product == "Widget"));
}

#[test]
fn header_only_file_is_empty_input() {
    let err = ingest_csv_from_path("tests/fixtures/header_only.csv", b',').unwrap_err();
    assert!(matches!(err, SalesError::EmptyInput));
    assert_eq!(err.to_string(), "input contains no data rows");
}

#[test]
fn all_malformed_rows_still_ingest() {
    let out = ingest_csv_from_path("tests/fixtures/all_malformed.csv", b',').unwrap();
    assert!(out.records.is_empty());
    assert_eq!(out.skipped(), 2);
}

#[test]
fn tsv_is_detected_by_extension() {
    let out = ingest_from_path("tests/fixtures/sales.tsv", &IngestionOptions::default()).unwrap();
    assert_eq!(out.records.len(), 2);
    assert_eq!(out.records[1].amount, 9.995);
    assert_eq!(out.records[1].region, "West");
}

#[test]
fn header_names_are_not_checked() {
    let input = "日期,产品,销量,销售额,地区\n2024-01-01,Widget,1,2.50,North\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input.as_bytes());

    let out = ingest_csv_from_reader(&mut rdr).unwrap();
    assert_eq!(out.records.len(), 1);
    assert_eq!(out.records[0].amount, 2.5);
}

#[test]
fn missing_file_is_source_unavailable() {
    let err = ingest_from_path("tests/fixtures/does_not_exist.csv", &IngestionOptions::default()).unwrap_err();
    assert!(matches!(err, SalesError::SourceUnavailable { .. }));
}
