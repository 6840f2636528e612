//! Parse/serialize round trips through the public adapter functions

use csvgrid_csv::{parse_csv, serialize_csv, CsvError};
use pretty_assertions::assert_eq;

#[test]
fn test_plain_ascii_round_trip() {
    let text = "id,name,city\r\n1,ann,oslo\r\n2,bob,\r\n3,,rome\r\n";
    let grid = parse_csv(text).unwrap();

    assert_eq!(grid.row_count(), 4);
    assert_eq!(serialize_csv(&grid).unwrap(), text);
}

#[test]
fn test_round_trip_is_value_stable() {
    // LF input comes back as CRLF, but the values are the same
    let grid = parse_csv("a,b\n1,2\n3,4").unwrap();
    let again = parse_csv(&serialize_csv(&grid).unwrap()).unwrap();
    assert_eq!(again, grid);
}

#[test]
fn test_header_only() {
    let grid = parse_csv("a,b,c\n").unwrap();
    assert_eq!(grid.row_count(), 1);
    assert_eq!(grid.column_count(), 3);
    assert!(grid.data_rows().is_empty());
}

#[test]
fn test_empty_file_is_error() {
    assert!(matches!(parse_csv(""), Err(CsvError::Empty)));
}

#[test]
fn test_edited_grid_serializes() {
    let grid = parse_csv("a,b\n1,2\n").unwrap();
    let grid = grid.insert_column_right(0).unwrap();
    let grid = grid.rename_column(1, "mid").unwrap();

    assert_eq!(serialize_csv(&grid).unwrap(), "a,mid,b\r\n1,,2\r\n");
}
