//! Property-based tests for the bulk export text format.
//!
//! These tests verify that exporting values to delimited text and parsing
//! them back preserves every value and its order, whatever characters the
//! values contain.

use credforge::services::bulk_orchestrator::{parse_delimited_text, to_delimited_text};
use proptest::prelude::*;

// **Property 1: Export round-trip**
//
// *For any* list of strings, including ones with commas, quotes, line
// breaks and non-ASCII text, parsing the exported text SHALL return the
// original list.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn export_roundtrip_preserves_values(items in proptest::collection::vec("(?s).{0,30}", 0..=25)) {
        let text = to_delimited_text(&items).expect("export should succeed");
        let parsed = parse_delimited_text(&text).expect("exported text should parse");
        prop_assert_eq!(parsed, items);
    }
}

// **Property 2: One row per value**
//
// *For any* list of single-line values, the export SHALL have one header
// line plus one line per value, each indexed from 1.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn export_has_one_indexed_row_per_value(items in proptest::collection::vec("[a-zA-Z0-9 ,\"!-]{0,20}", 0..=25)) {
        let text = to_delimited_text(&items).expect("export should succeed");
        let lines: Vec<&str> = text.lines().collect();
        prop_assert_eq!(lines.len(), items.len() + 1);
        for (i, line) in lines.iter().skip(1).enumerate() {
            let prefix = format!("\"{}\",", i + 1);
            prop_assert!(line.starts_with(&prefix), "{:?} should start with {:?}", line, prefix);
        }
    }
}
