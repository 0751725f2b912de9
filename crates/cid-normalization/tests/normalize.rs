//! Integration tests for contract ID normalization.

use cid_model::{NormalizeOptions, RawInput};
use cid_normalization::{NormalizeCache, format_sql_list, normalize, normalize_with};
use proptest::prelude::*;

fn is_digit_only(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

#[test]
fn spreadsheet_column_to_sql_literal() {
    let column = RawInput::Column(vec![
        Some("12345678.0".to_string()),
        Some("90123456, 12345678".to_string()),
        None,
        Some("Contract 78901234\r\n56789012".to_string()),
        Some("NaN".to_string()),
    ]);
    let result = normalize_with(&column, &NormalizeOptions::default());

    insta::assert_snapshot!(
        format_sql_list(&result.ids),
        @"'12345678','90123456','78901234','56789012'"
    );
}

#[test]
fn normalized_result_snapshot() {
    let result = normalize_with(
        &RawInput::from("ID: 12345678 (note) 90123456, 12345678"),
        &NormalizeOptions::default(),
    );
    insta::assert_snapshot!(result.ids.to_string(), @"12345678,90123456");
    assert_eq!(result.stats.cells, 1);
    assert_eq!(result.stats.tokens, 3);
    assert_eq!(result.stats.duplicates, 1);
}

#[test]
fn cache_returns_same_result_as_direct_call() {
    let raw = RawInput::from("5 4 5 3");
    let options = NormalizeOptions::default();
    let mut cache = NormalizeCache::new();
    let cached = cache.get_or_normalize(&raw, &options).clone();
    assert_eq!(cached, normalize_with(&raw, &options));
}

proptest! {
    #[test]
    fn results_are_digit_only(text in "\\PC{0,80}") {
        let ids = normalize(text.as_str());
        for id in &ids {
            prop_assert!(is_digit_only(id), "non-digit id {id:?}");
        }
    }

    #[test]
    fn results_have_no_duplicates(text in "[0-9 ,;.a-z\\n]{0,120}") {
        let ids = normalize(text.as_str());
        let mut sorted = ids.clone().into_vec();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), ids.len());
    }

    #[test]
    fn normalization_is_idempotent(text in "\\PC{0,80}") {
        let first = normalize(text.as_str());
        let second = normalize(first.to_string());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn sql_list_has_one_literal_per_id(text in "[0-9 ,x]{0,60}") {
        let ids = normalize(text.as_str());
        let sql = format_sql_list(&ids);
        prop_assert_eq!(sql.matches('\'').count(), ids.len() * 2);
        prop_assert!(!sql.ends_with(','));
        prop_assert!(!sql.contains(' '));
    }
}
