use cid_model::{
    CoercionFallback, ExtractionPolicy, NormalizeOptions, Normalized, Notice, RawInput, ResultSet,
    TokenStats,
};
use tracing::{debug, trace};

use crate::numeric::coerce_unsigned;
use crate::tokenize::{delimited_tokens, digit_runs, is_placeholder};

/// Normalizes `raw` with the default options and returns only the identifiers.
///
/// Absent or blank input yields an empty [`ResultSet`].
pub fn normalize(raw: impl Into<RawInput>) -> ResultSet {
    normalize_with(&raw.into(), &NormalizeOptions::default()).ids
}

/// Normalizes `raw`, returning identifiers, notices and token counters.
pub fn normalize_with(raw: &RawInput, options: &NormalizeOptions) -> Normalized {
    let mut stats = TokenStats::default();
    let mut pieces = Vec::new();
    for cell in raw.cells() {
        stats.cells += 1;
        let tokens = match options.policy {
            ExtractionPolicy::DigitRuns => digit_runs(cell),
            ExtractionPolicy::DelimiterSet => delimited_tokens(cell),
        };
        for token in tokens {
            if is_placeholder(&token) {
                stats.discarded += 1;
            } else {
                pieces.push(token);
            }
        }
    }
    stats.tokens = pieces.len() + stats.discarded;

    let coerced: Vec<Option<String>> = pieces.iter().map(|p| coerce_unsigned(p)).collect();
    let unparsed = coerced.iter().filter(|value| value.is_none()).count();

    let mut notices = Vec::new();
    let candidates: Vec<String> = if unparsed == 0 {
        coerced.into_iter().flatten().collect()
    } else {
        match options.fallback {
            CoercionFallback::Drop => {
                debug!(unparsed, "dropping tokens that are not unsigned integers");
                notices.push(Notice::DroppedTokens { count: unparsed });
                coerced.into_iter().flatten().collect()
            }
            CoercionFallback::KeepString => {
                debug!(unparsed, "falling back to string identifiers for the batch");
                notices.push(Notice::StringFallback { unparsed });
                pieces
            }
        }
    };

    let mut ids = ResultSet::new();
    for candidate in candidates {
        if is_placeholder(&candidate) {
            stats.discarded += 1;
            continue;
        }
        if !ids.insert(candidate) {
            stats.duplicates += 1;
        }
    }
    if ids.is_empty() {
        notices.push(Notice::EmptyResult);
    }

    trace!(policy = options.tag(), ?stats, "token statistics");
    debug!(
        cells = stats.cells,
        tokens = stats.tokens,
        unique = ids.len(),
        duplicates = stats.duplicates,
        "normalized contract ids"
    );

    Normalized {
        ids,
        notices,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delimiter_options(fallback: CoercionFallback) -> NormalizeOptions {
        NormalizeOptions::new()
            .with_policy(ExtractionPolicy::DelimiterSet)
            .with_fallback(fallback)
    }

    #[test]
    fn empty_and_absent_inputs() {
        assert!(normalize("").is_empty());
        assert!(normalize(None::<&str>).is_empty());
        assert!(normalize(RawInput::Column(Vec::new())).is_empty());

        let result = normalize_with(&RawInput::from(""), &NormalizeOptions::default());
        assert_eq!(result.notices, vec![Notice::EmptyResult]);
    }

    #[test]
    fn mixed_text_keeps_first_seen_order() {
        let ids = normalize("ID: 12345678 (note) 90123456, 78901234\n56789012");
        assert_eq!(ids.as_slice(), ["12345678", "90123456", "78901234", "56789012"]);
    }

    #[test]
    fn duplicates_collapse() {
        let result = normalize_with(&RawInput::from("100, 100, 100"), &NormalizeOptions::default());
        assert_eq!(result.ids.as_slice(), ["100"]);
        assert_eq!(result.stats.duplicates, 2);
        assert!(result.notices.is_empty());
    }

    #[test]
    fn float_artifact_is_stripped() {
        assert_eq!(normalize("12345678.0").as_slice(), ["12345678"]);
    }

    #[test]
    fn placeholders_only_yield_empty_result() {
        let result = normalize_with(&RawInput::from("abc, , nan, NaN"), &NormalizeOptions::default());
        assert!(result.ids.is_empty());
        assert_eq!(result.notices, vec![Notice::EmptyResult]);
    }

    #[test]
    fn column_cells_are_scanned_in_row_order() {
        let column = RawInput::Column(vec![
            Some("300 200".to_string()),
            None,
            Some("100;300".to_string()),
            Some("nan".to_string()),
        ]);
        let result = normalize_with(&column, &NormalizeOptions::default());
        assert_eq!(result.ids.as_slice(), ["300", "200", "100"]);
        assert_eq!(result.stats.cells, 3);
    }

    #[test]
    fn leading_zeros_are_canonicalized() {
        assert_eq!(normalize("007, 7, 0").as_slice(), ["7", "0"]);
    }

    #[test]
    fn long_digit_runs_are_kept_whole() {
        let result = normalize_with(
            &RawInput::from("12345678, 1234567890123456789012345"),
            &NormalizeOptions::default(),
        );
        assert_eq!(
            result.ids.as_slice(),
            ["12345678", "1234567890123456789012345"]
        );
        assert!(result.notices.is_empty());
    }

    #[test]
    fn keep_string_fallback_applies_to_whole_batch() {
        let result = normalize_with(
            &RawInput::from("007, ID:5"),
            &delimiter_options(CoercionFallback::KeepString),
        );
        assert_eq!(result.ids.as_slice(), ["007", "ID:5"]);
        assert_eq!(result.notices, vec![Notice::StringFallback { unparsed: 1 }]);
    }

    #[test]
    fn delimiter_set_drops_embedded_labels() {
        let result = normalize_with(
            &RawInput::from("ID:123 456.0\n789, nan"),
            &delimiter_options(CoercionFallback::Drop),
        );
        assert_eq!(result.ids.as_slice(), ["456", "789"]);
        assert_eq!(result.notices, vec![Notice::DroppedTokens { count: 1 }]);
        assert_eq!(result.stats.discarded, 1);
    }

    #[test]
    fn delimiter_set_can_keep_labels_as_strings() {
        let result = normalize_with(
            &RawInput::from("ID:123 456.0 456"),
            &delimiter_options(CoercionFallback::KeepString),
        );
        assert_eq!(result.ids.as_slice(), ["ID:123", "456"]);
        assert_eq!(result.stats.duplicates, 1);
    }
}
