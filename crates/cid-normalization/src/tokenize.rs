//! Splitting raw text into candidate tokens.

use crate::numeric::strip_float_artifact;

/// Returns true for characters that separate tokens in every policy.
pub fn is_delimiter(ch: char) -> bool {
    ch.is_whitespace() || ch == ',' || ch == ';'
}

/// Splits on whitespace, commas and semicolons, dropping empty pieces.
pub fn split_delimited(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_delimiter)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
}

/// Returns true for pieces that stand for "no value" (`""`, `nan`, `NaN`).
pub fn is_placeholder(token: &str) -> bool {
    let token = token.trim();
    token.is_empty() || token.eq_ignore_ascii_case("nan")
}

/// Tokens for the delimiter-set policy.
///
/// Float artifacts are removed; letters and punctuation other than the
/// delimiters stay inside the token.
pub fn delimited_tokens(text: &str) -> Vec<String> {
    split_delimited(text)
        .map(|piece| strip_float_artifact(piece).into_owned())
        .collect()
}

/// Maximal runs of ASCII digits found in `text`.
///
/// A `.0` (or `.00`…) directly after a run is treated as a float artifact and
/// skipped, so `"(12345678.0)"` yields only `"12345678"`.
pub fn digit_runs(text: &str) -> Vec<String> {
    let mut runs = Vec::new();
    for chunk in split_delimited(text) {
        let chunk = strip_float_artifact(chunk);
        let bytes = chunk.as_bytes();
        let mut idx = 0;
        while idx < bytes.len() {
            if !bytes[idx].is_ascii_digit() {
                idx += 1;
                continue;
            }
            let start = idx;
            while idx < bytes.len() && bytes[idx].is_ascii_digit() {
                idx += 1;
            }
            runs.push(chunk[start..idx].to_string());
            idx = skip_zero_fraction(bytes, idx);
        }
    }
    runs
}

/// Index just past a `.0…0` suffix starting at `idx`, or `idx` when there is
/// none (or when more digits follow the zeros).
fn skip_zero_fraction(bytes: &[u8], idx: usize) -> usize {
    if bytes.get(idx) != Some(&b'.') {
        return idx;
    }
    let mut end = idx + 1;
    while bytes.get(end) == Some(&b'0') {
        end += 1;
    }
    if end == idx + 1 || bytes.get(end).is_some_and(u8::is_ascii_digit) {
        return idx;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_runs_split_on_any_non_digit() {
        assert_eq!(
            digit_runs("ID: 12345678 (note) 90123456, 78901234\n56789012"),
            vec!["12345678", "90123456", "78901234", "56789012"]
        );
        assert_eq!(digit_runs("A-1/B-22|C#333"), vec!["1", "22", "333"]);
    }

    #[test]
    fn digit_runs_skip_float_artifacts() {
        assert_eq!(digit_runs("12345678.0"), vec!["12345678"]);
        assert_eq!(digit_runs("(12345678.0)"), vec!["12345678"]);
        assert_eq!(digit_runs("1.2345678E7"), vec!["12345678"]);
        assert_eq!(digit_runs("12.50"), vec!["12", "50"]);
    }

    #[test]
    fn digit_runs_ignore_non_ascii_digits() {
        assert_eq!(digit_runs("nº 42 – ١٢٣"), vec!["42"]);
    }

    #[test]
    fn delimited_tokens_keep_embedded_characters() {
        assert_eq!(
            delimited_tokens("ID:123; 456.0,\r\n789"),
            vec!["ID:123", "456", "789"]
        );
    }

    #[test]
    fn placeholders() {
        assert!(is_placeholder(""));
        assert!(is_placeholder(" NaN "));
        assert!(is_placeholder("nan"));
        assert!(!is_placeholder("nano"));
    }
}
