use cid_model::{CoercionFallback, ExtractionPolicy, NormalizeOptions, Notice};

#[test]
fn default_options_use_digit_runs_and_drop() {
    let options = NormalizeOptions::default();
    assert_eq!(options.policy, ExtractionPolicy::DigitRuns);
    assert_eq!(options.fallback, CoercionFallback::Drop);
    assert_eq!(options.tag(), "digits/drop");
}

#[test]
fn options_round_trip_through_json() {
    let options = NormalizeOptions::new()
        .with_policy(ExtractionPolicy::DelimiterSet)
        .with_fallback(CoercionFallback::KeepString);
    let json = serde_json::to_string(&options).unwrap();
    assert_eq!(json, r#"{"policy":"delimiter_set","fallback":"keep_string"}"#);

    let parsed: NormalizeOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, options);
    assert_eq!(parsed.tag(), "delimiters/keep");
}

#[test]
fn notices_render_user_facing_messages() {
    assert_eq!(
        Notice::DroppedTokens { count: 2 }.to_string(),
        "2 token(s) could not be read as integers and were dropped"
    );
    assert!(Notice::EmptyResult.to_string().contains("no valid contract ID"));
}
