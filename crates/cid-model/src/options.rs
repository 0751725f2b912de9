//! Configuration options for contract ID normalization.

use serde::{Deserialize, Serialize};

/// How raw text is cut into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionPolicy {
    /// Every run of non-digit characters is a delimiter.
    #[default]
    DigitRuns,
    /// Only whitespace, comma and semicolon delimit; other characters stay
    /// inside the token and make it fail integer coercion.
    DelimiterSet,
}

/// What happens to tokens that cannot be read as unsigned integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoercionFallback {
    /// Drop the offending tokens.
    #[default]
    Drop,
    /// Keep the string form of every token in the batch.
    KeepString,
}

/// Options for one normalization run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    pub policy: ExtractionPolicy,
    pub fallback: CoercionFallback,
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: ExtractionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_fallback(mut self, fallback: CoercionFallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Stable tag used when fingerprinting inputs for the memo cache.
    pub fn tag(&self) -> &'static str {
        match (self.policy, self.fallback) {
            (ExtractionPolicy::DigitRuns, CoercionFallback::Drop) => "digits/drop",
            (ExtractionPolicy::DigitRuns, CoercionFallback::KeepString) => "digits/keep",
            (ExtractionPolicy::DelimiterSet, CoercionFallback::Drop) => "delimiters/drop",
            (ExtractionPolicy::DelimiterSet, CoercionFallback::KeepString) => "delimiters/keep",
        }
    }
}
