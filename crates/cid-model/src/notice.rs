use std::fmt;

use serde::{Deserialize, Serialize};

/// Non-fatal conditions reported alongside a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// Input was read but yielded no valid identifier.
    EmptyResult,
    /// Tokens that could not be read as unsigned integers were dropped.
    DroppedTokens { count: usize },
    /// Some tokens were not integers, so the whole batch kept its string form.
    StringFallback { unparsed: usize },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyResult => f.write_str("processing finished but no valid contract ID was found"),
            Self::DroppedTokens { count } => {
                write!(f, "{count} token(s) could not be read as integers and were dropped")
            }
            Self::StringFallback { unparsed } => write!(
                f,
                "{unparsed} token(s) could not be read as integers; keeping string values for the whole batch"
            ),
        }
    }
}
