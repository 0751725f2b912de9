//! Data model shared by the contract ID crates.
//!
//! The model is deliberately small: a [`RawInput`] goes in, a [`Normalized`]
//! value (the [`ResultSet`] plus [`Notice`]s and [`TokenStats`]) comes out.

pub mod identifiers;
pub mod input;
pub mod notice;
pub mod options;

pub use identifiers::{Normalized, ResultSet, TokenStats};
pub use input::RawInput;
pub use notice::Notice;
pub use options::{CoercionFallback, ExtractionPolicy, NormalizeOptions};

/// Column that holds the raw contract IDs in uploaded tables.
pub const DEFAULT_ID_COLUMN: &str = "Contract ID";

/// Column name used for the cleaned identifiers in CSV output.
pub const CLEAN_ID_COLUMN: &str = "Contract ID Limpo";
