//! Contract ID normalization crate.
//!
//! Turns free-form text (or a column of spreadsheet cells) into an ordered,
//! duplicate-free list of digit-only identifiers, and renders that list as a
//! SQL `IN`-clause literal.
//!
//! # Example
//!
//! ```
//! use cid_normalization::{format_sql_list, normalize};
//!
//! let ids = normalize("ID: 12345678 (note) 90123456, 12345678");
//! assert_eq!(ids.as_slice(), ["12345678", "90123456"]);
//! assert_eq!(format_sql_list(&ids), "'12345678','90123456'");
//! ```
//!
//! # Design Principles
//!
//! - **Pure**: no I/O, no shared state; the same input always yields the same output
//! - **Order-preserving**: identifiers keep the order in which they were first seen
//! - **Non-fatal**: problems become [`Notice`](cid_model::Notice)s, never errors

pub mod cache;
pub mod numeric;
pub mod sql;
pub mod tokenize;

mod normalize;

pub use cache::{NormalizeCache, input_key};
pub use normalize::{normalize, normalize_with};
pub use sql::{format_sql_in_clause, format_sql_list};
