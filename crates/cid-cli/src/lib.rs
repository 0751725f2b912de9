//! CLI library components for the contract ID cleaner.

#![allow(missing_docs)]

pub mod logging;
pub mod pipeline;
pub mod report;
pub mod types;
