//! SQL `IN`-clause text output.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use cid_model::ResultSet;
use cid_normalization::{format_sql_in_clause, format_sql_list};

/// The bare `'a','b'` list, or `column IN ('a','b')` when a column is named.
pub fn sql_text(ids: &ResultSet, column: Option<&str>) -> String {
    column
        .and_then(|column| format_sql_in_clause(column, ids))
        .unwrap_or_else(|| format_sql_list(ids))
}

/// Writes the literal followed by a newline (for terminals and pipes).
pub fn write_sql<W: Write>(writer: &mut W, ids: &ResultSet, column: Option<&str>) -> Result<()> {
    writeln!(writer, "{}", sql_text(ids, column)).context("write sql literal")
}

/// Writes the literal as the exact file content, without a trailing newline.
pub fn write_sql_file(path: &Path, ids: &ResultSet, column: Option<&str>) -> Result<()> {
    fs::write(path, sql_text(ids, column)).with_context(|| format!("write {}", path.display()))?;
    tracing::debug!(path = %path.display(), ids = ids.len(), "wrote sql literal");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_turns_list_into_predicate() {
        let ids: ResultSet = ["10", "20"].into_iter().collect();
        assert_eq!(sql_text(&ids, None), "'10','20'");
        assert_eq!(
            sql_text(&ids, Some("contract_id")),
            "contract_id IN ('10','20')"
        );
    }

    #[test]
    fn empty_set_stays_empty_with_column() {
        assert_eq!(sql_text(&ResultSet::new(), Some("contract_id")), "");
    }
}
