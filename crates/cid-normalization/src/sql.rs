//! SQL literal rendering for identifier lists.

use cid_model::ResultSet;

/// Renders identifiers as `'id1','id2','id3'`.
///
/// No brackets, no spaces, no trailing comma; an empty set renders as `""`.
/// Single quotes inside a value are doubled.
pub fn format_sql_list(ids: &ResultSet) -> String {
    let mut out = String::with_capacity(ids.len() * 12);
    for (pos, id) in ids.iter().enumerate() {
        if pos > 0 {
            out.push(',');
        }
        out.push('\'');
        out.push_str(&id.replace('\'', "''"));
        out.push('\'');
    }
    out
}

/// Renders a full `column IN (...)` predicate, or `None` for an empty set.
pub fn format_sql_in_clause(column: &str, ids: &ResultSet) -> Option<String> {
    if ids.is_empty() {
        return None;
    }
    Some(format!("{column} IN ({})", format_sql_list(ids)))
}
