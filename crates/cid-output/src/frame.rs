use cid_model::{CLEAN_ID_COLUMN, ResultSet};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};

/// Builds the one-column result table (`Contract ID Limpo`).
pub fn result_frame(ids: &ResultSet) -> PolarsResult<DataFrame> {
    let values: Vec<&str> = ids.iter().map(String::as_str).collect();
    let column: Column = Series::new(CLEAN_ID_COLUMN.into(), values).into_column();
    DataFrame::new(vec![column])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_has_single_clean_column() {
        let ids: ResultSet = ["1", "2"].into_iter().collect();
        let df = result_frame(&ids).unwrap();
        assert_eq!(df.height(), 2);
        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["Contract ID Limpo"]);
    }

    #[test]
    fn empty_set_gives_empty_frame() {
        let df = result_frame(&ResultSet::new()).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 1);
    }
}
