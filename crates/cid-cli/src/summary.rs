use std::path::PathBuf;

use cid_model::CLEAN_ID_COLUMN;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::{DataFrame, DataType};

use cid_cli::types::{InputOutcome, RunResult};

/// Number of clean IDs shown per input.
const RESULT_PREVIEW_ROWS: usize = 10;

/// Prints the per-input previews and the run totals to stderr.
pub fn print_summary(result: &RunResult) {
    for outcome in &result.inputs {
        print_input(outcome);
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Rows"),
        header_cell("Tokens"),
        header_cell("Unique IDs"),
        header_cell("Duplicates"),
        header_cell("CSV"),
        header_cell("SQL"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 5, CellAlignment::Center);
    align_column(&mut table, 6, CellAlignment::Center);

    let mut total_unique = 0usize;
    for outcome in &result.inputs {
        total_unique += outcome.unique_ids();
        let (tokens, duplicates) = outcome.result.as_ref().map_or((None, None), |result| {
            (Some(result.stats.tokens), Some(result.stats.duplicates))
        });
        table.add_row(vec![
            Cell::new(&outcome.source)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(outcome.rows),
            count_cell(tokens, Color::White),
            count_cell(outcome.result.as_ref().map(|_| outcome.unique_ids()), Color::Green),
            count_cell(duplicates, Color::Yellow),
            output_cell(outcome.outputs.csv.as_ref()),
            output_cell(outcome.outputs.sql.as_ref()),
            status_cell(outcome),
        ]);
    }
    if result.inputs.len() > 1 {
        table.add_row(vec![
            Cell::new("TOTAL")
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            dim_cell("-"),
            dim_cell("-"),
            Cell::new(total_unique).add_attribute(Attribute::Bold),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
        ]);
    }
    eprintln!("{table}");
    if result.cache_hits > 0 {
        eprintln!("{} identical input(s) reused a cached result.", result.cache_hits);
    }
}

fn print_input(outcome: &InputOutcome) {
    eprintln!();
    eprintln!("Input: {}", outcome.source);
    if let Some(error) = &outcome.error {
        eprintln!("error: {error}");
        return;
    }
    if let Some(preview) = &outcome.preview {
        eprintln!("Initial data preview:");
        eprintln!("{}", frame_table(preview));
    }
    let Some(result) = &outcome.result else {
        return;
    };
    for notice in &result.notices {
        eprintln!("warning: {notice}");
    }
    if result.ids.is_empty() {
        return;
    }
    eprintln!("Found {} unique ID(s) after cleaning.", result.ids.len());
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell(CLEAN_ID_COLUMN)]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, id) in result.ids.iter().take(RESULT_PREVIEW_ROWS).enumerate() {
        table.add_row(vec![dim_cell(index), Cell::new(id)]);
    }
    if result.ids.len() > RESULT_PREVIEW_ROWS {
        table.add_row(vec![
            dim_cell("…"),
            dim_cell(format!("{} more", result.ids.len() - RESULT_PREVIEW_ROWS)),
        ]);
    }
    eprintln!("{table}");
}

/// Renders a string-typed frame; missing values show as a dim `-`.
fn frame_table(df: &DataFrame) -> Table {
    let mut table = Table::new();
    table.set_header(
        df.get_column_names()
            .iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    let columns: Vec<Vec<Option<String>>> = df
        .get_columns()
        .iter()
        .map(|column| {
            column
                .as_materialized_series()
                .cast(&DataType::String)
                .ok()
                .and_then(|series| {
                    series
                        .str()
                        .ok()
                        .map(|values| {
                            values
                                .into_iter()
                                .map(|v| v.map(str::to_string))
                                .collect::<Vec<Option<String>>>()
                        })
                })
                .unwrap_or_else(|| vec![None; df.height()])
        })
        .collect();
    for row in 0..df.height() {
        let cells: Vec<Cell> = columns
            .iter()
            .map(|values| match values.get(row).cloned().flatten() {
                Some(value) => Cell::new(value),
                None => dim_cell("-"),
            })
            .collect();
        table.add_row(cells);
    }
    table
}

fn status_cell(outcome: &InputOutcome) -> Cell {
    if outcome.error.is_some() {
        return Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold);
    }
    match &outcome.result {
        Some(result) if result.ids.is_empty() => Cell::new("EMPTY").fg(Color::Yellow),
        Some(result) if !result.notices.is_empty() => Cell::new("WARN").fg(Color::Yellow),
        Some(_) => Cell::new("OK").fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn output_cell(path: Option<&PathBuf>) -> Cell {
    match path {
        Some(_) => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    }
}

fn count_cell(count: Option<usize>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
