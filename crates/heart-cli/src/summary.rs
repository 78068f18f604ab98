use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::MergeResult;

/// Print the operator summary: one row per source in merge order, the
/// merged total, and the final shape after pruning and filtering.
pub fn print_summary(result: &MergeResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("File"),
        header_cell("Records"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for summary in &result.sources {
        table.add_row(vec![
            Cell::new(summary.source.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.file.display()),
            Cell::new(summary.records),
        ]);
    }
    table.add_row(vec![
        Cell::new("ALL").fg(Color::Cyan).add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(result.merged_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if !result.sparse_dropped.is_empty() {
        println!(
            "Sparse columns dropped: {}",
            result.sparse_dropped.join(", ")
        );
    }
    println!("Rows dropped as incomplete: {}", result.rows_removed);
    println!(
        "Wrote {} ({} rows x {} columns)",
        result.output.display(),
        result.final_rows,
        result.final_columns
    );
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
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
