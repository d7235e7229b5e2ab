use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lineage_tree::BuildReport;

use crate::commands::ConvertResult;

pub fn print_summary(result: &ConvertResult, show_skipped: bool) {
    let report = &result.build.report;
    println!("Input: {}", result.input.display());

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, value) in summary_rows(report) {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    table.add_row(vec![
        Cell::new("Rows skipped"),
        count_cell(report.rows_skipped.len(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Root fallback"),
        if report.used_root_fallback {
            Cell::new("yes").fg(Color::Yellow).add_attribute(Attribute::Bold)
        } else {
            dim_cell("no")
        },
    ]);
    table.add_row(vec![
        dim_cell("Elapsed"),
        dim_cell(format!("{} ms", result.elapsed.as_millis())),
    ]);
    println!("{table}");

    if show_skipped {
        print_skipped_table(report);
    }
    match &result.output {
        Some(path) => println!("Saved {}", path.display()),
        None => println!("Dry run: nothing written"),
    }
}

fn summary_rows(report: &BuildReport) -> Vec<(&'static str, usize)> {
    vec![
        ("Rows read", report.rows_read),
        ("Rows used", report.rows_used()),
        ("Parents", report.parent_count),
        ("Relationships", report.edge_count),
        ("Roots", report.root_count),
        ("People in tree", report.node_count),
        ("Depth", report.depth),
    ]
}

fn print_skipped_table(report: &BuildReport) {
    if report.rows_skipped.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Row"), header_cell("Reason")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for skipped in &report.rows_skipped {
        // 1-based, matching spreadsheet row numbers.
        table.add_row(vec![
            Cell::new(skipped.index + 1),
            Cell::new(skipped.reason.label()).fg(Color::Yellow),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
