use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use covid_report::{DatasetInfo, DatasetInfoReport, NOT_APPLICABLE, REPORT_COLUMNS};

use crate::types::{AbsentDataset, InfoResult, ReportScope};

pub fn print_info(result: &InfoResult) {
    println!("Data: {}", result.data_dir.display());
    println!("{}", build_report_table(&result.report));
    if let Some(table) = build_absent_table(&result.absent) {
        println!();
        println!("Absent datasets:");
        println!("{table}");
    }
    if result.scope == ReportScope::LoadedFiles && !result.absent.is_empty() {
        println!("Use --all to list absent datasets in the report.");
    }
}

/// Report rows plus a bold totals row for present tables.
pub fn build_report_table(report: &DatasetInfoReport) -> Table {
    let mut table = Table::new();
    table.set_header(REPORT_COLUMNS.iter().map(|label| header_cell(label)));
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let mut total_rows = 0usize;
    let mut total_mb = 0.0f64;
    for info in report {
        total_rows += info.rows.unwrap_or(0);
        total_mb += info.memory_mb.unwrap_or(0.0);
        table.add_row(report_row(info));
    }
    if !report.is_empty() {
        table.add_row(vec![
            Cell::new("TOTAL")
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new(total_rows).add_attribute(Attribute::Bold),
            dim_cell("-"),
            Cell::new(format!("{total_mb:.2}")).add_attribute(Attribute::Bold),
            Cell::new(format!(
                "{} of {} loaded",
                report.present_count(),
                report.len()
            ))
            .fg(Color::Cyan),
        ]);
    }
    table
}

fn report_row(info: &DatasetInfo) -> Vec<Cell> {
    let name = if info.is_present() {
        Cell::new(&info.dataset)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(&info.dataset).fg(Color::DarkGrey)
    };
    vec![
        name,
        value_cell(info.rows_cell()),
        value_cell(info.columns_cell()),
        value_cell(info.memory_cell()),
        value_cell(info.columns_list_cell()),
    ]
}

/// Table of files that did not load; `None` when everything loaded.
pub fn build_absent_table(absent: &[AbsentDataset]) -> Option<Table> {
    if absent.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Variable"),
        header_cell("Status"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for dataset in absent {
        table.add_row(vec![
            Cell::new(dataset.file_name),
            Cell::new(dataset.var_name),
            status_cell(dataset.status),
            match &dataset.reason {
                Some(reason) => Cell::new(reason),
                None => dim_cell("-"),
            },
        ]);
    }
    Some(table)
}

pub fn apply_table_style(table: &mut Table) {
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
        .set_width(140);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(11)),
            ColumnConstraint::UpperBoundary(Width::Percentage(60)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn value_cell(value: String) -> Cell {
    if value == NOT_APPLICABLE {
        dim_cell(value)
    } else {
        Cell::new(value)
    }
}

fn status_cell(status: &str) -> Cell {
    match status {
        "failed" => Cell::new("FAILED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        "missing" => Cell::new("MISSING").fg(Color::Yellow),
        other => Cell::new(other),
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
