use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use foodfacts_extract::PassState;
use foodfacts_model::Product;
use foodfacts_parquet::DatasetInfo;

use crate::types::ExtractResult;

pub fn print_extract_summary(result: &ExtractResult, limit: usize) {
    println!("Dataset: {}", result.dataset.display());
    println!(
        "Filter: {} contains \"{}\"",
        result.options.tag_field, result.options.tag_value
    );
    if let Some(path) = &result.output {
        println!("Output: {}", path.display());
    }
    println!("{}", extract_summary_table(result));
    if result.products.is_empty() {
        println!("No matching products.");
        return;
    }
    println!("{}", products_table(&result.products, limit));
    let hidden = result.products.len().saturating_sub(limit);
    if hidden > 0 {
        println!("... {hidden} more (raise --limit or use --output to see all)");
    }
}

pub fn extract_summary_table(result: &ExtractResult) -> Table {
    let report = &result.report;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Windows"),
        header_cell("Window size"),
        header_cell("Rows"),
        header_cell("Scanned"),
        header_cell("Matched"),
        header_cell("State"),
        header_cell("Duration"),
    ]);
    apply_summary_table_style(&mut table);
    for index in [0, 1, 2, 3, 4, 6] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let scanned = if report.rows_scanned == report.total_rows {
        Cell::new(report.rows_scanned)
    } else {
        Cell::new(report.rows_scanned).fg(Color::Yellow)
    };
    table.add_row(vec![
        Cell::new(report.windows),
        Cell::new(result.options.window_size),
        Cell::new(report.total_rows),
        scanned,
        Cell::new(report.rows_matched)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        state_cell(report.state),
        dim_cell(format!("{} ms", report.elapsed.as_millis())),
    ]);
    table
}

pub fn products_table(products: &[Product], limit: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Code"),
        header_cell("Name"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, product) in products.iter().take(limit).enumerate() {
        let name = if product.name().is_empty() {
            dim_cell("-")
        } else {
            Cell::new(product.name())
        };
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(product.code()),
            name,
        ]);
    }
    table
}

pub fn print_inspect(info: &DatasetInfo) {
    println!("Dataset: {}", info.path.display());
    println!("Rows: {}", info.total_rows);
    println!("Row groups: {}", info.row_groups);
    println!("{}", columns_table(info));
}

pub fn columns_table(info: &DatasetInfo) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Physical"),
        header_cell("Converted"),
        header_cell("Repeated"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    for column in &info.columns {
        let converted = match &column.converted_type {
            Some(kind) => Cell::new(kind),
            None => dim_cell("-"),
        };
        let repeated = if column.repeated {
            Cell::new("yes").fg(Color::Blue)
        } else {
            dim_cell("no")
        };
        table.add_row(vec![
            Cell::new(&column.path),
            Cell::new(&column.physical_type),
            converted,
            repeated,
        ]);
    }
    table
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
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn state_cell(state: PassState) -> Cell {
    match state {
        PassState::Done => Cell::new(state).fg(Color::Green),
        PassState::Failed => Cell::new(state)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        _ => Cell::new(state),
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
