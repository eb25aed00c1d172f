use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use slph_core::redact::redact_value;

use crate::types::{CheckRow, HashResult};

pub fn print_summary(result: &HashResult) {
    println!("Input: {}", result.input.display());
    println!(
        "Processed {} phone numbers successfully!",
        result.outcome.accepted_count()
    );
    println!("{}", counts_table(result));

    let preview = result.outcome.preview(result.preview_rows);
    if !preview.is_empty() {
        println!();
        println!("Sample of hashed numbers:");
        println!("{}", preview_table(result));
    }

    println!();
    print_output("Hashed CSV", result.outputs.hashed_csv.as_deref());
    if let Some(path) = &result.outputs.rejections {
        print_output("Rejections", Some(path));
    }
    if let Some(path) = &result.outputs.report {
        print_output("Report", Some(path));
    }
}

pub fn counts_table(result: &HashResult) -> Table {
    let outcome = &result.outcome;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Rows"),
        header_cell("Accepted"),
        header_cell("Rejected"),
        header_cell("Unique"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(&result.column)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(outcome.total_rows),
        count_cell(outcome.accepted_count(), Color::Green),
        count_cell(outcome.rejected_count(), Color::Yellow),
        Cell::new(outcome.unique_hash_count()),
    ]);
    table
}

pub fn preview_table(result: &HashResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Row"), header_cell("hashed_phone")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for row in result.outcome.preview(result.preview_rows) {
        table.add_row(vec![dim_cell(row.row), Cell::new(row.hash.as_str())]);
    }
    table
}

pub fn print_check(rows: &[CheckRow]) {
    println!("{}", check_table(rows));
}

pub fn check_table(rows: &[CheckRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Status"),
        header_cell("hashed_phone"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for row in rows {
        let (status, hash) = match &row.hash {
            Some(hash) => (
                Cell::new("OK").fg(Color::Green).add_attribute(Attribute::Bold),
                Cell::new(hash),
            ),
            None => (Cell::new("REJECTED").fg(Color::Red), dim_cell("-")),
        };
        table.add_row(vec![Cell::new(redact_value(&row.input)), status, hash]);
    }
    table
}

fn print_output(label: &str, path: Option<&Path>) {
    match path {
        Some(path) => println!("{label}: {}", path.display()),
        None => println!("{label}: not written (dry run)"),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use slph_core::{PipelineOptions, RawPhoneEntry, process_entries};

    use super::*;
    use crate::types::OutputPaths;

    fn result(values: &[&str], preview_rows: usize) -> HashResult {
        let entries: Vec<RawPhoneEntry> = values.iter().copied().map(RawPhoneEntry::from).collect();
        HashResult {
            input: PathBuf::from("contacts.csv"),
            column: "phone".to_string(),
            outcome: process_entries(&entries, &PipelineOptions::default()),
            preview_rows,
            outputs: OutputPaths::default(),
        }
    }

    #[test]
    fn test_preview_table_is_bounded() {
        let result = result(&["0712345678", "0771234567", "abc", "712345678"], 2);
        let table = preview_table(&result);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_counts_table_values() {
        let result = result(&["0712345678", "abc", "94712345678"], 20);
        let text = counts_table(&result).to_string();
        assert!(text.contains("phone"));
        assert!(text.contains('3'));
        assert!(text.contains('2'));
    }

    #[test]
    fn test_check_table_marks_rejections() {
        let rows = vec![
            CheckRow {
                input: "0712345678".to_string(),
                hash: Some("2e28".to_string()),
            },
            CheckRow {
                input: "12345".to_string(),
                hash: None,
            },
        ];
        let text = check_table(&rows).to_string();
        assert!(text.contains("OK"));
        assert!(text.contains("REJECTED"));
        assert!(!text.contains("12345"));
    }
}
