//! Result tables for command output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use xst_model::{DataFormat, MappingRule, ValidationResult};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

pub fn print_validation_summary(format: DataFormat, result: &ValidationResult) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Format"),
        header_cell("Valid"),
        header_cell("Length"),
        header_cell("Errors"),
    ]);
    let valid_cell = if result.is_valid {
        Cell::new("yes").fg(Color::Green)
    } else {
        Cell::new("no").fg(Color::Red)
    };
    table.add_row(vec![
        Cell::new(format.upper_name()),
        valid_cell,
        Cell::new(result.data_length),
        Cell::new(result.errors.len()),
    ]);
    println!("{table}");
    for error in &result.errors {
        println!("  - {error}");
    }
}

pub fn print_rules_table(rules: &[MappingRule]) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Source Path"),
        header_cell("Target Path"),
        header_cell("Kind"),
        header_cell("Condition"),
    ]);
    for rule in rules {
        table.add_row(vec![
            Cell::new(rule.id),
            Cell::new(&rule.source_path),
            Cell::new(&rule.target_path),
            Cell::new(rule.transformation),
            Cell::new(&rule.condition),
        ]);
    }
    println!("{table}");
}
