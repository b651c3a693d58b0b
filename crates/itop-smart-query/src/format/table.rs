//! Fixed-width table rendering.

use std::fmt::Write;

use itop_protocol::ObjectRecord;

use crate::taxonomy::{ClassDescriptor, Column};

const DEFAULT_WIDTH: usize = 20;
const DEFAULT_COLUMNS: usize = 5;

pub fn render(class: &ClassDescriptor, records: &[&ObjectRecord]) -> String {
    let columns = columns(class);

    let mut out = String::from("```\n");
    let header: Vec<String> = columns.iter().map(|c| cell(&c.header, c.width)).collect();
    let _ = writeln!(out, "{}", header.join(" | ").trim_end());
    let rule: Vec<String> = columns.iter().map(|c| "-".repeat(c.width)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));

    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|c| cell(&record.text(&c.field).unwrap_or_default(), c.width))
            .collect();
        let _ = writeln!(out, "{}", row.join(" | ").trim_end());
    }
    out.push_str("```\n");
    out
}

/// Class columns, or the first default fields at a uniform width.
fn columns(class: &ClassDescriptor) -> Vec<Column> {
    if !class.columns.is_empty() {
        return class.columns.clone();
    }
    class
        .default_fields
        .iter()
        .take(DEFAULT_COLUMNS)
        .map(|field| Column {
            field: field.clone(),
            header: field.clone(),
            width: DEFAULT_WIDTH,
        })
        .collect()
}

/// `value` cut to `width` characters (ending in `…` when cut) and padded.
pub fn cell(value: &str, width: usize) -> String {
    let count = value.chars().count();
    if count > width {
        let kept: String = value.chars().take(width.saturating_sub(1)).collect();
        format!("{kept}…")
    } else {
        format!("{value}{}", " ".repeat(width - count))
    }
}
