//! Per-record rendering with icons and labelled detail lines.

use std::fmt::Write;

use itop_protocol::ObjectRecord;
use serde_json::Value;

use crate::intent::Focus;
use crate::taxonomy::ClassDescriptor;

use super::{criticality_icon, priority_icon};

/// Records shown before the listing is cut short.
pub const MAX_RECORDS: usize = 50;
/// Software entries shown per record.
pub const MAX_SOFTWARE: usize = 10;

const SOFTWARE_FIELD: &str = "softwares_list";
const TYPE_FIELD: &str = "finalclass";

pub fn render(class: &ClassDescriptor, focus: Focus, records: &[&ObjectRecord]) -> String {
    let shown = &records[..records.len().min(MAX_RECORDS)];
    let mut out = String::new();

    if class.name == "Ticket" {
        for (kind, group) in by_type(shown) {
            let _ = writeln!(out, "### {kind} ({})\n", group.len());
            for (i, record) in group.iter().enumerate() {
                out.push_str(&entry(class, focus, i + 1, record));
            }
        }
    } else {
        for (i, record) in shown.iter().enumerate() {
            out.push_str(&entry(class, focus, i + 1, record));
        }
    }

    if records.len() > shown.len() {
        let _ = writeln!(
            out,
            "... and {} more {} not shown. Use table mode for a compact view.",
            records.len() - shown.len(),
            class.plural
        );
    }
    out
}

/// Records bucketed by concrete ticket class, in order of first appearance.
fn by_type<'r>(records: &[&'r ObjectRecord]) -> Vec<(String, Vec<&'r ObjectRecord>)> {
    let mut groups: Vec<(String, Vec<&ObjectRecord>)> = Vec::new();
    for &record in records {
        let kind = record.text(TYPE_FIELD).unwrap_or_else(|| "Ticket".into());
        match groups.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, members)) => members.push(record),
            None => groups.push((kind, vec![record])),
        }
    }
    groups
}

fn entry(class: &ClassDescriptor, focus: Focus, index: usize, record: &ObjectRecord) -> String {
    let title = record
        .text(&class.title_field)
        .or_else(|| record.text("name"))
        .or_else(|| record.text("friendlyname"))
        .unwrap_or_else(|| "(unnamed)".into());
    let mut out = format!("{index}. **{title}**");
    if let Some(subtitle) = class.subtitle_field.as_deref().and_then(|f| record.text(f)) {
        let _ = write!(out, " - {subtitle}");
    }
    out.push('\n');

    let software = focus == Focus::Software && !class.software_fields.is_empty();
    if class.detail.is_empty() {
        for field in &class.default_fields {
            if *field == class.title_field {
                continue;
            }
            if let Some(value) = record.text(field) {
                let _ = writeln!(out, "   • {field}: {value}");
            }
        }
    } else {
        for line in &class.detail {
            if software && !class.software_fields.contains(&line.field) {
                continue;
            }
            if let Some(value) = record.text(&line.field) {
                let _ = writeln!(
                    out,
                    "   {} {}: {}",
                    line.icon,
                    line.label,
                    decorate(&line.field, &value)
                );
            }
        }
    }

    if software {
        out.push_str(&software_list(record));
    }
    out.push('\n');
    out
}

/// Prefixes priority and criticality values with their colour marker.
fn decorate(field: &str, value: &str) -> String {
    let icon = match field {
        "priority" => priority_icon(value),
        "business_criticity" => criticality_icon(value),
        _ => "",
    };
    if icon.is_empty() {
        value.to_string()
    } else {
        format!("{icon} {value}")
    }
}

fn software_list(record: &ObjectRecord) -> String {
    let items = record.list(SOFTWARE_FIELD);
    if items.is_empty() {
        return "   💾 Software: none recorded\n".into();
    }
    let mut out = format!("   💾 Software ({}):\n", items.len());
    for item in items.iter().take(MAX_SOFTWARE) {
        let _ = writeln!(out, "      • {}", software_name(item));
    }
    if items.len() > MAX_SOFTWARE {
        let _ = writeln!(out, "      ... and {} more", items.len() - MAX_SOFTWARE);
    }
    out
}

/// "name version" of one linked software instance.
fn software_name(item: &Value) -> String {
    let field = |key: &str| item.get(key).and_then(Value::as_str).filter(|s| !s.is_empty());
    let name = field("software_name")
        .or_else(|| field("name"))
        .or_else(|| field("friendlyname"))
        .unwrap_or("unknown");
    match field("version") {
        Some(version) => format!("{name} {version}"),
        None => name.to_string(),
    }
}
