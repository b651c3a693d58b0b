//! Report rendering: header, statistics blocks and the record body in the
//! requested output mode.

pub mod detailed;
pub mod summary;
pub mod table;

use std::fmt::Write;

use serde::Serialize;

use crate::handlers::Fetched;
use crate::intent::{IntentKind, OutputMode, ParsedIntent};
use crate::stats::{Count, DerivedStats};
use crate::taxonomy::ClassDescriptor;

/// Final text plus what was applied to produce it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedReport {
    pub text: String,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMetadata {
    pub class: String,
    pub intent: IntentKind,
    pub mode: OutputMode,
    pub applied_filters: Vec<String>,
    pub oql: Vec<String>,
    pub total: usize,
    pub returned: usize,
    pub truncated: bool,
}

/// Everything one report is rendered from.
pub struct ReportInput<'a> {
    pub query: &'a str,
    pub class: &'a ClassDescriptor,
    pub intent: &'a ParsedIntent,
    pub fetched: &'a [Fetched],
    pub stats: &'a DerivedStats,
}

pub fn render(input: &ReportInput<'_>) -> FormattedReport {
    let ReportInput {
        class,
        intent,
        stats,
        ..
    } = *input;

    let filters = applied_filters(intent);
    let mut out = header(input, &filters);

    if intent.kind == IntentKind::Count {
        out.push('\n');
        let _ = write!(out, "**Total {}**: {}", class.plural, stats.total);
    } else {
        let _ = writeln!(out, "**Total Found**: {}", stats.total);
        let _ = writeln!(out, "**Returned**: {}", stats.returned);
        out.push('\n');

        if stats.total == 0 {
            no_results(class, &echoed_filters(intent, &filters), &mut out);
        } else if intent.kind == IntentKind::Comparison {
            out.push_str(&comparison(stats));
            out.push_str(&summary::sla_block(stats));
        } else {
            if truncated_note(stats, &mut out) {
                out.push('\n');
            }
            if intent.kind == IntentKind::GroupBy {
                let field = intent.group_by.as_deref().unwrap_or_default();
                out.push_str(&grouped(class, field, &stats.groups));
            }
            let records: Vec<_> = input.fetched.iter().flat_map(|f| f.records()).collect();
            match intent.mode {
                OutputMode::Table => out.push_str(&table::render(class, &records)),
                OutputMode::Summary => out.push_str(&summary::render(class, stats)),
                OutputMode::Detailed => {
                    if intent.kind == IntentKind::SlaAnalysis {
                        out.push_str(&summary::sla_block(stats));
                    }
                    out.push_str(&detailed::render(class, intent.focus, &records));
                }
            }
        }
    }

    FormattedReport {
        text: out.trim_end().to_string(),
        metadata: ReportMetadata {
            class: class.name.clone(),
            intent: intent.kind,
            mode: intent.mode,
            applied_filters: filters,
            oql: input.fetched.iter().map(|f| f.descriptor.oql()).collect(),
            total: stats.total,
            returned: stats.returned,
            truncated: stats.truncated,
        },
    }
}

fn applied_filters(intent: &ParsedIntent) -> Vec<String> {
    intent.filters.iter().map(|f| f.label.clone()).collect()
}

/// Filters to echo on an empty result; comparisons lead with their branches.
fn echoed_filters(intent: &ParsedIntent, filters: &[String]) -> Vec<String> {
    let mut echoed = Vec::with_capacity(filters.len() + 1);
    if !intent.branches.is_empty() {
        let sides: Vec<&str> = intent.branches.iter().map(|b| b.label.as_str()).collect();
        echoed.push(sides.join(" vs "));
    }
    echoed.extend(filters.iter().cloned());
    echoed
}

fn no_results(class: &ClassDescriptor, filters: &[String], out: &mut String) {
    let _ = write!(out, "No {} found matching your criteria.", class.plural);
    if !filters.is_empty() {
        let _ = write!(
            out,
            "\n\nFilters used: {}. Try removing a filter or widening the time range.",
            filters.join(", ")
        );
    }
}

fn header(input: &ReportInput<'_>, filters: &[String]) -> String {
    let class = input.class;
    let mut out = format!("**{} {} Query Results**\n\n", class.icon, class.name);
    let _ = writeln!(out, "**Query**: \"{}\"", input.query);
    for f in input.fetched {
        match &f.descriptor.label {
            Some(label) => {
                let _ = writeln!(out, "**OQL Used** ({label}): `{}`", f.descriptor.oql());
            }
            None => {
                let _ = writeln!(out, "**OQL Used**: `{}`", f.descriptor.oql());
            }
        }
    }
    if !filters.is_empty() {
        let _ = writeln!(out, "**Filters Applied**: {}", filters.join(", "));
    }
    out
}

/// Appends the truncation note; returns whether one was written.
fn truncated_note(stats: &DerivedStats, out: &mut String) -> bool {
    if !stats.truncated {
        return false;
    }
    let _ = writeln!(
        out,
        "⚠️ Showing {} of {} results. Add filters or a limit to narrow the query.",
        stats.returned, stats.total
    );
    true
}

fn grouped(class: &ClassDescriptor, field: &str, groups: &[Count]) -> String {
    let mut out = format!("### {} by {}\n", class.plural, field_label(class, field));
    for group in groups {
        let _ = writeln!(
            out,
            "• **{}**: {} ({:.1}%)",
            group.value, group.count, group.percent
        );
    }
    out.push('\n');
    out
}

fn comparison(stats: &DerivedStats) -> String {
    let mut out = String::from("### Comparison\n");
    let combined: usize = stats.branches.iter().map(|b| b.total).sum();
    for branch in &stats.branches {
        let share = crate::stats::percent(branch.total, combined);
        let _ = writeln!(out, "• **{}**: {} ({share:.1}%)", branch.label, branch.total);
        if branch.truncated {
            let _ = writeln!(out, "  (showing {} of {})", branch.returned, branch.total);
        }
    }
    out.push('\n');
    out
}

/// Display name of a field: table header, else detail label, else the field.
pub fn field_label<'c>(class: &'c ClassDescriptor, field: &'c str) -> &'c str {
    class
        .columns
        .iter()
        .find(|c| c.field == field)
        .map(|c| c.header.as_str())
        .or_else(|| class.detail.iter().find(|d| d.field == field).map(|d| d.label.as_str()))
        .unwrap_or(field)
}

/// Priority code → colour marker.
pub fn priority_icon(value: &str) -> &'static str {
    match value {
        "1" => "🔴",
        "2" => "🟡",
        "3" => "🟢",
        "4" => "⚪",
        _ => "",
    }
}

/// Business criticality → colour marker.
pub fn criticality_icon(value: &str) -> &'static str {
    match value.to_ascii_lowercase().as_str() {
        "critical" => "🔴",
        "high" => "🟡",
        "medium" => "🟢",
        "low" => "⚪",
        _ => "",
    }
}
