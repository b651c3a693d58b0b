//! Statistics-only rendering.

use std::fmt::Write;

use crate::stats::{Count, DerivedStats};
use crate::taxonomy::ClassDescriptor;

use super::criticality_icon;

pub fn render(class: &ClassDescriptor, stats: &DerivedStats) -> String {
    let mut out = String::new();

    // A grouped query already shows its own breakdown.
    if stats.groups.is_empty() && !stats.status.is_empty() {
        out.push_str("**Status Breakdown**:\n");
        breakdown(&mut out, &stats.status, |_| "");
        out.push('\n');
    }

    if !stats.criticality.is_empty() {
        out.push_str("**Business Criticality**:\n");
        breakdown(&mut out, &stats.criticality, criticality_icon);
        out.push('\n');
    }

    if let Some(activity) = &stats.activity {
        let _ = writeln!(
            out,
            "**Active**: {} | **Inactive**: {}\n",
            activity.active, activity.inactive
        );
    }

    if let Some(instances) = stats.software_instances {
        let _ = writeln!(
            out,
            "**Software Instances**: {instances} across {} {}\n",
            stats.returned, class.plural
        );
    }

    out.push_str(&sla_block(stats));
    out
}

/// SLA breach rate and on-time completion, when either was computed.
pub fn sla_block(stats: &DerivedStats) -> String {
    let mut out = String::new();
    if let Some(sla) = &stats.sla {
        let _ = writeln!(
            out,
            "**SLA breach rate**: {} ({} breached, {} met, {} unknown)",
            sla.breach_rate, sla.breached, sla.met, sla.unknown
        );
    }
    if let Some(completion) = &stats.completion {
        let _ = writeln!(
            out,
            "**On-time completion**: {} ({} on time, {} late)",
            completion.rate, completion.on_time, completion.late
        );
    }
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

fn breakdown(out: &mut String, counts: &[Count], icon: fn(&str) -> &'static str) {
    for c in counts {
        let marker = icon(&c.value);
        let prefix = if marker.is_empty() {
            String::new()
        } else {
            format!("{marker} ")
        };
        let _ = writeln!(out, "• {prefix}{}: {} ({:.1}%)", c.value, c.count, c.percent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{ActivitySplit, CompletionStats, Rate, SlaStats};
    use crate::taxonomy::Taxonomy;

    fn count(value: &str, count: usize, percent: f64) -> Count {
        Count {
            value: value.into(),
            count,
            percent,
        }
    }

    #[test]
    fn status_and_criticality_breakdowns() {
        let tax = Taxonomy::standard();
        let stats = DerivedStats {
            total: 3,
            returned: 3,
            status: vec![count("production", 2, 66.7), count("stock", 1, 33.3)],
            criticality: vec![count("high", 3, 100.0)],
            ..DerivedStats::default()
        };
        let text = render(tax.get("Server").unwrap(), &stats);
        assert!(text.contains("**Status Breakdown**:\n• production: 2 (66.7%)\n• stock: 1 (33.3%)"));
        assert!(text.contains("• 🟡 high: 3 (100.0%)"));
    }

    #[test]
    fn grouped_stats_skip_status() {
        let tax = Taxonomy::standard();
        let stats = DerivedStats {
            status: vec![count("new", 1, 100.0)],
            groups: vec![count("Network", 1, 100.0)],
            ..DerivedStats::default()
        };
        assert!(!render(tax.get("UserRequest").unwrap(), &stats).contains("Status Breakdown"));
    }

    #[test]
    fn activity_and_software() {
        let tax = Taxonomy::standard();
        let stats = DerivedStats {
            returned: 2,
            activity: Some(ActivitySplit {
                active: 2,
                inactive: 1,
            }),
            software_instances: Some(7),
            ..DerivedStats::default()
        };
        let text = render(tax.get("Server").unwrap(), &stats);
        assert!(text.contains("**Active**: 2 | **Inactive**: 1"));
        assert!(text.contains("**Software Instances**: 7 across 2 Servers"));
    }

    #[test]
    fn sla_block_rates() {
        let stats = DerivedStats {
            sla: Some(SlaStats {
                breached: 1,
                met: 3,
                unknown: 0,
                breach_rate: Rate::of(1, 4),
            }),
            completion: Some(CompletionStats {
                on_time: 0,
                late: 0,
                rate: Rate::of(0, 0),
            }),
            ..DerivedStats::default()
        };
        let text = sla_block(&stats);
        assert!(text.contains("**SLA breach rate**: 25.0% (1 breached, 3 met, 0 unknown)"));
        assert!(text.contains("**On-time completion**: N/A (0 on time, 0 late)"));
    }

    #[test]
    fn sla_block_empty_without_sla() {
        assert!(sla_block(&DerivedStats::default()).is_empty());
    }
}
