//! Derived statistics over fetched records.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use itop_protocol::{ObjectRecord, RawResult};
use regex::Regex;
use serde::Serialize;

use crate::intent::time::DATE_FORMAT;
use crate::taxonomy::{ClassDescriptor, SlaProfile};

static REPORTED_TOTAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)found:\s*(\d+)|(\d+)\s+object\(s\)\s+found").unwrap()
});

pub const UNKNOWN: &str = "Unknown";

/// A ratio that may have nothing to divide by.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Rate {
    Percent(f64),
    NotApplicable,
}

impl Rate {
    pub fn of(numerator: usize, denominator: usize) -> Self {
        if denominator == 0 {
            Rate::NotApplicable
        } else {
            Rate::Percent(percent(numerator, denominator))
        }
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rate::Percent(p) => write!(f, "{p:.1}%"),
            Rate::NotApplicable => f.write_str("N/A"),
        }
    }
}

/// `part / whole` as a percentage rounded to one decimal place.
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 * 1000.0 / whole as f64).round() / 10.0
}

/// One row of a breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Count {
    pub value: String,
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlaStats {
    pub breached: usize,
    pub met: usize,
    /// Records with no SLA flag set.
    pub unknown: usize,
    pub breach_rate: Rate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionStats {
    pub on_time: usize,
    pub late: usize,
    /// `on_time / (on_time + late)`.
    pub rate: Rate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivitySplit {
    pub active: usize,
    pub inactive: usize,
}

/// Per-branch figures of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchStats {
    pub label: String,
    pub total: usize,
    pub returned: usize,
    pub truncated: bool,
    pub status: Vec<Count>,
}

/// Everything the formatter shows besides the records themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DerivedStats {
    pub total: usize,
    pub returned: usize,
    pub truncated: bool,
    pub status: Vec<Count>,
    pub groups: Vec<Count>,
    pub branches: Vec<BranchStats>,
    pub sla: Option<SlaStats>,
    pub completion: Option<CompletionStats>,
    pub criticality: Vec<Count>,
    pub software_instances: Option<usize>,
    pub activity: Option<ActivitySplit>,
}

/// Total the backend reports ("Found: 42", "42 object(s) found"), if any.
pub fn reported_total(message: Option<&str>) -> Option<usize> {
    let caps = REPORTED_TOTAL.captures(message?)?;
    caps.get(1).or_else(|| caps.get(2))?.as_str().parse().ok()
}

/// (total, returned, truncated) for one result.
pub fn totals(result: &RawResult) -> (usize, usize, bool) {
    let returned = result.len();
    let total = reported_total(result.message.as_deref())
        .unwrap_or(returned)
        .max(returned);
    (total, returned, total > returned)
}

/// Counts per value of `field`, most frequent first, ties alphabetical.
/// Missing values count as `Unknown`.
pub fn breakdown<'r, I>(records: I, field: &str) -> Vec<Count>
where
    I: IntoIterator<Item = &'r ObjectRecord>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut total = 0;
    for record in records {
        let value = record.text(field).unwrap_or_else(|| UNKNOWN.to_string());
        *counts.entry(value).or_default() += 1;
        total += 1;
    }
    let mut rows: Vec<Count> = counts
        .into_iter()
        .map(|(value, count)| Count {
            percent: percent(count, total),
            value,
            count,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    rows
}

/// Breached / met counts on a `yes`/`no` SLA flag (`yes` = breached).
pub fn sla_stats<'r, I>(records: I, flag_field: &str) -> SlaStats
where
    I: IntoIterator<Item = &'r ObjectRecord>,
{
    let (mut breached, mut met, mut unknown) = (0, 0, 0);
    for record in records {
        match record.text(flag_field).as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("yes" | "1" | "true") => breached += 1,
            Some("no" | "0" | "false") => met += 1,
            _ => unknown += 1,
        }
    }
    SlaStats {
        breached,
        met,
        unknown,
        breach_rate: Rate::of(breached, breached + met),
    }
}

fn parse_date(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATE_FORMAT).ok()
}

/// On-time completion over the class's completed records.
///
/// Returns `None` for classes without an SLA profile or completion statuses.
pub fn completion<'r, I>(records: I, class: &ClassDescriptor) -> Option<CompletionStats>
where
    I: IntoIterator<Item = &'r ObjectRecord>,
{
    let sla = class.sla.as_ref()?;
    let status_field = class.status_field.as_deref()?;
    if class.completed_statuses.is_empty() {
        return None;
    }

    let (mut on_time, mut late) = (0, 0);
    for record in records {
        let completed = record
            .text(status_field)
            .is_some_and(|s| class.completed_statuses.iter().any(|c| c == &s));
        if !completed {
            continue;
        }
        let verdict = match sla {
            SlaProfile::PassedFlags { ttr_field, .. } => {
                match record.text(ttr_field).as_deref() {
                    Some("no") => Some(true),
                    Some("yes") => Some(false),
                    _ => None,
                }
            }
            SlaProfile::Deadline {
                due_field,
                done_field,
            } => {
                let due = record.text(due_field).and_then(|d| parse_date(&d));
                let done = record.text(done_field).and_then(|d| parse_date(&d));
                match (done, due) {
                    (Some(done), Some(due)) => Some(done <= due),
                    _ => None,
                }
            }
        };
        match verdict {
            Some(true) => on_time += 1,
            Some(false) => late += 1,
            None => {}
        }
    }
    Some(CompletionStats {
        on_time,
        late,
        rate: Rate::of(on_time, on_time + late),
    })
}

/// Linked software entries across records.
pub fn software_instances<'r, I>(records: I, field: &str) -> usize
where
    I: IntoIterator<Item = &'r ObjectRecord>,
{
    records.into_iter().map(|r| r.list(field).len()).sum()
}

/// Active vs inactive records; `active` values are the ones listed.
pub fn activity<'r, I>(records: I, status_field: &str, active_values: &[&str]) -> ActivitySplit
where
    I: IntoIterator<Item = &'r ObjectRecord>,
{
    let mut split = ActivitySplit {
        active: 0,
        inactive: 0,
    };
    for record in records {
        let active = record
            .text(status_field)
            .is_some_and(|s| active_values.iter().any(|v| v.eq_ignore_ascii_case(&s)));
        if active {
            split.active += 1;
        } else {
            split.inactive += 1;
        }
    }
    split
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::Taxonomy;
    use serde_json::json;

    fn record(fields: &[(&str, &str)]) -> ObjectRecord {
        ObjectRecord::new(
            "UserRequest",
            fields.iter().map(|(k, v)| (k.to_string(), json!(v))),
        )
    }

    #[test]
    fn reported_total_formats() {
        assert_eq!(reported_total(Some("Found: 42")), Some(42));
        assert_eq!(reported_total(Some("7 object(s) found")), Some(7));
        assert_eq!(reported_total(Some("Everything went fine")), None);
        assert_eq!(reported_total(None), None);
    }

    #[test]
    fn truncation_from_reported_total() {
        let mut result = RawResult::with_objects(vec![("1".into(), record(&[]))]);
        result.message = Some("Found: 3".into());
        assert_eq!(totals(&result), (3, 1, true));
        let result = RawResult::with_objects(vec![("1".into(), record(&[]))]);
        assert_eq!(totals(&result), (1, 1, false));
    }

    #[test]
    fn breakdown_sorted_by_count_then_name() {
        let records = vec![
            record(&[("status", "new")]),
            record(&[("status", "closed")]),
            record(&[("status", "assigned")]),
            record(&[("status", "closed")]),
            record(&[]),
        ];
        let rows = breakdown(&records, "status");
        let values: Vec<(&str, usize)> = rows.iter().map(|c| (c.value.as_str(), c.count)).collect();
        assert_eq!(
            values,
            vec![("closed", 2), ("Unknown", 1), ("assigned", 1), ("new", 1)]
        );
        assert_eq!(rows[0].percent, 40.0);
    }

    #[test]
    fn group_percentages_sum_to_hundred() {
        let records: Vec<ObjectRecord> = ["a", "b", "c", "a", "b", "a", "c"]
            .iter()
            .map(|v| record(&[("team_name", v)]))
            .collect();
        let rows = breakdown(&records, "team_name");
        let sum: f64 = rows.iter().map(|c| c.percent).sum();
        assert!((sum - 100.0).abs() <= 0.1 * rows.len() as f64, "sum {sum}");
    }

    #[test]
    fn sla_breach_rate() {
        let records = vec![
            record(&[("sla_ttr_passed", "yes")]),
            record(&[("sla_ttr_passed", "no")]),
            record(&[("sla_ttr_passed", "no")]),
            record(&[("sla_ttr_passed", "no")]),
            record(&[]),
        ];
        let stats = sla_stats(&records, "sla_ttr_passed");
        assert_eq!((stats.breached, stats.met, stats.unknown), (1, 3, 1));
        assert_eq!(stats.breach_rate, Rate::Percent(25.0));
    }

    #[test]
    fn on_time_rate_from_flags() {
        let tax = Taxonomy::standard();
        let ur = tax.get("UserRequest").unwrap();
        let records = vec![
            record(&[("status", "closed"), ("sla_ttr_passed", "no")]),
            record(&[("status", "resolved"), ("sla_ttr_passed", "no")]),
            record(&[("status", "closed"), ("sla_ttr_passed", "yes")]),
            // open tickets do not count
            record(&[("status", "assigned"), ("sla_ttr_passed", "yes")]),
        ];
        let stats = completion(&records, ur).unwrap();
        assert_eq!((stats.on_time, stats.late), (2, 1));
        assert_eq!(stats.rate, Rate::Percent(66.7));
    }

    #[test]
    fn on_time_rate_from_deadlines() {
        let tax = Taxonomy::standard();
        let change = tax.get("Change").unwrap();
        let records = vec![
            record(&[
                ("status", "closed"),
                ("end_date", "2024-03-10 18:00:00"),
                ("close_date", "2024-03-10 17:00:00"),
            ]),
            record(&[
                ("status", "implemented"),
                ("end_date", "2024-03-10 18:00:00"),
                ("close_date", "2024-03-12 09:00:00"),
            ]),
            record(&[("status", "closed")]),
        ];
        let stats = completion(&records, change).unwrap();
        assert_eq!((stats.on_time, stats.late), (1, 1));
        assert_eq!(stats.rate.to_string(), "50.0%");
    }

    #[test]
    fn on_time_rate_without_completions_is_na() {
        let tax = Taxonomy::standard();
        let ur = tax.get("UserRequest").unwrap();
        let records = vec![record(&[("status", "new")])];
        let stats = completion(&records, ur).unwrap();
        assert_eq!(stats.rate, Rate::NotApplicable);
        assert_eq!(stats.rate.to_string(), "N/A");
        assert!(completion(&records, tax.get("Problem").unwrap()).is_none());
    }

    #[test]
    fn software_and_activity() {
        let with_software = ObjectRecord::new(
            "Server",
            vec![(
                "softwares_list",
                json!([{"software_name": "nginx"}, {"software_name": "postgres"}]),
            )],
        );
        assert_eq!(software_instances([&with_software, &record(&[])], "softwares_list"), 2);

        let people = vec![
            record(&[("status", "active")]),
            record(&[("status", "inactive")]),
            record(&[("status", "Active")]),
        ];
        assert_eq!(
            activity(&people, "status", &["active"]),
            ActivitySplit {
                active: 2,
                inactive: 1
            }
        );
    }
}
