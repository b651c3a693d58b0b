//! Relative time phrases → absolute date filters.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::filter::{Condition, FilterClause};
use crate::text::QueryText;

/// Backend datetime format.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const LAST_UPDATE_FIELD: &str = "last_update";

fn stamp(t: NaiveDateTime) -> String {
    t.format(DATE_FORMAT).to_string()
}

fn midnight(d: NaiveDate) -> NaiveDateTime {
    d.and_time(NaiveTime::MIN)
}

fn first_of_month(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

fn since(field: &str, t: NaiveDateTime, label: &str) -> FilterClause {
    FilterClause::new(field, Condition::Ge(stamp(t))).with_label(label)
}

fn before(field: &str, t: NaiveDateTime, label: &str) -> FilterClause {
    FilterClause::new(field, Condition::Lt(stamp(t))).with_label(label)
}

/// `<qualifier> N <unit>` where unit is hours or days, e.g. "last 15 days".
fn amount_after(text: &QueryText, qualifiers: &[&str]) -> Option<Duration> {
    let tokens = text.tokens();
    tokens.windows(3).find_map(|w| {
        if !qualifiers.contains(&w[0].as_str()) {
            return None;
        }
        let n: i64 = w[1].parse().ok()?;
        match w[2].as_str() {
            "hour" | "hours" | "hrs" | "h" => Some(Duration::hours(n)),
            "day" | "days" => Some(Duration::days(n)),
            "week" | "weeks" => Some(Duration::weeks(n)),
            _ => None,
        }
    })
}

/// Translate the first relative time phrase in `text` into filters on
/// `field`, relative to `now`. Returns an empty list when none is present.
pub fn time_filters(text: &QueryText, field: &str, now: NaiveDateTime) -> Vec<FilterClause> {
    let today = midnight(now.date());

    // "not updated in 24 hours", "not updated in the last 3 days"
    if text.contains("not updated") {
        if let Some(age) = amount_after(text, &["in", "for", "last", "past"]) {
            let cutoff = now - age;
            return vec![
                FilterClause::new(LAST_UPDATE_FIELD, Condition::Le(stamp(cutoff)))
                    .with_label(format!("not updated since {}", stamp(cutoff))),
            ];
        }
    }

    if let Some(span) = amount_after(text, &["last", "past", "previous"]) {
        let start = now - span;
        return vec![since(field, start, &format!("since {}", stamp(start)))];
    }

    if text.contains("today") {
        return vec![since(field, today, "today")];
    }
    if text.contains("yesterday") {
        let start = today - Duration::days(1);
        return vec![
            since(field, start, "yesterday"),
            before(field, today, "yesterday"),
        ];
    }
    if text.contains_any(&["this week", "past week", "last week"]) {
        return vec![since(field, now - Duration::days(7), "past 7 days")];
    }
    if text.contains("this month") {
        return vec![since(field, midnight(first_of_month(now.date())), "this month")];
    }
    if text.contains("last month") {
        let this_month = first_of_month(now.date());
        let prev_month = first_of_month(this_month - Duration::days(1));
        return vec![
            since(field, midnight(prev_month), "last month"),
            before(field, midnight(this_month), "last month"),
        ];
    }
    if text.contains("this year") {
        let jan1 = now.date().with_ordinal(1).unwrap_or(now.date());
        return vec![since(field, midnight(jan1), "this year")];
    }

    Vec::new()
}
