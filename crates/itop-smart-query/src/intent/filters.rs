//! Vocabulary-driven filter extraction: status words, value words, SLA words.

use std::collections::BTreeMap;

use crate::filter::{Condition, FilterClause};
use crate::taxonomy::{ClassDescriptor, ClassFamily, SlaProfile, StatusTerm, VocabMatch};
use crate::text::{QueryText, tokenize};

const NEGATIONS: &[&str] = &["not", "non", "un"];

/// Words after which a status word describes the records ("tickets that are closed").
const STATUS_LEADS: &[&str] = &["status", "is", "are", "being", "as", "in"];

/// Generic nouns a ticket status word may sit next to.
const TICKET_NOUNS: &[&str] = &[
    "ticket", "tickets", "request", "requests", "incident", "incidents", "problem", "problems",
    "change", "changes", "ones", "items",
];

pub const SLA_BREACH_WORDS: &[&str] = &[
    "sla breach",
    "sla breaches",
    "sla breached",
    "breached sla",
    "breaching sla",
    "missed sla",
    "sla missed",
    "breached",
    "overdue",
    "late",
];

pub const SLA_MET_WORDS: &[&str] = &[
    "sla met",
    "met sla",
    "within sla",
    "meeting sla",
    "on time",
];

fn negated(text: &QueryText, index: usize) -> bool {
    index > 0
        && text
            .token(index - 1)
            .is_some_and(|t| NEGATIONS.contains(&t))
}

/// Whether the status phrase at `index..index+len` is anchored to the records.
fn anchored(text: &QueryText, class: &ClassDescriptor, index: usize, len: usize) -> bool {
    if class.family != ClassFamily::Ticket {
        return true;
    }
    let is_noun = |t: &str| {
        TICKET_NOUNS.contains(&t) || class.triggers.iter().any(|trigger| trigger == t)
    };
    let after = text.token(index + len).is_some_and(is_noun);
    let lead = if negated(text, index) { index.saturating_sub(1) } else { index };
    let before = lead > 0
        && text
            .token(lead - 1)
            .is_some_and(|t| is_noun(t) || STATUS_LEADS.contains(&t));
    after || before
}

/// Occurrences of `term` in `text`: (token index, negated).
pub fn status_hits(
    text: &QueryText,
    class: &ClassDescriptor,
    term: &StatusTerm,
) -> Vec<(usize, bool)> {
    let mut hits = Vec::new();
    for phrase in &term.phrases {
        let len = tokenize(phrase).len();
        for index in text.find_all(phrase) {
            if anchored(text, class, index, len) {
                hits.push((index, negated(text, index)));
            }
        }
    }
    hits.sort_unstable();
    hits
}

/// Condition on the status field for `term`, negated when asked.
pub fn status_condition(term: &StatusTerm, negate: bool) -> Condition {
    let positive = Condition::one_of(term.values.clone());
    if negate {
        positive.negate().unwrap_or(positive)
    } else {
        positive
    }
}

/// Status filters from the class's status vocabulary.
///
/// Every affirmed status contributes its values to one `=`/`IN` clause;
/// negated ones are collected into a separate `!=`/`NOT IN` clause.
pub fn status_filters(text: &QueryText, class: &ClassDescriptor) -> Vec<FilterClause> {
    let Some(field) = class.status_field.as_deref() else {
        return Vec::new();
    };

    let mut affirmed = Vec::new();
    let mut denied = Vec::new();
    let mut words = Vec::new();
    for term in &class.status_terms {
        let hits = status_hits(text, class, term);
        if hits.iter().any(|(_, neg)| !neg) {
            affirmed.extend(term.values.iter().cloned());
            words.push(term.phrases[0].clone());
        }
        if hits.iter().any(|(_, neg)| *neg) {
            denied.extend(term.values.iter().cloned());
            words.push(format!("not {}", term.phrases[0]));
        }
    }

    let mut filters = Vec::new();
    if !affirmed.is_empty() {
        filters.push(FilterClause::new(field, Condition::one_of(affirmed)));
    }
    if !denied.is_empty() {
        let condition = match Condition::one_of(denied) {
            Condition::Eq(v) => Condition::Ne(v),
            Condition::In(vs) => Condition::NotIn(vs),
            other => other,
        };
        filters.push(FilterClause::new(field, condition));
    }
    if !filters.is_empty() {
        tracing::debug!(field, statuses = %words.join(", "), "status filter extracted");
    }
    filters
}

/// Filters implied by value words (priority, criticality, type, OS...).
///
/// Values for the same field merge into a single clause.
pub fn vocabulary_filters(text: &QueryText, class: &ClassDescriptor) -> Vec<FilterClause> {
    let mut exact: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    let mut partial: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    let mut order: Vec<&str> = Vec::new();

    for term in &class.vocabulary {
        if !term.phrases.iter().any(|p| text.contains(p)) {
            continue;
        }
        let bucket = match term.matching {
            VocabMatch::Exact => &mut exact,
            VocabMatch::Contains => &mut partial,
        };
        bucket
            .entry(term.field.as_str())
            .or_default()
            .push(term.value.clone());
        if !order.contains(&term.field.as_str()) {
            order.push(term.field.as_str());
        }
    }

    let mut filters = Vec::new();
    for field in order {
        if let Some(values) = exact.remove(field) {
            filters.push(FilterClause::new(field, Condition::one_of(values)));
        }
        if let Some(values) = partial.remove(field) {
            let condition = if values.len() == 1 {
                Condition::Like(values[0].clone())
            } else {
                Condition::LikeAny(values)
            };
            filters.push(FilterClause::new(field, condition));
        }
    }
    filters
}

/// Breach / met filter on the SLA flag, for classes that carry one.
pub fn sla_filter(text: &QueryText, class: &ClassDescriptor) -> Option<FilterClause> {
    let Some(SlaProfile::PassedFlags { ttr_field, .. }) = &class.sla else {
        return None;
    };
    if text.contains_any(SLA_BREACH_WORDS) || text.contains("not on time") {
        return Some(FilterClause::eq(ttr_field.as_str(), "yes").with_label("SLA breached"));
    }
    if text.contains_any(SLA_MET_WORDS) {
        return Some(FilterClause::eq(ttr_field.as_str(), "no").with_label("SLA met"));
    }
    None
}
