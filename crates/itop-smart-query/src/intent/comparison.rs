//! Two-branch comparisons: "closed vs not closed", "met SLA versus breached".

use crate::filter::FilterClause;
use crate::taxonomy::{ClassDescriptor, SlaProfile, StatusTerm};
use crate::text::{QueryText, tokenize};

use super::filters::status_condition;

const CONNECTORS: &[&str] = &["vs", "versus", "v/s", "compared to", "compared with"];

const NEGATIVE_WORDS: &[&str] = &[
    "not", "non", "late", "missed", "breached", "breach", "overdue", "unresolved",
];

const SLA_WORDS: &[&str] = &[
    "sla", "on time", "deadline", "breach", "breached", "overdue", "late", "missed",
];

/// Words that make one side of an SLA comparison on their own.
const SLA_SIDE_WORDS: &[&str] = &["on time", "late", "met", "missed", "breached", "overdue"];

/// One side of a comparison, queried separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub label: String,
    pub filters: Vec<FilterClause>,
}

struct Side<'c> {
    term: Option<(&'c StatusTerm, String)>,
    negative: bool,
}

/// Split point: (end of left side, start of right side).
fn split(text: &QueryText) -> Option<(usize, usize)> {
    let by_connector = CONNECTORS
        .iter()
        .filter_map(|c| text.find(c).map(|i| (i, i + tokenize(c).len())))
        .min_by_key(|(i, _)| *i);
    // "closed and not closed": the right side keeps its "not"
    let by_and_not = text.find("and not").map(|i| (i, i + 1));
    match (by_connector, by_and_not) {
        (Some(a), Some(b)) => Some(if a.0 <= b.0 { a } else { b }),
        (a, b) => a.or(b),
    }
}

fn side<'c>(
    text: &QueryText,
    class: &'c ClassDescriptor,
    range: std::ops::Range<usize>,
    nearest_last: bool,
) -> Side<'c> {
    let tokens = &text.tokens()[range.clone()];
    let negative = tokens.iter().any(|t| NEGATIVE_WORDS.contains(&t.as_str()));

    let mut hits: Vec<(usize, &'c StatusTerm, String)> = Vec::new();
    for term in &class.status_terms {
        for phrase in &term.phrases {
            for i in text.find_all(phrase) {
                if range.contains(&i) {
                    hits.push((i, term, phrase.clone()));
                }
            }
        }
    }
    let chosen = if nearest_last {
        hits.into_iter().max_by_key(|(i, _, _)| *i)
    } else {
        hits.into_iter().min_by_key(|(i, _, _)| *i)
    };
    Side {
        term: chosen.map(|(_, term, phrase)| (term, phrase)),
        negative,
    }
}

fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Parse a comparison into two branches, in the order they were written.
///
/// Returns `None` when there is no connector or neither side names
/// something comparable.
pub fn comparison(text: &QueryText, class: &ClassDescriptor) -> Option<Vec<Branch>> {
    let (left_end, right_start) = split(text)?;
    let total = text.tokens().len();
    if left_end == 0 || right_start >= total {
        return None;
    }
    let left = side(text, class, 0..left_end, true);
    let right = side(text, class, right_start..total, false);

    let (left_neg, right_neg) = if left.negative == right.negative {
        (false, true)
    } else {
        (left.negative, right.negative)
    };

    if let Some(SlaProfile::PassedFlags { ttr_field, .. }) = &class.sla {
        let has_side = left.term.is_some()
            || right.term.is_some()
            || text.contains_any(SLA_SIDE_WORDS);
        if has_side && text.contains_any(SLA_WORDS) {
            let closed = class.status_terms.iter().any(|t| t.phrases.iter().any(|p| p == "closed"));
            return Some(vec![
                sla_branch(class, ttr_field, closed, left_neg),
                sla_branch(class, ttr_field, closed, right_neg),
            ]);
        }
    }

    let field = class.status_field.as_deref()?;
    let (left_term, right_term) = match (left.term, right.term) {
        (None, None) => return None,
        (Some(l), None) => (l.clone(), l),
        (None, Some(r)) => (r.clone(), r),
        (Some(l), Some(r)) => (l, r),
    };

    // different terms compare as written ("open vs closed")
    let (left_neg, right_neg) = if left_term.1 != right_term.1 && !left.negative && !right.negative {
        (false, false)
    } else {
        (left_neg, right_neg)
    };

    Some(vec![
        status_branch(field, &left_term, left_neg),
        status_branch(field, &right_term, right_neg),
    ])
}

fn status_branch(field: &str, (term, phrase): &(&StatusTerm, String), negative: bool) -> Branch {
    let label = if negative {
        format!("Not {phrase}")
    } else {
        capitalise(phrase)
    };
    Branch {
        filters: vec![FilterClause::new(field, status_condition(term, negative)).with_label(label.clone())],
        label,
    }
}

fn sla_branch(class: &ClassDescriptor, ttr_field: &str, closed: bool, negative: bool) -> Branch {
    let mut filters = Vec::new();
    let label = match (closed, negative) {
        (true, false) => "Closed on time",
        (true, true) => "Not closed on time",
        (false, false) => "Met SLA",
        (false, true) => "Breached SLA",
    };
    if closed && !negative {
        if let Some(field) = class.status_field.as_deref() {
            filters.push(FilterClause::eq(field, "closed").with_label("closed"));
        }
    }
    let flag = if negative { "yes" } else { "no" };
    filters.push(FilterClause::eq(ttr_field, flag).with_label(label));
    Branch {
        label: label.to_string(),
        filters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::Taxonomy;

    fn branches(text: &str, class: &str) -> Option<Vec<(String, Vec<String>)>> {
        let tax = Taxonomy::standard();
        comparison(&QueryText::new(text), tax.get(class).unwrap()).map(|bs| {
            bs.into_iter()
                .map(|b| (b.label, b.filters.iter().map(FilterClause::to_oql).collect()))
                .collect()
        })
    }

    #[test]
    fn sla_comparison_keys_on_sla_flag() {
        let bs = branches("Tickets closed vs not closed on time based on SLA", "UserRequest").unwrap();
        assert_eq!(bs.len(), 2);
        assert_eq!(bs[0].0, "Closed on time");
        assert_eq!(bs[0].1, vec!["status = 'closed'", "sla_ttr_passed = 'no'"]);
        assert_eq!(bs[1].0, "Not closed on time");
        assert_eq!(bs[1].1, vec!["sla_ttr_passed = 'yes'"]);
    }

    #[test]
    fn status_comparison() {
        let bs = branches("tickets closed vs not closed", "Ticket").unwrap();
        assert_eq!(bs[0], ("Closed".into(), vec!["operational_status = 'closed'".into()]));
        assert_eq!(bs[1], ("Not closed".into(), vec!["operational_status != 'closed'".into()]));
    }

    #[test]
    fn comparison_is_commutative() {
        let a = branches("problems closed vs not closed", "Problem").unwrap();
        let mut b = branches("problems not closed vs closed", "Problem").unwrap();
        b.reverse();
        assert_eq!(a, b);
    }

    #[test]
    fn completed_vs_not_completed_changes() {
        let bs = branches("changes completed versus not completed", "Change").unwrap();
        assert_eq!(bs[0].1, vec!["status IN ('implemented', 'closed')"]);
        assert_eq!(bs[1].1, vec!["status NOT IN ('implemented', 'closed')"]);
    }

    #[test]
    fn and_not_connector() {
        let bs = branches("incidents resolved and not resolved", "Incident").unwrap();
        assert_eq!(bs[0].0, "Resolved");
        assert_eq!(bs[1].0, "Not resolved");
    }

    #[test]
    fn different_terms_compare_as_written() {
        let bs = branches("servers production vs obsolete", "Server").unwrap();
        assert_eq!(bs[0].1, vec!["status = 'production'"]);
        assert_eq!(bs[1].1, vec!["status = 'obsolete'"]);
    }

    #[test]
    fn sla_words_alone_do_not_make_a_comparison() {
        assert!(branches("SLA requests for Service Desk vs Network team", "UserRequest").is_none());
        let bs = branches("requests met SLA versus breached", "UserRequest").unwrap();
        assert_eq!(bs[0].0, "Closed on time");
        assert_eq!(bs[1].0, "Not closed on time");
    }

    #[test]
    fn no_connector_or_terms() {
        assert!(branches("closed tickets", "Ticket").is_none());
        assert!(branches("apples vs oranges", "Server").is_none());
    }
}
