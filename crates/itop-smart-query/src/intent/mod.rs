//! Intent extraction: what the user is asking for, beyond which class.
//!
//! Rules are checked most specific first and the first match decides the
//! intent kind: comparison, group-by, SLA analysis, count, then list. Filters
//! are collected independently of the kind; vocabulary the extractor does not
//! recognise is ignored.

pub mod comparison;
pub mod filters;
pub mod names;
pub mod time;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::filter::FilterClause;
use crate::taxonomy::{ClassDescriptor, ClassFamily, Taxonomy};
use crate::text::{QueryText, tokenize};

pub use comparison::Branch;
pub use names::{NameExtractor, NameReference};

const COUNT_WORDS: &[&str] = &["count", "how many", "number of", "total number"];

const SLA_WORDS: &[&str] = &["sla", "slas", "breach", "breached", "deadline", "on time", "overdue"];

const SOFTWARE_WORDS: &[&str] = &["software", "softwares", "application", "applications", "installed"];

const LIMIT_WORDS: &[&str] = &["top", "first", "limit", "latest", "last", "newest"];

const NEWEST_WORDS: &[&str] = &["latest", "newest", "recent", "most recent"];

const TIME_UNITS: &[&str] = &[
    "hour", "hours", "hrs", "h", "day", "days", "week", "weeks", "month", "months", "year", "years",
];

const TABLE_WORDS: &[&str] = &["table", "tabular"];
const SUMMARY_WORDS: &[&str] = &["summary", "overview", "breakdown", "stats", "statistics"];
const DETAIL_WORDS: &[&str] = &["detail", "details", "detailed"];

/// Words the extractor itself reacts to; never treated as names.
const INTENT_WORDS: &[&str] = &[
    "count", "how", "many", "number", "total", "breakdown", "grouped", "wise", "today",
    "yesterday", "week", "month", "year", "last", "past", "this", "days", "hours", "latest",
    "newest", "recent", "overview", "stats", "statistics", "tabular", "software", "softwares",
    "installed", "application", "applications", "closed", "time", "based", "breach", "breached",
    "met", "missed", "overdue", "late", "deadline", "updated", "versus", "compared", "running",
];

/// The kind of question being asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    List,
    Count,
    GroupBy,
    SlaAnalysis,
    Comparison,
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IntentKind::List => "list",
            IntentKind::Count => "count",
            IntentKind::GroupBy => "group_by",
            IntentKind::SlaAnalysis => "sla_analysis",
            IntentKind::Comparison => "comparison",
        })
    }
}

/// Rendering requested for the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    #[default]
    Detailed,
    Summary,
    Table,
}

impl FromStr for OutputMode {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detailed" | "detail" => Ok(OutputMode::Detailed),
            "summary" => Ok(OutputMode::Summary),
            "table" => Ok(OutputMode::Table),
            other => Err(QueryError::InvalidQuery(format!(
                "unknown output mode '{other}' (expected detailed, summary or table)"
            ))),
        }
    }
}

/// Field set an infrastructure query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Standard,
    /// Installed software rather than hardware attributes.
    Software,
}

/// Everything extracted from one query besides the class itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedIntent {
    pub class: String,
    pub kind: IntentKind,
    /// AND-ed filters; for comparisons, the part shared by both branches.
    pub filters: Vec<FilterClause>,
    pub group_by: Option<String>,
    pub limit: Option<u32>,
    pub mode: OutputMode,
    /// Exactly two for `Comparison`, empty otherwise.
    pub branches: Vec<Branch>,
    /// Proper nouns still to be resolved into filters.
    pub names: Vec<NameReference>,
    pub focus: Focus,
    pub newest_first: bool,
}

/// Every word the taxonomy gives a meaning to, lower-cased.
pub fn known_words(taxonomy: &Taxonomy) -> HashSet<String> {
    let mut words: HashSet<String> = INTENT_WORDS.iter().map(|w| w.to_string()).collect();
    for class in taxonomy.classes() {
        words.insert(class.name.to_lowercase());
        let phrases = class
            .triggers
            .iter()
            .chain(class.status_terms.iter().flat_map(|t| t.phrases.iter()))
            .chain(class.vocabulary.iter().flat_map(|t| t.phrases.iter()))
            .chain(class.aliases.iter().map(|a| &a.term));
        for phrase in phrases {
            words.extend(tokenize(phrase));
        }
    }
    words
}

/// Turns query text into a `ParsedIntent` for an already detected class.
pub struct IntentExtractor {
    known: HashSet<String>,
}

impl IntentExtractor {
    pub fn new(taxonomy: &Taxonomy) -> Self {
        Self {
            known: known_words(taxonomy),
        }
    }

    /// `mode` is the caller's explicit output mode; it beats any hint in the text.
    pub fn extract(
        &self,
        text: &QueryText,
        class: &ClassDescriptor,
        now: NaiveDateTime,
        mode: Option<OutputMode>,
    ) -> ParsedIntent {
        let branches = comparison::comparison(text, class).unwrap_or_default();
        let group_by = group_field(text, class);
        let sla = class.supports_sla() && text.contains_any(SLA_WORDS);

        let kind = if !branches.is_empty() {
            IntentKind::Comparison
        } else if group_by.is_some() {
            IntentKind::GroupBy
        } else if sla {
            IntentKind::SlaAnalysis
        } else if text.contains_any(COUNT_WORDS) {
            IntentKind::Count
        } else {
            IntentKind::List
        };

        let mut filters = Vec::new();
        if kind != IntentKind::Comparison {
            filters.extend(filters::status_filters(text, class));
            filters.extend(filters::sla_filter(text, class));
        }
        filters.extend(filters::vocabulary_filters(text, class));
        if let Some(field) = class.date_field.as_deref() {
            filters.extend(time::time_filters(text, field, now));
        }

        let focus = if class.family == ClassFamily::Infrastructure
            && text.contains_any(SOFTWARE_WORDS)
        {
            Focus::Software
        } else {
            Focus::Standard
        };

        let intent = ParsedIntent {
            class: class.name.clone(),
            kind,
            filters,
            group_by,
            limit: limit(text),
            mode: mode.unwrap_or_else(|| mode_hint(text, kind)),
            branches,
            names: NameExtractor::new(&self.known).extract(text, class),
            focus,
            newest_first: text.contains_any(NEWEST_WORDS),
        };
        tracing::debug!(
            class = %intent.class,
            kind = %intent.kind,
            filters = intent.filters.len(),
            names = intent.names.len(),
            group_by = ?intent.group_by,
            "intent extracted"
        );
        intent
    }
}

/// Field named by "by X", "per X", "grouped by X" or "X wise".
fn group_field(text: &QueryText, class: &ClassDescriptor) -> Option<String> {
    let tokens = text.tokens();
    for (i, token) in tokens.iter().enumerate() {
        match token.as_str() {
            "by" | "per" => {
                if let Some((alias, _)) = class.aliases.longest_at(text, i + 1) {
                    return Some(alias.field.clone());
                }
                // raw backend field names are accepted as-is
                if let Some(next) = text.token(i + 1) {
                    if next.contains('_') {
                        return Some(next.to_string());
                    }
                }
            }
            "wise" if i > 0 => {
                if let Some((alias, _)) = class.aliases.longest_ending_at(text, i) {
                    return Some(alias.field.clone());
                }
            }
            _ => {}
        }
    }
    None
}

/// "top 10", "first 5", "latest 20"; not "last 7 days".
fn limit(text: &QueryText) -> Option<u32> {
    let tokens = text.tokens();
    tokens.windows(2).enumerate().find_map(|(i, w)| {
        if !LIMIT_WORDS.contains(&w[0].as_str()) {
            return None;
        }
        let n: u32 = w[1].parse().ok()?;
        if text.token(i + 2).is_some_and(|unit| TIME_UNITS.contains(&unit)) {
            return None;
        }
        Some(n)
    })
}

fn mode_hint(text: &QueryText, kind: IntentKind) -> OutputMode {
    if text.contains_any(TABLE_WORDS) {
        OutputMode::Table
    } else if text.contains_any(SUMMARY_WORDS) {
        OutputMode::Summary
    } else if text.contains_any(DETAIL_WORDS) || kind == IntentKind::List {
        OutputMode::Detailed
    } else {
        OutputMode::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    fn extract(text: &str, class: &str) -> ParsedIntent {
        let tax = Taxonomy::standard();
        let extractor = IntentExtractor::new(&tax);
        extractor.extract(&QueryText::new(text), tax.get(class).unwrap(), now(), None)
    }

    fn oql(intent: &ParsedIntent) -> Vec<String> {
        intent.filters.iter().map(FilterClause::to_oql).collect()
    }

    #[test]
    fn production_servers_is_a_filtered_list() {
        let intent = extract("Show all production servers", "Server");
        assert_eq!(intent.kind, IntentKind::List);
        assert_eq!(oql(&intent), vec!["status = 'production'"]);
        assert_eq!(intent.mode, OutputMode::Detailed);
        assert!(intent.names.is_empty());
    }

    #[test]
    fn pc_count() {
        let intent = extract("PC count", "PC");
        assert_eq!(intent.kind, IntentKind::Count);
        assert!(intent.filters.is_empty());
        assert_eq!(intent.mode, OutputMode::Summary);
    }

    #[test]
    fn sla_comparison_wins_over_sla_analysis() {
        let intent = extract("Tickets closed vs not closed on time based on SLA", "UserRequest");
        assert_eq!(intent.kind, IntentKind::Comparison);
        assert_eq!(intent.branches.len(), 2);
        assert!(intent.filters.is_empty());
        assert_eq!(intent.mode, OutputMode::Summary);
    }

    #[test]
    fn sla_query_naming_two_teams_is_not_a_comparison() {
        let intent = extract("SLA requests for Service Desk vs Network team", "UserRequest");
        assert_eq!(intent.kind, IntentKind::SlaAnalysis);
        assert!(intent.branches.is_empty());
    }

    #[test]
    fn group_by_alias() {
        let intent = extract("User requests by team", "UserRequest");
        assert_eq!(intent.kind, IntentKind::GroupBy);
        assert_eq!(intent.group_by.as_deref(), Some("team_name"));

        let intent = extract("servers grouped by organization", "Server");
        assert_eq!(intent.group_by.as_deref(), Some("org_name"));

        let intent = extract("tickets status wise", "Ticket");
        assert_eq!(intent.group_by.as_deref(), Some("operational_status"));
    }

    #[test]
    fn group_by_before_count() {
        let intent = extract("count of incidents per priority", "Incident");
        assert_eq!(intent.kind, IntentKind::GroupBy);
        assert_eq!(intent.group_by.as_deref(), Some("priority"));
    }

    #[test]
    fn sla_analysis_only_where_supported() {
        let intent = extract("requests with SLA breach", "UserRequest");
        assert_eq!(intent.kind, IntentKind::SlaAnalysis);
        assert_eq!(oql(&intent), vec!["sla_ttr_passed = 'yes'"]);

        let intent = extract("how many problems breached", "Problem");
        assert_eq!(intent.kind, IntentKind::Count);
    }

    #[test]
    fn limit_and_time_window() {
        let intent = extract("top 10 critical incidents this week", "Incident");
        assert_eq!(intent.limit, Some(10));
        assert_eq!(
            oql(&intent),
            vec!["priority = '1'", "start_date >= '2024-03-08 14:30:00'"]
        );

        let intent = extract("requests from the last 7 days", "UserRequest");
        assert_eq!(intent.limit, None);
    }

    #[test]
    fn time_phrases_ignored_without_date_field() {
        let intent = extract("servers added this week", "Server");
        assert!(intent.filters.is_empty());
    }

    #[test]
    fn mode_hints_and_override() {
        assert_eq!(extract("servers as a table", "Server").mode, OutputMode::Table);
        assert_eq!(extract("PC overview", "PC").mode, OutputMode::Summary);
        let tax = Taxonomy::standard();
        let forced = IntentExtractor::new(&tax).extract(
            &QueryText::new("servers as a table"),
            tax.get("Server").unwrap(),
            now(),
            Some(OutputMode::Detailed),
        );
        assert_eq!(forced.mode, OutputMode::Detailed);
    }

    #[test]
    fn software_focus_for_infrastructure() {
        assert_eq!(
            extract("software installed on server web-01", "Server").focus,
            Focus::Software
        );
        assert_eq!(
            extract("software requests", "UserRequest").focus,
            Focus::Standard
        );
    }

    #[test]
    fn newest_first() {
        assert!(extract("latest 5 incidents", "Incident").newest_first);
        assert_eq!(extract("latest 5 incidents", "Incident").limit, Some(5));
        assert!(!extract("all incidents", "Incident").newest_first);
    }

    #[test]
    fn output_mode_parses() {
        assert_eq!("Table".parse::<OutputMode>().unwrap(), OutputMode::Table);
        assert_eq!("detail".parse::<OutputMode>().unwrap(), OutputMode::Detailed);
        assert!(matches!(
            "fancy".parse::<OutputMode>(),
            Err(QueryError::InvalidQuery(_))
        ));
    }

    #[test]
    fn known_words_cover_vocabulary() {
        let known = known_words(&Taxonomy::standard());
        for word in ["servers", "production", "windows", "organization", "network", "userrequest"] {
            assert!(known.contains(word), "{word}");
        }
        assert!(!known.contains("demo"));
    }
}
