//! Field aliases and filter vocabulary: user words mapped onto backend fields.

use crate::text::{QueryText, tokenize};

/// Where candidate names for a field come from (class + attribute to list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameLookup {
    pub class: String,
    pub field: String,
}

/// A user-facing term for a backend field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAlias {
    pub term: String,
    pub field: String,
    /// Set when values of this field are names worth fuzzy-resolving.
    pub lookup: Option<NameLookup>,
}

/// Ordered alias table for one class. Several terms may share a field.
#[derive(Debug, Clone, Default)]
pub struct FieldAliasSet {
    aliases: Vec<FieldAlias>,
}

impl FieldAliasSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map every term in `terms` to `field`.
    pub fn alias(mut self, terms: &[&str], field: &str) -> Self {
        for term in terms {
            self.aliases.push(FieldAlias {
                term: term.to_string(),
                field: field.to_string(),
                lookup: None,
            });
        }
        self
    }

    /// Like `alias`, for fields holding names listed by `class.lookup_field`.
    pub fn named(mut self, terms: &[&str], field: &str, class: &str, lookup_field: &str) -> Self {
        for term in terms {
            self.aliases.push(FieldAlias {
                term: term.to_string(),
                field: field.to_string(),
                lookup: Some(NameLookup {
                    class: class.to_string(),
                    field: lookup_field.to_string(),
                }),
            });
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldAlias> {
        self.aliases.iter()
    }

    /// Exact (normalised) term lookup.
    pub fn resolve(&self, term: &str) -> Option<&FieldAlias> {
        let wanted = tokenize(term);
        self.aliases.iter().find(|a| tokenize(&a.term) == wanted)
    }

    /// Longest alias whose term starts at token `index`, with its token length.
    pub fn longest_at(&self, text: &QueryText, index: usize) -> Option<(&FieldAlias, usize)> {
        self.aliases
            .iter()
            .map(|a| (a, tokenize(&a.term)))
            .filter(|(_, needle)| text.matches_at(index, needle))
            .max_by_key(|(_, needle)| needle.len())
            .map(|(a, needle)| (a, needle.len()))
    }

    /// Longest alias ending right before token `end`, with its start index.
    pub fn longest_ending_at(&self, text: &QueryText, end: usize) -> Option<(&FieldAlias, usize)> {
        self.aliases
            .iter()
            .map(|a| (a, tokenize(&a.term)))
            .filter(|(_, needle)| needle.len() <= end && text.matches_at(end - needle.len(), needle))
            .max_by_key(|(_, needle)| needle.len())
            .map(|(a, needle)| (a, end - needle.len()))
    }

    /// Aliases for `field` whose values come from a name lookup.
    pub fn lookup_for(&self, field: &str) -> Option<&NameLookup> {
        self.aliases
            .iter()
            .filter(|a| a.field == field)
            .find_map(|a| a.lookup.as_ref())
    }
}

/// How a vocabulary value is compared against the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabMatch {
    Exact,
    Contains,
}

/// Words that imply a filter value, e.g. `laptop` → `type = 'laptop'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabTerm {
    pub phrases: Vec<String>,
    pub field: String,
    pub value: String,
    pub matching: VocabMatch,
}

impl VocabTerm {
    pub fn exact(phrases: &[&str], field: &str, value: &str) -> Self {
        Self {
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
            field: field.to_string(),
            value: value.to_string(),
            matching: VocabMatch::Exact,
        }
    }

    pub fn contains(phrases: &[&str], field: &str, value: &str) -> Self {
        Self {
            matching: VocabMatch::Contains,
            ..Self::exact(phrases, field, value)
        }
    }
}

/// A status word and the backend status values it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTerm {
    pub phrases: Vec<String>,
    pub values: Vec<String>,
}

impl StatusTerm {
    pub fn new(phrases: &[&str], values: &[&str]) -> Self {
        Self {
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }
}

// ── Shared alias tables ─────────────────────────────────────────

/// Aliases shared by the ticket family; `status_field` differs per class.
pub fn ticket_aliases(status_field: &str) -> FieldAliasSet {
    FieldAliasSet::new()
        .alias(&["status", "state"], status_field)
        .alias(&["priority", "priorities"], "priority")
        .named(
            &["organization", "organisation", "org", "company", "customer", "client"],
            "org_name",
            "Organization",
            "name",
        )
        .named(&["team", "teams", "group", "support team"], "team_name", "Team", "name")
        .named(
            &["agent", "agents", "assignee", "assigned to", "technician"],
            "agent_name",
            "Person",
            "friendlyname",
        )
        .named(
            &["caller", "callers", "requester", "requestor", "reported by"],
            "caller_name",
            "Person",
            "friendlyname",
        )
        .alias(&["type", "class", "ticket type"], "finalclass")
        .alias(&["service"], "service_name")
        .alias(&["origin", "channel"], "origin")
}

/// Aliases shared by infrastructure classes.
pub fn infra_aliases() -> FieldAliasSet {
    FieldAliasSet::new()
        .alias(&["status", "state"], "status")
        .named(
            &["organization", "organisation", "org", "company", "customer", "client"],
            "org_name",
            "Organization",
            "name",
        )
        .named(&["location", "site", "datacenter"], "location_name", "Location", "name")
        .alias(&["brand", "vendor", "manufacturer", "make"], "brand_name")
        .alias(&["model"], "model_name")
        .alias(&["os", "operating system", "os family", "platform"], "osfamily_name")
        .alias(&["os version"], "osversion_name")
        .alias(
            &["criticality", "criticity", "business criticality", "priority"],
            "business_criticity",
        )
        .named(&["owner", "owner team"], "owner_friendlyname", "Team", "friendlyname")
}

/// Aliases shared by people and organisation classes.
pub fn people_aliases() -> FieldAliasSet {
    FieldAliasSet::new()
        .alias(&["status", "state"], "status")
        .named(
            &["organization", "organisation", "org", "company", "department", "dept"],
            "org_name",
            "Organization",
            "name",
        )
        .named(&["location", "site", "office"], "location_name", "Location", "name")
        .alias(&["function", "role", "job title", "title"], "function")
}

// ── Shared vocabulary ───────────────────────────────────────────

/// Priority words for ticket classes that carry a `priority` field.
pub fn priority_terms() -> Vec<VocabTerm> {
    vec![
        VocabTerm::exact(&["critical", "p1", "urgent", "priority 1"], "priority", "1"),
        VocabTerm::exact(&["high", "p2", "priority 2"], "priority", "2"),
        VocabTerm::exact(&["medium", "p3", "priority 3"], "priority", "3"),
        VocabTerm::exact(&["low", "p4", "priority 4"], "priority", "4"),
    ]
}

pub fn criticality_terms() -> Vec<VocabTerm> {
    ["critical", "high", "medium", "low"]
        .iter()
        .map(|level| VocabTerm::exact(&[level], "business_criticity", level))
        .collect()
}

pub fn os_terms() -> Vec<VocabTerm> {
    vec![
        VocabTerm::contains(&["windows"], "osfamily_name", "Windows"),
        VocabTerm::contains(&["linux"], "osfamily_name", "Linux"),
        VocabTerm::contains(&["mac", "macos", "osx"], "osfamily_name", "Mac"),
    ]
}

/// Lifecycle words shared by CIs.
pub fn ci_status_terms() -> Vec<StatusTerm> {
    vec![
        StatusTerm::new(&["production"], &["production"]),
        StatusTerm::new(&["implementation"], &["implementation"]),
        StatusTerm::new(&["stock", "in stock"], &["stock"]),
        StatusTerm::new(&["obsolete", "retired", "decommissioned"], &["obsolete"]),
        StatusTerm::new(&["active"], &["production", "implementation"]),
        StatusTerm::new(&["inactive"], &["obsolete"]),
    ]
}

pub fn active_status_terms() -> Vec<StatusTerm> {
    vec![
        StatusTerm::new(&["active"], &["active"]),
        StatusTerm::new(&["inactive", "disabled"], &["inactive"]),
    ]
}
