//! Proper-noun extraction: names the user typed that should become filters.
//!
//! Names are found three ways: quoted strings, capitalised or
//! identifier-looking words, and words introduced by a field keyword
//! ("organization Demo", "assigned to Jane"). The target field comes from the
//! keyword in front of the name, or the class's name field otherwise.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::taxonomy::{ClassDescriptor, FieldAlias, NameLookup};
use crate::text::{QueryText, tokenize};

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)"|(?:^|[\s(])'([^']+)'"#).unwrap());

/// Words that never start or continue a name.
const STOPWORDS: &[&str] = &[
    "a", "all", "an", "and", "any", "are", "as", "at", "based", "by", "count", "for", "from",
    "get", "give", "group", "grouped", "how", "in", "is", "list", "many", "me", "my", "not",
    "of", "on", "or", "per", "show", "the", "their", "to", "vs", "versus", "what", "which",
    "who", "with", "without", "sla", "slas", "ttr", "tto", "oql", "itop", "id", "ids", "it",
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "monday", "tuesday", "wednesday", "thursday", "friday",
    "saturday", "sunday", "i", "we", "please", "find", "display", "top", "first", "limit",
    "table", "summary", "detailed", "details",
];

/// Prepositions that imply a field when the class has an alias for it.
const PREPOSITION_FIELDS: &[(&str, &str)] = &[("in", "location"), ("at", "location"), ("for", "organization")];

/// A name fragment to be resolved against backend values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameReference {
    pub fragment: String,
    pub field: String,
    /// Candidate source for fuzzy resolution; `None` filters literally.
    pub lookup: Option<NameLookup>,
}

/// Extracts `NameReference`s given the set of words the taxonomy knows.
pub struct NameExtractor<'a> {
    known: &'a HashSet<String>,
}

impl<'a> NameExtractor<'a> {
    pub fn new(known: &'a HashSet<String>) -> Self {
        Self { known }
    }

    pub fn extract(&self, text: &QueryText, class: &ClassDescriptor) -> Vec<NameReference> {
        let mut refs: Vec<NameReference> = Vec::new();
        let mut taken: HashSet<usize> = HashSet::new();

        // quoted strings
        for caps in QUOTED.captures_iter(text.raw()) {
            let Some(m) = caps.get(1).or_else(|| caps.get(2)) else {
                continue;
            };
            let fragment = m.as_str().trim();
            if fragment.is_empty() {
                continue;
            }
            let start = tokenize(&text.raw()[..m.start()]).len();
            let len = tokenize(fragment).len();
            taken.extend(start..start + len);
            push(&mut refs, self.reference(text, class, start, fragment));
        }

        // unquoted names, possibly multi-word
        let tokens = text.tokens();
        let mut i = 0;
        while i < tokens.len() {
            if taken.contains(&i) || !self.looks_like_name(text, i) {
                i += 1;
                continue;
            }
            let start = i;
            let mut words = Vec::new();
            while i < tokens.len() && !taken.contains(&i) && self.looks_like_name(text, i) {
                if let Some(word) = text.original(i) {
                    words.push(word.to_string());
                }
                i += 1;
                if words.len() == 4 {
                    break;
                }
            }
            let fragment = words.join(" ");
            push(&mut refs, self.reference(text, class, start, &fragment));
        }

        refs
    }

    /// Capitalised (not sentence-initial) or identifier-like, and unknown.
    fn looks_like_name(&self, text: &QueryText, index: usize) -> bool {
        let (Some(lower), Some(original)) = (text.token(index), text.original(index)) else {
            return false;
        };
        if self.known.contains(lower) || STOPWORDS.contains(&lower) {
            return false;
        }
        if lower.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        let has_letter = lower.chars().any(char::is_alphabetic);
        let has_digit = lower.chars().any(|c| c.is_ascii_digit());
        let identifier = has_letter && (has_digit || lower.contains('-') || lower.contains('_'));
        let capitalised = index > 0 && original.chars().next().is_some_and(char::is_uppercase);
        identifier || capitalised
    }

    /// Bind a fragment at token `start` to the field named just before it.
    fn reference(
        &self,
        text: &QueryText,
        class: &ClassDescriptor,
        start: usize,
        fragment: &str,
    ) -> NameReference {
        if let Some(alias) = keyword_before(text, class, start) {
            return NameReference {
                fragment: fragment.to_string(),
                field: alias.field.clone(),
                lookup: alias.lookup.clone(),
            };
        }
        NameReference {
            fragment: fragment.to_string(),
            field: class.name_field.clone(),
            lookup: Some(class.name_lookup.clone()),
        }
    }
}

/// Field keyword immediately before `start`, skipping one filler word
/// ("organization named X", "team called X").
fn keyword_before<'c>(
    text: &QueryText,
    class: &'c ClassDescriptor,
    start: usize,
) -> Option<&'c FieldAlias> {
    let mut end = start;
    if end > 0 && matches!(text.token(end - 1), Some("named" | "called" | "is" | "=")) {
        end -= 1;
    }
    if let Some((alias, _)) = class.aliases.longest_ending_at(text, end) {
        return Some(alias);
    }
    let prev = text.token(end.checked_sub(1)?)?;
    PREPOSITION_FIELDS
        .iter()
        .find(|(prep, _)| *prep == prev)
        .and_then(|(_, term)| class.aliases.resolve(term))
}

fn push(refs: &mut Vec<NameReference>, reference: NameReference) {
    let duplicate = refs
        .iter()
        .any(|r| r.fragment.eq_ignore_ascii_case(&reference.fragment));
    if !duplicate {
        refs.push(reference);
    }
}
