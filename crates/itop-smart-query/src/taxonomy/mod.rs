//! Class taxonomy: the object classes the processor knows how to query.
//!
//! Built once at start-up (`Taxonomy::standard()`) and passed by reference to
//! the detector, extractor, builder and formatter. Registration order is the
//! tie-break order for class detection.

pub mod aliases;
mod classes;

pub use aliases::{FieldAlias, FieldAliasSet, NameLookup, StatusTerm, VocabMatch, VocabTerm};

/// Handler family a class belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassFamily {
    Ticket,
    Infrastructure,
    People,
    Generic,
}

/// How SLA compliance is read from a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlaProfile {
    /// Backend flags (`yes` = breached) for time-to-resolve and time-to-own.
    PassedFlags { ttr_field: String, tto_field: String },
    /// Completed on time when `done_field <= due_field`.
    Deadline { due_field: String, done_field: String },
}

/// Fixed-width table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub field: String,
    pub header: String,
    pub width: usize,
}

/// One line of the detailed record view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    pub field: String,
    pub label: String,
    pub icon: String,
}

/// Static description of one backend class.
#[derive(Debug, Clone)]
pub struct ClassDescriptor {
    pub name: String,
    /// Display plural ("PCs", "User Requests").
    pub plural: String,
    pub family: ClassFamily,
    pub icon: String,
    pub triggers: Vec<String>,
    pub default_fields: Vec<String>,
    pub status_field: Option<String>,
    pub status_terms: Vec<StatusTerm>,
    /// Status values that count as finished work.
    pub completed_statuses: Vec<String>,
    pub vocabulary: Vec<VocabTerm>,
    pub aliases: FieldAliasSet,
    /// Field a bare proper noun is matched against.
    pub name_field: String,
    pub name_lookup: NameLookup,
    /// Field relative time phrases filter on.
    pub date_field: Option<String>,
    pub sla: Option<SlaProfile>,
    pub title_field: String,
    pub subtitle_field: Option<String>,
    pub columns: Vec<Column>,
    pub detail: Vec<DetailLine>,
    /// Field set used in software-focus mode (infrastructure only).
    pub software_fields: Vec<String>,
    pub default_limit: u32,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl ClassDescriptor {
    pub fn new(name: &str, plural: &str, family: ClassFamily, icon: &str) -> Self {
        let default_limit = if family == ClassFamily::Ticket { 500 } else { 1000 };
        Self {
            name: name.to_string(),
            plural: plural.to_string(),
            family,
            icon: icon.to_string(),
            triggers: Vec::new(),
            default_fields: strings(&["name"]),
            status_field: None,
            status_terms: Vec::new(),
            completed_statuses: Vec::new(),
            vocabulary: Vec::new(),
            aliases: FieldAliasSet::new(),
            name_field: "name".into(),
            name_lookup: NameLookup {
                class: name.to_string(),
                field: "name".into(),
            },
            date_field: None,
            sla: None,
            title_field: "name".into(),
            subtitle_field: None,
            columns: Vec::new(),
            detail: Vec::new(),
            software_fields: Vec::new(),
            default_limit,
        }
    }

    pub fn triggers(mut self, triggers: &[&str]) -> Self {
        self.triggers = strings(triggers);
        self
    }

    pub fn fields(mut self, fields: &[&str]) -> Self {
        self.default_fields = strings(fields);
        self
    }

    pub fn status(mut self, field: &str, terms: Vec<StatusTerm>) -> Self {
        self.status_field = Some(field.to_string());
        self.status_terms = terms;
        self
    }

    pub fn completed(mut self, statuses: &[&str]) -> Self {
        self.completed_statuses = strings(statuses);
        self
    }

    pub fn vocabulary(mut self, terms: Vec<VocabTerm>) -> Self {
        self.vocabulary.extend(terms);
        self
    }

    pub fn aliases(mut self, aliases: FieldAliasSet) -> Self {
        self.aliases = aliases;
        self
    }

    /// Bare proper nouns filter `field`; candidates come from `class.lookup_field`.
    pub fn names(mut self, field: &str, class: &str, lookup_field: &str) -> Self {
        self.name_field = field.to_string();
        self.name_lookup = NameLookup {
            class: class.to_string(),
            field: lookup_field.to_string(),
        };
        self
    }

    pub fn dated(mut self, field: &str) -> Self {
        self.date_field = Some(field.to_string());
        self
    }

    pub fn sla(mut self, profile: SlaProfile) -> Self {
        self.sla = Some(profile);
        self
    }

    pub fn title(mut self, field: &str, subtitle: Option<&str>) -> Self {
        self.title_field = field.to_string();
        self.subtitle_field = subtitle.map(String::from);
        self
    }

    /// `(field, header, width)` triples.
    pub fn columns(mut self, columns: &[(&str, &str, usize)]) -> Self {
        self.columns = columns
            .iter()
            .map(|(field, header, width)| Column {
                field: field.to_string(),
                header: header.to_string(),
                width: *width,
            })
            .collect();
        self
    }

    /// `(field, icon, label)` triples.
    pub fn detail(mut self, lines: &[(&str, &str, &str)]) -> Self {
        self.detail = lines
            .iter()
            .map(|(field, icon, label)| DetailLine {
                field: field.to_string(),
                icon: icon.to_string(),
                label: label.to_string(),
            })
            .collect();
        self
    }

    pub fn software(mut self, fields: &[&str]) -> Self {
        self.software_fields = strings(fields);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.default_limit = limit;
        self
    }

    pub fn supports_sla(&self) -> bool {
        self.sla.is_some()
    }

    /// Backend field behind a user term, via this class's alias table.
    pub fn resolve_field(&self, term: &str) -> Option<&str> {
        self.aliases.resolve(term).map(|a| a.field.as_str())
    }
}

/// Contextual score bonus applied by the detector.
///
/// Fires when every `all_of` phrase, at least one `any_of` phrase (if any are
/// listed) and none of the `none_of` phrases occur in the query.
#[derive(Debug, Clone)]
pub struct Boost {
    pub class: String,
    pub all_of: Vec<String>,
    pub any_of: Vec<String>,
    pub none_of: Vec<String>,
    pub bonus: u32,
}

impl Boost {
    pub fn new(class: &str, all_of: &[&str], any_of: &[&str], none_of: &[&str]) -> Self {
        Self {
            class: class.to_string(),
            all_of: strings(all_of),
            any_of: strings(any_of),
            none_of: strings(none_of),
            bonus: 30,
        }
    }
}

/// Ordered, immutable set of class descriptors.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    classes: Vec<ClassDescriptor>,
    boosts: Vec<Boost>,
    fallback: usize,
}

impl Taxonomy {
    /// Assemble a taxonomy; `fallback` must name one of `classes`.
    pub fn new(classes: Vec<ClassDescriptor>, boosts: Vec<Boost>, fallback: &str) -> Option<Self> {
        let fallback = classes.iter().position(|c| c.name == fallback)?;
        Some(Self {
            classes,
            boosts,
            fallback,
        })
    }

    /// The built-in iTop class set (falls back to `UserRequest`).
    pub fn standard() -> Self {
        let classes = classes::standard_classes();
        let fallback = classes
            .iter()
            .position(|c| c.name == classes::FALLBACK_CLASS)
            .unwrap_or(0);
        Self {
            classes,
            boosts: classes::standard_boosts(),
            fallback,
        }
    }

    pub fn classes(&self) -> &[ClassDescriptor] {
        &self.classes
    }

    pub fn boosts(&self) -> &[Boost] {
        &self.boosts
    }

    /// Case-insensitive lookup by class name.
    pub fn get(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Registration index of a class (lower wins ties).
    pub fn position(&self, name: &str) -> Option<usize> {
        self.classes.iter().position(|c| c.name == name)
    }

    pub fn fallback(&self) -> &ClassDescriptor {
        &self.classes[self.fallback]
    }

    /// Descriptor for a class the taxonomy does not know: generic family,
    /// `name`-only fields, queried as-is.
    pub fn ad_hoc(name: &str) -> ClassDescriptor {
        ClassDescriptor::new(name, name, ClassFamily::Generic, "📋")
            .fields(&["name", "friendlyname"])
            .aliases(aliases::FieldAliasSet::new().alias(&["organization", "org"], "org_name"))
            .columns(&[("name", "Name", 30), ("friendlyname", "Friendly name", 40)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenize;

    #[test]
    fn standard_has_dedicated_classes_first() {
        let tax = Taxonomy::standard();
        let names: Vec<&str> = tax.classes().iter().take(12).map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "UserRequest",
                "Ticket",
                "Incident",
                "Problem",
                "Change",
                "PC",
                "Server",
                "VirtualMachine",
                "NetworkDevice",
                "Person",
                "Team",
                "Organization",
            ]
        );
        assert_eq!(tax.fallback().name, "UserRequest");
    }

    #[test]
    fn class_names_unique() {
        let tax = Taxonomy::standard();
        for (i, class) in tax.classes().iter().enumerate() {
            assert_eq!(tax.position(&class.name), Some(i), "duplicate {}", class.name);
        }
    }

    #[test]
    fn most_specific_trigger_is_unique() {
        let tax = Taxonomy::standard();
        for class in tax.classes() {
            let longest = class
                .triggers
                .iter()
                .max_by_key(|t| tokenize(t).len())
                .unwrap_or_else(|| panic!("{} has no triggers", class.name));
            for other in tax.classes().iter().filter(|o| o.name != class.name) {
                assert!(
                    !other.triggers.contains(longest),
                    "{longest:?} shared by {} and {}",
                    class.name,
                    other.name
                );
            }
        }
    }

    #[test]
    fn status_terms_need_status_field() {
        for class in Taxonomy::standard().classes() {
            if !class.status_terms.is_empty() {
                assert!(class.status_field.is_some(), "{}", class.name);
            }
        }
    }

    #[test]
    fn lookup_case_insensitive() {
        let tax = Taxonomy::standard();
        assert_eq!(tax.get("networkdevice").unwrap().name, "NetworkDevice");
        assert!(tax.get("Spaceship").is_none());
    }

    #[test]
    fn new_rejects_unknown_fallback() {
        assert!(Taxonomy::new(vec![Taxonomy::ad_hoc("Foo")], vec![], "Bar").is_none());
        assert!(Taxonomy::new(vec![Taxonomy::ad_hoc("Foo")], vec![], "Foo").is_some());
    }

    #[test]
    fn ticket_classes_have_smaller_cap() {
        let tax = Taxonomy::standard();
        assert_eq!(tax.get("UserRequest").unwrap().default_limit, 500);
        assert_eq!(tax.get("Server").unwrap().default_limit, 1000);
    }
}
