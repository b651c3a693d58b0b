//! Parsed intent → backend query descriptors.

use itop_protocol::OperationRequest;

use crate::filter::{FilterClause, select};
use crate::intent::{Focus, IntentKind, ParsedIntent};
use crate::taxonomy::{ClassDescriptor, NameLookup, SlaProfile};

/// One `core/get` call: class, AND-ed filters, fields and a result cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub class: String,
    /// Branch label for comparisons.
    pub label: Option<String>,
    pub filters: Vec<FilterClause>,
    pub output_fields: Vec<String>,
    pub limit: u32,
    /// Records to keep after the newest-first sort; the request itself asks
    /// for `limit` so the sort sees more than the first page.
    pub keep: Option<u32>,
}

impl QueryDescriptor {
    pub fn oql(&self) -> String {
        select(&self.class, &self.filters)
    }

    pub fn request(&self) -> OperationRequest {
        OperationRequest::core_get(&self.class, &self.oql(), &self.output_fields, self.limit)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct QueryBuilder {
    max_limit: u32,
}

impl QueryBuilder {
    pub fn new(max_limit: u32) -> Self {
        Self {
            max_limit: max_limit.max(1),
        }
    }

    /// Class default cap, or the requested limit clamped to `1..=max_limit`.
    pub fn limit(&self, class: &ClassDescriptor, requested: Option<u32>) -> u32 {
        match requested {
            Some(n) => n.clamp(1, self.max_limit),
            None => class.default_limit.min(self.max_limit),
        }
    }

    /// Descriptors for `intent`: two for a comparison, one otherwise.
    pub fn build(&self, intent: &ParsedIntent, class: &ClassDescriptor) -> Vec<QueryDescriptor> {
        // core/get has no ORDER BY: fetch the class cap, sort, then cut
        let sorted = intent.newest_first && class.date_field.is_some();
        let (limit, keep) = match intent.limit {
            Some(n) if sorted => (self.limit(class, None), Some(self.limit(class, Some(n)))),
            requested => (self.limit(class, requested), None),
        };
        let fields = output_fields(intent, class);

        if intent.kind == IntentKind::Comparison {
            return intent
                .branches
                .iter()
                .map(|branch| QueryDescriptor {
                    class: class.name.clone(),
                    label: Some(branch.label.clone()),
                    filters: branch
                        .filters
                        .iter()
                        .chain(intent.filters.iter())
                        .cloned()
                        .collect(),
                    output_fields: fields.clone(),
                    limit,
                    keep,
                })
                .collect();
        }

        vec![QueryDescriptor {
            class: class.name.clone(),
            label: None,
            filters: intent.filters.clone(),
            output_fields: fields,
            limit,
            keep,
        }]
    }

    /// Candidate names for fuzzy resolution.
    pub fn lookup(&self, lookup: &NameLookup, limit: u32) -> QueryDescriptor {
        QueryDescriptor {
            class: lookup.class.clone(),
            label: None,
            filters: Vec::new(),
            output_fields: vec![lookup.field.clone()],
            limit: limit.clamp(1, self.max_limit),
            keep: None,
        }
    }
}

/// Default (or software) fields plus every field a filter, the grouping or
/// the statistics read. Deduplicated, first occurrence wins. A count only
/// reads the reported total, so it asks for the id (and the grouping).
fn output_fields(intent: &ParsedIntent, class: &ClassDescriptor) -> Vec<String> {
    if intent.kind == IntentKind::Count {
        return std::iter::once("id".to_string())
            .chain(intent.group_by.clone())
            .collect();
    }

    let base = if intent.focus == Focus::Software && !class.software_fields.is_empty() {
        &class.software_fields
    } else {
        &class.default_fields
    };

    let mut fields: Vec<String> = Vec::new();
    let mut add = |field: &str| {
        if !fields.iter().any(|f| f == field) {
            fields.push(field.to_string());
        }
    };

    base.iter().for_each(|f| add(f));
    intent
        .filters
        .iter()
        .chain(intent.branches.iter().flat_map(|b| b.filters.iter()))
        .for_each(|f| add(&f.field));
    if let Some(group) = &intent.group_by {
        add(group);
    }
    if let Some(status) = &class.status_field {
        add(status);
    }
    match &class.sla {
        Some(SlaProfile::PassedFlags {
            ttr_field,
            tto_field,
        }) => {
            add(ttr_field);
            add(tto_field);
        }
        Some(SlaProfile::Deadline {
            due_field,
            done_field,
        }) => {
            add(due_field);
            add(done_field);
        }
        None => {}
    }
    if intent.newest_first {
        if let Some(date) = &class.date_field {
            add(date);
        }
    }
    fields
}
