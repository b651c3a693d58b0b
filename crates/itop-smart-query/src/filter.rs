//! Filter clauses in the backend's native OQL syntax.
//!
//! A `FilterClause` can only be built from a field name and a typed
//! `Condition`, so every clause that reaches the query builder renders to a
//! complete boolean expression.

use std::fmt;

/// Right-hand side of a filter clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Eq(String),
    Ne(String),
    In(Vec<String>),
    NotIn(Vec<String>),
    /// Substring match; the `%` wildcards are added on render.
    Like(String),
    /// Substring match against any of the values.
    LikeAny(Vec<String>),
    Ge(String),
    Le(String),
    Lt(String),
}

impl Condition {
    /// `Eq` for one value, `In` for several (deduplicated, order kept).
    pub fn one_of(values: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(values.len());
        for v in values {
            if !unique.contains(&v) {
                unique.push(v);
            }
        }
        if unique.len() == 1 {
            Condition::Eq(unique.remove(0))
        } else {
            Condition::In(unique)
        }
    }

    /// Logical negation, where the backend syntax has one.
    pub fn negate(&self) -> Option<Self> {
        match self {
            Condition::Eq(v) => Some(Condition::Ne(v.clone())),
            Condition::Ne(v) => Some(Condition::Eq(v.clone())),
            Condition::In(vs) => Some(Condition::NotIn(vs.clone())),
            Condition::NotIn(vs) => Some(Condition::In(vs.clone())),
            Condition::Ge(v) => Some(Condition::Lt(v.clone())),
            _ => None,
        }
    }
}

/// One `field <op> value` clause plus a human-readable label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterClause {
    pub field: String,
    pub condition: Condition,
    pub label: String,
}

impl FilterClause {
    pub fn new(field: impl Into<String>, condition: Condition) -> Self {
        let field = field.into();
        let label = describe(&field, &condition);
        Self {
            field,
            condition,
            label,
        }
    }

    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, Condition::Eq(value.into()))
    }

    pub fn like(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, Condition::Like(value.into()))
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn negate(&self) -> Option<Self> {
        let condition = self.condition.negate()?;
        Some(Self::new(self.field.clone(), condition).with_label(format!("not {}", self.label)))
    }

    /// Render as an OQL boolean expression.
    pub fn to_oql(&self) -> String {
        let f = &self.field;
        match &self.condition {
            Condition::Eq(v) => format!("{f} = {}", quote(v)),
            Condition::Ne(v) => format!("{f} != {}", quote(v)),
            Condition::In(vs) => format!("{f} IN ({})", quote_list(vs)),
            Condition::NotIn(vs) => format!("{f} NOT IN ({})", quote_list(vs)),
            Condition::Like(v) => format!("{f} LIKE {}", quote(&format!("%{v}%"))),
            Condition::LikeAny(vs) => {
                let parts: Vec<String> = vs
                    .iter()
                    .map(|v| format!("{f} LIKE {}", quote(&format!("%{v}%"))))
                    .collect();
                if parts.len() == 1 {
                    parts.join("")
                } else {
                    format!("({})", parts.join(" OR "))
                }
            }
            Condition::Ge(v) => format!("{f} >= {}", quote(v)),
            Condition::Le(v) => format!("{f} <= {}", quote(v)),
            Condition::Lt(v) => format!("{f} < {}", quote(v)),
        }
    }
}

impl fmt::Display for FilterClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Single-quote a literal, escaping `\` and `'`.
pub fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}

fn quote_list(values: &[String]) -> String {
    values
        .iter()
        .map(|v| quote(v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe(field: &str, condition: &Condition) -> String {
    match condition {
        Condition::Eq(v) => format!("{field}: {v}"),
        Condition::Ne(v) => format!("{field}: not {v}"),
        Condition::In(vs) => format!("{field}: {}", vs.join("/")),
        Condition::NotIn(vs) => format!("{field}: not {}", vs.join("/")),
        Condition::Like(v) => format!("{field} contains \"{v}\""),
        Condition::LikeAny(vs) => format!("{field} contains {}", vs.join("/")),
        Condition::Ge(v) => format!("{field} since {v}"),
        Condition::Le(v) => format!("{field} up to {v}"),
        Condition::Lt(v) => format!("{field} before {v}"),
    }
}

/// AND-join clauses into an OQL `SELECT`.
pub fn select(class: &str, filters: &[FilterClause]) -> String {
    if filters.is_empty() {
        format!("SELECT {class}")
    } else {
        let clauses: Vec<String> = filters.iter().map(FilterClause::to_oql).collect();
        format!("SELECT {class} WHERE {}", clauses.join(" AND "))
    }
}
