//! Class handlers: submit the built queries and derive per-family statistics.
//!
//! Dispatch is an explicit class-name → handler map with one generic
//! fallback. Every handler shares the same fetch path; they differ in the
//! statistics they compute.

pub mod generic;
pub mod infra;
pub mod people;
pub mod ticket;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use itop_client::Backend;
use itop_protocol::{ObjectRecord, RawResult};

use crate::builder::{QueryBuilder, QueryDescriptor};
use crate::error::{QueryError, QueryResult};
use crate::intent::{IntentKind, ParsedIntent};
use crate::stats::{self, BranchStats, DerivedStats};
use crate::taxonomy::ClassDescriptor;

pub use generic::GenericHandler;
pub use infra::InfraHandler;
pub use people::PeopleHandler;
pub use ticket::TicketHandler;

/// One submitted descriptor and the backend's answer.
#[derive(Debug, Clone)]
pub struct Fetched {
    pub descriptor: QueryDescriptor,
    pub result: RawResult,
}

impl Fetched {
    pub fn records(&self) -> impl Iterator<Item = &ObjectRecord> {
        self.result.records()
    }
}

/// Strategy for one family of classes.
#[async_trait]
pub trait ClassHandler: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Build the descriptors for `intent` and submit them in order.
    async fn build_and_fetch(
        &self,
        backend: &dyn Backend,
        builder: &QueryBuilder,
        intent: &ParsedIntent,
        class: &ClassDescriptor,
    ) -> QueryResult<Vec<Fetched>> {
        fetch(backend, builder, intent, class).await
    }

    fn derive_stats(
        &self,
        class: &ClassDescriptor,
        intent: &ParsedIntent,
        fetched: &[Fetched],
    ) -> DerivedStats;
}

/// Submit every descriptor sequentially. A non-zero backend code stops the
/// run with `QueryError::Backend`; nothing is retried.
pub async fn fetch(
    backend: &dyn Backend,
    builder: &QueryBuilder,
    intent: &ParsedIntent,
    class: &ClassDescriptor,
) -> QueryResult<Vec<Fetched>> {
    let descriptors = builder.build(intent, class);
    let mut fetched = Vec::with_capacity(descriptors.len());

    for descriptor in descriptors {
        tracing::debug!(
            class = %descriptor.class,
            oql = %descriptor.oql(),
            limit = descriptor.limit,
            "submitting query"
        );
        let mut result = backend.submit(&descriptor.request()).await?;
        if !result.is_success() {
            let message = result
                .message
                .take()
                .unwrap_or_else(|| format!("backend returned code {}", result.code));
            tracing::warn!(class = %descriptor.class, code = result.code, %message, "backend reported an error");
            return Err(QueryError::Backend {
                class: descriptor.class.clone(),
                message,
            });
        }
        result.drop_failed();
        if intent.newest_first {
            if let Some(field) = class.date_field.as_deref() {
                newest_first(&mut result, field);
            }
        }
        if let Some(keep) = descriptor.keep {
            result.objects.truncate(keep as usize);
        }
        fetched.push(Fetched { descriptor, result });
    }
    Ok(fetched)
}

/// Sort by a `Y-m-d H:M:S` field, newest first, undated records last.
fn newest_first(result: &mut RawResult, field: &str) {
    result
        .objects
        .sort_by(|(_, a), (_, b)| b.text(field).cmp(&a.text(field)));
}

/// Counts, status breakdown, grouping and comparison branches: the part of
/// the statistics every family shares.
pub fn base_stats(class: &ClassDescriptor, intent: &ParsedIntent, fetched: &[Fetched]) -> DerivedStats {
    let mut derived = DerivedStats::default();
    for f in fetched {
        let (total, returned, truncated) = stats::totals(&f.result);
        derived.total += total;
        derived.returned += returned;
        derived.truncated |= truncated;
    }

    let records = || fetched.iter().flat_map(|f| f.records());
    if let Some(field) = class.status_field.as_deref() {
        derived.status = stats::breakdown(records(), field);
    }
    if let Some(field) = intent.group_by.as_deref() {
        derived.groups = stats::breakdown(records(), field);
    }
    if intent.kind == IntentKind::Comparison {
        derived.branches = fetched
            .iter()
            .map(|f| {
                let (total, returned, truncated) = stats::totals(&f.result);
                BranchStats {
                    label: f.descriptor.label.clone().unwrap_or_default(),
                    total,
                    returned,
                    truncated,
                    status: class
                        .status_field
                        .as_deref()
                        .map(|field| stats::breakdown(f.records(), field))
                        .unwrap_or_default(),
                }
            })
            .collect();
    }
    derived
}

/// Explicit class-name → handler map with a generic fallback.
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn ClassHandler>>,
    fallback: Arc<dyn ClassHandler>,
}

impl HandlerRegistry {
    pub fn new(fallback: Arc<dyn ClassHandler>) -> Self {
        Self {
            handlers: HashMap::new(),
            fallback,
        }
    }

    pub fn register(mut self, class: &str, handler: Arc<dyn ClassHandler>) -> Self {
        self.handlers.insert(class.to_string(), handler);
        self
    }

    /// Dedicated handlers for the ticket, infrastructure and people classes.
    pub fn standard() -> Self {
        let ticket: Arc<dyn ClassHandler> = Arc::new(TicketHandler);
        let infra: Arc<dyn ClassHandler> = Arc::new(InfraHandler);
        let people: Arc<dyn ClassHandler> = Arc::new(PeopleHandler);

        let mut registry = Self::new(Arc::new(GenericHandler));
        for class in ["UserRequest", "Ticket", "Incident", "Problem", "Change"] {
            registry = registry.register(class, ticket.clone());
        }
        for class in ["PC", "Server", "VirtualMachine", "NetworkDevice"] {
            registry = registry.register(class, infra.clone());
        }
        for class in ["Person", "Team", "Organization"] {
            registry = registry.register(class, people.clone());
        }
        registry
    }

    /// Handler for `class`, or the fallback.
    pub fn get(&self, class: &str) -> Arc<dyn ClassHandler> {
        self.handlers
            .get(class)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }

    pub fn is_dedicated(&self, class: &str) -> bool {
        self.handlers.contains_key(class)
    }

    /// Number of dedicated entries.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
