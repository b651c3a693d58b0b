//! Smart query orchestration: text in, formatted report out.
//!
//! One call runs detection → intent extraction → name resolution → the
//! class handler → the formatter, with every backend round trip going
//! through the injected `Backend`.

use std::borrow::Cow;
use std::fmt::Write;
use std::sync::Arc;

use chrono::NaiveDateTime;
use itop_client::Backend;
use tracing::Instrument;
use uuid::Uuid;

use crate::builder::QueryBuilder;
use crate::config::QueryConfig;
use crate::detector::ClassDetector;
use crate::error::{QueryError, QueryResult};
use crate::filter::FilterClause;
use crate::format::{self, FormattedReport, ReportInput};
use crate::fuzzy::FuzzyMatcher;
use crate::handlers::HandlerRegistry;
use crate::intent::{IntentExtractor, NameReference, OutputMode, ParsedIntent};
use crate::taxonomy::{ClassDescriptor, Taxonomy};
use crate::text::QueryText;

/// Per-call overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmartQueryOptions {
    /// Output mode; beats any hint in the text.
    pub mode: Option<OutputMode>,
    /// Skip detection and query this class.
    pub force_class: Option<String>,
    /// Result cap; clamped to the configured maximum.
    pub limit: Option<u32>,
}

/// Source of "now" for relative time phrases.
pub type Clock = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub struct SmartQueryProcessor {
    taxonomy: Arc<Taxonomy>,
    backend: Arc<dyn Backend>,
    registry: HandlerRegistry,
    matcher: FuzzyMatcher,
    builder: QueryBuilder,
    extractor: IntentExtractor,
    config: QueryConfig,
    clock: Clock,
}

impl SmartQueryProcessor {
    pub fn new(taxonomy: Arc<Taxonomy>, backend: Arc<dyn Backend>, config: QueryConfig) -> Self {
        Self {
            extractor: IntentExtractor::new(&taxonomy),
            matcher: FuzzyMatcher::new(config.fuzzy_threshold),
            builder: QueryBuilder::new(config.max_limit),
            registry: HandlerRegistry::standard(),
            taxonomy,
            backend,
            config,
            clock: local_now,
        }
    }

    /// Standard taxonomy and default tunables.
    pub fn with_defaults(backend: Arc<dyn Backend>) -> Self {
        Self::new(Arc::new(Taxonomy::standard()), backend, QueryConfig::default())
    }

    pub fn with_registry(mut self, registry: HandlerRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Answer `text`, rendering any failure as user-facing text.
    pub async fn smart_query(&self, text: &str, options: &SmartQueryOptions) -> String {
        match self.process(text, options).await {
            Ok(report) => report.text,
            Err(e) => {
                tracing::warn!(error = %e, "smart query failed");
                e.render()
            }
        }
    }

    /// Answer `text` as a report with metadata.
    pub async fn process(
        &self,
        text: &str,
        options: &SmartQueryOptions,
    ) -> QueryResult<FormattedReport> {
        let span = tracing::info_span!("smart_query", query_id = %Uuid::now_v7());
        self.run(text, options).instrument(span).await
    }

    async fn run(&self, text: &str, options: &SmartQueryOptions) -> QueryResult<FormattedReport> {
        let query = QueryText::new(text);
        if query.is_empty() {
            return Err(QueryError::InvalidQuery("query text is empty".into()));
        }
        tracing::debug!(query = %query.raw(), "processing query");

        let class = self.class_for(&query, options);
        let mut intent = self
            .extractor
            .extract(&query, &class, (self.clock)(), options.mode);
        if options.limit.is_some() {
            intent.limit = options.limit;
        }
        self.resolve_names(&mut intent).await;

        let handler = self.registry.get(&class.name);
        tracing::debug!(class = %class.name, handler = handler.name(), kind = %intent.kind, "dispatching");
        let fetched = handler
            .build_and_fetch(self.backend.as_ref(), &self.builder, &intent, &class)
            .await?;
        let stats = handler.derive_stats(&class, &intent, &fetched);

        let report = format::render(&ReportInput {
            query: query.raw(),
            class: &class,
            intent: &intent,
            fetched: &fetched,
            stats: &stats,
        });
        tracing::info!(
            class = %class.name,
            kind = %intent.kind,
            total = stats.total,
            returned = stats.returned,
            "query answered"
        );
        Ok(report)
    }

    /// Forced class (known or ad hoc), else the detector's pick.
    fn class_for(&self, query: &QueryText, options: &SmartQueryOptions) -> Cow<'_, ClassDescriptor> {
        if let Some(name) = options.force_class.as_deref() {
            return match self.taxonomy.get(name) {
                Some(class) => Cow::Borrowed(class),
                None => {
                    tracing::info!(class = name, "forced class not in taxonomy, querying as-is");
                    Cow::Owned(Taxonomy::ad_hoc(name))
                }
            };
        }
        let detection = ClassDetector::new(&self.taxonomy).detect_text(query);
        tracing::debug!(
            class = %detection.class.name,
            score = detection.score,
            fallback = detection.fallback,
            "class detected"
        );
        Cow::Borrowed(detection.class)
    }

    /// Turn name references into filters. Only the first reference with a
    /// lookup source is fuzzy-resolved; the rest filter by substring.
    async fn resolve_names(&self, intent: &mut ParsedIntent) {
        let names = std::mem::take(&mut intent.names);
        let mut looked_up = false;
        for reference in &names {
            let filter = match &reference.lookup {
                Some(_) if !looked_up => {
                    looked_up = true;
                    self.resolve(reference).await
                }
                _ => literal(reference),
            };
            if !intent.filters.iter().any(|f| f.field == filter.field) {
                intent.filters.push(filter);
            }
        }
        intent.names = names;
    }

    async fn resolve(&self, reference: &NameReference) -> FilterClause {
        let Some(lookup) = &reference.lookup else {
            return literal(reference);
        };
        let request = self.builder.lookup(lookup, self.config.lookup_limit).request();
        let result = match self.backend.submit(&request).await {
            Ok(result) if result.is_success() => result,
            Ok(result) => {
                tracing::warn!(
                    class = %lookup.class,
                    code = result.code,
                    message = ?result.message,
                    "name lookup rejected, using literal filter"
                );
                return literal(reference);
            }
            Err(e) => {
                tracing::warn!(class = %lookup.class, error = %e, "name lookup failed, using literal filter");
                return literal(reference);
            }
        };

        let candidates: Vec<String> = result.records().filter_map(|r| r.text(&lookup.field)).collect();
        match self
            .matcher
            .best_match(&reference.fragment, candidates.iter().map(String::as_str))
        {
            Some(m) => FilterClause::eq(reference.field.clone(), m.name),
            None => literal(reference),
        }
    }

    /// Operations the backend advertises, one bullet each.
    pub async fn list_operations(&self) -> String {
        match self.backend.list_operations().await {
            Ok(operations) => {
                let mut out = String::from("Available iTop REST API operations:\n");
                for op in operations {
                    let _ = write!(out, "\n• {}: {}", op.verb, op.description);
                }
                out
            }
            Err(e) => {
                tracing::warn!(error = %e, "list_operations failed");
                QueryError::from(e).render()
            }
        }
    }
}

fn literal(reference: &NameReference) -> FilterClause {
    FilterClause::like(reference.field.clone(), reference.fragment.clone())
}
