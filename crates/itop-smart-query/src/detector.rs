//! Class detection: pick the backend class a free-text query is about.
//!
//! Scoring walks the token stream once. At each position the longest trigger
//! phrase (of any class) starting there is consumed and credits its class
//! `10 × words²`, so "network switches" beats "switches" and "server"
//! combined. The same phrase registered by several classes goes to the
//! first-registered one. Contextual boosts then add fixed bonuses. The
//! highest total wins; equal totals go to the first-registered class, and a
//! query with no score at all resolves to the taxonomy's fallback class.

use crate::error::{QueryError, QueryResult};
use crate::taxonomy::{ClassDescriptor, Taxonomy};
use crate::text::{QueryText, tokenize};

/// Words after which a phrase names a grouping field, not the target class.
const GROUPING_PREFIXES: &[&str] = &["by", "per"];
const GROUPING_SUFFIX: &str = "wise";

/// Outcome of class detection.
#[derive(Debug, Clone)]
pub struct Detection<'a> {
    pub class: &'a ClassDescriptor,
    pub score: u32,
    /// True when no trigger matched and the fallback class was used.
    pub fallback: bool,
}

/// Keyword-scoring class detector over an immutable taxonomy.
pub struct ClassDetector<'a> {
    taxonomy: &'a Taxonomy,
    triggers: Vec<(usize, Vec<String>)>,
}

impl<'a> ClassDetector<'a> {
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        let triggers = taxonomy
            .classes()
            .iter()
            .enumerate()
            .flat_map(|(i, class)| class.triggers.iter().map(move |t| (i, tokenize(t))))
            .filter(|(_, tokens)| !tokens.is_empty())
            .collect();
        Self { taxonomy, triggers }
    }

    /// Detect the class of `text`. Empty text is an `InvalidQuery`.
    pub fn detect(&self, text: &str) -> QueryResult<Detection<'a>> {
        let query = QueryText::new(text);
        if query.is_empty() {
            return Err(QueryError::InvalidQuery("query text is empty".into()));
        }
        Ok(self.detect_text(&query))
    }

    pub fn detect_text(&self, query: &QueryText) -> Detection<'a> {
        let scores = self.scores(query);
        let best = scores
            .iter()
            .enumerate()
            .filter(|(_, score)| **score > 0)
            // max_by_key keeps the last maximum; reverse so the earliest class wins ties
            .rev()
            .max_by_key(|(_, score)| **score);

        match best {
            Some((index, &score)) => {
                let class = &self.taxonomy.classes()[index];
                tracing::debug!(class = %class.name, score, "class detected");
                Detection {
                    class,
                    score,
                    fallback: false,
                }
            }
            None => {
                let class = self.taxonomy.fallback();
                tracing::debug!(class = %class.name, "no trigger matched, using fallback class");
                Detection {
                    class,
                    score: 0,
                    fallback: true,
                }
            }
        }
    }

    /// Per-class scores, indexed like `Taxonomy::classes()`.
    pub fn scores(&self, query: &QueryText) -> Vec<u32> {
        let mut scores = vec![0u32; self.taxonomy.classes().len()];
        let tokens = query.tokens();
        let mut i = 0;

        while i < tokens.len() {
            let hit = self
                .triggers
                .iter()
                .filter(|(_, needle)| query.matches_at(i, needle))
                // longest phrase; among equals the lowest class index
                .min_by_key(|(class, needle)| (std::cmp::Reverse(needle.len()), *class));

            let Some((class, needle)) = hit else {
                i += 1;
                continue;
            };

            let len = needle.len();
            let after_prefix = i > 0 && GROUPING_PREFIXES.contains(&tokens[i - 1].as_str());
            let before_suffix = query.token(i + len) == Some(GROUPING_SUFFIX);
            if !after_prefix && !before_suffix {
                let words = len as u32;
                scores[*class] += 10 * words * words;
            }
            i += len;
        }

        for boost in self.taxonomy.boosts() {
            let applies = boost.all_of.iter().all(|p| query.contains(p))
                && (boost.any_of.is_empty() || boost.any_of.iter().any(|p| query.contains(p)))
                && !boost.none_of.iter().any(|p| query.contains(p));
            if !applies {
                continue;
            }
            if let Some(index) = self.taxonomy.position(&boost.class) {
                scores[index] += boost.bonus;
            }
        }

        scores
    }
}
