//! Fuzzy resolution of typed names ("demo corp", "srv-web1") against the
//! names the backend actually holds.

use strsim::{jaro_winkler, normalized_levenshtein};

use crate::text::fold;

pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Weight of a single-token hit ("Demo" inside "Demo Corporation").
const TOKEN_WEIGHT: f64 = 0.95;

/// Best candidate for a fragment, with its similarity in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct NameMatch {
    pub name: String,
    pub score: f64,
}

/// Case- and punctuation-insensitive name matcher with a confidence floor.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatcher {
    threshold: f64,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl FuzzyMatcher {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Similarity of `fragment` to `candidate`; 1.0 for equal folded strings.
    pub fn score(fragment: &str, candidate: &str) -> f64 {
        let a = fold(fragment);
        let b = fold(candidate);
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        if a == b {
            return 1.0;
        }
        let whole = normalized_levenshtein(&a, &b).max(jaro_winkler(&a, &b));
        let token = b
            .split(' ')
            .map(|t| normalized_levenshtein(&a, t))
            .fold(0.0, f64::max);
        whole.max(token * TOKEN_WEIGHT)
    }

    /// Highest-scoring candidate at or above the threshold.
    ///
    /// Equal scores prefer the shorter name, then the alphabetically first.
    pub fn best_match<'c, I>(&self, fragment: &str, candidates: I) -> Option<NameMatch>
    where
        I: IntoIterator<Item = &'c str>,
    {
        let mut best: Option<NameMatch> = None;
        for candidate in candidates {
            let score = Self::score(fragment, candidate);
            if score < self.threshold {
                continue;
            }
            let better = match &best {
                None => true,
                Some(b) => {
                    score > b.score
                        || (score == b.score
                            && (candidate.len(), candidate) < (b.name.len(), b.name.as_str()))
                }
            };
            if better {
                best = Some(NameMatch {
                    name: candidate.to_string(),
                    score,
                });
            }
        }
        match &best {
            Some(m) => tracing::debug!(fragment, matched = %m.name, score = m.score, "fuzzy match"),
            None => tracing::debug!(fragment, "no fuzzy match above threshold"),
        }
        best
    }
}
