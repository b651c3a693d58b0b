//! Fallback for every class without a dedicated handler.

use async_trait::async_trait;

use super::{ClassHandler, Fetched, base_stats};
use crate::intent::ParsedIntent;
use crate::stats::DerivedStats;
use crate::taxonomy::ClassDescriptor;

pub struct GenericHandler;

#[async_trait]
impl ClassHandler for GenericHandler {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn derive_stats(
        &self,
        class: &ClassDescriptor,
        intent: &ParsedIntent,
        fetched: &[Fetched],
    ) -> DerivedStats {
        base_stats(class, intent, fetched)
    }
}
