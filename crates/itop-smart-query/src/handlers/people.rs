//! People and organisations: Person, Team, Organization.

use async_trait::async_trait;

use super::{ClassHandler, Fetched, base_stats};
use crate::intent::ParsedIntent;
use crate::stats::{self, DerivedStats};
use crate::taxonomy::ClassDescriptor;

const ACTIVE_VALUES: &[&str] = &["active"];

/// Adds the active / inactive split.
pub struct PeopleHandler;

#[async_trait]
impl ClassHandler for PeopleHandler {
    fn name(&self) -> &'static str {
        "people"
    }

    fn derive_stats(
        &self,
        class: &ClassDescriptor,
        intent: &ParsedIntent,
        fetched: &[Fetched],
    ) -> DerivedStats {
        let mut derived = base_stats(class, intent, fetched);
        if let Some(field) = class.status_field.as_deref() {
            let records = fetched.iter().flat_map(|f| f.records());
            derived.activity = Some(stats::activity(records, field, ACTIVE_VALUES));
        }
        derived
    }
}
