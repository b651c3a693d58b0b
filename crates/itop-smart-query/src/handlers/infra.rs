//! Infrastructure family: PC, Server, VirtualMachine, NetworkDevice.

use async_trait::async_trait;

use super::{ClassHandler, Fetched, base_stats};
use crate::intent::{Focus, ParsedIntent};
use crate::stats::{self, DerivedStats};
use crate::taxonomy::ClassDescriptor;

pub const CRITICALITY_FIELD: &str = "business_criticity";
pub const SOFTWARE_FIELD: &str = "softwares_list";

/// Adds a criticality breakdown and, in software focus, installed-software
/// counts.
pub struct InfraHandler;

#[async_trait]
impl ClassHandler for InfraHandler {
    fn name(&self) -> &'static str {
        "infrastructure"
    }

    fn derive_stats(
        &self,
        class: &ClassDescriptor,
        intent: &ParsedIntent,
        fetched: &[Fetched],
    ) -> DerivedStats {
        let mut derived = base_stats(class, intent, fetched);
        let records = || fetched.iter().flat_map(|f| f.records());

        if class.default_fields.iter().any(|f| f == CRITICALITY_FIELD) {
            derived.criticality = stats::breakdown(records(), CRITICALITY_FIELD);
        }
        if intent.focus == Focus::Software {
            derived.software_instances = Some(stats::software_instances(records(), SOFTWARE_FIELD));
        }
        derived
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::QueryBuilder;
    use crate::handlers::test_support::{intent, result};
    use crate::taxonomy::Taxonomy;
    use itop_client::MockBackend;
    use itop_protocol::{ObjectRecord, RawResult};
    use serde_json::json;

    #[tokio::test]
    async fn criticality_breakdown() {
        let tax = Taxonomy::standard();
        let class = tax.get("Server").unwrap();
        let backend = MockBackend::new();
        backend.respond(
            "Server",
            result(
                "Server",
                &[
                    &[("name", "web-01"), ("business_criticity", "high")],
                    &[("name", "web-02"), ("business_criticity", "high")],
                    &[("name", "db-01"), ("business_criticity", "critical")],
                ],
            ),
        );
        let intent = intent(&tax, "Show all production servers", "Server");
        let fetched = InfraHandler
            .build_and_fetch(&backend, &QueryBuilder::new(1000), &intent, class)
            .await
            .unwrap();
        let derived = InfraHandler.derive_stats(class, &intent, &fetched);
        assert_eq!(derived.criticality[0].value, "high");
        assert_eq!(derived.criticality[0].count, 2);
        assert!(derived.software_instances.is_none());
    }

    #[tokio::test]
    async fn software_focus_counts_instances() {
        let tax = Taxonomy::standard();
        let class = tax.get("Server").unwrap();
        let backend = MockBackend::new();
        let record = ObjectRecord::new(
            "Server",
            vec![
                ("name", json!("web-01")),
                (
                    "softwares_list",
                    json!([
                        {"software_name": "nginx", "version": "1.24"},
                        {"software_name": "PostgreSQL", "version": "16"},
                        {"software_name": "Redis", "version": "7"}
                    ]),
                ),
            ],
        );
        backend.respond("Server", RawResult::with_objects(vec![("Server::1".into(), record)]));

        let intent = intent(&tax, "software installed on server web-01", "Server");
        let fetched = InfraHandler
            .build_and_fetch(&backend, &QueryBuilder::new(1000), &intent, class)
            .await
            .unwrap();
        let derived = InfraHandler.derive_stats(class, &intent, &fetched);
        assert_eq!(derived.software_instances, Some(3));
    }
}
