//! Ticket family: UserRequest, Ticket, Incident, Problem, Change.

use async_trait::async_trait;

use super::{ClassHandler, Fetched, base_stats};
use crate::intent::ParsedIntent;
use crate::stats::{self, DerivedStats};
use crate::taxonomy::{ClassDescriptor, SlaProfile};

/// Adds SLA breach counts and on-time completion to the shared statistics.
pub struct TicketHandler;

#[async_trait]
impl ClassHandler for TicketHandler {
    fn name(&self) -> &'static str {
        "ticket"
    }

    fn derive_stats(
        &self,
        class: &ClassDescriptor,
        intent: &ParsedIntent,
        fetched: &[Fetched],
    ) -> DerivedStats {
        let mut derived = base_stats(class, intent, fetched);
        let records = || fetched.iter().flat_map(|f| f.records());

        if let Some(SlaProfile::PassedFlags { ttr_field, .. }) = &class.sla {
            derived.sla = Some(stats::sla_stats(records(), ttr_field));
        }
        derived.completion = stats::completion(records(), class);
        derived
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::QueryBuilder;
    use crate::handlers::fetch;
    use crate::handlers::test_support::{intent, result};
    use crate::stats::Rate;
    use crate::taxonomy::Taxonomy;
    use itop_client::MockBackend;

    #[tokio::test]
    async fn sla_comparison_counts_each_branch() {
        let tax = Taxonomy::standard();
        let class = tax.get("UserRequest").unwrap();
        let backend = MockBackend::new();
        backend
            .respond(
                "UserRequest",
                result(
                    "UserRequest",
                    &[
                        &[("status", "closed"), ("sla_ttr_passed", "no")],
                        &[("status", "closed"), ("sla_ttr_passed", "no")],
                        &[("status", "closed"), ("sla_ttr_passed", "no")],
                    ],
                ),
            )
            .respond(
                "UserRequest",
                result(
                    "UserRequest",
                    &[&[("status", "assigned"), ("sla_ttr_passed", "yes")]],
                ),
            );

        let intent = intent(&tax, "Tickets closed vs not closed on time based on SLA", "UserRequest");
        let fetched = TicketHandler
            .build_and_fetch(&backend, &QueryBuilder::new(1000), &intent, class)
            .await
            .unwrap();
        let derived = TicketHandler.derive_stats(class, &intent, &fetched);

        assert_eq!(derived.branches.len(), 2);
        assert_eq!(derived.branches[0].label, "Closed on time");
        assert_eq!(derived.branches[0].total, 3);
        assert_eq!(derived.branches[1].label, "Not closed on time");
        assert_eq!(derived.branches[1].total, 1);
        let sla = derived.sla.unwrap();
        assert_eq!((sla.breached, sla.met), (1, 3));
        assert_eq!(sla.breach_rate, Rate::Percent(25.0));
    }

    #[tokio::test]
    async fn change_uses_deadlines() {
        let tax = Taxonomy::standard();
        let class = tax.get("Change").unwrap();
        let backend = MockBackend::new();
        backend.respond(
            "Change",
            result(
                "Change",
                &[
                    &[
                        ("status", "closed"),
                        ("end_date", "2024-03-01 12:00:00"),
                        ("close_date", "2024-03-01 11:00:00"),
                    ],
                    &[("status", "planned")],
                ],
            ),
        );
        let intent = intent(&tax, "changes this month", "Change");
        let fetched = fetch(&backend, &QueryBuilder::new(1000), &intent, class)
            .await
            .unwrap();
        let derived = TicketHandler.derive_stats(class, &intent, &fetched);
        assert!(derived.sla.is_none());
        let completion = derived.completion.unwrap();
        assert_eq!((completion.on_time, completion.late), (1, 0));
        assert_eq!(completion.rate, Rate::Percent(100.0));
    }

    #[test]
    fn empty_result_has_na_rates() {
        let tax = Taxonomy::standard();
        let class = tax.get("Incident").unwrap();
        let intent = intent(&tax, "incidents with SLA breach", "Incident");
        let derived = TicketHandler.derive_stats(class, &intent, &[]);
        assert_eq!(derived.total, 0);
        assert_eq!(derived.sla.unwrap().breach_rate, Rate::NotApplicable);
        assert_eq!(derived.completion.unwrap().rate, Rate::NotApplicable);
    }
}
