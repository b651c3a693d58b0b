//! Built-in class descriptors for a standard iTop data model.

use super::aliases::{
    FieldAliasSet, StatusTerm, VocabTerm, active_status_terms, ci_status_terms,
    criticality_terms, infra_aliases, os_terms, people_aliases, priority_terms, ticket_aliases,
};
use super::{Boost, ClassDescriptor, ClassFamily, SlaProfile};

pub(super) const FALLBACK_CLASS: &str = "UserRequest";

const TICKET_WORDS: &[&str] = &[
    "ticket", "tickets", "request", "requests", "support", "closed", "on time", "breach",
    "breached",
];

pub(super) fn standard_boosts() -> Vec<Boost> {
    let software = &["software", "softwares", "application", "applications", "installed"];
    vec![
        Boost::new(
            "UserRequest",
            &["sla"],
            TICKET_WORDS,
            &["change", "changes", "incident", "incidents"],
        ),
        Boost::new(
            "UserRequest",
            &["team"],
            &["ticket", "tickets", "request", "requests"],
            &["change", "changes", "incident", "incidents", "problem", "problems"],
        ),
        Boost::new("Server", &["server"], software, &[]),
        Boost::new("Server", &["servers"], software, &[]),
    ]
}

pub(super) fn standard_classes() -> Vec<ClassDescriptor> {
    vec![
        user_request(),
        ticket(),
        incident(),
        problem(),
        change(),
        pc(),
        server(),
        virtual_machine(),
        network_device(),
        person(),
        team(),
        organization(),
        generic("FunctionalCI", "Configuration Items", "📋")
            .triggers(&[
                "ci",
                "cis",
                "configuration item",
                "configuration items",
                "functionalci",
                "functional ci",
                "functional cis",
            ])
            .fields(&["name", "finalclass", "org_name", "business_criticity"])
            .vocabulary(criticality_terms())
            .columns(&[
                ("name", "Name", 28),
                ("finalclass", "Type", 18),
                ("org_name", "Organization", 20),
                ("business_criticity", "Criticality", 12),
            ]),
        generic("Location", "Locations", "📍")
            .triggers(&["location", "locations", "site", "sites"])
            .fields(&["name", "status", "org_name", "city", "country", "address"])
            .status("status", active_status_terms())
            .columns(&[
                ("name", "Name", 24),
                ("status", "Status", 10),
                ("city", "City", 16),
                ("country", "Country", 14),
            ]),
        generic("Rack", "Racks", "🗄️")
            .triggers(&["rack", "racks"])
            .fields(&["name", "status", "org_name", "location_name", "nb_u"])
            .status("status", ci_status_terms())
            .columns(&[
                ("name", "Name", 20),
                ("status", "Status", 14),
                ("location_name", "Location", 20),
                ("nb_u", "U", 4),
            ]),
        generic("ApplicationSolution", "Application Solutions", "🧩")
            .triggers(&[
                "application",
                "applications",
                "app",
                "apps",
                "application solution",
                "application solutions",
            ])
            .fields(&["name", "status", "org_name", "business_criticity", "move2production"])
            .status("status", active_status_terms())
            .vocabulary(criticality_terms()),
        generic("Software", "Software", "💾")
            .triggers(&[
                "software",
                "softwares",
                "software catalog",
                "software instance",
                "software instances",
            ])
            .fields(&["name", "vendor", "version", "type"])
            .columns(&[
                ("name", "Name", 28),
                ("vendor", "Vendor", 18),
                ("version", "Version", 12),
                ("type", "Type", 16),
            ]),
        generic("Service", "Services", "🛎️")
            .triggers(&["service", "services", "business service", "business services"])
            .fields(&["name", "status", "org_name", "servicefamily_name", "description"])
            .status(
                "status",
                vec![
                    StatusTerm::new(&["production"], &["production"]),
                    StatusTerm::new(&["implementation"], &["implementation"]),
                    StatusTerm::new(&["obsolete"], &["obsolete"]),
                ],
            ),
        generic("SLA", "SLAs", "📜")
            .triggers(&["slas", "service level agreement", "service level agreements"])
            .fields(&["name", "org_name", "description"]),
        generic("Contract", "Contracts", "📑")
            .triggers(&[
                "contract",
                "contracts",
                "customer contract",
                "customer contracts",
                "provider contract",
                "provider contracts",
            ])
            .fields(&["name", "finalclass", "org_name", "status", "start_date", "end_date"]),
        generic("Hypervisor", "Hypervisors", "🧱")
            .triggers(&["hypervisor", "hypervisors"])
            .fields(&["name", "status", "org_name", "farm_name", "server_name"])
            .status("status", ci_status_terms()),
        generic("Contact", "Contacts", "📇")
            .triggers(&["all contacts", "contact list", "contact directory"])
            .fields(&["name", "finalclass", "org_name", "email", "phone", "status"])
            .status("status", active_status_terms())
            .columns(&[
                ("name", "Name", 24),
                ("finalclass", "Type", 10),
                ("org_name", "Organization", 20),
                ("email", "Email", 28),
            ]),
    ]
}

fn generic(name: &str, plural: &str, icon: &str) -> ClassDescriptor {
    ClassDescriptor::new(name, plural, ClassFamily::Generic, icon).aliases(
        FieldAliasSet::new()
            .alias(&["status", "state"], "status")
            .named(
                &["organization", "organisation", "org", "company"],
                "org_name",
                "Organization",
                "name",
            )
            .alias(&["type", "class"], "finalclass")
            .alias(&["criticality", "criticity"], "business_criticity")
            .named(&["location", "site"], "location_name", "Location", "name"),
    )
}

// ── Ticket family ───────────────────────────────────────────────

const TICKET_COLUMNS: &[(&str, &str, usize)] = &[
    ("ref", "Ref", 10),
    ("title", "Title", 36),
    ("status", "Status", 10),
    ("priority", "Prio", 4),
    ("caller_name", "Caller", 18),
    ("agent_name", "Agent", 18),
    ("start_date", "Created", 19),
];

const TICKET_DETAIL: &[(&str, &str, &str)] = &[
    ("status", "📌", "Status"),
    ("priority", "⚡", "Priority"),
    ("caller_name", "👤", "Caller"),
    ("agent_name", "🧑‍🔧", "Agent"),
    ("team_name", "👥", "Team"),
    ("org_name", "🏢", "Organization"),
    ("start_date", "📅", "Created"),
    ("resolution_date", "✅", "Resolved"),
    ("sla_tto_passed", "⏰", "SLA TTO breached"),
    ("sla_ttr_passed", "⏰", "SLA TTR breached"),
];

fn passed_flags() -> SlaProfile {
    SlaProfile::PassedFlags {
        ttr_field: "sla_ttr_passed".into(),
        tto_field: "sla_tto_passed".into(),
    }
}

fn open_ticket_terms() -> Vec<StatusTerm> {
    vec![
        StatusTerm::new(&["new"], &["new"]),
        StatusTerm::new(&["assigned"], &["assigned"]),
        StatusTerm::new(&["pending", "waiting"], &["pending"]),
        StatusTerm::new(&["resolved"], &["resolved"]),
        StatusTerm::new(&["closed"], &["closed"]),
        StatusTerm::new(&["open", "unresolved", "active"], &["new", "assigned", "pending"]),
    ]
}

fn user_request() -> ClassDescriptor {
    ClassDescriptor::new("UserRequest", "User Requests", ClassFamily::Ticket, "🎫")
        .triggers(&[
            "user request",
            "user requests",
            "support ticket",
            "support tickets",
            "request",
            "requests",
            "support",
            "service request",
            "service requests",
        ])
        .fields(&[
            "ref",
            "title",
            "status",
            "priority",
            "caller_name",
            "agent_name",
            "team_name",
            "org_name",
            "start_date",
            "resolution_date",
            "sla_tto_passed",
            "sla_ttr_passed",
        ])
        .status("status", open_ticket_terms())
        .completed(&["resolved", "closed"])
        .vocabulary(priority_terms())
        .aliases(ticket_aliases("status"))
        .names("org_name", "Organization", "name")
        .dated("start_date")
        .sla(passed_flags())
        .title("ref", Some("title"))
        .columns(TICKET_COLUMNS)
        .detail(TICKET_DETAIL)
}

fn ticket() -> ClassDescriptor {
    ClassDescriptor::new("Ticket", "Tickets", ClassFamily::Ticket, "🎫")
        .triggers(&["ticket", "tickets"])
        .fields(&[
            "ref",
            "title",
            "operational_status",
            "finalclass",
            "caller_name",
            "agent_name",
            "team_name",
            "org_name",
            "start_date",
        ])
        .status(
            "operational_status",
            vec![
                StatusTerm::new(&["open", "ongoing", "active", "unresolved"], &["ongoing"]),
                StatusTerm::new(&["resolved"], &["resolved"]),
                StatusTerm::new(&["closed"], &["closed"]),
            ],
        )
        .completed(&["resolved", "closed"])
        .aliases(ticket_aliases("operational_status"))
        .names("org_name", "Organization", "name")
        .dated("start_date")
        .title("ref", Some("title"))
        .columns(&[
            ("ref", "Ref", 10),
            ("title", "Title", 36),
            ("finalclass", "Type", 12),
            ("operational_status", "Status", 10),
            ("agent_name", "Agent", 18),
            ("start_date", "Created", 19),
        ])
        .detail(&[
            ("operational_status", "📌", "Status"),
            ("caller_name", "👤", "Caller"),
            ("agent_name", "🧑‍🔧", "Agent"),
            ("team_name", "👥", "Team"),
            ("org_name", "🏢", "Organization"),
            ("start_date", "📅", "Created"),
        ])
}

fn incident() -> ClassDescriptor {
    ClassDescriptor::new("Incident", "Incidents", ClassFamily::Ticket, "🚨")
        .triggers(&["incident", "incidents", "major incident", "major incidents"])
        .fields(&[
            "ref",
            "title",
            "status",
            "priority",
            "impact",
            "urgency",
            "caller_name",
            "agent_name",
            "team_name",
            "org_name",
            "start_date",
            "resolution_date",
            "sla_tto_passed",
            "sla_ttr_passed",
        ])
        .status("status", open_ticket_terms())
        .completed(&["resolved", "closed"])
        .vocabulary(priority_terms())
        .aliases(ticket_aliases("status").alias(&["impact"], "impact").alias(&["urgency"], "urgency"))
        .names("org_name", "Organization", "name")
        .dated("start_date")
        .sla(passed_flags())
        .title("ref", Some("title"))
        .columns(TICKET_COLUMNS)
        .detail(TICKET_DETAIL)
}

fn problem() -> ClassDescriptor {
    ClassDescriptor::new("Problem", "Problems", ClassFamily::Ticket, "🔍")
        .triggers(&[
            "problem",
            "problems",
            "known error",
            "known errors",
            "root cause",
            "root cause analysis",
        ])
        .fields(&[
            "ref",
            "title",
            "status",
            "priority",
            "impact",
            "agent_name",
            "team_name",
            "org_name",
            "service_name",
            "start_date",
            "close_date",
        ])
        .status(
            "status",
            vec![
                StatusTerm::new(&["new"], &["new"]),
                StatusTerm::new(&["assigned"], &["assigned"]),
                StatusTerm::new(&["resolved"], &["resolved"]),
                StatusTerm::new(&["closed"], &["closed"]),
                StatusTerm::new(&["open", "unresolved", "active"], &["new", "assigned"]),
            ],
        )
        .completed(&["resolved", "closed"])
        .vocabulary(priority_terms())
        .aliases(ticket_aliases("status"))
        .names("org_name", "Organization", "name")
        .dated("start_date")
        .title("ref", Some("title"))
        .columns(&[
            ("ref", "Ref", 10),
            ("title", "Title", 36),
            ("status", "Status", 10),
            ("priority", "Prio", 4),
            ("service_name", "Service", 18),
            ("start_date", "Created", 19),
        ])
        .detail(&[
            ("status", "📌", "Status"),
            ("priority", "⚡", "Priority"),
            ("service_name", "🛎️", "Service"),
            ("agent_name", "🧑‍🔧", "Agent"),
            ("team_name", "👥", "Team"),
            ("org_name", "🏢", "Organization"),
            ("start_date", "📅", "Created"),
            ("close_date", "✅", "Closed"),
        ])
}

fn change() -> ClassDescriptor {
    ClassDescriptor::new("Change", "Changes", ClassFamily::Ticket, "🔄")
        .triggers(&[
            "change",
            "changes",
            "change request",
            "change requests",
            "routine change",
            "routine changes",
            "normal change",
            "normal changes",
            "emergency change",
            "emergency changes",
        ])
        .fields(&[
            "ref",
            "title",
            "status",
            "finalclass",
            "agent_name",
            "team_name",
            "org_name",
            "start_date",
            "end_date",
            "close_date",
            "outage",
        ])
        .status(
            "status",
            vec![
                StatusTerm::new(&["new"], &["new"]),
                StatusTerm::new(&["planned"], &["planned"]),
                StatusTerm::new(&["approved"], &["approved"]),
                StatusTerm::new(&["rejected"], &["rejected"]),
                StatusTerm::new(&["implemented"], &["implemented"]),
                StatusTerm::new(&["closed"], &["closed"]),
                StatusTerm::new(&["completed", "done", "finished"], &["implemented", "closed"]),
                StatusTerm::new(&["open", "pending"], &["new", "assigned", "planned", "approved"]),
            ],
        )
        .completed(&["implemented", "closed"])
        .vocabulary(vec![
            VocabTerm::exact(&["emergency"], "finalclass", "EmergencyChange"),
            VocabTerm::exact(&["normal"], "finalclass", "NormalChange"),
            VocabTerm::exact(&["routine"], "finalclass", "RoutineChange"),
        ])
        .aliases(ticket_aliases("status").alias(&["outage"], "outage"))
        .names("org_name", "Organization", "name")
        .dated("start_date")
        .sla(SlaProfile::Deadline {
            due_field: "end_date".into(),
            done_field: "close_date".into(),
        })
        .title("ref", Some("title"))
        .columns(&[
            ("ref", "Ref", 10),
            ("title", "Title", 34),
            ("finalclass", "Type", 16),
            ("status", "Status", 12),
            ("start_date", "Start", 19),
            ("end_date", "End", 19),
        ])
        .detail(&[
            ("status", "📌", "Status"),
            ("finalclass", "🏷️", "Type"),
            ("agent_name", "🧑‍🔧", "Agent"),
            ("team_name", "👥", "Team"),
            ("org_name", "🏢", "Organization"),
            ("start_date", "📅", "Start"),
            ("end_date", "🏁", "Planned end"),
            ("close_date", "✅", "Closed"),
            ("outage", "⚠️", "Planned outage"),
        ])
}

// ── Infrastructure ──────────────────────────────────────────────

fn pc() -> ClassDescriptor {
    ClassDescriptor::new("PC", "PCs", ClassFamily::Infrastructure, "💻")
        .triggers(&[
            "pc",
            "pcs",
            "computer",
            "computers",
            "desktop",
            "desktops",
            "laptop",
            "laptops",
            "workstation",
            "workstations",
            "end user device",
            "end user devices",
        ])
        .fields(&[
            "name",
            "status",
            "type",
            "org_name",
            "location_name",
            "brand_name",
            "model_name",
            "osfamily_name",
            "osversion_name",
            "cpu",
            "ram",
            "serialnumber",
            "business_criticity",
        ])
        .status("status", ci_status_terms())
        .vocabulary(vec![
            VocabTerm::exact(&["desktop", "desktops"], "type", "desktop"),
            VocabTerm::exact(&["laptop", "laptops"], "type", "laptop"),
        ])
        .vocabulary(criticality_terms())
        .vocabulary(os_terms())
        .aliases(infra_aliases().alias(&["type", "form factor"], "type"))
        .columns(&[
            ("name", "Name", 20),
            ("status", "Status", 14),
            ("type", "Type", 8),
            ("org_name", "Organization", 18),
            ("location_name", "Location", 16),
            ("osfamily_name", "OS", 12),
        ])
        .detail(&[
            ("status", "📌", "Status"),
            ("type", "🏷️", "Type"),
            ("org_name", "🏢", "Organization"),
            ("location_name", "📍", "Location"),
            ("brand_name", "🏭", "Brand"),
            ("model_name", "🏭", "Model"),
            ("osfamily_name", "💿", "OS"),
            ("osversion_name", "💿", "OS version"),
            ("cpu", "⚙️", "CPU"),
            ("ram", "💾", "RAM"),
            ("serialnumber", "🔢", "Serial"),
            ("business_criticity", "📊", "Criticality"),
        ])
        .software(&["name", "status", "org_name", "osfamily_name", "osversion_name", "softwares_list"])
}

fn server() -> ClassDescriptor {
    ClassDescriptor::new("Server", "Servers", ClassFamily::Infrastructure, "🖥️")
        .triggers(&[
            "server",
            "servers",
            "physical server",
            "physical servers",
            "datacenter",
            "datacenter device",
            "datacenter devices",
        ])
        .fields(&[
            "name",
            "status",
            "org_name",
            "location_name",
            "rack_name",
            "brand_name",
            "model_name",
            "osfamily_name",
            "osversion_name",
            "cpu",
            "ram",
            "managementip",
            "business_criticity",
            "serialnumber",
        ])
        .status("status", ci_status_terms())
        .vocabulary(criticality_terms())
        .vocabulary(os_terms())
        .aliases(infra_aliases().alias(&["rack"], "rack_name"))
        .columns(&[
            ("name", "Name", 22),
            ("status", "Status", 14),
            ("org_name", "Organization", 18),
            ("location_name", "Location", 16),
            ("osfamily_name", "OS", 12),
            ("business_criticity", "Crit.", 8),
        ])
        .detail(&[
            ("status", "📌", "Status"),
            ("org_name", "🏢", "Organization"),
            ("location_name", "📍", "Location"),
            ("rack_name", "🗄️", "Rack"),
            ("brand_name", "🏭", "Brand"),
            ("model_name", "🏭", "Model"),
            ("osfamily_name", "💿", "OS"),
            ("osversion_name", "💿", "OS version"),
            ("cpu", "⚙️", "CPU"),
            ("ram", "💾", "RAM"),
            ("managementip", "🌐", "Management IP"),
            ("business_criticity", "📊", "Criticality"),
        ])
        .software(&["name", "status", "org_name", "osfamily_name", "osversion_name", "softwares_list"])
}

fn virtual_machine() -> ClassDescriptor {
    ClassDescriptor::new("VirtualMachine", "Virtual Machines", ClassFamily::Infrastructure, "☁️")
        .triggers(&[
            "vm",
            "vms",
            "virtual",
            "virtual machine",
            "virtual machines",
            "virtual server",
            "virtual servers",
        ])
        .fields(&[
            "name",
            "status",
            "org_name",
            "virtualhost_name",
            "osfamily_name",
            "osversion_name",
            "cpu",
            "ram",
            "managementip",
            "business_criticity",
        ])
        .status("status", ci_status_terms())
        .vocabulary(criticality_terms())
        .vocabulary(os_terms())
        .aliases(infra_aliases().alias(&["host", "virtual host", "hypervisor", "farm"], "virtualhost_name"))
        .columns(&[
            ("name", "Name", 22),
            ("status", "Status", 14),
            ("virtualhost_name", "Host", 18),
            ("osfamily_name", "OS", 12),
            ("cpu", "CPU", 4),
            ("ram", "RAM", 6),
        ])
        .detail(&[
            ("status", "📌", "Status"),
            ("org_name", "🏢", "Organization"),
            ("virtualhost_name", "🧱", "Host"),
            ("osfamily_name", "💿", "OS"),
            ("osversion_name", "💿", "OS version"),
            ("cpu", "⚙️", "CPU"),
            ("ram", "💾", "RAM"),
            ("managementip", "🌐", "Management IP"),
            ("business_criticity", "📊", "Criticality"),
        ])
        .software(&["name", "status", "org_name", "osfamily_name", "osversion_name", "softwares_list"])
}

fn network_device() -> ClassDescriptor {
    ClassDescriptor::new("NetworkDevice", "Network Devices", ClassFamily::Infrastructure, "🌐")
        .triggers(&[
            "network",
            "network device",
            "network devices",
            "network switch",
            "network switches",
            "switch",
            "switches",
            "router",
            "routers",
            "firewall",
            "firewalls",
            "network equipment",
        ])
        .fields(&[
            "name",
            "status",
            "networkdevicetype_name",
            "org_name",
            "location_name",
            "rack_name",
            "brand_name",
            "model_name",
            "managementip",
            "iosversion_name",
            "business_criticity",
        ])
        .status("status", ci_status_terms())
        .vocabulary(vec![
            VocabTerm::contains(&["switch", "switches"], "networkdevicetype_name", "switch"),
            VocabTerm::contains(&["router", "routers"], "networkdevicetype_name", "router"),
            VocabTerm::contains(&["firewall", "firewalls"], "networkdevicetype_name", "firewall"),
        ])
        .vocabulary(criticality_terms())
        .aliases(
            infra_aliases()
                .alias(&["type", "device type"], "networkdevicetype_name")
                .alias(&["rack"], "rack_name")
                .alias(&["ios", "firmware"], "iosversion_name"),
        )
        .columns(&[
            ("name", "Name", 22),
            ("networkdevicetype_name", "Type", 12),
            ("status", "Status", 14),
            ("location_name", "Location", 16),
            ("managementip", "Mgmt IP", 15),
        ])
        .detail(&[
            ("status", "📌", "Status"),
            ("networkdevicetype_name", "🏷️", "Type"),
            ("org_name", "🏢", "Organization"),
            ("location_name", "📍", "Location"),
            ("rack_name", "🗄️", "Rack"),
            ("brand_name", "🏭", "Brand"),
            ("model_name", "🏭", "Model"),
            ("managementip", "🌐", "Management IP"),
            ("iosversion_name", "💿", "Firmware"),
            ("business_criticity", "📊", "Criticality"),
        ])
        .software(&["name", "status", "org_name", "iosversion_name"])
}

// ── People & organisations ──────────────────────────────────────

fn person() -> ClassDescriptor {
    ClassDescriptor::new("Person", "People", ClassFamily::People, "👤")
        .triggers(&[
            "person",
            "persons",
            "people",
            "contact",
            "contacts",
            "user",
            "users",
            "employee",
            "employees",
            "staff",
        ])
        .fields(&[
            "friendlyname",
            "email",
            "phone",
            "function",
            "org_name",
            "location_name",
            "manager_name",
            "status",
        ])
        .status("status", active_status_terms())
        .vocabulary(vec![VocabTerm::contains(
            &["manager", "managers"],
            "function",
            "manager",
        )])
        .aliases(people_aliases().named(&["manager", "reports to"], "manager_name", "Person", "friendlyname"))
        .names("friendlyname", "Person", "friendlyname")
        .title("friendlyname", None)
        .columns(&[
            ("friendlyname", "Name", 24),
            ("email", "Email", 28),
            ("function", "Function", 18),
            ("org_name", "Organization", 18),
            ("status", "Status", 8),
        ])
        .detail(&[
            ("email", "📧", "Email"),
            ("phone", "📞", "Phone"),
            ("function", "💼", "Function"),
            ("org_name", "🏢", "Organization"),
            ("location_name", "📍", "Location"),
            ("manager_name", "👔", "Manager"),
            ("status", "📌", "Status"),
        ])
}

fn team() -> ClassDescriptor {
    ClassDescriptor::new("Team", "Teams", ClassFamily::People, "👥")
        .triggers(&["team", "teams"])
        .fields(&["name", "email", "phone", "function", "org_name", "status"])
        .status("status", active_status_terms())
        .aliases(people_aliases())
        .columns(&[
            ("name", "Name", 24),
            ("email", "Email", 28),
            ("org_name", "Organization", 20),
            ("status", "Status", 8),
        ])
        .detail(&[
            ("email", "📧", "Email"),
            ("phone", "📞", "Phone"),
            ("function", "💼", "Function"),
            ("org_name", "🏢", "Organization"),
            ("status", "📌", "Status"),
        ])
}

fn organization() -> ClassDescriptor {
    ClassDescriptor::new("Organization", "Organizations", ClassFamily::People, "🏢")
        .triggers(&[
            "organization",
            "organizations",
            "organisation",
            "organisations",
            "org",
            "orgs",
            "company",
            "companies",
        ])
        .fields(&["name", "code", "status", "parent_name", "deliverymodel_name"])
        .status("status", active_status_terms())
        .aliases(
            FieldAliasSet::new()
                .alias(&["status", "state"], "status")
                .named(&["parent", "parent organization"], "parent_name", "Organization", "name")
                .alias(&["delivery model", "model"], "deliverymodel_name"),
        )
        .columns(&[
            ("name", "Name", 28),
            ("code", "Code", 10),
            ("parent_name", "Parent", 22),
            ("status", "Status", 8),
        ])
        .detail(&[
            ("code", "🔖", "Code"),
            ("parent_name", "🏛️", "Parent"),
            ("deliverymodel_name", "📦", "Delivery model"),
            ("status", "📌", "Status"),
        ])
}
