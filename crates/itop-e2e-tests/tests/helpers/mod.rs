//! Shared test harness for E2E integration tests.
//!
//! Runs a wiremock iTop instance and points the real `ITopClient` and
//! `SmartQueryProcessor` at it, so every query crosses the HTTP boundary.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{Map, Value, json};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use itop_client::{ClientConfig, ITopClient};
use itop_smart_query::{FormattedReport, SmartQueryOptions, SmartQueryProcessor};

pub const ENDPOINT: &str = "/webservices/rest.php";

/// Fixed processing time: Friday 2024-03-15 14:30:00.
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap()
}

/// Form-encoded `"class":"{class}"` as it appears in the `json_data` field.
pub fn class_marker(class: &str) -> String {
    format!("%22class%22%3A%22{class}%22")
}

/// iTop `core/get` envelope with one object per row.
pub fn objects(class: &str, rows: &[&[(&str, &str)]]) -> Value {
    found(class, rows, rows.len())
}

/// Like `objects`, but the message reports `total` matches.
pub fn found(class: &str, rows: &[&[(&str, &str)]], total: usize) -> Value {
    let mut map = Map::new();
    for (i, fields) in rows.iter().enumerate() {
        let fields: Map<String, Value> = fields
            .iter()
            .map(|(k, v)| (k.to_string(), json!(v)))
            .collect();
        map.insert(
            format!("{class}::{}", i + 1),
            json!({"code": 0, "message": "", "class": class, "key": (i + 1).to_string(), "fields": fields}),
        );
    }
    json!({"code": 0, "message": format!("Found: {total}"), "objects": map})
}

/// End-to-end harness: mock iTop + real client + processor.
pub struct ITopHarness {
    pub server: MockServer,
    pub processor: SmartQueryProcessor,
}

impl ITopHarness {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let client = ITopClient::new(ClientConfig {
            base_url: server.uri(),
            user: "admin".into(),
            password: "secret".into(),
            version: "1.4".into(),
            timeout_secs: 2,
        })
        .unwrap();
        let processor = SmartQueryProcessor::with_defaults(Arc::new(client)).with_clock(fixed_now);
        Self { server, processor }
    }

    /// Answer every `core/get` on `class` with `body`.
    pub async fn on_class(&self, class: &str, body: Value) {
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(body_string_contains(class_marker(class)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer `core/get` on `class` whose form body also contains `fragment`.
    pub async fn on_class_matching(&self, class: &str, fragment: &str, body: Value) {
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(body_string_contains(class_marker(class)))
            .and(body_string_contains(fragment))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn ask(&self, text: &str) -> String {
        self.processor
            .smart_query(text, &SmartQueryOptions::default())
            .await
    }

    pub async fn report(&self, text: &str, options: SmartQueryOptions) -> FormattedReport {
        self.processor.process(text, &options).await.unwrap()
    }

    /// Raw form bodies of every request the mock received.
    pub async fn bodies(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| String::from_utf8_lossy(&r.body).into_owned())
            .collect()
    }
}
