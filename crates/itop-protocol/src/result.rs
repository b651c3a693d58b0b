use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::operation::OperationDescriptor;

/// Response envelope returned by every REST call.
///
/// `code != 0` signals a backend-reported error; `message` then carries the
/// reason. Objects keep the order the backend sent them in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawResult {
    pub code: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(
        default,
        deserialize_with = "ordered_objects",
        serialize_with = "objects_as_map",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub objects: Vec<(String, ObjectRecord)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<OperationDescriptor>,
}

impl RawResult {
    /// Successful result carrying the given objects.
    pub fn with_objects(objects: Vec<(String, ObjectRecord)>) -> Self {
        let message = format!("Found: {}", objects.len());
        Self {
            code: 0,
            message: Some(message),
            objects,
            operations: Vec::new(),
        }
    }

    /// Backend-reported failure.
    pub fn error(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Successfully read records in backend order, without their keys.
    /// Objects carrying their own non-zero code are skipped.
    pub fn records(&self) -> impl Iterator<Item = &ObjectRecord> {
        self.objects
            .iter()
            .map(|(_, record)| record)
            .filter(|record| record.is_success())
    }

    pub fn len(&self) -> usize {
        self.records().count()
    }

    pub fn is_empty(&self) -> bool {
        self.records().next().is_none()
    }

    /// Drop objects whose own code is non-zero.
    pub fn drop_failed(&mut self) {
        self.objects.retain(|(_, record)| record.is_success());
    }
}

/// One object of a `core/get` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    #[serde(default)]
    pub code: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Value>,
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
}

impl ObjectRecord {
    /// Build a record of `class` from `(field, value)` pairs.
    pub fn new<I, K>(class: &str, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self {
            class: Some(class.to_string()),
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Display text of a scalar field; `None` for missing, null, empty or
    /// structured values.
    pub fn text(&self, field: &str) -> Option<String> {
        match self.fields.get(field)? {
            Value::String(s) => {
                let s = s.trim();
                (!s.is_empty()).then(|| s.to_string())
            }
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Linked objects of a list field such as `softwares_list`.
    pub fn list(&self, field: &str) -> &[Value] {
        match self.fields.get(field) {
            Some(Value::Array(items)) => items,
            _ => &[],
        }
    }
}

fn objects_as_map<S>(objects: &[(String, ObjectRecord)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(objects.iter().map(|(k, v)| (k, v)))
}

/// Accepts `null`, a missing field, or an object map, keeping map order.
fn ordered_objects<'de, D>(deserializer: D) -> Result<Vec<(String, ObjectRecord)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ObjectsVisitor;

    impl<'de> Visitor<'de> for ObjectsVisitor {
        type Value = Vec<(String, ObjectRecord)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of object key to record, or null")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_none<E>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_map(self)
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, record)) = map.next_entry::<String, ObjectRecord>()? {
                out.push((key, record));
            }
            Ok(out)
        }
    }

    deserializer.deserialize_option(ObjectsVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_preserves_object_order() {
        let body = json!({
            "code": 0,
            "message": "Found: 2",
            "objects": {
                "Server::9": {"code": 0, "message": "", "class": "Server", "key": "9",
                               "fields": {"name": "web-09"}},
                "Server::10": {"code": 0, "message": "", "class": "Server", "key": "10",
                                "fields": {"name": "web-10"}}
            }
        });
        let raw: RawResult = serde_json::from_value(body).unwrap();
        assert!(raw.is_success());
        let keys: Vec<&str> = raw.objects.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Server::9", "Server::10"]);
    }

    #[test]
    fn null_objects_is_empty() {
        let raw: RawResult =
            serde_json::from_str(r#"{"code":0,"message":"Found: 0","objects":null}"#).unwrap();
        assert!(raw.is_empty());
        let raw: RawResult = serde_json::from_str(r#"{"code":0}"#).unwrap();
        assert!(raw.is_empty());
    }

    #[test]
    fn error_result_not_success() {
        let raw: RawResult =
            serde_json::from_str(r#"{"code":100,"message":"Unknown class 'Foo'"}"#).unwrap();
        assert!(!raw.is_success());
        assert_eq!(raw.message.as_deref(), Some("Unknown class 'Foo'"));
    }

    #[test]
    fn failed_objects_are_not_records() {
        let body = json!({
            "code": 0,
            "message": "Found: 2",
            "objects": {
                "Server::1": {"code": 0, "fields": {"name": "web-01"}},
                "Server::2": {"code": 1, "message": "access denied", "fields": {}}
            }
        });
        let mut raw: RawResult = serde_json::from_value(body).unwrap();
        assert_eq!(raw.len(), 1);
        let names: Vec<String> = raw.records().filter_map(|r| r.text("name")).collect();
        assert_eq!(names, vec!["web-01"]);

        raw.drop_failed();
        assert_eq!(raw.objects.len(), 1);
        assert!(!raw.is_empty());
    }

    #[test]
    fn operations_listing() {
        let raw: RawResult = serde_json::from_str(
            r#"{"code":0,"operations":[{"verb":"core/get","description":"Search for objects"}]}"#,
        )
        .unwrap();
        assert_eq!(raw.operations.len(), 1);
        assert_eq!(raw.operations[0].verb, "core/get");
    }

    #[test]
    fn text_skips_empty_and_null() {
        let record = ObjectRecord::new(
            "PC",
            [
                ("name", json!("pc-001")),
                ("ram", json!(16)),
                ("serialnumber", json!("")),
                ("location_name", Value::Null),
            ],
        );
        assert_eq!(record.text("name").as_deref(), Some("pc-001"));
        assert_eq!(record.text("ram").as_deref(), Some("16"));
        assert!(record.text("serialnumber").is_none());
        assert!(record.text("location_name").is_none());
        assert!(record.text("missing").is_none());
    }

    #[test]
    fn list_field_access() {
        let record = ObjectRecord::new(
            "Server",
            [(
                "softwares_list",
                json!([{"software_id_friendlyname": "MySQL 8"}]),
            )],
        );
        assert_eq!(record.list("softwares_list").len(), 1);
        assert!(record.list("name").is_empty());
    }

    #[test]
    fn serialize_writes_object_map() {
        let raw = RawResult::with_objects(vec![(
            "PC::1".into(),
            ObjectRecord::new("PC", [("name", json!("pc-001"))]),
        )]);
        let json = serde_json::to_value(&raw).unwrap();
        assert_eq!(json["objects"]["PC::1"]["fields"]["name"], "pc-001");
        let back: RawResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn with_objects_reports_count() {
        let raw = RawResult::with_objects(vec![("PC::1".into(), ObjectRecord::default())]);
        assert_eq!(raw.message.as_deref(), Some("Found: 1"));
        assert_eq!(raw.len(), 1);
    }
}
