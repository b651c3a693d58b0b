use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Verb for the generic object query.
pub const CORE_GET: &str = "core/get";
/// Verb for the capability listing.
pub const LIST_OPERATIONS: &str = "list_operations";

/// A single REST operation, serialized into the `json_data` form field.
///
/// The verb is kept apart from its parameters so the wire shape stays flat:
/// `{"operation": "core/get", "class": "Server", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRequest {
    pub operation: String,
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

impl OperationRequest {
    /// Build a `core/get` request for `class` filtered by an OQL `key`.
    pub fn core_get(class: &str, key: &str, output_fields: &[String], limit: u32) -> Self {
        let mut params = Map::new();
        params.insert("class".into(), Value::String(class.to_string()));
        params.insert("key".into(), Value::String(key.to_string()));
        params.insert(
            "output_fields".into(),
            Value::String(output_fields.join(", ")),
        );
        params.insert("limit".into(), Value::from(limit));
        Self {
            operation: CORE_GET.into(),
            params,
        }
    }

    /// Build a `list_operations` request (no parameters).
    pub fn list_operations() -> Self {
        Self {
            operation: LIST_OPERATIONS.into(),
            params: Map::new(),
        }
    }

    /// Target class of a `core/get`, if any.
    pub fn class(&self) -> Option<&str> {
        self.params.get("class").and_then(Value::as_str)
    }

    /// OQL key of a `core/get`, if any.
    pub fn key(&self) -> Option<&str> {
        self.params.get("key").and_then(Value::as_str)
    }

    /// Requested result cap, if any.
    pub fn limit(&self) -> Option<u64> {
        self.params.get("limit").and_then(Value::as_u64)
    }
}

/// One entry of the backend's capability listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationDescriptor {
    #[serde(default)]
    pub verb: String,
    #[serde(default)]
    pub description: String,
}
