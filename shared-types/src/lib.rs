use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sentinel a backend reports from its health endpoint once it accepts submissions.
pub const HEALTH_OK: &str = "OK";

/// Field values of a lead-capture form, keyed by the field name the backend expects.
///
/// Serializes as a flat JSON object, e.g. `{"brandName": "Acme", "email": "..."}`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FormDraft {
    fields: BTreeMap<String, String>,
}

impl FormDraft {
    /// A draft holding every named field with an empty value.
    pub fn empty(field_names: &[&str]) -> Self {
        Self {
            fields: field_names
                .iter()
                .map(|name| (name.to_string(), String::new()))
                .collect(),
        }
    }

    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.fields.insert(field.to_string(), value.into());
    }

    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Required fields whose value is empty or whitespace, in the order given.
    pub fn missing<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|field| self.get(field).trim().is_empty())
            .collect()
    }
}

/// Body returned by a submission endpoint on both success and failure.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct SubmitResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body returned by a backend health endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HealthReport {
    #[serde(default)]
    pub status: String,
}

impl HealthReport {
    pub fn is_ready(&self) -> bool {
        self.status == HEALTH_OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_has_every_field_blank() {
        let draft = FormDraft::empty(&["name", "email"]);
        assert_eq!(draft.get("name"), "");
        assert_eq!(draft.missing(&["name", "email"]), vec!["name", "email"]);
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "", "email": "" }));
    }

    #[test]
    fn missing_reports_blank_required_fields_in_order() {
        let draft = FormDraft::empty(&["a", "b", "c"])
            .with("b", "x")
            .with("c", "   ");
        assert_eq!(draft.missing(&["a", "b", "c"]), vec!["a", "c"]);
        assert!(draft.missing(&["b"]).is_empty());
    }

    #[test]
    fn draft_serializes_as_flat_object() {
        let draft = FormDraft::empty(&["fullName"]).with("fullName", "Ada");
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json, serde_json::json!({ "fullName": "Ada" }));
    }

    #[test]
    fn health_report_ready_only_on_ok_sentinel() {
        let ok: HealthReport = serde_json::from_str(r#"{"status":"OK"}"#).unwrap();
        let degraded: HealthReport = serde_json::from_str(r#"{"status":"DEGRADED"}"#).unwrap();
        let missing: HealthReport = serde_json::from_str("{}").unwrap();
        assert!(ok.is_ready());
        assert!(!degraded.is_ready());
        assert!(!missing.is_ready());
    }

    #[test]
    fn submit_response_tolerates_missing_message() {
        let reply: SubmitResponse = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        assert_eq!(reply.message, None);
    }
}
