#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Cendana admin dashboard.
//!
//! Every non-2xx XHR response from the backend carries an [`ApiFailure`]
//! body, and every server-paged table endpoint answers with a [`TablePage`].
//! The UI crate deserializes against these types so the dispatch logic never
//! touches raw JSON shapes; keeping them in one crate keeps the contract a
//! single source of truth.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Failure payload attached to every non-2xx XHR response.
///
/// The wire shape is adjacently tagged: `errorType` selects the variant and
/// `result` carries its payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "errorType", content = "result", rename_all = "camelCase")]
pub enum ApiFailure {
    /// Plain error message surfaced to the user as a single alert.
    AjaxNormalError(String),
    /// Per-field validation failures surfaced as stacked toasts, in order.
    ValidationError(Vec<ValidationIssue>),
    /// Server-directed navigation, executed client-side through a form post.
    AjaxRedirect(RedirectSpec),
}

/// One rejected field from a validation failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationIssue {
    /// Name of the offending form field or query argument.
    pub key: String,
    /// Value the client submitted, echoed back verbatim.
    pub value: Value,
    /// Human-readable description of the validation failure.
    pub message: String,
}

impl ValidationIssue {
    /// One-line rendering used for stacked toasts: `key: value -> message`.
    ///
    /// String values render without surrounding quotes; everything else uses
    /// its JSON encoding.
    #[must_use]
    pub fn summary(&self) -> String {
        let value = match &self.value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        format!("{}: {} -> {}", self.key, value, self.message)
    }
}

/// Redirect instruction returned from an XHR handler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RedirectSpec {
    /// Destination URL for the navigation.
    pub location: String,
    /// HTTP method to use; defaults to `GET` when the server omits it.
    #[serde(default = "default_method")]
    pub method: String,
    /// Form fields to submit alongside the navigation.
    #[serde(default)]
    pub data: BTreeMap<String, Value>,
}

fn default_method() -> String {
    "GET".to_string()
}

/// Query parameters for a server-paged table fetch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableQuery {
    /// Monotonic draw counter echoed back in [`TablePage::draw`].
    pub draw: u64,
    /// Zero-based index of the first row to return.
    pub start: u64,
    /// Number of rows per page.
    pub length: u64,
}

impl TableQuery {
    /// Key/value pairs in wire order, for query-string encoding.
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, String); 3] {
        [
            ("draw", self.draw.to_string()),
            ("start", self.start.to_string()),
            ("length", self.length.to_string()),
        ]
    }
}

/// One page of rows from a server-paged table endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TablePage<T> {
    /// Draw counter echoed from the originating [`TableQuery`].
    pub draw: u64,
    /// Total rows before filtering.
    pub records_total: u64,
    /// Rows remaining after filtering; drives the page count.
    pub records_filtered: u64,
    /// Rows for the requested window.
    pub data: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normal_error_round_trips_on_the_wire_shape() {
        let raw = r#"{"errorType":"ajaxNormalError","result":"saldo tidak cukup"}"#;
        let decoded: ApiFailure = serde_json::from_str(raw).unwrap();
        assert_eq!(
            decoded,
            ApiFailure::AjaxNormalError("saldo tidak cukup".to_string())
        );
        assert_eq!(serde_json::to_string(&decoded).unwrap(), raw);
    }

    #[test]
    fn validation_error_decodes_issue_list_in_order() {
        let raw = json!({
            "errorType": "validationError",
            "result": [
                {"key": "umur", "value": 100, "message": "umur tidak boleh >99"},
                {"key": "nik", "value": "x", "message": "wajib diisi"},
            ],
        });
        let decoded: ApiFailure = serde_json::from_value(raw).unwrap();
        let ApiFailure::ValidationError(issues) = decoded else {
            panic!("expected validation variant");
        };
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].key, "umur");
        assert_eq!(issues[1].message, "wajib diisi");
    }

    #[test]
    fn issue_summary_renders_strings_unquoted() {
        let issue = ValidationIssue {
            key: "umur".to_string(),
            value: json!(100),
            message: "umur tidak boleh >99".to_string(),
        };
        assert_eq!(issue.summary(), "umur: 100 -> umur tidak boleh >99");

        let issue = ValidationIssue {
            key: "nama".to_string(),
            value: json!("candra"),
            message: "terlalu pendek".to_string(),
        };
        assert_eq!(issue.summary(), "nama: candra -> terlalu pendek");
    }

    #[test]
    fn redirect_defaults_method_and_data() {
        let raw = json!({
            "errorType": "ajaxRedirect",
            "result": {"location": "/error-page"},
        });
        let decoded: ApiFailure = serde_json::from_value(raw).unwrap();
        let ApiFailure::AjaxRedirect(spec) = decoded else {
            panic!("expected redirect variant");
        };
        assert_eq!(spec.location, "/error-page");
        assert_eq!(spec.method, "GET");
        assert!(spec.data.is_empty());
    }

    #[test]
    fn table_page_uses_datatables_field_names() {
        let raw = json!({
            "draw": 3,
            "recordsTotal": 120,
            "recordsFiltered": 40,
            "data": [{"nama": "a"}],
        });
        let page: TablePage<Value> = serde_json::from_value(raw).unwrap();
        assert_eq!(page.draw, 3);
        assert_eq!(page.records_total, 120);
        assert_eq!(page.records_filtered, 40);
        assert_eq!(page.data.len(), 1);
    }

    #[test]
    fn table_query_pairs_follow_wire_order() {
        let query = TableQuery {
            draw: 1,
            start: 10,
            length: 10,
        };
        let pairs = query.pairs();
        assert_eq!(pairs[0], ("draw", "1".to_string()));
        assert_eq!(pairs[1], ("start", "10".to_string()));
        assert_eq!(pairs[2], ("length", "10".to_string()));
    }
}
