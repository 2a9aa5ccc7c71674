//! Wire types for the recognition service and the host server.
//!
//! These mirror the JSON exchanged over HTTP. Field names follow the
//! recognition service's schema (`dict_of_vars`, `expr`, `assign`), so the
//! structs are the single place that vocabulary appears.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Variable name to last-known value, sent as auxiliary context.
pub type Bindings = BTreeMap<String, String>;

/// Body of `POST {base_url}/calculate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// PNG snapshot of the canvas as a `data:image/png;base64,...` URI.
    pub image: String,
    /// Variable bindings accumulated by earlier calls.
    pub dict_of_vars: Bindings,
}

/// Response envelope of `POST {base_url}/calculate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub data: Vec<ResultEntry>,
}

/// One recognized expression and its evaluated result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    /// Source expression, or the variable name for an assignment.
    pub expr: String,
    /// Evaluated value.
    pub result: String,
    /// Whether `expr = result` is a variable assignment.
    #[serde(default)]
    pub assign: bool,
}

/// Response of the host server's `GET /api/config`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the recognition service.
    pub api_url: String,
}
