use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of a BigCommerce error payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorEntry {
    #[serde(default)]
    pub status: u16,
    #[serde(default, alias = "title")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiErrorEntry {
    /// An entry says something only when it has a message or details.
    pub fn is_informative(&self) -> bool {
        let has_details = match &self.details {
            Some(serde_json::Value::Object(map)) => !map.is_empty(),
            Some(serde_json::Value::Array(items)) => !items.is_empty(),
            Some(serde_json::Value::String(text)) => !text.is_empty(),
            Some(_) => true,
            None => false,
        };
        !self.message.is_empty() || has_details
    }
}

/// Structured error reported by the API on a non-success response.
///
/// An empty value (no entries) means the API reported nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiError {
    pub status: u16,
    pub errors: Vec<ApiErrorEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Many(Vec<ApiErrorEntry>),
    One(ApiErrorEntry),
}

impl ApiError {
    /// Parses an error body. BigCommerce v2 answers with an array of entries,
    /// some endpoints with a single object. Returns `None` when the body is
    /// not a structured error or none of its entries carries a message or
    /// details.
    pub fn from_body(status: StatusCode, body: &[u8]) -> Option<Self> {
        let parsed: ErrorBody = serde_json::from_slice(body).ok()?;

        let mut errors = match parsed {
            ErrorBody::Many(entries) => entries,
            ErrorBody::One(entry) => vec![entry],
        };
        errors.retain(ApiErrorEntry::is_informative);

        if errors.is_empty() {
            return None;
        }

        for entry in &mut errors {
            if entry.status == 0 {
                entry.status = status.as_u16();
            }
        }

        Some(Self {
            status: status.as_u16(),
            errors,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND.as_u16()
            || self
                .errors
                .iter()
                .any(|e| e.status == StatusCode::NOT_FOUND.as_u16())
    }

    pub fn message(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .filter(|m| !m.is_empty())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigCommerce API error ({}): {}", self.status, self.message())
    }
}

impl std::error::Error for ApiError {}
