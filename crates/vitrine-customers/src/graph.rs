//! Graph read queries.
//!
//! The customer-record service exposes a graph endpoint for reads: an entity
//! name, the fields to project, and optional filters. The backend forwards
//! the query untouched and hands the rows back.

use serde::{Deserialize, Serialize};

/// A read query against the service's graph endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQuery {
    /// Entity to read (e.g., "customer").
    pub entity: String,
    /// Fields to project, dot-paths allowed (e.g., "addresses.city").
    pub fields: Vec<String>,
    /// Service-side filters, passed through opaquely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<serde_json::Value>,
}

impl GraphQuery {
    /// Query an entity with no fields or filters yet.
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            fields: Vec::new(),
            filters: None,
        }
    }

    /// Project a field.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Attach opaque filters.
    pub fn with_filters(mut self, filters: serde_json::Value) -> Self {
        self.filters = Some(filters);
        self
    }
}

/// Rows returned by a graph read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphResult {
    /// Matched rows, shaped by the projected fields.
    pub data: Vec<serde_json::Value>,
    /// Total match count, when the service reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}
