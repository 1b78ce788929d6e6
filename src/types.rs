//! Common types used throughout jobfeed
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Job
// ============================================================================

/// A single job listing as returned by the external API.
///
/// The payload is opaque: the API owns the shape and this crate passes it
/// through untouched. The accessors below only look up the handful of string
/// fields the CLI prints; a missing or non-string field yields `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Job(pub JsonValue);

impl Job {
    /// Wrap a raw JSON record
    pub fn new(value: JsonValue) -> Self {
        Self(value)
    }

    /// Borrow the raw JSON record
    pub fn as_value(&self) -> &JsonValue {
        &self.0
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key)?.as_str()
    }

    /// Listing identifier
    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    /// Position title
    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    /// Hiring company
    pub fn company(&self) -> Option<&str> {
        self.str_field("company")
    }

    /// Location string
    pub fn location(&self) -> Option<&str> {
        self.str_field("location")
    }

    /// Canonical listing URL
    pub fn url(&self) -> Option<&str> {
        self.str_field("url")
    }

    /// Posting timestamp, verbatim from the API
    pub fn created_at(&self) -> Option<&str> {
        self.str_field("created_at")
    }
}

impl From<JsonValue> for Job {
    fn from(value: JsonValue) -> Self {
        Self(value)
    }
}

// ============================================================================
// Page Request
// ============================================================================

/// The pair of inputs a fetch reacts to: a 1-based page number and a set of
/// filter parameters.
///
/// Owned by the caller and immutable per invocation. Page numbers are clamped
/// to `>= 1` at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    params: StringMap,
}

impl PageRequest {
    /// Create a request for the given page with no filter parameters
    pub fn new(page: u32) -> Self {
        Self {
            page: page.max(1),
            params: StringMap::new(),
        }
    }

    /// Create a request for the given page and parameters
    pub fn with_params(page: u32, params: StringMap) -> Self {
        Self {
            page: page.max(1),
            params,
        }
    }

    /// Add a filter parameter
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// The 1-based page number
    pub fn page(&self) -> u32 {
        self.page
    }

    /// The filter parameters
    pub fn params(&self) -> &StringMap {
        &self.params
    }

    /// The same filters on a different page
    #[must_use]
    pub fn at_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            params: self.params.clone(),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1)
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}
