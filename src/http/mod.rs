//! HTTP client module
//!
//! Thin GET-oriented wrapper around reqwest.
//!
//! # Features
//!
//! - **Base URL joining**: relative paths resolve against a configured base
//! - **Per-request overrides**: query parameters, headers, timeout
//! - **Status classification**: non-2xx responses surface as typed errors
//!
//! Requests are issued exactly once; there is no retry loop. A failed read is
//! surfaced to the caller, who recovers by issuing a fresh fetch.

mod client;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};
