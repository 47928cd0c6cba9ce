//! HTTP client for the remote fare service.
//!
//! The service is an opaque collaborator: it computes fares and answers
//! location searches over JSON. This module only carries requests and
//! responses; it enforces nothing about the payloads.

mod client;
mod error;

pub use client::{ApiClient, ApiConfig};
pub use error::ApiError;
