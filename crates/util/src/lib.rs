//! docboard-util - Utility functions for the docboard admin dashboard.
//!
//! This crate provides the small pure helpers used by the dashboard's
//! client layer: cursor pagination reconciliation and the request
//! routing predicate for the generated RPC client.

pub mod pagination;
pub mod routing;

// Re-exports for convenience
pub use pagination::{fetch_size, reconcile, Page, PageDirection, PaginationError};
pub use routing::{needs_secret_key, SECRET_KEY_METHODS};
