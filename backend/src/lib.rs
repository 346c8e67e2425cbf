//! Contact-book backend: session-authenticated JSON API over contact records
//! and user accounts.
//!
//! The crate follows a ports-and-adapters layout. [`domain`] owns the records,
//! validation rules and services. [`inbound`] exposes them over HTTP, and
//! [`outbound`] stores them in PostgreSQL or in memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request tracing middleware.
pub use middleware::Trace;
