//! HR management backend.
//!
//! Hexagonal layout: [`domain`] holds records, status vocabularies and the
//! workflow services; [`inbound`] exposes them over HTTP; [`outbound`]
//! provides the PostgreSQL, in-memory and credential adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
