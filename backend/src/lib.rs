//! Gmail username variation generator.
//!
//! The [`domain`] module normalises names and builds address sets. The
//! [`inbound`] adapters expose them over HTTP.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
