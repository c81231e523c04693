//! OpenAPI schema definitions for request shapes.
//!
//! The generate handler reads its body as raw JSON so it can coerce loosely
//! typed quantities. This module documents the canonical shape for OpenAPI
//! consumers without constraining the handler's parsing.

use utoipa::ToSchema;

/// OpenAPI schema for the `POST /generate` request body.
///
/// `quantity` may also be sent as a numeric string, a float (truncated) or a
/// boolean; the canonical form is an integer.
#[derive(ToSchema)]
#[schema(as = GenerateRequest)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct GenerateRequestSchema {
    /// Person's name; punctuation and non-ASCII letters are dropped.
    #[schema(example = "John Doe")]
    name: String,
    /// Number of addresses to generate.
    #[schema(minimum = 1, maximum = 5000, example = 25)]
    quantity: u16,
}
