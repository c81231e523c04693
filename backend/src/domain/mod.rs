//! Domain primitives and the address variation builder.
//!
//! Purpose: keep name normalisation, quantity validation and address
//! generation free of HTTP concerns. Inbound adapters depend on the
//! [`ports::AddressGenerator`] port and map [`Error`] to their own envelopes.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - NormalizedName / NameParts: cleaned name and its first/last tokens.
//! - Quantity: validated address count.
//! - AddressBuilder / base_variations: the generation routine.

pub mod error;
pub mod name;
pub mod ports;
pub mod quantity;
pub mod variations;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::name::{NameParts, NormalizedName};
pub use self::quantity::{QUANTITY_MAX, QUANTITY_MIN, Quantity};
pub use self::variations::{
    AddressBuilder, DEFAULT_DRAWS_PER_ADDRESS, DEFAULT_SUFFIX_RANGE, EMAIL_DOMAIN,
    GenerationError, base_variations,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use gmail_variants::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::malformed_request())
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
