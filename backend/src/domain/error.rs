//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps each
//! [`ErrorCode`] to a status code and renders the message as the
//! `{"error": ...}` envelope clients expect.

use serde::{Deserialize, Serialize};

use super::variations::GenerationError;

/// Message returned when the body or one of its required keys is missing.
pub const MALFORMED_REQUEST_MESSAGE: &str = "Invalid input. 'name' and 'quantity' are required.";
/// Message returned when `quantity` cannot be read as an integer.
pub const INVALID_QUANTITY_TYPE_MESSAGE: &str = "Quantity must be a valid integer.";
/// Message returned when `quantity` falls outside the accepted range.
pub const QUANTITY_OUT_OF_RANGE_MESSAGE: &str = "Quantity must be an integer between 1 and 5000.";
/// Message returned when the builder gives up before reaching the quantity.
pub const VARIATIONS_EXHAUSTED_MESSAGE: &str = "Unable to generate enough unique variations.";

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The body is absent, unparseable or lacks `name`/`quantity`.
    MalformedRequest,
    /// `quantity` is present but not coercible to an integer.
    InvalidQuantityType,
    /// `quantity` is an integer outside `1..=5000`.
    QuantityOutOfRange,
    /// The random fill gave up before producing enough unique addresses.
    VariationsExhausted,
    /// An unexpected error occurred inside the service.
    InternalError,
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` is non-empty once trimmed of whitespace.
///
/// # Examples
/// ```
/// use gmail_variants::domain::{Error, ErrorCode};
///
/// let err = Error::quantity_out_of_range();
/// assert_eq!(err.code(), ErrorCode::QuantityOutOfRange);
/// assert_eq!(err.message(), "Quantity must be an integer between 1 and 5000.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

/// Validation errors emitted by [`Error::try_new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorValidationError {
    /// The supplied message was blank.
    EmptyMessage,
}

impl std::fmt::Display for ErrorValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "error message must not be empty"),
        }
    }
}

impl std::error::Error for ErrorValidationError {}

impl Error {
    /// Create a new error, panicking if the message is blank.
    ///
    /// # Panics
    /// Panics when `message` is empty or whitespace only.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(value) => value,
            Err(err) => panic!("error messages must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the message content.
    pub fn try_new(code: ErrorCode, message: impl Into<String>) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self { code, message })
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to clients.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// The request body or one of its required keys is missing.
    pub fn malformed_request() -> Self {
        Self::new(ErrorCode::MalformedRequest, MALFORMED_REQUEST_MESSAGE)
    }

    /// `quantity` could not be coerced to an integer.
    pub fn invalid_quantity_type() -> Self {
        Self::new(ErrorCode::InvalidQuantityType, INVALID_QUANTITY_TYPE_MESSAGE)
    }

    /// `quantity` is outside the accepted range.
    pub fn quantity_out_of_range() -> Self {
        Self::new(ErrorCode::QuantityOutOfRange, QUANTITY_OUT_OF_RANGE_MESSAGE)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<GenerationError> for Error {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::Exhausted { .. } => {
                Self::new(ErrorCode::VariationsExhausted, VARIATIONS_EXHAUSTED_MESSAGE)
            }
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
