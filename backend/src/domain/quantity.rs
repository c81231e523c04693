//! Requested address count.

use std::fmt;

use super::Error;

/// Smallest number of addresses a client may request.
pub const QUANTITY_MIN: u16 = 1;
/// Largest number of addresses a client may request.
pub const QUANTITY_MAX: u16 = 5000;

/// Number of addresses to generate, always within
/// [`QUANTITY_MIN`]`..=`[`QUANTITY_MAX`].
///
/// # Examples
/// ```
/// use gmail_variants::domain::Quantity;
///
/// assert_eq!(Quantity::new(42).map(Quantity::get), Ok(42));
/// assert!(Quantity::new(0).is_err());
/// assert!(Quantity::new(5001).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u16);

impl Quantity {
    /// Validate an already coerced integer.
    ///
    /// Accepts `i128` so arbitrarily large client values are reported as out
    /// of range rather than as type errors.
    pub fn new(value: impl Into<i128>) -> Result<Self, Error> {
        let value = value.into();
        u16::try_from(value)
            .ok()
            .filter(|count| (QUANTITY_MIN..=QUANTITY_MAX).contains(count))
            .map(Self)
            .ok_or_else(Error::quantity_out_of_range)
    }

    /// Number of addresses as a `usize` for collection sizing.
    pub fn get(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
