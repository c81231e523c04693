//! Email address variation builder.
//!
//! Builds candidate addresses in two phases:
//!
//! 1. **Seeding** copies the deterministic base variations (`johndoe`,
//!    `john.doe`, ...) into the output in a fixed order.
//! 2. **Fill** appends a random separator and numeric suffix to randomly
//!    chosen bases until the requested quantity is reached.
//!
//! The fill phase is bounded by a draw budget so a tiny suffix space cannot
//! spin forever; running out of draws surfaces [`GenerationError::Exhausted`].

use std::collections::HashSet;
use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use super::name::{NameParts, NormalizedName};
use super::quantity::Quantity;

/// Domain every generated address belongs to.
pub const EMAIL_DOMAIN: &str = "gmail.com";

/// Default inclusive range for numeric suffixes.
pub const DEFAULT_SUFFIX_RANGE: RangeInclusive<u16> = 10..=9999;

/// Default number of random draws allowed per requested address.
pub const DEFAULT_DRAWS_PER_ADDRESS: usize = 100;

const SEPARATORS: [&str; 3] = ["", ".", "_"];

/// Failure raised when the fill phase cannot reach the requested quantity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The draw budget ran out before enough unique addresses were found.
    #[error("produced {produced} of {requested} addresses before the draw budget ran out")]
    Exhausted {
        /// Addresses requested by the caller.
        requested: usize,
        /// Unique addresses produced before giving up.
        produced: usize,
    },
}

/// Deterministic username stems for a name, in seeding order and without
/// duplicates.
///
/// # Examples
/// ```
/// use gmail_variants::domain::{NormalizedName, base_variations};
///
/// let name = NormalizedName::parse("John Doe").expect("usable name");
/// let bases = base_variations(name.parts());
/// assert_eq!(bases.first().map(String::as_str), Some("johndoe"));
/// assert_eq!(bases.len(), 10);
/// ```
pub fn base_variations(parts: NameParts<'_>) -> Vec<String> {
    let NameParts { first, last } = parts;
    let Some(last) = last else {
        return vec![first.to_owned()];
    };

    let first_initial = initial(first);
    let last_initial = initial(last);
    let candidates = [
        format!("{first}{last}"),
        format!("{first}.{last}"),
        format!("{last}{first}"),
        format!("{last}.{first}"),
        format!("{first}{last_initial}"),
        format!("{first}.{last_initial}"),
        format!("{first_initial}{last}"),
        format!("{first_initial}.{last}"),
        format!("{first}_{last}"),
        format!("{last}_{first}"),
    ];

    let mut seen = HashSet::with_capacity(candidates.len());
    candidates
        .into_iter()
        .filter(|candidate| seen.insert(candidate.clone()))
        .collect()
}

fn initial(token: &str) -> &str {
    let end = token.chars().next().map_or(0, char::len_utf8);
    token.get(..end).unwrap_or(token)
}

fn address(local_part: &str) -> String {
    format!("{local_part}@{EMAIL_DOMAIN}")
}

/// Insertion-ordered, duplicate-free address list.
#[derive(Debug)]
struct AddressSet {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl AddressSet {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(capacity),
            ordered: Vec::with_capacity(capacity),
        }
    }

    fn insert(&mut self, address: String) {
        if self.seen.insert(address.clone()) {
            self.ordered.push(address);
        }
    }

    fn len(&self) -> usize {
        self.ordered.len()
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

/// Configurable address builder.
///
/// The defaults match the public service: suffixes `10..=9999` and
/// [`DEFAULT_DRAWS_PER_ADDRESS`] random draws per requested address.
///
/// # Examples
/// ```
/// use gmail_variants::domain::{AddressBuilder, Quantity};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let quantity = Quantity::new(2).expect("valid quantity");
/// let emails = AddressBuilder::default()
///     .build("John Doe", quantity, &mut rng)
///     .expect("enough variations");
/// assert_eq!(emails, ["johndoe@gmail.com", "john.doe@gmail.com"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBuilder {
    suffixes: RangeInclusive<u16>,
    draws_per_address: usize,
}

impl Default for AddressBuilder {
    fn default() -> Self {
        Self {
            suffixes: DEFAULT_SUFFIX_RANGE,
            draws_per_address: DEFAULT_DRAWS_PER_ADDRESS,
        }
    }
}

impl AddressBuilder {
    /// Override the inclusive numeric suffix range.
    ///
    /// Reversed bounds are swapped so the range is never empty.
    #[must_use]
    pub fn with_suffix_range(mut self, suffixes: RangeInclusive<u16>) -> Self {
        let (start, end) = suffixes.into_inner();
        self.suffixes = start.min(end)..=start.max(end);
        self
    }

    /// Override the random draw budget per requested address.
    #[must_use]
    pub fn with_draws_per_address(mut self, draws: usize) -> Self {
        self.draws_per_address = draws.max(1);
        self
    }

    /// Generate up to `quantity` unique addresses for `raw_name`.
    ///
    /// Names that normalise to nothing produce an empty list.
    ///
    /// # Errors
    /// Returns [`GenerationError::Exhausted`] when the random fill runs out
    /// of draws before reaching `quantity`.
    pub fn build<R>(
        &self,
        raw_name: &str,
        quantity: Quantity,
        rng: &mut R,
    ) -> Result<Vec<String>, GenerationError>
    where
        R: Rng + ?Sized,
    {
        let Some(name) = NormalizedName::parse(raw_name) else {
            return Ok(Vec::new());
        };
        let bases = base_variations(name.parts());
        if bases.is_empty() {
            return Ok(Vec::new());
        }

        let target = quantity.get();
        let mut addresses = AddressSet::with_capacity(target);
        for base in bases.iter().take(target) {
            addresses.insert(address(base));
        }

        let budget = target.saturating_mul(self.draws_per_address);
        let mut draws = 0_usize;
        while addresses.len() < target {
            if draws >= budget {
                return Err(GenerationError::Exhausted {
                    requested: target,
                    produced: addresses.len(),
                });
            }
            draws += 1;
            addresses.insert(self.random_address(&bases, rng));
        }

        Ok(addresses.into_vec())
    }

    fn random_address<R>(&self, bases: &[String], rng: &mut R) -> String
    where
        R: Rng + ?Sized,
    {
        let base = bases.choose(rng).map_or("", String::as_str);
        let number = rng.gen_range(self.suffixes.clone());
        let separator = if base.ends_with(|c: char| c == '.' || c == '_') {
            ""
        } else {
            SEPARATORS.choose(rng).copied().unwrap_or_default()
        };
        address(&format!("{base}{separator}{number}"))
    }
}
