//! Driving port for address generation.
//!
//! Inbound adapters call [`AddressGenerator`] without knowing where its
//! randomness comes from, so handler tests can substitute a seeded generator
//! and assert exact payloads.

use rand::SeedableRng;
use rand::rngs::{SmallRng, StdRng};

use crate::domain::{AddressBuilder, GenerationError, Quantity};

/// Domain use-case port producing address variations for a name.
pub trait AddressGenerator: Send + Sync {
    /// Generate up to `quantity` unique addresses for the raw `name`.
    fn generate(&self, name: &str, quantity: Quantity) -> Result<Vec<String>, GenerationError>;
}

/// Production generator drawing a fresh [`SmallRng`] from OS entropy for
/// every call.
#[derive(Debug, Clone, Default)]
pub struct RandomAddressGenerator {
    builder: AddressBuilder,
}

impl AddressGenerator for RandomAddressGenerator {
    fn generate(&self, name: &str, quantity: Quantity) -> Result<Vec<String>, GenerationError> {
        let mut rng = SmallRng::from_entropy();
        self.builder.build(name, quantity, &mut rng)
    }
}

/// Deterministic generator reseeded identically on every call.
///
/// Identical inputs always produce identical output, which keeps handler and
/// behaviour tests exact.
#[derive(Debug, Clone)]
pub struct FixtureAddressGenerator {
    builder: AddressBuilder,
    seed: u64,
}

impl FixtureAddressGenerator {
    /// Create a fixture generator with the default builder.
    pub fn new(seed: u64) -> Self {
        Self::with_builder(AddressBuilder::default(), seed)
    }

    /// Create a fixture generator around a custom builder.
    pub fn with_builder(builder: AddressBuilder, seed: u64) -> Self {
        Self { builder, seed }
    }
}

impl Default for FixtureAddressGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

impl AddressGenerator for FixtureAddressGenerator {
    fn generate(&self, name: &str, quantity: Quantity) -> Result<Vec<String>, GenerationError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.builder.build(name, quantity, &mut rng)
    }
}
