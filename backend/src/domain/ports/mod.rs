//! Domain ports for the hexagonal boundary.

mod address_generator;

pub use address_generator::{AddressGenerator, FixtureAddressGenerator, RandomAddressGenerator};
