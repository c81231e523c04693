//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use gmail_variants::domain::ports::{AddressGenerator, RandomAddressGenerator};

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) generator: Arc<dyn AddressGenerator>,
}

impl ServerConfig {
    /// Construct a configuration bound to `bind_addr` using the random
    /// generator.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            generator: Arc::new(RandomAddressGenerator::default()),
        }
    }

    /// Replace the address generator, typically with a seeded fixture.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Exercised by server tests with seeded generators")
    )]
    #[must_use]
    pub fn with_generator(mut self, generator: Arc<dyn AddressGenerator>) -> Self {
        self.generator = generator;
        self
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Exercised by server tests")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
