//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain ports and stay testable with deterministic generators.

use std::sync::Arc;

use crate::domain::ports::AddressGenerator;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Port producing address variations.
    pub generator: Arc<dyn AddressGenerator>,
}

impl HttpState {
    /// Construct state around the supplied generator.
    pub fn new(generator: Arc<dyn AddressGenerator>) -> Self {
        Self { generator }
    }
}
