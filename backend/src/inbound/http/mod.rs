//! HTTP inbound adapter exposing the generation endpoint, probes and the
//! landing page.

pub mod error;
pub mod generate;
pub mod health;
pub mod landing;
pub mod schemas;
pub mod state;
mod validation;

pub use error::ApiResult;
