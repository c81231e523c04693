//! Server settings loaded via OrthoConfig.
//!
//! Values layer as CLI flags over `GMAIL_VARIANTS_*` environment variables
//! over built-in defaults.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

/// Address bound when no host is configured.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Port bound when no port is configured.
pub const DEFAULT_PORT: u16 = 5000;

/// Errors raised while turning settings into a bind address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The configured host is not an IP address.
    #[error("invalid bind host '{host}': expected an IP address")]
    InvalidHost {
        /// Offending host value.
        host: String,
    },
}

/// Configuration values controlling the HTTP listener.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GMAIL_VARIANTS")]
pub struct ServerSettings {
    /// IP address to bind.
    #[ortho_config(default = String::from(DEFAULT_HOST))]
    pub host: String,
    /// TCP port to bind.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
}

impl ServerSettings {
    /// Resolve the socket address to bind.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when the host is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let ip: IpAddr = self
            .host
            .trim()
            .parse()
            .map_err(|_| SettingsError::InvalidHost {
                host: self.host.clone(),
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
