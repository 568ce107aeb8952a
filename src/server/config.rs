//! Configuration for the word service

use super::daily::default_epoch;
use chrono::NaiveDate;
use std::net::{Ipv4Addr, SocketAddr};

/// Default port, as the original service used
pub const DEFAULT_PORT: u16 = 5000;

/// Word service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address
    pub listen_addr: SocketAddr,

    /// First day of the solution rotation
    pub epoch: NaiveDate,

    /// Solution rotation, in order
    pub solutions: Vec<&'static str>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            epoch: default_epoch(),
            solutions: crate::wordlists::SOLUTIONS.to_vec(),
        }
    }
}

impl ServerConfig {
    /// Replace the port of the listen address
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.listen_addr.set_port(port);
        self
    }
}
