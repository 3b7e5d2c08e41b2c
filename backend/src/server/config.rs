//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use backend::outbound::persistence::MongoGateway;
use mockable::{Clock, DefaultClock};

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) gateway: MongoGateway,
    pub(crate) clock: Arc<dyn Clock>,
}

impl ServerConfig {
    /// Construct a server configuration over a connected gateway.
    ///
    /// Services stamp records with the system clock.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, gateway: MongoGateway) -> Self {
        Self {
            bind_addr,
            gateway,
            clock: Arc::new(DefaultClock),
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
