//! MongoDB client wrapper shared by the repository adapters.
//!
//! The gateway owns one [`mongodb::Client`] (which pools connections
//! internally) and hands out typed collection handles. Connecting performs a
//! `ping` so a wrong URL fails at startup rather than on the first request.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use tracing::info;

use super::documents::{ClockInDocument, ItemDocument};

/// Collection holding inventory items.
pub const ITEMS_COLLECTION: &str = "items";
/// Collection holding clock-in records.
pub const CLOCK_IN_COLLECTION: &str = "clock_in";

/// Errors that can occur while establishing the store connection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The connection string could not be parsed.
    #[error("invalid store connection string: {message}")]
    Options { message: String },

    /// The store did not answer the startup ping.
    #[error("store did not respond to ping: {message}")]
    Ping { message: String },
}

impl GatewayError {
    /// Create an options error with the given message.
    pub fn options(message: impl Into<String>) -> Self {
        Self::Options {
            message: message.into(),
        }
    }

    /// Create a ping error with the given message.
    pub fn ping(message: impl Into<String>) -> Self {
        Self::Ping {
            message: message.into(),
        }
    }
}

/// Configuration for the store connection.
///
/// # Example
///
/// ```ignore
/// let config = GatewayConfig::new("mongodb://localhost:27017", "inventory_system")
///     .with_server_selection_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    url: String,
    database: String,
    app_name: String,
    server_selection_timeout: Duration,
}

impl GatewayConfig {
    /// Create a new configuration for `database` on the server at `url`.
    ///
    /// Uses defaults:
    /// - `app_name`: `inventory-backend`
    /// - `server_selection_timeout`: 10 seconds
    pub fn new(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            app_name: "inventory-backend".to_owned(),
            server_selection_timeout: Duration::from_secs(10),
        }
    }

    /// Set how long operations wait for a usable server.
    pub fn with_server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = timeout;
        self
    }

    /// Get the database name.
    pub fn database(&self) -> &str {
        &self.database
    }
}

/// Connected handle onto the inventory database.
#[derive(Clone)]
pub struct MongoGateway {
    client: Client,
    database: Database,
}

impl MongoGateway {
    /// Connect to the store and verify it answers a `ping`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Options`] for an unparseable URL and
    /// [`GatewayError::Ping`] when no server responds in time.
    pub async fn connect(config: GatewayConfig) -> Result<Self, GatewayError> {
        let mut options = ClientOptions::parse(&config.url)
            .await
            .map_err(|err| GatewayError::options(err.to_string()))?;
        options.app_name = Some(config.app_name.clone());
        options.server_selection_timeout = Some(config.server_selection_timeout);

        let client =
            Client::with_options(options).map_err(|err| GatewayError::options(err.to_string()))?;
        let database = client.database(&config.database);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|err| GatewayError::ping(err.to_string()))?;
        info!(database = %config.database, "connected to document store");

        Ok(Self { client, database })
    }

    /// Typed handle onto the items collection.
    pub fn items(&self) -> Collection<ItemDocument> {
        self.database.collection(ITEMS_COLLECTION)
    }

    /// Typed handle onto the clock-in collection.
    pub fn clock_in(&self) -> Collection<ClockInDocument> {
        self.database.collection(CLOCK_IN_COLLECTION)
    }

    /// Close pooled connections and end server sessions.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("document store connection closed");
    }
}
