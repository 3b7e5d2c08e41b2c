//! Server configuration loaded via OrthoConfig.
//!
//! Values are layered from CLI flags and `INVENTORY_*` environment variables.
//! The unprefixed `MONGO_URL` and `PORT` variables used by existing
//! deployments are honoured when the prefixed ones are absent. `main` loads a
//! `.env` file first, so its entries take part as environment variables.

use std::ffi::OsString;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Database selected when none is configured.
pub const DEFAULT_DATABASE: &str = "inventory_system";
/// Listener port used when none is configured.
pub const DEFAULT_PORT: u16 = 8000;
/// Unprefixed connection string variable.
pub const MONGO_URL_FALLBACK: &str = "MONGO_URL";
/// Unprefixed listener port variable.
pub const PORT_FALLBACK: &str = "PORT";
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Errors raised when the settings cannot start the server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load settings: {message}")]
    Load { message: String },
    #[error("INVENTORY_MONGO_URL or MONGO_URL must be set to a MongoDB connection string")]
    MissingMongoUrl,
    #[error("{name} must be a port number, got {value:?}")]
    InvalidPort { name: &'static str, value: String },
}

/// Configuration values controlling the HTTP listener and document store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "INVENTORY")]
pub struct ServerSettings {
    /// MongoDB connection string.
    pub mongo_url: Option<String>,
    /// Database holding the `items` and `clock_in` collections.
    #[ortho_config(default = String::from(DEFAULT_DATABASE))]
    pub database: String,
    /// Address the listener binds to.
    pub host: Option<IpAddr>,
    /// Port the listener binds to.
    pub port: Option<u16>,
}

impl ServerSettings {
    /// Load layered settings from `args`, then fill gaps from the unprefixed
    /// process environment.
    ///
    /// # Errors
    /// Returns [`SettingsError::Load`] when a layer cannot be parsed and
    /// [`SettingsError::InvalidPort`] for a non-numeric `PORT`.
    pub fn load_with_fallbacks<I, T>(args: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let settings = Self::load_from_iter(args).map_err(|error| SettingsError::Load {
            message: error.to_string(),
        })?;
        settings.with_fallbacks(|name| std::env::var(name).ok())
    }

    /// Fill absent values from `lookup`, keyed by the unprefixed variable
    /// names.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidPort`] when the fallback port does not
    /// parse.
    pub fn with_fallbacks(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SettingsError> {
        if self.mongo_url.is_none() {
            self.mongo_url = lookup(MONGO_URL_FALLBACK);
        }
        if self.port.is_none() {
            if let Some(raw) = lookup(PORT_FALLBACK) {
                let port = raw.trim().parse().map_err(|_| SettingsError::InvalidPort {
                    name: PORT_FALLBACK,
                    value: raw.clone(),
                })?;
                self.port = Some(port);
            }
        }
        Ok(self)
    }

    /// Return the configured connection string.
    ///
    /// # Errors
    /// Returns [`SettingsError::MissingMongoUrl`] when the value is absent or
    /// blank.
    pub fn mongo_url(&self) -> Result<&str, SettingsError> {
        self.mongo_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(SettingsError::MissingMongoUrl)
    }

    /// Return the configured database name.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Return the socket address the listener binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server configuration parsing.

    use super::*;

    use env_lock::lock_env;
    use rstest::rstest;

    const ALL_VARS: [&str; 6] = [
        "INVENTORY_MONGO_URL",
        "INVENTORY_DATABASE",
        "INVENTORY_HOST",
        "INVENTORY_PORT",
        MONGO_URL_FALLBACK,
        PORT_FALLBACK,
    ];

    fn env_with(values: &[(&str, &str)]) -> Vec<(&'static str, Option<String>)> {
        ALL_VARS
            .iter()
            .map(|name| {
                let value = values
                    .iter()
                    .find(|(key, _)| key == name)
                    .map(|(_, value)| (*value).to_owned());
                (*name, value)
            })
            .collect()
    }

    fn load_from_empty_args() -> Result<ServerSettings, SettingsError> {
        ServerSettings::load_with_fallbacks([OsString::from("inventory-backend")])
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(env_with(&[]));

        let settings = load_from_empty_args().expect("config should load");
        assert_eq!(settings.mongo_url(), Err(SettingsError::MissingMongoUrl));
        assert_eq!(settings.database(), DEFAULT_DATABASE);
        assert_eq!(
            settings.bind_addr(),
            SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env(env_with(&[
            ("INVENTORY_MONGO_URL", "mongodb://localhost:27017"),
            ("INVENTORY_DATABASE", "stock"),
            ("INVENTORY_HOST", "127.0.0.1"),
            ("INVENTORY_PORT", "9090"),
        ]));

        let settings = load_from_empty_args().expect("config should load");
        assert_eq!(settings.mongo_url(), Ok("mongodb://localhost:27017"));
        assert_eq!(settings.database(), "stock");
        assert_eq!(
            settings.bind_addr(),
            SocketAddr::from(([127, 0, 0, 1], 9090))
        );
    }

    #[rstest]
    fn unprefixed_variables_are_honoured() {
        let _guard = lock_env(env_with(&[
            (MONGO_URL_FALLBACK, "mongodb://legacy:27017"),
            (PORT_FALLBACK, "8080"),
        ]));

        let settings = load_from_empty_args().expect("config should load");
        assert_eq!(settings.mongo_url(), Ok("mongodb://legacy:27017"));
        assert_eq!(settings.bind_addr().port(), 8080);
    }

    #[rstest]
    fn prefixed_variables_win_over_unprefixed_ones() {
        let _guard = lock_env(env_with(&[
            ("INVENTORY_MONGO_URL", "mongodb://primary:27017"),
            ("INVENTORY_PORT", "9000"),
            (MONGO_URL_FALLBACK, "mongodb://legacy:27017"),
            (PORT_FALLBACK, "8080"),
        ]));

        let settings = load_from_empty_args().expect("config should load");
        assert_eq!(settings.mongo_url(), Ok("mongodb://primary:27017"));
        assert_eq!(settings.bind_addr().port(), 9000);
    }

    #[rstest]
    fn non_numeric_fallback_port_is_rejected() {
        let _guard = lock_env(env_with(&[(PORT_FALLBACK, "eighty")]));

        let error = load_from_empty_args().expect_err("invalid port");
        assert_eq!(
            error,
            SettingsError::InvalidPort {
                name: PORT_FALLBACK,
                value: "eighty".to_owned(),
            }
        );
    }

    #[rstest]
    fn blank_mongo_url_is_rejected() {
        let _guard = lock_env(env_with(&[("INVENTORY_MONGO_URL", "   ")]));

        let settings = load_from_empty_args().expect("config should load");
        assert_eq!(settings.mongo_url(), Err(SettingsError::MissingMongoUrl));
    }
}
