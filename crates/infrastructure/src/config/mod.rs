//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `database`: PostgreSQL settings
//!
//! Values are layered: built-in defaults, then an optional `config.toml`,
//! then `CHIRPY_*` environment variables, then the two variables
//! documented for deployments (`DB_URL`, `PLATFORM`), which win over
//! everything.

mod database;
mod server;

use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

fn default_platform() -> String {
    "prod".to_string()
}

/// Top-level application configuration, read once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Database settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Deployment platform; the destructive reset endpoint is only
    /// enabled when this is exactly `dev`
    #[serde(default = "default_platform")]
    pub platform: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            platform: default_platform(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, optional file, and environment
    ///
    /// # Errors
    ///
    /// Returns an error when a source cannot be read or a value fails to
    /// deserialize; startup treats that as fatal.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., CHIRPY_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("CHIRPY")
                    .separator("_")
                    .try_parsing(true),
            )
            // The documented deployment variables take precedence
            .set_override_option("database.url", std::env::var("DB_URL").ok())?
            .set_override_option("platform", std::env::var("PLATFORM").ok())?;

        builder.build()?.try_deserialize()
    }

    /// Whether the destructive admin surface is enabled
    ///
    /// Matches the platform string exactly; anything but `dev` (including
    /// misspellings) stays locked down.
    pub fn dev_platform(&self) -> bool {
        self.platform == "dev"
    }
}
