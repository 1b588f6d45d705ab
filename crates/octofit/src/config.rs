//! Database connection configuration.

use std::env;

/// Connection string used when `MONGODB_URI` is not set.
pub const DEFAULT_URI: &str = "mongodb://localhost:27017";

/// Database name used when `OCTOFIT_DB` is not set.
pub const DEFAULT_DATABASE: &str = "octofit_db";

/// Connection target for the OctoFit database.
///
/// The target is always passed in explicitly; nothing below this layer
/// hard-codes a server address or database name.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// MongoDB connection string.
    pub uri: String,
    /// Name of the database holding the OctoFit collections.
    pub database: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Reads the target from `MONGODB_URI` and `OCTOFIT_DB`, falling back
    /// to the local defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            uri: env::var("MONGODB_URI").unwrap_or_else(|_| DEFAULT_URI.to_string()),
            database: env::var("OCTOFIT_DB").unwrap_or_else(|_| DEFAULT_DATABASE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_local_octofit_db() {
        let config = DatabaseConfig::default();
        assert_eq!(config.uri, "mongodb://localhost:27017");
        assert_eq!(config.database, "octofit_db");
    }
}
