//! Service configuration.
//!
//! All settings have defaults suitable for local development and can be
//! overridden through environment variables.

use std::env;

/// Application configuration shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub host: String,

    /// Port the HTTP server listens on.
    pub port: u16,

    /// MongoDB connection URL.
    pub mongodb_url: String,

    /// Name of the MongoDB database holding the query collection.
    pub database: String,

    /// Directory containing the HTML view files.
    pub views_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            mongodb_url: "mongodb://127.0.0.1:27017".to_string(),
            database: "querydb".to_string(),
            views_dir: "views".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration from the environment, falling back to
    /// defaults for anything unset.
    pub fn load() -> Self {
        let defaults = Self::default();
        Self {
            host: env_or("HOST", defaults.host),
            port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            mongodb_url: env_or("MONGODB_URL", defaults.mongodb_url),
            database: env_or("MONGODB_DATABASE", defaults.database),
            views_dir: env_or("VIEWS_DIR", defaults.views_dir),
        }
    }

    /// Returns the socket address string to bind to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_or(key: &str, default: String) -> String {
    env::var(key).ok().filter(|v| !v.is_empty()).unwrap_or(default)
}
