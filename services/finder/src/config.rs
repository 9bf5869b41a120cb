//! Service configuration

use std::env;

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
}

impl ServerConfig {
    /// Create a new ServerConfig from environment variables
    ///
    /// # Environment Variables
    /// - `FINDER_HOST`: Interface to bind (default: "0.0.0.0")
    /// - `FINDER_PORT`: Port to bind (default: 5000)
    pub fn from_env() -> Self {
        let host = env::var("FINDER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("FINDER_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5000);

        Self { host, port }
    }

    /// Socket address to listen on
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
