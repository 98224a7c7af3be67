//! Server configuration

use std::net::SocketAddr;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub addr: SocketAddr,
    /// Data directory (holds the SQLite database)
    pub data_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8000".parse().unwrap(),
            data_dir: "./data".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    /// Priority: environment variables > defaults.
    pub fn from_env() -> Self {
        let addr = std::env::var("TASKBOARD_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8000".to_string())
            .parse()
            .expect("Invalid TASKBOARD_ADDR");

        let data_dir =
            std::env::var("TASKBOARD_DATA_DIR").unwrap_or_else(|_| "./data".to_string());

        Self { addr, data_dir }
    }

    /// Set a new data directory
    pub fn with_data_dir(mut self, data_dir: impl Into<String>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Set a new bind address
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }
}
