//! Server configuration
//!
//! The external interface is deliberately fixed: one HTTP endpoint on a
//! compiled-in port, one file-backed store. There are no CLI flags and no
//! environment overrides to resolve.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Port the HTTP endpoint listens on
pub const DEFAULT_PORT: u16 = 5000;

/// Location of the SQLite store holding the songs table
pub const DEFAULT_DATABASE_PATH: &str = "data/tunebook.db";

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
        }
    }
}

impl Config {
    /// Socket address the server binds to (loopback only)
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], self.port))
    }
}
