//! Configuration for itrack
//!
//! Everything comes from the environment: the storage path and the port.

use crate::{Error, Result};
use std::path::PathBuf;

const DB_ENV: &str = "ITRACK_DB";
const PORT_ENV: &str = "ITRACK_PORT";

const DEFAULT_DB: &str = "itrack.jsonl";
const DEFAULT_PORT: u16 = 5000;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSONL data file
    pub db_path: PathBuf,

    /// Port the API listens on
    pub port: u16,
}

impl Config {
    /// Read configuration from the environment
    ///
    /// `ITRACK_DB` defaults to `itrack.jsonl` in the working directory;
    /// `ITRACK_PORT` defaults to 5000. A set-but-unparsable port is an error.
    pub fn from_env() -> Result<Self> {
        let db_path = std::env::var(DB_ENV)
            .ok()
            .filter(|s| !s.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DB), PathBuf::from);

        let port = match std::env::var(PORT_ENV) {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("invalid {PORT_ENV}: {raw}")))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { db_path, port })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB),
            port: DEFAULT_PORT,
        }
    }
}
