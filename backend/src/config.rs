//! Process configuration read from the environment.
//!
//! A `.env` file in the working directory is loaded by `main` before
//! `Config::from_env` runs, so both sources are supported.

use log::warn;
use std::env;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_UPLOAD_DIR: &str = "uploads";

#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address (`HOST`).
    pub host: String,
    /// Listening port (`PORT`).
    pub port: u16,
    /// Database location (`DB_CONNECT`). `None` keeps the server up without a
    /// database; every store operation then fails.
    pub db_connect: Option<String>,
    /// Directory uploaded files are written to and served from (`UPLOAD_DIR`).
    pub upload_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Invalid PORT value {:?}, falling back to {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            db_connect: lookup("DB_CONNECT").filter(|uri| !uri.trim().is_empty()),
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
        }
    }
}
