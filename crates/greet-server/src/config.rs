use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub db_readers: usize,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = var("GREET_PORT", "8080");
        let port: u16 = port
            .parse()
            .with_context(|| format!("GREET_PORT is not a valid port: {port}"))?;

        let db_readers = var("GREET_DB_READERS", &greet_db::DEFAULT_READER_POOL_SIZE.to_string());
        let db_readers: usize = db_readers
            .parse()
            .with_context(|| format!("GREET_DB_READERS is not a number: {db_readers}"))?;

        // Every pooled connection would get its own private in-memory database.
        let db_path = var("GREET_DB_PATH", "greetings.db");
        if db_path == ":memory:" || db_path.is_empty() {
            bail!("GREET_DB_PATH must name a database file, got {db_path:?}");
        }

        Ok(Self {
            db_path: PathBuf::from(db_path),
            host: var("GREET_HOST", "0.0.0.0"),
            port,
            db_readers,
            static_dir: PathBuf::from(var("GREET_STATIC_DIR", "static")),
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("greetings.db"));
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.db_readers, greet_db::DEFAULT_READER_POOL_SIZE);
        assert_eq!(cfg.addr().unwrap().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn overrides() {
        let cfg = config(&[
            ("GREET_DB_PATH", "/tmp/g.db"),
            ("GREET_HOST", "127.0.0.1"),
            ("GREET_PORT", "9000"),
            ("GREET_DB_READERS", "2"),
        ])
        .unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/g.db"));
        assert_eq!(cfg.db_readers, 2);
        assert_eq!(cfg.addr().unwrap().to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn bad_port_is_an_error() {
        assert!(config(&[("GREET_PORT", "eighty")]).is_err());
        assert!(config(&[("GREET_DB_READERS", "-1")]).is_err());
    }

    #[test]
    fn in_memory_db_path_is_an_error() {
        assert!(config(&[("GREET_DB_PATH", ":memory:")]).is_err());
        assert!(config(&[("GREET_DB_PATH", "")]).is_err());
    }
}
