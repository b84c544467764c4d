use std::path::PathBuf;

use crate::error::{Result, ShelfError};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub public_dir: PathBuf,
    pub log_filter: String,
}

impl Config {
    /// Read PORT, HOST, PUBLIC_DIR and RUST_LOG from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port_raw = env_or("PORT", &DEFAULT_PORT.to_string());
        let port = port_raw
            .trim()
            .parse::<u16>()
            .map_err(|_| ShelfError::Config(format!("PORT must be a port number, got {:?}", port_raw)))?;

        Ok(Self {
            host: env_or("HOST", "0.0.0.0"),
            port,
            public_dir: PathBuf::from(env_or("PUBLIC_DIR", "public")),
            log_filter: env_or("RUST_LOG", "info"),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.public_dir, PathBuf::from("public"));
        assert_eq!(cfg.log_filter, "info");
        assert_eq!(cfg.addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let cfg = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("PUBLIC_DIR", "/srv/shelf"),
        ]))
        .unwrap();
        assert_eq!(cfg.addr(), "127.0.0.1:8080");
        assert_eq!(cfg.public_dir, PathBuf::from("/srv/shelf"));
    }

    #[test]
    fn test_bad_port() {
        let err = Config::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ShelfError::Config(_)));
    }
}
