//! Process settings read from the environment.

use crate::error::ConfigError;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db";
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub port: u16,
    pub database_url: String,
    /// JSON fixture loaded at boot, if set.
    pub seed_path: Option<PathBuf>,
    pub body_limit_bytes: usize,
}

impl Settings {
    /// Reads `PORT`, `DATABASE_URL`, `SEED_PATH` and `BODY_LIMIT_BYTES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match get("PORT") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidVar { var: "PORT", value: v })?,
            None => DEFAULT_PORT,
        };
        let database_url = get("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        if !database_url.starts_with("sqlite:") {
            return Err(ConfigError::UnsupportedDatabase(database_url));
        }
        let seed_path = get("SEED_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let body_limit_bytes = match get("BODY_LIMIT_BYTES") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidVar { var: "BODY_LIMIT_BYTES", value: v })?,
            None => DEFAULT_BODY_LIMIT_BYTES,
        };
        Ok(Self {
            port,
            database_url,
            seed_path,
            body_limit_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults() {
        let s = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(s.port, 3000);
        assert_eq!(s.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(s.seed_path, None);
        assert_eq!(s.body_limit_bytes, DEFAULT_BODY_LIMIT_BYTES);
    }

    #[test]
    fn overrides() {
        let s = Settings::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("SEED_PATH", "fixtures/seed.json"),
        ]))
        .unwrap();
        assert_eq!(s.port, 8080);
        assert_eq!(s.database_url, "sqlite::memory:");
        assert_eq!(s.seed_path, Some(PathBuf::from("fixtures/seed.json")));
    }

    #[test]
    fn bad_port() {
        let err = Settings::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { var: "PORT", .. }));
    }

    #[test]
    fn non_sqlite_url() {
        let err = Settings::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/swapi")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedDatabase(_)));
    }
}
