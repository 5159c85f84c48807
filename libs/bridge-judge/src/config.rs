// Runtime settings shared by the API and CLI, read from the environment

use crate::catalog::ChallengeCatalog;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

pub const BIND_ADDR_VAR: &str = "BRIDGE_BIND_ADDR";
pub const CHALLENGES_PATH_VAR: &str = "BRIDGE_CHALLENGES_PATH";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    /// Catalog file; the built-in catalog is used when unset
    pub challenges_path: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup, so tests need not touch the process env
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid {}: {}", BIND_ADDR_VAR, bind_raw))?;

        let challenges_path = lookup(CHALLENGES_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            challenges_path,
        })
    }

    /// Catalog from the configured file, or the built-in one
    pub fn load_catalog(&self) -> Result<ChallengeCatalog> {
        match &self.challenges_path {
            Some(path) => {
                let catalog = ChallengeCatalog::load(path)?;
                info!(path = %path.display(), challenges = catalog.len(), "Loaded challenge catalog");
                Ok(catalog)
            }
            None => {
                info!("No {} set, using built-in challenges", CHALLENGES_PATH_VAR);
                Ok(ChallengeCatalog::builtin())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert!(settings.challenges_path.is_none());
        assert_eq!(settings.load_catalog().unwrap().len(), 1);
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            (BIND_ADDR_VAR, "127.0.0.1:8080"),
            (CHALLENGES_PATH_VAR, "config/challenges.json"),
        ]))
        .unwrap();
        assert_eq!(settings.bind_addr.port(), 8080);
        assert_eq!(settings.challenges_path, Some(PathBuf::from("config/challenges.json")));
    }

    #[test]
    fn test_blank_path_means_builtin() {
        let settings = Settings::from_lookup(lookup_from(&[(CHALLENGES_PATH_VAR, "  ")])).unwrap();
        assert!(settings.challenges_path.is_none());
    }

    #[test]
    fn test_invalid_bind_addr() {
        let err = Settings::from_lookup(lookup_from(&[(BIND_ADDR_VAR, "not-an-addr")])).unwrap_err();
        assert!(err.to_string().contains(BIND_ADDR_VAR));
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        let settings = Settings {
            bind_addr: DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap(),
            challenges_path: Some(PathBuf::from("/nonexistent/challenges.json")),
        };
        assert!(settings.load_catalog().is_err());
    }
}
