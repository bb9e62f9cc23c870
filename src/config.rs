use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::catalog::{loader, Catalog};

/// Where the topic catalog comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogSource {
    /// The catalog compiled into the binary (default)
    Builtin,
    /// A JSON file, from --catalog, CHARADES_CATALOG, or the user config dir
    File(PathBuf),
}

impl CatalogSource {
    pub fn load(&self) -> Result<Catalog> {
        match self {
            CatalogSource::Builtin => loader::builtin(),
            CatalogSource::File(path) => loader::load_file(path),
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// override whatever is set here.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Explicit catalog file (CHARADES_CATALOG env var)
    pub catalog_path: Option<PathBuf>,
    /// Fixed RNG seed for reproducible draws (CHARADES_SEED env var)
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Nothing is required; an unset variable falls back to the default.
    pub fn load() -> Result<Self> {
        let catalog_path = env::var("CHARADES_CATALOG")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let seed = match env::var("CHARADES_SEED") {
            Ok(raw) if !raw.trim().is_empty() => Some(parse_seed(&raw)?),
            _ => None,
        };

        Ok(Self { catalog_path, seed })
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, catalog: Option<PathBuf>, seed: Option<u64>) -> Self {
        if catalog.is_some() {
            self.catalog_path = catalog;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Decide which catalog to load.
    ///
    /// An explicit path always wins. Otherwise a topics.json in the user
    /// config directory is picked up if present, else the built-in list.
    pub fn catalog_source(&self) -> CatalogSource {
        if let Some(path) = &self.catalog_path {
            return CatalogSource::File(path.clone());
        }

        let user_catalog = loader::default_catalog_path();
        if user_catalog.exists() {
            CatalogSource::File(user_catalog)
        } else {
            CatalogSource::Builtin
        }
    }
}

fn parse_seed(raw: &str) -> Result<u64> {
    raw.trim().parse::<u64>().with_context(|| {
        format!("CHARADES_SEED must be a non-negative integer, got {raw:?}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed(" 42 ").unwrap(), 42);
        assert!(parse_seed("forty-two").is_err());
        assert!(parse_seed("-1").is_err());
    }

    #[test]
    fn test_explicit_path_wins() {
        let config = Config::default().with_overrides(Some(PathBuf::from("/tmp/t.json")), None);
        assert_eq!(
            config.catalog_source(),
            CatalogSource::File(PathBuf::from("/tmp/t.json"))
        );
    }

    #[test]
    fn test_overrides_keep_env_values_when_absent() {
        let config = Config {
            catalog_path: None,
            seed: Some(7),
        }
        .with_overrides(None, None);
        assert_eq!(config.seed, Some(7));

        let config = config.with_overrides(None, Some(9));
        assert_eq!(config.seed, Some(9));
    }
}
