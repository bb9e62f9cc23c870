// Catalog loading: the built-in topic list and JSON catalog files.
//
// The built-in catalog is compiled into the binary so the picker works fully
// offline. A user catalog (same JSON shape: an array of topic records) can
// replace it, either via an explicit path or by dropping a file at
// ~/.config/charades/topics.json on Linux.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::{Catalog, TopicRecord};

/// The catalog shipped with the binary.
const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/topics.json");

/// File name looked up inside the user config directory.
const USER_CATALOG_FILE: &str = "topics.json";

/// Returns the default location of the user catalog override.
/// Uses the platform config directory: ~/.config/charades/topics.json on Linux.
pub fn default_catalog_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("charades")
        .join(USER_CATALOG_FILE)
}

/// Parse the built-in catalog.
pub fn builtin() -> Result<Catalog> {
    from_json_str(BUILTIN_CATALOG_JSON).context("Built-in topic catalog is corrupt")
}

/// Parse a catalog from a JSON array of topic records.
pub fn from_json_str(json: &str) -> Result<Catalog> {
    let topics: Vec<TopicRecord> =
        serde_json::from_str(json).context("Failed to parse topic catalog JSON")?;
    let catalog = Catalog::new(topics);

    // The selector copes without General topics, but the fallback chain then
    // ends at the first record instead of a random default.
    if catalog.general_count() == 0 {
        warn!(
            topics = catalog.len(),
            "Catalog has no General topics; fallback will use the first record"
        );
    }

    Ok(catalog)
}

/// Load a catalog from a JSON file on disk.
pub fn load_file(path: &Path) -> Result<Catalog> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read topic catalog: {}", path.display()))?;
    let catalog = from_json_str(&json)
        .with_context(|| format!("Invalid topic catalog: {}", path.display()))?;
    info!(
        path = %path.display(),
        topics = catalog.len(),
        "Loaded topic catalog"
    );
    Ok(catalog)
}
