//! Destination catalog loading
//!
//! The catalog is a JSON array of destination records. It is loaded once per
//! run and never mutated. A copy of the bundled sample is compiled into the
//! binary so the planner works without a data directory.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::Destination;

/// Bundled sample catalog
pub const BUILTIN_CATALOG: &str = include_str!("../data/destinations.json");

/// Catalog location checked in the working directory when none is configured
pub const DEFAULT_CATALOG_PATH: &str = "data/destinations.json";

/// Errors raised while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the loaded catalog came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Builtin,
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Builtin => write!(f, "built-in catalog"),
        }
    }
}

/// Ordered, read-only list of destinations
#[derive(Debug, Clone)]
pub struct Catalog {
    destinations: Vec<Destination>,
    source: CatalogSource,
}

impl Catalog {
    /// Parse a catalog from JSON text
    pub fn from_json(text: &str, source: CatalogSource) -> Result<Self, CatalogError> {
        debug!(%source, len = text.len(), "Catalog::from_json: called");
        let destinations: Vec<Destination> = serde_json::from_str(text).map_err(|e| CatalogError::Parse {
            origin: source.to_string(),
            source: e,
        })?;
        Ok(Self { destinations, source })
    }

    /// Load a catalog file
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!(?path, "Catalog::load_file: called");
        let text = std::fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&text, CatalogSource::File(path.to_path_buf()))
    }

    /// The catalog compiled into the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG, CatalogSource::Builtin)
    }

    /// Resolve the catalog for this run
    ///
    /// An explicit path must load. Without one, `data/destinations.json` in the
    /// working directory is used when present, otherwise the built-in catalog.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match explicit {
            Some(path) => Self::load_file(path)?,
            None => {
                let local = PathBuf::from(DEFAULT_CATALOG_PATH);
                if local.exists() {
                    Self::load_file(&local)?
                } else {
                    debug!("Catalog::resolve: no local catalog, using built-in");
                    Self::builtin()?
                }
            }
        };
        info!(source = %catalog.source, count = catalog.len(), "Loaded destination catalog");
        Ok(catalog)
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BudgetLevel;
    use tempfile::TempDir;

    const TWO_ENTRIES: &str = r#"[
        {"name": "Lisbon", "tags": ["culture", "food"], "budget_level": "medium",
         "best_seasons": ["spring"], "activities": ["Ride Tram 28"]},
        {"name": "Cusco", "tags": ["history"], "budget_level": "low", "best_seasons": ["winter"]}
    ]"#;

    #[test]
    fn test_from_json_preserves_order() {
        let catalog = Catalog::from_json(TWO_ENTRIES, CatalogSource::Builtin).unwrap();
        let names: Vec<&str> = catalog.destinations().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Lisbon", "Cusco"]);
        assert_eq!(catalog.destinations()[1].budget_level, BudgetLevel::Low);
    }

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.source(), &CatalogSource::Builtin);
        assert!(
            catalog
                .destinations()
                .iter()
                .any(|d| d.budget_level == BudgetLevel::Medium && d.has_any_tag(&["culture".to_string()]))
        );
    }

    #[test]
    fn test_load_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.json");
        std::fs::write(&path, TWO_ENTRIES).unwrap();

        let catalog = Catalog::load_file(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.source(), &CatalogSource::File(path));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let result = Catalog::load_file(temp.path().join("missing.json"));
        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }

    #[test]
    fn test_invalid_budget_level_is_parse_error() {
        let json = r#"[{"name": "X", "tags": [], "budget_level": "lavish", "best_seasons": []}]"#;
        let result = Catalog::from_json(json, CatalogSource::Builtin);
        assert!(matches!(result, Err(CatalogError::Parse { .. })));
    }

    #[test]
    fn test_resolve_explicit_path_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.json");
        assert!(Catalog::resolve(Some(&missing)).is_err());
    }
}
