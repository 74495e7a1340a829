//! Traveler registry.
//!
//! A fixed, ordered catalog of travelers. The catalog is validated once
//! when it is built, so a bad speed stops the process at startup instead
//! of surfacing as a nonsensical estimate later on.

mod catalog;
mod error;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::domain::{DomainError, Traveler};

pub use catalog::default_travelers;
pub use error::RegistryLoadError;

/// Read-only, ordered collection of travelers.
#[derive(Debug, Clone, Default)]
pub struct TravelerRegistry {
    /// Travelers in catalog order.
    travelers: Vec<Arc<Traveler>>,
    /// Name → position in `travelers`.
    index: HashMap<String, usize>,
}

impl TravelerRegistry {
    /// Start building a registry.
    pub fn builder() -> TravelerRegistryBuilder {
        TravelerRegistryBuilder::new()
    }

    /// Look up a traveler by exact name.
    ///
    /// Unknown names yield `None`; callers treat that as "nothing selected".
    pub fn lookup(&self, name: &str) -> Option<Arc<Traveler>> {
        self.index
            .get(name)
            .map(|&idx| Arc::clone(&self.travelers[idx]))
    }

    /// Iterate travelers in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Traveler>> {
        self.travelers.iter()
    }

    pub fn len(&self) -> usize {
        self.travelers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.travelers.is_empty()
    }

    /// Load a catalog from JSON: `[{"name": "...", "top_speed": 1.4}, ...]`.
    pub fn from_json(json: &str) -> Result<Self, RegistryLoadError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;

        entries
            .into_iter()
            .fold(Self::builder(), |builder, entry| {
                builder.add(entry.name, entry.top_speed)
            })
            .build()
            .map_err(RegistryLoadError::from)
    }

    /// Load a catalog from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RegistryLoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RegistryLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

/// On-disk catalog entry.
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    name: String,
    top_speed: f64,
}

/// Builder for a [`TravelerRegistry`].
///
/// Entries are validated in `build`, which fails on the first bad one.
#[derive(Debug, Default)]
pub struct TravelerRegistryBuilder {
    entries: Vec<(String, f64)>,
}

impl TravelerRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a traveler with top speed in meters per second.
    pub fn add(mut self, name: impl Into<String>, top_speed: f64) -> Self {
        self.entries.push((name.into(), top_speed));
        self
    }

    /// Validate every entry and build the registry.
    pub fn build(self) -> Result<TravelerRegistry, DomainError> {
        let mut travelers = Vec::with_capacity(self.entries.len());
        let mut index = HashMap::with_capacity(self.entries.len());

        for (name, top_speed) in self.entries {
            let traveler = Traveler::new(name, top_speed)?;
            if index.contains_key(traveler.name()) {
                return Err(DomainError::DuplicateTraveler(traveler.name().to_string()));
            }
            index.insert(traveler.name().to_string(), travelers.len());
            travelers.push(Arc::new(traveler));
        }

        Ok(TravelerRegistry { travelers, index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn small() -> TravelerRegistry {
        TravelerRegistry::builder()
            .add("Snail", 0.013)
            .add("Cheetah", 33.5)
            .build()
            .unwrap()
    }

    #[test]
    fn lookup_exact_name() {
        let registry = small();
        let cheetah = registry.lookup("Cheetah").unwrap();
        assert_eq!(cheetah.top_speed().meters_per_second(), 33.5);
    }

    #[test]
    fn lookup_unknown_is_none() {
        let registry = small();
        assert!(registry.lookup("Dragon").is_none());
        // Exact match only
        assert!(registry.lookup("cheetah").is_none());
        assert!(registry.lookup("Cheetah ").is_none());
    }

    #[test]
    fn preserves_catalog_order() {
        let registry = small();
        let names: Vec<&str> = registry.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Snail", "Cheetah"]);
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
    }

    #[test]
    fn build_fails_fast_on_invalid_speed() {
        let err = TravelerRegistry::builder()
            .add("Snail", 0.013)
            .add("Statue", 0.0)
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::InvalidTravelerSpeed {
                name: "Statue".into(),
                speed: 0.0
            }
        );
    }

    #[test]
    fn build_rejects_duplicates() {
        let err = TravelerRegistry::builder()
            .add("Cheetah", 33.5)
            .add("Cheetah", 30.0)
            .build()
            .unwrap_err();

        assert_eq!(err, DomainError::DuplicateTraveler("Cheetah".into()));
    }

    #[test]
    fn build_rejects_empty_name() {
        let err = TravelerRegistry::builder().add("", 1.0).build().unwrap_err();
        assert_eq!(err, DomainError::EmptyName);
    }

    #[test]
    fn from_json_loads_in_order() {
        let registry = TravelerRegistry::from_json(
            r#"[{"name": "Tortoise", "top_speed": 0.075}, {"name": "Horse", "top_speed": 19.4}]"#,
        )
        .unwrap();

        let names: Vec<&str> = registry.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Tortoise", "Horse"]);
    }

    #[test]
    fn from_json_validates_entries() {
        let err =
            TravelerRegistry::from_json(r#"[{"name": "Anchor", "top_speed": -1}]"#).unwrap_err();
        assert!(matches!(
            err,
            RegistryLoadError::Invalid(DomainError::InvalidTravelerSpeed { .. })
        ));

        let err = TravelerRegistry::from_json("not json").unwrap_err();
        assert!(matches!(err, RegistryLoadError::Json(_)));
    }

    #[test]
    fn from_file_reads_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "Kite", "top_speed": 12.0}}]"#).unwrap();

        let registry = TravelerRegistry::from_file(file.path()).unwrap();
        assert!(registry.lookup("Kite").is_some());
    }

    #[test]
    fn from_file_missing_path() {
        let err = TravelerRegistry::from_file("/nonexistent/travelers.json").unwrap_err();
        assert!(matches!(err, RegistryLoadError::Io { .. }));
    }
}
