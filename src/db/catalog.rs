use log::{info, warn};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::models::activity::Activity;

const SEED_ACTIVITIES: &str = include_str!("../../data/activities.json");

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    DuplicateId(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "Failed to read catalog: {}", err),
            CatalogError::Parse(err) => write!(f, "Failed to parse catalog: {}", err),
            CatalogError::DuplicateId(id) => write!(f, "Duplicate activity id: {}", id),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err)
    }
}

/// The discoverable activities, in display order.
#[derive(Debug, Clone, Default)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
}

impl ActivityCatalog {
    pub fn new(activities: Vec<Activity>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for activity in &activities {
            if !seen.insert(activity.id.as_str()) {
                return Err(CatalogError::DuplicateId(activity.id.clone()));
            }
        }
        Ok(Self { activities })
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// The catalog bundled with the binary.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::from_json(SEED_ACTIVITIES)
    }

    /// Load `path`, falling back to the bundled catalog when it is unusable.
    pub fn load_or_seed(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(catalog) => {
                info!("Loaded {} activities from {}", catalog.len(), path.display());
                Ok(catalog)
            }
            Err(e) => {
                warn!("Using bundled activities, {} unusable: {}", path.display(), e);
                Self::seeded()
            }
        }
    }

    pub fn all(&self) -> &[Activity] {
        &self.activities
    }

    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    /// First `limit` activities other than `id`.
    pub fn related(&self, id: &str, limit: usize) -> Vec<Activity> {
        self.activities
            .iter()
            .filter(|a| a.id != id)
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_parses_with_unique_ids() {
        let catalog = ActivityCatalog::seeded().unwrap();
        assert!(catalog.len() >= 10);
        assert_eq!(catalog.get("1").unwrap().title, "Nasi Lemak at Village Park");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let raw = r#"[
            {"id":"a","title":"A","category":"Food","location":"","image":"","price":"1"},
            {"id":"a","title":"B","category":"Food","location":"","image":"","price":"2"}
        ]"#;
        assert!(matches!(
            ActivityCatalog::from_json(raw),
            Err(CatalogError::DuplicateId(id)) if id == "a"
        ));
    }

    #[test]
    fn test_related_skips_current() {
        let catalog = ActivityCatalog::seeded().unwrap();
        let related = catalog.related("1", 3);
        assert_eq!(related.len(), 3);
        assert!(related.iter().all(|a| a.id != "1"));
    }

    #[test]
    fn test_missing_file_falls_back_to_seed() {
        let catalog = ActivityCatalog::load_or_seed("/nonexistent/activities.json").unwrap();
        assert_eq!(catalog.len(), ActivityCatalog::seeded().unwrap().len());
    }
}
