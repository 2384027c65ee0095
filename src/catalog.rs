//! Aetheryte catalog
//!
//! The list of fast-travel anchors the matcher searches. Entries come from a
//! JSON file or the built-in demo set; anything that can hand out entries in
//! order can stand in through [`CandidateSource`].

use crate::error::{GoError, GoResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// A single aetheryte (waypoint) entry
///
/// Either name may be missing when the underlying data could not be
/// resolved; the matcher skips such entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aetheryte {
    /// Display name of the aetheryte, e.g. "Summerford Farms"
    #[serde(rename = "name", default)]
    pub primary_name: Option<String>,
    /// Zone containing the aetheryte, e.g. "Middle La Noscea"
    #[serde(rename = "zone", default)]
    pub secondary_name: Option<String>,
    pub id: u32,
    #[serde(default)]
    pub sub_id: u8,
    /// Personal residence instances (apartments)
    #[serde(rename = "private", default)]
    pub is_private_variant: bool,
}

impl Aetheryte {
    pub fn new(name: &str, zone: &str, id: u32, sub_id: u8) -> Self {
        Self {
            primary_name: Some(name.to_string()),
            secondary_name: Some(zone.to_string()),
            id,
            sub_id,
            is_private_variant: false,
        }
    }

    /// Mark this entry as a private residence variant
    pub fn private(mut self) -> Self {
        self.is_private_variant = true;
        self
    }
}

/// Read-only, ordered supply of candidate entries
pub trait CandidateSource {
    fn candidates(&self) -> Box<dyn Iterator<Item = &Aetheryte> + '_>;
}

impl CandidateSource for [Aetheryte] {
    fn candidates(&self) -> Box<dyn Iterator<Item = &Aetheryte> + '_> {
        Box::new(self.iter())
    }
}

impl CandidateSource for Vec<Aetheryte> {
    fn candidates(&self) -> Box<dyn Iterator<Item = &Aetheryte> + '_> {
        Box::new(self.iter())
    }
}

impl<S: CandidateSource + ?Sized> CandidateSource for &S {
    fn candidates(&self) -> Box<dyn Iterator<Item = &Aetheryte> + '_> {
        (**self).candidates()
    }
}

/// An owned aetheryte list, usually loaded from disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    aetherytes: Vec<Aetheryte>,
}

impl Catalog {
    pub fn new(aetherytes: Vec<Aetheryte>) -> Self {
        Self { aetherytes }
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> GoResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GoError::Catalog(format!("{}: {}", path.display(), e)))?;
        let catalog = Self::from_json(&content)?;
        info!(
            "📖 Loaded {} aetherytes from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> GoResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> GoResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Write the catalog as pretty JSON
    pub fn save(&self, path: &Path) -> GoResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        debug!("Saved {} aetherytes to {}", self.len(), path.display());
        Ok(())
    }

    /// A small built-in set of well-known aetherytes
    pub fn demo() -> Self {
        Self::new(vec![
            Aetheryte::new("Limsa Lominsa Lower Decks", "Limsa Lominsa Lower Decks", 8, 0),
            Aetheryte::new("Summerford Farms", "Middle La Noscea", 52, 0),
            Aetheryte::new("Bentbranch Meadows", "Central Shroud", 3, 0),
            Aetheryte::new("Camp Drybone", "Eastern Thanalan", 18, 0),
            Aetheryte::new("Camp Bluefog", "Northern Thanalan", 22, 0),
            Aetheryte::new("Helix", "Azys Lla", 74, 0),
            Aetheryte::new("Ostall Imperative", "Lakeland", 133, 0),
            Aetheryte::new("Old Sharlayan", "Old Sharlayan", 182, 0),
            Aetheryte::new("The Crystarium", "The Crystarium", 134, 0),
            Aetheryte::new("Estate Hall (Private)", "Mist", 96, 128).private(),
        ])
    }

    pub fn len(&self) -> usize {
        self.aetherytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aetherytes.is_empty()
    }

    pub fn aetherytes(&self) -> &[Aetheryte] {
        &self.aetherytes
    }
}

impl CandidateSource for Catalog {
    fn candidates(&self) -> Box<dyn Iterator<Item = &Aetheryte> + '_> {
        Box::new(self.aetherytes.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_from_json() {
        let json = r#"[
            {"name": "Summerford Farms", "zone": "Middle La Noscea", "id": 52},
            {"name": "Estate Hall (Private)", "zone": "Mist", "id": 96, "sub_id": 128, "private": true},
            {"zone": "Unknown", "id": 1}
        ]"#;
        let catalog = Catalog::from_json(json).expect("Failed to parse catalog");
        assert_eq!(catalog.len(), 3);

        let entries = catalog.aetherytes();
        assert_eq!(entries[0], Aetheryte::new("Summerford Farms", "Middle La Noscea", 52, 0));
        assert!(entries[1].is_private_variant);
        assert_eq!(entries[1].sub_id, 128);
        assert_eq!(entries[2].primary_name, None);
    }

    #[test]
    fn test_catalog_invalid_json() {
        assert!(matches!(
            Catalog::from_json("{ not a list"),
            Err(GoError::Json(_))
        ));
    }

    #[test]
    fn test_catalog_save_and_load() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested/catalog.json");

        let catalog = Catalog::demo();
        catalog.save(&path).expect("Failed to save catalog");
        let restored = Catalog::load(&path).expect("Failed to load catalog");
        assert_eq!(catalog, restored);
    }

    #[test]
    fn test_catalog_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let result = Catalog::load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(GoError::Catalog(_))));
    }

    #[test]
    fn test_sources_preserve_order() {
        let entries = vec![
            Aetheryte::new("Helix", "Azys Lla", 74, 0),
            Aetheryte::new("Old Sharlayan", "Old Sharlayan", 182, 0),
        ];
        let ids: Vec<u32> = entries.candidates().map(|a| a.id).collect();
        assert_eq!(ids, vec![74, 182]);

        let slice: &[Aetheryte] = &entries;
        assert_eq!(slice.candidates().count(), 2);
    }
}
