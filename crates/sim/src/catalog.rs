//! Creature kind catalog.
//!
//! Maps kind names to movement templates. The built-in bestiary covers the
//! speed/gait matrix the trials need; custom catalogs load from RON so
//! calibration runs can be pointed at different creature sets without a
//! rebuild.

use std::collections::HashMap;
use std::path::Path;

use prowl_core::{CreatureOracle, CreatureTemplate, Gait};

/// Errors raised while loading a catalog from RON.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read creature catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed creature catalog: {0}")]
    Parse(String),
}

/// Named set of creature templates.
#[derive(Clone, Debug, Default)]
pub struct CreatureCatalog {
    kinds: HashMap<String, CreatureTemplate>,
}

impl CreatureCatalog {
    /// The standard bestiary.
    ///
    /// `walker` is the reference quarry at the baseline rate; the rest
    /// span the speed range on both gaits.
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        catalog.insert("walker", CreatureTemplate::builder().speed(100).build());
        catalog.insert("boar", CreatureTemplate::builder().speed(100).build());
        catalog.insert(
            "shuffler",
            CreatureTemplate::builder().speed(70).gait(Gait::Shambling).build(),
        );
        catalog.insert(
            "hound",
            CreatureTemplate::builder().speed(150).gait(Gait::Shambling).build(),
        );
        catalog.insert("brute", CreatureTemplate::builder().speed(120).build());
        catalog.insert(
            "ravager",
            CreatureTemplate::builder().speed(180).gait(Gait::Shambling).build(),
        );
        catalog
    }

    /// Parses a catalog from RON text: a map of kind name to template,
    /// e.g. `{ "walker": (speed: 100, gait: Direct) }`.
    pub fn from_ron(source: &str) -> Result<Self, CatalogError> {
        let kinds: HashMap<String, CreatureTemplate> =
            ron::from_str(source).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(Self { kinds })
    }

    /// Reads and parses a RON catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_ron(&source)
    }

    pub fn insert(&mut self, kind: impl Into<String>, template: CreatureTemplate) {
        self.kinds.insert(kind.into(), template);
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl CreatureOracle for CreatureCatalog {
    fn template(&self, kind: &str) -> Option<CreatureTemplate> {
        self.kinds.get(kind).copied()
    }

    fn kinds(&self) -> Vec<String> {
        let mut kinds: Vec<String> = self.kinds.keys().cloned().collect();
        kinds.sort();
        kinds
    }
}
