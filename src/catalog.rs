//! Static feature metadata: the universe of selectable features.
//!
//! The catalog is read-only input to everything else. It is validated once at
//! load time (duplicate names are a startup-fatal error, since nothing
//! downstream can recover from an ambiguous catalog) and never changes for
//! the lifetime of the process.

use crate::core::FeatureState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// A selectable project capability.
///
/// Features carry presentation metadata only: the display group they render
/// under (`None` = ungrouped) and the key the external docs collaborator uses
/// to look up help text. Identity is the name, which is unique per catalog.
///
/// # Example
///
/// ```rust
/// use togglekit::catalog::Feature;
///
/// let react = Feature::new("React", "react").with_group("Main library");
/// assert_eq!(react.name, "React");
/// assert_eq!(react.group.as_deref(), Some("Main library"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Unique display name, also the key into the feature state
    pub name: String,
    /// Display group; `None` renders ungrouped
    #[serde(default)]
    pub group: Option<String>,
    /// Lookup key for the external documentation collaborator
    pub doc_key: String,
}

impl Feature {
    /// Create an ungrouped feature.
    pub fn new(name: impl Into<String>, doc_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: None,
            doc_key: doc_key.into(),
        }
    }

    /// Assign the feature to a display group.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// Errors that can occur when loading a catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two features share a name, possibly across different groups.
    #[error("duplicate feature name '{name}' in catalog")]
    DuplicateName { name: String },
}

/// Validated, ordered-irrelevant set of features.
///
/// Construction checks the global-uniqueness invariant on feature names and
/// fails fast on violation; deserialization goes through the same check, so
/// a catalog in hand is always well-formed.
///
/// # Example
///
/// ```rust
/// use togglekit::catalog::{Feature, FeatureCatalog};
///
/// let catalog = FeatureCatalog::from_features(vec![
///     Feature::new("React", "react").with_group("Main library"),
///     Feature::new("ESLint", "eslint").with_group("Linting"),
/// ])
/// .unwrap();
///
/// assert!(catalog.contains("React"));
/// assert!(!catalog.contains("Vue"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Feature>", into = "Vec<Feature>")]
pub struct FeatureCatalog {
    features: Vec<Feature>,
}

impl FeatureCatalog {
    /// Build a catalog, validating name uniqueness.
    pub fn from_features(features: Vec<Feature>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::BTreeSet::new();
        for feature in &features {
            if !seen.insert(feature.name.as_str()) {
                return Err(CatalogError::DuplicateName {
                    name: feature.name.clone(),
                });
            }
        }
        Ok(Self { features })
    }

    /// Whether the catalog defines the named feature.
    pub fn contains(&self, name: &str) -> bool {
        self.features.iter().any(|f| f.name == name)
    }

    /// Look up a feature by name.
    pub fn get(&self, name: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.name == name)
    }

    /// All features, in declaration order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Partition the catalog by display group.
    ///
    /// Pure, deterministic grouping: the map is ordered by group name with
    /// the ungrouped (`None`) bucket first, and features keep their
    /// declaration order within each group. An empty catalog yields an empty
    /// grouping.
    pub fn groups(&self) -> BTreeMap<Option<&str>, Vec<&Feature>> {
        let mut groups: BTreeMap<Option<&str>, Vec<&Feature>> = BTreeMap::new();
        for feature in &self.features {
            groups
                .entry(feature.group.as_deref())
                .or_default()
                .push(feature);
        }
        groups
    }

    /// The all-unselected session starting state.
    ///
    /// Every cataloged feature gets an explicit `false` entry.
    pub fn initial_state(&self) -> FeatureState {
        self.features
            .iter()
            .map(|f| (f.name.clone(), false))
            .collect()
    }

    /// Number of features in the catalog.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl TryFrom<Vec<Feature>> for FeatureCatalog {
    type Error = CatalogError;

    fn try_from(features: Vec<Feature>) -> Result<Self, Self::Error> {
        Self::from_features(features)
    }
}

impl From<FeatureCatalog> for Vec<Feature> {
    fn from(catalog: FeatureCatalog) -> Self {
        catalog.features
    }
}
