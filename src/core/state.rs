//! The feature-state map and toggle-intent events.
//!
//! Feature state is an immutable value: every mutation produces a new map,
//! so rules compose as pure functions and the engine never mutates its input.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from feature name to selected/unselected.
///
/// Features absent from the map read as unselected, so an empty state is a
/// valid "nothing selected yet" starting point. The map is ordered
/// (`BTreeMap`) so iteration and serialization are deterministic rather than
/// dependent on hash order.
///
/// `FeatureState` is a pure value: [`set`](Self::set) returns a new state and
/// leaves the original untouched.
///
/// # Example
///
/// ```rust
/// use togglekit::core::FeatureState;
///
/// let state = FeatureState::new();
/// assert!(!state.selected("React"));
///
/// let state = state.set("React", true);
/// assert!(state.selected("React"));
/// assert!(!state.selected("Vue"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureState {
    entries: BTreeMap<String, bool>,
}

impl FeatureState {
    /// Create an empty state (every feature reads as unselected).
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Whether the named feature is currently selected.
    ///
    /// Absent entries read as `false`.
    pub fn selected(&self, feature: &str) -> bool {
        self.entries.get(feature).copied().unwrap_or(false)
    }

    /// Set one feature's value, returning a new state.
    ///
    /// This is a pure function - it does not mutate the existing state
    /// but returns a new one with the entry overwritten.
    ///
    /// # Example
    ///
    /// ```rust
    /// use togglekit::core::FeatureState;
    ///
    /// let state = FeatureState::new();
    /// let next = state.set("ESLint", true);
    ///
    /// assert!(!state.selected("ESLint")); // Original unchanged
    /// assert!(next.selected("ESLint"));
    /// ```
    #[must_use]
    pub fn set(&self, feature: &str, selected: bool) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(feature.to_string(), selected);
        Self { entries }
    }

    /// Names of all currently selected features, in name order.
    pub fn selected_features(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(name, _)| name.as_str())
    }

    /// All entries in the map, including explicit `false` ones.
    pub fn entries(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries
            .iter()
            .map(|(name, selected)| (name.as_str(), *selected))
    }

    /// The entries whose effective value differs between `self` and `next`.
    ///
    /// Comparison uses read semantics (absent = `false`), so adding an entry
    /// with value `false` is not reported as a change. The presentation layer
    /// uses this to re-render only the checkboxes that actually moved.
    ///
    /// # Example
    ///
    /// ```rust
    /// use togglekit::core::FeatureState;
    ///
    /// let before = FeatureState::new().set("React", true);
    /// let after = before.set("React", false).set("Vue", true);
    ///
    /// let changed = before.diff(&after);
    /// assert_eq!(changed.get("React"), Some(&false));
    /// assert_eq!(changed.get("Vue"), Some(&true));
    /// ```
    pub fn diff(&self, next: &Self) -> BTreeMap<String, bool> {
        let mut changed = BTreeMap::new();
        for name in self.entries.keys().chain(next.entries.keys()) {
            let value = next.selected(name);
            if self.selected(name) != value {
                changed.insert(name.clone(), value);
            }
        }
        changed
    }

    /// Number of explicit entries in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no explicit entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for FeatureState {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, selected)| (name.into(), selected))
                .collect(),
        }
    }
}

/// A user-originated request to set one feature's selection.
///
/// This is the input half of the call contract with the presentation layer:
/// the checkbox handler raises a `ToggleEvent` and receives back an
/// [`Outcome`](crate::core::Outcome).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleEvent {
    /// The feature the user just clicked
    pub feature: String,
    /// `true` if the click requests selection, `false` for deselection
    pub selected: bool,
}

impl ToggleEvent {
    /// Create a toggle-intent event.
    pub fn new(feature: impl Into<String>, selected: bool) -> Self {
        Self {
            feature: feature.into(),
            selected,
        }
    }
}
