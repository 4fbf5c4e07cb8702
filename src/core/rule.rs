//! Blocking and cascading rule types.
//!
//! Rules are pure functions over `(state, event)`. They encapsulate one
//! constraint each and are composed by the engine in a declared order, so no
//! single rule has to encode the full joint constraint graph.

use super::state::{FeatureState, ToggleEvent};

/// Pure predicate that can veto a toggle before it is applied.
///
/// A blocking rule sees the state as it was *before* the requested toggle. If
/// any registered blocking rule returns `true`, the toggle is rejected and
/// the state is returned unchanged.
///
/// # Example
///
/// ```rust
/// use togglekit::core::{BlockingRule, FeatureState, ToggleEvent};
///
/// // Forbid deselecting CSS while PostCSS is active.
/// let rule = BlockingRule::new("css_required_by_postcss", |state, event| {
///     event.feature == "CSS" && !event.selected && state.selected("PostCSS")
/// });
///
/// let state = FeatureState::new().set("PostCSS", true);
/// assert!(rule.vetoes(&state, &ToggleEvent::new("CSS", false)));
/// assert!(!rule.vetoes(&state, &ToggleEvent::new("CSS", true)));
/// ```
pub struct BlockingRule {
    name: &'static str,
    predicate: Box<dyn Fn(&FeatureState, &ToggleEvent) -> bool + Send + Sync>,
}

impl BlockingRule {
    /// Create a blocking rule from a pure predicate function.
    ///
    /// The predicate must be pure (deterministic, no side effects) and
    /// thread-safe (Send + Sync). The name identifies the rule in
    /// diagnostics and validation errors.
    pub fn new<F>(name: &'static str, predicate: F) -> Self
    where
        F: Fn(&FeatureState, &ToggleEvent) -> bool + Send + Sync + 'static,
    {
        Self {
            name,
            predicate: Box::new(predicate),
        }
    }

    /// The rule's diagnostic name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check whether this rule vetoes the event against the pre-toggle state.
    pub fn vetoes(&self, state: &FeatureState, event: &ToggleEvent) -> bool {
        (self.predicate)(state, event)
    }
}

/// Pure state rewrite that runs after an accepted toggle.
///
/// A cascading rule consumes the state *after* the requested toggle has been
/// applied (and after any earlier cascading rules ran) together with the
/// original event, and returns the full replacement state - typically its
/// input with zero or more other entries overwritten.
///
/// Each rule declares up front, via `writes`, which features it may
/// overwrite. The closure itself cannot be inspected, so this declaration is
/// what lets a catalog verify at startup that every rule targets real
/// features (see [`RuleEngine::validate`](crate::core::RuleEngine::validate)).
///
/// # Example
///
/// ```rust
/// use togglekit::core::{CascadingRule, FeatureState, ToggleEvent};
///
/// let rule = CascadingRule::new("css_if_postcss", &["CSS"], |state, event| {
///     if event.feature == "PostCSS" && event.selected {
///         state.set("CSS", true)
///     } else {
///         state
///     }
/// });
///
/// let state = FeatureState::new().set("PostCSS", true);
/// let next = rule.apply(state, &ToggleEvent::new("PostCSS", true));
/// assert!(next.selected("CSS"));
/// ```
pub struct CascadingRule {
    name: &'static str,
    writes: &'static [&'static str],
    rewrite: Box<dyn Fn(FeatureState, &ToggleEvent) -> FeatureState + Send + Sync>,
}

impl CascadingRule {
    /// Create a cascading rule from a pure rewrite function.
    ///
    /// `writes` lists every feature name the rewrite may overwrite other than
    /// the event's own feature. The rewrite must be pure and thread-safe.
    pub fn new<F>(name: &'static str, writes: &'static [&'static str], rewrite: F) -> Self
    where
        F: Fn(FeatureState, &ToggleEvent) -> FeatureState + Send + Sync + 'static,
    {
        Self {
            name,
            writes,
            rewrite: Box::new(rewrite),
        }
    }

    /// The rule's diagnostic name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The features this rule declares it may overwrite.
    pub fn writes(&self) -> &'static [&'static str] {
        self.writes
    }

    /// Run the rewrite, consuming the current state.
    pub fn apply(&self, state: FeatureState, event: &ToggleEvent) -> FeatureState {
        (self.rewrite)(state, event)
    }
}
