//! The rule engine and its evaluation protocol.

use super::rule::{BlockingRule, CascadingRule};
use super::state::{FeatureState, ToggleEvent};
use crate::catalog::FeatureCatalog;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of evaluating one toggle-intent event.
///
/// A rejection is not an error: it is the normal signal to the presentation
/// layer that the checkbox must stay where it was.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A blocking rule vetoed the toggle; the caller's state is unchanged.
    Rejected,
    /// The toggle and all cascades were applied; this is the full next state.
    Applied(FeatureState),
}

impl Outcome {
    /// Whether the toggle was vetoed.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    /// Whether the toggle was applied.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// The applied state, if any.
    pub fn applied(&self) -> Option<&FeatureState> {
        match self {
            Self::Applied(state) => Some(state),
            Self::Rejected => None,
        }
    }
}

/// Errors raised when wiring an engine to a catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A cascading rule declares a write target the catalog does not know.
    #[error("rule '{rule}' writes to unknown feature '{feature}'")]
    UnknownFeature { rule: &'static str, feature: String },
}

/// Ordered collection of blocking and cascading rules.
///
/// The engine is a pure evaluation unit: it holds no state of its own and
/// [`evaluate`](Self::evaluate) is a deterministic function of its inputs.
/// Rule order is fixed at construction time (see
/// [`EngineBuilder`](crate::builder::EngineBuilder)) and is part of the
/// engine's contract - cascades compose left to right, not via fixed-point
/// iteration, so reordering rules changes behavior.
///
/// # Example
///
/// ```rust
/// use togglekit::builder::EngineBuilder;
/// use togglekit::core::{CascadingRule, FeatureState, ToggleEvent};
///
/// let engine = EngineBuilder::new()
///     .cascading(CascadingRule::new("css_if_postcss", &["CSS"], |state, event| {
///         if event.feature == "PostCSS" && event.selected {
///             state.set("CSS", true)
///         } else {
///             state
///         }
///     }))
///     .build();
///
/// let outcome = engine.evaluate(&FeatureState::new(), &ToggleEvent::new("PostCSS", true));
/// let next = outcome.applied().unwrap();
/// assert!(next.selected("PostCSS"));
/// assert!(next.selected("CSS"));
/// ```
pub struct RuleEngine {
    blocking: Vec<BlockingRule>,
    cascading: Vec<CascadingRule>,
}

impl RuleEngine {
    pub(crate) fn new(blocking: Vec<BlockingRule>, cascading: Vec<CascadingRule>) -> Self {
        Self {
            blocking,
            cascading,
        }
    }

    /// Evaluate one toggle-intent event against the current state.
    ///
    /// The protocol, in order:
    ///
    /// 1. **Blocking phase.** Blocking rules run against the pre-toggle state
    ///    in registration order; the first veto short-circuits to
    ///    [`Outcome::Rejected`] (observably equivalent to evaluating all of
    ///    them, since any single veto is terminal).
    /// 2. **Apply the toggle.** The event's feature is set to the requested
    ///    value in a copy of the state.
    /// 3. **Cascading phase.** Cascading rules run in registration order,
    ///    each consuming the previous rule's output plus the original event.
    ///
    /// The event's feature is not checked against any catalog here: an
    /// unknown name is written through and produces an orphan entry. Catalog
    /// membership is enforced for rule write targets only, at session
    /// construction (see [`validate`](Self::validate)).
    pub fn evaluate(&self, state: &FeatureState, event: &ToggleEvent) -> Outcome {
        for rule in &self.blocking {
            if rule.vetoes(state, event) {
                return Outcome::Rejected;
            }
        }

        let mut next = state.set(&event.feature, event.selected);
        for rule in &self.cascading {
            next = rule.apply(next, event);
        }

        Outcome::Applied(next)
    }

    /// Check every cascading rule's declared write targets against a catalog.
    ///
    /// Run once at startup; rule semantics are unaffected. Fails with the
    /// first rule found declaring a write to a feature the catalog does not
    /// contain.
    pub fn validate(&self, catalog: &FeatureCatalog) -> Result<(), EngineError> {
        for rule in &self.cascading {
            for feature in rule.writes() {
                if !catalog.contains(feature) {
                    return Err(EngineError::UnknownFeature {
                        rule: rule.name(),
                        feature: (*feature).to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Registered blocking rule names, in evaluation order.
    pub fn blocking_rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.blocking.iter().map(BlockingRule::name)
    }

    /// Registered cascading rule names, in evaluation order.
    pub fn cascading_rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cascading.iter().map(CascadingRule::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::EngineBuilder;
    use crate::catalog::{Feature, FeatureCatalog};

    fn veto_all() -> BlockingRule {
        BlockingRule::new("veto_all", |_, _| true)
    }

    fn force_on(
        name: &'static str,
        writes: &'static [&'static str],
        target: &'static str,
    ) -> CascadingRule {
        CascadingRule::new(name, writes, move |state, _| state.set(target, true))
    }

    #[test]
    fn empty_engine_applies_the_raw_toggle() {
        let engine = EngineBuilder::new().build();
        let outcome = engine.evaluate(&FeatureState::new(), &ToggleEvent::new("React", true));

        let next = outcome.applied().expect("nothing can reject");
        assert!(next.selected("React"));
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn any_blocking_veto_rejects_and_preserves_state() {
        let engine = EngineBuilder::new()
            .blocking(BlockingRule::new("never", |_, _| false))
            .blocking(veto_all())
            .cascading(force_on("force_css", &["CSS"], "CSS"))
            .build();

        let state = FeatureState::new().set("React", true);
        let outcome = engine.evaluate(&state, &ToggleEvent::new("React", false));

        assert!(outcome.is_rejected());
        assert!(outcome.applied().is_none());
        // Caller's state untouched; the cascading rule never ran.
        assert!(state.selected("React"));
        assert!(!state.selected("CSS"));
    }

    #[test]
    fn cascading_rules_compose_in_registration_order() {
        // Second rule observes the first rule's write.
        let engine = EngineBuilder::new()
            .cascading(force_on("first", &["A"], "A"))
            .cascading(CascadingRule::new("second", &["B"], |state, _| {
                let a = state.selected("A");
                state.set("B", a)
            }))
            .build();

        let outcome = engine.evaluate(&FeatureState::new(), &ToggleEvent::new("X", true));
        let next = outcome.applied().unwrap();
        assert!(next.selected("A"));
        assert!(next.selected("B"));
    }

    #[test]
    fn blocking_rules_see_pre_toggle_state() {
        let engine = EngineBuilder::new()
            .blocking(BlockingRule::new("already_selected", |state, event| {
                state.selected(&event.feature)
            }))
            .build();

        let outcome = engine.evaluate(&FeatureState::new(), &ToggleEvent::new("React", true));
        assert!(outcome.is_applied());
    }

    #[test]
    fn evaluate_is_deterministic() {
        let engine = EngineBuilder::new()
            .cascading(force_on("force_css", &["CSS"], "CSS"))
            .build();
        let state = FeatureState::new().set("PostCSS", true);
        let event = ToggleEvent::new("PostCSS", false);

        assert_eq!(engine.evaluate(&state, &event), engine.evaluate(&state, &event));
    }

    #[test]
    fn unknown_event_feature_is_written_through() {
        let engine = EngineBuilder::new().build();
        let outcome = engine.evaluate(&FeatureState::new(), &ToggleEvent::new("NotInCatalog", true));

        assert!(outcome.applied().unwrap().selected("NotInCatalog"));
    }

    #[test]
    fn validate_accepts_rules_writing_known_features() {
        let catalog = FeatureCatalog::from_features(vec![
            Feature::new("PostCSS", "postcss"),
            Feature::new("CSS", "css"),
        ])
        .unwrap();

        let engine = EngineBuilder::new()
            .cascading(CascadingRule::new("css_if_postcss", &["CSS"], |state, _| state))
            .build();

        assert!(engine.validate(&catalog).is_ok());
    }

    #[test]
    fn validate_rejects_unknown_write_target() {
        let catalog = FeatureCatalog::from_features(vec![Feature::new("CSS", "css")]).unwrap();

        let engine = EngineBuilder::new()
            .cascading(CascadingRule::new("bad_rule", &["Sass"], |state, _| state))
            .build();

        assert_eq!(
            engine.validate(&catalog),
            Err(EngineError::UnknownFeature {
                rule: "bad_rule",
                feature: "Sass".to_string(),
            })
        );
    }

    #[test]
    fn rule_names_are_reported_in_order() {
        let engine = EngineBuilder::new()
            .blocking(veto_all())
            .cascading(force_on("first", &["A"], "A"))
            .cascading(force_on("second", &["B"], "B"))
            .build();

        let blocking: Vec<_> = engine.blocking_rule_names().collect();
        let cascading: Vec<_> = engine.cascading_rule_names().collect();
        assert_eq!(blocking, vec!["veto_all"]);
        assert_eq!(cascading, vec!["first", "second"]);
    }
}
