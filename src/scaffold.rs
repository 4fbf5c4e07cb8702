//! The stock rule set and catalog for a project-scaffold configurator.
//!
//! This module wires the generic engine to a concrete domain: the feature
//! checkboxes of a webpack/parcel-style project generator. The rules here are
//! hand-authored and individually simple; the engine composes them in the
//! order declared by [`standard_engine`], and that order is load-bearing
//! (e.g. the hot-loader rule must observe the React/Vue exclusivity rewrite).
//!
//! Each rule reacts only to the triggering toggle rather than re-deriving
//! global consistency, so a single ordered pass suffices for this fixed set.
//! Composing new rules into it may require reordering or a fixed-point pass.

use crate::builder::EngineBuilder;
use crate::catalog::FeatureCatalog;
use crate::core::{BlockingRule, CascadingRule, RuleEngine};

/// Feature names used by the stock rules.
pub mod features {
    pub const REACT: &str = "React";
    pub const VUE: &str = "Vue";
    pub const TYPESCRIPT: &str = "Typescript";
    pub const BABEL: &str = "Babel";
    pub const ESLINT: &str = "ESLint";
    pub const REACT_HOT_LOADER: &str = "React hot loader";
    pub const CSS: &str = "CSS";
    pub const POSTCSS: &str = "PostCSS";
}

use self::features::*;

/// The stock catalog backing the standard rule set.
pub fn standard_catalog() -> FeatureCatalog {
    crate::catalog! {
        "Main library" => {
            "React" => "react",
            "Vue" => "vue",
        },
        "Transpiler" => {
            "Babel" => "babel",
            "Typescript" => "typescript",
        },
        "Linting" => {
            "ESLint" => "eslint",
        },
        "Styling" => {
            "CSS" => "css",
            "PostCSS" => "postcss",
        },
        _ => {
            "React hot loader" => "react-hot-loader",
        },
    }
    .expect("standard catalog has unique feature names")
}

/// React requires at least one of {Babel, Typescript}.
///
/// Vetoes deselecting Babel while React is selected and Typescript is not,
/// and symmetrically vetoes deselecting Typescript while React is selected
/// and Babel is not.
pub fn keep_transpiler_for_react() -> BlockingRule {
    BlockingRule::new("keep_transpiler_for_react", |state, event| {
        if event.selected {
            return false;
        }
        match event.feature.as_str() {
            BABEL => state.selected(REACT) && !state.selected(TYPESCRIPT),
            TYPESCRIPT => state.selected(REACT) && !state.selected(BABEL),
            _ => false,
        }
    })
}

/// React and Vue are mutually exclusive.
///
/// Selecting one forces the other off. Deselecting never touches the other
/// library: the rule acts only on select.
pub fn either_react_or_vue() -> CascadingRule {
    CascadingRule::new(
        "either_react_or_vue",
        &[REACT, VUE],
        |state, event| match event.feature.as_str() {
            VUE if event.selected => state.set(REACT, false),
            REACT if event.selected => state.set(VUE, false),
            _ => state,
        },
    )
}

/// Babel is forced on whenever React is selected without Typescript.
///
/// React needs a transpiler; Babel fills in unless Typescript already
/// provides one. Otherwise Babel keeps its current value.
pub fn babel_if_react() -> CascadingRule {
    CascadingRule::new("babel_if_react", &[BABEL], |state, _| {
        let force = state.selected(REACT) && !state.selected(TYPESCRIPT);
        let value = force || state.selected(BABEL);
        state.set(BABEL, value)
    })
}

/// "React hot loader" tracks React.
///
/// Selecting React turns it on, deselecting React turns it off, and
/// selecting Vue forces it off. Independently of the trigger, the
/// Typescript+React combination forces it off - hot-loader tooling does not
/// work under that pairing. When no condition applies its value is left
/// untouched.
pub fn react_hot_loader_tracks_react() -> CascadingRule {
    CascadingRule::new(
        "react_hot_loader_tracks_react",
        &[REACT_HOT_LOADER],
        |state, event| {
            let mut hot_loader = None;

            if event.feature == VUE && event.selected {
                hot_loader = Some(false);
            }
            if event.feature == REACT {
                hot_loader = Some(event.selected);
            }
            if state.selected(TYPESCRIPT) && state.selected(REACT) {
                hot_loader = Some(false);
            }

            match hot_loader {
                Some(value) => state.set(REACT_HOT_LOADER, value),
                None => state,
            }
        },
    )
}

/// Selecting PostCSS forces CSS on.
pub fn css_if_postcss() -> CascadingRule {
    CascadingRule::new("css_if_postcss", &[CSS], |state, event| {
        if event.feature == POSTCSS && event.selected {
            state.set(CSS, true)
        } else {
            state
        }
    })
}

/// Selecting Typescript clears ESLint.
pub fn no_eslint_with_typescript() -> CascadingRule {
    CascadingRule::new("no_eslint_with_typescript", &[ESLINT], |state, event| {
        if event.feature == TYPESCRIPT && event.selected {
            state.set(ESLINT, false)
        } else {
            state
        }
    })
}

/// The standard engine, rules registered in their documented order.
///
/// Cascade order: React/Vue exclusivity, then Babel backfill, then the hot
/// loader, then PostCSS/CSS, then Typescript/ESLint.
pub fn standard_engine() -> RuleEngine {
    EngineBuilder::new()
        .blocking(keep_transpiler_for_react())
        .cascading(either_react_or_vue())
        .cascading(babel_if_react())
        .cascading(react_hot_loader_tracks_react())
        .cascading(css_if_postcss())
        .cascading(no_eslint_with_typescript())
        .build()
}

#[cfg(test)]
mod tests {
    use super::features::*;
    use super::*;
    use crate::core::{FeatureState, Outcome, ToggleEvent};

    fn apply(engine: &RuleEngine, state: &FeatureState, feature: &str, selected: bool) -> FeatureState {
        match engine.evaluate(state, &ToggleEvent::new(feature, selected)) {
            Outcome::Applied(next) => next,
            Outcome::Rejected => panic!("toggle ({feature}, {selected}) unexpectedly rejected"),
        }
    }

    #[test]
    fn standard_engine_validates_against_standard_catalog() {
        let engine = standard_engine();
        assert!(engine.validate(&standard_catalog()).is_ok());
    }

    #[test]
    fn selecting_react_pulls_in_babel_and_hot_loader() {
        let engine = standard_engine();
        let next = apply(&engine, &FeatureState::new(), REACT, true);

        assert!(next.selected(REACT));
        assert!(next.selected(BABEL));
        assert!(next.selected(REACT_HOT_LOADER));
        assert!(!next.selected(VUE));
    }

    #[test]
    fn selecting_typescript_after_react_drops_eslint_and_hot_loader() {
        let engine = standard_engine();
        let state = apply(&engine, &FeatureState::new(), REACT, true);
        let next = apply(&engine, &state, TYPESCRIPT, true);

        assert!(next.selected(REACT));
        assert!(next.selected(TYPESCRIPT));
        assert!(!next.selected(ESLINT));
        assert!(!next.selected(REACT_HOT_LOADER));
        // Babel was already on and this path never touches it off.
        assert!(next.selected(BABEL));
    }

    #[test]
    fn deselecting_last_transpiler_for_react_is_rejected() {
        let engine = standard_engine();
        let state: FeatureState = [(REACT, true), (BABEL, true), (TYPESCRIPT, false)]
            .into_iter()
            .collect();

        let outcome = engine.evaluate(&state, &ToggleEvent::new(BABEL, false));
        assert_eq!(outcome, Outcome::Rejected);
    }

    #[test]
    fn deselecting_typescript_without_babel_is_rejected() {
        let engine = standard_engine();
        let state: FeatureState = [(REACT, true), (TYPESCRIPT, true)].into_iter().collect();

        let outcome = engine.evaluate(&state, &ToggleEvent::new(TYPESCRIPT, false));
        assert_eq!(outcome, Outcome::Rejected);
    }

    #[test]
    fn deselecting_typescript_with_babel_present_is_allowed() {
        let engine = standard_engine();
        let state: FeatureState = [(REACT, true), (TYPESCRIPT, true), (BABEL, true)]
            .into_iter()
            .collect();

        let next = apply(&engine, &state, TYPESCRIPT, false);
        assert!(!next.selected(TYPESCRIPT));
        assert!(next.selected(BABEL));
    }

    #[test]
    fn selecting_vue_clears_react_and_hot_loader() {
        let engine = standard_engine();
        let next = apply(&engine, &FeatureState::new(), VUE, true);

        assert!(next.selected(VUE));
        assert!(!next.selected(REACT));
        assert!(!next.selected(REACT_HOT_LOADER));
    }

    #[test]
    fn deselecting_vue_does_not_touch_react() {
        let engine = standard_engine();
        let state: FeatureState = [(VUE, true)].into_iter().collect();

        let next = apply(&engine, &state, VUE, false);
        assert!(!next.selected(VUE));
        assert!(!next.selected(REACT));
    }

    #[test]
    fn selecting_postcss_forces_css() {
        let engine = standard_engine();
        let state: FeatureState = [(POSTCSS, false), (CSS, false)].into_iter().collect();

        let next = apply(&engine, &state, POSTCSS, true);
        assert!(next.selected(POSTCSS));
        assert!(next.selected(CSS));
    }

    #[test]
    fn deselecting_postcss_leaves_css_alone() {
        let engine = standard_engine();
        let state: FeatureState = [(POSTCSS, true), (CSS, true)].into_iter().collect();

        let next = apply(&engine, &state, POSTCSS, false);
        assert!(!next.selected(POSTCSS));
        assert!(next.selected(CSS));
    }

    #[test]
    fn selecting_typescript_clears_eslint_regardless_of_prior_value() {
        let engine = standard_engine();

        for eslint_before in [false, true] {
            let state: FeatureState = [(ESLINT, eslint_before)].into_iter().collect();
            let next = apply(&engine, &state, TYPESCRIPT, true);
            assert!(!next.selected(ESLINT));
        }
    }

    #[test]
    fn repeated_identical_toggle_is_a_no_op_transition() {
        let engine = standard_engine();
        let once = apply(&engine, &FeatureState::new(), REACT, true);
        let twice = apply(&engine, &once, REACT, true);

        assert_eq!(once, twice);
    }

    #[test]
    fn selecting_react_with_typescript_active_skips_babel_backfill() {
        let engine = standard_engine();
        let state: FeatureState = [(TYPESCRIPT, true)].into_iter().collect();

        let next = apply(&engine, &state, REACT, true);
        assert!(next.selected(REACT));
        assert!(!next.selected(BABEL));
        // Typescript+React forces the hot loader off even on a React select.
        assert!(!next.selected(REACT_HOT_LOADER));
    }

    #[test]
    fn deselecting_react_releases_hot_loader() {
        let engine = standard_engine();
        let state = apply(&engine, &FeatureState::new(), REACT, true);
        let next = apply(&engine, &state, REACT, false);

        assert!(!next.selected(REACT));
        assert!(!next.selected(REACT_HOT_LOADER));
        // Known limitation of trigger-scoped rules: Babel stays on after its
        // trigger is gone.
        assert!(next.selected(BABEL));
    }
}
