//! Core rule engine types and logic.
//!
//! This module contains the pure functional core of the configurator:
//! - The feature-state map and toggle-intent events
//! - Blocking and cascading rule types
//! - The evaluation protocol that composes them
//! - Immutable logging of evaluated toggles
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod engine;
mod log;
mod rule;
mod state;

pub use engine::{EngineError, Outcome, RuleEngine};
pub use log::{ToggleLog, ToggleRecord};
pub use rule::{BlockingRule, CascadingRule};
pub use state::{FeatureState, ToggleEvent};
