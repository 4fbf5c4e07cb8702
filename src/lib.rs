//! Togglekit: a pure functional feature-selection rule engine
//!
//! Togglekit keeps the feature set of a generated project scaffold internally
//! consistent. The core rule engine is composed of pure functions with no side
//! effects, while the imperative shell (the [`session::Configurator`]) owns the
//! mutable session state and dispatches toggle-intent events into the core.
//!
//! # Core Concepts
//!
//! - **Feature Catalog**: static metadata about the selectable features
//! - **Feature State**: the selected/unselected mapping over all features
//! - **Blocking rules**: pure predicates that can veto a toggle
//! - **Cascading rules**: pure functions that rewrite other features' values
//!   after an accepted toggle
//!
//! # Example
//!
//! ```rust
//! use togglekit::core::{FeatureState, ToggleEvent, Outcome};
//! use togglekit::scaffold;
//!
//! let engine = scaffold::standard_engine();
//! let state = FeatureState::new();
//!
//! // Selecting React cascades: Babel is forced on, Vue is forced off.
//! let event = ToggleEvent::new("React", true);
//! match engine.evaluate(&state, &event) {
//!     Outcome::Applied(next) => {
//!         assert!(next.selected("React"));
//!         assert!(next.selected("Babel"));
//!         assert!(!next.selected("Vue"));
//!     }
//!     Outcome::Rejected => unreachable!("nothing blocks selecting React"),
//! }
//! ```

pub mod builder;
pub mod catalog;
pub mod core;
pub mod macros;
pub mod scaffold;
pub mod session;

// Re-export commonly used types
pub use builder::EngineBuilder;
pub use catalog::{CatalogError, Feature, FeatureCatalog};
pub use crate::core::{
    BlockingRule, CascadingRule, EngineError, FeatureState, Outcome, RuleEngine, ToggleEvent,
    ToggleLog, ToggleRecord,
};
pub use session::{Configurator, DocsProvider, StaticDocs};
