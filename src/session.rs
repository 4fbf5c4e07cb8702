//! Imperative shell: the configurator session.
//!
//! The pure core never holds state; this module does. A [`Configurator`] owns
//! the catalog, the engine, the current feature state, and the toggle log,
//! and dispatches toggle-intent events one at a time. Each dispatch runs to
//! completion before the next is accepted, so the engine's phase ordering is
//! atomic per event.

use crate::catalog::FeatureCatalog;
use crate::core::{EngineError, FeatureState, Outcome, RuleEngine, ToggleEvent, ToggleLog, ToggleRecord};
use chrono::Utc;
use std::collections::HashMap;
use uuid::Uuid;

/// A live configurator session.
///
/// The presentation layer holds read-only views of [`state`](Self::state) for
/// rendering and submits all mutations through [`toggle`](Self::toggle).
///
/// # Example
///
/// ```rust
/// use togglekit::scaffold;
/// use togglekit::session::Configurator;
///
/// let mut session =
///     Configurator::new(scaffold::standard_catalog(), scaffold::standard_engine()).unwrap();
///
/// let outcome = session.toggle("React", true);
/// assert!(outcome.is_applied());
/// assert!(session.state().selected("Babel"));
/// ```
pub struct Configurator {
    id: Uuid,
    catalog: FeatureCatalog,
    engine: RuleEngine,
    state: FeatureState,
    log: ToggleLog,
}

impl Configurator {
    /// Start a session with every feature unselected.
    ///
    /// Fails if any rule declares a write target the catalog does not
    /// contain; this is the startup assertion guarding rule authoring
    /// mistakes, checked once here and never during dispatch.
    pub fn new(catalog: FeatureCatalog, engine: RuleEngine) -> Result<Self, EngineError> {
        let initial = catalog.initial_state();
        Self::with_defaults(catalog, engine, initial)
    }

    /// Start a session from a default selection.
    pub fn with_defaults(
        catalog: FeatureCatalog,
        engine: RuleEngine,
        defaults: FeatureState,
    ) -> Result<Self, EngineError> {
        engine.validate(&catalog)?;
        Ok(Self {
            id: Uuid::new_v4(),
            catalog,
            engine,
            state: defaults,
            log: ToggleLog::new(),
        })
    }

    /// Dispatch one toggle-intent event.
    ///
    /// On `Applied` the session adopts the new state; on `Rejected` the state
    /// is untouched and the caller leaves the checkbox where it was. Either
    /// way the event is appended to the log.
    pub fn toggle(&mut self, feature: &str, selected: bool) -> Outcome {
        let event = ToggleEvent::new(feature, selected);
        let outcome = self.engine.evaluate(&self.state, &event);

        if let Outcome::Applied(next) = &outcome {
            self.state = next.clone();
        }
        self.log = self.log.record(ToggleRecord {
            feature: event.feature,
            requested: event.selected,
            accepted: outcome.is_applied(),
            timestamp: Utc::now(),
        });

        outcome
    }

    /// Unique session identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The current feature state (read-only; mutate via [`toggle`](Self::toggle)).
    pub fn state(&self) -> &FeatureState {
        &self.state
    }

    /// The static feature catalog this session renders.
    pub fn catalog(&self) -> &FeatureCatalog {
        &self.catalog
    }

    /// The log of every event dispatched so far.
    pub fn log(&self) -> &ToggleLog {
        &self.log
    }
}

/// Help-text lookup, an external collaborator seam.
///
/// Given a feature and the currently selected build tool, returns optional
/// help text. Missing text degrades to `None` - the presentation layer simply
/// shows no help affordance, never an error.
pub trait DocsProvider {
    fn help_text(&self, feature: &str, build_tool: &str) -> Option<String>;
}

/// In-memory [`DocsProvider`] backed by a nested map, keyed by build tool
/// then feature name.
#[derive(Clone, Debug, Default)]
pub struct StaticDocs {
    entries: HashMap<String, HashMap<String, String>>,
}

impl StaticDocs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register help text for a (build tool, feature) pair.
    pub fn insert(
        &mut self,
        build_tool: impl Into<String>,
        feature: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.entries
            .entry(build_tool.into())
            .or_default()
            .insert(feature.into(), text.into());
    }
}

impl DocsProvider for StaticDocs {
    fn help_text(&self, feature: &str, build_tool: &str) -> Option<String> {
        self.entries.get(build_tool)?.get(feature).cloned()
    }
}
