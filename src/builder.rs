//! Builder API for assembling rule engines.
//!
//! Registration order is evaluation order, for both rule kinds. Blocking
//! rules short-circuit on the first veto so their relative order is
//! observably irrelevant; cascading rules compose left to right, so their
//! order is a contract the caller states explicitly by the sequence of
//! [`cascading`](EngineBuilder::cascading) calls.

use crate::core::{BlockingRule, CascadingRule, RuleEngine};

/// Builder for assembling a [`RuleEngine`].
///
/// # Example
///
/// ```rust
/// use togglekit::builder::EngineBuilder;
/// use togglekit::core::{BlockingRule, CascadingRule};
///
/// let engine = EngineBuilder::new()
///     .blocking(BlockingRule::new("no_deselect_css", |state, event| {
///         event.feature == "CSS" && !event.selected && state.selected("PostCSS")
///     }))
///     .cascading(CascadingRule::new("css_if_postcss", &["CSS"], |state, event| {
///         if event.feature == "PostCSS" && event.selected {
///             state.set("CSS", true)
///         } else {
///             state
///         }
///     }))
///     .build();
///
/// assert_eq!(engine.cascading_rule_names().count(), 1);
/// ```
pub struct EngineBuilder {
    blocking: Vec<BlockingRule>,
    cascading: Vec<CascadingRule>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            blocking: Vec::new(),
            cascading: Vec::new(),
        }
    }

    /// Register a blocking rule.
    #[must_use]
    pub fn blocking(mut self, rule: BlockingRule) -> Self {
        self.blocking.push(rule);
        self
    }

    /// Register a cascading rule. Runs after all previously registered ones.
    #[must_use]
    pub fn cascading(mut self, rule: CascadingRule) -> Self {
        self.cascading.push(rule);
        self
    }

    /// Build the engine with the registered rules.
    pub fn build(self) -> RuleEngine {
        RuleEngine::new(self.blocking, self.cascading)
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
