mod policy;
mod signals;

pub use signals::normalize_text;

use super::catalog::PolicyCatalog;
use super::domain::{CaseRecord, Decision};
use policy::decide_outcome;

/// Stateless evaluator that applies the policy catalog's precedence chain to a case.
///
/// Total and pure: every well-typed case yields a decision, with no I/O and no clock reads.
#[derive(Debug, Clone, Copy)]
pub struct DeterministicEvaluator {
    catalog: &'static PolicyCatalog,
}

impl Default for DeterministicEvaluator {
    fn default() -> Self {
        Self::new(PolicyCatalog::global())
    }
}

impl DeterministicEvaluator {
    pub fn new(catalog: &'static PolicyCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'static PolicyCatalog {
        self.catalog
    }

    pub fn evaluate(&self, case: &CaseRecord) -> Decision {
        let signals = signals::extract_signals(case);
        let decision = decide_outcome(&signals);
        debug_assert!(self.catalog.covers(&decision));
        decision
    }
}
