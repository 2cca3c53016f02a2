//! Judicial claim eligibility: policy catalog, evaluators, and the decision orchestrator.
//!
//! Decisions come from one of two evaluators. The generative adapter is consulted first and
//! is trusted only when its answer satisfies the decision contract; otherwise the
//! deterministic evaluator, a fixed precedence chain over the policy catalog, answers.

pub mod catalog;
pub mod domain;
pub mod evaluation;
pub mod generative;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{ForcedOutcome, PolicyCatalog, PolicyEntry, CATALOG_VERSION, MINIMUM_AWARD};
pub use domain::{CaseDocument, CaseRecord, Decision, DecisionError, Outcome, PolicyId};
pub use evaluation::{normalize_text, DeterministicEvaluator};
pub use generative::{
    DeterministicOnly, GenerativeError, GenerativeEvaluator, RemoteGenerativeEvaluator,
};
pub use router::eligibility_router;
pub use service::{DecisionOrchestrator, DecisionSource};
