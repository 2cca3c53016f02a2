use std::sync::Arc;

use tracing::{info, warn};

use super::catalog::PolicyCatalog;
use super::domain::{CaseRecord, Decision};
use super::evaluation::DeterministicEvaluator;
use super::generative::{DeterministicOnly, GenerativeEvaluator};

/// Which evaluator produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionSource {
    Generative,
    Deterministic,
}

impl DecisionSource {
    pub fn label(&self) -> &'static str {
        match self {
            DecisionSource::Generative => "generative",
            DecisionSource::Deterministic => "deterministic",
        }
    }
}

/// Service composing the generative adapter with the deterministic backstop.
pub struct DecisionOrchestrator<G: ?Sized> {
    deterministic: DeterministicEvaluator,
    generative: Arc<G>,
}

impl DecisionOrchestrator<DeterministicOnly> {
    /// Orchestrator that never leaves the deterministic path.
    pub fn deterministic_only() -> Self {
        Self::new(Arc::new(DeterministicOnly))
    }
}

impl<G> DecisionOrchestrator<G>
where
    G: GenerativeEvaluator + ?Sized,
{
    pub fn new(generative: Arc<G>) -> Self {
        Self::with_evaluator(DeterministicEvaluator::default(), generative)
    }

    pub fn with_evaluator(deterministic: DeterministicEvaluator, generative: Arc<G>) -> Self {
        Self {
            deterministic,
            generative,
        }
    }

    pub fn catalog(&self) -> &'static PolicyCatalog {
        self.deterministic.catalog()
    }

    /// Decide eligibility; always yields a decision.
    pub async fn decide(&self, case: &CaseRecord) -> Decision {
        self.decide_with_source(case).await.0
    }

    /// Decide eligibility and report which evaluator answered.
    pub async fn decide_with_source(&self, case: &CaseRecord) -> (Decision, DecisionSource) {
        if case.has_negative_award() {
            warn!(
                case = %case.case_number,
                award = ?case.award_amount,
                "negative award amount; evaluating against the minimum threshold"
            );
        }

        let (decision, source) = match self.generative.try_evaluate(case).await {
            Some(decision) if self.catalog().covers(&decision) => {
                (decision, DecisionSource::Generative)
            }
            Some(decision) => {
                warn!(
                    case = %case.case_number,
                    citations = ?decision.citations(),
                    "generative decision cites unpublished policies; using deterministic evaluator"
                );
                (self.deterministic.evaluate(case), DecisionSource::Deterministic)
            }
            None => (self.deterministic.evaluate(case), DecisionSource::Deterministic),
        };

        info!(
            case = %case.case_number,
            source = source.label(),
            decision = decision.outcome().label(),
            citations = ?decision.citations(),
            "eligibility decided"
        );

        (decision, source)
    }
}
