use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::response::Response;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::workflows::eligibility::domain::{
    CaseDocument, CaseRecord, Decision, Outcome, PolicyId,
};
use crate::workflows::eligibility::evaluation::DeterministicEvaluator;
use crate::workflows::eligibility::generative::GenerativeEvaluator;
use crate::workflows::eligibility::{eligibility_router, DecisionOrchestrator};

pub(super) const FINAL_JUDGMENT_TITLE: &str = "Certidão de Trânsito em Julgado";

pub(super) fn document(id: &str, title: &str) -> CaseDocument {
    CaseDocument {
        id: id.to_string(),
        filed_at: None,
        title: title.to_string(),
        full_text: String::new(),
    }
}

pub(super) fn case_record() -> CaseRecord {
    CaseRecord {
        case_number: "0001234-56.2023.4.05.8100".to_string(),
        case_class: "Cumprimento de Sentença".to_string(),
        court: "19a VARA FEDERAL - SOBRAL/CE".to_string(),
        last_distribution: None,
        subject: "Benefício previdenciário".to_string(),
        is_secret: false,
        has_free_legal_aid: true,
        court_acronym: "TRF5".to_string(),
        legal_domain: "Federal".to_string(),
        award_amount: Some(Decimal::new(15000, 0)),
        documents: vec![document("DOC-1", FINAL_JUDGMENT_TITLE)],
        movements: Vec::new(),
    }
}

pub(super) fn case_with(domain: &str, award: Option<i64>, titles: &[&str]) -> CaseRecord {
    let mut case = case_record();
    case.legal_domain = domain.to_string();
    case.award_amount = award.map(|value| Decimal::new(value, 0));
    case.documents = titles
        .iter()
        .enumerate()
        .map(|(index, title)| document(&format!("DOC-{}", index + 1), title))
        .collect();
    case
}

pub(super) fn evaluator() -> DeterministicEvaluator {
    DeterministicEvaluator::default()
}

pub(super) fn citation_ids(decision: &Decision) -> Vec<&str> {
    decision
        .citations()
        .iter()
        .map(|citation| citation.as_str())
        .collect()
}

/// Generative stub returning a fixed answer and counting calls.
pub(super) struct ScriptedGenerative {
    answer: Option<Decision>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl ScriptedGenerative {
    pub(super) fn answering(decision: Decision) -> Self {
        Self {
            answer: Some(decision),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn absent() -> Self {
        Self {
            answer: None,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn absent_after(delay: Duration) -> Self {
        Self {
            answer: None,
            delay: Some(delay),
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerativeEvaluator for ScriptedGenerative {
    async fn try_evaluate(&self, _case: &CaseRecord) -> Option<Decision> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.answer.clone()
    }
}

pub(super) fn generative_approval() -> Decision {
    Decision::try_new(
        Outcome::Approved,
        "Aprovado pelo modelo.",
        vec![PolicyId::new("POL-1"), PolicyId::new("POL-2")],
    )
    .expect("valid decision")
}

pub(super) fn orchestrator_with(
    generative: ScriptedGenerative,
) -> (
    DecisionOrchestrator<ScriptedGenerative>,
    Arc<ScriptedGenerative>,
) {
    let generative = Arc::new(generative);
    let orchestrator = DecisionOrchestrator::new(generative.clone());
    (orchestrator, generative)
}

pub(super) fn router_with(generative: ScriptedGenerative) -> axum::Router {
    let (orchestrator, _) = orchestrator_with(generative);
    eligibility_router(Arc::new(orchestrator))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
