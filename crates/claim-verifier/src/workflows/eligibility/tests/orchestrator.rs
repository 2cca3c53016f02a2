use std::sync::Arc;
use std::time::Duration;

use super::common::*;
use crate::workflows::eligibility::domain::{Decision, Outcome, PolicyId};
use crate::workflows::eligibility::{DecisionOrchestrator, DecisionSource};

#[tokio::test]
async fn returns_generative_decision_unchanged_when_valid() {
    let (orchestrator, generative) =
        orchestrator_with(ScriptedGenerative::answering(generative_approval()));
    let case = case_with("Federal", Some(15000), &[FINAL_JUDGMENT_TITLE]);

    let (decision, source) = orchestrator.decide_with_source(&case).await;

    assert_eq!(source, DecisionSource::Generative);
    assert_eq!(decision, generative_approval());
    assert_eq!(generative.calls(), 1);
}

#[tokio::test]
async fn generative_answer_may_disagree_with_rules() {
    let rejection = Decision::try_new(
        Outcome::Rejected,
        "Modelo identificou risco.",
        vec![PolicyId::new("POL-6")],
    )
    .expect("valid decision");
    let (orchestrator, _) = orchestrator_with(ScriptedGenerative::answering(rejection.clone()));

    let decision = orchestrator
        .decide(&case_with("Federal", Some(15000), &[FINAL_JUDGMENT_TITLE]))
        .await;

    assert_eq!(decision, rejection);
}

#[tokio::test]
async fn falls_back_to_deterministic_result_when_generative_is_absent() {
    let (orchestrator, generative) = orchestrator_with(ScriptedGenerative::absent());
    let case = case_with("Trabalhista", Some(5000), &[FINAL_JUDGMENT_TITLE]);

    let (decision, source) = orchestrator.decide_with_source(&case).await;

    assert_eq!(source, DecisionSource::Deterministic);
    assert_eq!(decision, evaluator().evaluate(&case));
    assert_eq!(generative.calls(), 1);
}

#[tokio::test]
async fn falls_back_after_a_slow_absent_answer() {
    let (orchestrator, _) =
        orchestrator_with(ScriptedGenerative::absent_after(Duration::from_millis(20)));
    let case = case_with("Federal", Some(500), &[FINAL_JUDGMENT_TITLE]);

    let decision = orchestrator.decide(&case).await;

    assert_eq!(decision, evaluator().evaluate(&case));
    assert_eq!(citation_ids(&decision), vec!["POL-3"]);
}

#[tokio::test]
async fn discards_generative_decision_citing_unpublished_policies() {
    let invented = Decision::try_new(
        Outcome::Approved,
        "Aprovado com base na POL-42.",
        vec![PolicyId::new("POL-42")],
    )
    .expect("well-formed decision");
    let (orchestrator, _) = orchestrator_with(ScriptedGenerative::answering(invented));
    let case = case_with("Federal", Some(2000), &["Sentença de Mérito"]);

    let (decision, source) = orchestrator.decide_with_source(&case).await;

    assert_eq!(source, DecisionSource::Deterministic);
    assert_eq!(decision.outcome(), Outcome::Incomplete);
    assert_eq!(citation_ids(&decision), vec!["POL-1", "POL-8"]);
}

#[tokio::test]
async fn deterministic_only_orchestrator_matches_evaluator() {
    let orchestrator = DecisionOrchestrator::deterministic_only();

    for case in [
        case_with("Federal", Some(15000), &[FINAL_JUDGMENT_TITLE]),
        case_with("Federal", Some(-1), &[FINAL_JUDGMENT_TITLE]),
        case_with("Federal", None, &[]),
    ] {
        assert_eq!(orchestrator.decide(&case).await, evaluator().evaluate(&case));
    }
}

#[tokio::test]
async fn concurrent_decisions_do_not_block_each_other() {
    let (orchestrator, generative) =
        orchestrator_with(ScriptedGenerative::absent_after(Duration::from_millis(50)));
    let orchestrator = Arc::new(orchestrator);

    let handles: Vec<_> = (0..8)
        .map(|index| {
            let orchestrator = orchestrator.clone();
            tokio::spawn(async move {
                let award = if index % 2 == 0 { 15000 } else { 500 };
                let case = case_with("Federal", Some(award), &[FINAL_JUDGMENT_TITLE]);
                orchestrator.decide(&case).await
            })
        })
        .collect();

    let started = std::time::Instant::now();
    for (index, handle) in handles.into_iter().enumerate() {
        let decision = handle.await.expect("task completes");
        let expected = if index % 2 == 0 {
            Outcome::Approved
        } else {
            Outcome::Rejected
        };
        assert_eq!(decision.outcome(), expected);
    }

    assert_eq!(generative.calls(), 8);
    assert!(started.elapsed() < Duration::from_millis(400));
}
