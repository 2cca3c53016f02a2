use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::domain::CaseRecord;
use super::generative::GenerativeEvaluator;
use super::service::DecisionOrchestrator;

/// Router builder exposing the eligibility decision and the published catalog.
pub fn eligibility_router<G>(orchestrator: Arc<DecisionOrchestrator<G>>) -> Router
where
    G: GenerativeEvaluator + ?Sized + 'static,
{
    Router::new()
        .route("/analyze", post(analyze_handler::<G>))
        .route("/api/v1/claims/analyze", post(analyze_handler::<G>))
        .route("/api/v1/policies", get(policies_handler::<G>))
        .with_state(orchestrator)
}

pub(crate) async fn analyze_handler<G>(
    State(orchestrator): State<Arc<DecisionOrchestrator<G>>>,
    Json(case): Json<CaseRecord>,
) -> Response
where
    G: GenerativeEvaluator + ?Sized + 'static,
{
    let decision = orchestrator.decide(&case).await;
    (StatusCode::OK, Json(decision)).into_response()
}

pub(crate) async fn policies_handler<G>(
    State(orchestrator): State<Arc<DecisionOrchestrator<G>>>,
) -> Response
where
    G: GenerativeEvaluator + ?Sized + 'static,
{
    let catalog = orchestrator.catalog();
    let payload = json!({
        "version": catalog.version(),
        "policies": catalog.entries(),
    });
    (StatusCode::OK, Json(payload)).into_response()
}
