use claim_verifier::config::GenerativeConfig;
use claim_verifier::error::AppError;
use claim_verifier::workflows::eligibility::{
    DecisionOrchestrator, DeterministicOnly, GenerativeEvaluator, RemoteGenerativeEvaluator,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

pub(crate) type SharedOrchestrator = Arc<DecisionOrchestrator<dyn GenerativeEvaluator>>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Wire the orchestrator with the remote adapter unless the generative path is turned off.
pub(crate) fn build_orchestrator(
    config: &GenerativeConfig,
    deterministic_only: bool,
) -> Result<SharedOrchestrator, AppError> {
    let generative: Arc<dyn GenerativeEvaluator> = if config.enabled && !deterministic_only {
        let remote = RemoteGenerativeEvaluator::new(config)?;
        info!(
            endpoint = remote.endpoint(),
            model = %config.model,
            timeout_secs = config.timeout.as_secs(),
            "generative evaluator enabled"
        );
        Arc::new(remote)
    } else {
        info!("generative evaluator disabled; deterministic evaluator only");
        Arc::new(DeterministicOnly)
    };

    Ok(Arc::new(DecisionOrchestrator::new(generative)))
}
