use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::catalog::PolicyCatalog;
use super::domain::{CaseRecord, Decision, DecisionError, Outcome, PolicyId};
use crate::config::GenerativeConfig;

/// Optional evaluation path backed by an external text-generation capability.
///
/// Implementations return `None` whenever they cannot produce a trustworthy decision; they
/// never surface errors to the caller.
#[async_trait]
pub trait GenerativeEvaluator: Send + Sync {
    async fn try_evaluate(&self, case: &CaseRecord) -> Option<Decision>;
}

/// No-op evaluator used when the generative path is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeterministicOnly;

#[async_trait]
impl GenerativeEvaluator for DeterministicOnly {
    async fn try_evaluate(&self, _case: &CaseRecord) -> Option<Decision> {
        None
    }
}

/// Failures of a single generative call. All of them map to "absent".
#[derive(Debug, thiserror::Error)]
pub enum GenerativeError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("failed to serialize case record: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("generative request timed out after {0:?}")]
    Timeout(Duration),
    #[error("generative request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("generative service returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("generative response envelope malformed: {0}")]
    Envelope(#[source] reqwest::Error),
    #[error("generated decision is not valid JSON: {0}")]
    Payload(#[source] serde_json::Error),
    #[error("generated outcome '{0}' is not approved, rejected, or incomplete")]
    UnknownOutcome(String),
    #[error("generated decision rejected: {0}")]
    Invalid(#[from] DecisionError),
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    format: &'static str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateEnvelope {
    response: String,
}

#[derive(Debug, Deserialize)]
struct GeneratedDecision {
    #[serde(alias = "outcome")]
    decision: String,
    rationale: String,
    citations: Vec<String>,
}

/// Adapter posting a single self-contained prompt to an Ollama-style `/api/generate` endpoint.
pub struct RemoteGenerativeEvaluator {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    timeout: Duration,
    catalog: &'static PolicyCatalog,
}

impl RemoteGenerativeEvaluator {
    pub fn new(config: &GenerativeConfig) -> Result<Self, GenerativeError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(GenerativeError::Client)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            timeout: config.timeout,
            catalog: PolicyCatalog::global(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Prompt embedding the policy text and the serialized case.
    pub fn build_prompt(&self, case: &CaseRecord) -> Result<String, GenerativeError> {
        let case_json = serde_json::to_string_pretty(case).map_err(GenerativeError::Serialize)?;

        Ok(format!(
            "{policies}\n\n\
             Analise o processo judicial abaixo e retorne APENAS um JSON com:\n\
             - decision: \"approved\", \"rejected\" ou \"incomplete\"\n\
             - rationale: justificativa detalhada em português\n\
             - citations: lista de políticas aplicadas (ex: [\"POL-1\", \"POL-3\"])\n\n\
             Dados do processo:\n{case_json}\n",
            policies = self.catalog.render(),
        ))
    }

    /// One request, no retries; any deviation from the contract is an error.
    pub async fn request_decision(&self, case: &CaseRecord) -> Result<Decision, GenerativeError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt: self.build_prompt(case)?,
            format: "json",
            stream: false,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|err| self.classify(err, GenerativeError::Transport))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerativeError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GenerateEnvelope = response
            .json()
            .await
            .map_err(|err| self.classify(err, GenerativeError::Envelope))?;

        parse_generated_decision(&envelope.response)
    }

    fn classify(
        &self,
        err: reqwest::Error,
        otherwise: fn(reqwest::Error) -> GenerativeError,
    ) -> GenerativeError {
        if err.is_timeout() {
            GenerativeError::Timeout(self.timeout)
        } else {
            otherwise(err)
        }
    }
}

#[async_trait]
impl GenerativeEvaluator for RemoteGenerativeEvaluator {
    async fn try_evaluate(&self, case: &CaseRecord) -> Option<Decision> {
        match self.request_decision(case).await {
            Ok(decision) => {
                debug!(
                    case = %case.case_number,
                    outcome = decision.outcome().label(),
                    "generative decision accepted"
                );
                Some(decision)
            }
            Err(err) => {
                warn!(case = %case.case_number, error = %err, "generative evaluation unavailable");
                None
            }
        }
    }
}

pub(crate) fn parse_generated_decision(raw: &str) -> Result<Decision, GenerativeError> {
    let generated: GeneratedDecision =
        serde_json::from_str(raw.trim()).map_err(GenerativeError::Payload)?;

    let outcome = Outcome::parse(&generated.decision)
        .ok_or_else(|| GenerativeError::UnknownOutcome(generated.decision.clone()))?;

    let citations = generated
        .citations
        .into_iter()
        .map(|id| PolicyId::new(id.trim()))
        .collect();

    Decision::try_new(outcome, generated.rationale, citations).map_err(GenerativeError::from)
}
