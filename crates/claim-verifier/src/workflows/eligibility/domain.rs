use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::warn;

/// Snapshot of the judicial case submitted for an eligibility decision.
///
/// Wire names follow the case-management export format; English aliases are accepted so
/// internal callers can post the same record without translating keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    #[serde(rename = "numeroProcesso", alias = "caseNumber")]
    pub case_number: String,
    #[serde(rename = "classe", alias = "caseClass", default)]
    pub case_class: String,
    #[serde(rename = "orgaoJulgador", alias = "court", default)]
    pub court: String,
    #[serde(
        rename = "ultimaDistribuicao",
        alias = "lastDistribution",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_distribution: Option<String>,
    #[serde(rename = "assunto", alias = "subject", default)]
    pub subject: String,
    #[serde(rename = "segredoJustica", alias = "isSecret", default)]
    pub is_secret: bool,
    #[serde(rename = "justicaGratuita", alias = "hasFreeLegalAid", default)]
    pub has_free_legal_aid: bool,
    #[serde(rename = "siglaTribunal", alias = "courtAcronym", default)]
    pub court_acronym: String,
    #[serde(rename = "esfera", alias = "legalDomain")]
    pub legal_domain: String,
    #[serde(
        rename = "valorCondenacao",
        alias = "awardAmount",
        default,
        with = "rust_decimal::serde::float_option"
    )]
    pub award_amount: Option<Decimal>,
    #[serde(rename = "documentos", alias = "documents")]
    pub documents: Vec<CaseDocument>,
    #[serde(rename = "movimentos", alias = "movements", default)]
    pub movements: Vec<serde_json::Value>,
}

impl CaseRecord {
    /// True when the award is present and below zero, which the catalog does not guard.
    pub fn has_negative_award(&self) -> bool {
        self.award_amount
            .map(|amount| amount.is_sign_negative() && !amount.is_zero())
            .unwrap_or(false)
    }
}

/// Document attached to the case, listed in filing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDocument {
    pub id: String,
    #[serde(
        rename = "dataHoraJuntada",
        alias = "filedAt",
        default,
        deserialize_with = "deserialize_optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub filed_at: Option<NaiveDateTime>,
    #[serde(rename = "nome", alias = "title")]
    pub title: String,
    #[serde(rename = "texto", alias = "fullText", default)]
    pub full_text: String,
}

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

// Unrecognized formats become `None`; no policy reads this field.
fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| {
            let parsed = parse_timestamp(&value);
            if parsed.is_none() {
                warn!(
                    value = %value,
                    "unrecognized filing timestamp; keeping document without it"
                );
            }
            parsed
        }))
}

/// Identifier of a published catalog policy (`POL-<n>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyId(pub String);

impl PolicyId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_well_formed(&self) -> bool {
        self.0
            .strip_prefix("POL-")
            .map(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
            .unwrap_or(false)
    }
}

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Final eligibility outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Approved,
    Rejected,
    Incomplete,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Approved => "approved",
            Outcome::Rejected => "rejected",
            Outcome::Incomplete => "incomplete",
        }
    }

    /// Exact wire value only; anything else is outside the enumeration.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "approved" => Some(Outcome::Approved),
            "rejected" => Some(Outcome::Rejected),
            "incomplete" => Some(Outcome::Incomplete),
            _ => None,
        }
    }
}

/// Eligibility decision returned to the caller.
///
/// Built in a single step by exactly one evaluator and never mutated afterwards. The field
/// names on the wire (`decision`, `rationale`, `citations`) are a compatibility contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    #[serde(rename = "decision")]
    outcome: Outcome,
    rationale: String,
    citations: Vec<PolicyId>,
}

impl Decision {
    /// Validate and assemble a decision from untrusted parts.
    pub fn try_new(
        outcome: Outcome,
        rationale: impl Into<String>,
        citations: Vec<PolicyId>,
    ) -> Result<Self, DecisionError> {
        let rationale = rationale.into();
        if rationale.trim().is_empty() {
            return Err(DecisionError::EmptyRationale);
        }

        let mut seen = HashSet::with_capacity(citations.len());
        for citation in &citations {
            if !citation.is_well_formed() {
                return Err(DecisionError::MalformedCitation(citation.0.clone()));
            }
            if !seen.insert(citation.as_str()) {
                return Err(DecisionError::DuplicateCitation(citation.0.clone()));
            }
        }

        Ok(Self {
            outcome,
            rationale,
            citations,
        })
    }

    /// Assemble a decision whose parts are fixed catalog templates.
    pub(crate) fn from_template(outcome: Outcome, rationale: String, citations: &[&str]) -> Self {
        debug_assert!(!rationale.trim().is_empty());
        Self {
            outcome,
            rationale,
            citations: citations.iter().map(|id| PolicyId::new(*id)).collect(),
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn rationale(&self) -> &str {
        &self.rationale
    }

    pub fn citations(&self) -> &[PolicyId] {
        &self.citations
    }

    pub fn cites(&self, id: &str) -> bool {
        self.citations.iter().any(|citation| citation.as_str() == id)
    }
}

/// Reasons an externally produced decision is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecisionError {
    #[error("decision rationale must not be empty")]
    EmptyRationale,
    #[error("citation '{0}' is not a policy identifier")]
    MalformedCitation(String),
    #[error("citation '{0}' appears more than once")]
    DuplicateCitation(String),
}
