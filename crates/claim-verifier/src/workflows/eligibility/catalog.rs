use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::OnceLock;

use super::domain::Decision;

/// Published catalog revision. Entries are append-only across revisions.
pub const CATALOG_VERSION: &str = "2024.1";

/// Smallest award (in the case currency's major unit) eligible for acquisition.
pub const MINIMUM_AWARD: Decimal = Decimal::ONE_THOUSAND;

/// Outcome a policy forces when its test triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ForcedOutcome {
    Reject,
    Incomplete,
    None,
}

/// Single published policy statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyEntry {
    pub id: &'static str,
    pub statement: &'static str,
    pub forces: ForcedOutcome,
}

/// Read-only eligibility policy catalog shared by every evaluator.
#[derive(Debug, Serialize)]
pub struct PolicyCatalog {
    version: &'static str,
    entries: Vec<PolicyEntry>,
}

impl PolicyCatalog {
    /// Process-wide catalog, built on first use and never mutated.
    pub fn global() -> &'static PolicyCatalog {
        static CATALOG: OnceLock<PolicyCatalog> = OnceLock::new();
        CATALOG.get_or_init(PolicyCatalog::published)
    }

    fn published() -> Self {
        let entries = vec![
            PolicyEntry {
                id: "POL-1",
                statement: "Apenas processos transitados em julgado e em fase de execução são elegíveis",
                forces: ForcedOutcome::None,
            },
            PolicyEntry {
                id: "POL-2",
                statement: "Valor de condenação deve estar claramente informado",
                forces: ForcedOutcome::Incomplete,
            },
            PolicyEntry {
                id: "POL-3",
                statement: "Processos com valor inferior a R$ 1.000,00 são rejeitados",
                forces: ForcedOutcome::Reject,
            },
            PolicyEntry {
                id: "POL-4",
                statement: "Processos na esfera trabalhista são automaticamente rejeitados",
                forces: ForcedOutcome::Reject,
            },
            PolicyEntry {
                id: "POL-5",
                statement: "Óbito do autor sem habilitação no inventário resulta em rejeição",
                forces: ForcedOutcome::Reject,
            },
            PolicyEntry {
                id: "POL-6",
                statement: "Substabelecimento sem reserva de poderes resulta em rejeição",
                forces: ForcedOutcome::Reject,
            },
            PolicyEntry {
                id: "POL-7",
                statement: "Honorários devem ser informados quando existirem",
                forces: ForcedOutcome::None,
            },
            PolicyEntry {
                id: "POL-8",
                statement: "Falta de documento essencial resulta em status 'incomplete'",
                forces: ForcedOutcome::Incomplete,
            },
        ];

        Self {
            version: CATALOG_VERSION,
            entries,
        }
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn entries(&self) -> &[PolicyEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&PolicyEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// True when every citation in the decision names a published policy.
    pub fn covers(&self, decision: &Decision) -> bool {
        decision
            .citations()
            .iter()
            .all(|citation| self.contains(citation.as_str()))
    }

    /// Policy text in the `POL-n: statement` layout used in prompts and the CLI listing.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{}: {}", entry.id, entry.statement))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
