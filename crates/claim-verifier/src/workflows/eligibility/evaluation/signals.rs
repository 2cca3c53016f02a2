use rust_decimal::Decimal;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::super::domain::CaseRecord;

const FINAL_JUDGMENT_MARKERS: &[&str] = &["transito em julgado"];
const DECEASE_MARKERS: &[&str] = &["obito", "falecimento"];
const SUBSTITUTION_MARKER: &str = "substabelecimento";
const LABOR_DOMAINS: &[&str] = &["labor", "trabalhista"];

/// Lowercase, decompose, and drop combining marks so "Trânsito" and "transito" compare equal.
pub fn normalize_text(raw: &str) -> String {
    raw.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Facts the precedence chain reads, extracted once per evaluation.
pub(crate) struct CaseSignals {
    pub final_judgment_present: bool,
    pub award_amount: Option<Decimal>,
    pub labor_domain: bool,
    pub decease_title: Option<String>,
    pub substitution_title: Option<String>,
}

pub(crate) fn extract_signals(case: &CaseRecord) -> CaseSignals {
    let titles: Vec<(String, &str)> = case
        .documents
        .iter()
        .map(|document| (normalize_text(&document.title), document.title.as_str()))
        .collect();

    let final_judgment_present = titles
        .iter()
        .any(|(normalized, _)| contains_any(normalized, FINAL_JUDGMENT_MARKERS));

    let decease_title = titles
        .iter()
        .find(|(normalized, _)| contains_any(normalized, DECEASE_MARKERS))
        .map(|(_, original)| original.to_string());

    let substitution_title = titles
        .iter()
        .find(|(normalized, _)| normalized.contains(SUBSTITUTION_MARKER))
        .map(|(_, original)| original.to_string());

    let domain = normalize_text(&case.legal_domain);
    let labor_domain = LABOR_DOMAINS.iter().any(|labor| domain == *labor);

    CaseSignals {
        final_judgment_present,
        award_amount: case.award_amount,
        labor_domain,
        decease_title,
        substitution_title,
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
