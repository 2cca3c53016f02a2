use super::super::catalog::MINIMUM_AWARD;
use super::super::domain::{Decision, Outcome};
use super::signals::CaseSignals;

/// Apply the precedence chain; the first terminal rule that matches decides alone.
pub(crate) fn decide_outcome(signals: &CaseSignals) -> Decision {
    if !signals.final_judgment_present {
        return Decision::from_template(
            Outcome::Incomplete,
            "Documentação incompleta: trânsito em julgado não comprovado.".to_string(),
            &["POL-1", "POL-8"],
        );
    }

    let amount = match signals.award_amount {
        Some(amount) if !amount.is_zero() => amount,
        _ => {
            return Decision::from_template(
                Outcome::Incomplete,
                "Valor de condenação não informado ou zerado.".to_string(),
                &["POL-2", "POL-8"],
            );
        }
    };

    // Negative awards are not guarded separately and land here.
    if amount < MINIMUM_AWARD {
        return Decision::from_template(
            Outcome::Rejected,
            format!(
                "Valor de condenação (R$ {:.2}) abaixo do mínimo permitido de R$ {:.2}.",
                amount, MINIMUM_AWARD
            ),
            &["POL-3"],
        );
    }

    if signals.labor_domain {
        return Decision::from_template(
            Outcome::Rejected,
            "Processos da esfera trabalhista não são elegíveis para aquisição.".to_string(),
            &["POL-4"],
        );
    }

    if let Some(title) = &signals.decease_title {
        return Decision::from_template(
            Outcome::Rejected,
            format!("Óbito do autor detectado na documentação (documento: {title})."),
            &["POL-5"],
        );
    }

    if let Some(title) = &signals.substitution_title {
        return Decision::from_template(
            Outcome::Rejected,
            format!("Substabelecimento detectado na documentação (documento: {title})."),
            &["POL-6"],
        );
    }

    Decision::from_template(
        Outcome::Approved,
        format!(
            "Processo atende todos os critérios da política: trânsito em julgado comprovado, \
             valor adequado (R$ {:.2}), esfera elegível e documentação completa.",
            amount
        ),
        &["POL-1", "POL-2"],
    )
}
