//! The triage decision chain: ranked classifier output in, one verdict out.
//!
//! Rules fire in a fixed priority order and the first applicable rule wins:
//! empty input, species match anywhere in the ranking, the confidence gate
//! on the top rank, wound-pattern match, then the fail-safe default. The
//! ordering is a contract; in particular the gate fires before wound
//! matching, and absence of a recognized pattern is never presented as safe.

use crate::classifier::RankedPredictions;
use crate::config::TriageConfig;

use super::catalog::SpeciesEntry;
use super::matcher;
use super::types::{
    COLOR_CAUTION, COLOR_DANGER, COLOR_NEUTRAL, COLOR_SAFE, RiskTier, Verdict, VerdictCategory,
};

/// Round a probability to a whole percent, half-up.
///
/// Computed on integer tenths of a percent: 0.695 is 69.4999... in binary
/// floating point, so rounding `p * 100.0` directly would drop it to 69
/// while the meter and the gate both must treat it as 70.
pub fn confidence_percent(probability: f64) -> u8 {
    let tenths = (probability * 1000.0).round() as i64;
    ((tenths + 5) / 10).clamp(0, 100) as u8
}

/// Turn one classification call's ranked output into a triage verdict.
///
/// Pure: same predictions and config always produce the same verdict.
pub fn classify(predictions: &RankedPredictions, config: &TriageConfig) -> Verdict {
    let Some(top) = predictions.top() else {
        return empty_verdict();
    };

    // A lower-ranked prediction may still name a known species even when
    // the top rank is noise; scan the whole ranking, stop at the first hit.
    if let Some(entry) = predictions
        .iter()
        .find_map(|p| matcher::match_species(&p.label))
    {
        return species_verdict(entry, top.probability);
    }

    // The gate consults the top rank only. A wound keyword somewhere in a
    // low-confidence ranking is built on an unreliable signal and must not
    // override this rule.
    let confidence = confidence_percent(top.probability);
    if confidence < config.confidence_gate_percent {
        return uncertain_verdict(&top.label, confidence);
    }

    if let Some(hit) = predictions.iter().find(|p| matcher::match_wound(&p.label)) {
        return wound_verdict(&hit.label, confidence);
    }

    fail_safe_verdict(&top.label, confidence)
}

fn empty_verdict() -> Verdict {
    Verdict {
        subject_name: "No pattern detected".to_string(),
        category: VerdictCategory::Unidentified,
        risk_tier: RiskTier::Unknown,
        venomous_or_high_risk: false,
        recommended_action: "Retake photo".to_string(),
        confidence_percent: 0,
        color_hint: COLOR_NEUTRAL,
    }
}

fn species_verdict(entry: &SpeciesEntry, top_probability: f64) -> Verdict {
    Verdict {
        subject_name: entry.display_name.to_string(),
        category: VerdictCategory::Species,
        risk_tier: if entry.venomous {
            RiskTier::Critical
        } else {
            RiskTier::Low
        },
        venomous_or_high_risk: entry.venomous,
        recommended_action: entry.action.to_string(),
        confidence_percent: confidence_percent(top_probability),
        color_hint: if entry.venomous { COLOR_DANGER } else { COLOR_SAFE },
    }
}

fn uncertain_verdict(top_label: &str, confidence: u8) -> Verdict {
    Verdict {
        subject_name: display_label(top_label),
        category: VerdictCategory::Unidentified,
        risk_tier: RiskTier::Moderate,
        venomous_or_high_risk: true,
        recommended_action: "AI uncertain. Assume high risk, do not approach.".to_string(),
        confidence_percent: confidence,
        color_hint: COLOR_CAUTION,
    }
}

fn wound_verdict(hit_label: &str, confidence: u8) -> Verdict {
    Verdict {
        subject_name: display_label(hit_label),
        category: VerdictCategory::WoundPattern,
        risk_tier: RiskTier::ObservationRequired,
        venomous_or_high_risk: true,
        recommended_action: "Differentiate puncture (venomous) vs scratch (non-venomous) marks"
            .to_string(),
        confidence_percent: confidence,
        color_hint: COLOR_DANGER,
    }
}

fn fail_safe_verdict(top_label: &str, confidence: u8) -> Verdict {
    Verdict {
        subject_name: display_label(top_label),
        category: VerdictCategory::Unidentified,
        risk_tier: RiskTier::High,
        venomous_or_high_risk: true,
        recommended_action: "Treat as venomous. Seek medical help.".to_string(),
        confidence_percent: confidence,
        color_hint: COLOR_NEUTRAL,
    }
}

/// Classifier labels are free text, often comma-separated synonym lists;
/// the first segment in title case is the display form.
fn display_label(label: &str) -> String {
    let first = label.split(',').next().unwrap_or(label);
    capitalize_words(first)
}

fn capitalize_words(s: &str) -> String {
    s.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
