//! Plain-text rendering of a verdict.
//!
//! Mirrors the result panel of the original interface: subject line, risk
//! badge, recommended action, confidence meter. Presentation only; no
//! decision logic lives here.

use super::types::{TriageMode, Verdict};

const METER_WIDTH: usize = 20;

/// Render a verdict as a terminal panel
pub fn render(verdict: &Verdict, mode: TriageMode) -> String {
    let mut lines = vec![];
    lines.push(format!("=== {} ===", mode.panel_title()));
    lines.push(format!("Subject:    {}", verdict.subject_name));
    lines.push(format!("Risk:       {}", verdict.risk_tier.label()));
    lines.push(format!("Action:     {}", verdict.recommended_action));
    lines.push(format!(
        "Confidence: {:>3}% [{}]",
        verdict.confidence_percent,
        meter(verdict.confidence_percent)
    ));
    lines.push(format!("Color:      {}", verdict.color_hint));
    lines.join("\n")
}

fn meter(percent: u8) -> String {
    let filled = (percent as usize * METER_WIDTH) / 100;
    format!("{}{}", "#".repeat(filled), "-".repeat(METER_WIDTH - filled))
}
