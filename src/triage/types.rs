use serde::{Deserialize, Serialize};

/// What the engine decided the image shows
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum VerdictCategory {
    Species,
    WoundPattern,
    Unidentified,
}

impl Default for VerdictCategory {
    fn default() -> Self {
        Self::Unidentified
    }
}

/// Severity tier attached to a verdict
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Critical,
    High,
    Moderate,
    Low,
    ObservationRequired,
    Unknown,
}

impl Default for RiskTier {
    fn default() -> Self {
        Self::Unknown
    }
}

impl RiskTier {
    /// Badge text shown on the result panel and sent to the endpoint
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "High Risk",
            Self::Moderate => "Vigilance Required",
            Self::Low => "Low Risk",
            Self::ObservationRequired => "Observation Required",
            Self::Unknown => "Unknown",
        }
    }
}

/// Which capture flow the user is in. Affects presentation only; the
/// decision chain is mode-independent.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TriageMode {
    #[default]
    Snake,
    BiteMark,
}

impl TriageMode {
    pub fn panel_title(&self) -> &'static str {
        match self {
            Self::Snake => "Snake Identification",
            Self::BiteMark => "Bite Mark Analysis",
        }
    }
}

// Result panel accent colors, from the original UI palette
pub const COLOR_DANGER: &str = "#ef4444";
pub const COLOR_CAUTION: &str = "#f59e0b";
pub const COLOR_SAFE: &str = "#22c55e";
pub const COLOR_NEUTRAL: &str = "#64748b";

/// The engine's triage decision for one classification cycle.
///
/// Built once by `engine::classify` and never mutated afterwards; the report
/// formatter and the incident logger only read it.
#[derive(Clone, Debug, Serialize, Eq, PartialEq)]
pub struct Verdict {
    /// Display name of what was, or was not, identified
    pub subject_name: String,
    pub category: VerdictCategory,
    pub risk_tier: RiskTier,
    /// Conservative flag: true when the subject is venomous or must be
    /// treated as if it were
    pub venomous_or_high_risk: bool,
    pub recommended_action: String,
    /// Top prediction probability as a rounded percent, 0 to 100
    pub confidence_percent: u8,
    /// Accent color for the result panel
    pub color_hint: &'static str,
}
