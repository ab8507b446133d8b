use serde::{Deserialize, Serialize};

/// Effect classification derived from a rounded pathogenicity score.
///
/// Serialized as the full human-readable sentence, which is what clients
/// display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    #[serde(rename = "High impact: Likely pathogenic variant affecting protein function")]
    High,
    #[serde(rename = "Moderate impact: Possible functional consequences")]
    Moderate,
    #[serde(rename = "Low impact: Likely benign variant")]
    Low,
}

/// Scores strictly above this are `High`.
pub const HIGH_THRESHOLD: f64 = 0.8;
/// Scores strictly above this (and not `High`) are `Moderate`.
pub const MODERATE_THRESHOLD: f64 = 0.5;

impl Effect {
    /// Both thresholds are exclusive: exactly 0.8 is `Moderate`, exactly 0.5 is `Low`.
    pub fn classify(pathogenicity: f64) -> Self {
        if pathogenicity > HIGH_THRESHOLD {
            Effect::High
        } else if pathogenicity > MODERATE_THRESHOLD {
            Effect::Moderate
        } else {
            Effect::Low
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Effect::High => "High impact: Likely pathogenic variant affecting protein function",
            Effect::Moderate => "Moderate impact: Possible functional consequences",
            Effect::Low => "Low impact: Likely benign variant",
        }
    }

    /// Short label for tables ("high", "moderate", "low")
    pub fn label(&self) -> &'static str {
        match self {
            Effect::High => "high",
            Effect::Moderate => "moderate",
            Effect::Low => "low",
        }
    }
}
