use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::scoring::{Effect, ScoreResult, ANALYSIS_NOTE, CONFIDENCE, MODEL_VERSION};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionDetails {
    pub api_key_configured: bool,
    pub model_version: String,
    pub analysis_note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub pathogenicity: f64,
    pub effect: Effect,
    pub confidence: f64,
    pub details: PredictionDetails,
}

impl Prediction {
    pub fn new(score: ScoreResult, api_key_configured: bool) -> Self {
        Self {
            pathogenicity: score.pathogenicity,
            effect: score.effect,
            confidence: CONFIDENCE,
            details: PredictionDetails {
                api_key_configured,
                model_version: MODEL_VERSION.to_string(),
                analysis_note: ANALYSIS_NOTE.to_string(),
            },
        }
    }
}

/// One input record echoed back with its prediction.
///
/// The four record fields are kept as the caller sent them (a chromosome
/// sent as `"7"` comes back as `"7"`, not `7`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantResult {
    #[serde(rename = "rsId")]
    pub rs_id: Value,
    pub chromosome: Value,
    pub position: Value,
    pub genotype: Value,
    pub predictions: Prediction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub total_variants: usize,
    pub api_configured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub results: Vec<VariantResult>,
    pub metadata: Metadata,
}
