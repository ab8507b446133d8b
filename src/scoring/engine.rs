use super::effect::Effect;

/// Weight applied to the position-derived base score.
const BASE_WEIGHT: f64 = 0.7;
/// Added per chromosome number.
const CHROMOSOME_WEIGHT: f64 = 0.01;
const OFFSET: f64 = 0.1;

/// Hard ceiling applied before rounding. There is no floor.
pub const PATHOGENICITY_CEILING: f64 = 0.95;

/// Confidence reported for every prediction. Not computed.
pub const CONFIDENCE: f64 = 0.85;

pub const MODEL_VERSION: &str = "AlphaGenome-Mock-1.0";
pub const ANALYSIS_NOTE: &str = "Using simplified scoring pending full AlphaGenome integration";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreResult {
    /// Capped and rounded to 3 decimals
    pub pathogenicity: f64,
    /// Classified from the rounded value
    pub effect: Effect,
}

/// Placeholder pathogenicity score for a variant.
///
/// Depends only on `(position, chromosome)`. The position contributes
/// `(position mod 1000) / 1000` (floored modulo, so negative positions
/// still land in `[0, 0.999]`), the chromosome contributes 0.01 per unit.
/// The sum is capped at [`PATHOGENICITY_CEILING`] before rounding.
pub fn calculate_score(position: i64, chromosome: i64) -> ScoreResult {
    let base = position.rem_euclid(1000) as f64 / 1000.0;
    let chromosome_factor = chromosome as f64 * CHROMOSOME_WEIGHT;
    let raw = base * BASE_WEIGHT + chromosome_factor + OFFSET;

    let pathogenicity = round_to_millis(raw.min(PATHOGENICITY_CEILING));

    ScoreResult {
        pathogenicity,
        effect: Effect::classify(pathogenicity),
    }
}

/// Round to 3 decimals from the exact decimal value of `value`.
///
/// Scaling by 1000 first adds a second rounding step, which pushes values
/// just below a tie (0.12049999...) up onto it. Float formatting works on
/// the exact binary value and breaks true ties to even.
fn round_to_millis(value: f64) -> f64 {
    format!("{:.3}", value).parse().unwrap_or(value)
}
