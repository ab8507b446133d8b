pub mod effect;
pub mod engine;

pub use effect::Effect;
pub use engine::{
    calculate_score, ScoreResult, ANALYSIS_NOTE, CONFIDENCE, MODEL_VERSION,
    PATHOGENICITY_CEILING,
};
