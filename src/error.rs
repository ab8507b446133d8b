use thiserror::Error;

/// Any failure while turning a POST body into an analysis result.
///
/// Every variant surfaces to the caller the same way: a 500 response whose
/// body is `{"error": <Display of the variant>}`.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("request body must be a JSON object")]
    BodyNotObject,

    #[error("'snps' must be an array")]
    SnpsNotArray,

    #[error("snp at index {index} must be a JSON object")]
    RecordNotObject { index: usize },

    #[error("snp at index {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("snp at index {index} has non-integer {field}: {value}")]
    NotAnInteger {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("failed to read request body: {0}")]
    Body(String),
}
