pub mod record;
pub mod types;

pub use record::{coerce_int, parse_int_str, score_record};
pub use types::{AnalysisResult, Metadata, Prediction, PredictionDetails, VariantResult};

use serde_json::Value;

use crate::config::AnalysisEnv;
use crate::error::AnalysisError;

/// Score every record in a POST body of the form `{"snps": [...]}`.
///
/// A missing `snps` field is an empty batch, as is an empty object or
/// string. A non-empty object or string holds no SNP records, so it fails
/// like a non-object record. The first failing record aborts the whole
/// batch; there is no partial result.
pub fn analyze(body: &[u8], env: &AnalysisEnv) -> Result<AnalysisResult, AnalysisError> {
    let body: Value = serde_json::from_slice(body)?;
    let body = body.as_object().ok_or(AnalysisError::BodyNotObject)?;

    let records: &[Value] = match body.get("snps") {
        None => &[],
        Some(Value::Array(records)) => records.as_slice(),
        Some(Value::Object(map)) if map.is_empty() => &[],
        Some(Value::String(s)) if s.is_empty() => &[],
        Some(Value::Object(_) | Value::String(_)) => {
            return Err(AnalysisError::RecordNotObject { index: 0 })
        }
        Some(_) => return Err(AnalysisError::SnpsNotArray),
    };

    let api_configured = env.api_key_configured();
    let results = records
        .iter()
        .enumerate()
        .map(|(index, record)| score_record(index, record, api_configured))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AnalysisResult {
        metadata: Metadata {
            total_variants: results.len(),
            api_configured,
        },
        results,
    })
}
