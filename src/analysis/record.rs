use serde_json::{Map, Value};

use super::types::{Prediction, VariantResult};
use crate::error::AnalysisError;
use crate::scoring::calculate_score;

/// Parse an optionally signed base-10 integer, ignoring surrounding whitespace.
/// Single underscores between digits are accepted as separators ("1_000").
pub fn parse_int_str(s: &str) -> Option<i64> {
    let s = s.trim();
    let digits = s.strip_prefix(|c| c == '+' || c == '-').unwrap_or(s);
    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    s.replace('_', "").parse().ok()
}

/// Coerce a JSON value to an integer the way loosely-typed clients expect:
/// integers as-is, floats truncated toward zero, booleans as 0/1, numeric
/// strings parsed. Anything else (null, arrays, objects, "X") fails.
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => parse_int_str(s),
        _ => None,
    }
}

/// Score one record from the `snps` array.
///
/// Evaluation order matters for which error is reported: `position`
/// (absent counts as 0) and `chromosome` (absent counts as 1) are coerced
/// first, then `rsId`, `chromosome`, `position` and `genotype` must all be
/// present.
pub fn score_record(
    index: usize,
    record: &Value,
    api_key_configured: bool,
) -> Result<VariantResult, AnalysisError> {
    let fields = record
        .as_object()
        .ok_or(AnalysisError::RecordNotObject { index })?;

    let position = integer_field(index, fields, "position", 0)?;
    let chromosome = integer_field(index, fields, "chromosome", 1)?;
    let score = calculate_score(position, chromosome);

    Ok(VariantResult {
        rs_id: required_field(index, fields, "rsId")?,
        chromosome: required_field(index, fields, "chromosome")?,
        position: required_field(index, fields, "position")?,
        genotype: required_field(index, fields, "genotype")?,
        predictions: Prediction::new(score, api_key_configured),
    })
}

fn integer_field(
    index: usize,
    fields: &Map<String, Value>,
    field: &'static str,
    default: i64,
) -> Result<i64, AnalysisError> {
    match fields.get(field) {
        None => Ok(default),
        Some(value) => coerce_int(value).ok_or_else(|| AnalysisError::NotAnInteger {
            index,
            field,
            value: value.to_string(),
        }),
    }
}

fn required_field(
    index: usize,
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Value, AnalysisError> {
    fields
        .get(field)
        .cloned()
        .ok_or(AnalysisError::MissingField { index, field })
}
