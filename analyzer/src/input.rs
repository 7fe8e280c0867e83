use serde_json::Value;
use statcore::dataset;
use statcore::prelude::{StatsError, StatsResult};

/// Parses command-line tokens into a numeric sequence.
pub fn parse_tokens(tokens: &[String]) -> StatsResult<Vec<f64>> {
    tokens
        .iter()
        .map(|token| {
            token.parse::<f64>().map_err(|_| {
                StatsError::TypeMismatch(format!("non-numeric token {:?}", token))
            })
        })
        .collect()
}

/// Decodes an inline JSON payload into a numeric sequence.
pub fn decode_json(payload: &str) -> StatsResult<Vec<f64>> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|err| StatsError::TypeMismatch(format!("unparseable payload: {}", err)))?;
    dataset::coerce_sequence(Some(&value))
}
