use log::debug;
use serde_json::Value;

use crate::descriptive;
use crate::prelude::{StatsError, StatsResult};

/// Coerces a loosely typed JSON payload into a numeric sequence.
///
/// Absent and non-array payloads are rejected as type mismatches, as are
/// array elements that are not JSON numbers. Integers and floats coerce
/// interchangeably. An empty array coerces to an empty vector; the
/// computation layer reports those as invalid arguments.
pub fn coerce_sequence(input: Option<&Value>) -> StatsResult<Vec<f64>> {
    let value = input
        .ok_or_else(|| StatsError::TypeMismatch("no sequence provided".to_string()))?;
    let items = value.as_array().ok_or_else(|| {
        StatsError::TypeMismatch(format!("expected a sequence, got {}", kind_of(value)))
    })?;

    let mut values = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let number = item.as_f64().ok_or_else(|| {
            StatsError::TypeMismatch(format!(
                "non-numeric {} element at index {}",
                kind_of(item),
                index
            ))
        })?;
        values.push(number);
    }

    debug!("coerced {} numeric values", values.len());
    Ok(values)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Arithmetic mean of a loosely typed payload.
pub fn average_of(input: Option<&Value>) -> StatsResult<f64> {
    descriptive::average(&coerce_sequence(input)?)
}

/// Population variance of a loosely typed payload.
pub fn variance_of(input: Option<&Value>) -> StatsResult<f64> {
    descriptive::variance(&coerce_sequence(input)?)
}

/// Standard deviation of a loosely typed payload.
pub fn stdev_of(input: Option<&Value>) -> StatsResult<f64> {
    descriptive::stdev(&coerce_sequence(input)?)
}
