use crate::prelude::{StatsError, StatsResult, Summary};

fn validate(values: &[f64]) -> StatsResult<()> {
    if values.is_empty() {
        return Err(StatsError::InvalidArgument("empty sequence".to_string()));
    }
    if let Some(index) = values.iter().position(|value| value.is_nan()) {
        return Err(StatsError::TypeMismatch(format!(
            "non-numeric value at index {}",
            index
        )));
    }
    Ok(())
}

/// Arithmetic mean: sum of the elements divided by their count.
pub fn average(values: &[f64]) -> StatsResult<f64> {
    validate(values)?;
    let sum: f64 = values.iter().sum();
    Ok(sum / values.len() as f64)
}

/// Population variance: mean squared deviation from the mean, divisor N.
pub fn variance(values: &[f64]) -> StatsResult<f64> {
    let mean = average(values)?;
    let sum_sq: f64 = values
        .iter()
        .map(|value| {
            let diff = value - mean;
            diff * diff
        })
        .sum();
    Ok(sum_sq / values.len() as f64)
}

/// Non-negative square root of the population variance.
pub fn stdev(values: &[f64]) -> StatsResult<f64> {
    Ok(variance(values)?.sqrt())
}

/// Evaluates the full trio over one sequence.
pub fn describe(values: &[f64]) -> StatsResult<Summary> {
    let average = average(values)?;
    let variance = variance(values)?;

    Ok(Summary {
        count: values.len(),
        average,
        variance,
        stdev: variance.sqrt(),
    })
}
