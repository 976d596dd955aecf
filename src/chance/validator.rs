use super::error::ChanceError;
use super::{MAX_CHANCE, WEIGHT_TOLERANCE};

/// Chance left over after all `weights`. Negative if they overflow.
pub fn remaining<I>(weights: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    MAX_CHANCE - weights.into_iter().sum::<f64>()
}

pub fn validate<I>(weights: I) -> Result<(), ChanceError>
where
    I: IntoIterator<Item = f64>,
{
    let remaining = remaining(weights);
    if remaining < -WEIGHT_TOLERANCE {
        return Err(ChanceError::WeightOverflow { excess: -remaining });
    }
    Ok(())
}

/// Rejects weights that can't be a probability mass. `!(w > 0)` so NaN fails too.
pub fn check_weight(weight: f64) -> Result<(), ChanceError> {
    if !(weight > 0.0) {
        return Err(ChanceError::InvalidWeight { weight });
    }
    Ok(())
}
