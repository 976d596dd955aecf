use super::error::ChanceError;
use super::validator::{check_weight, validate};
use serde::Serialize;

/// An outcome with its own chance, in percent, of being picked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedItem<T> {
    weight: f64,
    payload: T,
}

impl<T> WeightedItem<T> {
    pub fn new(weight: f64, payload: T) -> Result<WeightedItem<T>, ChanceError> {
        check_weight(weight)?;
        validate([weight])?;
        Ok(WeightedItem { weight, payload })
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn into_payload(self) -> T {
        self.payload
    }
}
