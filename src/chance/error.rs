use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ChanceError {
    /// Weight was zero, negative or NaN.
    #[error("weight must be greater than zero, got {weight}")]
    InvalidWeight { weight: f64 },
    /// The total chance would go over the maximum by `excess` percent.
    #[error("total chance overflow: maximum exceeded by {excess}")]
    WeightOverflow { excess: f64 },
}
