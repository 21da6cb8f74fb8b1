use thiserror::Error;

/// Malformed input caught before the placement loop runs. Invalid
/// orientation codes never reach this layer: the `Orientation` enum is
/// closed and serde rejects unknown codes at the boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("container dimensions must be positive, got {0}")]
    ContainerDims(crate::types::Dims),
    #[error("container max weight must be positive, got {0}")]
    ContainerMaxWeight(f64),
    #[error("item '{name}' has non-positive dimensions {dims}")]
    ItemDims {
        name: String,
        dims: crate::types::Dims,
    },
    #[error("item '{name}' has non-positive weight {weight}")]
    ItemWeight { name: String, weight: f64 },
    #[error("item '{name}' has zero quantity")]
    ItemQuantity { name: String },
    #[error("item '{name}' has an empty orientation preference list")]
    EmptyOrientations { name: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PackError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The cooperative cancellation flag was raised between unit iterations.
    #[error("packing cancelled")]
    Cancelled,
}
