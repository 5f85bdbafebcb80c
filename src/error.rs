use thiserror::Error;

/// Errors reported by the linked geometry builders and the input adapter
#[derive(Debug, Error)]
pub enum LinkedGeoError {
    /// A polygon can only be appended after the last polygon of a chain
    #[error("polygon already has a successor; append to the last polygon in the chain")]
    PolygonHasSuccessor,

    #[error("invalid ring input: {0}")]
    Json(#[from] serde_json::Error),
}
