/// Error types for cube construction
use thiserror::Error;

/// The single failure mode in this crate: an edge length that cannot
/// describe a cube. Raised synchronously at construction, never retried.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CubeError {
    #[error("invalid cube edge length {edge_length}: must be finite and positive")]
    InvalidEdgeLength { edge_length: f32 },
}
