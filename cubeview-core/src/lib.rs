/// Cubeview Core Library - cube face placement geometry
///
/// This library provides the stateless core of the cube demo: the six rigid
/// transforms that seat flat square panels against the walls of an
/// origin-centered cube, the placed panel geometry handed to scene hosts,
/// and the fixed-eye perspective those hosts composite with.

pub mod cube;
pub mod error;
pub mod face;
pub mod panel;
pub mod projection;
pub mod transform;

// Re-export commonly used types
pub use cube::CubeSpec;
pub use error::CubeError;
pub use face::Face;
pub use panel::Panel;
pub use projection::{Perspective, ProjectedPoint, RotationState, Viewport, DEFAULT_EYE_DISTANCE};
pub use transform::FaceTransform;
