/// Fixed-eye perspective projection and model rotation state
use nalgebra::{Point3, UnitQuaternion, Vector3};

/// Eye distance of the original demo: a layer-space perspective of
/// `m34 = -1/250`, i.e. the eye sits 250 units in front of the cube.
pub const DEFAULT_EYE_DISTANCE: f32 = 250.0;

/// A point after perspective division, still in world units. `x` and `y`
/// are offsets from the view center; `depth` grows away from the viewer
/// and is what depth buffers compare.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
}

/// Single-point perspective with the eye on the +z axis looking at the
/// origin. Equivalent to the compositing-layer `m34 = -1/d` sublayer
/// transform.
#[derive(Debug, Clone, Copy)]
pub struct Perspective {
    pub eye_distance: f32,
}

impl Perspective {
    pub fn new(eye_distance: f32) -> Self {
        Self { eye_distance }
    }

    /// Project a world point. Returns `None` for points at or behind the
    /// eye plane, which cannot be drawn.
    pub fn project(&self, point: &Point3<f32>) -> Option<ProjectedPoint> {
        let w = self.eye_distance - point.z;
        if w <= f32::EPSILON {
            return None;
        }
        let scale = self.eye_distance / w;
        Some(ProjectedPoint {
            x: point.x * scale,
            y: point.y * scale,
            depth: -point.z,
        })
    }
}

impl Default for Perspective {
    fn default() -> Self {
        Self::new(DEFAULT_EYE_DISTANCE)
    }
}

/// Maps projected points to terminal cells.
///
/// World y already grows downward in this crate's convention, matching
/// terminal rows, so no flip is needed. Cells are roughly twice as tall as
/// they are wide, so columns are stretched by two to keep the cube square.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
    /// Cells per world unit along y.
    pub scale: f32,
}

impl Viewport {
    pub fn new(width: usize, height: usize, scale: f32) -> Self {
        Self {
            width,
            height,
            scale,
        }
    }

    pub fn to_cell(&self, point: &ProjectedPoint) -> (f32, f32) {
        let x = self.width as f32 * 0.5 + point.x * self.scale * 2.0;
        let y = self.height as f32 * 0.5 + point.y * self.scale;
        (x, y)
    }
}

/// Accumulated model rotation around three axes (in radians)
#[derive(Debug, Clone, Copy)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// Combined model rotation, applied in order: x, then y, then z.
    pub fn quaternion(&self) -> UnitQuaternion<f32> {
        let rx = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), self.x);
        let ry = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.y);
        let rz = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.z);
        rz * ry * rx
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_projects_to_center() {
        let perspective = Perspective::default();
        let p = perspective.project(&Point3::origin()).unwrap();
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.depth, 0.0);
    }

    #[test]
    fn test_nearer_points_appear_larger() {
        let perspective = Perspective::new(250.0);
        let far = perspective.project(&Point3::new(10.0, 0.0, -50.0)).unwrap();
        let mid = perspective.project(&Point3::new(10.0, 0.0, 0.0)).unwrap();
        let near = perspective.project(&Point3::new(10.0, 0.0, 50.0)).unwrap();
        assert!(far.x < mid.x);
        assert!(mid.x < near.x);
        assert!((near.x - 12.5).abs() < 1e-4);
    }

    #[test]
    fn test_points_at_or_behind_the_eye_are_clipped() {
        let perspective = Perspective::new(250.0);
        assert!(perspective.project(&Point3::new(0.0, 0.0, 250.0)).is_none());
        assert!(perspective.project(&Point3::new(0.0, 0.0, 400.0)).is_none());
    }

    #[test]
    fn test_depth_decreases_toward_the_viewer() {
        let perspective = Perspective::new(250.0);
        let near = perspective.project(&Point3::new(0.0, 0.0, 50.0)).unwrap();
        let far = perspective.project(&Point3::new(0.0, 0.0, -50.0)).unwrap();
        assert!(near.depth < far.depth);
    }

    #[test]
    fn test_viewport_centers_and_keeps_y_down() {
        let viewport = Viewport::new(80, 24, 1.0);
        let (x, y) = viewport.to_cell(&ProjectedPoint {
            x: 0.0,
            y: 0.0,
            depth: 0.0,
        });
        assert_eq!(x, 40.0);
        assert_eq!(y, 12.0);

        let (_, below) = viewport.to_cell(&ProjectedPoint {
            x: 0.0,
            y: 3.0,
            depth: 0.0,
        });
        assert!(below > y);
    }

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::zero();
        assert_eq!(state.x, 0.0);
        assert_eq!(state.y, 0.0);
        assert_eq!(state.z, 0.0);

        state.rotate(0.1, 0.2, 0.3);
        assert!((state.x - 0.1).abs() < 1e-6);
        assert!((state.y - 0.2).abs() < 1e-6);
        assert!((state.z - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        let q = RotationState::zero().quaternion();
        assert!(q.angle() < 1e-6);
    }
}
