/// Rigid face placement transforms
use nalgebra::{Matrix4, Point3, UnitQuaternion, Vector3};

/// A rigid transform placing one face panel: a rotation followed by a
/// translation.
///
/// Composition convention (fixed for the whole crate): a local point `p`
/// maps to world space as `R * p + t`. The rotation orients the panel's
/// local frame first; the translation then pushes the panel out along its
/// rotated local `+z`, so `t` is always half the edge length times the
/// face's outward normal. Swapping the order would slide panels along world
/// axes instead of seating them against the cube walls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceTransform {
    pub rotation: UnitQuaternion<f32>,
    pub translation: Vector3<f32>,
}

impl FaceTransform {
    pub fn new(rotation: UnitQuaternion<f32>, translation: Vector3<f32>) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Apply the transform to a point in the panel's local frame.
    pub fn transform_point(&self, point: &Point3<f32>) -> Point3<f32> {
        self.rotation * point + self.translation
    }

    /// The placed panel's outward normal: the rotated local `+z`.
    pub fn outward_normal(&self) -> Vector3<f32> {
        self.rotation * Vector3::z()
    }

    /// The same transform as a homogeneous 4x4 matrix (translation after
    /// rotation), for matrix-pipeline consumers.
    pub fn to_homogeneous(&self) -> Matrix4<f32> {
        Matrix4::new_translation(&self.translation) * self.rotation.to_homogeneous()
    }
}
