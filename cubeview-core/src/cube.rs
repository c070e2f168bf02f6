/// Cube face transform calculator
use std::collections::BTreeMap;

use crate::error::CubeError;
use crate::face::Face;
use crate::transform::FaceTransform;

/// A validated cube description: a single positive, finite edge length.
///
/// Everything derived from it is a pure function of that number. Calling
/// the same computation twice yields bitwise-identical transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeSpec {
    edge_length: f32,
}

impl CubeSpec {
    /// Strict validation: zero, negative and non-finite edge lengths are
    /// rejected rather than treated as a degenerate cube.
    pub fn new(edge_length: f32) -> Result<Self, CubeError> {
        if !edge_length.is_finite() || edge_length <= 0.0 {
            return Err(CubeError::InvalidEdgeLength { edge_length });
        }
        Ok(Self { edge_length })
    }

    pub fn edge_length(&self) -> f32 {
        self.edge_length
    }

    /// Half the edge length: the distance from the cube's center to each
    /// face plane.
    pub fn half_width(&self) -> f32 {
        self.edge_length / 2.0
    }

    /// The rigid transform placing one face, independent of all others.
    ///
    /// The translation is stored exactly as `half_width * outward_normal`,
    /// so its single non-zero component (and hence its magnitude) is exact.
    pub fn face_transform(&self, face: Face) -> FaceTransform {
        FaceTransform::new(face.orientation(), face.outward_normal() * self.half_width())
    }

    /// Placement transforms for all six faces.
    pub fn face_transforms(&self) -> BTreeMap<Face, FaceTransform> {
        self.face_transforms_for(Face::ALL)
    }

    /// Placement transforms for a subset of faces. Each entry is numerically
    /// identical to the one the full computation would produce; omitted
    /// faces simply have no entry.
    pub fn face_transforms_for(
        &self,
        faces: impl IntoIterator<Item = Face>,
    ) -> BTreeMap<Face, FaceTransform> {
        faces
            .into_iter()
            .map(|face| (face, self.face_transform(face)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_rejects_bad_edge_lengths() {
        for bad in [0.0, -1.0, -0.25, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert!(matches!(
                CubeSpec::new(bad),
                Err(CubeError::InvalidEdgeLength { .. })
            ));
        }
    }

    #[test]
    fn test_accepts_positive_edge_lengths() {
        for good in [0.001, 1.0, 2.0, 100.0] {
            assert!(CubeSpec::new(good).is_ok());
        }
    }

    #[test]
    fn test_translation_magnitude_is_exactly_half_width() {
        let cube = CubeSpec::new(3.0).unwrap();
        for (_, transform) in cube.face_transforms() {
            // One non-zero component per translation, so the norm is exact.
            assert_eq!(transform.translation.norm(), 1.5);
        }
    }

    #[test]
    fn test_translations_lie_along_outward_normals() {
        let cube = CubeSpec::new(2.0).unwrap();
        for (face, transform) in cube.face_transforms() {
            assert_eq!(transform.translation, face.outward_normal() * 1.0);
        }
    }

    #[test]
    fn test_all_six_normals_each_once() {
        let cube = CubeSpec::new(5.0).unwrap();
        let transforms = cube.face_transforms();
        assert_eq!(transforms.len(), 6);
        let mut matched = Vec::new();
        for (_, transform) in &transforms {
            let n = transform.outward_normal();
            let axis = Face::ALL
                .iter()
                .find(|f| (f.outward_normal() - n).norm() < 1e-6)
                .copied();
            let axis = axis.unwrap();
            assert!(!matched.contains(&axis));
            matched.push(axis);
        }
        assert_eq!(matched.len(), 6);
    }

    #[test]
    fn test_repeat_calls_are_bitwise_identical() {
        let cube = CubeSpec::new(1.7).unwrap();
        assert_eq!(cube.face_transforms(), cube.face_transforms());
    }

    #[test]
    fn test_opposite_faces_mirror_each_other() {
        let cube = CubeSpec::new(4.0).unwrap();
        for face in [Face::Front, Face::Top, Face::Left] {
            let a = cube.face_transform(face);
            let b = cube.face_transform(face.opposite());
            // Exact negation of translations
            assert_eq!(a.translation, -b.translation);
            // Related by a half turn
            let relative = a.rotation.inverse() * b.rotation;
            assert!((relative.angle() - PI).abs() < 1e-6);
        }
    }

    #[test]
    fn test_scaling_doubles_translations_only() {
        let small = CubeSpec::new(2.0).unwrap();
        let large = CubeSpec::new(4.0).unwrap();
        for face in Face::ALL {
            let s = small.face_transform(face);
            let l = large.face_transform(face);
            assert_eq!(l.translation, s.translation * 2.0);
            assert_eq!(l.rotation, s.rotation);
        }
    }

    #[test]
    fn test_subset_matches_full_computation() {
        let cube = CubeSpec::new(2.0).unwrap();
        let full = cube.face_transforms();
        let subset = cube.face_transforms_for([Face::Front, Face::Top]);
        assert_eq!(subset.len(), 2);
        for (face, transform) in &subset {
            assert_eq!(transform, &full[face]);
        }
    }
}
