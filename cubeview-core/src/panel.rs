/// Placed face panels: the rectangular surfaces handed to a scene host
use nalgebra::{Point3, Vector3};

use crate::cube::CubeSpec;
use crate::face::Face;
use crate::transform::FaceTransform;

/// A face panel after placement: the four world-space corners of an
/// edge-by-edge square seated against one cube wall.
///
/// Corners are wound so that the cross product of the first two edges
/// reproduces the face's outward normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    pub face: Face,
    pub corners: [Point3<f32>; 4],
}

impl Panel {
    pub fn new(face: Face, edge_length: f32, transform: &FaceTransform) -> Self {
        let h = edge_length / 2.0;
        let local = [
            Point3::new(-h, -h, 0.0),
            Point3::new(h, -h, 0.0),
            Point3::new(h, h, 0.0),
            Point3::new(-h, h, 0.0),
        ];
        Self {
            face,
            corners: local.map(|p| transform.transform_point(&p)),
        }
    }

    /// Outward normal recomputed from the corner winding. Agrees with
    /// `Face::outward_normal` up to rounding.
    pub fn normal(&self) -> Vector3<f32> {
        let edge1 = self.corners[1] - self.corners[0];
        let edge2 = self.corners[3] - self.corners[0];
        edge1.cross(&edge2).normalize()
    }

    /// Center of the panel, at half the edge length from the origin.
    pub fn center(&self) -> Point3<f32> {
        let sum = self.corners[0].coords
            + self.corners[1].coords
            + self.corners[2].coords
            + self.corners[3].coords;
        Point3::from(sum / 4.0)
    }
}

impl CubeSpec {
    /// The placed panel for a single face.
    pub fn panel(&self, face: Face) -> Panel {
        Panel::new(face, self.edge_length(), &self.face_transform(face))
    }

    /// Panels for all six faces.
    pub fn panels(&self) -> Vec<Panel> {
        self.panels_for(Face::ALL)
    }

    /// Panels for a subset of faces. A face left out here is genuinely
    /// absent: no panel is produced for it, so hosts that skip a face show
    /// a hole into the cube rather than an unpainted wall.
    pub fn panels_for(&self, faces: impl IntoIterator<Item = Face>) -> Vec<Panel> {
        faces.into_iter().map(|face| self.panel(face)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_panel_sits_on_the_front_wall() {
        let cube = CubeSpec::new(2.0).unwrap();
        let panel = cube.panel(Face::Front);
        for corner in &panel.corners {
            assert_eq!(corner.z, 1.0);
            assert_eq!(corner.x.abs(), 1.0);
            assert_eq!(corner.y.abs(), 1.0);
        }
    }

    #[test]
    fn test_winding_normal_matches_face_normal() {
        let cube = CubeSpec::new(3.0).unwrap();
        for panel in cube.panels() {
            assert!((panel.normal() - panel.face.outward_normal()).norm() < 1e-5);
        }
    }

    #[test]
    fn test_center_is_half_width_along_normal() {
        let cube = CubeSpec::new(5.0).unwrap();
        for panel in cube.panels() {
            let expected = panel.face.outward_normal() * 2.5;
            assert!((panel.center().coords - expected).norm() < 1e-4);
        }
    }

    #[test]
    fn test_corners_are_cube_vertices() {
        // Every panel corner lies on the cube: all coordinates at +/- half
        // the edge length.
        let cube = CubeSpec::new(2.0).unwrap();
        for panel in cube.panels() {
            for corner in &panel.corners {
                for c in [corner.x, corner.y, corner.z] {
                    assert!((c.abs() - 1.0).abs() < 1e-5);
                }
            }
        }
    }

    #[test]
    fn test_subset_panels_are_omitted_not_empty() {
        let cube = CubeSpec::new(2.0).unwrap();
        let panels = cube.panels_for([Face::Front, Face::Top]);
        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].face, Face::Front);
        assert_eq!(panels[1].face, Face::Top);
        assert_eq!(panels[0], cube.panel(Face::Front));
    }
}
