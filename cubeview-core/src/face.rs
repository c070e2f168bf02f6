/// The six named sides of a cube and their fixed orientations
use nalgebra::{UnitQuaternion, Vector3};
use std::f32::consts::{FRAC_PI_2, PI};

/// One side of a cube. The numeric order is also the toggle-key order used
/// by interactive hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Face {
    Front,
    Back,
    Top,
    Bottom,
    Left,
    Right,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Top,
        Face::Bottom,
        Face::Left,
        Face::Right,
    ];

    /// Unit vector pointing away from the cube's center, perpendicular to
    /// this face.
    ///
    /// Axis assignment follows the compositing-layer convention the demo was
    /// built in: y grows downward and z points toward the viewer, so Top is
    /// `-y` and Left is `+x`.
    pub fn outward_normal(self) -> Vector3<f32> {
        match self {
            Face::Front => Vector3::new(0.0, 0.0, 1.0),
            Face::Back => Vector3::new(0.0, 0.0, -1.0),
            Face::Top => Vector3::new(0.0, -1.0, 0.0),
            Face::Bottom => Vector3::new(0.0, 1.0, 0.0),
            Face::Left => Vector3::new(1.0, 0.0, 0.0),
            Face::Right => Vector3::new(-1.0, 0.0, 0.0),
        }
    }

    /// Rotation carrying the face's local frame into place: it maps local
    /// `+z` onto the face's outward normal.
    pub fn orientation(self) -> UnitQuaternion<f32> {
        match self {
            Face::Front => UnitQuaternion::identity(),
            Face::Back => UnitQuaternion::from_axis_angle(&Vector3::y_axis(), PI),
            Face::Top => UnitQuaternion::from_axis_angle(&Vector3::x_axis(), FRAC_PI_2),
            Face::Bottom => UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -FRAC_PI_2),
            Face::Left => UnitQuaternion::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2),
            Face::Right => UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -FRAC_PI_2),
        }
    }

    /// The face on the other side of the cube.
    pub fn opposite(self) -> Face {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Face::Front => "front",
            Face::Back => "back",
            Face::Top => "top",
            Face::Bottom => "bottom",
            Face::Left => "left",
            Face::Right => "right",
        };
        write!(f, "{}", name)
    }
}
