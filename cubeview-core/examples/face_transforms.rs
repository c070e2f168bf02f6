/// Example: print the placement transforms for a cube's faces
///
/// Usage: cargo run -p cubeview-core --example face_transforms

use cubeview_core::{CubeSpec, Face};

fn main() -> Result<(), cubeview_core::CubeError> {
    let cube = CubeSpec::new(2.0)?;

    println!("All six faces of a cube with edge length {}:", cube.edge_length());
    for (face, transform) in cube.face_transforms() {
        let n = transform.outward_normal();
        let t = transform.translation;
        println!(
            "  {:<6} normal ({:5.2}, {:5.2}, {:5.2})  translation ({:5.2}, {:5.2}, {:5.2})",
            face.to_string(),
            n.x, n.y, n.z,
            t.x, t.y, t.z,
        );
    }

    println!("\nA strict subset leaves the other faces out entirely:");
    for (face, transform) in cube.face_transforms_for([Face::Front, Face::Top]) {
        let t = transform.translation;
        println!("  {:<6} translation ({:5.2}, {:5.2}, {:5.2})", face.to_string(), t.x, t.y, t.z);
    }

    Ok(())
}
