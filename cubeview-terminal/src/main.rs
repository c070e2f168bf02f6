/// Cubeview Terminal Demo - Rotating Panel Cube
///
/// Spins a cube assembled from six flat colored panels, each seated by a
/// rigid transform from cubeview-core and composited under perspective.
/// Controls:
///   - WASD / Arrow Keys: Rotate the cube
///   - E/R: Roll rotation
///   - 1-6: Toggle individual faces
///   - Q/ESC: Quit

use cubeview_core::CubeSpec;
use cubeview_terminal::{CubeApp, CubeColors};
use log::info;
use std::io;

fn main() -> io::Result<()> {
    env_logger::init();

    // Edge 100 at eye distance 250, the proportions of the original demo
    let cube = CubeSpec::new(100.0)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    info!("placing cube faces, edge length {}", cube.edge_length());

    println!("Cubeview Terminal Demo - Loading...");
    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = CubeApp::new(cube, &CubeColors::playground())?;
    app.run()?;

    info!("cubeview terminal demo finished");
    println!("Thank you for using Cubeview!");
    Ok(())
}
