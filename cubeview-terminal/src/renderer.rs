/// Depth-buffered ASCII compositor for colored face panels
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use cubeview_core::{Panel, Perspective, Viewport};
use nalgebra::UnitQuaternion;
use std::io::Write;

/// Character luminosity ramp for shading (dimmest to brightest)
const SHADE_RAMP: &[char] = &['.', ':', '-', '=', '+', '*', '#', '%', '@'];

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    color: Color,
}

const EMPTY: Cell = Cell {
    ch: ' ',
    color: Color::Reset,
};

/// Renderer that composites placed panels into a character grid, nearest
/// panel winning per cell
pub struct PanelRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    cells: Vec<Cell>,
}

impl PanelRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            cells: vec![EMPTY; size],
        }
    }

    pub fn clear(&mut self) {
        for i in 0..self.cells.len() {
            self.depth_buffer[i] = f32::INFINITY;
            self.cells[i] = EMPTY;
        }
    }

    /// The character and color currently composited at a cell.
    pub fn cell(&self, x: usize, y: usize) -> Option<(char, Color)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let cell = self.cells[y * self.width + x];
        Some((cell.ch, cell.color))
    }

    /// Composite one panel under the given model rotation. Panels reaching
    /// behind the eye are skipped whole.
    pub fn render_panel(
        &mut self,
        panel: &Panel,
        color: Color,
        model: &UnitQuaternion<f32>,
        perspective: &Perspective,
        viewport: &Viewport,
    ) {
        let mut corners = Vec::with_capacity(4);
        for corner in &panel.corners {
            let world = model * corner;
            if let Some(projected) = perspective.project(&world) {
                let (x, y) = viewport.to_cell(&projected);
                corners.push((x, y, projected.depth));
            } else {
                return;
            }
        }

        // Shade by how squarely the rotated panel faces the viewer; both
        // sides shade alike so the inside stays visible through a missing
        // face.
        let normal = model * panel.normal();
        let facing = normal.z.abs();
        let char_index = (facing * (SHADE_RAMP.len() - 1) as f32) as usize;
        let char_index = char_index.min(SHADE_RAMP.len() - 1);
        let cell = Cell {
            ch: SHADE_RAMP[char_index],
            color,
        };

        // A panel is a quad: two triangles sharing the 0-2 diagonal
        self.rasterize_triangle([corners[0], corners[1], corners[2]], cell);
        self.rasterize_triangle([corners[0], corners[2], corners[3]], cell);
    }

    fn rasterize_triangle(&mut self, coords: [(f32, f32, f32); 3], cell: Cell) {
        let (v0, v1, v2) = (coords[0], coords[1], coords[2]);

        // Bounding box
        let min_x = v0.0.min(v1.0).min(v2.0).floor() as i32;
        let max_x = v0.0.max(v1.0).max(v2.0).ceil() as i32;
        let min_y = v0.1.min(v1.1).min(v2.1).floor() as i32;
        let max_y = v0.1.max(v1.1).max(v2.1).ceil() as i32;

        // Clip to screen bounds
        let min_x = min_x.max(0);
        let max_x = max_x.min(self.width as i32 - 1);
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height as i32 - 1);

        // Scanline rasterization
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                // Barycentric coordinates
                if let Some((w0, w1, w2)) =
                    barycentric((v0.0, v0.1), (v1.0, v1.1), (v2.0, v2.1), (px, py))
                {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        // Interpolate depth
                        let depth = w0 * v0.2 + w1 * v1.2 + w2 * v2.2;

                        let idx = y as usize * self.width + x as usize;
                        if depth < self.depth_buffer[idx] {
                            self.depth_buffer[idx] = depth;
                            self.cells[idx] = cell;
                        }
                    }
                }
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = self.cells[y * self.width + x];
                writer.queue(SetForegroundColor(cell.color))?;
                writer.queue(Print(cell.ch))?;
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f32, f32),
    v1: (f32, f32),
    v2: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}
