/// Terminal scene host for the panel cube demo
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use cubeview_core::{CubeSpec, Face, Panel, Perspective, RotationState, Viewport};
use log::debug;
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;

pub use renderer::PanelRenderer;

/// Per-face colors for a cube. Top and bottom are optional, as in the
/// original demo; a face without a color gets no panel at all, so the cube
/// is open there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeColors {
    colors: [Option<Color>; 6],
}

impl CubeColors {
    pub fn new(
        front: Color,
        back: Color,
        top: Option<Color>,
        right: Color,
        bottom: Option<Color>,
        left: Color,
    ) -> Self {
        let mut colors = [None; 6];
        colors[Face::Front as usize] = Some(front);
        colors[Face::Back as usize] = Some(back);
        colors[Face::Top as usize] = top;
        colors[Face::Right as usize] = Some(right);
        colors[Face::Bottom as usize] = bottom;
        colors[Face::Left as usize] = Some(left);
        Self { colors }
    }

    /// The palette of the original playground demo, mapped to terminal
    /// colors.
    pub fn playground() -> Self {
        Self::new(
            Color::Green,
            Color::Blue,
            Some(Color::Red),
            Color::Rgb {
                r: 128,
                g: 0,
                b: 128,
            },
            Some(Color::Yellow),
            Color::Rgb {
                r: 255,
                g: 165,
                b: 0,
            },
        )
    }

    pub fn color(&self, face: Face) -> Option<Color> {
        self.colors[face as usize]
    }

    pub fn set(&mut self, face: Face, color: Option<Color>) {
        self.colors[face as usize] = color;
    }
}

/// Main application struct for the terminal cube demo
pub struct CubeApp {
    panels: Vec<(Panel, Color)>,
    visible: [bool; 6],
    rotation: RotationState,
    perspective: Perspective,
    viewport: Viewport,
    renderer: PanelRenderer,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl CubeApp {
    pub fn new(cube: CubeSpec, colors: &CubeColors) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        let mut panels = Vec::new();
        for face in Face::ALL {
            if let Some(color) = colors.color(face) {
                panels.push((cube.panel(face), color));
            }
        }

        // Fit the cube comfortably in the terminal height
        let scale = height as f32 / (3.0 * cube.edge_length());

        Ok(Self {
            panels,
            visible: [true; 6],
            rotation: RotationState::new(0.3, 0.3, 0.0),
            perspective: Perspective::default(),
            viewport: Viewport::new(width as usize, height as usize, scale),
            renderer: PanelRenderer::new(width as usize, height as usize),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Update
            self.update();

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('w') | KeyCode::Up => {
                    self.rotation.rotate(0.1, 0.0, 0.0);
                }
                KeyCode::Char('s') | KeyCode::Down => {
                    self.rotation.rotate(-0.1, 0.0, 0.0);
                }
                KeyCode::Char('a') | KeyCode::Left => {
                    self.rotation.rotate(0.0, -0.1, 0.0);
                }
                KeyCode::Char('d') | KeyCode::Right => {
                    self.rotation.rotate(0.0, 0.1, 0.0);
                }
                KeyCode::Char('e') => {
                    self.rotation.rotate(0.0, 0.0, 0.1);
                }
                KeyCode::Char('r') => {
                    self.rotation.rotate(0.0, 0.0, -0.1);
                }
                KeyCode::Char(c @ '1'..='6') => {
                    let face = Face::ALL[c as usize - '1' as usize];
                    self.visible[face as usize] = !self.visible[face as usize];
                    debug!("toggled {} face", face);
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn update(&mut self) {
        // Continuous slow rotation for demo effect
        self.rotation.rotate(0.01, 0.015, 0.0);
    }

    fn render(&mut self) -> io::Result<()> {
        let model = self.rotation.quaternion();

        // Clear renderer
        self.renderer.clear();

        // Composite the visible panels
        for (panel, color) in &self.panels {
            if self.visible[panel.face as usize] {
                self.renderer
                    .render_panel(panel, *color, &model, &self.perspective, &self.viewport);
            }
        }

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "cubeview | FPS: {:.1} | Controls: WASD/Arrows=Rotate E/R=Roll 1-6=Toggle faces Q=Quit",
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
