// Renderer module for the affine viewer
//
// Stands in for the on-screen print surface: text is addressed in pixels and
// rasterised into character cells, then presented to any writer once per frame.

use crate::math::Matrix4x4;
use crate::scene::Scene;
use log::{debug, info, trace};
use std::io::{self, Write};

/// Vertical distance between printed matrix rows, in pixels.
pub const ROW_HEIGHT: i32 = 20;
/// Horizontal distance between printed matrix columns, in pixels.
pub const COLUMN_WIDTH: i32 = 60;

/// Label line plus four value rows plus one blank row.
const MATRIX_BLOCK_ROWS: i32 = 6;

/// Written on its own line between presented frames. A rendered frame never
/// contains it.
pub const FRAME_SEPARATOR: char = '\x0c';

/// A surface that accepts text at pixel positions.
pub trait Screen {
    fn print(&mut self, x: i32, y: i32, text: &str);
}

/// Prints `label` at (x, y) with the 16 entries of `matrix` laid out below
/// it as a 4x4 grid, two decimals in six-wide cells.
pub fn matrix_screen_printf<S: Screen + ?Sized>(
    screen: &mut S,
    x: i32,
    y: i32,
    matrix: &Matrix4x4,
    label: &str,
) {
    screen.print(x, y, label);
    for row in 0..4 {
        for column in 0..4 {
            screen.print(
                x.saturating_add(column as i32 * COLUMN_WIDTH),
                y.saturating_add((row as i32 + 1) * ROW_HEIGHT + 1),
                &format!("{:6.2}", matrix.m[row][column]),
            );
        }
    }
}

/// A character-cell screen. Spaces are transparent, so a later print only
/// replaces the cells its visible glyphs land on. Anything off the edges is
/// clipped.
#[derive(Debug, Clone)]
pub struct TextScreen {
    cell_width: i32,
    cell_height: i32,
    columns: usize,
    cells: Vec<Vec<char>>,
}

impl TextScreen {
    pub fn new(cell_width: i32, cell_height: i32, columns: usize, rows: usize) -> Self {
        Self {
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
            columns,
            cells: vec![vec![' '; columns]; rows],
        }
    }

    pub fn clear(&mut self) {
        for line in &mut self.cells {
            line.fill(' ');
        }
    }

    /// The screen contents with trailing blanks removed.
    pub fn present(&self) -> String {
        let mut lines: Vec<String> = self
            .cells
            .iter()
            .map(|line| line.iter().collect::<String>().trim_end().to_string())
            .collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }
}

impl Screen for TextScreen {
    fn print(&mut self, x: i32, y: i32, text: &str) {
        if y < 0 {
            return;
        }
        let Some(line) = self.cells.get_mut((y / self.cell_height) as usize) else {
            return;
        };

        let start = x.div_euclid(self.cell_width) as i64;
        for (offset, ch) in text.chars().enumerate() {
            let column = start + offset as i64;
            if ch != ' ' && column >= 0 && (column as usize) < self.columns {
                line[column as usize] = ch;
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Number of frames to run before returning.
    pub frames: u32,
    pub origin_x: i32,
    pub origin_y: i32,
    pub cell_width: i32,
    pub cell_height: i32,
    pub columns: usize,
    pub rows: usize,
}

impl Default for RendererConfig {
    fn default() -> Self {
        // 1280x720 window
        Self {
            frames: 1,
            origin_x: 0,
            origin_y: 0,
            cell_width: 8,
            cell_height: 20,
            columns: 160,
            rows: 36,
        }
    }
}

pub struct Renderer {
    config: RendererConfig,
    screen: TextScreen,
    frame: u64,
}

impl Renderer {
    pub fn new(config: RendererConfig) -> Self {
        let screen = TextScreen::new(
            config.cell_width,
            config.cell_height,
            config.columns,
            config.rows,
        );
        Self {
            config,
            screen,
            frame: 0,
        }
    }

    /// Frames rendered so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Runs the configured number of frames, presenting each to `out`.
    pub fn run<W: Write>(&mut self, scene: &Scene, out: &mut W) -> io::Result<()> {
        info!(
            "Running {} frame(s) for {} object(s)",
            self.config.frames,
            scene.objects.len()
        );

        for i in 0..self.config.frames {
            let text = self.render_frame(scene);
            if i > 0 {
                writeln!(out, "{FRAME_SEPARATOR}")?;
            }
            writeln!(out, "{text}")?;
        }
        out.flush()?;

        info!("Finished after {} frame(s)", self.frame);
        Ok(())
    }

    /// Computes every object's matrix and returns the presented screen.
    pub fn render_frame(&mut self, scene: &Scene) -> String {
        self.screen.clear();

        let mut drawn = 0;
        for (i, (label, matrix)) in scene.world_matrices().enumerate() {
            trace!("{label}: {:?}", matrix.as_array());
            let block = (i as i32).saturating_mul(MATRIX_BLOCK_ROWS * ROW_HEIGHT);
            let y = self.config.origin_y.saturating_add(block);
            matrix_screen_printf(&mut self.screen, self.config.origin_x, y, &matrix, label);
            drawn += 1;
        }

        self.frame += 1;
        debug!("Frame {} drew {} matrix(es)", self.frame, drawn);
        self.screen.present()
    }
}
