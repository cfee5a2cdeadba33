//! Half-block cell grid: the terminal-side picture of a pixel frame.
//!
//! Each terminal cell shows two vertically stacked pixels using the upper
//! half block glyph, foreground for the top pixel and background for the
//! bottom one. A 80x24 terminal therefore displays a 80x48 pixel picture.

use starlance_gfx::Surface;
use starlance_types::{blue_of, green_of, red_of};

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Split a packed ARGB pixel into channels, dropping alpha.
    pub const fn from_pixel(pixel: u32) -> Self {
        Self::new(red_of(pixel), green_of(pixel), blue_of(pixel))
    }
}

/// One terminal cell: the two pixels it displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HalfCell {
    pub top: Rgb,
    pub bottom: Rgb,
}

/// 2D grid of half-block cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    width: u16,
    height: u16,
    cells: Vec<HalfCell>,
}

impl CellGrid {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![HalfCell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, preserving the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, HalfCell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<HalfCell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: HalfCell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }
}

/// Downsample a pixel frame into `out`, resized to `cols` x `rows` cells.
///
/// Nearest-neighbor sampling: cell column `cx` reads the source column at
/// `cx * frame_w / cols`, and the cell's two half-rows read the rows at
/// `hy * frame_h / (rows * 2)`.
pub fn downsample_into(frame: &Surface, cols: u16, rows: u16, out: &mut CellGrid) {
    out.resize(cols, rows);
    if cols == 0 || rows == 0 {
        return;
    }

    let fw = frame.width() as u32;
    let fh = frame.height() as u32;
    let half_rows = rows as u32 * 2;

    for cy in 0..rows {
        let top_y = ((cy as u32 * 2) * fh / half_rows) as i32;
        let bottom_y = ((cy as u32 * 2 + 1) * fh / half_rows) as i32;
        for cx in 0..cols {
            let src_x = (cx as u32 * fw / cols as u32) as i32;
            let top = frame.pixel(src_x, top_y).unwrap_or(0);
            let bottom = frame.pixel(src_x, bottom_y).unwrap_or(0);
            out.set(
                cx,
                cy,
                HalfCell {
                    top: Rgb::from_pixel(top),
                    bottom: Rgb::from_pixel(bottom),
                },
            );
        }
    }
}
