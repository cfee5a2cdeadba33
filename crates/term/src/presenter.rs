//! TermPresenter: flushes pixel frames to a real terminal.
//!
//! Frames are downsampled into a half-block [`CellGrid`] and diffed against
//! the previous grid, so a quiet frame costs a handful of cursor moves and
//! color changes rather than a full repaint.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal,
    tty::IsTty,
    QueueableCommand,
};

use starlance_engine::VideoOut;
use starlance_gfx::Surface;

use crate::grid::{downsample_into, CellGrid, HalfCell, Rgb};

// Top pixel in the glyph, bottom pixel in the cell background.
const HALF_BLOCK: char = '\u{2580}';

pub struct TermPresenter {
    stdout: io::Stdout,
    last: Option<CellGrid>,
    scratch: CellGrid,
    buf: Vec<u8>,
    forced_size: Option<(u16, u16)>,
}

impl TermPresenter {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            scratch: CellGrid::new(0, 0),
            buf: Vec::with_capacity(64 * 1024),
            forced_size: None,
        }
    }

    /// Fix the cell viewport instead of querying the terminal.
    pub fn with_viewport(mut self, cols: u16, rows: u16) -> Self {
        self.forced_size = Some((cols, rows));
        self
    }

    /// Whether stdout is attached to a terminal at all.
    pub fn stdout_is_tty() -> bool {
        io::stdout().is_tty()
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next frame to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    fn viewport(&self) -> Result<(u16, u16)> {
        if let Some(size) = self.forced_size {
            return Ok(size);
        }
        Ok(terminal::size()?)
    }

    fn draw(&mut self) -> Result<()> {
        let prev = self.last.take();
        self.buf.clear();

        match &prev {
            Some(p) if p.width() == self.scratch.width() && p.height() == self.scratch.height() => {
                encode_diff_into(p, &self.scratch, &mut self.buf)?;
            }
            _ => {
                encode_full_into(&self.scratch, &mut self.buf)?;
            }
        }
        self.flush_buf()?;

        // Keep the displayed grid for the next diff; the stale one becomes
        // scratch so neither is reallocated.
        let mut displayed = prev.unwrap_or_else(|| CellGrid::new(0, 0));
        std::mem::swap(&mut displayed, &mut self.scratch);
        self.last = Some(displayed);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TermPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoOut for TermPresenter {
    fn present(&mut self, frame: &Surface) -> Result<()> {
        let (cols, rows) = self.viewport()?;
        downsample_into(frame, cols, rows, &mut self.scratch);
        self.draw()
    }
}

/// Encode a full-frame repaint into `out` without touching stdout.
pub fn encode_full_into(grid: &CellGrid, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current: Option<HalfCell> = None;
    for y in 0..grid.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..grid.width() {
            let cell = grid.get(x, y).unwrap_or_default();
            queue_cell(out, cell, &mut current)?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Encode only the changed runs between two same-size grids.
pub fn encode_diff_into(prev: &CellGrid, next: &CellGrid, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<HalfCell> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            queue_cell(out, cell, &mut current)?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    Ok(())
}

fn queue_cell(out: &mut Vec<u8>, cell: HalfCell, current: &mut Option<HalfCell>) -> Result<()> {
    let colors_changed = match current {
        Some(c) => c.top != cell.top || c.bottom != cell.bottom,
        None => true,
    };
    if colors_changed {
        out.queue(SetForegroundColor(term_color(cell.top)))?;
        out.queue(SetBackgroundColor(term_color(cell.bottom)))?;
        *current = Some(cell);
    }
    out.queue(Print(HALF_BLOCK))?;
    Ok(())
}

fn term_color(Rgb { r, g, b }: Rgb) -> Color {
    Color::Rgb { r, g, b }
}

fn for_each_changed_run(
    prev: &CellGrid,
    next: &CellGrid,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
