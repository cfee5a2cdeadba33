//! Slot-indexed cache of pre-rendered text surfaces.
//!
//! Strings the HUD redraws every frame (status lines, objective counters,
//! the pause banner) are rendered once to a transparent surface and then
//! composited per frame. A cache slot re-renders only when its string or
//! color actually changes; repositioning an unchanged string is free.

use starlance_types::{FontColor, Rect, LINE_ADVANCE, SCREEN_WIDTH, TEXT_SLOTS};

use crate::font::{Font, CENTERED};
use crate::screen::Screen;
use crate::surface::Surface;

/// Render `text` to a fresh transparent surface sized to fit one line.
pub fn text_surface(font: &Font, text: &str, color: FontColor) -> Surface {
    // Minimum width keeps the empty string representable.
    let mut surface = Surface::new(Font::text_width(text).max(1), LINE_ADVANCE);
    font.draw(text, 1, 1, color, &mut surface);
    surface.set_transparent()
}

#[derive(Debug, Default, Clone)]
pub struct CachedText {
    text: String,
    color: Option<FontColor>,
    x: i32,
    y: i32,
    image: Option<Surface>,
}

impl CachedText {
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image(&self) -> Option<&Surface> {
        self.image.as_ref()
    }
}

/// The slot table. Slot assignments are fixed by the callers; see
/// [`TEXT_SLOTS`] and [`starlance_types::PAUSE_TEXT_SLOT`].
#[derive(Debug)]
pub struct TextCache {
    slots: Vec<CachedText>,
    renders: u64,
}

impl Default for TextCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TextCache {
    pub fn new() -> Self {
        Self {
            slots: vec![CachedText::default(); TEXT_SLOTS],
            renders: 0,
        }
    }

    /// Ensure `slot` holds `text` in `color` at `(x, y)`.
    ///
    /// An exact string-and-color match only moves the entry; anything else
    /// re-renders and replaces the old surface. `x == `[`CENTERED`] centers
    /// against the rendered width.
    pub fn render_cached(
        &mut self,
        slot: usize,
        text: &str,
        x: i32,
        y: i32,
        color: FontColor,
        font: &Font,
    ) {
        let entry = &mut self.slots[slot];

        if entry.image.is_some() && entry.color == Some(color) && entry.text == text {
            entry.x = x;
            entry.y = y;
            if x == CENTERED {
                entry.x = centered_x(entry.image.as_ref());
            }
            return;
        }

        entry.text.clear();
        entry.text.push_str(text);
        entry.x = x;
        entry.y = y;
        entry.color = Some(color);
        entry.image = Some(text_surface(font, text, color));
        self.renders += 1;
        if x == CENTERED {
            entry.x = centered_x(entry.image.as_ref());
        }
    }

    /// Composite a slot's surface onto the screen (recording damage).
    /// Unrendered slots are skipped.
    pub fn blit_text(&self, slot: usize, screen: &mut Screen) {
        let entry = &self.slots[slot];
        if let Some(image) = &entry.image {
            screen.blit(image, entry.x, entry.y);
        }
    }

    pub fn slot(&self, slot: usize) -> &CachedText {
        &self.slots[slot]
    }

    /// The pixel rectangle a rendered slot occupies, if any.
    pub fn slot_rect(&self, slot: usize) -> Option<Rect> {
        let entry = &self.slots[slot];
        entry
            .image
            .as_ref()
            .map(|img| Rect::new(entry.x, entry.y, img.width(), img.height()))
    }

    /// Number of surface renders performed so far (cache misses).
    pub fn render_count(&self) -> u64 {
        self.renders
    }
}

fn centered_x(image: Option<&Surface>) -> i32 {
    match image {
        Some(img) => (SCREEN_WIDTH - img.width()) / 2,
        None => 0,
    }
}
