//! The rendering bundle a mission draws into.

use starlance_gfx::{Font, FramePacer, Screen, TextCache};
use starlance_types::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Screen, font, text cache and pacer, grouped so the loop and the world
/// borrow them as one unit.
pub struct Stage {
    pub screen: Screen,
    pub font: Font,
    pub text: TextCache,
    pub pacer: FramePacer,
}

impl Stage {
    /// Full-resolution stage with the built-in font.
    pub fn new() -> Self {
        Self::with_font(Font::builtin())
    }

    pub fn with_font(font: Font) -> Self {
        Self {
            screen: Screen::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            font,
            text: TextCache::new(),
            pacer: FramePacer::new(),
        }
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}
