//! The visible screen: a surface, its background snapshot, and the damage
//! buffer that makes per-frame partial redraws possible.
//!
//! Every composite onto the screen appends one rectangle to the damage list.
//! Each frame drains the list exactly once, in one of two ways:
//!
//! - [`Screen::flush_damage`] simply discards it (the frame began with a
//!   full-screen composite, so there is nothing to erase), or
//! - [`Screen::restore_damage`] repaints every recorded rectangle from the
//!   background snapshot, erasing the previous frame's sprites, and then
//!   discards the list.
//!
//! Restoring must happen before any new-frame drawing or moving sprites
//! leave trails. An undrained buffer across frames is a leak: rectangles
//! would accumulate without bound and the restore cost would grow with them.

use starlance_types::Rect;

use crate::surface::Surface;

/// The visible framebuffer plus damage tracking.
#[derive(Debug, Clone)]
pub struct Screen {
    visible: Surface,
    background: Surface,
    damage: Vec<Rect>,
}

impl Screen {
    /// Create a screen and a same-size black background snapshot.
    pub fn new(w: i32, h: i32) -> Self {
        Self {
            visible: Surface::new(w, h),
            background: Surface::new(w, h),
            damage: Vec::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.visible.width()
    }

    pub fn height(&self) -> i32 {
        self.visible.height()
    }

    pub fn surface(&self) -> &Surface {
        &self.visible
    }

    /// Direct access for draws that bypass damage tracking (font passes,
    /// locked pixel primitives). Callers own the bookkeeping if they want
    /// such draws erased next frame.
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.visible
    }

    /// Replace the background snapshot used by [`restore_damage`].
    ///
    /// [`restore_damage`]: Screen::restore_damage
    pub fn set_background(&mut self, background: Surface) {
        self.background = background;
    }

    pub fn background(&self) -> &Surface {
        &self.background
    }

    /// Composite `image` onto the screen and record the damaged region.
    ///
    /// Fully-off-screen blits are rejected without recording anything; a
    /// partially clipped blit records the clipped rectangle.
    pub fn blit(&mut self, image: &Surface, x: i32, y: i32) {
        if let Some(rect) = crate::surface::blit(image, x, y, &mut self.visible) {
            self.damage.push(rect);
        }
    }

    /// Append a damaged region directly (for draws done through
    /// [`surface_mut`] that still want erasing next frame).
    ///
    /// [`surface_mut`]: Screen::surface_mut
    pub fn add_damage(&mut self, rect: Rect) {
        self.damage.push(rect);
    }

    /// Full-screen composite of the background snapshot.
    ///
    /// Goes through the recording blit like everything else; callers
    /// starting a frame from a full composite follow it with
    /// [`flush_damage`](Screen::flush_damage).
    pub fn draw_background(&mut self) {
        // Raw copy, same as the restore path: the snapshot lands verbatim
        // even if someone keyed or alpha-modded it.
        let full = Rect::new(0, 0, self.visible.width(), self.visible.height());
        self.visible.copy_rect_from(&self.background, full);
        self.damage.push(full);
    }

    /// Fill the visible surface with one color, without damage recording
    /// (used by set pieces that follow with a full present).
    pub fn clear(&mut self, color: u32) {
        self.visible.fill(color);
    }

    /// Discard the damage list without repainting.
    pub fn flush_damage(&mut self) {
        self.damage.clear();
    }

    /// Repaint every damaged rectangle from the background snapshot, in
    /// insertion order, then discard the list.
    pub fn restore_damage(&mut self) {
        for rect in self.damage.drain(..) {
            self.visible.copy_rect_from(&self.background, rect);
        }
    }

    /// The rectangles damaged since the last drain (draw order preserved).
    pub fn damage(&self) -> &[Rect] {
        &self.damage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starlance_types::{rgb, BLACK, RED, WHITE};

    fn sprite(w: i32, h: i32, color: u32) -> Surface {
        let mut s = Surface::new(w, h);
        s.fill(color);
        s
    }

    #[test]
    fn screen_blit_records_one_rect_per_call() {
        let mut screen = Screen::new(100, 100);
        let img = sprite(10, 10, WHITE);

        screen.blit(&img, 0, 0);
        screen.blit(&img, 20, 20);
        screen.blit(&img, 95, 95); // clipped
        assert_eq!(
            screen.damage(),
            &[
                Rect::new(0, 0, 10, 10),
                Rect::new(20, 20, 10, 10),
                Rect::new(95, 95, 5, 5),
            ]
        );

        // Fully off-screen: no write, no record.
        screen.blit(&img, 200, 0);
        assert_eq!(screen.damage().len(), 3);
    }

    #[test]
    fn flush_discards_without_repainting() {
        let mut screen = Screen::new(50, 50);
        let img = sprite(8, 8, RED);
        screen.blit(&img, 10, 10);

        screen.flush_damage();
        assert!(screen.damage().is_empty());
        // Pixels untouched by the flush.
        assert_eq!(screen.surface().pixel(10, 10), Some(RED));
    }

    #[test]
    fn restore_repaints_from_background_and_drains() {
        let mut screen = Screen::new(50, 50);
        let mut bg = Surface::new(50, 50);
        bg.fill(rgb(0, 0, 40));
        screen.set_background(bg);

        let img = sprite(8, 8, RED);
        screen.blit(&img, 10, 10);
        screen.blit(&img, 30, 5);

        screen.restore_damage();
        assert!(screen.damage().is_empty());
        assert_eq!(screen.surface().pixel(10, 10), Some(rgb(0, 0, 40)));
        assert_eq!(screen.surface().pixel(37, 12), Some(rgb(0, 0, 40)));
        // A region never blitted to stays whatever it was (here: zeroed).
        assert_eq!(screen.surface().pixel(0, 49), Some(0));
    }

    #[test]
    fn draw_background_covers_screen_and_records_full_rect() {
        let mut screen = Screen::new(40, 30);
        let mut bg = Surface::new(40, 30);
        bg.fill(WHITE);
        screen.set_background(bg);

        screen.draw_background();
        assert_eq!(screen.surface().pixel(39, 29), Some(WHITE));
        assert_eq!(screen.damage(), &[Rect::new(0, 0, 40, 30)]);

        screen.flush_damage();
        assert!(screen.damage().is_empty());
    }

    #[test]
    fn clear_does_not_record_damage() {
        let mut screen = Screen::new(20, 20);
        screen.clear(WHITE);
        assert!(screen.damage().is_empty());
        assert_eq!(screen.surface().pixel(5, 5), Some(WHITE));
        screen.clear(BLACK);
        assert_eq!(screen.surface().pixel(5, 5), Some(BLACK));
    }
}
