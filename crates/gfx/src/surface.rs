//! Owned ARGB32 pixel surfaces and the composite primitive.
//!
//! A [`Surface`] is a plain `Vec<u32>` buffer in packed ARGB order (alpha in
//! the top byte; see the channel helpers in `starlance-types`). Surfaces are
//! exclusively owned: the game-global asset table or a transient UI element
//! creates one, and dropping it releases the pixels. There is no sharing and
//! no internal synchronization; the engine is single-threaded by contract.
//!
//! Compositing honors two per-surface source attributes:
//! - an optional color key (pure black is skipped entirely), and
//! - an alpha modulation factor (used at 128 for translucent panels).

use starlance_types::{alpha_of, blue_of, green_of, red_of, Rect};

use crate::error::{fatal, ResourceError};

/// Largest accepted surface edge. Anything beyond this is treated as resource
/// exhaustion and handled by the fail-fast policy.
pub const MAX_SURFACE_DIM: i32 = 16_384;

/// RGB mask used for color-key comparison (alpha ignored).
const KEY_MASK: u32 = 0x00ff_ffff;

/// An owned 32-bit pixel buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct Surface {
    w: i32,
    h: i32,
    pixels: Vec<u32>,
    color_key: bool,
    alpha_mod: u8,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("w", &self.w)
            .field("h", &self.h)
            .field("color_key", &self.color_key)
            .field("alpha_mod", &self.alpha_mod)
            .finish()
    }
}

impl Surface {
    /// Allocate a zeroed surface.
    ///
    /// Degenerate or oversized dimensions are unrecoverable: this prints a
    /// diagnostic and exits rather than returning an error.
    pub fn new(w: i32, h: i32) -> Self {
        if w <= 0 || h <= 0 || w > MAX_SURFACE_DIM || h > MAX_SURFACE_DIM {
            fatal(ResourceError::SurfaceDims { w, h });
        }
        Self {
            w,
            h,
            pixels: vec![0; (w as usize) * (h as usize)],
            color_key: false,
            alpha_mod: 255,
        }
    }

    pub fn width(&self) -> i32 {
        self.w
    }

    pub fn height(&self) -> i32 {
        self.h
    }

    /// Mark pure black as transparent for subsequent composites.
    ///
    /// Builder-style: consumes and returns the surface so loaders can chain
    /// it onto a fresh allocation.
    pub fn set_transparent(mut self) -> Self {
        self.color_key = true;
        self
    }

    pub fn has_color_key(&self) -> bool {
        self.color_key
    }

    /// Set the whole-surface alpha modulation applied when this surface is
    /// composited onto another (255 = opaque copy).
    pub fn set_alpha_mod(&mut self, alpha: u8) {
        self.alpha_mod = alpha;
    }

    pub fn alpha_mod(&self) -> u8 {
        self.alpha_mod
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.w || y < 0 || y >= self.h {
            return None;
        }
        Some((y as usize) * (self.w as usize) + (x as usize))
    }

    /// Read one pixel; `None` out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    /// Fill the entire surface with one color.
    pub fn fill(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Fill a clipped rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let r = rect.clipped_to(self.w, self.h);
        if r.is_empty() {
            return;
        }
        let w = self.w as usize;
        for y in r.y..r.bottom() {
            let row = (y as usize) * w;
            self.pixels[row + r.x as usize..row + r.right() as usize].fill(color);
        }
    }

    /// Borrow the pixels for direct writes.
    ///
    /// Pixel-level primitives (lines, circles) require the caller to hold
    /// this guard for the duration of the call; releasing it is just letting
    /// the borrow end.
    pub fn lock(&mut self) -> Pixels<'_> {
        Pixels { surface: self }
    }

    /// Composite a whole source surface at `(x, y)`, clipping to this
    /// surface's bounds. Returns the clipped destination rectangle, or
    /// `None` when nothing was written.
    pub fn composite_from(&mut self, src: &Surface, x: i32, y: i32) -> Option<Rect> {
        self.composite_region_from(src, Rect::new(0, 0, src.w, src.h), x, y)
    }

    /// Composite a sub-rectangle of `src` at `(x, y)`.
    ///
    /// Honors `src`'s color key and alpha modulation. The returned rect is
    /// the region of this surface actually written.
    pub fn composite_region_from(
        &mut self,
        src: &Surface,
        src_rect: Rect,
        x: i32,
        y: i32,
    ) -> Option<Rect> {
        let sr = src_rect.clipped_to(src.w, src.h);
        if sr.is_empty() {
            return None;
        }

        let dst = Rect::new(x, y, sr.w, sr.h).clipped_to(self.w, self.h);
        if dst.is_empty() {
            return None;
        }

        // How far clipping pushed the origin; the source window shifts by
        // the same amount.
        let ox = dst.x - x;
        let oy = dst.y - y;

        let keyed = src.color_key;
        let amod = src.alpha_mod;

        for row in 0..dst.h {
            let sy = sr.y + oy + row;
            let dy = dst.y + row;
            let s_base = (sy as usize) * (src.w as usize);
            let d_base = (dy as usize) * (self.w as usize);
            for col in 0..dst.w {
                let sx = sr.x + ox + col;
                let p = src.pixels[s_base + sx as usize];
                if keyed && p & KEY_MASK == 0 {
                    continue;
                }
                let di = d_base + (dst.x + col) as usize;
                if amod == 255 {
                    self.pixels[di] = p;
                } else {
                    self.pixels[di] = blend(p, self.pixels[di], amod);
                }
            }
        }

        Some(dst)
    }

    /// Raw same-position copy of `rect` from `src` (no color key, no alpha).
    ///
    /// This is the background-restore path: the snapshot's exact pixels must
    /// land back on screen.
    pub fn copy_rect_from(&mut self, src: &Surface, rect: Rect) {
        let r = rect.clipped_to(self.w, self.h).clipped_to(src.w, src.h);
        if r.is_empty() {
            return;
        }
        for y in r.y..r.bottom() {
            let s = (y as usize) * (src.w as usize);
            let d = (y as usize) * (self.w as usize);
            let (x0, x1) = (r.x as usize, r.right() as usize);
            self.pixels[d + x0..d + x1].copy_from_slice(&src.pixels[s + x0..s + x1]);
        }
    }
}

/// Blend `src` over `dst` with a whole-surface alpha factor.
#[inline(always)]
fn blend(src: u32, dst: u32, alpha: u8) -> u32 {
    let a = alpha as u32;
    let na = 255 - a;
    let mix = |s: u8, d: u8| -> u32 { (s as u32 * a + d as u32 * na) / 255 };
    starlance_types::argb(
        alpha_of(dst).max(alpha_of(src)),
        mix(red_of(src), red_of(dst)) as u8,
        mix(green_of(src), green_of(dst)) as u8,
        mix(blue_of(src), blue_of(dst)) as u8,
    )
}

/// Scoped pixel access to a locked surface.
pub struct Pixels<'a> {
    surface: &'a mut Surface,
}

impl Pixels<'_> {
    pub fn width(&self) -> i32 {
        self.surface.w
    }

    pub fn height(&self) -> i32 {
        self.surface.h
    }

    /// Write one pixel; silently skips out-of-bounds coordinates.
    #[inline(always)]
    pub fn put(&mut self, x: i32, y: i32, color: u32) {
        if let Some(i) = self.surface.idx(x, y) {
            self.surface.pixels[i] = color;
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        self.surface.pixel(x, y)
    }
}

/// Composite `image` onto `dest` at integer offsets.
///
/// A cheap signed bounding-box test rejects fully-off-target blits before
/// the composite primitive does any per-pixel clipping. Returns the clipped
/// rect that was written, if any.
pub fn blit(image: &Surface, x: i32, y: i32, dest: &mut Surface) -> Option<Rect> {
    if x + image.width() < 0 || x >= dest.width() || y + image.height() < 0 || y >= dest.height() {
        return None;
    }
    dest.composite_from(image, x, y)
}
