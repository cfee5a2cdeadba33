//! Locked-pixel drawing primitives.
//!
//! These draw straight into a surface with no damage recording; callers
//! drawing onto the visible screen pair them with
//! [`Screen::add_damage`](crate::screen::Screen::add_damage) when the region
//! needs erasing next frame. All writes clip to the surface.

use starlance_types::{Rect, GREY, WHITE};

use crate::surface::Surface;

/// Steps one pixel per axis per iteration toward the end point, which is
/// itself never plotted. A step cap bounds runaway spans from bad
/// coordinates; overruns are reported and truncated.
pub fn draw_line(dest: &mut Surface, x1: i32, y1: i32, x2: i32, y2: i32, color: u32) {
    let (mut x, mut y) = (x1, y1);
    let mut counter = 0;
    let mut px = dest.lock();

    loop {
        px.put(x, y, color);

        if x > x2 {
            x -= 1;
        }
        if x < x2 {
            x += 1;
        }
        if y > y2 {
            y -= 1;
        }
        if y < y2 {
            y += 1;
        }

        if x == x2 && y == y2 {
            break;
        }
        if counter == 1000 {
            eprintln!("[Gfx] line overrun: ({x1},{y1}) -> ({x2},{y2})");
            break;
        }
        counter += 1;
    }
}

/// Midpoint circle outline centered on `(xc, yc)`.
pub fn circle(dest: &mut Surface, xc: i32, yc: i32, radius: i32, color: u32) {
    let mut x = 0;
    let mut xx = 0;
    let mut y = radius;
    let mut yy = 2 * radius;
    let mut p = 1 - radius;

    let mut px = dest.lock();

    px.put(xc, yc - y, color);
    px.put(xc, yc + y, color);
    px.put(xc - y, yc, color);
    px.put(xc + y, yc, color);

    while x < y {
        xx += 2;
        x += 1;
        if p >= 0 {
            yy -= 2;
            y -= 1;
            p -= yy;
        }
        p += xx + 1;

        px.put(xc - x, yc - y, color);
        px.put(xc + x, yc - y, color);
        px.put(xc - x, yc + y, color);
        px.put(xc + x, yc + y, color);
        px.put(xc - y, yc - x, color);
        px.put(xc + y, yc - x, color);
        px.put(xc - y, yc + x, color);
        px.put(xc + y, yc + x, color);
    }

    // Landing exactly on the diagonal gets its points plotted once more.
    if x == y {
        px.put(xc - x, yc - y, color);
        px.put(xc + x, yc - y, color);
        px.put(xc - x, yc + y, color);
        px.put(xc + x, yc + y, color);
    }
}

/// Filled rectangle with a raised bevel: white top and left edges, grey
/// bottom and right. The bottom and right edges sit at `y + h` and `x + w`,
/// one pixel outside the fill, so callers framing a whole surface pass
/// `w - 1` / `h - 1`.
pub fn bevel_rect(dest: &mut Surface, x: i32, y: i32, w: i32, h: i32, color: u32) {
    dest.fill_rect(Rect::new(x, y, w, h), color);

    draw_line(dest, x, y, x + w, y, WHITE);
    draw_line(dest, x, y, x, y + h, WHITE);
    draw_line(dest, x, y + h, x + w, y + h, GREY);
    draw_line(dest, x + w, y + 1, x + w, y + h, GREY);
}

/// A solid-color surface that composites at half opacity.
pub fn alpha_rect(w: i32, h: i32, color: u32) -> Surface {
    let mut surface = Surface::new(w, h);
    surface.fill(color);
    surface.set_alpha_mod(128);
    surface
}

#[cfg(test)]
mod tests {
    use super::*;
    use starlance_types::{rgb, BLUE, RED};

    #[test]
    fn line_omits_end_point() {
        let mut s = Surface::new(20, 20);
        draw_line(&mut s, 5, 5, 10, 5, WHITE);
        for x in 5..10 {
            assert_eq!(s.pixel(x, 5), Some(WHITE), "x={x}");
        }
        assert_eq!(s.pixel(10, 5), Some(0));
    }

    #[test]
    fn line_steps_both_axes_at_once() {
        let mut s = Surface::new(20, 20);
        draw_line(&mut s, 0, 0, 5, 3, WHITE);
        for (x, y) in [(0, 0), (1, 1), (2, 2), (3, 3), (4, 3)] {
            assert_eq!(s.pixel(x, y), Some(WHITE), "({x},{y})");
        }
        assert_eq!(s.pixel(5, 3), Some(0));
    }

    #[test]
    fn line_single_point_plots_once() {
        let mut s = Surface::new(8, 8);
        draw_line(&mut s, 3, 3, 3, 3, RED);
        assert_eq!(s.pixel(3, 3), Some(RED));
    }

    #[test]
    fn runaway_line_terminates_and_clips() {
        let mut s = Surface::new(10, 10);
        draw_line(&mut s, 0, 0, 5000, 0, WHITE);
        assert_eq!(s.pixel(9, 0), Some(WHITE));
    }

    #[test]
    fn circle_hits_cardinal_points() {
        let mut s = Surface::new(30, 30);
        circle(&mut s, 15, 15, 5, BLUE);
        assert_eq!(s.pixel(15, 10), Some(BLUE));
        assert_eq!(s.pixel(15, 20), Some(BLUE));
        assert_eq!(s.pixel(10, 15), Some(BLUE));
        assert_eq!(s.pixel(20, 15), Some(BLUE));
        // Center stays empty.
        assert_eq!(s.pixel(15, 15), Some(0));
    }

    #[test]
    fn bevel_edges_and_fill() {
        let fill = rgb(0x00, 0x00, 0xaa);
        let mut s = Surface::new(20, 20);
        bevel_rect(&mut s, 2, 2, 10, 8, fill);

        assert_eq!(s.pixel(5, 5), Some(fill));
        assert_eq!(s.pixel(2, 2), Some(WHITE)); // top-left corner
        assert_eq!(s.pixel(11, 2), Some(WHITE)); // top edge end
        assert_eq!(s.pixel(2, 9), Some(WHITE)); // left edge end
        assert_eq!(s.pixel(2, 10), Some(GREY)); // bottom edge start
        assert_eq!(s.pixel(12, 3), Some(GREY)); // right edge start
        assert_eq!(s.pixel(12, 2), Some(0)); // right edge starts below the top
    }

    #[test]
    fn alpha_rect_composites_at_half_opacity() {
        let overlay = alpha_rect(4, 4, rgb(0xff, 0xff, 0xff));
        assert_eq!(overlay.alpha_mod(), 128);

        let mut dest = Surface::new(4, 4);
        dest.fill(rgb(0, 0, 0));
        dest.composite_from(&overlay, 0, 0);
        assert_eq!(dest.pixel(1, 1), Some(rgb(128, 128, 128)));
    }
}
