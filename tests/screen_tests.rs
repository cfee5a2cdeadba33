//! Frame-cycle scenarios across the screen, text cache and message box.
//!
//! Each test walks the per-frame discipline the mission loop uses: restore
//! the previous frame's damage, draw this frame, present, repeat. The
//! assertions check the property the damage buffer exists for: nothing
//! drawn last frame survives into this one.

use starlance::gfx::{
    circle, message_box, Font, Screen, Surface, TextCache, MESSAGE_BOX_HEIGHT, MESSAGE_BOX_WIDTH,
};
use starlance::types::{
    FontColor, Rect, DARK_BLUE, GREEN, SCREEN_HEIGHT, SCREEN_WIDTH, WHITE, YELLOW,
};

/// A vertically striped backdrop so restoration has structure to reproduce.
fn striped_background(w: i32, h: i32) -> Surface {
    let mut bg = Surface::new(w, h);
    for x in (0..w).step_by(16) {
        bg.fill_rect(Rect::new(x, 0, 8, h), DARK_BLUE);
    }
    bg
}

fn matches_background(screen: &Screen, rect: Rect) -> bool {
    (rect.y..rect.bottom()).all(|y| {
        (rect.x..rect.right())
            .all(|x| screen.surface().pixel(x, y) == screen.background().pixel(x, y))
    })
}

#[test]
fn test_moving_sprite_leaves_no_trail() {
    let mut screen = Screen::new(200, 150);
    screen.set_background(striped_background(200, 150));
    screen.draw_background();
    screen.flush_damage();

    let mut sprite = Surface::new(10, 10);
    sprite.fill(WHITE);

    for frame in 0..5 {
        screen.restore_damage();
        let x = 20 + frame * 15;
        screen.blit(&sprite, x, 60);

        // Everything left of the sprite matches the backdrop again.
        assert!(
            matches_background(&screen, Rect::new(0, 55, x, 20)),
            "trail on frame {frame}"
        );
        assert_eq!(screen.surface().pixel(x + 1, 61), Some(WHITE));
        assert_eq!(screen.damage().len(), 1);
    }

    screen.restore_damage();
    assert!(matches_background(&screen, Rect::new(0, 0, 200, 150)));
    assert!(screen.damage().is_empty());
}

#[test]
fn test_full_redraw_frames_flush_instead_of_restoring() {
    let mut screen = Screen::new(120, 90);
    screen.set_background(striped_background(120, 90));

    let mut sprite = Surface::new(6, 6);
    sprite.fill(WHITE);

    for frame in 0..3 {
        screen.draw_background();
        screen.flush_damage();
        screen.blit(&sprite, 10 + frame * 30, 40);
    }

    // The full composite at the top of each frame buried the earlier
    // positions; only the last frame's sprite (and rect) remain.
    assert_eq!(screen.damage(), &[Rect::new(70, 40, 6, 6)]);
    assert_eq!(screen.surface().pixel(71, 41), Some(WHITE));
    assert!(matches_background(&screen, Rect::new(10, 40, 6, 6)));
    assert!(matches_background(&screen, Rect::new(40, 40, 6, 6)));
}

#[test]
fn test_hud_line_renders_once_across_frames() {
    let font = Font::builtin();
    let mut cache = TextCache::new();
    let mut screen = Screen::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    screen.set_background(striped_background(SCREEN_WIDTH, SCREEN_HEIGHT));
    screen.draw_background();
    screen.flush_damage();

    for _ in 0..6 {
        screen.restore_damage();
        cache.render_cached(0, "SHIELD 50", 5, 3, FontColor::Green, &font);
        cache.blit_text(0, &mut screen);
        assert_eq!(screen.damage().len(), 1);
    }
    assert_eq!(cache.render_count(), 1);

    let rect = cache.slot_rect(0).unwrap();
    assert_eq!(screen.damage(), &[rect]);
    let lit = (rect.y..rect.bottom())
        .any(|y| (rect.x..rect.right()).any(|x| screen.surface().pixel(x, y) == Some(GREEN)));
    assert!(lit);

    // The counter changes: one more render, and the old line restores away.
    screen.restore_damage();
    assert!(matches_background(&screen, rect));
    cache.render_cached(0, "SHIELD 25", 5, 3, FontColor::Green, &font);
    cache.blit_text(0, &mut screen);
    assert_eq!(cache.render_count(), 2);
}

#[test]
fn test_locked_pixel_draws_restore_through_add_damage() {
    let mut screen = Screen::new(160, 120);
    screen.set_background(striped_background(160, 120));
    screen.draw_background();
    screen.flush_damage();

    // The explosion path: draw through the lock, record the bound by hand.
    circle(screen.surface_mut(), 80, 60, 12, YELLOW);
    screen.add_damage(Rect::new(67, 47, 27, 27));
    assert_eq!(screen.surface().pixel(80, 48), Some(YELLOW));

    screen.restore_damage();
    assert!(matches_background(&screen, Rect::new(60, 40, 40, 40)));
}

#[test]
fn test_message_box_presents_and_erases_like_any_sprite() {
    let font = Font::builtin();
    let mut screen = Screen::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    screen.set_background(striped_background(SCREEN_WIDTH, SCREEN_HEIGHT));
    screen.draw_background();
    screen.flush_damage();

    let panel = message_box(
        None,
        "Incoming transmission from the carrier group.",
        false,
        &font,
    );
    let x = (SCREEN_WIDTH - MESSAGE_BOX_WIDTH) / 2;
    let y = SCREEN_HEIGHT - 90;
    screen.blit(&panel, x, y);

    assert_eq!(
        screen.damage(),
        &[Rect::new(x, y, MESSAGE_BOX_WIDTH, MESSAGE_BOX_HEIGHT)]
    );
    // Bevel corner comes through the unkeyed copy.
    assert_eq!(screen.surface().pixel(x, y), Some(WHITE));

    screen.restore_damage();
    assert!(matches_background(
        &screen,
        Rect::new(x, y, MESSAGE_BOX_WIDTH, MESSAGE_BOX_HEIGHT)
    ));
}
