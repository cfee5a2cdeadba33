//! Shared types module - constants and plain data used across the workspace
//!
//! Everything in here is pure data with no external dependencies, so it can
//! be used from any crate (graphics, core state, engine, tests) without
//! dragging anything else in.
//!
//! # Screen & Font Geometry
//!
//! The game renders into a single fixed-resolution 800x600 software surface.
//! Text comes from a monospace bitmap font:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH` | 800 | Framebuffer width in pixels |
//! | `SCREEN_HEIGHT` | 600 | Framebuffer height in pixels |
//! | `GLYPH_WIDTH` | 8 | Glyph cell width |
//! | `GLYPH_HEIGHT` | 14 | Glyph cell height |
//! | `GLYPH_ADVANCE` | 9 | Horizontal cursor advance per character |
//! | `LINE_ADVANCE` | 16 | Vertical cursor advance per line |
//! | `WRAP_SPACE_MARGIN` | 70 | Wrap-at-space threshold from the right edge |
//! | `WRAP_HYPHEN_MARGIN` | 31 | Forced-hyphenation threshold from the right edge |
//!
//! The band between the two wrap margins is where a long word can still get
//! a space break before hyphenation kicks in.
//!
//! # Mission Timing
//!
//! Timers are measured in milliseconds against a monotonic tick clock, with
//! zero meaning "inactive" and any other value an absolute deadline:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Base frame interval (thirds compensation adds 2ms/3 frames) |
//! | `MISSION_COMPLETE_DELAY_MS` | 4000 | Win/lose detection to intermission end |
//! | `SHIELD_DOWN_DELAY_MS` | 7000 | Shield depleted to loop end |
//! | `EVENT_TIMER_WRAP` | 60 | Scripted-event cadence, wraps in [0, 60] |

/// Framebuffer width in pixels.
pub const SCREEN_WIDTH: i32 = 800;

/// Framebuffer height in pixels.
pub const SCREEN_HEIGHT: i32 = 600;

/// Base frame interval in milliseconds (60 Hz with thirds compensation).
pub const FRAME_MS: u64 = 16;

/// Glyph cell width in the font strip.
pub const GLYPH_WIDTH: i32 = 8;

/// Glyph cell height in the font strip.
pub const GLYPH_HEIGHT: i32 = 14;

/// Horizontal advance per character (one pixel of inter-glyph spacing).
pub const GLYPH_ADVANCE: i32 = 9;

/// Vertical advance per text line.
pub const LINE_ADVANCE: i32 = 16;

/// Distance from the destination's right edge at which a space breaks the line.
pub const WRAP_SPACE_MARGIN: i32 = 70;

/// Distance from the destination's right edge at which hyphenation kicks in.
pub const WRAP_HYPHEN_MARGIN: i32 = 31;

/// Alphabetic window checked before inserting a hyphen (current char + 3).
pub const HYPHEN_WINDOW: usize = 4;

/// First printable glyph in the font strip ('!' == 33).
pub const GLYPH_BASE: u8 = 33;

/// Number of text-cache slots.
pub const TEXT_SLOTS: usize = 50;

/// Text-cache slot reserved for the pause overlay.
pub const PAUSE_TEXT_SLOT: usize = 22;

/// Delay between win/lose detection and the intermission transition.
pub const MISSION_COMPLETE_DELAY_MS: u64 = 4000;

/// Delay between shield depletion and the end of the loop.
pub const SHIELD_DOWN_DELAY_MS: u64 = 7000;

/// The scripted-event timer counts down and wraps within [0, EVENT_TIMER_WRAP].
pub const EVENT_TIMER_WRAP: i32 = 60;

/// Music volume lost per faded frame during intermission/defeat fades.
pub const MUSIC_FADE_STEP: f32 = 0.2;

/// Index of the final area (end-credits sequence).
pub const FINAL_AREA: u8 = 26;

/// Area whose boss governs the escape set piece and failure-timer exemption.
pub const BOSS_RUSH_AREA: u8 = 5;

/// Number of discrete mission-completion slots in the save state.
pub const MISSION_SLOTS: usize = 10;

/// Spawn budget standing in for "unlimited" when a mission destroys all targets.
pub const UNLIMITED_ALIENS: i32 = 999_999_999;

// ---------------------------------------------------------------------------
// Packed ARGB color helpers
// ---------------------------------------------------------------------------

/// Pack an opaque RGB triple into ARGB32 (alpha in the top byte).
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    argb(0xff, r, g, b)
}

/// Pack a full ARGB quad.
pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Alpha channel of a packed pixel.
pub const fn alpha_of(c: u32) -> u8 {
    (c >> 24) as u8
}

/// Red channel of a packed pixel.
pub const fn red_of(c: u32) -> u8 {
    (c >> 16) as u8
}

/// Green channel of a packed pixel.
pub const fn green_of(c: u32) -> u8 {
    (c >> 8) as u8
}

/// Blue channel of a packed pixel.
pub const fn blue_of(c: u32) -> u8 {
    c as u8
}

pub const BLACK: u32 = rgb(0x00, 0x00, 0x00);
pub const WHITE: u32 = rgb(0xff, 0xff, 0xff);
pub const RED: u32 = rgb(0xff, 0x00, 0x00);
pub const GREEN: u32 = rgb(0x00, 0xff, 0x00);
pub const BLUE: u32 = rgb(0x00, 0x00, 0xff);
pub const YELLOW: u32 = rgb(0xff, 0xff, 0x00);
pub const CYAN: u32 = rgb(0x00, 0xff, 0xff);
pub const GREY: u32 = rgb(0x80, 0x80, 0x80);
pub const DARK_BLUE: u32 = rgb(0x00, 0x00, 0xaa);

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// An axis-aligned screen rectangle; the unit of dirty-region tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Clip this rect to `0..w`, `0..h` bounds.
    pub fn clipped_to(&self, w: i32, h: i32) -> Rect {
        let x0 = self.x.max(0);
        let y0 = self.y.max(0);
        let x1 = self.right().min(w);
        let y1 = self.bottom().min(h);
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }
}

// ---------------------------------------------------------------------------
// Font colors
// ---------------------------------------------------------------------------

/// Pre-rendered font sheet selector.
///
/// Each variant corresponds to one glyph strip; `Outline` is the dark sheet
/// used for the six-pass drop shadow behind every string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontColor {
    White,
    Red,
    Yellow,
    Green,
    Cyan,
    Outline,
}

impl FontColor {
    pub const COUNT: usize = 6;

    /// Index into the font sheet table.
    pub const fn index(self) -> usize {
        match self {
            FontColor::White => 0,
            FontColor::Red => 1,
            FontColor::Yellow => 2,
            FontColor::Green => 3,
            FontColor::Cyan => 4,
            FontColor::Outline => 5,
        }
    }

    /// The nominal glyph color for this sheet.
    pub const fn pixel(self) -> u32 {
        match self {
            FontColor::White => WHITE,
            FontColor::Red => RED,
            FontColor::Yellow => YELLOW,
            FontColor::Green => GREEN,
            FontColor::Cyan => CYAN,
            FontColor::Outline => rgb(0x00, 0x00, 0x11),
        }
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Logical game keys, independent of any input backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Fire,
    AltFire,
    Switch,
    Pause,
    Escape,
}

impl Key {
    pub const COUNT: usize = 9;

    pub const fn index(self) -> usize {
        match self {
            Key::Up => 0,
            Key::Down => 1,
            Key::Left => 2,
            Key::Right => 3,
            Key::Fire => 4,
            Key::AltFire => 5,
            Key::Switch => 6,
            Key::Pause => 7,
            Key::Escape => 8,
        }
    }
}

/// Snapshot of which logical keys are held, as returned by input polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    held: [bool; Key::COUNT],
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    pub fn set(&mut self, key: Key, down: bool) {
        self.held[key.index()] = down;
    }

    /// Release the fire keys (done on mission entry so a held trigger from
    /// the briefing screen does not fire on frame one).
    pub fn clear_fire(&mut self) {
        self.set(Key::Fire, false);
        self.set(Key::AltFire, false);
    }

    pub fn clear_all(&mut self) {
        self.held = [false; Key::COUNT];
    }
}

// ---------------------------------------------------------------------------
// Audio effect ids
// ---------------------------------------------------------------------------

/// Sound effect identifiers passed to the audio collaborator.
///
/// The core never observes playback; these are fire-and-forget with a
/// horizontal pan hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sfx {
    Plasma,
    Missile,
    Hit,
    Explosion,
    Death,
    Pickup,
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Campaign difficulty; drives shield capacity and weapon tuning at new-game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Nightmare,
}

impl Difficulty {
    /// Parse from string (case-insensitive), for CLI/demo wiring.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            "nightmare" => Some(Difficulty::Nightmare),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::Nightmare => "nightmare",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_packing_round_trips_channels() {
        let c = argb(0x12, 0x34, 0x56, 0x78);
        assert_eq!(alpha_of(c), 0x12);
        assert_eq!(red_of(c), 0x34);
        assert_eq!(green_of(c), 0x56);
        assert_eq!(blue_of(c), 0x78);
    }

    #[test]
    fn rgb_is_fully_opaque() {
        assert_eq!(alpha_of(rgb(1, 2, 3)), 0xff);
    }

    #[test]
    fn rect_clipping_clamps_to_bounds() {
        let r = Rect::new(-10, -10, 30, 30).clipped_to(100, 100);
        assert_eq!(r, Rect::new(0, 0, 20, 20));

        let r = Rect::new(90, 95, 30, 30).clipped_to(100, 100);
        assert_eq!(r, Rect::new(90, 95, 10, 5));

        let r = Rect::new(200, 0, 10, 10).clipped_to(100, 100);
        assert!(r.is_empty());
    }

    #[test]
    fn key_indices_are_unique_and_dense() {
        let keys = [
            Key::Up,
            Key::Down,
            Key::Left,
            Key::Right,
            Key::Fire,
            Key::AltFire,
            Key::Switch,
            Key::Pause,
            Key::Escape,
        ];
        let mut seen = [false; Key::COUNT];
        for k in keys {
            assert!(!seen[k.index()]);
            seen[k.index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn wrap_margins_leave_a_hyphenation_zone() {
        // The space-break threshold must sit left of the forced-hyphen
        // threshold or the hyphenation zone would be empty.
        assert!(WRAP_SPACE_MARGIN > WRAP_HYPHEN_MARGIN);
    }

    #[test]
    fn keystate_fire_clear_only_touches_fire_keys() {
        let mut keys = KeyState::new();
        keys.set(Key::Fire, true);
        keys.set(Key::AltFire, true);
        keys.set(Key::Left, true);

        keys.clear_fire();
        assert!(!keys.is_down(Key::Fire));
        assert!(!keys.is_down(Key::AltFire));
        assert!(keys.is_down(Key::Left));
    }
}
