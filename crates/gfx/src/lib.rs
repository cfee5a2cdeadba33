//! Software 2D rendering: surfaces, damage-tracked compositing, bitmap
//! text, drawing primitives, and frame pacing.
//!
//! The model is a classic dirty-rectangle pipeline. Sprites composite onto
//! the [`Screen`], each composite records the damaged region, and the next
//! frame either repaints those regions from the background snapshot
//! ([`Screen::restore_damage`]) or discards them after a full-screen redraw
//! ([`Screen::flush_damage`]). Presentation backends consume the damage
//! list; nothing here talks to a display directly.

pub mod error;
pub mod font;
pub mod message;
pub mod pacer;
pub mod primitives;
pub mod screen;
pub mod surface;
pub mod text;

pub use error::{fatal, ResourceError};
pub use font::{Font, CENTERED};
pub use message::{message_box, MESSAGE_BOX_HEIGHT, MESSAGE_BOX_WIDTH};
pub use pacer::{Clock, FramePacer, SystemClock};
pub use primitives::{alpha_rect, bevel_rect, circle, draw_line};
pub use screen::Screen;
pub use surface::{blit, Surface};
pub use text::{text_surface, CachedText, TextCache};
