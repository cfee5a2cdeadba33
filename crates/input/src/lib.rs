//! Terminal input module (engine-facing).
//!
//! This crate intentionally knows nothing about the renderer. It maps
//! `crossterm` key events into [`starlance_types::Key`] and synthesizes held
//! state for terminal environments (which report presses and repeats but no
//! key releases).

use std::io;

use starlance_types::KeyState;

pub mod handler;
pub mod map;
pub mod script;

pub use starlance_types as types;

pub use handler::{HeldKeys, TermInput};
pub use map::{map_key, should_quit};
pub use script::ScriptedInput;

/// Verdict from polling while the mission is paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseSignal {
    /// Stay paused.
    Hold,
    /// Unpause and return to the mission.
    Resume,
    /// Abandon the mission.
    Quit,
}

/// Frame-by-frame key source for the mission loop.
pub trait InputSource {
    /// Drain pending events and report which keys are currently held.
    fn poll(&mut self) -> io::Result<KeyState>;

    /// Poll for a pause verdict. Implementations may block for up to about
    /// one frame so the pause loop does not busy-wait.
    fn pause_poll(&mut self) -> io::Result<PauseSignal>;

    /// Discard queued events and release all held keys.
    fn flush(&mut self) -> io::Result<()>;
}
