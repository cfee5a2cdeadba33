//! Held-key tracking for terminal environments.
//!
//! Terminals report key presses (and auto-repeats) but no releases, while
//! the mission loop wants held state every frame. [`HeldKeys`] bridges the
//! two: each press stamps the key with the current time, and a key is
//! considered held until no repeat has refreshed it for a timeout. Menu-type
//! keys (pause, escape, weapon switch) are edge-triggered instead: they show
//! up in exactly one snapshot per press.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use starlance_types::{Key, KeyState};

use crate::map::{map_key, should_quit};
use crate::InputSource;
use crate::PauseSignal;

// Terminal auto-repeat refreshes a held key every few tens of ms; anything
// staler than this is treated as released.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

fn is_momentary(key: Key) -> bool {
    matches!(key, Key::Pause | Key::Escape | Key::Switch)
}

/// Press-timestamp table with auto-release.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    last_seen: [Option<Instant>; Key::COUNT],
    pending: [bool; Key::COUNT],
    timeout: Duration,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::with_timeout_ms(DEFAULT_KEY_RELEASE_TIMEOUT_MS)
    }

    pub fn with_timeout_ms(timeout_ms: u64) -> Self {
        Self {
            last_seen: [None; Key::COUNT],
            pending: [false; Key::COUNT],
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// Record a press (or terminal auto-repeat) of `key`.
    pub fn press(&mut self, key: Key, now: Instant) {
        if is_momentary(key) {
            self.pending[key.index()] = true;
        } else {
            self.last_seen[key.index()] = Some(now);
        }
    }

    /// Current held state. Stale holds are released; momentary keys are
    /// reported once and then cleared.
    pub fn snapshot(&mut self, now: Instant) -> KeyState {
        let mut keys = KeyState::new();

        for (i, seen) in self.last_seen.iter_mut().enumerate() {
            match *seen {
                Some(at) if now.duration_since(at) <= self.timeout => {
                    keys.set(key_at(i), true);
                }
                Some(_) => *seen = None,
                None => {}
            }
        }

        for (i, pending) in self.pending.iter_mut().enumerate() {
            if *pending {
                keys.set(key_at(i), true);
                *pending = false;
            }
        }

        keys
    }

    pub fn clear(&mut self) {
        self.last_seen = [None; Key::COUNT];
        self.pending = [false; Key::COUNT];
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}

fn key_at(index: usize) -> Key {
    const ORDER: [Key; Key::COUNT] = [
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
    ORDER[index]
}

/// Crossterm-backed input source.
///
/// [`poll`](InputSource::poll) drains whatever events are queued without
/// blocking; [`pause_poll`](InputSource::pause_poll) waits one frame for a
/// verdict so the pause loop does not spin.
#[derive(Debug, Default)]
pub struct TermInput {
    held: HeldKeys,
}

impl TermInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn drain(&mut self) -> io::Result<()> {
        let now = Instant::now();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if should_quit(key) {
                    self.held.press(Key::Escape, now);
                } else if let Some(mapped) = map_key(key.code) {
                    self.held.press(mapped, now);
                }
            }
        }
        Ok(())
    }
}

impl InputSource for TermInput {
    fn poll(&mut self) -> io::Result<KeyState> {
        self.drain()?;
        Ok(self.held.snapshot(Instant::now()))
    }

    fn pause_poll(&mut self) -> io::Result<PauseSignal> {
        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if should_quit(key) || key.code == crossterm::event::KeyCode::Esc {
                    return Ok(PauseSignal::Quit);
                }
                if map_key(key.code) == Some(Key::Pause) {
                    return Ok(PauseSignal::Resume);
                }
            }
        }
        Ok(PauseSignal::Hold)
    }

    fn flush(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            let _ = event::read()?;
        }
        self.held.clear();
        Ok(())
    }
}
