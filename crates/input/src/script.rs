//! Scripted input source for tests and demos.

use std::io;

use starlance_types::KeyState;

use crate::InputSource;
use crate::PauseSignal;

/// Replays a fixed sequence of key snapshots, one per poll.
///
/// Once the frame script runs out, every further poll reports no keys held,
/// so a mission driven by a short script simply coasts. Pause verdicts come
/// from their own queue and default to [`PauseSignal::Resume`] when empty,
/// which keeps a scripted pause from hanging forever.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: Vec<KeyState>,
    cursor: usize,
    pause_verdicts: Vec<PauseSignal>,
    pause_cursor: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<KeyState>) -> Self {
        Self {
            frames,
            cursor: 0,
            pause_verdicts: Vec::new(),
            pause_cursor: 0,
        }
    }

    /// A source that never presses anything.
    pub fn idle() -> Self {
        Self::new(Vec::new())
    }

    pub fn with_pause_verdicts(mut self, verdicts: Vec<PauseSignal>) -> Self {
        self.pause_verdicts = verdicts;
        self
    }

    /// Frames consumed so far.
    pub fn frames_polled(&self) -> usize {
        self.cursor
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> io::Result<KeyState> {
        let keys = self
            .frames
            .get(self.cursor)
            .copied()
            .unwrap_or_else(KeyState::new);
        if self.cursor < self.frames.len() {
            self.cursor += 1;
        }
        Ok(keys)
    }

    fn pause_poll(&mut self) -> io::Result<PauseSignal> {
        let verdict = self
            .pause_verdicts
            .get(self.pause_cursor)
            .copied()
            .unwrap_or(PauseSignal::Resume);
        if self.pause_cursor < self.pause_verdicts.len() {
            self.pause_cursor += 1;
        }
        Ok(verdict)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starlance_types::Key;

    #[test]
    fn test_replays_frames_then_idles() {
        let mut down = KeyState::new();
        down.set(Key::Fire, true);
        let mut script = ScriptedInput::new(vec![down]);

        assert!(script.poll().unwrap().is_down(Key::Fire));
        assert!(!script.poll().unwrap().is_down(Key::Fire));
        assert_eq!(script.frames_polled(), 1);
    }

    #[test]
    fn test_pause_verdicts_then_resume() {
        let mut script = ScriptedInput::idle()
            .with_pause_verdicts(vec![PauseSignal::Hold, PauseSignal::Hold]);

        assert_eq!(script.pause_poll().unwrap(), PauseSignal::Hold);
        assert_eq!(script.pause_poll().unwrap(), PauseSignal::Hold);
        assert_eq!(script.pause_poll().unwrap(), PauseSignal::Resume);
    }
}
