//! 60 Hz frame pacing against a millisecond clock.
//!
//! The pacer keeps an absolute deadline and advances it 16 2/3 ms per frame
//! in whole milliseconds: +17, +17, +16 over every three calls, 50 ms per
//! triple. When a frame arrives past its deadline the deadline snaps to now
//! instead of letting debt accumulate, so one slow frame costs one frame.

use std::time::{Duration, Instant};

/// Millisecond clock the pacer (and the mission loop) run against. Swapping
/// in a scripted implementation makes timing-dependent paths testable
/// without real sleeps.
pub trait Clock {
    /// Milliseconds since some fixed origin.
    fn now_ms(&self) -> u64;
    fn sleep_ms(&self, ms: u64);
}

/// Wall clock measured from construction.
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep_ms(&self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

#[derive(Debug, Default)]
pub struct FramePacer {
    frame_limit: u64,
    thirds: u8,
}

impl FramePacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the deadline one frame and return how long to sleep.
    ///
    /// Returns 0 when `now` has already passed the deadline; the deadline
    /// then restarts from `now`.
    pub fn next_delay(&mut self, now: u64) -> u64 {
        self.frame_limit += 16;
        if self.thirds >= 2 {
            self.thirds = 0;
        } else {
            self.thirds += 1;
            self.frame_limit += 1;
        }

        if now < self.frame_limit {
            self.frame_limit - now
        } else {
            self.frame_limit = now;
            0
        }
    }

    /// Block until the next frame deadline.
    pub fn wait(&mut self, clock: &dyn Clock) {
        let delay = self.next_delay(clock.now_ms());
        if delay > 0 {
            clock.sleep_ms(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeClock {
        now: Cell<u64>,
    }

    impl FakeClock {
        fn new() -> Self {
            Self { now: Cell::new(0) }
        }
    }

    impl Clock for FakeClock {
        fn now_ms(&self) -> u64 {
            self.now.get()
        }

        fn sleep_ms(&self, ms: u64) {
            self.now.set(self.now.get() + ms);
        }
    }

    #[test]
    fn three_frames_take_fifty_ms() {
        let mut pacer = FramePacer::new();
        let mut now = 0;
        let mut deltas = Vec::new();
        for _ in 0..6 {
            let d = pacer.next_delay(now);
            deltas.push(d);
            now += d;
        }
        assert_eq!(deltas, vec![17, 17, 16, 17, 17, 16]);
        assert_eq!(now, 100);
    }

    #[test]
    fn late_frame_resets_deadline_instead_of_accumulating() {
        let mut pacer = FramePacer::new();
        // Way past the first deadline: no sleep, deadline snaps to now.
        assert_eq!(pacer.next_delay(1000), 0);
        // Cadence resumes from the snap point.
        assert_eq!(pacer.next_delay(1000), 17);
        assert_eq!(pacer.next_delay(1017), 16);
        assert_eq!(pacer.next_delay(1033), 17);
    }

    #[test]
    fn wait_drives_a_fake_clock_at_sixty_hz() {
        let clock = FakeClock::new();
        let mut pacer = FramePacer::new();
        for _ in 0..60 {
            pacer.wait(&clock);
        }
        // 60 frames = 20 triples of 50 ms.
        assert_eq!(clock.now_ms(), 1000);
    }
}
