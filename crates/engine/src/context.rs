//! Per-mission mutable state, passed explicitly instead of living in
//! globals.
//!
//! One [`MissionContext`] is built per campaign and threaded through every
//! mission; [`crate::mission::run_mission`] re-arms the transient fields at
//! entry, so the caller only seeds it once.

use starlance_core::{Game, Player, SimpleRng};
use starlance_types::{Difficulty, KeyState, EVENT_TIMER_WRAP};

/// Where the outer loop is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Normal play.
    Running,
    /// Steered into the departure lane, flying off the right edge.
    Departing,
    /// The loop ends after the current frame.
    Finished,
}

/// Everything a mission mutates frame to frame: the persistent game state,
/// the player craft, input, timers, and the RNG stream.
#[derive(Debug)]
pub struct MissionContext {
    pub game: Game,
    pub player: Player,
    pub keys: KeyState,
    pub rng: SimpleRng,

    pub state: LoopState,
    pub paused: bool,

    /// Starfield scroll deltas, set by the world each frame.
    pub scroll_x: f32,
    pub scroll_y: f32,
    /// Background drift applied to free-floating entities.
    pub drift_x: f32,
    pub drift_y: f32,

    /// Scripted-event cadence countdown, wraps within [0, 60].
    pub event_timer: i32,
    /// Frames until the next enemy wave; -1 disables the spawner.
    pub add_aliens_timer: i32,
    /// Absolute deadline (ms) ending the mission; 0 while inactive.
    pub mission_over_at: u64,
    /// Next absolute tick (ms) of the one-second statistics cadence.
    pub second_tick_at: u64,

    /// Current music volume, faded 0.2 per frame during outros.
    pub music_volume: f32,
    /// Set by the world once the last hostile dies; read by info overlays.
    pub all_aliens_dead: bool,
}

impl MissionContext {
    pub fn new(game: Game, player: Player, seed: u32) -> Self {
        Self {
            game,
            player,
            keys: KeyState::new(),
            rng: SimpleRng::new(seed),
            state: LoopState::Running,
            paused: false,
            scroll_x: 0.0,
            scroll_y: 0.0,
            drift_x: 0.0,
            drift_y: 0.0,
            event_timer: EVENT_TIMER_WRAP,
            add_aliens_timer: -1,
            mission_over_at: 0,
            second_tick_at: 0,
            music_volume: 100.0,
            all_aliens_dead: false,
        }
    }

    /// Fresh campaign context at the given difficulty.
    pub fn new_campaign(difficulty: Difficulty, seed: u32) -> Self {
        let (game, player) = starlance_core::new_game(difficulty);
        Self::new(game, player, seed)
    }
}
