//! Collaborator contracts the mission loop drives.
//!
//! The loop itself owns only timing and state transitions; everything that
//! simulates, draws entities, makes noise, or touches disk sits behind one
//! of these traits. Swapping in recording fakes makes the whole loop
//! testable against a scripted clock.

use anyhow::Result;

use starlance_core::{Game, Mission, Player};
use starlance_gfx::Surface;
use starlance_types::Sfx;

use crate::context::MissionContext;
use crate::stage::Stage;

/// One sub-step of the per-frame world update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickPhase {
    Starfield,
    Collectables,
    Bullets,
    Aliens,
    Player,
    Cargo,
    Debris,
    Explosions,
    Info,
}

/// The fixed per-frame update order. Every frame delivers exactly these
/// phases, in this order, to [`World::advance`].
pub const TICK_ORDER: [TickPhase; 9] = [
    TickPhase::Starfield,
    TickPhase::Collectables,
    TickPhase::Bullets,
    TickPhase::Aliens,
    TickPhase::Player,
    TickPhase::Cargo,
    TickPhase::Debris,
    TickPhase::Explosions,
    TickPhase::Info,
];

/// Where the player's escorts snap to during sector departure.
///
/// Computed by the loop from the player's position and the sector's traits;
/// the world applies each station only to escorts that are still alive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EscortFormation {
    /// Formation stations for the two wingmates, lead then wing.
    pub wingmates: Option<[(f32, f32); 2]>,
    /// The engineer's station, on sectors where the engineer flies out
    /// alongside the player.
    pub engineer: Option<(f32, f32)>,
}

impl EscortFormation {
    pub fn is_empty(&self) -> bool {
        self.wingmates.is_none() && self.engineer.is_none()
    }
}

/// The entity simulation: aliens, bullets, cargo, debris, the player's
/// craft. Owns everything that moves and everything that decides whether
/// the mission is won or lost.
pub trait World {
    /// Drop all transient entities from the previous mission.
    fn reset(&mut self);

    /// Populate the sector for `mission`: cargo, the player craft, the
    /// initial alien roster, scripted events, info overlays.
    fn prepare(&mut self, ctx: &mut MissionContext, mission: &Mission);

    /// Run one update phase, drawing its entities onto the stage.
    fn advance(&mut self, phase: TickPhase, ctx: &mut MissionContext, stage: &mut Stage);

    /// Hostile craft currently active; subtracted from the spawn budget at
    /// mission entry.
    fn active_hostiles(&self) -> i32;

    /// Spawn the next enemy wave. Returns how many were added so the loop
    /// can charge them against the spawn budget.
    fn spawn_wave(&mut self, ctx: &mut MissionContext) -> i32;

    /// All primary objectives currently satisfied.
    fn all_objectives_met(&self) -> bool;

    /// Any primary objective irrecoverably failed.
    fn mission_failed(&self) -> bool;

    /// The boss craft has fled the sector (boss-rush sectors only).
    fn boss_escaped(&self) -> bool {
        false
    }

    /// Horizontal pan hint for set-piece audio, usually the boss position.
    fn boss_pan(&self) -> i32 {
        0
    }

    /// Snap surviving escorts to their departure stations.
    fn reposition_escorts(&mut self, formation: &EscortFormation) {
        let _ = formation;
    }

    /// Add a drifting mine collectable (minefield sectors).
    fn drop_mine(&mut self, x: i32, y: i32, value: i32, life: i32) {
        let _ = (x, y, value, life);
    }

    /// Tear down the player's in-sector state after the loop ends.
    fn exit_player(&mut self, ctx: &mut MissionContext) {
        let _ = ctx;
    }
}

/// Fire-and-forget audio; the loop never observes playback.
pub trait AudioSink {
    fn play(&mut self, sfx: Sfx, pan_x: i32);
    fn set_music_volume(&mut self, volume: i32);
}

/// Save-game sink. The game state is handed over as an opaque whole.
pub trait Persistence {
    fn save_game(&mut self, slot: u8, game: &Game) -> Result<()>;
}

/// Full-screen interludes around the loop: briefing, debriefing, cutscenes,
/// credits, the game-over card.
pub trait Presenter {
    fn mission_brief(&mut self, mission: &Mission, game: &Game) -> Result<()>;
    fn mission_finished(&mut self, game: &Game) -> Result<()>;
    fn cutscene(&mut self, id: u8) -> Result<()>;
    fn credits(&mut self) -> Result<()>;
    fn game_over(&mut self) -> Result<()>;
}

/// Presentation backend: receives the finished frame.
pub trait VideoOut {
    fn present(&mut self, frame: &Surface) -> Result<()>;
}

/// Source of mission definitions, keyed by sector area.
pub trait MissionSource {
    fn mission_for(&self, area: u8) -> Mission;
}

/// The built-in campaign table from [`starlance_core::missions`].
#[derive(Debug, Default)]
pub struct StockMissions;

impl MissionSource for StockMissions {
    fn mission_for(&self, area: u8) -> Mission {
        starlance_core::mission_for_area(area)
    }
}

/// Silent audio sink for headless runs and tests.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _sfx: Sfx, _pan_x: i32) {}

    fn set_music_volume(&mut self, _volume: i32) {}
}

/// Discards frames; lets the loop run without any display attached.
#[derive(Debug, Default)]
pub struct NullVideo;

impl VideoOut for NullVideo {
    fn present(&mut self, _frame: &Surface) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_order_covers_every_phase_once() {
        let all = [
            TickPhase::Starfield,
            TickPhase::Collectables,
            TickPhase::Bullets,
            TickPhase::Aliens,
            TickPhase::Player,
            TickPhase::Cargo,
            TickPhase::Debris,
            TickPhase::Explosions,
            TickPhase::Info,
        ];
        for phase in all {
            assert_eq!(TICK_ORDER.iter().filter(|p| **p == phase).count(), 1);
        }
        assert_eq!(TICK_ORDER[0], TickPhase::Starfield);
        assert_eq!(TICK_ORDER[8], TickPhase::Info);
    }

    #[test]
    fn test_empty_formation_reports_empty() {
        assert!(EscortFormation::default().is_empty());
        let formation = EscortFormation {
            engineer: Some((10.0, 20.0)),
            ..Default::default()
        };
        assert!(!formation.is_empty());
    }

    // Keeps the trait object-safe; the loop stores collaborators as
    // `&mut dyn`.
    #[test]
    fn test_world_trait_is_object_safe() {
        struct Empty;
        impl World for Empty {
            fn reset(&mut self) {}
            fn prepare(&mut self, _ctx: &mut MissionContext, _mission: &Mission) {}
            fn advance(&mut self, _: TickPhase, _: &mut MissionContext, _: &mut Stage) {}
            fn active_hostiles(&self) -> i32 {
                0
            }
            fn spawn_wave(&mut self, _ctx: &mut MissionContext) -> i32 {
                0
            }
            fn all_objectives_met(&self) -> bool {
                false
            }
            fn mission_failed(&self) -> bool {
                false
            }
        }

        let mut world = Empty;
        let world: &mut dyn World = &mut world;
        assert_eq!(world.active_hostiles(), 0);
        assert!(!world.boss_escaped());
    }
}
