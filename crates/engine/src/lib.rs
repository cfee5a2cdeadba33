//! Mission orchestration (engine-facing).
//!
//! This crate owns the top-level mission loop and nothing else: it detects
//! wins and losses, arms the intermission timers, steers the departure,
//! services pause, and dispatches the resolution screens. Simulation,
//! rendering, audio, input, and persistence all live behind traits so the
//! loop runs identically against the real collaborators, a terminal
//! presenter, or the recording fakes in the tests.
//!
//! Structure:
//! - [`traits`]: collaborator contracts and the fixed tick order
//! - [`context`]: per-mission mutable state, passed explicitly
//! - [`stage`]: the screen/font/text/pacer rendering bundle
//! - [`mission`]: [`run_mission`] and the departure/fade helpers
//!
//! ```
//! use starlance_engine::{LoopState, MissionContext};
//! use starlance_engine::types::Difficulty;
//!
//! let ctx = MissionContext::new_campaign(Difficulty::Normal, 1);
//! assert_eq!(ctx.state, LoopState::Running);
//! assert_eq!(ctx.game.area, 0);
//! ```

pub mod context;
pub mod mission;
pub mod stage;
pub mod traits;

pub use starlance_core as core;
pub use starlance_gfx as gfx;
pub use starlance_input as input;
pub use starlance_types as types;

pub use context::{LoopState, MissionContext};
pub use mission::{run_mission, MissionOutcome, Platform};
pub use stage::Stage;
pub use traits::{
    AudioSink, EscortFormation, MissionSource, NullAudio, NullVideo, Persistence, Presenter,
    StockMissions, TickPhase, VideoOut, World, TICK_ORDER,
};
