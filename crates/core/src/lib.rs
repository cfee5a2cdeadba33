//! Campaign rules and data: pure, deterministic, and testable.
//!
//! No I/O, no timing, no rendering. Everything here is plain state the
//! mission loop reads and mutates through an explicit context, which keeps
//! the rules runnable headless and reproducible from a seed.
//!
//! # Module Structure
//!
//! - [`game`]: persistent campaign record (save-file shape) and new-game
//!   difficulty tuning
//! - [`player`]: the player ship's mission-scoped state
//! - [`missions`]: objective model, enemy budget derivation, stock mission
//!   table
//! - [`areas`]: per-sector behavior flags as one data table
//! - [`rng`]: seedable LCG for reproducible runs
//!
//! # Example
//!
//! ```
//! use starlance_core::{new_game, mission_for_area};
//! use starlance_types::Difficulty;
//!
//! let (game, player) = new_game(Difficulty::Hard);
//! assert_eq!(player.max_shield, 25);
//!
//! let mission = mission_for_area(game.area);
//! assert!(mission.allowable_aliens() > 0);
//! ```

pub mod areas;
pub mod game;
pub mod missions;
pub mod player;
pub mod rng;

pub use starlance_types as types;

pub use areas::AreaTraits;
pub use game::{new_game, Game};
pub use missions::{mission_for_area, Mission, Objective, ObjectiveKind, Target};
pub use player::{Player, Weapon};
pub use rng::SimpleRng;
