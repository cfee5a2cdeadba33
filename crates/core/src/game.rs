//! Campaign state: everything that survives between missions and goes into
//! a save file.

use serde::{Deserialize, Serialize};
use starlance_types::{Difficulty, MISSION_SLOTS};

use crate::areas::AreaTraits;
use crate::player::Player;

/// Persistent campaign record.
///
/// Plain data throughout: missions mutate it through the context, the save
/// layer serializes it whole. Weapon tuning fields come in min/max pairs,
/// the current value and the shop's upgrade ceiling for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub system: u8,
    pub area: u8,
    #[serde(with = "difficulty_str")]
    pub difficulty: Difficulty,

    pub sfx_volume: i32,
    pub music_volume: i32,

    // Running score and tallies.
    pub cash: i32,
    pub cash_earned: i32,
    pub shots: u32,
    pub hits: u32,
    pub accuracy: i32,
    pub total_kills: u32,
    pub wingmate1_kills: u32,
    pub wingmate2_kills: u32,
    pub total_other_kills: u32,
    pub has_wingmate1: bool,
    pub has_wingmate2: bool,
    pub wingmate1_ejects: u32,
    pub wingmate2_ejects: u32,
    pub secondary_missions: u32,
    pub secondary_missions_completed: u32,
    pub shield_pickups: u32,
    pub rocket_pickups: u32,
    pub cell_pickups: u32,
    pub powerups: u32,
    pub mines_killed: u32,
    pub cargo_pickups: u32,
    pub slaves_rescued: u32,
    pub experimental_shield: i32,

    /// Seconds of mission time across the campaign.
    pub time_taken: u32,

    // Campaign position. Planets are -1 until the first jump.
    pub stationed_planet: i8,
    pub destination_planet: i8,
    pub mission_completed: [u8; MISSION_SLOTS],
    pub distance_covered: i32,

    // Plasma cannon tuning and shop ceilings.
    pub min_plasma_rate: i32,
    pub min_plasma_output: i32,
    pub min_plasma_damage: i32,
    pub max_plasma_rate: i32,
    pub max_plasma_output: i32,
    pub max_plasma_damage: i32,
    pub max_plasma_ammo: i32,
    pub max_rocket_ammo: i32,
    pub min_plasma_rate_limit: i32,
    pub min_plasma_damage_limit: i32,
    pub min_plasma_output_limit: i32,
    pub max_plasma_rate_limit: i32,
    pub max_plasma_damage_limit: i32,
    pub max_plasma_output_limit: i32,
    pub max_plasma_ammo_limit: i32,
    pub max_rocket_ammo_limit: i32,
}

impl Game {
    /// Fresh campaign tuned for `difficulty`.
    pub fn new(difficulty: Difficulty) -> Self {
        let mut game = Self {
            system: 0,
            area: 0,
            difficulty,
            sfx_volume: 0,
            music_volume: 0,
            cash: 0,
            cash_earned: 0,
            shots: 0,
            hits: 0,
            accuracy: 0,
            total_kills: 0,
            wingmate1_kills: 0,
            wingmate2_kills: 0,
            total_other_kills: 0,
            has_wingmate1: false,
            has_wingmate2: false,
            wingmate1_ejects: 0,
            wingmate2_ejects: 0,
            secondary_missions: 0,
            secondary_missions_completed: 0,
            shield_pickups: 0,
            rocket_pickups: 0,
            cell_pickups: 0,
            powerups: 0,
            mines_killed: 0,
            cargo_pickups: 0,
            slaves_rescued: 0,
            experimental_shield: 1000,
            time_taken: 0,
            stationed_planet: -1,
            destination_planet: -1,
            mission_completed: [0; MISSION_SLOTS],
            distance_covered: 0,
            min_plasma_rate: 1,
            min_plasma_output: 1,
            min_plasma_damage: 1,
            max_plasma_rate: 2,
            max_plasma_output: 2,
            max_plasma_damage: 2,
            max_plasma_ammo: 100,
            max_rocket_ammo: 10,
            min_plasma_rate_limit: 2,
            min_plasma_damage_limit: 1,
            min_plasma_output_limit: 3,
            max_plasma_rate_limit: 4,
            max_plasma_damage_limit: 2,
            max_plasma_output_limit: 3,
            max_plasma_ammo_limit: 250,
            max_rocket_ammo_limit: 50,
        };

        match difficulty {
            Difficulty::Easy => {
                game.min_plasma_rate = 2;
                game.min_plasma_output = 2;
                game.min_plasma_damage = 2;
                game.max_plasma_rate = 3;
                game.max_plasma_output = 3;
                game.max_plasma_damage = 3;

                game.min_plasma_rate_limit = 3;
                game.min_plasma_damage_limit = 3;
                game.min_plasma_output_limit = 3;
                game.max_plasma_rate_limit = 5;
                game.max_plasma_damage_limit = 5;
                game.max_plasma_output_limit = 5;
            }
            Difficulty::Nightmare => {
                game.max_plasma_rate = 1;
                game.max_plasma_output = 1;
                game.max_plasma_damage = 1;
                game.max_rocket_ammo = 5;

                game.min_plasma_rate_limit = 2;
                game.min_plasma_damage_limit = 1;
                game.min_plasma_output_limit = 2;
                game.max_plasma_rate_limit = 3;
                game.max_plasma_damage_limit = 1;
                game.max_plasma_output_limit = 3;
            }
            Difficulty::Normal | Difficulty::Hard => {}
        }

        game
    }

    /// Record a successful (non-final) mission: mark the stationed planet
    /// complete and jump systems where the campaign calls for it.
    pub fn update_system_status(&mut self, traits: &AreaTraits) {
        let planet = self.stationed_planet.max(0) as usize;
        if planet < MISSION_SLOTS {
            self.mission_completed[planet] = 1;
        }

        if let Some(system) = traits.system_advance {
            self.system = system;
            self.stationed_planet = 0;
            self.distance_covered = 0;
            // New system, fresh mission board.
            self.mission_completed = [0; MISSION_SLOTS];
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Difficulty::Normal)
    }
}

/// Start a campaign: tuned [`Game`] plus the matching player loadout.
pub fn new_game(difficulty: Difficulty) -> (Game, Player) {
    (Game::new(difficulty), Player::new(difficulty))
}

mod difficulty_str {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use starlance_types::Difficulty;

    pub fn serialize<S: Serializer>(d: &Difficulty, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(d.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Difficulty, D::Error> {
        let s = String::deserialize(de)?;
        Difficulty::from_str(&s).ok_or_else(|| D::Error::custom(format!("unknown difficulty: {s}")))
    }
}
