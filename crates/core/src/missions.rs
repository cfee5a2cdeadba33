//! Mission definitions and the objective model.
//!
//! A mission carries up to three primary objectives plus the enemy wave
//! cadence. Progress against objectives is tracked by the world simulation;
//! this module only defines what a mission asks for and how the standing
//! enemy budget is derived from it.

use arrayvec::ArrayVec;
use starlance_types::UNLIMITED_ALIENS;

/// What an objective counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveKind {
    DestroyTargetType,
    DestroyAllTargets,
    Collect,
    ProtectPickup,
    ProtectTarget,
    EscapeSector,
}

/// Which craft class an objective applies to. [`Target::Any`] is the
/// wildcard: "destroy any `value` enemies".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Any,
    Boss,
    Transport,
    Miner,
    Drone,
    Cargo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Objective {
    pub kind: ObjectiveKind,
    pub target: Target,
    pub value: i32,
}

impl Objective {
    pub fn new(kind: ObjectiveKind, target: Target, value: i32) -> Self {
        Self {
            kind,
            target,
            value,
        }
    }
}

/// Static definition of one sector's mission.
#[derive(Debug, Clone, PartialEq)]
pub struct Mission {
    pub name: String,
    pub objectives: ArrayVec<Objective, 3>,
    /// Frames between enemy wave spawns; -1 disables the spawner.
    pub add_aliens_interval: i32,
}

impl Mission {
    pub fn new(name: &str, add_aliens_interval: i32) -> Self {
        Self {
            name: name.to_owned(),
            objectives: ArrayVec::new(),
            add_aliens_interval,
        }
    }

    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objectives.push(objective);
        self
    }

    /// How many standing enemies the spawner may keep alive.
    ///
    /// A destroy-any-`n` objective caps the budget at `n` so the player is
    /// never asked to kill more than can appear; destroy-all lifts the cap
    /// again. Later objectives win when both appear.
    pub fn allowable_aliens(&self) -> i32 {
        let mut allowable = UNLIMITED_ALIENS;

        for objective in &self.objectives {
            if objective.kind == ObjectiveKind::DestroyTargetType
                && objective.target == Target::Any
            {
                allowable = objective.value;
            }
            if objective.kind == ObjectiveKind::DestroyAllTargets {
                allowable = UNLIMITED_ALIENS;
            }
        }

        allowable
    }
}

/// Stock mission table for the demo campaign, keyed by sector area.
///
/// Areas with no bespoke entry get a standard patrol sweep.
pub fn mission_for_area(area: u8) -> Mission {
    match area {
        0 => Mission::new("Hail defence", 4)
            .with_objective(Objective::new(
                ObjectiveKind::DestroyAllTargets,
                Target::Any,
                1,
            )),
        5 => Mission::new("Moebo assault", 90)
            .with_objective(Objective::new(ObjectiveKind::DestroyTargetType, Target::Boss, 1)),
        9 => Mission::new("Nerod rescue", 60)
            .with_objective(Objective::new(ObjectiveKind::ProtectTarget, Target::Transport, 1))
            .with_objective(Objective::new(ObjectiveKind::DestroyTargetType, Target::Any, 12)),
        10 => Mission::new("Allez interlude", -1)
            .with_objective(Objective::new(ObjectiveKind::Collect, Target::Cargo, 5)),
        15 => Mission::new("Elamale interlude", -1)
            .with_objective(Objective::new(ObjectiveKind::EscapeSector, Target::Any, 1)),
        17 => Mission::new("Odeon pursuit", 75)
            .with_objective(Objective::new(ObjectiveKind::DestroyTargetType, Target::Any, 15)),
        24 => Mission::new("Mine sweep", 45)
            .with_objective(Objective::new(ObjectiveKind::DestroyTargetType, Target::Any, 20))
            .with_objective(Objective::new(ObjectiveKind::ProtectPickup, Target::Cargo, 3)),
        25 => Mission::new("Solo run", 60)
            .with_objective(Objective::new(ObjectiveKind::DestroyTargetType, Target::Any, 10)),
        26 => Mission::new("Final confrontation", 30)
            .with_objective(Objective::new(ObjectiveKind::DestroyTargetType, Target::Boss, 1)),
        _ => Mission::new("Patrol sweep", 60)
            .with_objective(Objective::new(ObjectiveKind::DestroyTargetType, Target::Any, 10)),
    }
}
