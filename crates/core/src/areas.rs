//! Per-sector behavior flags for the mission loop.
//!
//! Campaign sectors vary the loop in small ways: the boss rush never arms
//! the failure timer, interlude sectors skip escort regrouping, the final
//! sector fades out into the credits. Folding those into one data table
//! keeps the loop itself free of sector number checks.

use starlance_types::{BOSS_RUSH_AREA, FINAL_AREA};

/// How the mission loop treats one sector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaTraits {
    /// Mission failure does not arm the end-of-mission timer here; the
    /// sector resolves through its own set piece.
    pub failure_timer_exempt: bool,
    /// Ends the campaign: music fades out, credits roll, no departure.
    pub final_area: bool,
    /// An escaped boss triggers the whiteout set piece.
    pub boss_rush: bool,
    /// Space mines drift in from off-screen during play.
    pub mine_field: bool,
    /// Escorts regroup on the player during sector departure.
    pub escort_regroup: bool,
    /// Surviving wingmates take up formation positions on departure.
    pub wingmates_regroup: bool,
    /// The engineer's ship also regroups on departure.
    pub engineer_regroups: bool,
    /// Cutscenes shown after a successful mission, in order.
    pub cutscenes: &'static [u8],
    /// Completing this sector jumps the campaign to a new system.
    pub system_advance: Option<u8>,
}

impl Default for AreaTraits {
    fn default() -> Self {
        Self {
            failure_timer_exempt: false,
            final_area: false,
            boss_rush: false,
            mine_field: false,
            escort_regroup: true,
            wingmates_regroup: true,
            engineer_regroups: false,
            cutscenes: &[],
            system_advance: None,
        }
    }
}

impl AreaTraits {
    pub fn for_area(area: u8) -> Self {
        match area {
            5 => Self {
                failure_timer_exempt: true,
                boss_rush: true,
                cutscenes: &[1, 2],
                system_advance: Some(1),
                ..Self::default()
            },
            7 => Self {
                cutscenes: &[3],
                ..Self::default()
            },
            9 | 17 => Self {
                engineer_regroups: true,
                ..Self::default()
            },
            10 | 15 => Self {
                escort_regroup: false,
                ..Self::default()
            },
            11 => Self {
                cutscenes: &[4],
                system_advance: Some(2),
                ..Self::default()
            },
            13 => Self {
                cutscenes: &[5],
                ..Self::default()
            },
            18 => Self {
                cutscenes: &[6],
                system_advance: Some(3),
                ..Self::default()
            },
            24 => Self {
                mine_field: true,
                ..Self::default()
            },
            25 => Self {
                wingmates_regroup: false,
                ..Self::default()
            },
            26 => Self {
                final_area: true,
                ..Self::default()
            },
            _ => Self::default(),
        }
    }
}
