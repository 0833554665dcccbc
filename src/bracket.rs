use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{BRACKET_TEAMS, FIELD_TEAMS, PLAY_IN_GAMES, REGION_COUNT, SEEDS_PER_REGION};
use crate::error::BracketError;
use crate::team::Team;

/// One of the four bracket regions, each holding seeds 1-16.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    East,
    West,
    South,
    Midwest,
}

/// Regions in bracket order; East/West winners meet in one national
/// semifinal, South/Midwest in the other.
pub const REGIONS: [Region; REGION_COUNT] = [Region::East, Region::West, Region::South, Region::Midwest];

impl Region {
    pub fn index(self) -> usize {
        match self {
            Region::East => 0,
            Region::West => 1,
            Region::South => 2,
            Region::Midwest => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Region::East => "East",
            Region::West => "West",
            Region::South => "South",
            Region::Midwest => "Midwest",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Index of a team within a [`Bracket`]'s team table.
pub type TeamId = usize;

/// A First Four game: `challenger` contests `region`'s 16 line against
/// the incumbent seeded there.
#[derive(Clone, Copy, Debug)]
pub struct PlayInSlot {
    pub region: Region,
    pub challenger: TeamId,
}

/// The frozen tournament field: 64 seeded teams in 4 regions plus 4
/// play-in challengers.
///
/// Team ids 0-63 are the seeded field in overall rank order; 64-67 are
/// the play-in challengers. The structure is fixed at build time and
/// never mutated by a simulation trial.
#[derive(Clone, Debug)]
pub struct Bracket {
    teams: Vec<Team>,
    /// `seed_lines[region][seed - 1]` is the incumbent on that line.
    seed_lines: [[TeamId; SEEDS_PER_REGION]; REGION_COUNT],
    play_in: [PlayInSlot; PLAY_IN_GAMES],
}

impl Bracket {
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, id: TeamId) -> &Team {
        &self.teams[id]
    }

    /// Incumbent team on a region's seed line (1-16).
    pub fn seed_line(&self, region: Region, seed: u8) -> TeamId {
        self.seed_lines[region.index()][seed as usize - 1]
    }

    pub fn play_in(&self) -> &[PlayInSlot; PLAY_IN_GAMES] {
        &self.play_in
    }

    /// Verify structural invariants: 68 teams, every (region, seed) pair
    /// occupied by exactly one distinct seeded team, and four distinct
    /// play-in challengers.
    pub fn validate(&self) -> Result<(), BracketError> {
        if self.teams.len() != FIELD_TEAMS {
            return Err(BracketError::BracketStructure(format!(
                "field holds {} teams, expected {FIELD_TEAMS}",
                self.teams.len()
            )));
        }

        let mut seen = [false; BRACKET_TEAMS];
        for region in REGIONS {
            for seed in 1..=SEEDS_PER_REGION as u8 {
                let id = self.seed_line(region, seed);
                if id >= BRACKET_TEAMS {
                    return Err(BracketError::BracketStructure(format!(
                        "{region} seed {seed} holds play-in id {id}"
                    )));
                }
                if seen[id] {
                    return Err(BracketError::BracketStructure(format!(
                        "team {} occupies more than one seed line",
                        self.teams[id].name
                    )));
                }
                seen[id] = true;
            }
        }

        let mut challenged = [false; REGION_COUNT];
        for slot in &self.play_in {
            if !(BRACKET_TEAMS..FIELD_TEAMS).contains(&slot.challenger) {
                return Err(BracketError::BracketStructure(format!(
                    "play-in challenger id {} outside {BRACKET_TEAMS}..{FIELD_TEAMS}",
                    slot.challenger
                )));
            }
            let r = slot.region.index();
            if challenged[r] {
                return Err(BracketError::BracketStructure(format!(
                    "region {} has more than one play-in game",
                    slot.region
                )));
            }
            challenged[r] = true;
        }

        Ok(())
    }
}

/// Orders scored teams and assigns them to bracket slots.
#[derive(Clone, Copy, Debug, Default)]
pub struct BracketBuilder;

impl BracketBuilder {
    /// Build the frozen bracket from a field of scored teams.
    ///
    /// Teams are sorted descending by seed score with exact ties broken
    /// by name ascending, so construction is reproducible. Ranks 1-64
    /// snake into the four regions one seed tier at a time, alternating
    /// direction each tier, which keeps aggregate region strength level
    /// instead of stacking the best teams into one region. Ranks 65-68
    /// become play-in challengers, one per region in region order. Any
    /// teams beyond rank 68 are dropped.
    pub fn build(&self, mut teams: Vec<Team>) -> Result<Bracket, BracketError> {
        if teams.len() < FIELD_TEAMS {
            return Err(BracketError::InsufficientTeams {
                required: FIELD_TEAMS,
                actual: teams.len(),
            });
        }

        teams.sort_by(|a, b| {
            b.seed_score
                .total_cmp(&a.seed_score)
                .then_with(|| a.name.cmp(&b.name))
        });
        teams.truncate(FIELD_TEAMS);

        // Snake assignment: tier t takes overall ranks 4t+1..4t+4, laid
        // across the regions forward on even tiers and backward on odd.
        let mut seed_lines = [[0usize; SEEDS_PER_REGION]; REGION_COUNT];
        for tier in 0..SEEDS_PER_REGION {
            for offset in 0..REGION_COUNT {
                let region = if tier % 2 == 0 {
                    offset
                } else {
                    REGION_COUNT - 1 - offset
                };
                seed_lines[region][tier] = tier * REGION_COUNT + offset;
            }
        }

        let play_in = std::array::from_fn(|i| PlayInSlot {
            region: REGIONS[i],
            challenger: BRACKET_TEAMS + i,
        });

        let bracket = Bracket {
            teams,
            seed_lines,
            play_in,
        };
        bracket.validate()?;

        debug!(
            "bracket built: {BRACKET_TEAMS} seeded teams, {PLAY_IN_GAMES} play-in games, \
             top seed {}",
            bracket.team(0).name
        );
        Ok(bracket)
    }
}

/// Synthetic strictly-decreasing-score field used across the crate's
/// unit tests. Team id ends up equal to overall rank - 1.
#[cfg(test)]
pub(crate) fn synthetic_field(count: usize) -> Vec<Team> {
    use crate::team::TeamStats;

    (0..count)
        .map(|i| {
            let stats = TeamStats {
                name: format!("Team{:02}", i + 1),
                win_pct: 0.9 - 0.005 * i as f64,
                net_rank: i as u32 + 1,
                rpi_rank: i as u32 + 1,
                sos: 0.5,
            };
            Team::new(&stats, 95.0 - i as f64)
        })
        .collect()
}
