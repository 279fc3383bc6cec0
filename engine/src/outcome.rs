use std::fmt;

use serde::Serialize;

use crate::combat::{ContestOutcome, DiceCounts, Side};

/// Win counters accumulated over resolved comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Tally {
    pub attacker_wins: u64,
    pub defender_wins: u64,
}

impl Tally {
    pub fn new(attacker_wins: u64, defender_wins: u64) -> Self {
        Self { attacker_wins, defender_wins }
    }

    pub fn record(&mut self, outcome: ContestOutcome) {
        match outcome.winner() {
            Side::Attacker => self.attacker_wins += 1,
            Side::Defender => self.defender_wins += 1,
        }
    }

    pub fn merge(&mut self, other: Tally) {
        self.attacker_wins += other.attacker_wins;
        self.defender_wins += other.defender_wins;
    }

    pub fn comparisons(&self) -> u64 {
        self.attacker_wins + self.defender_wins
    }
}

/// Attacker's edge over the defender, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advantage {
    Percent(i64),
    /// The defender never won, so the ratio has no finite value.
    Undefined,
}

impl Advantage {
    /// `round((attacker_wins / defender_wins - 1) * 100)`, halves rounded away from zero.
    pub fn from_tally(tally: &Tally) -> Self {
        if tally.defender_wins == 0 {
            return Advantage::Undefined;
        }
        let ratio = tally.attacker_wins as f64 / tally.defender_wins as f64;
        Advantage::Percent(((ratio - 1.0) * 100.0).round() as i64)
    }

    pub fn percent(&self) -> Option<i64> {
        match self {
            Advantage::Percent(p) => Some(*p),
            Advantage::Undefined => None,
        }
    }
}

impl fmt::Display for Advantage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advantage::Percent(p) => write!(f, "{p}%"),
            Advantage::Undefined => f.write_str("undefined (defender never won)"),
        }
    }
}

/// Everything the reporting layer gets back from one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Report {
    pub attacker_dice: u8,
    pub defender_dice: u8,
    pub rounds: usize,
    pub tally: Tally,
    pub advantage: Advantage,
}

impl Report {
    pub fn new(counts: DiceCounts, rounds: usize, tally: Tally) -> Self {
        Self {
            attacker_dice: counts.attacker(),
            defender_dice: counts.defender(),
            rounds,
            tally,
            advantage: Advantage::from_tally(&tally),
        }
    }
}
