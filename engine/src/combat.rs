use std::fmt;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::{EngineError, Result};
use crate::outcome::Tally;
use crate::rolls::{Die, RollSequences};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Attacker,
    Defender,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Attacker => f.write_str("attacker"),
            Side::Defender => f.write_str("defender"),
        }
    }
}

/// Result of comparing one attacker die against one defender die.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContestOutcome {
    AttackerWins,
    DefenderWins,
    TieDefender,
}

impl ContestOutcome {
    pub fn winner(self) -> Side {
        match self {
            ContestOutcome::AttackerWins => Side::Attacker,
            ContestOutcome::DefenderWins | ContestOutcome::TieDefender => Side::Defender,
        }
    }
}

/// Compare two dice; ties go to defender.
pub fn contest(attacker: Die, defender: Die) -> ContestOutcome {
    if attacker > defender {
        ContestOutcome::AttackerWins
    } else if attacker == defender {
        ContestOutcome::TieDefender
    } else {
        ContestOutcome::DefenderWins
    }
}

/// Dice committed by each side per round. Both counts are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiceCounts {
    attacker: u8,
    defender: u8,
}

impl DiceCounts {
    pub fn new(attacker: u8, defender: u8) -> Result<Self> {
        if attacker == 0 {
            return Err(EngineError::InvalidDiceCount { side: Side::Attacker, count: attacker });
        }
        if defender == 0 {
            return Err(EngineError::InvalidDiceCount { side: Side::Defender, count: defender });
        }
        Ok(Self { attacker, defender })
    }

    pub fn attacker(&self) -> u8 {
        self.attacker
    }

    pub fn defender(&self) -> u8 {
        self.defender
    }

    /// Comparisons made in each round.
    pub fn matched(&self) -> u8 {
        self.attacker.min(self.defender)
    }

    fn widest(&self) -> usize {
        usize::from(self.attacker.max(self.defender))
    }
}

/// Number of whole rounds `len` positions allow for the larger side.
pub fn round_limit(len: usize, counts: DiceCounts) -> usize {
    len / counts.widest()
}

/// Resolve one round. Each side's highest remaining die is matched until
/// either side runs out; the unmatched dice count for nothing.
pub fn resolve_round(attacker: &[Die], defender: &[Die]) -> Tally {
    let mut att = attacker.to_vec();
    let mut def = defender.to_vec();
    resolve_sorted(&mut att, &mut def)
}

fn resolve_sorted(att: &mut [Die], def: &mut [Die]) -> Tally {
    att.sort_unstable();
    def.sort_unstable();

    let mut tally = Tally::default();
    for (&a, &d) in att.iter().rev().zip(def.iter().rev()) {
        tally.record(contest(a, d));
    }
    tally
}

/// Resolve every round the sequences allow for `counts`.
#[instrument(level = "debug", skip(rolls), fields(len = rolls.len()))]
pub fn resolve(rolls: &RollSequences, counts: DiceCounts) -> Tally {
    let a = usize::from(counts.attacker());
    let d = usize::from(counts.defender());
    let limit = round_limit(rolls.len(), counts);

    // Scratch buffers reused across rounds.
    let mut att = Vec::with_capacity(a);
    let mut def = Vec::with_capacity(d);
    let mut tally = Tally::default();

    for (att_chunk, def_chunk) in rolls
        .attacker()
        .chunks_exact(a)
        .zip(rolls.defender().chunks_exact(d))
        .take(limit)
    {
        att.clear();
        att.extend_from_slice(att_chunk);
        def.clear();
        def.extend_from_slice(def_chunk);
        tally.merge(resolve_sorted(&mut att, &mut def));
    }

    debug!(
        rounds = limit,
        attacker_wins = tally.attacker_wins,
        defender_wins = tally.defender_wins,
        "resolved"
    );
    tally
}
