use tracing::{info, instrument};

use crate::combat::{self, round_limit, DiceCounts};
use crate::config::SimConfig;
use crate::error::Result;
use crate::outcome::Report;
use crate::rolls::{Die, RollSequences};
use crate::Dice;

pub const DEFAULT_SEQUENCE_LEN: usize = 3_000_000;

/// Owns one pair of roll sequences and answers matchup queries against it.
#[derive(Debug, Clone)]
pub struct Simulator {
    rolls: RollSequences,
}

impl Simulator {
    /// Entropy seeded; each instance rolls different sequences.
    pub fn new(len: usize) -> Result<Self> {
        Self::with_dice(len, &mut Dice::from_entropy())
    }

    pub fn with_seed(len: usize, seed: u64) -> Result<Self> {
        Self::with_dice(len, &mut Dice::from_seed(seed))
    }

    pub fn with_dice(len: usize, dice: &mut Dice) -> Result<Self> {
        let rolls = RollSequences::generate(len, dice)?;
        Ok(Self { rolls })
    }

    pub fn from_config(cfg: &SimConfig) -> Result<Self> {
        match cfg.seed {
            Some(seed) => Self::with_seed(cfg.sequence_len, seed),
            None => Self::new(cfg.sequence_len),
        }
    }

    pub fn from_sequences(rolls: RollSequences) -> Self {
        Self { rolls }
    }

    pub fn sequences(&self) -> &RollSequences {
        &self.rolls
    }

    pub fn preview(&self, count: usize) -> (&[Die], &[Die]) {
        self.rolls.preview(count)
    }

    /// Resolve `attacker` dice against `defender` dice over the stored rolls.
    #[instrument(level = "info", skip(self))]
    pub fn resolve(&self, attacker: u8, defender: u8) -> Result<Report> {
        let counts = DiceCounts::new(attacker, defender)?;
        let tally = combat::resolve(&self.rolls, counts);
        let report = Report::new(counts, round_limit(self.rolls.len(), counts), tally);
        info!(
            attacker_wins = report.tally.attacker_wins,
            defender_wins = report.tally.defender_wins,
            advantage = ?report.advantage,
            "matchup resolved"
        );
        Ok(report)
    }

    /// Resolve each configured matchup in order, stopping at the first invalid one.
    pub fn resolve_all(&self, matchups: &[(u8, u8)]) -> Result<Vec<Report>> {
        matchups
            .iter()
            .map(|&(a, d)| self.resolve(a, d))
            .collect()
    }
}
