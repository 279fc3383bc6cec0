use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub mod combat;
pub mod config;
pub mod error;
pub mod outcome;
pub mod rolls;
pub mod simulator;

pub use combat::{contest, resolve, resolve_round, round_limit, ContestOutcome, DiceCounts, Side};
pub use config::SimConfig;
pub use error::{EngineError, Result};
pub use outcome::{Advantage, Report, Tally};
pub use rolls::{Die, RollSequences};
pub use simulator::{Simulator, DEFAULT_SEQUENCE_LEN};

pub const DIE_FACES: u8 = 6;

enum Source {
    Rng(ChaCha8Rng),
    Scripted { values: Vec<u8>, next: usize },
}

/// Source of six-sided die values.
pub struct Dice {
    source: Source,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self { source: Source::Rng(ChaCha8Rng::seed_from_u64(seed)) }
    }

    /// Seeded from OS entropy; two instances will not agree.
    pub fn from_entropy() -> Self {
        Self { source: Source::Rng(ChaCha8Rng::from_entropy()) }
    }

    /// Replays `values` in order, wrapping around at the end.
    pub fn from_scripted(values: Vec<u8>) -> Self {
        assert!(!values.is_empty(), "scripted dice need at least one value");
        Self { source: Source::Scripted { values, next: 0 } }
    }

    pub fn d6(&mut self) -> u8 {
        match &mut self.source {
            Source::Rng(rng) => rng.gen_range(1..=DIE_FACES),
            Source::Scripted { values, next } => {
                let v = values[*next % values.len()];
                *next += 1;
                v
            }
        }
    }
}
