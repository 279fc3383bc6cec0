//! Run defaults shared by the engine and its front ends.

use crate::simulator::DEFAULT_SEQUENCE_LEN;

/// Parameters for one simulator instance and the queries run against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Dice rolled per side
    pub sequence_len: usize,

    /// Random seed for reproducibility (None = entropy)
    pub seed: Option<u64>,

    /// How many leading values to show per side
    pub preview: usize,

    /// (attacker dice, defender dice) pairs to resolve
    pub matchups: Vec<(u8, u8)>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            sequence_len: DEFAULT_SEQUENCE_LEN,
            seed: None,
            preview: 50,
            matchups: vec![(3, 2), (3, 1)],
        }
    }
}

impl SimConfig {
    /// Small fixed-seed run for quick checks.
    pub fn seeded(sequence_len: usize, seed: u64) -> Self {
        Self {
            sequence_len,
            seed: Some(seed),
            ..Default::default()
        }
    }
}
