use thiserror::Error;

use crate::combat::Side;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("{side} dice count must be at least 1, got {count}")]
    InvalidDiceCount { side: Side, count: u8 },

    #[error("could not allocate roll sequences of length {len}")]
    ResourceExhausted { len: usize },

    #[error("roll sequences differ in length: attacker {attacker}, defender {defender}")]
    LengthMismatch { attacker: usize, defender: usize },

    #[error("{side} die at position {index} has value {value}, expected 1..=6")]
    InvalidDieValue { side: Side, index: usize, value: u8 },
}

pub type Result<T> = std::result::Result<T, EngineError>;
