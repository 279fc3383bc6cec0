use serde::Serialize;
use tracing::{debug, instrument};

use crate::combat::Side;
use crate::error::{EngineError, Result};
use crate::{Dice, DIE_FACES};

/// A single die face, 1..=6.
pub type Die = u8;

/// Attacker and defender rolls of equal length, fixed once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollSequences {
    attacker: Vec<Die>,
    defender: Vec<Die>,
}

impl RollSequences {
    /// Draw `len` values per side. Position `i` draws the attacker's die, then the defender's.
    #[instrument(level = "debug", skip(dice))]
    pub fn generate(len: usize, dice: &mut Dice) -> Result<Self> {
        let mut attacker = Vec::new();
        let mut defender = Vec::new();
        attacker
            .try_reserve_exact(len)
            .and_then(|_| defender.try_reserve_exact(len))
            .map_err(|_| EngineError::ResourceExhausted { len })?;

        for _ in 0..len {
            attacker.push(dice.d6());
            defender.push(dice.d6());
        }
        debug!(len, "generated roll sequences");
        Ok(Self { attacker, defender })
    }

    /// Wrap fixed sequences, checking lengths and faces.
    pub fn from_parts(attacker: Vec<Die>, defender: Vec<Die>) -> Result<Self> {
        if attacker.len() != defender.len() {
            return Err(EngineError::LengthMismatch {
                attacker: attacker.len(),
                defender: defender.len(),
            });
        }
        check_faces(Side::Attacker, &attacker)?;
        check_faces(Side::Defender, &defender)?;
        Ok(Self { attacker, defender })
    }

    pub fn len(&self) -> usize {
        self.attacker.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attacker.is_empty()
    }

    pub fn attacker(&self) -> &[Die] {
        &self.attacker
    }

    pub fn defender(&self) -> &[Die] {
        &self.defender
    }

    /// First `count` values of each side, clamped to the sequence length.
    pub fn preview(&self, count: usize) -> (&[Die], &[Die]) {
        let n = count.min(self.len());
        (&self.attacker[..n], &self.defender[..n])
    }
}

fn check_faces(side: Side, values: &[Die]) -> Result<()> {
    match values
        .iter()
        .position(|v| !(1..=DIE_FACES).contains(v))
    {
        Some(index) => Err(EngineError::InvalidDieValue {
            side,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}
