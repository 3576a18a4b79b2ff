//! Dice formulas and roll results
//!
//! A check is always "1d20 + modifier". The RNG is injected as a closure so
//! the domain stays free of `rand`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A dice formula like "1d20+3"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceFormula {
    /// Number of dice to roll (X in XdY)
    pub dice_count: u8,
    /// Size of each die (Y in XdY)
    pub die_size: u8,
    /// Modifier to add/subtract after rolling (+Z or -Z)
    pub modifier: i32,
}

impl DiceFormula {
    /// The check formula: one twenty-sided die plus `modifier`.
    pub fn d20(modifier: i32) -> Self {
        Self {
            dice_count: 1,
            die_size: 20,
            modifier,
        }
    }

    /// Roll using `gen_range(min, max)` (inclusive) for each die.
    pub fn roll_with(&self, mut gen_range: impl FnMut(i32, i32) -> i32) -> DiceRollResult {
        let individual_rolls: Vec<i32> = (0..self.dice_count)
            .map(|_| gen_range(1, self.die_size as i32))
            .collect();
        let dice_total: i32 = individual_rolls.iter().sum();

        DiceRollResult {
            formula: self.clone(),
            individual_rolls,
            dice_total,
            modifier_applied: self.modifier,
            total: dice_total.saturating_add(self.modifier),
        }
    }
}

impl fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.modifier {
            0 => write!(f, "{}d{}", self.dice_count, self.die_size),
            m if m > 0 => write!(f, "{}d{}+{}", self.dice_count, self.die_size, m),
            m => write!(f, "{}d{}{}", self.dice_count, self.die_size, m),
        }
    }
}

/// Result of rolling dice, kept for audit and display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceRollResult {
    pub formula: DiceFormula,
    pub individual_rolls: Vec<i32>,
    /// Sum of dice before modifier
    pub dice_total: i32,
    pub modifier_applied: i32,
    /// Final total (dice_total + modifier)
    pub total: i32,
}

impl DiceRollResult {
    /// Format as a breakdown string (e.g., "1d20(14) + 5 = 19")
    pub fn breakdown(&self) -> String {
        let dice = format!("{}d{}", self.formula.dice_count, self.formula.die_size);
        let rolls = match self.individual_rolls.as_slice() {
            [single] => format!("({})", single),
            many => format!(
                "[{}]",
                many.iter()
                    .map(|r| r.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        };

        match self.modifier_applied {
            0 => format!("{}{} = {}", dice, rolls, self.total),
            m if m > 0 => format!("{}{} + {} = {}", dice, rolls, m, self.total),
            m => format!("{}{} - {} = {}", dice, rolls, m.unsigned_abs(), self.total),
        }
    }
}
