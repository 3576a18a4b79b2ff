//! Local dice device over a [`RandomPort`].

use std::sync::Arc;

use async_trait::async_trait;
use esser_domain::{DiceFormula, DiceRollResult};

use crate::infrastructure::ports::{DiceDevice, DiceError, RandomPort};

pub struct RandomDiceDevice {
    random: Arc<dyn RandomPort>,
}

impl RandomDiceDevice {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }
}

#[async_trait]
impl DiceDevice for RandomDiceDevice {
    async fn roll(&self, formula: &DiceFormula) -> Result<DiceRollResult, DiceError> {
        if formula.dice_count == 0 || formula.die_size == 0 {
            return Err(DiceError::InvalidFormula(formula.to_string()));
        }
        let result = formula.roll_with(|min, max| self.random.gen_range(min, max));
        tracing::trace!(formula = %formula, total = result.total, "Rolled dice");
        Ok(result)
    }
}
