//! The four-step result ladder for a single check.

use serde::{Deserialize, Serialize};

use super::DiceRollResult;

/// Result tier of one check. Thresholds are inclusive lower bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OutcomeTier {
    FailureWithComplication,
    SuccessWithCost,
    FullSuccess,
    EpicSuccess,
}

impl OutcomeTier {
    pub const EPIC_THRESHOLD: i32 = 20;
    pub const FULL_THRESHOLD: i32 = 15;
    pub const COST_THRESHOLD: i32 = 10;

    /// Classify a check total, highest threshold first.
    pub fn classify(total: i32) -> Self {
        if total >= Self::EPIC_THRESHOLD {
            OutcomeTier::EpicSuccess
        } else if total >= Self::FULL_THRESHOLD {
            OutcomeTier::FullSuccess
        } else if total >= Self::COST_THRESHOLD {
            OutcomeTier::SuccessWithCost
        } else {
            OutcomeTier::FailureWithComplication
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeTier::EpicSuccess => "EpicSuccess",
            OutcomeTier::FullSuccess => "FullSuccess",
            OutcomeTier::SuccessWithCost => "SuccessWithCost",
            OutcomeTier::FailureWithComplication => "FailureWithComplication",
        }
    }

    pub fn label_key(&self) -> String {
        format!("ESSER.Outcome.{}", self.as_str())
    }

    /// English label used when no translation is mapped.
    pub fn default_label(&self) -> &'static str {
        match self {
            OutcomeTier::EpicSuccess => "EPIC SUCCESS",
            OutcomeTier::FullSuccess => "Full success",
            OutcomeTier::SuccessWithCost => "Success with a cost",
            OutcomeTier::FailureWithComplication => "Failure with complication",
        }
    }
}

/// Result of one executed check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollOutcome {
    pub total: i32,
    pub tier: OutcomeTier,
    /// Total modifier added to the die
    pub modifier: i32,
    /// Raw roll, kept for audit
    pub roll: DiceRollResult,
}

impl RollOutcome {
    pub fn from_roll(roll: DiceRollResult) -> Self {
        Self {
            total: roll.total,
            tier: OutcomeTier::classify(roll.total),
            modifier: roll.modifier_applied,
            roll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::DiceFormula;

    #[test]
    fn ladder_boundaries() {
        let cases = [
            (-4, OutcomeTier::FailureWithComplication),
            (9, OutcomeTier::FailureWithComplication),
            (10, OutcomeTier::SuccessWithCost),
            (14, OutcomeTier::SuccessWithCost),
            (15, OutcomeTier::FullSuccess),
            (19, OutcomeTier::FullSuccess),
            (20, OutcomeTier::EpicSuccess),
            (25, OutcomeTier::EpicSuccess),
        ];
        for (total, tier) in cases {
            assert_eq!(OutcomeTier::classify(total), tier, "total {}", total);
        }
    }

    #[test]
    fn ladder_is_monotonic() {
        let mut previous = OutcomeTier::classify(-10);
        for total in -9..40 {
            let tier = OutcomeTier::classify(total);
            assert!(tier >= previous);
            previous = tier;
        }
    }

    #[test]
    fn outcome_from_roll() {
        let roll = DiceFormula::d20(3).roll_with(|_, _| 12);
        let outcome = RollOutcome::from_roll(roll);
        assert_eq!(outcome.total, 15);
        assert_eq!(outcome.modifier, 3);
        assert_eq!(outcome.tier, OutcomeTier::FullSuccess);
    }

    #[test]
    fn labels() {
        assert_eq!(OutcomeTier::EpicSuccess.default_label(), "EPIC SUCCESS");
        assert_eq!(
            OutcomeTier::SuccessWithCost.label_key(),
            "ESSER.Outcome.SuccessWithCost"
        );
    }
}
