//! Opposed test arbitration and the strike policy applied afterwards.
//!
//! [`OpposedTier`] decides what the combined result message says.
//! [`StrikePolicy`] decides who takes a strike. The bands agree today but are
//! kept as separate types so one can change without the other.

use serde::{Deserialize, Serialize};

use super::RollOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpposedTier {
    Hit,
    Glancing,
    DefenseHolds,
}

impl OpposedTier {
    /// `diff >= 5` Hit, `1..=4` Glancing, `<= 0` DefenseHolds.
    pub fn classify(diff: i32) -> Self {
        if diff >= 5 {
            OpposedTier::Hit
        } else if diff >= 1 {
            OpposedTier::Glancing
        } else {
            OpposedTier::DefenseHolds
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OpposedTier::Hit => "Hit",
            OpposedTier::Glancing => "Glancing",
            OpposedTier::DefenseHolds => "DefenseHolds",
        }
    }

    pub fn label_key(&self) -> String {
        format!("ESSER.Opposed.{}", self.as_str())
    }

    pub fn default_label(&self) -> &'static str {
        match self {
            OpposedTier::Hit => "Hit: Defender takes 1 Strike.",
            OpposedTier::Glancing => "Glancing: shove/disarm/weaken.",
            OpposedTier::DefenseHolds => "Defense holds: Attacker risks 1 Strike.",
        }
    }
}

/// Result of an opposed test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpposedResult {
    /// attacker total minus defender total
    pub diff: i32,
    pub tier: OpposedTier,
    pub attacker: RollOutcome,
    pub defender: RollOutcome,
}

impl OpposedResult {
    pub fn new(attacker: RollOutcome, defender: RollOutcome) -> Self {
        let diff = attacker.total.saturating_sub(defender.total);
        Self {
            diff,
            tier: OpposedTier::classify(diff),
            attacker,
            defender,
        }
    }
}

/// Which side of an opposed test takes a strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrikeTarget {
    Attacker,
    Defender,
}

/// Caller-side strike rule for opposed tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrikePolicy {
    /// Minimum diff at which the defender takes a strike
    pub defender_struck_at: i32,
    /// Maximum diff at which the attacker takes a strike
    pub attacker_struck_at: i32,
}

impl StrikePolicy {
    /// `diff >= 5` defender +1, `diff <= 0` attacker +1, otherwise nothing.
    pub fn standard() -> Self {
        Self {
            defender_struck_at: 5,
            attacker_struck_at: 0,
        }
    }

    pub fn target_for(&self, diff: i32) -> Option<StrikeTarget> {
        if diff >= self.defender_struck_at {
            Some(StrikeTarget::Defender)
        } else if diff <= self.attacker_struck_at {
            Some(StrikeTarget::Attacker)
        } else {
            None
        }
    }
}

impl Default for StrikePolicy {
    fn default() -> Self {
        Self::standard()
    }
}
