//! Environment-driven engine settings.

use std::env;

/// Skill used for opposed tests when nothing else is configured.
pub const DEFAULT_OPPOSED_SKILL: &str = "melee";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// Seed for deterministic dice. `None` uses system randomness.
    pub dice_seed: Option<u64>,
    pub opposed_skill: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            dice_seed: None,
            opposed_skill: DEFAULT_OPPOSED_SKILL.to_string(),
        }
    }
}

impl EngineSettings {
    /// Read `ESSER_DICE_SEED` and `ESSER_OPPOSED_SKILL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let dice_seed = lookup("ESSER_DICE_SEED").and_then(|raw| {
            raw.trim()
                .parse::<u64>()
                .map_err(|e| {
                    tracing::warn!(value = %raw, error = %e, "Ignoring invalid ESSER_DICE_SEED");
                })
                .ok()
        });
        let opposed_skill = lookup("ESSER_OPPOSED_SKILL")
            .map(|raw| raw.trim().to_string())
            .filter(|skill| !skill.is_empty())
            .unwrap_or_else(|| DEFAULT_OPPOSED_SKILL.to_string());

        Self {
            dice_seed,
            opposed_skill,
        }
    }
}
