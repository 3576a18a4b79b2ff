//! Static key → label table.

use std::collections::HashMap;

use esser_domain::{
    skill_label_key, AttributeKey, EsserRules, OpposedTier, OutcomeTier,
};

use crate::infrastructure::ports::LocalizationPort;

pub const CONCEPT_LABEL_KEY: &str = "ESSER.NPC.Concept";
pub const CORE_TRAIT_LABEL_KEY: &str = "ESSER.NPC.CoreTrait";

/// Immutable lookup table. Unmapped keys come back unchanged.
#[derive(Debug, Clone, Default)]
pub struct StaticLocalizer {
    entries: HashMap<String, String>,
}

impl StaticLocalizer {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// English labels for every key the rules core asks for.
    pub fn english(rules: &EsserRules) -> Self {
        let mut entries = HashMap::new();

        for skill in rules.skills.iter() {
            entries.insert(skill_label_key(skill.key), skill.label.to_string());
        }
        for key in AttributeKey::ALL {
            if let Some(def) = rules.attributes.definition(key) {
                entries.insert(key.label_key(), def.label.to_string());
            }
        }
        for tier in [
            OutcomeTier::EpicSuccess,
            OutcomeTier::FullSuccess,
            OutcomeTier::SuccessWithCost,
            OutcomeTier::FailureWithComplication,
        ] {
            entries.insert(tier.label_key(), tier.default_label().to_string());
        }
        for tier in [
            OpposedTier::Hit,
            OpposedTier::Glancing,
            OpposedTier::DefenseHolds,
        ] {
            entries.insert(tier.label_key(), tier.default_label().to_string());
        }
        entries.insert(CONCEPT_LABEL_KEY.to_string(), "Concept".to_string());
        entries.insert(CORE_TRAIT_LABEL_KEY.to_string(), "Core Trait".to_string());

        Self { entries }
    }

    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl LocalizationPort for StaticLocalizer {
    fn localize(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

/// Localized text for `key`, or `fallback` when the table has no entry.
pub fn localize_or(localizer: &dyn LocalizationPort, key: &str, fallback: &str) -> String {
    let localized = localizer.localize(key);
    if localized == key || localized.trim().is_empty() {
        fallback.to_string()
    } else {
        localized
    }
}
