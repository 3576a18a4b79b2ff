//! The four ESSER attributes and the skills each one governs.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Attribute keys as stored on a character record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKey {
    Body,
    Agility,
    Mind,
    Spirit,
}

impl AttributeKey {
    pub const ALL: [AttributeKey; 4] = [
        AttributeKey::Body,
        AttributeKey::Agility,
        AttributeKey::Mind,
        AttributeKey::Spirit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKey::Body => "body",
            AttributeKey::Agility => "agility",
            AttributeKey::Mind => "mind",
            AttributeKey::Spirit => "spirit",
        }
    }

    /// Localization key for the attribute label.
    pub fn label_key(&self) -> String {
        format!("ESSER.Attribute.{}", self.as_str())
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "body" => Ok(AttributeKey::Body),
            "agility" => Ok(AttributeKey::Agility),
            "mind" => Ok(AttributeKey::Mind),
            "spirit" => Ok(AttributeKey::Spirit),
            other => Err(DomainError::parse(format!("Unknown attribute: {}", other))),
        }
    }
}

/// Static description of one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDefinition {
    pub key: AttributeKey,
    pub label: &'static str,
    pub description: &'static str,
    pub default_modifier: i32,
    pub skills: &'static [&'static str],
}

const STANDARD_ATTRIBUTES: [AttributeDefinition; 4] = [
    AttributeDefinition {
        key: AttributeKey::Body,
        label: "Body",
        description: "Strength, stamina and raw physical force.",
        default_modifier: 0,
        skills: &["athletics", "endurance", "melee", "unarmed"],
    },
    AttributeDefinition {
        key: AttributeKey::Agility,
        label: "Agility",
        description: "Speed, balance and fine motor control.",
        default_modifier: 0,
        skills: &["acrobatics", "ranged", "stealth", "thievery"],
    },
    AttributeDefinition {
        key: AttributeKey::Mind,
        label: "Mind",
        description: "Knowledge, awareness and careful reasoning.",
        default_modifier: 0,
        skills: &[
            "nature",
            "survival",
            "crafting",
            "lore",
            "perception",
            "healing",
            "spell_arcane",
            "spell_occult",
        ],
    },
    AttributeDefinition {
        key: AttributeKey::Spirit,
        label: "Spirit",
        description: "Presence, willpower and connection to others.",
        default_modifier: 0,
        skills: &[
            "persuasion",
            "deception",
            "intimidation",
            "performance",
            "animal",
            "spell_divine",
            "spell_primal",
        ],
    },
];

/// Lookup from skill key to the attribute governing it.
#[derive(Debug, Clone)]
pub struct AttributeMap {
    definitions: Vec<AttributeDefinition>,
    by_skill: HashMap<&'static str, AttributeKey>,
}

impl AttributeMap {
    /// Build a map from definitions.
    ///
    /// Fails if a skill is claimed by more than one attribute, or if an
    /// attribute key is defined twice.
    pub fn new(definitions: Vec<AttributeDefinition>) -> Result<Self, DomainError> {
        let mut by_skill = HashMap::new();
        for (i, def) in definitions.iter().enumerate() {
            if definitions[..i].iter().any(|d| d.key == def.key) {
                return Err(DomainError::validation(format!(
                    "attribute '{}' defined twice",
                    def.key
                )));
            }
            for skill in def.skills {
                if let Some(previous) = by_skill.insert(*skill, def.key) {
                    return Err(DomainError::validation(format!(
                        "skill '{}' governed by both '{}' and '{}'",
                        skill, previous, def.key
                    )));
                }
            }
        }
        Ok(Self {
            definitions,
            by_skill,
        })
    }

    pub fn standard() -> Self {
        let definitions = STANDARD_ATTRIBUTES.to_vec();
        let by_skill = definitions
            .iter()
            .flat_map(|def| def.skills.iter().map(move |skill| (*skill, def.key)))
            .collect();
        Self {
            definitions,
            by_skill,
        }
    }

    /// The attribute governing `skill`, if the skill is known.
    pub fn attribute_for(&self, skill: &str) -> Option<AttributeKey> {
        self.by_skill.get(skill).copied()
    }

    pub fn definition(&self, key: AttributeKey) -> Option<&AttributeDefinition> {
        self.definitions.iter().find(|def| def.key == key)
    }

    /// Default modifier used when a character has no stored value.
    pub fn default_modifier(&self, key: AttributeKey) -> i32 {
        self.definition(key)
            .map(|def| def.default_modifier)
            .unwrap_or(0)
    }

    pub fn definitions(&self) -> &[AttributeDefinition] {
        &self.definitions
    }
}

impl Default for AttributeMap {
    fn default() -> Self {
        Self::standard()
    }
}
