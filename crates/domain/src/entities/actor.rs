//! Actor entity - player characters and NPCs
//!
//! Characters resolve checks from attributes plus stored skill bonuses; NPCs
//! from a flat bonus plus focus slots. Both carry strikes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::game_systems::AttributeKey;
use crate::ids::ActorId;
use crate::value_objects::{FocusSlots, StoredBonus, StrikeTrack};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub kind: ActorKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "system", rename_all = "lowercase")]
pub enum ActorKind {
    Character(CharacterSheet),
    Npc(NpcSheet),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSheet {
    /// Missing attributes fall back to the attribute default
    #[serde(default)]
    pub attributes: BTreeMap<AttributeKey, i32>,
    #[serde(default)]
    pub skills: BTreeMap<String, StoredBonus>,
    #[serde(default)]
    pub strikes: i32,
    #[serde(default)]
    pub max_strikes: Option<i32>,
}

impl CharacterSheet {
    pub fn with_attribute(mut self, key: AttributeKey, modifier: i32) -> Self {
        self.attributes.insert(key, modifier);
        self
    }

    pub fn with_skill(mut self, key: impl Into<String>, value: impl Into<StoredBonus>) -> Self {
        self.skills.insert(key.into(), value.into());
        self
    }

    pub fn with_strikes(mut self, strikes: i32, max_strikes: Option<i32>) -> Self {
        self.strikes = strikes;
        self.max_strikes = max_strikes;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NpcSheet {
    #[serde(default)]
    pub bonus: i32,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub core_trait: String,
    #[serde(default)]
    pub concept: Option<String>,
    #[serde(default)]
    pub strikes: i32,
    #[serde(default)]
    pub max_strikes: Option<i32>,
    #[serde(default)]
    pub focus: NpcFocus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcFocus {
    pub slots: FocusSlots,
}

impl NpcSheet {
    pub fn with_bonus(mut self, bonus: i32) -> Self {
        self.bonus = bonus;
        self
    }

    pub fn with_tier(mut self, tier: impl Into<String>) -> Self {
        self.tier = tier.into();
        self
    }

    pub fn with_focus(mut self, slots: FocusSlots) -> Self {
        self.focus.slots = slots;
        self
    }

    pub fn with_strikes(mut self, strikes: i32, max_strikes: Option<i32>) -> Self {
        self.strikes = strikes;
        self.max_strikes = max_strikes;
        self
    }
}

impl Actor {
    pub fn character(name: impl Into<String>, sheet: CharacterSheet) -> Self {
        Self {
            id: ActorId::new(),
            name: name.into(),
            kind: ActorKind::Character(sheet),
        }
    }

    pub fn npc(name: impl Into<String>, sheet: NpcSheet) -> Self {
        Self {
            id: ActorId::new(),
            name: name.into(),
            kind: ActorKind::Npc(sheet),
        }
    }

    pub fn as_npc(&self) -> Result<&NpcSheet, DomainError> {
        match &self.kind {
            ActorKind::Npc(sheet) => Ok(sheet),
            ActorKind::Character(_) => Err(DomainError::wrong_actor_kind("npc")),
        }
    }

    pub fn strikes(&self) -> i32 {
        match &self.kind {
            ActorKind::Character(sheet) => sheet.strikes,
            ActorKind::Npc(sheet) => sheet.strikes,
        }
    }

    /// Stored max, if one was ever configured.
    pub fn max_strikes(&self) -> Option<i32> {
        match &self.kind {
            ActorKind::Character(sheet) => sheet.max_strikes,
            ActorKind::Npc(sheet) => sheet.max_strikes,
        }
    }

    pub fn strike_track(&self) -> StrikeTrack {
        StrikeTrack::new(self.strikes(), self.max_strikes())
    }

    /// Merge a partial update into this record.
    ///
    /// NPC-only fields are ignored for characters.
    pub fn apply_patch(&mut self, patch: &ActorPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        match &mut self.kind {
            ActorKind::Character(sheet) => {
                if let Some(strikes) = patch.strikes {
                    sheet.strikes = strikes;
                }
                if let Some(max) = patch.max_strikes {
                    sheet.max_strikes = Some(max);
                }
            }
            ActorKind::Npc(sheet) => {
                if let Some(strikes) = patch.strikes {
                    sheet.strikes = strikes;
                }
                if let Some(max) = patch.max_strikes {
                    sheet.max_strikes = Some(max);
                }
                if let Some(bonus) = patch.bonus {
                    sheet.bonus = bonus;
                }
                if let Some(tier) = &patch.tier {
                    sheet.tier = tier.clone();
                }
                if let Some(core_trait) = &patch.core_trait {
                    sheet.core_trait = core_trait.clone();
                }
                if let Some(concept) = &patch.concept {
                    sheet.concept = Some(concept.clone());
                }
                if let Some(slots) = &patch.focus_slots {
                    sheet.focus.slots = slots.clone();
                }
            }
        }
    }
}

/// Partial field-group update. `None` leaves the field untouched.
///
/// Serializes to the path-merge shape the actor store expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "system.strikes", skip_serializing_if = "Option::is_none")]
    pub strikes: Option<i32>,
    #[serde(rename = "system.maxStrikes", skip_serializing_if = "Option::is_none")]
    pub max_strikes: Option<i32>,
    #[serde(rename = "system.bonus", skip_serializing_if = "Option::is_none")]
    pub bonus: Option<i32>,
    #[serde(rename = "system.tier", skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(rename = "system.coreTrait", skip_serializing_if = "Option::is_none")]
    pub core_trait: Option<String>,
    #[serde(rename = "system.concept", skip_serializing_if = "Option::is_none")]
    pub concept: Option<String>,
    #[serde(rename = "system.focus.slots", skip_serializing_if = "Option::is_none")]
    pub focus_slots: Option<FocusSlots>,
}

impl ActorPatch {
    pub fn strikes(strikes: i32) -> Self {
        Self {
            strikes: Some(strikes),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
