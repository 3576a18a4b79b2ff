//! Skill check use case.
//!
//! One d20 check for a character or NPC:
//! 1. Work out the modifier from the actor's sheet
//! 2. Roll `1d20 + modifier` on the dice device
//! 3. Classify the total on the outcome ladder
//! 4. Publish the result to chat

use std::sync::Arc;

use esser_domain::{
    skill_label_key, Actor, ActorId, ActorKind, BonusResolver, CharacterSheet, DiceFormula,
    EsserRules, NpcSheet, RollOutcome,
};

use crate::infrastructure::localization::localize_or;
use crate::infrastructure::ports::{
    ActorStore, ChatMessage, DiceDevice, DiceError, LocalizationPort, MessageError, MessageSink,
    RepoError,
};

/// One labelled contribution to a check modifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierPart {
    pub label: String,
    pub value: i32,
}

/// Total modifier for a check and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckModifier {
    pub total: i32,
    pub parts: Vec<ModifierPart>,
}

impl CheckModifier {
    fn push(&mut self, label: impl Into<String>, value: i32) {
        self.total = self.total.saturating_add(value);
        self.parts.push(ModifierPart {
            label: label.into(),
            value,
        });
    }

    /// `+3: Body +2, Skill +1`
    pub fn describe(&self) -> String {
        if self.parts.is_empty() {
            return signed(self.total);
        }
        let parts = self
            .parts
            .iter()
            .map(|part| format!("{} {}", part.label, signed(part.value)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}: {}", signed(self.total), parts)
    }
}

pub(crate) fn signed(value: i32) -> String {
    if value >= 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

/// Roll a skill check use case.
pub struct RollSkill {
    actors: Arc<dyn ActorStore>,
    dice: Arc<dyn DiceDevice>,
    messages: Arc<dyn MessageSink>,
    localization: Arc<dyn LocalizationPort>,
    rules: Arc<EsserRules>,
}

impl RollSkill {
    pub fn new(
        actors: Arc<dyn ActorStore>,
        dice: Arc<dyn DiceDevice>,
        messages: Arc<dyn MessageSink>,
        localization: Arc<dyn LocalizationPort>,
        rules: Arc<EsserRules>,
    ) -> Self {
        Self {
            actors,
            dice,
            messages,
            localization,
            rules,
        }
    }

    /// Roll `skill` for an actor already in hand.
    ///
    /// `flavor` replaces the skill label in the published message.
    pub async fn execute(
        &self,
        actor: &Actor,
        skill: &str,
        flavor: Option<&str>,
    ) -> Result<RollOutcome, CheckError> {
        let modifier = self.modifier_for(actor, skill);
        let roll = self.dice.roll(&DiceFormula::d20(modifier.total)).await?;
        let outcome = RollOutcome::from_roll(roll);

        tracing::debug!(
            actor = %actor.name,
            skill = %skill,
            modifier = modifier.total,
            total = outcome.total,
            tier = outcome.tier.as_str(),
            "Skill check"
        );

        let flavor = match flavor.map(str::trim).filter(|f| !f.is_empty()) {
            Some(flavor) => flavor.to_string(),
            None => self.skill_label(skill),
        };
        let tier_label = localize_or(
            self.localization.as_ref(),
            &outcome.tier.label_key(),
            outcome.tier.default_label(),
        );
        let content = format!(
            "{} rolls {} (bonus {}) → {}\n{}",
            actor.name,
            flavor,
            modifier.describe(),
            tier_label,
            outcome.roll.breakdown()
        );

        self.messages
            .publish(
                ChatMessage::new(content)
                    .with_speaker(actor.name.clone())
                    .with_flavor(flavor)
                    .with_roll(outcome.roll.clone()),
            )
            .await?;

        Ok(outcome)
    }

    /// Load the actor, then roll.
    pub async fn execute_for(
        &self,
        actor_id: ActorId,
        skill: &str,
        flavor: Option<&str>,
    ) -> Result<RollOutcome, CheckError> {
        let actor = self
            .actors
            .get(actor_id)
            .await?
            .ok_or(CheckError::ActorNotFound(actor_id))?;
        self.execute(&actor, skill, flavor).await
    }

    pub fn modifier_for(&self, actor: &Actor, skill: &str) -> CheckModifier {
        match &actor.kind {
            ActorKind::Character(sheet) => self.character_modifier(sheet, skill),
            ActorKind::Npc(sheet) => npc_modifier(sheet, skill),
        }
    }

    fn character_modifier(&self, sheet: &CharacterSheet, skill: &str) -> CheckModifier {
        let mut modifier = CheckModifier::default();

        // Skills outside the attribute map contribute no attribute bonus.
        if let Some(key) = self.rules.attributes.attribute_for(skill) {
            let value = sheet
                .attributes
                .get(&key)
                .copied()
                .unwrap_or_else(|| self.rules.attributes.default_modifier(key));
            let fallback = self
                .rules
                .attributes
                .definition(key)
                .map(|def| def.label)
                .unwrap_or_else(|| key.as_str());
            let label = localize_or(self.localization.as_ref(), &key.label_key(), fallback);
            modifier.push(label, value);
        }

        let resolved = BonusResolver::new(&self.rules.ranks).resolve_opt(sheet.skills.get(skill));
        if resolved.found {
            modifier.push("Skill", resolved.bonus);
        }
        modifier
    }

    fn skill_label(&self, skill: &str) -> String {
        let fallback = self.rules.skills.label(skill).unwrap_or(skill);
        localize_or(self.localization.as_ref(), &skill_label_key(skill), fallback)
    }
}

fn npc_modifier(sheet: &NpcSheet, skill: &str) -> CheckModifier {
    let mut modifier = CheckModifier::default();
    modifier.push("Base", sheet.bonus);
    if let Some(slot) = sheet.focus.slots.find(skill) {
        modifier.push("Focus", slot.extra);
    }
    modifier
}

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("Actor not found: {0}")]
    ActorNotFound(ActorId),
    #[error("Dice error: {0}")]
    Dice(#[from] DiceError),
    #[error("Message error: {0}")]
    Message(#[from] MessageError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
