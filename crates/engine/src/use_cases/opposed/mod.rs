//! Opposed test use cases.
//!
//! `OpposedCompare` rolls both sides and classifies the difference.
//! `RunOpposedTest` is the table-side flow: it checks the selection, runs the
//! comparison, then hands out a strike according to a [`StrikePolicy`].

use std::sync::Arc;

use esser_domain::{Actor, ActorId, OpposedResult, StrikePolicy, StrikeTarget};

use crate::infrastructure::localization::localize_or;
use crate::infrastructure::ports::{
    ActorStore, ChatMessage, LocalizationPort, MessageError, MessageSink, Notification,
    NotificationSink, RepoError,
};
use crate::use_cases::skill_check::{CheckError, RollSkill};
use crate::use_cases::strikes::{AdjustStrikes, StrikeChange, StrikeError};

pub const ATTACKER_FLAVOR: &str = "Opposed – Attacker";
pub const DEFENDER_FLAVOR: &str = "Opposed – Defender";
pub const SELECT_TWO_WARNING: &str = "Select exactly TWO tokens: attacker then defender.";

/// Compare two checks. Applies no strikes.
pub struct OpposedCompare {
    roll_skill: Arc<RollSkill>,
    messages: Arc<dyn MessageSink>,
    localization: Arc<dyn LocalizationPort>,
}

impl OpposedCompare {
    pub fn new(
        roll_skill: Arc<RollSkill>,
        messages: Arc<dyn MessageSink>,
        localization: Arc<dyn LocalizationPort>,
    ) -> Self {
        Self {
            roll_skill,
            messages,
            localization,
        }
    }

    pub async fn execute(
        &self,
        attacker: &Actor,
        defender: &Actor,
        skill: &str,
    ) -> Result<OpposedResult, OpposedError> {
        let attack = self
            .roll_skill
            .execute(attacker, skill, Some(ATTACKER_FLAVOR))
            .await?;
        let defense = self
            .roll_skill
            .execute(defender, skill, Some(DEFENDER_FLAVOR))
            .await?;

        let result = OpposedResult::new(attack, defense);
        let label = localize_or(
            self.localization.as_ref(),
            &result.tier.label_key(),
            result.tier.default_label(),
        );

        tracing::debug!(
            attacker = %attacker.name,
            defender = %defender.name,
            skill = %skill,
            diff = result.diff,
            tier = result.tier.as_str(),
            "Opposed test"
        );

        self.messages
            .publish(ChatMessage::new(format!(
                "Opposed Result: {} Δ = {} (A:{} vs D:{})",
                label, result.diff, result.attacker.total, result.defender.total
            )))
            .await?;

        Ok(result)
    }
}

/// Outcome of a full opposed run.
#[derive(Debug, Clone)]
pub struct OpposedRun {
    pub result: OpposedResult,
    /// Strike handed out by the policy, if any.
    pub strike: Option<StrikeChange>,
}

/// Opposed test over a selection of actors, with strike follow-up.
pub struct RunOpposedTest {
    actors: Arc<dyn ActorStore>,
    compare: Arc<OpposedCompare>,
    adjust_strikes: Arc<AdjustStrikes>,
    notifications: Arc<dyn NotificationSink>,
    policy: StrikePolicy,
}

impl RunOpposedTest {
    pub fn new(
        actors: Arc<dyn ActorStore>,
        compare: Arc<OpposedCompare>,
        adjust_strikes: Arc<AdjustStrikes>,
        notifications: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            actors,
            compare,
            adjust_strikes,
            notifications,
            policy: StrikePolicy::standard(),
        }
    }

    /// `selected` must hold exactly the attacker then the defender.
    pub async fn execute(
        &self,
        selected: &[ActorId],
        skill: &str,
    ) -> Result<OpposedRun, OpposedError> {
        let (attacker, defender) = match self.load_pair(selected).await? {
            Some(pair) => pair,
            None => {
                self.notifications.notify(Notification::warning(SELECT_TWO_WARNING));
                return Err(OpposedError::MissingOpponent);
            }
        };

        let result = self.compare.execute(&attacker, &defender, skill).await?;

        let struck = match self.policy.target_for(result.diff) {
            Some(StrikeTarget::Defender) => Some(defender.id),
            Some(StrikeTarget::Attacker) => Some(attacker.id),
            None => None,
        };
        let strike = match struck {
            Some(id) => Some(self.adjust_strikes.execute(id, 1).await?),
            None => None,
        };

        Ok(OpposedRun { result, strike })
    }

    async fn load_pair(
        &self,
        selected: &[ActorId],
    ) -> Result<Option<(Actor, Actor)>, OpposedError> {
        let [attacker_id, defender_id] = selected else {
            return Ok(None);
        };
        let Some(attacker) = self.actors.get(*attacker_id).await? else {
            return Ok(None);
        };
        let Some(defender) = self.actors.get(*defender_id).await? else {
            return Ok(None);
        };
        Ok(Some((attacker, defender)))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OpposedError {
    #[error("An opposed test needs exactly two actors")]
    MissingOpponent,
    #[error("Check failed: {0}")]
    Check(#[from] CheckError),
    #[error("Message error: {0}")]
    Message(#[from] MessageError),
    #[error("Strike update failed: {0}")]
    Strike(#[from] StrikeError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
