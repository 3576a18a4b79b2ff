//! NPC use cases.
//!
//! Handles stat block import and focus slot edits.

use std::sync::Arc;

use esser_domain::{
    looks_like_npc_stat_block, ActorId, ActorPatch, DomainError, FocusSlots, ParsedStatBlock,
    StatBlockLabels, StatBlockParser,
};
use serde_json::Value;

use crate::infrastructure::localization::{localize_or, CONCEPT_LABEL_KEY, CORE_TRAIT_LABEL_KEY};
use crate::infrastructure::ports::{
    ActorStore, LocalizationPort, Notification, NotificationSink, RepoError,
};

pub const UNPARSEABLE_WARNING: &str = "Could not parse the NPC stat block.";
pub const SAVE_FAILED_ERROR: &str = "Could not save the imported stat block.";

/// Container for NPC use cases.
pub struct NpcUseCases {
    pub import_stat_block: Arc<ImportStatBlock>,
    pub update_focus: Arc<UpdateFocusSlots>,
}

impl NpcUseCases {
    pub fn new(
        import_stat_block: Arc<ImportStatBlock>,
        update_focus: Arc<UpdateFocusSlots>,
    ) -> Self {
        Self {
            import_stat_block,
            update_focus,
        }
    }
}

/// What an import did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    Imported {
        parsed: ParsedStatBlock,
        patch: ActorPatch,
    },
    /// Neither grammar matched. `warned` is set when the text looked like a
    /// stat block and the user was told.
    Unrecognized { warned: bool },
}

/// Import pasted stat block text into an NPC.
pub struct ImportStatBlock {
    actors: Arc<dyn ActorStore>,
    notifications: Arc<dyn NotificationSink>,
    localization: Arc<dyn LocalizationPort>,
}

impl ImportStatBlock {
    pub fn new(
        actors: Arc<dyn ActorStore>,
        notifications: Arc<dyn NotificationSink>,
        localization: Arc<dyn LocalizationPort>,
    ) -> Self {
        Self {
            actors,
            notifications,
            localization,
        }
    }

    pub async fn execute(
        &self,
        actor_id: ActorId,
        text: &str,
    ) -> Result<ImportOutcome, ImportError> {
        let actor = self
            .actors
            .get(actor_id)
            .await?
            .ok_or(ImportError::NotFound(actor_id))?;
        let npc = actor
            .as_npc()
            .map_err(|_| ImportError::NotAnNpc(actor_id))?;

        let parser = StatBlockParser::new(&self.labels())?;
        let Some(parsed) = parser.parse(text) else {
            let warned = looks_like_npc_stat_block(text);
            if warned {
                self.notifications.notify(Notification::warning(UNPARSEABLE_WARNING));
            }
            tracing::debug!(actor_id = %actor_id, warned, "Stat block not recognized");
            return Ok(ImportOutcome::Unrecognized { warned });
        };

        let patch = parsed.patch_for(npc);
        if let Err(e) = self.actors.update(actor_id, &patch).await {
            tracing::error!(actor_id = %actor_id, error = %e, "Failed to save stat block");
            self.notifications.notify(Notification::error(SAVE_FAILED_ERROR));
            return Err(e.into());
        }

        let name = patch.name.as_deref().unwrap_or(&actor.name);
        tracing::info!(actor_id = %actor_id, npc = %name, "Imported stat block");
        self.notifications
            .notify(Notification::info(format!("Imported stat block for {}.", name)));

        Ok(ImportOutcome::Imported { parsed, patch })
    }

    fn labels(&self) -> StatBlockLabels {
        let defaults = StatBlockLabels::default();
        StatBlockLabels {
            concept: localize_or(self.localization.as_ref(), CONCEPT_LABEL_KEY, &defaults.concept),
            core_trait: localize_or(
                self.localization.as_ref(),
                CORE_TRAIT_LABEL_KEY,
                &defaults.core_trait,
            ),
        }
    }
}

/// Replace an NPC's focus slots from raw sheet input.
pub struct UpdateFocusSlots {
    actors: Arc<dyn ActorStore>,
}

impl UpdateFocusSlots {
    pub fn new(actors: Arc<dyn ActorStore>) -> Self {
        Self { actors }
    }

    /// Normalizes `raw` to exactly four slots before writing.
    pub async fn execute(
        &self,
        actor_id: ActorId,
        raw: &[Value],
    ) -> Result<FocusSlots, ImportError> {
        let actor = self
            .actors
            .get(actor_id)
            .await?
            .ok_or(ImportError::NotFound(actor_id))?;
        actor
            .as_npc()
            .map_err(|_| ImportError::NotAnNpc(actor_id))?;

        let slots = FocusSlots::normalize(raw);
        let patch = ActorPatch {
            focus_slots: Some(slots.clone()),
            ..ActorPatch::default()
        };
        self.actors.update(actor_id, &patch).await?;
        Ok(slots)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Actor not found: {0}")]
    NotFound(ActorId),
    #[error("Actor {0} is not an NPC")]
    NotAnNpc(ActorId),
    #[error("Invalid stat block labels: {0}")]
    Labels(#[from] DomainError),
    #[error("Persistence failed: {0}")]
    Persistence(#[from] RepoError),
}

#[cfg(test)]
mod tests {
    use super::*;

    use esser_domain::{Actor, CharacterSheet, FocusSlot, NpcSheet};
    use serde_json::json;

    use crate::infrastructure::localization::StaticLocalizer;
    use crate::infrastructure::ports::{MockActorStore, MockNotificationSink, NotificationLevel};

    fn store_serving(actor: Actor) -> MockActorStore {
        let mut actors = MockActorStore::new();
        actors
            .expect_get()
            .returning(move |_| Ok(Some(actor.clone())));
        actors
    }

    fn import(actors: MockActorStore, notifications: MockNotificationSink) -> ImportStatBlock {
        ImportStatBlock::new(
            Arc::new(actors),
            Arc::new(notifications),
            Arc::new(StaticLocalizer::default()),
        )
    }

    #[tokio::test]
    async fn imports_summary_line() {
        let actor = Actor::npc("New NPC", NpcSheet::default());
        let id = actor.id;
        let mut actors = store_serving(actor);
        actors
            .expect_update()
            .withf(move |got, patch| {
                *got == id
                    && patch.name.as_deref() == Some("Grak the Brutal")
                    && patch.tier.as_deref() == Some("Tier 2")
                    && patch.bonus == Some(3)
                    && patch.strikes == Some(2)
                    && patch.max_strikes == Some(4)
                    && patch.core_trait.as_deref() == Some("Relentless")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let mut notifications = MockNotificationSink::new();
        notifications
            .expect_notify()
            .withf(|n| n.level == NotificationLevel::Info && n.text.contains("Grak the Brutal"))
            .times(1)
            .return_const(());

        let outcome = import(actors, notifications)
            .execute(id, "Grak the Brutal – Tier 2, +3, 2/4 Strikes, Relentless")
            .await
            .expect("import succeeds");
        assert!(matches!(outcome, ImportOutcome::Imported { .. }));
    }

    #[tokio::test]
    async fn clamps_against_existing_max_when_parse_has_none() {
        let actor = Actor::npc("Bandit", NpcSheet::default().with_strikes(0, Some(2)));
        let id = actor.id;
        let mut actors = store_serving(actor);
        actors
            .expect_update()
            .withf(|_, patch| patch.strikes == Some(2) && patch.max_strikes.is_none())
            .times(1)
            .returning(|_, _| Ok(()));
        let mut notifications = MockNotificationSink::new();
        notifications.expect_notify().return_const(());

        import(actors, notifications)
            .execute(id, "Bandit (Tier 1)\n+2, 5 Strikes")
            .await
            .expect("import succeeds");
    }

    #[tokio::test]
    async fn near_miss_warns() {
        let actor = Actor::npc("Bandit", NpcSheet::default());
        let id = actor.id;
        let mut actors = store_serving(actor);
        actors.expect_update().never();
        let mut notifications = MockNotificationSink::new();
        notifications
            .expect_notify()
            .withf(|n| n.level == NotificationLevel::Warning && n.text == UNPARSEABLE_WARNING)
            .times(1)
            .return_const(());

        let outcome = import(actors, notifications)
            .execute(id, "Grak – Tier 2, tough, lots of strikes")
            .await
            .expect("import returns");
        assert_eq!(outcome, ImportOutcome::Unrecognized { warned: true });
    }

    #[tokio::test]
    async fn random_text_is_silent() {
        let actor = Actor::npc("Bandit", NpcSheet::default());
        let id = actor.id;
        let mut actors = store_serving(actor);
        actors.expect_update().never();
        let mut notifications = MockNotificationSink::new();
        notifications.expect_notify().never();

        let outcome = import(actors, notifications)
            .execute(id, "random text")
            .await
            .expect("import returns");
        assert_eq!(outcome, ImportOutcome::Unrecognized { warned: false });
    }

    #[tokio::test]
    async fn characters_are_rejected() {
        let actor = Actor::character("Ana", CharacterSheet::default());
        let id = actor.id;
        let mut actors = store_serving(actor);
        actors.expect_update().never();

        let err = import(actors, MockNotificationSink::new())
            .execute(id, "Bandit (Tier 1)\n+2, 3+ Strikes")
            .await
            .expect_err("not an npc");
        assert!(matches!(err, ImportError::NotAnNpc(_)));
    }

    #[tokio::test]
    async fn persistence_failure_reports_error_and_propagates() {
        let actor = Actor::npc("Bandit", NpcSheet::default());
        let id = actor.id;
        let mut actors = store_serving(actor);
        actors
            .expect_update()
            .returning(|_, _| Err(RepoError::database("update", "offline")));
        let mut notifications = MockNotificationSink::new();
        notifications
            .expect_notify()
            .withf(|n| n.level == NotificationLevel::Error && n.text == SAVE_FAILED_ERROR)
            .times(1)
            .return_const(());

        let err = import(actors, notifications)
            .execute(id, "Bandit (Tier 1)\n+2, 3+ Strikes")
            .await
            .expect_err("store failure");
        assert!(matches!(err, ImportError::Persistence(_)));
    }

    #[tokio::test]
    async fn localized_concept_label_is_used() {
        let actor = Actor::npc("Bandit", NpcSheet::default());
        let id = actor.id;
        let mut actors = store_serving(actor);
        actors
            .expect_update()
            .withf(|_, patch| patch.concept.as_deref() == Some("Dieb"))
            .times(1)
            .returning(|_, _| Ok(()));
        let mut notifications = MockNotificationSink::new();
        notifications.expect_notify().return_const(());

        let use_case = ImportStatBlock::new(
            Arc::new(actors),
            Arc::new(notifications),
            Arc::new(StaticLocalizer::default().with_entry(CONCEPT_LABEL_KEY, "Konzept")),
        );
        use_case
            .execute(id, "Bandit (Tier 1)\n+2, 3+ Strikes\nKonzept: Dieb")
            .await
            .expect("import succeeds");
    }

    #[tokio::test]
    async fn focus_update_normalizes_to_four_slots() {
        let actor = Actor::npc("Bandit", NpcSheet::default());
        let id = actor.id;
        let mut actors = store_serving(actor);
        actors
            .expect_update()
            .withf(|_, patch| patch.focus_slots.is_some())
            .times(1)
            .returning(|_, _| Ok(()));

        let slots = UpdateFocusSlots::new(Arc::new(actors))
            .execute(id, &[json!({"skill": "stealth", "extra": "2"}), json!(null)])
            .await
            .expect("update succeeds");

        assert_eq!(slots.slots().len(), 4);
        assert_eq!(slots.slots()[0], FocusSlot::new("stealth", 2));
        assert!(slots.slots()[1].is_empty());
        assert_eq!(slots.extra_for("stealth"), 2);
    }
}
