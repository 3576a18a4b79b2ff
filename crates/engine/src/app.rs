//! Application state and composition.

use std::sync::Arc;

use esser_domain::EsserRules;

use crate::infrastructure::ports::{
    ActorStore, DiceDevice, LocalizationPort, MessageSink, NotificationSink,
};
use crate::use_cases::{
    AdjustStrikes, ImportStatBlock, NpcUseCases, OpposedCompare, RollSkill, RunOpposedTest,
    UpdateFocusSlots,
};

/// Main application state.
///
/// Holds the rules tables and every use case, wired to one set of ports.
pub struct App {
    pub rules: Arc<EsserRules>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub roll_skill: Arc<RollSkill>,
    pub opposed_compare: Arc<OpposedCompare>,
    pub run_opposed: Arc<RunOpposedTest>,
    pub adjust_strikes: Arc<AdjustStrikes>,
    pub npc: NpcUseCases,
}

/// Ports the host must supply.
pub struct Ports {
    pub actors: Arc<dyn ActorStore>,
    pub dice: Arc<dyn DiceDevice>,
    pub messages: Arc<dyn MessageSink>,
    pub notifications: Arc<dyn NotificationSink>,
    pub localization: Arc<dyn LocalizationPort>,
}

impl App {
    pub fn new(ports: Ports, rules: EsserRules) -> Self {
        let rules = Arc::new(rules);

        let roll_skill = Arc::new(RollSkill::new(
            ports.actors.clone(),
            ports.dice.clone(),
            ports.messages.clone(),
            ports.localization.clone(),
            rules.clone(),
        ));
        let opposed_compare = Arc::new(OpposedCompare::new(
            roll_skill.clone(),
            ports.messages.clone(),
            ports.localization.clone(),
        ));
        let adjust_strikes = Arc::new(AdjustStrikes::new(
            ports.actors.clone(),
            ports.notifications.clone(),
        ));
        let run_opposed = Arc::new(RunOpposedTest::new(
            ports.actors.clone(),
            opposed_compare.clone(),
            adjust_strikes.clone(),
            ports.notifications.clone(),
        ));
        let npc = NpcUseCases::new(
            Arc::new(ImportStatBlock::new(
                ports.actors.clone(),
                ports.notifications.clone(),
                ports.localization.clone(),
            )),
            Arc::new(UpdateFocusSlots::new(ports.actors.clone())),
        );

        Self {
            rules,
            use_cases: UseCases {
                roll_skill,
                opposed_compare,
                run_opposed,
                adjust_strikes,
                npc,
            },
        }
    }
}
