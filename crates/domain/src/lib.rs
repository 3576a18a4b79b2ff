//! ESSER rules core.
//!
//! Pure domain logic: rules tables, bonus resolution, outcome ladders, the
//! opposed test, NPC focus slots and the stat block parser. No I/O lives here;
//! the engine crate wires these into use cases behind ports.

pub mod entities;
pub mod error;
pub mod game_systems;
pub mod ids;
pub mod stat_block;
pub mod value_objects;

pub use entities::{Actor, ActorKind, ActorPatch, CharacterSheet, NpcFocus, NpcSheet};
pub use error::DomainError;
pub use game_systems::{
    skill_label_key, AttributeDefinition, AttributeKey, AttributeMap, EsserRules,
    RankDefinition, RankTable, SkillCatalog, SkillDefinition, DEFAULT_MAX_STRIKES,
};
pub use ids::ActorId;
pub use stat_block::{
    looks_like_npc_stat_block, parse_stat_block, Grammar, ParsedStatBlock, StatBlockLabels,
    StatBlockParser,
};
pub use value_objects::{
    BonusResolver, DiceFormula, DiceRollResult, FocusSlot, FocusSlots, OpposedResult,
    OpposedTier, OutcomeTier, ResolvedBonus, RollOutcome, StoredBonus, StrikePolicy,
    StrikeTarget, StrikeTrack, FOCUS_SLOT_COUNT,
};
