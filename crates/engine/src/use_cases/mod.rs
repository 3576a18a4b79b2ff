//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific rules area.

pub mod npc;
pub mod opposed;
pub mod skill_check;
pub mod strikes;

pub use npc::{ImportError, ImportOutcome, ImportStatBlock, NpcUseCases, UpdateFocusSlots};
pub use opposed::{OpposedCompare, OpposedError, OpposedRun, RunOpposedTest};
pub use skill_check::{CheckError, CheckModifier, ModifierPart, RollSkill};
pub use strikes::{AdjustStrikes, StrikeChange, StrikeError};
