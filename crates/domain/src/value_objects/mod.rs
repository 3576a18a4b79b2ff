//! Value objects - Immutable objects defined by their attributes

mod dice;
mod focus;
mod opposed;
mod outcome;
mod stored_bonus;
mod strikes;

pub use dice::{DiceFormula, DiceRollResult};
pub use focus::{FocusSlot, FocusSlots, FOCUS_SLOT_COUNT};
pub use opposed::{OpposedResult, OpposedTier, StrikePolicy, StrikeTarget};
pub use outcome::{OutcomeTier, RollOutcome};
pub use stored_bonus::{BonusResolver, ResolvedBonus, StoredBonus};
pub use strikes::StrikeTrack;
