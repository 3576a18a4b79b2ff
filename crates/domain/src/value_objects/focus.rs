//! NPC focus slots: exactly four skill → situational bonus bindings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const FOCUS_SLOT_COUNT: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusSlot {
    #[serde(default)]
    pub skill: Option<String>,
    #[serde(default)]
    pub extra: i32,
}

impl FocusSlot {
    pub fn new(skill: impl Into<String>, extra: i32) -> Self {
        let skill = skill.into();
        Self {
            skill: (!skill.trim().is_empty()).then(|| skill.trim().to_string()),
            extra,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.skill.is_none()
    }

    /// Map one stored element; anything unreadable becomes an empty slot.
    fn from_stored(value: &Value) -> Self {
        let skill = value
            .get("skill")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let extra = value.get("extra").and_then(stored_int).unwrap_or(0);
        Self { skill, extra }
    }
}

fn stored_int(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .filter(|f| f.is_finite())
            .map(|f| f.trunc() as i32),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|f| f.trunc() as i32),
        _ => None,
    }
}

/// The fixed-length slot sequence stored at `focus.slots`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FocusSlots([FocusSlot; FOCUS_SLOT_COUNT]);

impl FocusSlots {
    /// Normalize raw stored elements: pad with empty slots or keep the first
    /// four, preserving order.
    pub fn normalize(raw: &[Value]) -> Self {
        Self::from_slots(raw.iter().map(FocusSlot::from_stored))
    }

    pub fn from_slots(slots: impl IntoIterator<Item = FocusSlot>) -> Self {
        let mut normalized: [FocusSlot; FOCUS_SLOT_COUNT] = Default::default();
        for (target, slot) in normalized.iter_mut().zip(slots) {
            *target = slot;
        }
        Self(normalized)
    }

    /// First slot bound to `skill`.
    pub fn find(&self, skill: &str) -> Option<&FocusSlot> {
        self.0.iter().find(|slot| slot.skill.as_deref() == Some(skill))
    }

    /// Situational bonus for `skill`, 0 when no slot matches.
    pub fn extra_for(&self, skill: &str) -> i32 {
        self.find(skill).map(|slot| slot.extra).unwrap_or(0)
    }

    pub fn slots(&self) -> &[FocusSlot; FOCUS_SLOT_COUNT] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &FocusSlot> {
        self.0.iter()
    }
}
