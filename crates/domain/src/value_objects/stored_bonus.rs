//! Stored skill bonuses and their resolution to a single integer.
//!
//! Sheets have stored skills as plain numbers, numeric strings, rank keywords
//! and small records (`{bonus: 1, rank: "skilled"}`) over time. All of them are
//! carried as [`StoredBonus`] and collapsed by [`BonusResolver`] before any
//! check arithmetic happens.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::game_systems::RankTable;

/// Record fields consulted, in priority order.
const RECORD_FIELDS: [&str; 4] = ["bonus", "value", "rank", "score"];

/// A skill bonus exactly as the actor store holds it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredBonus {
    #[default]
    Absent,
    Number(f64),
    Text(String),
    Record(BTreeMap<String, StoredBonus>),
    /// Arrays, booleans and anything else the store may contain
    Other(Value),
}

impl StoredBonus {
    pub fn number(value: impl Into<f64>) -> Self {
        Self::Number(value.into())
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn record<K: Into<String>>(fields: impl IntoIterator<Item = (K, StoredBonus)>) -> Self {
        Self::Record(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<&Value> for StoredBonus {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => StoredBonus::Absent,
            Value::Number(n) => n
                .as_f64()
                .map(StoredBonus::Number)
                .unwrap_or_else(|| StoredBonus::Other(value.clone())),
            Value::String(s) => StoredBonus::Text(s.clone()),
            Value::Object(fields) => StoredBonus::Record(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), StoredBonus::from(v)))
                    .collect(),
            ),
            Value::Bool(_) | Value::Array(_) => StoredBonus::Other(value.clone()),
        }
    }
}

impl From<Value> for StoredBonus {
    fn from(value: Value) -> Self {
        StoredBonus::from(&value)
    }
}

impl From<i32> for StoredBonus {
    fn from(value: i32) -> Self {
        StoredBonus::Number(value as f64)
    }
}

/// Outcome of resolving a stored bonus.
///
/// `found` is only used for display ("no rank set"); arithmetic always uses
/// `bonus`, which is 0 when nothing was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedBonus {
    pub bonus: i32,
    pub found: bool,
}

impl ResolvedBonus {
    pub fn found(bonus: i32) -> Self {
        Self { bonus, found: true }
    }

    pub fn not_found() -> Self {
        Self {
            bonus: 0,
            found: false,
        }
    }
}

/// Collapses any [`StoredBonus`] to an integer. Never fails.
#[derive(Debug, Clone, Copy)]
pub struct BonusResolver<'a> {
    ranks: &'a RankTable,
}

impl<'a> BonusResolver<'a> {
    pub fn new(ranks: &'a RankTable) -> Self {
        Self { ranks }
    }

    pub fn resolve(&self, value: &StoredBonus) -> ResolvedBonus {
        match value {
            StoredBonus::Absent => ResolvedBonus::not_found(),
            StoredBonus::Number(n) => finite_to_int(*n)
                .map(ResolvedBonus::found)
                .unwrap_or_else(ResolvedBonus::not_found),
            StoredBonus::Text(text) => self.resolve_text(text),
            StoredBonus::Record(fields) => self.resolve_record(fields),
            StoredBonus::Other(_) => ResolvedBonus::not_found(),
        }
    }

    /// Resolve an optional stored value (a missing skill entry).
    pub fn resolve_opt(&self, value: Option<&StoredBonus>) -> ResolvedBonus {
        value
            .map(|v| self.resolve(v))
            .unwrap_or_else(ResolvedBonus::not_found)
    }

    fn resolve_text(&self, text: &str) -> ResolvedBonus {
        let text = text.trim();
        if text.is_empty() {
            return ResolvedBonus::not_found();
        }
        if let Some(n) = text.parse::<f64>().ok().and_then(finite_to_int) {
            return ResolvedBonus::found(n);
        }
        self.ranks
            .value_for_keyword(&text.to_lowercase())
            .map(ResolvedBonus::found)
            .unwrap_or_else(ResolvedBonus::not_found)
    }

    // `bonus` accumulates and scanning continues; the first other field that
    // resolves ends the scan with accumulator + its value.
    fn resolve_record(&self, fields: &BTreeMap<String, StoredBonus>) -> ResolvedBonus {
        let mut accumulated: i32 = 0;
        let mut saw_bonus = false;

        for name in RECORD_FIELDS {
            let Some(field) = fields.get(name) else {
                continue;
            };
            let resolved = self.resolve(field);
            if !resolved.found {
                continue;
            }
            if name == "bonus" {
                accumulated = accumulated.saturating_add(resolved.bonus);
                saw_bonus = true;
            } else {
                return ResolvedBonus::found(accumulated.saturating_add(resolved.bonus));
            }
        }

        if saw_bonus {
            ResolvedBonus::found(accumulated)
        } else {
            ResolvedBonus::not_found()
        }
    }
}

fn finite_to_int(n: f64) -> Option<i32> {
    n.is_finite().then(|| n.trunc() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolve(value: Value) -> ResolvedBonus {
        let ranks = RankTable::standard();
        BonusResolver::new(&ranks).resolve(&StoredBonus::from(value))
    }

    #[test]
    fn numbers_resolve_to_themselves() {
        for n in [-7, -1, 0, 1, 3, 12] {
            assert_eq!(resolve(json!(n)), ResolvedBonus::found(n));
        }
    }

    #[test]
    fn non_finite_numbers_are_not_found() {
        let ranks = RankTable::standard();
        let resolver = BonusResolver::new(&ranks);
        assert_eq!(
            resolver.resolve(&StoredBonus::Number(f64::NAN)),
            ResolvedBonus::not_found()
        );
        assert_eq!(
            resolver.resolve(&StoredBonus::Number(f64::INFINITY)),
            ResolvedBonus::not_found()
        );
    }

    #[test]
    fn numeric_strings() {
        assert_eq!(resolve(json!("3")), ResolvedBonus::found(3));
        assert_eq!(resolve(json!(" +2 ")), ResolvedBonus::found(2));
        assert_eq!(resolve(json!("-1")), ResolvedBonus::found(-1));
        assert_eq!(resolve(json!("inf")), ResolvedBonus::not_found());
    }

    #[test]
    fn rank_keywords_in_any_case() {
        for (keyword, value) in [("untrained", 0), ("skilled", 2), ("expert", 4), ("master", 6)] {
            assert_eq!(resolve(json!(keyword)), ResolvedBonus::found(value));
            assert_eq!(
                resolve(json!(keyword.to_uppercase())),
                ResolvedBonus::found(value)
            );
        }
        assert_eq!(resolve(json!("Expert")), ResolvedBonus::found(4));
    }

    #[test]
    fn malformed_inputs_are_zero_and_not_found() {
        for value in [
            json!(null),
            json!(""),
            json!("   "),
            json!("grandmaster"),
            json!([1, 2]),
            json!(true),
            json!({}),
            json!({"level": 3}),
        ] {
            assert_eq!(resolve(value), ResolvedBonus::not_found());
        }
    }

    #[test]
    fn bonus_field_composes_with_rank() {
        assert_eq!(
            resolve(json!({"bonus": 1, "rank": "skilled"})),
            ResolvedBonus::found(3)
        );
    }

    #[test]
    fn bonus_alone_is_found() {
        assert_eq!(resolve(json!({"bonus": 2})), ResolvedBonus::found(2));
    }

    #[test]
    fn first_non_bonus_field_wins() {
        assert_eq!(
            resolve(json!({"value": 5, "rank": "master"})),
            ResolvedBonus::found(5)
        );
        assert_eq!(
            resolve(json!({"value": "x", "score": 4})),
            ResolvedBonus::found(4)
        );
        assert_eq!(
            resolve(json!({"bonus": "junk", "score": "1"})),
            ResolvedBonus::found(1)
        );
    }

    #[test]
    fn nested_records_resolve_recursively() {
        assert_eq!(
            resolve(json!({"bonus": {"value": 2}, "rank": "expert"})),
            ResolvedBonus::found(6)
        );
    }

    #[test]
    fn huge_values_saturate_instead_of_overflowing() {
        assert_eq!(
            resolve(json!({"bonus": 2e9, "rank": 2e9})),
            ResolvedBonus::found(i32::MAX)
        );
        assert_eq!(
            resolve(json!({"bonus": -2e9, "value": -2e9})),
            ResolvedBonus::found(i32::MIN)
        );
        assert_eq!(resolve(json!(1e10)), ResolvedBonus::found(i32::MAX));
    }

    #[test]
    fn missing_entry_is_not_found() {
        let ranks = RankTable::standard();
        assert_eq!(
            BonusResolver::new(&ranks).resolve_opt(None),
            ResolvedBonus::not_found()
        );
    }

    #[test]
    fn deserializes_from_store_json() {
        let stored: StoredBonus =
            serde_json::from_value(json!({"bonus": 1, "rank": "skilled"})).expect("valid");
        assert!(matches!(stored, StoredBonus::Record(_)));
        let stored: StoredBonus = serde_json::from_value(json!(null)).expect("valid");
        assert_eq!(stored, StoredBonus::Absent);
        let stored: StoredBonus = serde_json::from_value(json!([1])).expect("valid");
        assert!(matches!(stored, StoredBonus::Other(_)));
    }
}
