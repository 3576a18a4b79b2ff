//! ESSER rules tables.
//!
//! Everything here is immutable configuration. The engine receives one
//! [`EsserRules`] at construction.
//!
//! - [`AttributeMap`]: the 4 attributes, their defaults and governed skills
//! - [`RankTable`]: the 4 rank keywords (untrained/skilled/expert/master)
//! - [`SkillCatalog`]: the 23 skill keys with built-in labels

mod attributes;
mod ranks;
mod skills;

pub use attributes::{AttributeDefinition, AttributeKey, AttributeMap};
pub use ranks::{RankDefinition, RankTable};
pub use skills::{skill_label_key, SkillCatalog, SkillDefinition};

/// Strike capacity used when neither the actor nor an import supplies one.
pub const DEFAULT_MAX_STRIKES: i32 = 3;

/// Complete rules configuration for one game.
#[derive(Debug, Clone)]
pub struct EsserRules {
    pub attributes: AttributeMap,
    pub ranks: RankTable,
    pub skills: SkillCatalog,
}

impl EsserRules {
    pub fn new(attributes: AttributeMap, ranks: RankTable, skills: SkillCatalog) -> Self {
        Self {
            attributes,
            ranks,
            skills,
        }
    }

    pub fn standard() -> Self {
        Self::new(
            AttributeMap::standard(),
            RankTable::standard(),
            SkillCatalog::standard(),
        )
    }
}

impl Default for EsserRules {
    fn default() -> Self {
        Self::standard()
    }
}
