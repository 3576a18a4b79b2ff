//! Canonical skill rank keywords.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankDefinition {
    pub value: i32,
    pub keyword: String,
}

impl RankDefinition {
    pub fn new(value: i32, keyword: impl Into<String>) -> Self {
        Self {
            value,
            keyword: keyword.into(),
        }
    }
}

/// Keyword → bonus table used when a skill is stored as a rank name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTable {
    ranks: Vec<RankDefinition>,
}

impl RankTable {
    pub fn new(ranks: Vec<RankDefinition>) -> Self {
        Self { ranks }
    }

    /// untrained=0, skilled=2, expert=4, master=6
    pub fn standard() -> Self {
        Self::new(vec![
            RankDefinition::new(0, "untrained"),
            RankDefinition::new(2, "skilled"),
            RankDefinition::new(4, "expert"),
            RankDefinition::new(6, "master"),
        ])
    }

    pub fn value_for_keyword(&self, keyword: &str) -> Option<i32> {
        let keyword = keyword.trim();
        self.ranks
            .iter()
            .find(|rank| rank.keyword.eq_ignore_ascii_case(keyword))
            .map(|rank| rank.value)
    }
}

impl Default for RankTable {
    fn default() -> Self {
        Self::standard()
    }
}
