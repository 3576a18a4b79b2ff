//! NPC stat block import.
//!
//! Turns pasted text into a [`ParsedStatBlock`] using two grammars tried in
//! order, then a shared scan for labelled `Concept:` / `Trait:` lines.
//! A failed parse is not an error; [`looks_like_npc_stat_block`] tells the
//! caller whether the text was probably meant to be one.

mod grammar;

use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::entities::{ActorPatch, NpcSheet};
use crate::error::DomainError;
use crate::game_systems::DEFAULT_MAX_STRIKES;

pub use grammar::Grammar;

static DASH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[–—-]").expect("valid regex"));
static PARENTHETICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("valid regex"));
static ENGLISH_PARSER: LazyLock<StatBlockParser> = LazyLock::new(|| {
    StatBlockParser::new(&StatBlockLabels::default()).expect("valid regex")
});

/// Fields recovered from a stat block. Absent fields leave the actor as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedStatBlock {
    pub name: Option<String>,
    pub tier: Option<String>,
    pub bonus: Option<i32>,
    pub strikes: i32,
    pub max_strikes: Option<i32>,
    pub core_trait: Option<String>,
    pub concept: Option<String>,
}

impl ParsedStatBlock {
    /// Build the update for `npc`.
    ///
    /// Text fields and the bonus overwrite only when present. A parsed max is
    /// floored at 1. Strikes are always written, clamped against the parsed
    /// max, else the NPC's existing max, else [`DEFAULT_MAX_STRIKES`].
    pub fn patch_for(&self, npc: &NpcSheet) -> ActorPatch {
        let max_strikes = self.max_strikes.map(|max| max.max(1));
        let effective_max = max_strikes
            .or(npc.max_strikes)
            .unwrap_or(DEFAULT_MAX_STRIKES)
            .max(0);

        ActorPatch {
            name: self.name.clone(),
            strikes: Some(self.strikes.clamp(0, effective_max)),
            max_strikes,
            bonus: self.bonus,
            tier: self.tier.clone(),
            core_trait: self.core_trait.clone(),
            concept: self.concept.clone(),
            focus_slots: None,
        }
    }
}

/// Labels for the trailing `Concept:` and `Core Trait:` lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatBlockLabels {
    pub concept: String,
    pub core_trait: String,
}

impl Default for StatBlockLabels {
    fn default() -> Self {
        Self {
            concept: "Concept".to_string(),
            core_trait: "Core Trait".to_string(),
        }
    }
}

/// Parser bound to one set of labels.
#[derive(Debug, Clone)]
pub struct StatBlockParser {
    concept_re: Regex,
    core_trait_re: Regex,
}

impl StatBlockParser {
    pub fn new(labels: &StatBlockLabels) -> Result<Self, DomainError> {
        let concept_re = Regex::new(&format!(
            r"(?i)^{}\s*:\s*(.+)$",
            regex_lite::escape(labels.concept.trim())
        ))
        .map_err(|e| DomainError::parse(e.to_string()))?;
        let core_trait_re = Regex::new(&format!(
            r"(?i)^(?:{}|Trait)\s*:\s*(.+)$",
            regex_lite::escape(labels.core_trait.trim())
        ))
        .map_err(|e| DomainError::parse(e.to_string()))?;
        Ok(Self {
            concept_re,
            core_trait_re,
        })
    }

    /// Parse pasted text. `None` when neither grammar matches.
    pub fn parse(&self, text: &str) -> Option<ParsedStatBlock> {
        let normalized = normalize_line_endings(text);
        let lines = non_empty_lines(&normalized);
        if lines.is_empty() {
            return None;
        }

        let (grammar, mut parsed) = Grammar::ORDER
            .into_iter()
            .find_map(|grammar| grammar.attempt(&lines).map(|parsed| (grammar, parsed)))?;

        let trailing = &lines[1..];
        if let Some(concept) = first_capture(&self.concept_re, trailing) {
            parsed.concept = Some(concept);
        }
        if grammar.reads_trait_line() {
            if let Some(core_trait) = first_capture(&self.core_trait_re, trailing) {
                parsed.core_trait = Some(core_trait);
            }
        }

        Some(parsed)
    }
}

/// Parse with English labels.
pub fn parse_stat_block(text: &str) -> Option<ParsedStatBlock> {
    ENGLISH_PARSER.parse(text)
}

/// Whether `text` looks like it was meant to be a stat block.
///
/// Used only to decide if a failed parse deserves a warning.
pub fn looks_like_npc_stat_block(text: &str) -> bool {
    let normalized = normalize_line_endings(text);
    let Some(first) = non_empty_lines(&normalized).first().copied() else {
        return false;
    };
    let lower = normalized.to_lowercase();

    let summary_shaped =
        DASH_RE.is_match(first) && first.contains(',') && lower.contains("strikes");
    let alternate_shaped = PARENTHETICAL_RE.is_match(first) && lower.contains("strike");
    summary_shaped || alternate_shaped
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn non_empty_lines(text: &str) -> Vec<&str> {
    text.trim()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn first_capture(re: &Regex, lines: &[&str]) -> Option<String> {
    lines.iter().find_map(|line| {
        re.captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_summary_line() {
        let parsed = parse_stat_block("Grak the Brutal – Tier 2, +3, 2/4 Strikes, Relentless")
            .expect("parses");
        assert_eq!(
            parsed,
            ParsedStatBlock {
                name: Some("Grak the Brutal".to_string()),
                tier: Some("Tier 2".to_string()),
                bonus: Some(3),
                strikes: 2,
                max_strikes: Some(4),
                core_trait: Some("Relentless".to_string()),
                concept: None,
            }
        );
    }

    #[test]
    fn parses_alternate_block() {
        let parsed =
            parse_stat_block("Bandit (Tier 1)\n+2, 3+ Strikes\nTrait: Cowardly").expect("parses");
        assert_eq!(
            parsed,
            ParsedStatBlock {
                name: Some("Bandit".to_string()),
                tier: Some("Tier 1".to_string()),
                bonus: Some(2),
                strikes: 0,
                max_strikes: Some(3),
                core_trait: Some("Cowardly".to_string()),
                concept: None,
            }
        );
    }

    #[test]
    fn random_text_is_not_a_stat_block() {
        assert_eq!(parse_stat_block("random text"), None);
        assert!(!looks_like_npc_stat_block("random text"));
    }

    #[test]
    fn empty_text_is_none() {
        assert_eq!(parse_stat_block(""), None);
        assert_eq!(parse_stat_block(" \r\n \n"), None);
        assert!(!looks_like_npc_stat_block(""));
    }

    #[test]
    fn concept_line_applies_to_both_grammars() {
        let summary = parse_stat_block(
            "Grak – Tier 2, +3, 2/4 Strikes, Relentless\r\nconcept:  Exiled warlord ",
        )
        .expect("parses");
        assert_eq!(summary.concept.as_deref(), Some("Exiled warlord"));

        let alternate = parse_stat_block("Bandit (Tier 1)\r+2, 3+ Strikes\rConcept: Hungry")
            .expect("parses");
        assert_eq!(alternate.concept.as_deref(), Some("Hungry"));
    }

    #[test]
    fn trait_line_only_read_by_alternate_grammar() {
        let summary =
            parse_stat_block("Grak – Tier 2, +3, 2/4 Strikes, Relentless\nTrait: Ignored")
                .expect("parses");
        assert_eq!(summary.core_trait.as_deref(), Some("Relentless"));

        let alternate = parse_stat_block("Bandit (Tier 1)\n+2, 3+ Strikes\nCore Trait: Sly")
            .expect("parses");
        assert_eq!(alternate.core_trait.as_deref(), Some("Sly"));
    }

    #[test]
    fn localized_labels() {
        let parser = StatBlockParser::new(&StatBlockLabels {
            concept: "Konzept".to_string(),
            core_trait: "Kernmerkmal".to_string(),
        })
        .expect("valid");
        let parsed = parser
            .parse("Bandit (Stufe 1)\n+2, 3+ Strikes\nKONZEPT: Dieb\nKernmerkmal: Feige")
            .expect("parses");
        assert_eq!(parsed.concept.as_deref(), Some("Dieb"));
        assert_eq!(parsed.core_trait.as_deref(), Some("Feige"));
        assert!(parser.parse("Bandit (Stufe 1)\n+2, 3+ Strikes\nConcept: x")
            .and_then(|p| p.concept)
            .is_none());
    }

    #[test]
    fn heuristic_flags_near_misses() {
        assert!(looks_like_npc_stat_block("Grak – Tier 2, big, lots of strikes"));
        assert!(looks_like_npc_stat_block("Bandit (Tier 1)\nno strike info"));
        assert!(!looks_like_npc_stat_block("Grak – Tier 2, big"));
        assert!(!looks_like_npc_stat_block("Bandit (Tier 1)\nno info"));
    }

    #[test]
    fn patch_uses_parsed_max_floored_at_one() {
        let parsed = ParsedStatBlock {
            strikes: 2,
            max_strikes: Some(0),
            ..ParsedStatBlock::default()
        };
        let patch = parsed.patch_for(&NpcSheet::default());
        assert_eq!(patch.max_strikes, Some(1));
        assert_eq!(patch.strikes, Some(1));
    }

    #[test]
    fn patch_without_max_clamps_against_existing_max() {
        let parsed = ParsedStatBlock {
            strikes: 4,
            ..ParsedStatBlock::default()
        };
        let npc = NpcSheet::default().with_strikes(0, Some(5));
        let patch = parsed.patch_for(&npc);
        assert_eq!(patch.strikes, Some(4));
        assert_eq!(patch.max_strikes, None);

        let npc = NpcSheet::default().with_strikes(0, Some(2));
        assert_eq!(parsed.patch_for(&npc).strikes, Some(2));
    }

    #[test]
    fn patch_without_any_max_falls_back_to_three() {
        let parsed = ParsedStatBlock {
            strikes: 7,
            ..ParsedStatBlock::default()
        };
        assert_eq!(parsed.patch_for(&NpcSheet::default()).strikes, Some(3));
    }

    #[test]
    fn patch_leaves_absent_fields_alone() {
        let parsed = parse_stat_block("Bandit\n+2, 1 Strike").expect("parses");
        let patch = parsed.patch_for(&NpcSheet::default());
        assert_eq!(patch.name.as_deref(), Some("Bandit"));
        assert_eq!(patch.tier, None);
        assert_eq!(patch.core_trait, None);
        assert_eq!(patch.concept, None);
        assert_eq!(patch.bonus, Some(2));
        assert_eq!(patch.strikes, Some(1));
    }
}
