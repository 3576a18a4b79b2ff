//! The two stat block grammars.
//!
//! Each grammar gets the trimmed, non-empty lines and either produces a
//! [`ParsedStatBlock`] or declines. The caller tries them in order.

use std::sync::LazyLock;

use regex_lite::Regex;

use super::ParsedStatBlock;

/// `<name> <dash> <remainder>`; the dash must be surrounded by whitespace.
static SUMMARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s+[–—-]\s+(.+)$").expect("valid regex"));
static SIGNED_INT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[+-]?\d+").expect("valid regex"));
static STRIKE_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)strikes?").expect("valid regex"));
static STRIKE_FRACTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)(?:\s*/\s*(\d+))?").expect("valid regex"));
/// `<name> (<tier>)`
static NAME_TIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*\(([^)]*)\)\s*$").expect("valid regex"));
/// `3 Strikes` or `3+ Strikes`
static STRIKE_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*(\+)?\s*strikes?").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// `Grak – Tier 2, +3, 2/4 Strikes, Relentless`
    Summary,
    /// `Bandit (Tier 1)` followed by a `+2, 3+ Strikes` line
    Alternate,
}

impl Grammar {
    pub const ORDER: [Grammar; 2] = [Grammar::Summary, Grammar::Alternate];

    pub fn attempt(self, lines: &[&str]) -> Option<ParsedStatBlock> {
        match self {
            Grammar::Summary => parse_summary(lines),
            Grammar::Alternate => parse_alternate(lines),
        }
    }

    /// Only the alternate grammar reads a trait from a labelled line.
    pub fn reads_trait_line(self) -> bool {
        matches!(self, Grammar::Alternate)
    }
}

fn first_int(text: &str) -> Option<i32> {
    SIGNED_INT_RE
        .find(text)
        .and_then(|m| m.as_str().parse::<i32>().ok())
}

fn parse_summary(lines: &[&str]) -> Option<ParsedStatBlock> {
    let first = lines.first()?;
    let caps = SUMMARY_RE.captures(first)?;
    let name = caps.get(1)?.as_str().trim();
    let remainder = caps.get(2)?.as_str();

    let mut segments = remainder
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let tier = segments.next()?;
    let bonus_segment = segments.next()?;
    let strikes_segment = segments.next()?;
    let rest: Vec<&str> = segments.collect();

    let bonus = first_int(bonus_segment)?;

    let strikes_text = STRIKE_WORD_RE.replace_all(strikes_segment, "");
    let fraction = STRIKE_FRACTION_RE.captures(&strikes_text)?;
    let strikes = fraction.get(1)?.as_str().parse::<i32>().ok()?;
    let max_strikes = fraction
        .get(2)
        .and_then(|m| m.as_str().parse::<i32>().ok());

    Some(ParsedStatBlock {
        name: Some(name.to_string()),
        tier: Some(tier.to_string()),
        bonus: Some(bonus),
        strikes,
        max_strikes,
        core_trait: (!rest.is_empty()).then(|| rest.join(", ")),
        concept: None,
    })
}

fn parse_alternate(lines: &[&str]) -> Option<ParsedStatBlock> {
    let first = lines.first()?;
    let (name, tier) = match NAME_TIER_RE.captures(first) {
        Some(caps) => (
            caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default(),
            caps.get(2)
                .map(|m| m.as_str().trim())
                .filter(|t| !t.is_empty()),
        ),
        None => (first.trim(), None),
    };

    let strike_line = lines
        .iter()
        .skip(1)
        .find(|line| line.to_lowercase().contains("strike"))?;
    let bonus = first_int(strike_line)?;

    let (strikes, max_strikes) = match STRIKE_COUNT_RE.captures(strike_line) {
        Some(caps) => {
            let count = caps.get(1).and_then(|m| m.as_str().parse::<i32>().ok());
            if caps.get(2).is_some() {
                (0, count)
            } else {
                (count.unwrap_or(0), None)
            }
        }
        None => (0, None),
    };

    Some(ParsedStatBlock {
        name: (!name.is_empty()).then(|| name.to_string()),
        tier: tier.map(str::to_string),
        bonus: Some(bonus),
        strikes,
        max_strikes,
        core_trait: None,
        concept: None,
    })
}
