//! Skill keys and their built-in labels.

/// One skill on the character sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillDefinition {
    pub key: &'static str,
    pub label: &'static str,
}

const fn skill(key: &'static str, label: &'static str) -> SkillDefinition {
    SkillDefinition { key, label }
}

const STANDARD_SKILLS: [SkillDefinition; 23] = [
    skill("athletics", "Athletics"),
    skill("acrobatics", "Acrobatics"),
    skill("endurance", "Endurance"),
    skill("melee", "Melee"),
    skill("ranged", "Ranged"),
    skill("unarmed", "Unarmed"),
    skill("stealth", "Stealth"),
    skill("thievery", "Thievery"),
    skill("nature", "Nature"),
    skill("survival", "Survival"),
    skill("crafting", "Crafting"),
    skill("lore", "Lore"),
    skill("persuasion", "Persuasion"),
    skill("deception", "Deception"),
    skill("intimidation", "Intimidation"),
    skill("performance", "Performance"),
    skill("perception", "Perception"),
    skill("healing", "Healing"),
    skill("animal", "Animal Handling"),
    skill("spell_arcane", "Spellcasting (Arcane)"),
    skill("spell_divine", "Spellcasting (Divine)"),
    skill("spell_occult", "Spellcasting (Occult)"),
    skill("spell_primal", "Spellcasting (Primal)"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCatalog {
    skills: Vec<SkillDefinition>,
}

impl SkillCatalog {
    pub fn new(skills: Vec<SkillDefinition>) -> Self {
        Self { skills }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_SKILLS.to_vec())
    }

    pub fn label(&self, key: &str) -> Option<&'static str> {
        self.skills
            .iter()
            .find(|skill| skill.key == key)
            .map(|skill| skill.label)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.skills.iter().any(|skill| skill.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillDefinition> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Localization key for a skill label.
pub fn skill_label_key(key: &str) -> String {
    format!("ESSER.Skill.{}", key)
}
