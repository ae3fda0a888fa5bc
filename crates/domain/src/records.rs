//! Seed record types matching the Character Sheet Manager API DTOs.
//!
//! Request bodies serialize with camelCase field names to match the
//! backend's JSON conventions. Optional bonus fields are omitted from the
//! payload entirely when unset rather than sent as `null`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A reusable item definition (weapon, armor, or accessory) from which
/// concrete items are instantiated via the from-template endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTemplateSeed {
    pub name: String,
    pub effect: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength_bonus: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dexterity_bonus: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constitution_bonus: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intelligence_bonus: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wisdom_bonus: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charisma_bonus: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub armor_bonus: Option<i32>,
    pub category: String,
    pub is_active: bool,
}

impl ItemTemplateSeed {
    pub fn new(name: impl Into<String>, effect: impl Into<String>, category: &str) -> Self {
        Self {
            name: name.into(),
            effect: effect.into(),
            strength_bonus: None,
            dexterity_bonus: None,
            constitution_bonus: None,
            intelligence_bonus: None,
            wisdom_bonus: None,
            charisma_bonus: None,
            armor_bonus: None,
            category: category.to_string(),
            is_active: true,
        }
    }

    pub fn strength(mut self, bonus: i32) -> Self {
        self.strength_bonus = Some(bonus);
        self
    }

    pub fn dexterity(mut self, bonus: i32) -> Self {
        self.dexterity_bonus = Some(bonus);
        self
    }

    pub fn constitution(mut self, bonus: i32) -> Self {
        self.constitution_bonus = Some(bonus);
        self
    }

    pub fn intelligence(mut self, bonus: i32) -> Self {
        self.intelligence_bonus = Some(bonus);
        self
    }

    pub fn wisdom(mut self, bonus: i32) -> Self {
        self.wisdom_bonus = Some(bonus);
        self
    }

    pub fn charisma(mut self, bonus: i32) -> Self {
        self.charisma_bonus = Some(bonus);
        self
    }

    pub fn armor(mut self, bonus: i32) -> Self {
        self.armor_bonus = Some(bonus);
        self
    }
}

/// A reusable spell definition (D&D 5e style cantrips and leveled spells).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellTemplateSeed {
    pub name: String,
    pub effect: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<String>,
    pub level: i32,
    pub school: String,
    pub casting_time: String,
    pub range: String,
    pub components: String,
    pub duration: String,
    pub is_active: bool,
}

impl SpellTemplateSeed {
    pub fn new(name: impl Into<String>, effect: impl Into<String>, level: i32) -> Self {
        Self {
            name: name.into(),
            effect: effect.into(),
            damage: None,
            level,
            school: "Evocation".to_string(),
            casting_time: "1 action".to_string(),
            range: "Touch".to_string(),
            components: "V, S".to_string(),
            duration: "Instantaneous".to_string(),
            is_active: true,
        }
    }

    pub fn damage(mut self, dice: &str) -> Self {
        self.damage = Some(dice.to_string());
        self
    }

    pub fn school(mut self, school: &str) -> Self {
        self.school = school.to_string();
        self
    }

    pub fn casting_time(mut self, time: &str) -> Self {
        self.casting_time = time.to_string();
        self
    }

    pub fn range(mut self, range: &str) -> Self {
        self.range = range.to_string();
        self
    }

    pub fn components(mut self, components: &str) -> Self {
        self.components = components.to_string();
        self
    }

    pub fn duration(mut self, duration: &str) -> Self {
        self.duration = duration.to_string();
        self
    }
}

/// A playable character with D&D ability scores.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSeed {
    pub name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub level: i32,
    pub armor_class: i32,
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

/// A one-off item created directly (not from a template), owned by a
/// character referenced by name. The server id of the owner is injected at
/// creation time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomItemSeed {
    /// Name of the owning character; resolved to a server id before POST.
    #[serde(skip)]
    pub owner: String,
    pub name: String,
    pub effect: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength_bonus: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dexterity_bonus: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constitution_bonus: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intelligence_bonus: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wisdom_bonus: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charisma_bonus: Option<i32>,
}

impl CustomItemSeed {
    pub fn new(owner: &str, name: impl Into<String>, effect: impl Into<String>) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.into(),
            effect: effect.into(),
            strength_bonus: None,
            dexterity_bonus: None,
            constitution_bonus: None,
            intelligence_bonus: None,
            wisdom_bonus: None,
            charisma_bonus: None,
        }
    }

    pub fn dexterity(mut self, bonus: i32) -> Self {
        self.dexterity_bonus = Some(bonus);
        self
    }

    pub fn constitution(mut self, bonus: i32) -> Self {
        self.constitution_bonus = Some(bonus);
        self
    }

    pub fn intelligence(mut self, bonus: i32) -> Self {
        self.intelligence_bonus = Some(bonus);
        self
    }

    pub fn wisdom(mut self, bonus: i32) -> Self {
        self.wisdom_bonus = Some(bonus);
        self
    }

    pub fn charisma(mut self, bonus: i32) -> Self {
        self.charisma_bonus = Some(bonus);
        self
    }
}

/// A one-off spell created directly for a named character.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSpellSeed {
    #[serde(skip)]
    pub owner: String,
    pub name: String,
    pub effect: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<String>,
}

impl CustomSpellSeed {
    pub fn new(owner: &str, name: impl Into<String>, effect: impl Into<String>) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.into(),
            effect: effect.into(),
            damage: None,
        }
    }

    pub fn damage(mut self, dice: &str) -> Self {
        self.damage = Some(dice.to_string());
        self
    }
}

/// The slice of a creation response the seeder cares about: the
/// server-assigned id plus the record name used for later lookups.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedRecord {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// Mapping from record display name to server-assigned id.
pub type TemplateLookup = HashMap<String, i64>;

/// Builds a name-to-id lookup from a batch of creation responses.
///
/// One entry per created record; duplicate names keep the last id seen,
/// matching the backend's own uniqueness expectations.
pub fn name_lookup(records: &[CreatedRecord]) -> TemplateLookup {
    records
        .iter()
        .map(|r| (r.name.clone(), r.id))
        .collect()
}
