//! The seed dataset: every record the seeder creates, as plain data.
//!
//! Seed content is deliberately decoupled from the seeding control flow so
//! tests can drive the orchestrator with fixtures of arbitrary size. The
//! built-in [`SeedDataset::sample`] fixture is the canonical demo set.

use crate::records::{
    CharacterSeed, CustomItemSeed, CustomSpellSeed, ItemTemplateSeed, SpellTemplateSeed,
};

/// One item to instantiate from a template for a named character.
#[derive(Debug, Clone)]
pub struct ItemAssignment {
    pub character: String,
    pub template: String,
}

impl ItemAssignment {
    pub fn new(character: &str, template: &str) -> Self {
        Self {
            character: character.to_string(),
            template: template.to_string(),
        }
    }
}

/// The spell templates to instantiate for a named character.
#[derive(Debug, Clone)]
pub struct SpellAssignment {
    pub character: String,
    pub spells: Vec<String>,
}

impl SpellAssignment {
    pub fn new(character: &str, spells: &[&str]) -> Self {
        Self {
            character: character.to_string(),
            spells: spells.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Everything one seeding run creates, in creation order.
#[derive(Debug, Clone, Default)]
pub struct SeedDataset {
    pub item_templates: Vec<ItemTemplateSeed>,
    pub spell_templates: Vec<SpellTemplateSeed>,
    pub characters: Vec<CharacterSeed>,
    pub item_assignments: Vec<ItemAssignment>,
    pub spell_assignments: Vec<SpellAssignment>,
    pub custom_items: Vec<CustomItemSeed>,
    pub custom_spells: Vec<CustomSpellSeed>,
}

impl SeedDataset {
    /// The built-in demo dataset: a Tolkien-flavoured party with a spread
    /// of weapons, armor, accessories, and 5e-style spells.
    pub fn sample() -> Self {
        Self {
            item_templates: sample_item_templates(),
            spell_templates: sample_spell_templates(),
            characters: sample_characters(),
            item_assignments: sample_item_assignments(),
            spell_assignments: sample_spell_assignments(),
            custom_items: sample_custom_items(),
            custom_spells: sample_custom_spells(),
        }
    }
}

fn sample_item_templates() -> Vec<ItemTemplateSeed> {
    vec![
        // Weapons
        ItemTemplateSeed::new(
            "Longsword of Might",
            "A finely crafted longsword that enhances the wielder's strength.",
            "Weapon",
        )
        .strength(2),
        ItemTemplateSeed::new(
            "Dagger of Stealth",
            "A sharp dagger that improves the wielder's dexterity and stealth.",
            "Weapon",
        )
        .dexterity(3),
        ItemTemplateSeed::new(
            "Staff of Wisdom",
            "An ancient staff that boosts the wielder's wisdom and magical insight.",
            "Weapon",
        )
        .wisdom(2)
        .intelligence(1),
        ItemTemplateSeed::new(
            "War Hammer",
            "A heavy war hammer that increases strength significantly.",
            "Weapon",
        )
        .strength(3),
        // Armor
        ItemTemplateSeed::new(
            "Plate Mail of Protection",
            "Heavy armor that provides excellent protection.",
            "Armor",
        )
        .armor(8)
        .constitution(1),
        ItemTemplateSeed::new(
            "Leather Armor of Agility",
            "Light leather armor that enhances mobility.",
            "Armor",
        )
        .armor(3)
        .dexterity(2),
        ItemTemplateSeed::new(
            "Robe of the Arcane",
            "Magical robes that enhance spellcasting abilities.",
            "Armor",
        )
        .armor(1)
        .intelligence(3)
        .wisdom(1),
        ItemTemplateSeed::new(
            "Chainmail Vest",
            "Medium armor providing balanced protection.",
            "Armor",
        )
        .armor(5),
        // Accessories
        ItemTemplateSeed::new(
            "Ring of Charisma",
            "A beautiful ring that enhances the wearer's charm and presence.",
            "Accessory",
        )
        .charisma(3),
        ItemTemplateSeed::new(
            "Amulet of Health",
            "A protective amulet that boosts constitution and vitality.",
            "Accessory",
        )
        .constitution(2),
        ItemTemplateSeed::new(
            "Boots of Speed",
            "Enchanted boots that increase movement speed and agility.",
            "Accessory",
        )
        .dexterity(2),
        ItemTemplateSeed::new(
            "Cloak of Resistance",
            "A mystical cloak that provides minor bonuses to multiple attributes.",
            "Accessory",
        )
        .strength(1)
        .dexterity(1)
        .constitution(1),
        ItemTemplateSeed::new(
            "Gauntlets of Power",
            "Heavy gauntlets that significantly boost strength.",
            "Accessory",
        )
        .strength(4),
    ]
}

fn sample_spell_templates() -> Vec<SpellTemplateSeed> {
    vec![
        // Cantrips
        SpellTemplateSeed::new(
            "Fire Bolt",
            "A mote of fire streaks toward a creature or object within range.",
            0,
        )
        .damage("1d10")
        .range("120 feet"),
        SpellTemplateSeed::new(
            "Mage Hand",
            "A spectral, floating hand appears at a point you choose within range.",
            0,
        )
        .school("Conjuration")
        .range("30 feet")
        .duration("1 minute"),
        SpellTemplateSeed::new(
            "Minor Illusion",
            "You create a sound or an image of an object within range.",
            0,
        )
        .school("Illusion")
        .range("30 feet")
        .components("S, M")
        .duration("1 minute"),
        SpellTemplateSeed::new(
            "Eldritch Blast",
            "A crackling beam of energy streaks toward a creature within range.",
            0,
        )
        .damage("1d10")
        .range("120 feet"),
        // Level 1
        SpellTemplateSeed::new(
            "Magic Missile",
            "Three glowing darts of magical force strike your target.",
            1,
        )
        .damage("1d4+1")
        .range("120 feet"),
        SpellTemplateSeed::new(
            "Healing Word",
            "A creature you can see within range regains hit points.",
            1,
        )
        .damage("1d4+mod")
        .casting_time("1 bonus action")
        .range("60 feet")
        .components("V"),
        SpellTemplateSeed::new(
            "Shield",
            "An invisible barrier of magical force appears and protects you.",
            1,
        )
        .school("Abjuration")
        .casting_time("1 reaction")
        .range("Self")
        .duration("1 round"),
        SpellTemplateSeed::new(
            "Cure Light Wounds",
            "You touch a creature and restore hit points.",
            1,
        )
        .damage("1d8+mod"),
        // Higher level
        SpellTemplateSeed::new(
            "Fireball",
            "A bright streak flashes from your pointing finger to a point within range and \
             blossoms into an explosion of flame.",
            3,
        )
        .damage("8d6")
        .range("150 feet")
        .components("V, S, M"),
        SpellTemplateSeed::new(
            "Lightning Bolt",
            "A stroke of lightning forming a line 100 feet long and 5 feet wide blasts out \
             from you.",
            3,
        )
        .damage("8d6")
        .range("Self (100-foot line)")
        .components("V, S, M"),
        SpellTemplateSeed::new(
            "Invisibility",
            "A creature you touch becomes invisible until the spell ends.",
            2,
        )
        .school("Illusion")
        .components("V, S, M")
        .duration("Concentration, up to 1 hour"),
    ]
}

fn sample_characters() -> Vec<CharacterSeed> {
    vec![
        CharacterSeed {
            name: "Gandalf the Grey".to_string(),
            class_name: "Wizard".to_string(),
            level: 15,
            armor_class: 12,
            strength: 10,
            dexterity: 11,
            constitution: 12,
            intelligence: 20,
            wisdom: 18,
            charisma: 16,
        },
        CharacterSeed {
            name: "Aragorn".to_string(),
            class_name: "Ranger".to_string(),
            level: 12,
            armor_class: 18,
            strength: 16,
            dexterity: 18,
            constitution: 15,
            intelligence: 14,
            wisdom: 16,
            charisma: 14,
        },
        CharacterSeed {
            name: "Legolas".to_string(),
            class_name: "Ranger".to_string(),
            level: 10,
            armor_class: 16,
            strength: 12,
            dexterity: 20,
            constitution: 14,
            intelligence: 13,
            wisdom: 18,
            charisma: 15,
        },
        CharacterSeed {
            name: "Gimli".to_string(),
            class_name: "Fighter".to_string(),
            level: 11,
            armor_class: 20,
            strength: 18,
            dexterity: 10,
            constitution: 18,
            intelligence: 10,
            wisdom: 12,
            charisma: 11,
        },
        CharacterSeed {
            name: "Merlin".to_string(),
            class_name: "Wizard".to_string(),
            level: 20,
            armor_class: 14,
            strength: 8,
            dexterity: 12,
            constitution: 14,
            intelligence: 20,
            wisdom: 19,
            charisma: 17,
        },
        CharacterSeed {
            name: "Robin Hood".to_string(),
            class_name: "Rogue".to_string(),
            level: 8,
            armor_class: 15,
            strength: 12,
            dexterity: 20,
            constitution: 13,
            intelligence: 14,
            wisdom: 16,
            charisma: 15,
        },
        CharacterSeed {
            name: "Conan".to_string(),
            class_name: "Barbarian".to_string(),
            level: 9,
            armor_class: 16,
            strength: 20,
            dexterity: 16,
            constitution: 18,
            intelligence: 10,
            wisdom: 11,
            charisma: 12,
        },
        CharacterSeed {
            name: "Elara Moonwhisper".to_string(),
            class_name: "Cleric".to_string(),
            level: 7,
            armor_class: 17,
            strength: 13,
            dexterity: 11,
            constitution: 15,
            intelligence: 14,
            wisdom: 20,
            charisma: 16,
        },
    ]
}

fn sample_item_assignments() -> Vec<ItemAssignment> {
    vec![
        ItemAssignment::new("Gandalf the Grey", "Staff of Wisdom"),
        ItemAssignment::new("Gandalf the Grey", "Robe of the Arcane"),
        ItemAssignment::new("Aragorn", "Longsword of Might"),
        ItemAssignment::new("Aragorn", "Leather Armor of Agility"),
        ItemAssignment::new("Legolas", "Dagger of Stealth"),
        ItemAssignment::new("Legolas", "Boots of Speed"),
        ItemAssignment::new("Gimli", "War Hammer"),
        ItemAssignment::new("Gimli", "Plate Mail of Protection"),
        ItemAssignment::new("Merlin", "Staff of Wisdom"),
        ItemAssignment::new("Merlin", "Cloak of Resistance"),
        ItemAssignment::new("Robin Hood", "Dagger of Stealth"),
        ItemAssignment::new("Robin Hood", "Leather Armor of Agility"),
        ItemAssignment::new("Conan", "Gauntlets of Power"),
        ItemAssignment::new("Conan", "Chainmail Vest"),
        ItemAssignment::new("Elara Moonwhisper", "Amulet of Health"),
        ItemAssignment::new("Elara Moonwhisper", "Ring of Charisma"),
    ]
}

fn sample_spell_assignments() -> Vec<SpellAssignment> {
    vec![
        SpellAssignment::new(
            "Gandalf the Grey",
            &[
                "Fire Bolt",
                "Mage Hand",
                "Magic Missile",
                "Shield",
                "Fireball",
                "Lightning Bolt",
                "Invisibility",
            ],
        ),
        SpellAssignment::new(
            "Merlin",
            &[
                "Fire Bolt",
                "Minor Illusion",
                "Eldritch Blast",
                "Magic Missile",
                "Fireball",
                "Lightning Bolt",
            ],
        ),
        SpellAssignment::new(
            "Elara Moonwhisper",
            &["Minor Illusion", "Healing Word", "Cure Light Wounds"],
        ),
        SpellAssignment::new("Aragorn", &["Healing Word"]),
        SpellAssignment::new("Legolas", &["Cure Light Wounds"]),
    ]
}

fn sample_custom_items() -> Vec<CustomItemSeed> {
    vec![
        CustomItemSeed::new(
            "Gandalf the Grey",
            "Ancient Spellbook",
            "A weathered tome containing ancient magical knowledge.",
        )
        .intelligence(2)
        .wisdom(1),
        CustomItemSeed::new("Legolas", "Elven Bow", "A masterfully crafted elven longbow.")
            .dexterity(3),
        CustomItemSeed::new(
            "Gimli",
            "Dwarven Ale Mug",
            "A sturdy mug that boosts morale and constitution.",
        )
        .constitution(1)
        .charisma(1),
    ]
}

fn sample_custom_spells() -> Vec<CustomSpellSeed> {
    vec![
        CustomSpellSeed::new(
            "Gandalf the Grey",
            "Gandalf's Light",
            "Creates a brilliant light that banishes darkness and fear.",
        )
        .damage("3d6"),
        CustomSpellSeed::new(
            "Aragorn",
            "Nature's Blessing",
            "Calls upon nature to heal and protect allies.",
        )
        .damage("2d8+mod"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_record_counts() {
        let dataset = SeedDataset::sample();

        assert_eq!(dataset.item_templates.len(), 13);
        assert_eq!(dataset.spell_templates.len(), 11);
        assert_eq!(dataset.characters.len(), 8);
        assert_eq!(dataset.item_assignments.len(), 16);
        assert_eq!(dataset.spell_assignments.len(), 5);
        assert_eq!(dataset.custom_items.len(), 3);
        assert_eq!(dataset.custom_spells.len(), 2);

        let spell_count: usize = dataset.spell_assignments.iter().map(|a| a.spells.len()).sum();
        assert_eq!(spell_count, 18);
    }

    #[test]
    fn sample_names_are_unique_per_collection() {
        let dataset = SeedDataset::sample();

        let templates: HashSet<_> = dataset.item_templates.iter().map(|t| &t.name).collect();
        assert_eq!(templates.len(), dataset.item_templates.len());

        let spells: HashSet<_> = dataset.spell_templates.iter().map(|t| &t.name).collect();
        assert_eq!(spells.len(), dataset.spell_templates.len());

        let characters: HashSet<_> = dataset.characters.iter().map(|c| &c.name).collect();
        assert_eq!(characters.len(), dataset.characters.len());
    }

    #[test]
    fn sample_assignments_reference_known_records() {
        let dataset = SeedDataset::sample();
        let characters: HashSet<_> = dataset.characters.iter().map(|c| c.name.clone()).collect();
        let item_templates: HashSet<_> =
            dataset.item_templates.iter().map(|t| t.name.clone()).collect();
        let spell_templates: HashSet<_> =
            dataset.spell_templates.iter().map(|t| t.name.clone()).collect();

        for assignment in &dataset.item_assignments {
            assert!(characters.contains(&assignment.character), "{}", assignment.character);
            assert!(item_templates.contains(&assignment.template), "{}", assignment.template);
        }
        for assignment in &dataset.spell_assignments {
            assert!(characters.contains(&assignment.character), "{}", assignment.character);
            for spell in &assignment.spells {
                assert!(spell_templates.contains(spell), "{spell}");
            }
        }
        for item in &dataset.custom_items {
            assert!(characters.contains(&item.owner), "{}", item.owner);
        }
        for spell in &dataset.custom_spells {
            assert!(characters.contains(&spell.owner), "{}", spell.owner);
        }
    }
}
