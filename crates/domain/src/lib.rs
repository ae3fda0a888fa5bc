pub mod dataset;
pub mod records;

pub use dataset::{ItemAssignment, SeedDataset, SpellAssignment};
pub use records::{
    name_lookup, CharacterSeed, CreatedRecord, CustomItemSeed, CustomSpellSeed, ItemTemplateSeed,
    SpellTemplateSeed, TemplateLookup,
};
