//! Run summary: created-record counts per category.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// True when the connectivity probe failed and nothing was attempted.
    pub aborted: bool,
    pub item_templates: usize,
    pub spell_templates: usize,
    pub characters: usize,
    pub items: usize,
    pub spells: usize,
}

impl SeedReport {
    pub fn aborted() -> Self {
        Self {
            aborted: true,
            ..Self::default()
        }
    }

    pub fn total(&self) -> usize {
        self.item_templates + self.spell_templates + self.characters + self.items + self.spells
    }

    /// Emits the per-category counts and the grand total.
    pub fn log_summary(&self) {
        tracing::info!("=== seeding summary ===");
        tracing::info!(count = self.item_templates, "item templates created");
        tracing::info!(count = self.spell_templates, "spell templates created");
        tracing::info!(count = self.characters, "characters created");
        tracing::info!(count = self.items, "items created");
        tracing::info!(count = self.spells, "spells created");
        tracing::info!(total = self.total(), "total records created");
    }
}
