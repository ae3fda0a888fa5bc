//! The seeding pipeline.
//!
//! Five strictly sequential phases: connectivity probe, optional clear,
//! template creation, character creation, dependent-record creation.
//! Each phase consumes the previous phase's output because server-assigned
//! ids only exist once creation responses arrive. A single record failing
//! never stops the batch; only a failed connectivity probe is fatal.

pub mod report;

pub use report::SeedReport;

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde_json::{json, Value};

use charseed_domain::{
    name_lookup, CharacterSeed, CreatedRecord, SeedDataset, TemplateLookup,
};

use crate::infrastructure::{ApiPort, Method};

/// Collections cleared before reseeding, dependents first so the backend
/// never sees a dangling template or character reference.
pub const COLLECTIONS: [&str; 5] = [
    "spells",
    "items",
    "characters",
    "spelltemplates",
    "itemtemplates",
];

pub struct Seeder {
    api: Arc<dyn ApiPort>,
    throttle: Duration,
}

impl Seeder {
    pub fn new(api: Arc<dyn ApiPort>, throttle: Duration) -> Self {
        Self { api, throttle }
    }

    /// Runs the full pipeline against `dataset` and reports what was created.
    pub async fn run(&self, dataset: &SeedDataset, clear: bool) -> SeedReport {
        if self.call(Method::Get, "characters", None).await.is_none() {
            tracing::error!("cannot reach the API, aborting before any records are created");
            return SeedReport::aborted();
        }
        tracing::info!("API connection successful");

        if clear {
            self.clear_collections().await;
        }

        let item_templates = self
            .create_batch("itemtemplates", &dataset.item_templates, "item template", |t| {
                &t.name
            })
            .await;
        let spell_templates = self
            .create_batch(
                "spelltemplates",
                &dataset.spell_templates,
                "spell template",
                |t| &t.name,
            )
            .await;
        let characters = self.seed_characters(&dataset.characters).await;

        let character_lookup = name_lookup(&characters);
        let item_template_lookup = name_lookup(&item_templates);
        let spell_template_lookup = name_lookup(&spell_templates);

        let items = self
            .seed_items(dataset, &character_lookup, &item_template_lookup)
            .await;
        let spells = self
            .seed_spells(dataset, &character_lookup, &spell_template_lookup)
            .await;

        SeedReport {
            aborted: false,
            item_templates: item_templates.len(),
            spell_templates: spell_templates.len(),
            characters: characters.len(),
            items,
            spells,
        }
    }

    /// The uniform failure signal: any request error is logged and becomes
    /// `None`, so callers never see a per-record failure as an error value.
    async fn call(&self, method: Method, endpoint: &str, body: Option<Value>) -> Option<Value> {
        match self.api.request(method, endpoint, body).await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(%method, endpoint, error = %e, "request yielded no result");
                None
            }
        }
    }

    async fn pause(&self) {
        if !self.throttle.is_zero() {
            tokio::time::sleep(self.throttle).await;
        }
    }

    /// Enumerates and deletes every record in each target collection.
    /// A failed delete is logged and skipped; the phase never halts.
    async fn clear_collections(&self) {
        tracing::info!("clearing existing records");
        for collection in COLLECTIONS {
            let Some(existing) = self.call(Method::Get, collection, None).await else {
                tracing::warn!(collection, "could not enumerate collection, skipping clear");
                continue;
            };
            let Some(records) = existing.as_array() else {
                continue;
            };
            for record in records {
                let Some(id) = record.get("id").and_then(Value::as_i64) else {
                    tracing::warn!(collection, "record without an id, skipping delete");
                    continue;
                };
                let endpoint = format!("{collection}/{id}");
                if self.call(Method::Delete, &endpoint, None).await.is_none() {
                    tracing::warn!(collection, id, "failed to delete record");
                }
            }
        }
    }

    /// POSTs each seed to `endpoint`, collecting the server responses that
    /// carry an assigned id. Failures are logged per record and skipped.
    async fn create_batch<T: Serialize>(
        &self,
        endpoint: &str,
        seeds: &[T],
        label: &str,
        name_of: impl Fn(&T) -> &str,
    ) -> Vec<CreatedRecord> {
        let mut created = Vec::with_capacity(seeds.len());
        for seed in seeds {
            let name = name_of(seed);
            let Ok(body) = serde_json::to_value(seed) else {
                tracing::warn!(label, name, "could not serialize seed record");
                continue;
            };
            match self.call(Method::Post, endpoint, Some(body)).await {
                Some(response) => {
                    match serde_json::from_value::<CreatedRecord>(response) {
                        Ok(record) => {
                            tracing::info!(label, name, id = record.id, "created");
                            created.push(record);
                        }
                        Err(e) => {
                            // Without an id the record cannot join the lookups.
                            tracing::warn!(label, name, error = %e, "creation response lacked an id");
                        }
                    }
                    self.pause().await;
                }
                None => tracing::warn!(label, name, "failed to create"),
            }
        }
        created
    }

    async fn seed_characters(&self, seeds: &[CharacterSeed]) -> Vec<CreatedRecord> {
        tracing::info!("creating characters");
        let mut created = Vec::with_capacity(seeds.len());
        for seed in seeds {
            let Ok(body) = serde_json::to_value(seed) else {
                tracing::warn!(name = %seed.name, "could not serialize character");
                continue;
            };
            match self.call(Method::Post, "characters", Some(body)).await {
                Some(response) => {
                    match serde_json::from_value::<CreatedRecord>(response) {
                        Ok(record) => {
                            tracing::info!(
                                name = %seed.name,
                                class = %seed.class_name,
                                level = seed.level,
                                id = record.id,
                                "created character"
                            );
                            created.push(record);
                        }
                        Err(e) => {
                            tracing::warn!(name = %seed.name, error = %e, "creation response lacked an id");
                        }
                    }
                    self.pause().await;
                }
                None => tracing::warn!(name = %seed.name, "failed to create character"),
            }
        }
        created
    }

    /// Creates from-template items for each assignment, then the custom
    /// items. An unresolvable character or template name skips that single
    /// assignment without affecting the rest.
    async fn seed_items(
        &self,
        dataset: &SeedDataset,
        characters: &TemplateLookup,
        templates: &TemplateLookup,
    ) -> usize {
        tracing::info!("creating items");
        if characters.is_empty() || templates.is_empty() {
            tracing::warn!("no characters or item templates available for item creation");
            return 0;
        }

        let mut count = 0;
        for assignment in &dataset.item_assignments {
            let Some(&character_id) = characters.get(&assignment.character) else {
                continue;
            };
            let Some(&template_id) = templates.get(&assignment.template) else {
                continue;
            };
            let body = json!({
                "itemTemplateId": template_id,
                "characterId": character_id,
            });
            match self.call(Method::Post, "items/from-template", Some(body)).await {
                Some(_) => {
                    count += 1;
                    tracing::info!(
                        item = %assignment.template,
                        character = %assignment.character,
                        "created item"
                    );
                    self.pause().await;
                }
                None => tracing::warn!(item = %assignment.template, "failed to create item"),
            }
        }

        for item in &dataset.custom_items {
            let Some(&character_id) = characters.get(&item.owner) else {
                continue;
            };
            let Ok(mut body) = serde_json::to_value(item) else {
                tracing::warn!(item = %item.name, "could not serialize custom item");
                continue;
            };
            if let Value::Object(map) = &mut body {
                map.insert("characterId".to_string(), json!(character_id));
            }
            match self.call(Method::Post, "items", Some(body)).await {
                Some(_) => {
                    count += 1;
                    tracing::info!(item = %item.name, "created custom item");
                    self.pause().await;
                }
                None => tracing::warn!(item = %item.name, "failed to create custom item"),
            }
        }

        count
    }

    /// Creates from-template spells for each assignment, then the custom
    /// spells. Unknown spell names skip that single spell only.
    async fn seed_spells(
        &self,
        dataset: &SeedDataset,
        characters: &TemplateLookup,
        templates: &TemplateLookup,
    ) -> usize {
        tracing::info!("creating spells");
        if characters.is_empty() || templates.is_empty() {
            tracing::warn!("no characters or spell templates available for spell creation");
            return 0;
        }

        let mut count = 0;
        for assignment in &dataset.spell_assignments {
            let Some(&character_id) = characters.get(&assignment.character) else {
                continue;
            };
            for spell_name in &assignment.spells {
                let Some(&template_id) = templates.get(spell_name) else {
                    continue;
                };
                let body = json!({
                    "spellTemplateId": template_id,
                    "characterId": character_id,
                });
                match self.call(Method::Post, "spells/from-template", Some(body)).await {
                    Some(_) => {
                        count += 1;
                        tracing::info!(
                            spell = %spell_name,
                            character = %assignment.character,
                            "created spell"
                        );
                        self.pause().await;
                    }
                    None => tracing::warn!(
                        spell = %spell_name,
                        character = %assignment.character,
                        "failed to create spell"
                    ),
                }
            }
        }

        for spell in &dataset.custom_spells {
            let Some(&character_id) = characters.get(&spell.owner) else {
                continue;
            };
            let Ok(mut body) = serde_json::to_value(spell) else {
                tracing::warn!(spell = %spell.name, "could not serialize custom spell");
                continue;
            };
            if let Value::Object(map) = &mut body {
                map.insert("characterId".to_string(), json!(character_id));
            }
            match self.call(Method::Post, "spells", Some(body)).await {
                Some(_) => {
                    count += 1;
                    tracing::info!(spell = %spell.name, "created custom spell");
                    self.pause().await;
                }
                None => tracing::warn!(spell = %spell.name, "failed to create custom spell"),
            }
        }

        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use charseed_domain::{CharacterSeed, ItemAssignment, ItemTemplateSeed};

    use crate::infrastructure::ApiError;

    #[derive(Debug, Clone)]
    struct RecordedCall {
        method: Method,
        endpoint: String,
        body: Option<Value>,
    }

    /// Mock backend: records every call, assigns sequential ids to POSTed
    /// records, and can be configured to refuse the probe, pre-populate
    /// collections, or fail creations by record name.
    struct RecordingApi {
        calls: Mutex<Vec<RecordedCall>>,
        next_id: AtomicI64,
        fail_probe: bool,
        fail_deletes: bool,
        existing: HashMap<String, Vec<i64>>,
        fail_names: HashSet<String>,
    }

    impl RecordingApi {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                next_id: AtomicI64::new(1),
                fail_probe: false,
                fail_deletes: false,
                existing: HashMap::new(),
                fail_names: HashSet::new(),
            }
        }

        fn with_probe_failure() -> Self {
            Self {
                fail_probe: true,
                ..Self::new()
            }
        }

        fn with_existing(collection: &str, ids: &[i64]) -> Self {
            let mut api = Self::new();
            api.existing.insert(collection.to_string(), ids.to_vec());
            api
        }

        fn failing_deletes(mut self) -> Self {
            self.fail_deletes = true;
            self
        }

        fn failing_name(mut self, name: &str) -> Self {
            self.fail_names.insert(name.to_string());
            self
        }

        fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().expect("calls lock").clone()
        }

        fn calls_matching(&self, method: Method, endpoint: &str) -> Vec<RecordedCall> {
            self.calls()
                .into_iter()
                .filter(|c| c.method == method && c.endpoint == endpoint)
                .collect()
        }
    }

    #[async_trait]
    impl ApiPort for RecordingApi {
        async fn request(
            &self,
            method: Method,
            endpoint: &str,
            body: Option<Value>,
        ) -> Result<Value, ApiError> {
            self.calls.lock().expect("calls lock").push(RecordedCall {
                method,
                endpoint: endpoint.to_string(),
                body: body.clone(),
            });

            match method {
                Method::Get => {
                    if self.fail_probe {
                        return Err(ApiError::Transport("connection refused".into()));
                    }
                    let ids = self.existing.get(endpoint).cloned().unwrap_or_default();
                    let records: Vec<Value> = ids.iter().map(|id| json!({"id": id})).collect();
                    Ok(Value::Array(records))
                }
                Method::Post => {
                    let name = body
                        .as_ref()
                        .and_then(|b| b.get("name"))
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string();
                    if self.fail_names.contains(&name) {
                        return Err(ApiError::Status {
                            status: 500,
                            body: "boom".into(),
                        });
                    }
                    let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                    Ok(json!({"id": id, "name": name}))
                }
                Method::Delete => {
                    if self.fail_deletes {
                        return Err(ApiError::Status {
                            status: 500,
                            body: "delete refused".into(),
                        });
                    }
                    Ok(Value::Null)
                }
            }
        }
    }

    fn seeder(api: Arc<RecordingApi>) -> Seeder {
        Seeder::new(api, Duration::ZERO)
    }

    fn minimal_dataset() -> SeedDataset {
        SeedDataset {
            item_templates: vec![
                ItemTemplateSeed::new("Longsword of Might", "Enhances strength.", "Weapon")
                    .strength(2),
                ItemTemplateSeed::new("Staff of Wisdom", "Boosts wisdom.", "Weapon").wisdom(2),
            ],
            characters: vec![CharacterSeed {
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
            }],
            item_assignments: vec![ItemAssignment::new("Aragorn", "Staff of Wisdom")],
            ..SeedDataset::default()
        }
    }

    #[tokio::test]
    async fn probe_failure_aborts_before_any_creation() {
        let api = Arc::new(RecordingApi::with_probe_failure());
        let report = seeder(api.clone()).run(&SeedDataset::sample(), true).await;

        assert!(report.aborted);
        assert_eq!(report.total(), 0);

        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, Method::Get);
        assert_eq!(calls[0].endpoint, "characters");
    }

    #[tokio::test]
    async fn from_template_post_references_looked_up_ids() {
        let api = Arc::new(RecordingApi::new());
        let report = seeder(api.clone()).run(&minimal_dataset(), false).await;

        // Creation order gives Longsword id 1, Staff id 2, Aragorn id 3.
        let posts = api.calls_matching(Method::Post, "items/from-template");
        assert_eq!(posts.len(), 1);
        let body = posts[0].body.as_ref().expect("from-template body");
        assert_eq!(body["itemTemplateId"], 2);
        assert_eq!(body["characterId"], 3);
        assert_eq!(report.items, 1);
    }

    #[tokio::test]
    async fn unresolvable_assignment_is_skipped_and_later_ones_execute() {
        let mut dataset = minimal_dataset();
        dataset.item_assignments = vec![
            ItemAssignment::new("Boromir", "Staff of Wisdom"),
            ItemAssignment::new("Aragorn", "Palantir"),
            ItemAssignment::new("Aragorn", "Longsword of Might"),
        ];

        let api = Arc::new(RecordingApi::new());
        let report = seeder(api.clone()).run(&dataset, false).await;

        let posts = api.calls_matching(Method::Post, "items/from-template");
        assert_eq!(posts.len(), 1);
        let body = posts[0].body.as_ref().expect("from-template body");
        assert_eq!(body["itemTemplateId"], 1);
        assert_eq!(report.items, 1);
    }

    #[tokio::test]
    async fn clear_issues_one_get_and_one_delete_per_record() {
        let api = Arc::new(RecordingApi::with_existing("items", &[4, 5, 6]));
        seeder(api.clone()).run(&SeedDataset::default(), true).await;

        assert_eq!(api.calls_matching(Method::Get, "items").len(), 1);
        for id in [4, 5, 6] {
            let endpoint = format!("items/{id}");
            assert_eq!(api.calls_matching(Method::Delete, &endpoint).len(), 1);
        }
        // The other collections are enumerated but hold nothing to delete.
        assert_eq!(api.calls_matching(Method::Get, "spells").len(), 1);
        assert!(api.calls_matching(Method::Delete, "spells/4").is_empty());
    }

    #[tokio::test]
    async fn clear_continues_past_failed_deletes() {
        let api = Arc::new(RecordingApi::with_existing("items", &[4, 5, 6]).failing_deletes());
        let report = seeder(api.clone()).run(&minimal_dataset(), true).await;

        // Every record is still attempted even though no delete succeeds.
        assert_eq!(api.calls_matching(Method::Get, "items").len(), 1);
        for id in [4, 5, 6] {
            let endpoint = format!("items/{id}");
            assert_eq!(api.calls_matching(Method::Delete, &endpoint).len(), 1);
        }
        // The run itself carries on into the creation phases.
        assert!(!report.aborted);
        assert_eq!(report.item_templates, 2);
        assert_eq!(report.characters, 1);
    }

    #[tokio::test]
    async fn failed_creation_does_not_stop_the_batch() {
        let api = Arc::new(RecordingApi::new().failing_name("Longsword of Might"));
        let report = seeder(api.clone()).run(&minimal_dataset(), false).await;

        assert_eq!(report.item_templates, 1);
        assert_eq!(report.characters, 1);
        // Staff of Wisdom still created and still resolvable by the assignment.
        let posts = api.calls_matching(Method::Post, "items/from-template");
        assert_eq!(posts.len(), 1);
    }

    #[tokio::test]
    async fn sample_dataset_creates_every_record() {
        let api = Arc::new(RecordingApi::new());
        let report = seeder(api.clone()).run(&SeedDataset::sample(), false).await;

        assert!(!report.aborted);
        assert_eq!(report.item_templates, 13);
        assert_eq!(report.spell_templates, 11);
        assert_eq!(report.characters, 8);
        assert_eq!(report.items, 19); // 16 from templates + 3 custom
        assert_eq!(report.spells, 20); // 18 from templates + 2 custom
        assert_eq!(report.total(), 71);
    }

    #[tokio::test]
    async fn custom_records_embed_the_owner_id() {
        let mut dataset = minimal_dataset();
        dataset.custom_items = vec![charseed_domain::CustomItemSeed::new(
            "Aragorn",
            "Elven Cloak",
            "A cloak woven in Lothlorien.",
        )];

        let api = Arc::new(RecordingApi::new());
        seeder(api.clone()).run(&dataset, false).await;

        let posts = api.calls_matching(Method::Post, "items");
        assert_eq!(posts.len(), 1);
        let body = posts[0].body.as_ref().expect("custom item body");
        assert_eq!(body["characterId"], 3);
        assert_eq!(body["name"], "Elven Cloak");
        assert!(body.get("owner").is_none());
    }
}
