use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use wardrobe_ai::{ChatMessage, ModelProvider};
use wardrobe_common::error::Error;
use wardrobe_common::models::{GeneratedOutfit, OutfitSlot, SavedOutfit};
use wardrobe_common::traits::{ClothingRepository, OutfitRepository, WeatherProvider};

use crate::parser::parse_reply;
use crate::prompt::{build_prompt, eligible_items};
use crate::resolver::find_best_match;
use crate::weather::weather_tag;

/// Sampling temperature used for outfit generation.
pub const DEFAULT_TEMPERATURE: f32 = 1.2;

/// What a `generate` call produced.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOutcome {
    /// A new outfit was appended at `index`.
    Generated {
        index: usize,
        outfit: GeneratedOutfit,
    },
    /// The owner has no items with a usable photo; nothing was appended
    /// and the text-generation service was not called.
    NoEligibleItems,
}

/// Session-scoped outfit assembler.
///
/// Owns the ordered list of generated outfits exclusively; the paging UI
/// reads through `outfit_at`/`outfits` and mutates only through
/// `generate`, `regenerate_slot` and `persist`. The list grows
/// append-only; existing entries are never removed or reordered.
///
/// Callers serialize `generate` calls themselves (one in flight at a
/// time, typically a busy flag around the paging trigger). Concurrent
/// `regenerate_slot` calls are safe; two regenerations racing on the
/// same slot resolve last-write-wins.
pub struct OutfitService {
    clothing_repo: Arc<dyn ClothingRepository>,
    outfit_repo: Arc<dyn OutfitRepository>,
    model: Arc<dyn ModelProvider>,
    weather: Arc<dyn WeatherProvider>,
    outfits: RwLock<Vec<GeneratedOutfit>>,
    temperature: f32,
}

impl OutfitService {
    pub fn new(
        clothing_repo: Arc<dyn ClothingRepository>,
        outfit_repo: Arc<dyn OutfitRepository>,
        model: Arc<dyn ModelProvider>,
        weather: Arc<dyn WeatherProvider>,
    ) -> Self {
        Self {
            clothing_repo,
            outfit_repo,
            model,
            weather,
            outfits: RwLock::new(Vec::new()),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Override the sampling temperature passed to the model.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Resolve the weather tag for the prompt. Missing coordinates or a
    /// failed lookup fall back to "warm" rather than blocking generation.
    pub async fn resolve_weather_tag(&self, coords: Option<(f64, f64)>) -> String {
        let Some((lat, lon)) = coords else {
            return "warm".to_string();
        };
        match self.weather.current(lat, lon).await {
            Ok(sample) => weather_tag(sample.temp_c, &sample.condition),
            Err(e) => {
                warn!("Weather lookup failed, falling back to warm: {:?}", e);
                "warm".to_string()
            }
        }
    }

    /// Generate one outfit for the owner and append it to the session
    /// list.
    ///
    /// A failed completion returns `Err` and leaves the list untouched;
    /// an owner without eligible items short-circuits to
    /// [`GenerateOutcome::NoEligibleItems`] before any model call.
    /// Unresolvable or "none" slots stay empty; the outfit is still
    /// appended and usable with fewer items.
    pub async fn generate(
        &self,
        owner_id: &str,
        coords: Option<(f64, f64)>,
    ) -> Result<GenerateOutcome, Error> {
        let inventory = self.clothing_repo.list_for_owner(owner_id).await?;
        let eligible = eligible_items(&inventory);
        if eligible.is_empty() {
            info!("No eligible clothing for owner {owner_id}, skipping generation");
            return Ok(GenerateOutcome::NoEligibleItems);
        }

        let tag = self.resolve_weather_tag(coords).await;
        let seed = Utc::now().timestamp_millis();
        let prompt = build_prompt(&eligible, &tag, seed);

        let reply = self
            .model
            .chat(vec![ChatMessage::user(prompt)], self.temperature)
            .await
            .map_err(|e| Error::Completion(e.to_string()))?;

        let parsed = parse_reply(&reply);
        let mut outfit = GeneratedOutfit::new(parsed.description.clone(), seed);
        for slot in OutfitSlot::ALL {
            if let Some(item) = find_best_match(parsed.candidate(slot), &eligible) {
                outfit.set_slot(slot, item.clone());
            }
        }

        let mut outfits = self.outfits.write().await;
        outfits.push(outfit.clone());
        let index = outfits.len() - 1;
        info!(
            "Generated outfit {} for owner {} ({} items, weather {})",
            index,
            owner_id,
            outfit.items().len(),
            tag
        );
        Ok(GenerateOutcome::Generated { index, outfit })
    }

    /// Replace one slot of the outfit at `outfit_index` with an item
    /// picked uniformly at random from the slot's allowed categories.
    ///
    /// No inventory item in those categories means the outfit stays
    /// exactly as it was; only an out-of-range index is an error.
    pub async fn regenerate_slot(
        &self,
        owner_id: &str,
        outfit_index: usize,
        slot: OutfitSlot,
    ) -> Result<(), Error> {
        {
            let outfits = self.outfits.read().await;
            if outfit_index >= outfits.len() {
                return Err(Error::NotFound(format!(
                    "No generated outfit at index {outfit_index}"
                )));
            }
        }

        let inventory = self.clothing_repo.list_for_owner(owner_id).await?;
        let filtered: Vec<_> = inventory
            .into_iter()
            .filter(|c| slot.allowed_categories().contains(&c.category.as_str()))
            .collect();
        if filtered.is_empty() {
            info!("No {slot} candidates for owner {owner_id}, leaving outfit unchanged");
            return Ok(());
        }

        let pick = filtered[rand::rng().random_range(0..filtered.len())].clone();

        let mut outfits = self.outfits.write().await;
        // The list is append-only, so the index is still valid; a racing
        // regeneration of the same slot resolves last-write-wins here.
        if let Some(outfit) = outfits.get_mut(outfit_index) {
            info!("Replacing {slot} of outfit {outfit_index} with '{}'", pick.name);
            outfit.set_slot(slot, pick);
        }
        Ok(())
    }

    /// Snapshot the outfit at `outfit_index` into a new saved record.
    ///
    /// Null slots are dropped from the flattened item list; the
    /// in-memory outfit stays in the session list unchanged.
    pub async fn persist(&self, owner_id: &str, outfit_index: usize) -> Result<SavedOutfit, Error> {
        let (items, description) = {
            let outfits = self.outfits.read().await;
            let outfit = outfits.get(outfit_index).ok_or_else(|| {
                Error::NotFound(format!("No generated outfit at index {outfit_index}"))
            })?;
            (outfit.items(), outfit.description.clone())
        };

        let saved = SavedOutfit {
            outfit_id: Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            items,
            description,
            is_favorite: false,
            created_at: Utc::now(),
        };
        self.outfit_repo.create(&saved).await?;
        info!(
            "Saved outfit {} for owner {} ({} items)",
            saved.outfit_id,
            owner_id,
            saved.items.len()
        );
        Ok(saved)
    }

    /// Number of outfits generated so far this session.
    pub async fn outfit_count(&self) -> usize {
        self.outfits.read().await.len()
    }

    /// A snapshot of the outfit at `index`, if any.
    pub async fn outfit_at(&self, index: usize) -> Option<GeneratedOutfit> {
        self.outfits.read().await.get(index).cloned()
    }

    /// A snapshot of the whole session list, in generation order.
    pub async fn outfits(&self) -> Vec<GeneratedOutfit> {
        self.outfits.read().await.clone()
    }
}
