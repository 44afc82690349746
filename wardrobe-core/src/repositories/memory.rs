use async_trait::async_trait;
use tokio::sync::RwLock;

use wardrobe_common::error::Error;
use wardrobe_common::models::{ClothingItem, SavedOutfit};
use wardrobe_common::traits::{ClothingRepository, OutfitRepository};

/// In-memory clothing inventory, the document-store stand-in for tests
/// and demos.
#[derive(Default)]
pub struct MemoryClothingRepository {
    items: RwLock<Vec<ClothingItem>>,
}

impl MemoryClothingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, item: ClothingItem) {
        self.items.write().await.push(item);
    }

    pub async fn remove(&self, clothing_id: &str) {
        self.items.write().await.retain(|i| i.clothing_id != clothing_id);
    }
}

#[async_trait]
impl ClothingRepository for MemoryClothingRepository {
    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<ClothingItem>, Error> {
        Ok(self
            .items
            .read()
            .await
            .iter()
            .filter(|i| i.owner_id == owner_id)
            .cloned()
            .collect())
    }
}

/// In-memory saved-outfit store.
#[derive(Default)]
pub struct MemoryOutfitRepository {
    outfits: RwLock<Vec<SavedOutfit>>,
}

impl MemoryOutfitRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OutfitRepository for MemoryOutfitRepository {
    async fn create(&self, outfit: &SavedOutfit) -> Result<(), Error> {
        self.outfits.write().await.push(outfit.clone());
        Ok(())
    }

    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<SavedOutfit>, Error> {
        Ok(self
            .outfits
            .read()
            .await
            .iter()
            .filter(|o| o.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn set_favorite(&self, outfit_id: &str, is_favorite: bool) -> Result<(), Error> {
        let mut outfits = self.outfits.write().await;
        match outfits.iter_mut().find(|o| o.outfit_id == outfit_id) {
            Some(outfit) => {
                outfit.is_favorite = is_favorite;
                Ok(())
            }
            None => Err(Error::NotFound(format!("No saved outfit '{outfit_id}'"))),
        }
    }
}
