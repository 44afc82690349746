use async_trait::async_trait;

use crate::error::Error;
use crate::models::clothing::ClothingItem;
use crate::models::outfit::SavedOutfit;

/// Read access to a user's clothing inventory. No pagination contract:
/// implementations return everything the owner has.
#[async_trait]
pub trait ClothingRepository: Send + Sync {
    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<ClothingItem>, Error>;
}

/// Persistence for finalized outfits.
#[async_trait]
pub trait OutfitRepository: Send + Sync {
    async fn create(&self, outfit: &SavedOutfit) -> Result<(), Error>;
    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<SavedOutfit>, Error>;
    async fn set_favorite(&self, outfit_id: &str, is_favorite: bool) -> Result<(), Error>;
}
