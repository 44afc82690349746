// File: wardrobe-common/src/models/mod.rs
pub mod clothing;
pub mod outfit;
pub mod weather;

pub use clothing::{CATEGORIES, ClothingItem};
pub use outfit::{GeneratedOutfit, OutfitSlot, SavedOutfit};
pub use weather::WeatherSample;
