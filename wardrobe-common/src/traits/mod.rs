// File: wardrobe-common/src/traits/mod.rs
pub mod repository_traits;
pub mod weather_traits;

pub use repository_traits::{ClothingRepository, OutfitRepository};
pub use weather_traits::WeatherProvider;
