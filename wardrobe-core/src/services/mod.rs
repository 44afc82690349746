// File: wardrobe-core/src/services/mod.rs
pub mod outfit_service;

pub use outfit_service::{GenerateOutcome, OutfitService};
