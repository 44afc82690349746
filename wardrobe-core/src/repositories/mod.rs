// File: wardrobe-core/src/repositories/mod.rs
pub mod memory;

pub use memory::{MemoryClothingRepository, MemoryOutfitRepository};
