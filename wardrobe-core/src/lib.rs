// File: wardrobe-core/src/lib.rs
//
// Outfit suggestion engine: prompt construction, reply parsing, fuzzy
// resolution of garment names back to inventory records, and the
// session-scoped outfit list the paging UI consumes.

pub mod parser;
pub mod prompt;
pub mod repositories;
pub mod resolver;
pub mod services;
pub mod weather;

pub use wardrobe_common::Error;

pub use services::outfit_service::{GenerateOutcome, OutfitService};
