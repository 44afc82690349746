use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::clothing::ClothingItem;

/// The six roles a garment can occupy in an outfit.
///
/// `Shoes` is the only role the generation prompt insists on; `Dress`
/// substitutes for `Top` + `Bottom`; everything else is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutfitSlot {
    Top,
    Bottom,
    Shoes,
    Dress,
    Jacket,
    Accessories,
}

impl OutfitSlot {
    /// All slots, in the order outfits are flattened for persistence.
    pub const ALL: [OutfitSlot; 6] = [
        OutfitSlot::Top,
        OutfitSlot::Bottom,
        OutfitSlot::Shoes,
        OutfitSlot::Dress,
        OutfitSlot::Jacket,
        OutfitSlot::Accessories,
    ];

    /// The label used for this slot in prompts and model replies.
    pub fn label(&self) -> &'static str {
        match self {
            OutfitSlot::Top => "Top",
            OutfitSlot::Bottom => "Bottom",
            OutfitSlot::Shoes => "Shoes",
            OutfitSlot::Dress => "Dress",
            OutfitSlot::Jacket => "Jacket",
            OutfitSlot::Accessories => "Accessories",
        }
    }

    /// Which stored categories may fill this slot. Matching is by the
    /// category string exactly as the document store holds it.
    pub fn allowed_categories(&self) -> &'static [&'static str] {
        match self {
            OutfitSlot::Top => &["Shirts", "Tops", "Blouses", "Sweaters"],
            OutfitSlot::Bottom => &["Pants", "Jeans", "Skirts"],
            OutfitSlot::Shoes => &["Shoes", "Boots", "Sneakers", "Heels"],
            OutfitSlot::Jacket => &["Jackets"],
            OutfitSlot::Dress => &["Dresses"],
            OutfitSlot::Accessories => &["Accessories"],
        }
    }
}

impl fmt::Display for OutfitSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One candidate outfit produced by a generation call.
///
/// Slots hold owned snapshots of inventory records; any slot may be
/// replaced in place later. Held in an append-only session list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneratedOutfit {
    pub top: Option<ClothingItem>,
    pub bottom: Option<ClothingItem>,
    pub shoes: Option<ClothingItem>,
    pub dress: Option<ClothingItem>,
    pub jacket: Option<ClothingItem>,
    pub accessories: Option<ClothingItem>,
    pub description: String,
    pub generated_at: Option<DateTime<Utc>>,
    pub seed: i64,
}

impl GeneratedOutfit {
    pub fn new(description: impl Into<String>, seed: i64) -> Self {
        Self {
            description: description.into(),
            generated_at: Some(Utc::now()),
            seed,
            ..Default::default()
        }
    }

    pub fn slot(&self, slot: OutfitSlot) -> Option<&ClothingItem> {
        match slot {
            OutfitSlot::Top => self.top.as_ref(),
            OutfitSlot::Bottom => self.bottom.as_ref(),
            OutfitSlot::Shoes => self.shoes.as_ref(),
            OutfitSlot::Dress => self.dress.as_ref(),
            OutfitSlot::Jacket => self.jacket.as_ref(),
            OutfitSlot::Accessories => self.accessories.as_ref(),
        }
    }

    pub fn set_slot(&mut self, slot: OutfitSlot, item: ClothingItem) {
        match slot {
            OutfitSlot::Top => self.top = Some(item),
            OutfitSlot::Bottom => self.bottom = Some(item),
            OutfitSlot::Shoes => self.shoes = Some(item),
            OutfitSlot::Dress => self.dress = Some(item),
            OutfitSlot::Jacket => self.jacket = Some(item),
            OutfitSlot::Accessories => self.accessories = Some(item),
        }
    }

    /// The non-null slots flattened in `OutfitSlot::ALL` order.
    pub fn items(&self) -> Vec<ClothingItem> {
        OutfitSlot::ALL
            .iter()
            .filter_map(|slot| self.slot(*slot).cloned())
            .collect()
    }
}

/// A persisted outfit snapshot. Immutable after creation apart from the
/// favorite flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedOutfit {
    #[serde(rename = "id")]
    pub outfit_id: String,
    #[serde(rename = "userId")]
    pub owner_id: String,
    pub items: Vec<ClothingItem>,
    pub description: String,
    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, category: &str) -> ClothingItem {
        ClothingItem {
            clothing_id: name.to_lowercase().replace(' ', "-"),
            owner_id: "u1".to_string(),
            name: name.to_string(),
            category: category.to_string(),
            color: None,
            image_url: Some("https://img.example/x.jpg".to_string()),
            is_favorite: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn slot_labels_round_trip_through_display() {
        for slot in OutfitSlot::ALL {
            assert_eq!(slot.to_string(), slot.label());
        }
    }

    #[test]
    fn allowed_categories_cover_each_slot() {
        assert!(OutfitSlot::Top.allowed_categories().contains(&"Sweaters"));
        assert!(OutfitSlot::Bottom.allowed_categories().contains(&"Jeans"));
        assert_eq!(OutfitSlot::Dress.allowed_categories(), &["Dresses"]);
    }

    #[test]
    fn items_flattens_non_null_slots_in_fixed_order() {
        let mut outfit = GeneratedOutfit::new("casual", 1);
        outfit.set_slot(OutfitSlot::Accessories, item("Scarf", "Accessories"));
        outfit.set_slot(OutfitSlot::Top, item("White Tee", "Shirts"));
        outfit.set_slot(OutfitSlot::Shoes, item("Sneakers", "Shoes"));

        let names: Vec<_> = outfit.items().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["White Tee", "Sneakers", "Scarf"]);
    }

    #[test]
    fn set_slot_replaces_in_place() {
        let mut outfit = GeneratedOutfit::new("", 0);
        outfit.set_slot(OutfitSlot::Jacket, item("Denim Jacket", "Jackets"));
        outfit.set_slot(OutfitSlot::Jacket, item("Blazer", "Jackets"));
        assert_eq!(outfit.jacket.as_ref().map(|i| i.name.as_str()), Some("Blazer"));
        assert_eq!(outfit.items().len(), 1);
    }
}
