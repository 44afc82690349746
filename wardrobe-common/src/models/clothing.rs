use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fixed category vocabulary offered when an item is added.
/// Stored items carry the category as plain text.
pub const CATEGORIES: [&str; 17] = [
    "Tops",
    "Shirts",
    "Cardigans",
    "Blazers",
    "Jackets",
    "Trousers",
    "Jeans",
    "Shorts",
    "Skirts",
    "Dresses",
    "Shoes",
    "Trainers",
    "Boots",
    "Flats",
    "Heels",
    "Sandals",
    "Accessories",
];

/// One garment in a user's inventory, as held by the document store.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ClothingItem {
    #[serde(rename = "id")]
    pub clothing_id: String,
    #[serde(rename = "userId")]
    pub owner_id: String,
    pub name: String,
    pub category: String,
    pub color: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(rename = "isFavorite", default)]
    pub is_favorite: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl ClothingItem {
    /// Whether the item carries a usable photo reference. Only items that
    /// pass this check take part in outfit generation.
    pub fn has_image(&self) -> bool {
        self.image_url
            .as_deref()
            .is_some_and(|url| url.starts_with("http"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(image_url: Option<&str>) -> ClothingItem {
        ClothingItem {
            clothing_id: "c1".to_string(),
            owner_id: "u1".to_string(),
            name: "Blue Jeans".to_string(),
            category: "Jeans".to_string(),
            color: Some("blue".to_string()),
            image_url: image_url.map(String::from),
            is_favorite: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn has_image_requires_http_prefix() {
        assert!(item(Some("https://img.example/1.jpg")).has_image());
        assert!(item(Some("http://img.example/1.jpg")).has_image());
        assert!(!item(Some("file:///tmp/1.jpg")).has_image());
        assert!(!item(Some("")).has_image());
        assert!(!item(None).has_image());
    }

    #[test]
    fn vocabulary_is_stable() {
        assert_eq!(CATEGORIES.len(), 17);
        assert!(CATEGORIES.contains(&"Jeans"));
        assert!(CATEGORIES.contains(&"Accessories"));
    }
}
