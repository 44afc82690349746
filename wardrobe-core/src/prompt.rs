use std::fmt::Write;

use wardrobe_common::models::{ClothingItem, OutfitSlot};

/// Filter an inventory down to the items that may take part in outfit
/// generation: only items with a usable photo reference qualify.
pub fn eligible_items(items: &[ClothingItem]) -> Vec<ClothingItem> {
    items.iter().filter(|i| i.has_image()).cloned().collect()
}

/// Render the generation instruction for the given (already filtered)
/// items and weather tag.
///
/// Pure function: the caller supplies the seed (production passes the
/// current millisecond timestamp to nudge the model away from repeating
/// itself across calls). An empty item list still renders a prompt;
/// whether to send it is the caller's call.
pub fn build_prompt(items: &[ClothingItem], weather_tag: &str, seed: i64) -> String {
    let list = items
        .iter()
        .map(|c| {
            format!(
                "- {} ({}, {})",
                c.name,
                c.color.as_deref().unwrap_or("unknown"),
                c.category
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let mut rules = String::new();
    for slot in OutfitSlot::ALL {
        let note = match slot {
            OutfitSlot::Dress => " (can be used alone as a full outfit)",
            OutfitSlot::Jacket => " (optional, pairs with a Top)",
            OutfitSlot::Accessories => " (e.g. bags, scarves - optional)",
            _ => "",
        };
        let _ = writeln!(
            rules,
            "- {} = categories {}{}",
            slot.label(),
            slot.allowed_categories().join(", "),
            note
        );
    }

    format!(
        "You are a fashion assistant.\n\
Category rules:\n\
{rules}\n\
Given these items:\n\
{list}\n\n\
Weather: {weather_tag}\n\
Hint: Make a different stylish choice each time, no repeats!\n\
Pick one of the following outfit types:\n\
A) A Dress with Shoes (+ optional Jacket or Accessories)\n\
B) A Top and Bottom with Shoes (+ optional Jacket or Accessories)\n\n\
Pick exactly ONE Top, ONE Bottom, and ONE pair of Shoes from the list. \
OPTIONALLY: a jacket and one accessory.\n\
Respond STRICTLY in this format:\n\n\
Top: <name or \"none\">\n\
Bottom: <name or \"none\">\n\
Dress: <name or \"none\">\n\
Jacket: <name or \"none\">\n\
Shoes: <name>\n\
Accessories: <name or \"none\">\n\n\
Make sure to describe them using the correct colors given!\n\
Description: <one elegant sentence>\n\
Seed: {seed}"
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn item(name: &str, color: Option<&str>, category: &str, url: Option<&str>) -> ClothingItem {
        ClothingItem {
            clothing_id: name.to_lowercase().replace(' ', "-"),
            owner_id: "u1".to_string(),
            name: name.to_string(),
            category: category.to_string(),
            color: color.map(String::from),
            image_url: url.map(String::from),
            is_favorite: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn items_without_image_never_reach_the_prompt() {
        let inventory = vec![
            item("Blue Jeans", Some("blue"), "Jeans", Some("https://img/1.jpg")),
            item("Lost Photo Shirt", Some("red"), "Shirts", None),
            item("Broken Shirt", Some("red"), "Shirts", Some("not-a-url")),
        ];
        let eligible = eligible_items(&inventory);
        assert_eq!(eligible.len(), 1);

        let prompt = build_prompt(&eligible, "warm", 42);
        assert!(prompt.contains("- Blue Jeans (blue, Jeans)"));
        assert!(!prompt.contains("Lost Photo Shirt"));
        assert!(!prompt.contains("Broken Shirt"));
    }

    #[test]
    fn prompt_lists_items_in_inventory_order() {
        let items = vec![
            item("White Tee", Some("white"), "Shirts", Some("http://i/1")),
            item("Blue Jeans", None, "Jeans", Some("http://i/2")),
        ];
        let prompt = build_prompt(&items, "cold-rainy", 7);

        let tee = prompt.find("- White Tee (white, Shirts)").unwrap();
        let jeans = prompt.find("- Blue Jeans (unknown, Jeans)").unwrap();
        assert!(tee < jeans);
        assert!(prompt.contains("Weather: cold-rainy"));
        assert!(prompt.ends_with("Seed: 7"));
    }

    #[test]
    fn rule_text_follows_slot_mapping() {
        let prompt = build_prompt(&[], "warm", 0);
        assert!(prompt.contains("- Top = categories Shirts, Tops, Blouses, Sweaters"));
        assert!(prompt.contains("- Bottom = categories Pants, Jeans, Skirts"));
        assert!(prompt.contains("- Shoes = categories Shoes, Boots, Sneakers, Heels"));
    }

    #[test]
    fn empty_inventory_still_builds_a_prompt() {
        let prompt = build_prompt(&[], "warm", 1);
        assert!(prompt.contains("Given these items:"));
        assert!(prompt.contains("Respond STRICTLY in this format:"));
    }
}
