use wardrobe_common::models::ClothingItem;

/// Resolve a candidate name from a parsed reply to a concrete inventory
/// record.
///
/// Bidirectional substring test, first match wins: the first item (in
/// the inventory's given order) whose lower-cased name contains the
/// candidate, or is contained by it, is returned. No scoring and no
/// category disambiguation; overlapping names ("jean jacket" / "jeans")
/// can resolve to the wrong record, and that ambiguity is part of the
/// contract rather than something to paper over here.
pub fn find_best_match<'a>(
    candidate: Option<&str>,
    items: &'a [ClothingItem],
) -> Option<&'a ClothingItem> {
    let candidate = candidate?.trim();
    if candidate.is_empty() {
        return None;
    }
    let wanted = candidate.to_lowercase();

    items.iter().find(|item| {
        let name = item.name.to_lowercase();
        name.contains(&wanted) || wanted.contains(&name)
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn item(name: &str) -> ClothingItem {
        ClothingItem {
            clothing_id: name.to_lowercase().replace(' ', "-"),
            owner_id: "u1".to_string(),
            name: name.to_string(),
            category: "Shoes".to_string(),
            color: None,
            image_url: Some("https://img/x.jpg".to_string()),
            is_favorite: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn exact_name_matches() {
        let items = vec![item("Red Sneakers")];
        let found = find_best_match(Some("red sneakers"), &items).unwrap();
        assert_eq!(found.name, "Red Sneakers");
    }

    #[test]
    fn substring_matches_in_both_directions() {
        let items = vec![item("Sneakers")];
        // candidate contains the item name
        assert!(find_best_match(Some("red sneakers"), &items).is_some());
        // item name contains the candidate
        assert!(find_best_match(Some("sneak"), &items).is_some());
    }

    #[test]
    fn first_match_wins_in_inventory_order() {
        // Deliberate: "Sneaker" sits before "Red Sneakers", so the
        // candidate "red sneakers" resolves to "Sneaker" even though the
        // later item is the exact match. Inventory order is the only
        // tie-break.
        let items = vec![item("Sneaker"), item("Red Sneakers")];
        let found = find_best_match(Some("red sneakers"), &items).unwrap();
        assert_eq!(found.name, "Sneaker");
    }

    #[test]
    fn null_and_empty_candidates_resolve_to_none() {
        let items = vec![item("Sneakers")];
        assert!(find_best_match(None, &items).is_none());
        assert!(find_best_match(Some(""), &items).is_none());
        assert!(find_best_match(Some("   "), &items).is_none());
    }

    #[test]
    fn no_overlap_means_no_match() {
        let items = vec![item("Sneakers")];
        assert!(find_best_match(Some("leather boots"), &items).is_none());
    }
}
