use lazy_static::lazy_static;
use regex::Regex;

use wardrobe_common::models::OutfitSlot;

lazy_static! {
    static ref SLOT_PATTERNS: Vec<(OutfitSlot, Regex)> = OutfitSlot::ALL
        .iter()
        .map(|slot| {
            let pattern = format!(r"(?im)^{}:[ \t]*(.+)$", slot.label());
            (*slot, Regex::new(&pattern).expect("slot pattern compiles"))
        })
        .collect();
    static ref DESCRIPTION_PATTERN: Regex =
        Regex::new(r"(?is)description:\s*(.*)").expect("description pattern compiles");
}

/// The model's reply broken into per-slot candidate names plus the
/// free-text description. Candidates are trimmed and lower-cased, ready
/// for the resolver; a missing label or a literal "none" is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedReply {
    pub top: Option<String>,
    pub bottom: Option<String>,
    pub shoes: Option<String>,
    pub dress: Option<String>,
    pub jacket: Option<String>,
    pub accessories: Option<String>,
    pub description: String,
}

impl ParsedReply {
    pub fn candidate(&self, slot: OutfitSlot) -> Option<&str> {
        match slot {
            OutfitSlot::Top => self.top.as_deref(),
            OutfitSlot::Bottom => self.bottom.as_deref(),
            OutfitSlot::Shoes => self.shoes.as_deref(),
            OutfitSlot::Dress => self.dress.as_deref(),
            OutfitSlot::Jacket => self.jacket.as_deref(),
            OutfitSlot::Accessories => self.accessories.as_deref(),
        }
    }

    fn set(&mut self, slot: OutfitSlot, value: Option<String>) {
        match slot {
            OutfitSlot::Top => self.top = value,
            OutfitSlot::Bottom => self.bottom = value,
            OutfitSlot::Shoes => self.shoes = value,
            OutfitSlot::Dress => self.dress = value,
            OutfitSlot::Jacket => self.jacket = value,
            OutfitSlot::Accessories => self.accessories = value,
        }
    }
}

/// Parse a free-text reply into a [`ParsedReply`].
///
/// Per slot: the first `Label: value` line (case-insensitive) wins.
/// The description runs from the first `Description:` marker to the end
/// of the reply; absent marker means an empty description. Pure and
/// idempotent.
pub fn parse_reply(reply: &str) -> ParsedReply {
    let mut parsed = ParsedReply::default();

    for (slot, pattern) in SLOT_PATTERNS.iter() {
        let value = pattern
            .captures(reply)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_lowercase())
            .filter(|v| !v.is_empty() && v != "none");
        parsed.set(*slot, value);
    }

    parsed.description = DESCRIPTION_PATTERN
        .captures(reply)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    parsed
}
