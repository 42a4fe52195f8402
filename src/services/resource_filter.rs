//! Allow-list of resource names eligible for persistence.
//!
//! The sfl.world p2p payload carries every tradeable item in the game;
//! only crops and ores are tracked here.

use lazy_static::lazy_static;
use std::collections::HashSet;

const CROP_NAMES: [&str; 35] = [
    "Sunflower",
    "Potato",
    "Pumpkin",
    "Carrot",
    "Cabbage",
    "Beetroot",
    "Cauliflower",
    "Parsnip",
    "Radish",
    "Wheat",
    "Kale",
    "Apple",
    "Blueberry",
    "Orange",
    "Eggplant",
    "Corn",
    "Banana",
    "Soybean",
    "Grape",
    "Rice",
    "Olive",
    "Tomato",
    "Lemon",
    "Barley",
    "Rhubarb",
    "Zucchini",
    "Yam",
    "Broccoli",
    "Pepper",
    "Onion",
    "Turnip",
    "Artichoke",
    "Duskberry",
    "Lunara",
    "Celestine",
];

const ORE_NAMES: [&str; 6] = ["Wood", "Stone", "Iron", "Gold", "Obsidian", "Crimstone"];

lazy_static! {
    static ref ALLOWED_RESOURCES: HashSet<&'static str> =
        CROP_NAMES.iter().chain(ORE_NAMES.iter()).copied().collect();
}

/// Case-sensitive exact match against the crop + ore allow-list.
pub fn is_allowed(name: &str) -> bool {
    ALLOWED_RESOURCES.contains(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crops_are_allowed() {
        assert!(is_allowed("Wheat"));
        assert!(is_allowed("Sunflower"));
        assert!(is_allowed("Celestine"));
    }

    #[test]
    fn test_ores_are_allowed() {
        assert!(is_allowed("Wood"));
        assert!(is_allowed("Crimstone"));
    }

    #[test]
    fn test_unknown_resources_are_rejected() {
        assert!(!is_allowed("NotAResource"));
        assert!(!is_allowed("Mermaid Scale"));
        assert!(!is_allowed(""));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert!(!is_allowed("wheat"));
        assert!(!is_allowed("WHEAT"));
    }

    #[test]
    fn test_allow_list_size() {
        assert_eq!(ALLOWED_RESOURCES.len(), 41);
    }
}
