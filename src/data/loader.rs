//! RON loadout loader
//!
//! Loads the starting loadout from an external RON file, with fallback
//! to hardcoded defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::combat::StatBlock;
use crate::items::Item;

/// Starting conditions for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loadout {
    pub player: StatBlock,
    pub enemy_health: i32,
    pub items: Vec<Item>,
}

impl Default for Loadout {
    fn default() -> Self {
        default_loadout()
    }
}

/// Load the loadout from `assets/data/loadout.ron`, falling back to the
/// built-in defaults when the file is missing or malformed.
pub fn load_loadout() -> Loadout {
    let path = Path::new("assets/data/loadout.ron");
    if path.exists() {
        match fs::read_to_string(path) {
            Ok(content) => match ron::from_str(&content) {
                Ok(loadout) => return loadout,
                Err(e) => log::warn!("Failed to parse {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Failed to read {}: {}", path.display(), e),
        }
    }
    default_loadout()
}

/// The stock demo loadout
pub fn default_loadout() -> Loadout {
    Loadout {
        player: StatBlock::new(100, 10, 5),
        enemy_health: 100,
        items: vec![
            Item::weapon("Sword", 20),
            Item::weapon("Axe", 30),
            Item::armor("Plate Mail", 30),
            Item::armor("Chainmail", 20),
            Item::consumable("Health Potion", 50),
            Item::consumable("Mana Potion", 30),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemKind;

    #[test]
    fn default_loadout_matches_the_stock_demo() {
        let loadout = default_loadout();
        assert_eq!(loadout.player, StatBlock::new(100, 10, 5));
        assert_eq!(loadout.enemy_health, 100);
        assert_eq!(loadout.items.len(), 6);
        assert_eq!(loadout.items[0].name, "Sword");
        assert_eq!(loadout.items[0].kind, ItemKind::Weapon);
        assert!(loadout.items.iter().all(|i| i.value >= 0));
    }

    #[test]
    fn shipped_asset_file_parses_to_the_defaults() {
        // cargo runs tests from the crate root, where assets/ lives
        assert_eq!(load_loadout(), default_loadout());
    }
}
