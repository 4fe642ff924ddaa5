//! Item definitions
//!
//! Items are immutable value objects: a name, a non-negative magnitude,
//! and a kind discriminant that fixes what the magnitude does.

use serde::{Deserialize, Serialize};

use crate::combat::StatBlock;
use crate::events::{EventKind, EventLog};

/// Item kinds with fixed stat effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Raises attack; its value is also the damage dealt to the enemy
    Weapon,
    /// Raises defense
    Armor,
    /// Restores health
    Consumable,
}

impl ItemKind {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Weapon => "Weapon",
            ItemKind::Armor => "Armor",
            ItemKind::Consumable => "Consumable",
        }
    }
}

/// An inventory item. Items survive use; they are never consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Non-negative effect magnitude
    pub value: i32,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(name: impl Into<String>, value: i32, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            value,
            kind,
        }
    }

    pub fn weapon(name: impl Into<String>, value: i32) -> Self {
        Self::new(name, value, ItemKind::Weapon)
    }

    pub fn armor(name: impl Into<String>, value: i32) -> Self {
        Self::new(name, value, ItemKind::Armor)
    }

    pub fn consumable(name: impl Into<String>, value: i32) -> Self {
        Self::new(name, value, ItemKind::Consumable)
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Apply this item's stat effect to the target and report it.
    pub fn apply(&self, target: &mut StatBlock, events: &mut EventLog) {
        match self.kind {
            ItemKind::Weapon => {
                target.modify(0, self.value, 0, events);
                events.push(
                    EventKind::ItemUsed,
                    format!("You attack with {} and deal {} damage!", self.name, self.value),
                );
            }
            ItemKind::Armor => {
                target.modify(0, 0, self.value, events);
                events.push(
                    EventKind::ItemUsed,
                    format!("You equip {} and gain {} defense!", self.name, self.value),
                );
            }
            ItemKind::Consumable => {
                target.modify(self.value, 0, 0, events);
                events.push(
                    EventKind::ItemUsed,
                    format!("You use {} and gain {} health!", self.name, self.value),
                );
            }
        }
    }
}
