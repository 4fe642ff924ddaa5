//! Player stat block and damage math

use serde::{Deserialize, Serialize};

use crate::events::{EventKind, EventLog};

/// Mutable health/attack/defense triple for the player.
///
/// No field is clamped during mutation; values may go negative. The
/// controller checks `health <= 0` after changes to declare defeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
}

impl StatBlock {
    pub fn new(health: i32, attack: i32, defense: i32) -> Self {
        Self {
            health,
            attack,
            defense,
        }
    }

    /// Add each delta to its field in place and report the new snapshot.
    pub fn modify(&mut self, d_health: i32, d_attack: i32, d_defense: i32, events: &mut EventLog) {
        self.health += d_health;
        self.attack += d_attack;
        self.defense += d_defense;
        events.push(
            EventKind::StatsChanged(*self),
            format!(
                "Health: {}  Attack: {}  Defense: {}",
                self.health, self.attack, self.defense
            ),
        );
    }

    /// Resolve an incoming attack against defense.
    ///
    /// Damage lands only when it strictly exceeds defense. A zero or
    /// arbitrarily negative difference takes the absorbed path and
    /// mutates nothing.
    pub fn receive_attack(&mut self, damage: i32, events: &mut EventLog) {
        let taken = damage - self.defense;
        if taken > 0 {
            self.modify(-taken, 0, 0, events);
            events.push(
                EventKind::DamageTaken(taken),
                format!("You were attacked and took {} damage!", taken),
            );
        } else {
            events.push(
                EventKind::DamageAbsorbed,
                "You were attacked, but your defense prevented any damage.",
            );
        }
    }
}
