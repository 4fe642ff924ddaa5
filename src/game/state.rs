//! Match state machine
//!
//! Owns the player, the enemy, the inventory and the event log, and
//! drives a single duel from `Active` into one of the terminal phases.
//! Every command is rejected once the match is over; rejections leave
//! state untouched and are mirrored onto the event log.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::combat::{enemy_attack_roll, StatBlock};
use crate::data::Loadout;
use crate::error::GameError;
use crate::events::{EventKind, EventLog, GameEvent};
use crate::items::{Inventory, Item, ItemKind};

/// Match phase. `Won`, `Lost` and `Quit` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Active,
    Won,
    Lost,
    Quit,
}

impl MatchPhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MatchPhase::Active)
    }
}

/// The match controller
pub struct Game {
    player: StatBlock,
    enemy_health: i32,
    /// Starting enemy health, kept for display ratios
    enemy_max_health: i32,
    inventory: Inventory,
    phase: MatchPhase,
    events: EventLog,
    rng: StdRng,
}

impl Game {
    /// Start a match from a loadout.
    pub fn new(loadout: Loadout) -> Self {
        Self::with_rng(loadout, StdRng::from_entropy())
    }

    /// Start a match with an explicit RNG, deterministic in tests.
    pub fn with_rng(loadout: Loadout, rng: StdRng) -> Self {
        let mut events = EventLog::new();
        let mut inventory = Inventory::new();
        for item in loadout.items {
            inventory.add(item, &mut events);
        }
        Self {
            player: loadout.player,
            enemy_health: loadout.enemy_health,
            enemy_max_health: loadout.enemy_health,
            inventory,
            phase: MatchPhase::Active,
            events,
            rng,
        }
    }

    // --- Queries ---

    /// Current player stats snapshot
    pub fn player(&self) -> StatBlock {
        self.player
    }

    pub fn enemy_health(&self) -> i32 {
        self.enemy_health
    }

    pub fn enemy_max_health(&self) -> i32 {
        self.enemy_max_health
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn selected(&self) -> Option<&Item> {
        self.inventory.selected()
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Drain pending events for the presentation layer.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    // --- Commands ---

    /// Append an item to the inventory.
    pub fn add_item(&mut self, item: Item) -> Result<(), GameError> {
        self.guard_active()?;
        self.inventory.add(item, &mut self.events);
        Ok(())
    }

    /// Point the selection at an inventory slot.
    pub fn select_item(&mut self, index: usize) -> Result<(), GameError> {
        self.guard_active()?;
        if let Err(err) = self.inventory.select(index, &mut self.events) {
            self.events.push(EventKind::OutOfRange, err.to_string());
            return Err(err);
        }
        Ok(())
    }

    /// Resolve one player turn with the selected item.
    ///
    /// Non-weapon items end the turn immediately. A weapon also damages
    /// the enemy; if the enemy survives, it counter-attacks with a
    /// magnitude drawn uniformly from [20, 40].
    pub fn use_selected_item(&mut self) -> Result<(), GameError> {
        self.guard_active()?;
        let Some(item) = self.inventory.selected().cloned() else {
            self.events.push(EventKind::NoSelection, "No item selected.");
            return Err(GameError::NoSelection);
        };

        item.apply(&mut self.player, &mut self.events);
        if item.kind != ItemKind::Weapon {
            return Ok(());
        }

        self.enemy_health -= item.value;
        log::debug!("Enemy health now {}", self.enemy_health);
        if self.enemy_health <= 0 {
            self.set_phase(MatchPhase::Won);
            self.events
                .push(EventKind::Won, "You won! The enemy's health reached 0.");
            log::info!("Match won");
            return Ok(());
        }

        let roll = enemy_attack_roll(&mut self.rng);
        self.resolve_enemy_attack(roll);
        Ok(())
    }

    /// Abandon the match.
    pub fn quit(&mut self) -> Result<(), GameError> {
        self.guard_active()?;
        self.set_phase(MatchPhase::Quit);
        self.events.push(EventKind::Quit, "You quit the game.");
        log::info!("Match quit");
        Ok(())
    }

    /// Apply an enemy counter-attack of the given magnitude.
    fn resolve_enemy_attack(&mut self, magnitude: i32) {
        self.player.receive_attack(magnitude, &mut self.events);
        if self.player.health <= 0 {
            self.set_phase(MatchPhase::Lost);
            self.events
                .push(EventKind::Lost, "You lost! Your health reached 0.");
            log::info!("Match lost");
        }
    }

    fn guard_active(&mut self) -> Result<(), GameError> {
        if self.phase.is_terminal() {
            self.events
                .push(EventKind::InvalidState, "The match is already over.");
            return Err(GameError::InvalidState);
        }
        Ok(())
    }

    fn set_phase(&mut self, phase: MatchPhase) {
        log::debug!("Phase transition: {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_loadout;

    fn seeded(loadout: Loadout) -> Game {
        Game::with_rng(loadout, StdRng::seed_from_u64(7))
    }

    fn counter_attacks(events: &[GameEvent]) -> usize {
        events
            .iter()
            .filter(|e| {
                matches!(
                    e.kind,
                    EventKind::DamageTaken(_) | EventKind::DamageAbsorbed
                )
            })
            .count()
    }

    #[test]
    fn consumable_heals_without_retaliation() {
        let mut game = seeded(Loadout {
            player: StatBlock::new(100, 10, 5),
            enemy_health: 100,
            items: vec![Item::consumable("Health Potion", 50)],
        });
        game.drain_events();

        game.select_item(0).unwrap();
        game.use_selected_item().unwrap();

        assert_eq!(game.player().health, 150);
        assert_eq!(game.enemy_health(), 100);
        assert_eq!(game.phase(), MatchPhase::Active);
        assert_eq!(counter_attacks(&game.drain_events()), 0);
    }

    #[test]
    fn armor_does_not_provoke_the_enemy() {
        let mut game = seeded(Loadout {
            player: StatBlock::new(100, 10, 5),
            enemy_health: 100,
            items: vec![Item::armor("Chainmail", 20)],
        });
        game.drain_events();

        game.select_item(0).unwrap();
        game.use_selected_item().unwrap();

        assert_eq!(game.player().defense, 25);
        assert_eq!(game.enemy_health(), 100);
        assert_eq!(counter_attacks(&game.drain_events()), 0);
    }

    #[test]
    fn lethal_weapon_wins_without_retaliation() {
        // Win check happens before the counter-attack, so player stats
        // are irrelevant
        let mut game = seeded(Loadout {
            player: StatBlock::new(1, 0, 0),
            enemy_health: 20,
            items: vec![Item::weapon("Sword", 20)],
        });
        game.drain_events();

        game.select_item(0).unwrap();
        game.use_selected_item().unwrap();

        assert_eq!(game.phase(), MatchPhase::Won);
        assert_eq!(game.enemy_health(), 0);
        let events = game.drain_events();
        assert_eq!(counter_attacks(&events), 0);
        assert!(events.iter().any(|e| e.kind == EventKind::Won));
    }

    #[test]
    fn surviving_enemy_counter_attacks_exactly_once_within_range() {
        for seed in 0..50 {
            let mut game = Game::with_rng(
                Loadout {
                    player: StatBlock::new(1000, 10, 0),
                    enemy_health: 100,
                    items: vec![Item::weapon("Sword", 20)],
                },
                StdRng::seed_from_u64(seed),
            );
            game.drain_events();

            game.select_item(0).unwrap();
            game.use_selected_item().unwrap();

            let events = game.drain_events();
            assert_eq!(counter_attacks(&events), 1);
            let taken = events
                .iter()
                .find_map(|e| match e.kind {
                    EventKind::DamageTaken(taken) => Some(taken),
                    _ => None,
                })
                .expect("zero defense, damage always lands");
            assert!((20..=40).contains(&taken));
        }
    }

    #[test]
    fn sword_against_full_enemy_leaves_the_match_active() {
        let mut game = seeded(default_loadout());
        game.drain_events();

        game.select_item(0).unwrap(); // Sword, value 20
        game.use_selected_item().unwrap();

        assert_eq!(game.enemy_health(), 80);
        assert_eq!(game.phase(), MatchPhase::Active);
        assert_eq!(counter_attacks(&game.drain_events()), 1);
    }

    #[test]
    fn counter_attack_can_drive_health_negative_and_lose_the_match() {
        let mut game = seeded(Loadout {
            player: StatBlock::new(20, 10, 5),
            enemy_health: 100,
            items: vec![],
        });
        game.drain_events();

        game.resolve_enemy_attack(40);

        assert_eq!(game.player().health, -15);
        assert_eq!(game.phase(), MatchPhase::Lost);
        let events = game.drain_events();
        assert!(events.iter().any(|e| e.kind == EventKind::DamageTaken(35)));
        assert!(events.iter().any(|e| e.kind == EventKind::Lost));
    }

    #[test]
    fn using_without_a_selection_reports_and_changes_nothing() {
        let mut game = seeded(default_loadout());
        game.drain_events();
        let before = game.player();

        let err = game.use_selected_item().unwrap_err();

        assert_eq!(err, GameError::NoSelection);
        assert_eq!(game.player(), before);
        assert_eq!(game.enemy_health(), 100);
        let events = game.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::NoSelection);
        assert_eq!(events[0].text, "No item selected.");
    }

    #[test]
    fn items_are_reusable_and_selection_persists_across_turns() {
        let mut game = seeded(Loadout {
            player: StatBlock::new(10, 10, 5),
            enemy_health: 100,
            items: vec![Item::consumable("Health Potion", 50)],
        });
        game.drain_events();

        game.select_item(0).unwrap();
        game.use_selected_item().unwrap();
        game.use_selected_item().unwrap();

        assert_eq!(game.inventory().count(), 1);
        assert_eq!(game.player().health, 110);
    }

    #[test]
    fn quit_is_terminal_and_a_second_quit_is_rejected() {
        let mut game = seeded(default_loadout());
        game.drain_events();

        game.quit().unwrap();
        assert_eq!(game.phase(), MatchPhase::Quit);
        let events = game.drain_events();
        assert!(events.iter().any(|e| e.kind == EventKind::Quit));

        let err = game.quit().unwrap_err();
        assert_eq!(err, GameError::InvalidState);
        assert_eq!(game.phase(), MatchPhase::Quit);
        let events = game.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::InvalidState);
    }

    #[test]
    fn all_commands_are_rejected_after_the_match_ends() {
        let mut game = seeded(default_loadout());
        game.select_item(0).unwrap();
        game.quit().unwrap();
        game.drain_events();
        let before = game.player();

        assert_eq!(game.use_selected_item(), Err(GameError::InvalidState));
        assert_eq!(
            game.add_item(Item::weapon("Dagger", 5)),
            Err(GameError::InvalidState)
        );
        assert_eq!(game.select_item(1), Err(GameError::InvalidState));

        assert_eq!(game.player(), before);
        assert_eq!(game.inventory().count(), 6);
        assert_eq!(game.selected().unwrap().name, "Sword");
    }

    #[test]
    fn out_of_range_selection_is_mirrored_onto_the_event_log() {
        let mut game = seeded(default_loadout());
        game.drain_events();

        let err = game.select_item(9).unwrap_err();

        assert_eq!(err, GameError::OutOfRange { index: 9, len: 6 });
        assert!(game.selected().is_none());
        let events = game.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::OutOfRange);
    }
}
