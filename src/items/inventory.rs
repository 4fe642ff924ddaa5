//! Inventory
//!
//! Insertion-ordered item collection with a single selection pointer.
//! The pointer is a lookup key into the list, not ownership of an item.

use serde::{Deserialize, Serialize};

use super::item::Item;
use crate::error::GameError;
use crate::events::{EventKind, EventLog};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
    selected: Option<usize>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Append an item to the end of the list.
    pub fn add(&mut self, item: Item, events: &mut EventLog) {
        events.push(
            EventKind::InventoryChanged,
            format!("Added {} to inventory.", item.name),
        );
        self.items.push(item);
    }

    /// Point the selection at `index`.
    ///
    /// Fails with `OutOfRange` without touching the current selection.
    /// A successful selection persists until changed.
    pub fn select(&mut self, index: usize, events: &mut EventLog) -> Result<(), GameError> {
        let Some(item) = self.items.get(index) else {
            return Err(GameError::OutOfRange {
                index,
                len: self.items.len(),
            });
        };
        events.push(EventKind::ItemSelected, format!("Selected {}", item.name));
        self.selected = Some(index);
        Ok(())
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The currently selected item, if the pointer is set
    pub fn selected(&self) -> Option<&Item> {
        self.selected.and_then(|i| self.items.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Inventory, EventLog) {
        let mut log = EventLog::new();
        let mut inv = Inventory::new();
        inv.add(Item::weapon("Sword", 20), &mut log);
        inv.add(Item::armor("Chainmail", 20), &mut log);
        inv.add(Item::consumable("Health Potion", 50), &mut log);
        (inv, log)
    }

    #[test]
    fn add_preserves_insertion_order() {
        let (inv, mut log) = sample();

        let names: Vec<&str> = inv.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Sword", "Chainmail", "Health Potion"]);
        assert_eq!(
            log.drain()
                .iter()
                .filter(|e| e.kind == EventKind::InventoryChanged)
                .count(),
            3
        );
    }

    #[test]
    fn select_sets_the_pointer_and_reports_the_name() {
        let (mut inv, mut log) = sample();
        log.drain();

        inv.select(1, &mut log).unwrap();
        assert_eq!(inv.selected_index(), Some(1));
        assert_eq!(inv.selected().unwrap().name, "Chainmail");

        let events = log.drain();
        assert_eq!(events[0].kind, EventKind::ItemSelected);
        assert_eq!(events[0].text, "Selected Chainmail");
    }

    #[test]
    fn out_of_range_select_leaves_everything_unchanged() {
        let (mut inv, mut log) = sample();
        inv.select(0, &mut log).unwrap();
        log.drain();

        let err = inv.select(5, &mut log).unwrap_err();
        assert_eq!(err, GameError::OutOfRange { index: 5, len: 3 });
        assert_eq!(inv.selected_index(), Some(0));
        assert_eq!(inv.count(), 3);
        assert!(log.is_empty());
    }

    #[test]
    fn nothing_selected_by_default() {
        let (inv, _) = sample();
        assert!(inv.selected().is_none());
        assert!(inv.selected_index().is_none());
    }
}
