//! Event log
//!
//! The core reports everything that happens as discrete event records;
//! the presentation layer drains them and decides how to render. The
//! core itself has no knowledge of any rendering surface.

use crate::combat::StatBlock;

/// Semantic tag attached to every event record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Player stats changed; carries the updated snapshot
    StatsChanged(StatBlock),
    /// An item was added to the inventory
    InventoryChanged,
    /// The selection pointer moved
    ItemSelected,
    /// An item's effect was applied
    ItemUsed,
    /// Damage got through the player's defense; carries the exact amount
    DamageTaken(i32),
    /// Defense prevented all damage
    DamageAbsorbed,
    Won,
    Lost,
    Quit,
    /// A command needed a selection and none was set
    NoSelection,
    /// An inventory index was outside current bounds
    OutOfRange,
    /// A command arrived after the match ended
    InvalidState,
}

/// A single event: human-readable text plus a semantic tag
#[derive(Debug, Clone)]
pub struct GameEvent {
    pub text: String,
    pub kind: EventKind,
}

/// Ordered log of events accumulated since the last drain
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event record
    pub fn push(&mut self, kind: EventKind, text: impl Into<String>) {
        self.events.push(GameEvent {
            text: text.into(),
            kind,
        });
    }

    /// Remove and return all pending events, oldest first
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Pending events without consuming them
    pub fn pending(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_returns_events_in_push_order_and_empties_the_log() {
        let mut log = EventLog::new();
        log.push(EventKind::InventoryChanged, "first");
        log.push(EventKind::ItemSelected, "second");
        log.push(EventKind::Quit, "third");

        let events = log.drain();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].text, "first");
        assert_eq!(events[1].kind, EventKind::ItemSelected);
        assert_eq!(events[2].text, "third");
        assert!(log.is_empty());
        assert!(log.drain().is_empty());
    }
}
