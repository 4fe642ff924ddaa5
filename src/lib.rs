//! Emberduel - a minimal turn-based terminal combat duel
//!
//! One player, one enemy, an inventory of reusable items. The core
//! model lives in `combat`, `items` and `game`; the `ui` module is a
//! thin ratatui front end driven by the event log.

pub mod combat;
pub mod data;
pub mod error;
pub mod events;
pub mod game;
pub mod items;
pub mod ui;

// Re-export commonly used types
pub use combat::StatBlock;
pub use error::GameError;
pub use events::{EventKind, EventLog, GameEvent};
pub use game::{Game, MatchPhase};
pub use items::{Inventory, Item, ItemKind};
