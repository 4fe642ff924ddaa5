//! External game data

pub mod loader;

pub use loader::{default_loadout, load_loadout, Loadout};
