//! Game module - match state machine and command surface

mod state;

pub use state::{Game, MatchPhase};
