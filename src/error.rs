//! Error taxonomy
//!
//! Every error here is recoverable: a rejected command leaves the
//! match untouched and is also mirrored onto the event log so the
//! presentation layer can show it.

use thiserror::Error;

/// Reasons a command can be rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Inventory index outside current bounds
    #[error("index {index} is out of range (inventory holds {len} items)")]
    OutOfRange { index: usize, len: usize },

    /// Action needs a selected item and none is set
    #[error("no item selected")]
    NoSelection,

    /// Command arrived after the match already ended
    #[error("the match is already over")]
    InvalidState,
}
