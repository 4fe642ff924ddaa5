//! Combat system

pub mod enemy;
pub mod stats;

pub use enemy::{enemy_attack_roll, ENEMY_ATTACK_MAX, ENEMY_ATTACK_MIN};
pub use stats::StatBlock;
