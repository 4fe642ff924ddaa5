//! Enemy attack rolls

use rand::Rng;

/// Inclusive bounds of the enemy counter-attack roll
pub const ENEMY_ATTACK_MIN: i32 = 20;
pub const ENEMY_ATTACK_MAX: i32 = 40;

/// Roll the enemy's counter-attack magnitude, uniform over [20, 40].
pub fn enemy_attack_roll(rng: &mut impl Rng) -> i32 {
    rng.gen_range(ENEMY_ATTACK_MIN..=ENEMY_ATTACK_MAX)
}
