//! Damage application.

/// Apply damage to current HP.
///
/// # Arguments
///
/// * `current_hp` - Current HP value
/// * `damage` - Damage to apply
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}
