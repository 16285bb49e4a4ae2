//! Player versus enemy collision
//!
//! Plain AABB overlap. Decorations are filtered out by category so callers
//! can pass any entity iterator.

use super::entity::Entity;

/// First colliding entity in iteration order, if any
pub fn first_hit<'a>(
    player: &Entity,
    others: impl IntoIterator<Item = &'a Entity>,
) -> Option<&'a Entity> {
    let player_box = player.aabb();
    others
        .into_iter()
        .filter(|e| e.category.collides() && e.id != player.id)
        .find(|e| player_box.overlaps(&e.aabb()))
}

/// True if the player's box overlaps any enemy's box
pub fn player_hits_any<'a>(
    player: &Entity,
    enemies: impl IntoIterator<Item = &'a Entity>,
) -> bool {
    first_hit(player, enemies).is_some()
}
