//! Entity ownership and bulk updates
//!
//! The registry owns every entity. The player is a singleton created with the
//! registry; enemies and decorations live in one list kept in spawn order,
//! which is also the draw order. Category lists are views over that list.

use glam::Vec2;

use super::entity::{Category, Entity};
use crate::config::TravelAxis;

#[derive(Debug, Clone)]
pub struct EntityRegistry {
    player: Entity,
    /// Enemies and decorations, in insertion order
    entities: Vec<Entity>,
    /// Next entity ID
    next_id: u32,
}

impl EntityRegistry {
    /// Create a registry holding only the player at `pos`
    pub fn new(player_pos: Vec2, player_size: Vec2) -> Self {
        Self {
            player: Entity::new(0, Category::Player, player_pos, player_size),
            entities: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Insert an entity. A `Player` entity replaces the current player.
    pub fn add(&mut self, entity: Entity) {
        match entity.category {
            Category::Player => self.player = entity,
            Category::Enemy | Category::Decoration => self.entities.push(entity),
        }
    }

    /// Allocate an ID and insert a new entity, returning the ID
    pub fn spawn(&mut self, category: Category, pos: Vec2, size: Vec2, vel: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.add(Entity::new(id, category, pos, size).with_velocity(vel));
        id
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Entity {
        &mut self.player
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Entity> {
        self.by_category(Category::Enemy)
    }

    pub fn decorations(&self) -> impl Iterator<Item = &Entity> {
        self.by_category(Category::Decoration)
    }

    /// Every entity in draw order (player first)
    pub fn all(&self) -> impl Iterator<Item = &Entity> {
        std::iter::once(&self.player).chain(self.entities.iter())
    }

    fn by_category(&self, category: Category) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.category == category)
    }

    pub fn get(&self, id: u32) -> Option<&Entity> {
        self.all().find(|e| e.id == id)
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies().count()
    }

    pub fn decoration_count(&self) -> usize {
        self.decorations().count()
    }

    /// Number of entities including the player
    pub fn count(&self) -> usize {
        self.entities.len() + 1
    }

    /// Move every entity by its per-tick velocity
    pub fn advance(&mut self) {
        self.player.pos += self.player.vel;
        for entity in &mut self.entities {
            entity.pos += entity.vel;
        }
    }

    /// Drop entities whose box has fully crossed the exit edge.
    /// Returns how many were removed.
    pub fn prune_offscreen(&mut self, axis: TravelAxis) -> usize {
        let before = self.entities.len();
        self.entities.retain(|e| !e.has_exited(axis));
        let removed = before - self.entities.len();
        if removed > 0 {
            log::debug!("Pruned {} offscreen entities", removed);
        }
        removed
    }

    /// Keep the player's box at least `margin` away from every viewport edge
    pub fn clamp_player_to_viewport(&mut self, viewport: Vec2, margin: f32) {
        let player = &mut self.player;
        if player.top() > viewport.y - margin {
            player.set_top(viewport.y - margin);
        }
        if player.right() > viewport.x - margin {
            player.set_right(viewport.x - margin);
        }
        if player.bottom() < margin {
            player.set_bottom(margin);
        }
        if player.left() < margin {
            player.set_left(margin);
        }
    }
}
