//! Entity and bounding-box types
//!
//! Every moving object shares the same data and the same update rule; they
//! differ only by category, which decides collision participation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::TravelAxis;

/// What an entity is, for collision and draw purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Player,
    Enemy,
    /// Cosmetic only, never collides
    Decoration,
}

impl Category {
    pub fn collides(&self) -> bool {
        !matches!(self, Category::Decoration)
    }
}

/// Axis-aligned bounding box (min = bottom-left, max = top-right)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from its bottom-left corner and size
    pub fn from_corner(corner: Vec2, size: Vec2) -> Self {
        Self::new(corner, corner + size)
    }

    /// Strict overlap: boxes that only share an edge do not intersect
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// A moving object in the play field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub category: Category,
    /// Bottom-left corner
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub size: Vec2,
}

impl Entity {
    pub fn new(id: u32, category: Category, pos: Vec2, size: Vec2) -> Self {
        Self {
            id,
            category,
            pos,
            vel: Vec2::ZERO,
            size,
        }
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_corner(self.pos, self.size)
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y
    }

    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn set_left(&mut self, left: f32) {
        self.pos.x = left;
    }

    pub fn set_right(&mut self, right: f32) {
        self.pos.x = right - self.size.x;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.pos.y = bottom;
    }

    pub fn set_top(&mut self, top: f32) {
        self.pos.y = top - self.size.y;
    }

    /// True once the whole box is past the edge opposite the spawn edge
    pub fn has_exited(&self, axis: TravelAxis) -> bool {
        match axis {
            TravelAxis::Horizontal => self.right() < 0.0,
            TravelAxis::Vertical => self.top() < 0.0,
        }
    }

    /// True if no part of the box lies inside `[0, viewport]`
    pub fn is_outside(&self, viewport: Vec2) -> bool {
        !self.aabb().overlaps(&Aabb::new(Vec2::ZERO, viewport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::from_corner(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));

        let c = boxed(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_partial_overlap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(5.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = boxed(0.0, 0.0, 100.0, 100.0);
        let inner = boxed(40.0, 40.0, 5.0, 5.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_edge_setters() {
        let mut e = Entity::new(1, Category::Player, Vec2::ZERO, Vec2::new(20.0, 10.0));
        e.set_top(850.0);
        assert_eq!(e.top(), 850.0);
        assert_eq!(e.bottom(), 840.0);
        e.set_right(100.0);
        assert_eq!(e.left(), 80.0);
        assert_eq!(e.center(), Vec2::new(90.0, 845.0));
    }

    #[test]
    fn test_exit_detection_per_axis() {
        let size = Vec2::new(10.0, 10.0);
        let e = Entity::new(1, Category::Enemy, Vec2::new(-10.0, 50.0), size);
        // right == 0 is still touching the edge
        assert!(!e.has_exited(TravelAxis::Horizontal));

        let e = Entity::new(1, Category::Enemy, Vec2::new(-10.5, 50.0), size);
        assert!(e.has_exited(TravelAxis::Horizontal));
        assert!(!e.has_exited(TravelAxis::Vertical));

        let e = Entity::new(1, Category::Enemy, Vec2::new(50.0, -11.0), size);
        assert!(e.has_exited(TravelAxis::Vertical));
    }

    #[test]
    fn test_decorations_never_collide() {
        assert!(!Category::Decoration.collides());
        assert!(Category::Enemy.collides());
    }
}
