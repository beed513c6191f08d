use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Axis-aligned rectangular collider, placed relative to the entity's
/// `MapPosition` by `offset`.
///
/// Used both for overlap rules (player × coin, player × exit) and, on bodies
/// tagged `CollidesWithTiles`, for collision against the level grid.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size whose top-left sits on the position.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::zero(),
        }
    }

    /// Collider whose bottom centre sits on the position (feet pivot).
    pub fn bottom_centered(width: f32, height: f32) -> Self {
        Self::new(width, height).with_offset(Vector2::new(-width * 0.5, -height))
    }

    /// Modify BoxCollider with given offset.
    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vector2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vector2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    /// AABB as `(x, y, w, h)`, handy for debug drawing.
    pub fn get_aabb(&self, position: Vector2) -> (f32, f32, f32, f32) {
        let (min, max) = self.aabb(position);
        (min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    /// Touching edges do not count as overlap.
    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }
}
