//! Rigid bodies and axis-aligned bounding boxes

use glam::Vec2;

/// Handle to a body slot in a [`World`](super::World)
///
/// Handles are invalidated by `World::remove`; dereferencing a stale handle
/// is a programming defect and panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub(crate) u32);

/// Axis-aligned bounding box in screen coordinates (+y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap test; edge-to-edge touching does not count
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// A rectangular rigid body
///
/// Static bodies are exempt from gravity and never collide with each other;
/// they still follow an assigned velocity, which is how the kinematic scroll
/// of pipes and tiles is expressed. Non-solid bodies exist for layout only
/// and never produce contacts.
#[derive(Debug, Clone)]
pub struct RigidBody {
    /// Center position
    pub pos: Vec2,
    /// Linear velocity
    pub vel: Vec2,
    /// Half extents of the collision box
    pub half: Vec2,
    pub is_static: bool,
    pub solid: bool,
}

impl RigidBody {
    /// A dynamic, colliding body
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            half: size * 0.5,
            is_static: false,
            solid: true,
        }
    }

    /// A static, colliding body (floor, pipes)
    pub fn new_static(pos: Vec2, size: Vec2) -> Self {
        Self {
            is_static: true,
            ..Self::new(pos, size)
        }
    }

    /// A static body that takes part in layout but never in collision
    /// (background tiles, start overlay)
    pub fn new_scenery(pos: Vec2, size: Vec2) -> Self {
        Self {
            is_static: true,
            solid: false,
            ..Self::new(pos, size)
        }
    }

    /// Current bounding box
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb {
            min: self.pos - self.half,
            max: self.pos + self.half,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::from_center(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::from_center(Vec2::new(8.0, 0.0), Vec2::new(10.0, 10.0));
        let c = Aabb::from_center(Vec2::new(20.0, 0.0), Vec2::new(10.0, 10.0));

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_aabb_touching_edges_do_not_overlap() {
        let a = Aabb::from_center(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::from_center(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));

        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_body_aabb_tracks_position() {
        let mut body = RigidBody::new(Vec2::new(50.0, 50.0), Vec2::new(20.0, 10.0));
        assert_eq!(body.aabb().min, Vec2::new(40.0, 45.0));
        assert_eq!(body.aabb().max, Vec2::new(60.0, 55.0));

        body.pos.x += 5.0;
        assert_eq!(body.aabb().min.x, 45.0);
    }
}
