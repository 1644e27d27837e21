//! Body storage, integration, and contact-start reporting

use std::collections::HashSet;

use glam::Vec2;

use super::body::{Aabb, BodyId, RigidBody};

/// A pair of bodies that began overlapping during the most recent step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub a: BodyId,
    pub b: BodyId,
}

impl Contact {
    /// True if either side of the pair is `id`
    #[inline]
    pub fn involves(&self, id: BodyId) -> bool {
        self.a == id || self.b == id
    }
}

/// The physics world: a slot arena of bodies plus contact bookkeeping
#[derive(Debug, Default)]
pub struct World {
    slots: Vec<Option<RigidBody>>,
    free: Vec<u32>,
    /// Global gravity, applied to dynamic bodies only. Zero by default.
    pub gravity: Vec2,
    overlapping: HashSet<(BodyId, BodyId)>,
    started: Vec<Contact>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, body: RigidBody) -> BodyId {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot as usize] = Some(body);
                BodyId(slot)
            }
            None => {
                self.slots.push(Some(body));
                BodyId(self.slots.len() as u32 - 1)
            }
        }
    }

    /// Remove a body; its handle becomes invalid immediately
    pub fn remove(&mut self, id: BodyId) {
        let slot = self
            .slots
            .get_mut(id.0 as usize)
            .expect("body id out of range");
        assert!(slot.take().is_some(), "body removed twice");
        self.free.push(id.0);
        self.overlapping.retain(|&(a, b)| a != id && b != id);
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.slots
            .get(id.0 as usize)
            .is_some_and(|slot| slot.is_some())
    }

    pub fn body(&self, id: BodyId) -> &RigidBody {
        self.slots[id.0 as usize].as_ref().expect("stale body handle")
    }

    pub fn body_mut(&mut self, id: BodyId) -> &mut RigidBody {
        self.slots[id.0 as usize].as_mut().expect("stale body handle")
    }

    /// Number of live bodies
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate live bodies with their handles
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &RigidBody)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|body| (BodyId(i as u32), body)))
    }

    /// Advance every body by `dt`, then refresh contact-start bookkeeping
    pub fn step(&mut self, dt: f32) {
        let gravity = self.gravity;
        for body in self.slots.iter_mut().flatten() {
            if !body.is_static {
                body.vel += gravity * dt;
            }
            body.pos += body.vel * dt;
        }
        self.detect_contacts();
    }

    /// Contacts that began during the most recent [`step`](World::step)
    ///
    /// A pair is reported exactly once per contiguous overlap episode; it
    /// can appear again only after the bodies separate.
    pub fn contacts(&self) -> &[Contact] {
        &self.started
    }

    fn detect_contacts(&mut self) {
        self.started.clear();

        // A dozen bodies at most; brute force beats a broad phase here
        let live: Vec<(BodyId, Aabb, bool)> = self
            .iter()
            .filter(|(_, body)| body.solid)
            .map(|(id, body)| (id, body.aabb(), body.is_static))
            .collect();

        let mut now = HashSet::with_capacity(self.overlapping.len().max(4));
        for (i, &(a, a_box, a_static)) in live.iter().enumerate() {
            for &(b, b_box, b_static) in &live[i + 1..] {
                if a_static && b_static {
                    continue;
                }
                if a_box.overlaps(&b_box) {
                    let key = (a.min(b), a.max(b));
                    now.insert(key);
                    if !self.overlapping.contains(&key) {
                        self.started.push(Contact { a: key.0, b: key.1 });
                    }
                }
            }
        }
        self.overlapping = now;
    }
}
