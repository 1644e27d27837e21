//! Presentation layout: pure functions from bodies to screen rectangles
//!
//! No renderer mutates simulation state. The host hands these rectangles to
//! whatever actually draws; the tiling helpers mirror how the sprite art is
//! repeated to fill a strip.

use crate::physics::RigidBody;
use crate::sim::{GamePhase, GameState};

/// Source art metrics for the pipe core segment
const PIPE_ART_WIDTH: f32 = 160.0;
const PIPE_ART_SEGMENT_HEIGHT: f32 = 50.0;

/// Which sprite sheet entry a rectangle is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Background,
    /// Capped pipe hanging from the top of the playfield
    PipeTop,
    /// Plain pipe column rising from the floor
    PipeBody,
    Floor,
    Bird,
    StartOverlay,
}

/// A screen-space rectangle (top-left origin, +y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl ScreenRect {
    /// The layout contract: a body's bounding box, verbatim
    pub fn from_body(body: &RigidBody) -> Self {
        let aabb = body.aabb();
        let size = aabb.size();
        Self {
            x: aabb.min.x,
            y: aabb.min.y,
            w: size.x,
            h: size.y,
        }
    }
}

/// One drawable: sprite kind, rectangle, optional animation pose
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub rect: ScreenRect,
    pub pose: Option<u8>,
}

/// Square tiles needed to paint a floor strip edge to edge
pub fn floor_tile_count(rect: &ScreenRect) -> u32 {
    (rect.w / rect.h).ceil() as u32
}

/// Core segments needed to paint a pipe column
///
/// The segment height scales with the ratio of the source art width to the
/// on-screen width, the same way the art was sliced.
pub fn pipe_segment_count(rect: &ScreenRect) -> u32 {
    let segment_height = PIPE_ART_SEGMENT_HEIGHT * (PIPE_ART_WIDTH / rect.w);
    (rect.h / segment_height).ceil() as u32
}

/// Assemble the frame's draw list, back to front
pub fn draw_list(state: &GameState) -> Vec<Sprite> {
    let world = state.world();
    let mut sprites = Vec::with_capacity(6 + state.obstacles().len() * 2);

    for id in state.background() {
        sprites.push(Sprite {
            kind: SpriteKind::Background,
            rect: ScreenRect::from_body(world.body(id)),
            pose: None,
        });
    }

    for pair in state.obstacles() {
        sprites.push(Sprite {
            kind: SpriteKind::PipeTop,
            rect: ScreenRect::from_body(world.body(pair.top)),
            pose: None,
        });
        sprites.push(Sprite {
            kind: SpriteKind::PipeBody,
            rect: ScreenRect::from_body(world.body(pair.bottom)),
            pose: None,
        });
    }

    for id in state.floor() {
        sprites.push(Sprite {
            kind: SpriteKind::Floor,
            rect: ScreenRect::from_body(world.body(id)),
            pose: None,
        });
    }

    sprites.push(Sprite {
        kind: SpriteKind::Bird,
        rect: ScreenRect::from_body(world.body(state.bird())),
        pose: Some(state.bird_pose()),
    });

    if state.phase() == GamePhase::Idle {
        sprites.push(Sprite {
            kind: SpriteKind::StartOverlay,
            rect: ScreenRect::from_body(world.body(state.start_overlay())),
            pose: None,
        });
    }

    sprites
}
