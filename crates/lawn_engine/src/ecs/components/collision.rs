//! Lane collision components
//!
//! Entities collide only with others in the same lane, along the horizontal
//! axis. An entity's occupied span is derived from its transform x plus the
//! signed extents stored here.

use crate::ecs::{Component, Entity};

/// Fixed lane index, immutable after creation
///
/// An entity never changes lanes; membership is removed only at deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneComponent {
    /// Lane index, `0..lane_count`
    pub index: usize,
}

impl Component for LaneComponent {}

impl LaneComponent {
    /// Create for the given lane
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

/// Signed horizontal extents around the transform x
///
/// The occupied span at position `x` is `[x + left, x + right]`; `left` is
/// normally negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanExtentComponent {
    /// Offset of the span's left edge from the transform x
    pub left: f32,

    /// Offset of the span's right edge from the transform x
    pub right: f32,
}

impl Component for SpanExtentComponent {}

impl SpanExtentComponent {
    /// Create from explicit edge offsets
    pub fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// Extents of a sprite of `width` display units anchored at its center
    pub fn centered(width: f32) -> Self {
        Self {
            left: -width / 2.0,
            right: width / 2.0,
        }
    }

    /// The occupied span `[left, right]` for a transform at `x`
    pub fn span_at(&self, x: f32) -> (f32, f32) {
        (x + self.left, x + self.right)
    }
}

/// Memory of which other entity currently blocks this one
///
/// At most one blocker is remembered at a time; `None` means unobstructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockerComponent {
    /// The entity currently blocking this one, if any
    pub blocking: Option<Entity>,
}

impl Component for BlockerComponent {}

impl BlockerComponent {
    /// Create with no remembered blocker
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether a blocker is currently remembered
    pub fn is_blocked(&self) -> bool {
        self.blocking.is_some()
    }

    /// Forget the remembered blocker
    pub fn clear(&mut self) {
        self.blocking = None;
    }
}
