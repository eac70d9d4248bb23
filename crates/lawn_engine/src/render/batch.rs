//! Quad batch accumulation and the surface submission seam

use thiserror::Error;

use crate::ecs::components::TransformComponent;
use crate::foundation::math::{Rect, Vec2};

use super::tile::{TextureId, Tile};

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// The surface refused the batch
    #[error("surface rejected batch: {0}")]
    SubmitFailed(String),
}

/// One quad queued for drawing
#[derive(Debug, Clone, PartialEq)]
pub struct QuadInstance {
    /// Texture to sample from
    pub texture: TextureId,

    /// Source rectangle in sheet pixels
    pub source: Rect,

    /// Top-left corner of the quad in world units
    pub position: Vec2,

    /// Quad size in world units
    pub size: Vec2,

    /// Rotation in radians around the quad origin
    pub rotation: f32,
}

/// Accumulates quads for one batched submission per frame
#[derive(Debug, Default)]
pub struct QuadBatch {
    quads: Vec<QuadInstance>,
}

impl QuadBatch {
    /// Create an empty batch
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame, discarding the previous frame's quads
    pub fn begin(&mut self) {
        self.quads.clear();
    }

    /// Queue a tile at the given transform
    pub fn draw_tile(&mut self, tile: &Tile, transform: &TransformComponent) {
        self.quads.push(QuadInstance {
            texture: tile.texture,
            source: tile.source,
            position: transform.quad_origin(),
            size: Vec2::new(
                tile.size.x * transform.scale.x,
                tile.size.y * transform.scale.y,
            ),
            rotation: transform.rotation,
        });
    }

    /// The quads queued so far this frame, in draw order
    pub fn quads(&self) -> &[QuadInstance] {
        &self.quads
    }

    /// Number of quads queued this frame
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    /// Whether the batch holds no quads
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }
}

/// Consumer of finished quad batches — the GPU collaborator seam
pub trait Surface {
    /// Submit one frame's batch as a single draw submission
    fn submit(&mut self, batch: &QuadBatch) -> Result<(), RenderError>;
}

/// Surface that consumes batches without a GPU
///
/// Counts frames and quads; useful for headless runs and tests.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    frames: u64,
    quads_submitted: u64,
}

impl HeadlessSurface {
    /// Create a new headless surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames submitted so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Total quads submitted across all frames
    pub fn quads_submitted(&self) -> u64 {
        self.quads_submitted
    }
}

impl Surface for HeadlessSurface {
    fn submit(&mut self, batch: &QuadBatch) -> Result<(), RenderError> {
        self.frames += 1;
        self.quads_submitted += batch.len() as u64;
        log::trace!("frame {}: {} quads", self.frames, batch.len());
        Ok(())
    }
}
