//! Tiles: drawable regions of a loaded texture

use crate::foundation::math::{Rect, Vec2};

/// Identifier of a loaded texture in the
/// [`TextureCatalog`](crate::assets::TextureCatalog)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub usize);

/// A drawable sub-region of a texture sheet
///
/// `source` addresses pixels in the sheet; `size` is the region's size in
/// display units (pixels divided by the texture scale).
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Texture the region belongs to
    pub texture: TextureId,

    /// Source rectangle in sheet pixels
    pub source: Rect,

    /// Display size in world units at scale 1
    pub size: Vec2,
}

impl Tile {
    /// Create a tile from a texture region
    pub fn new(texture: TextureId, source: Rect, size: Vec2) -> Self {
        Self {
            texture,
            source,
            size,
        }
    }

    /// Display width in world units
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Display height in world units
    pub fn height(&self) -> f32 {
        self.size.y
    }
}
