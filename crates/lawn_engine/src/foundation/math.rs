//! Math utilities and types
//!
//! Provides the fundamental math types for 2D game development.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Axis-aligned pixel rectangle, used for tile sub-regions of a texture sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge in pixels
    pub x: u32,

    /// Top edge in pixels
    pub y: u32,

    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle from its top-left corner and size
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering a full `width` by `height` area at the origin
    pub fn of_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Right edge in pixels (exclusive)
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Bottom edge in pixels (exclusive)
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(2, 2, 446, 192);

        assert_eq!(rect.right(), 448);
        assert_eq!(rect.bottom(), 194);
    }

    #[test]
    fn test_rect_of_size() {
        let rect = Rect::of_size(64, 32);

        assert_eq!(rect.x, 0);
        assert_eq!(rect.y, 0);
        assert_eq!(rect.width, 64);
        assert_eq!(rect.height, 32);
    }
}
