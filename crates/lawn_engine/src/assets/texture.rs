//! Texture loading and the scale-aware texture catalog
//!
//! Textures are decoded once at startup. Each texture carries a scale factor
//! (source pixels per display unit), so art authored at 2x resolution
//! occupies the same world-space footprint as 1x art.

use std::collections::HashMap;
use std::path::Path;

use image::RgbaImage;

use crate::foundation::math::{Rect, Vec2};
use crate::render::{TextureId, Tile};

use super::AssetError;

/// Sampling filter for a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextureFilter {
    /// Nearest-neighbor sampling, crisp for pixel art
    #[default]
    Nearest,

    /// Bilinear sampling
    Linear,
}

/// Texture loading configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TextureConfig {
    /// Source pixels per display unit
    pub scale: f32,

    /// Sampling filter
    pub filter: TextureFilter,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            filter: TextureFilter::Nearest,
        }
    }
}

impl TextureConfig {
    /// Config with the given scale and default filtering
    pub fn with_scale(scale: f32) -> Self {
        Self {
            scale,
            ..Default::default()
        }
    }
}

/// A loaded texture sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Texture {
    /// Catalog id
    pub id: TextureId,

    /// Width in source pixels
    pub width: u32,

    /// Height in source pixels
    pub height: u32,

    /// Source pixels per display unit
    pub scale: f32,
}

impl Texture {
    /// Size in display units
    pub fn display_size(&self) -> Vec2 {
        Vec2::new(self.width as f32 / self.scale, self.height as f32 / self.scale)
    }

    /// Tile covering the whole sheet
    pub fn as_tile(&self) -> Tile {
        Tile::new(
            self.id,
            Rect::of_size(self.width, self.height),
            self.display_size(),
        )
    }

    /// Extract a sub-rectangle tile; coordinates are sheet pixels
    pub fn tile(&self, x: u32, y: u32, width: u32, height: u32) -> Tile {
        Tile::new(
            self.id,
            Rect::new(x, y, width, height),
            Vec2::new(width as f32 / self.scale, height as f32 / self.scale),
        )
    }
}

/// Owns decoded pixel data and hands out [`Texture`] descriptors
#[derive(Default)]
pub struct TextureCatalog {
    entries: Vec<CatalogEntry>,
}

struct CatalogEntry {
    texture: Texture,
    config: TextureConfig,
    pixels: Option<RgbaImage>,
}

impl TextureCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an image file into the catalog
    pub fn load(&mut self, path: &Path, config: &TextureConfig) -> Result<Texture, AssetError> {
        let decoded = image::open(path)
            .map_err(|source| AssetError::Load {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();

        let (width, height) = decoded.dimensions();
        log::debug!("loaded texture {} ({width}x{height})", path.display());
        Ok(self.register(width, height, config, Some(decoded)))
    }

    /// Decode an id-keyed map of image sources relative to `root`
    ///
    /// All-or-nothing: the first failure aborts the load.
    pub fn load_keyed(
        &mut self,
        root: &Path,
        sources: &[(&str, &str)],
        config: &TextureConfig,
    ) -> Result<HashMap<String, Texture>, AssetError> {
        let mut textures = HashMap::with_capacity(sources.len());
        for (key, relative) in sources {
            let texture = self.load(&root.join(relative), config)?;
            textures.insert((*key).to_string(), texture);
        }
        Ok(textures)
    }

    /// Register a solid placeholder texture with no pixel data
    ///
    /// Stands in for real art in tests and headless runs.
    pub fn solid(&mut self, width: u32, height: u32, config: &TextureConfig) -> Texture {
        self.register(width, height, config, None)
    }

    /// Look up a texture descriptor by id
    pub fn texture(&self, id: TextureId) -> Result<Texture, AssetError> {
        self.entries
            .get(id.0)
            .map(|entry| entry.texture)
            .ok_or(AssetError::UnknownTexture(id))
    }

    /// Decoded pixels for a texture, if it has any
    pub fn pixels(&self, id: TextureId) -> Option<&RgbaImage> {
        self.entries.get(id.0)?.pixels.as_ref()
    }

    /// Loading configuration a texture was registered with
    pub fn config(&self, id: TextureId) -> Result<&TextureConfig, AssetError> {
        self.entries
            .get(id.0)
            .map(|entry| &entry.config)
            .ok_or(AssetError::UnknownTexture(id))
    }

    /// Number of textures in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn register(
        &mut self,
        width: u32,
        height: u32,
        config: &TextureConfig,
        pixels: Option<RgbaImage>,
    ) -> Texture {
        let texture = Texture {
            id: TextureId(self.entries.len()),
            width,
            height,
            scale: config.scale,
        };
        self.entries.push(CatalogEntry {
            texture,
            config: config.clone(),
            pixels,
        });
        texture
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_display_size_divides_by_scale() {
        let mut catalog = TextureCatalog::new();
        let texture = catalog.solid(446, 192, &TextureConfig::with_scale(2.0));

        let size = texture.display_size();
        assert_relative_eq!(size.x, 223.0);
        assert_relative_eq!(size.y, 96.0);
    }

    #[test]
    fn test_tile_sub_rectangle() {
        let mut catalog = TextureCatalog::new();
        let texture = catalog.solid(512, 512, &TextureConfig::with_scale(2.0));

        let tile = texture.tile(248, 242, 246, 169);

        assert_eq!(tile.source, Rect::new(248, 242, 246, 169));
        assert_relative_eq!(tile.size.x, 123.0);
        assert_relative_eq!(tile.size.y, 84.5);
    }

    #[test]
    fn test_as_tile_covers_whole_sheet() {
        let mut catalog = TextureCatalog::new();
        let texture = catalog.solid(100, 50, &TextureConfig::default());

        let tile = texture.as_tile();

        assert_eq!(tile.source, Rect::of_size(100, 50));
        assert_relative_eq!(tile.size.x, 100.0);
        assert_relative_eq!(tile.size.y, 50.0);
    }

    #[test]
    fn test_catalog_lookup() {
        let mut catalog = TextureCatalog::new();
        let first = catalog.solid(10, 10, &TextureConfig::default());
        let second = catalog.solid(20, 20, &TextureConfig::with_scale(2.0));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.texture(first.id).unwrap(), first);
        assert_eq!(catalog.texture(second.id).unwrap(), second);
        assert!(catalog.pixels(first.id).is_none());
        assert!(matches!(
            catalog.texture(TextureId(99)),
            Err(AssetError::UnknownTexture(_))
        ));
    }

    #[test]
    fn test_load_missing_file_fails_fast() {
        let mut catalog = TextureCatalog::new();
        let result = catalog.load(
            Path::new("no/such/texture.png"),
            &TextureConfig::default(),
        );

        assert!(matches!(result, Err(AssetError::Load { .. })));
    }
}
