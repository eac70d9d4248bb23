//! Asset management system

pub mod texture;

pub use texture::{Texture, TextureCatalog, TextureConfig, TextureFilter};

use std::path::PathBuf;

use thiserror::Error;

use crate::render::TextureId;

/// Asset loading errors
///
/// Asset loading happens once at startup, before the game mode is
/// constructed; any failure here is fail-fast.
#[derive(Error, Debug)]
pub enum AssetError {
    /// Image file could not be read or decoded
    #[error("failed to load texture {}", path.display())]
    Load {
        /// Path of the offending image
        path: PathBuf,
        /// Underlying decoder or IO error
        #[source]
        source: image::ImageError,
    },

    /// A texture id did not resolve in the catalog
    #[error("unknown texture id {0:?}")]
    UnknownTexture(TextureId),
}
