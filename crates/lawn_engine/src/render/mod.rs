//! 2D quad-batching renderer abstraction
//!
//! The engine accumulates one [`QuadBatch`] per frame and hands it to a
//! [`Surface`] in a single submission. The GPU device behind the surface is
//! an external collaborator; [`HeadlessSurface`] stands in for it in tests
//! and headless runs.

pub mod batch;
pub mod tile;

pub use batch::{HeadlessSurface, QuadBatch, QuadInstance, RenderError, Surface};
pub use tile::{TextureId, Tile};
