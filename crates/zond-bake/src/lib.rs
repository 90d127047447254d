//! # Zond Bake
//!
//! Cooperative baking of SDF programs into volume textures.
//!
//! Sprites are baked once at load time: the program is sampled over a dense
//! cubic grid in `[-1, 1]³` and the resulting distance and material arrays
//! are uploaded into one tile of a shared volume atlas. A bake takes many
//! frames' worth of work, so the scheduler processes one Z-layer per
//! scheduling quantum and yields back to the host loop in between — the
//! render and input loops keep ticking while a multi-second bake runs.
//!
//! ```rust
//! use zond_bake::{AtlasTexture, LoadProgress, bake_to_atlas};
//! use zond_core::sphere;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), zond_bake::BakeError> {
//! let mut distances = AtlasTexture::new();
//! let mut materials = AtlasTexture::new();
//! let progress = LoadProgress::default();
//! bake_to_atlas(&sphere(1.0), 0, &mut distances, &mut materials, &progress).await?;
//! assert_eq!(progress.finished(), 1);
//! # Ok(())
//! # }
//! ```

mod atlas;
mod bake;
mod error;
mod progress;

pub use atlas::{ATLAS_SIDE, AtlasTexture, TILE_EDGE, VolumeTarget, tile_origin};
pub use bake::{BakedVolume, GUARD_RADIUS, bake_to_atlas, bake_volume};
pub use error::BakeError;
pub use progress::LoadProgress;
