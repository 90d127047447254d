//! Volume atlas layout and the upload seam.
//!
//! Baked sprites share one large 3D texture laid out as a square grid of
//! `ATLAS_SIDE × ATLAS_SIDE` tiles, each `TILE_EDGE³` voxels, all at depth
//! zero. The GPU texture itself belongs to the rendering subsystem;
//! [`VolumeTarget`] is the seam this crate uploads through, and
//! [`AtlasTexture`] is the in-memory implementation used by tests and the
//! viewer.

/// Voxels along each edge of an atlas tile.
pub const TILE_EDGE: usize = 65;

/// Tiles along each edge of the atlas.
pub const ATLAS_SIDE: usize = 5;

/// Texel origin of a sprite slot inside the atlas.
pub fn tile_origin(slot: usize) -> (usize, usize) {
    let tile_y = slot / ATLAS_SIDE;
    let tile_x = slot - tile_y * ATLAS_SIDE;
    (tile_x * TILE_EDGE, tile_y * TILE_EDGE)
}

/// Destination for baked volume data.
///
/// `data` is a `size³` brick in X-fastest order; it lands with its corner at
/// `(origin_x, origin_y, 0)`.
pub trait VolumeTarget {
    fn upload(&mut self, data: &[f32], origin_x: usize, origin_y: usize, size: usize);
}

/// In-memory float volume with the shared atlas layout.
#[derive(Debug, Clone)]
pub struct AtlasTexture {
    edge: usize,
    depth: usize,
    data: Vec<f32>,
}

impl AtlasTexture {
    pub fn new() -> Self {
        Self::with_layout(ATLAS_SIDE, TILE_EDGE)
    }

    /// Atlas of `side × side` tiles with `tile_edge` voxels per tile edge.
    pub fn with_layout(side: usize, tile_edge: usize) -> Self {
        let edge = side * tile_edge;
        Self {
            edge,
            depth: tile_edge,
            data: vec![0.0; edge * edge * tile_edge],
        }
    }

    /// Width/height of the atlas in voxels.
    pub fn edge(&self) -> usize {
        self.edge
    }

    /// Depth of the atlas in voxels (one tile).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Read one voxel at atlas coordinates.
    pub fn voxel(&self, x: usize, y: usize, z: usize) -> f32 {
        self.data[(z * self.edge + y) * self.edge + x]
    }
}

impl Default for AtlasTexture {
    fn default() -> Self {
        Self::new()
    }
}

impl VolumeTarget for AtlasTexture {
    fn upload(&mut self, data: &[f32], origin_x: usize, origin_y: usize, size: usize) {
        debug_assert_eq!(data.len(), size * size * size, "brick size mismatch");
        debug_assert!(origin_x + size <= self.edge && origin_y + size <= self.edge);

        for z in 0..size.min(self.depth) {
            for y in 0..size {
                let src = (z * size + y) * size;
                let dst = (z * self.edge + origin_y + y) * self.edge + origin_x;
                self.data[dst..dst + size].copy_from_slice(&data[src..src + size]);
            }
        }
    }
}
