//! The cooperative baking scheduler.

use glam::Vec3;
use rayon::prelude::*;
use zond_core::{Program, eval};

use crate::atlas::{ATLAS_SIDE, TILE_EDGE, VolumeTarget, tile_origin};
use crate::error::BakeError;
use crate::progress::LoadProgress;

/// Voxel centers outside this radius keep the 0.0 sentinel instead of being
/// evaluated; sprites are authored to fit the unit sphere.
pub const GUARD_RADIUS: f32 = 1.1;

/// A fully sampled volume: parallel distance and material arrays in
/// X-fastest order.
#[derive(Debug, Clone)]
pub struct BakedVolume {
    pub distance: Vec<f32>,
    pub material: Vec<f32>,
    pub resolution: usize,
}

impl BakedVolume {
    /// Flat index of voxel `(x, y, z)`.
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (z * self.resolution + y) * self.resolution + x
    }
}

/// Sample `program` over an `n³` grid covering `[-1, 1]³`.
///
/// Exactly one Z-layer is processed per scheduling quantum, in increasing Z
/// order, with a yield to the host loop in between — the caller's frame
/// loop keeps running while the bake progresses. Rows within the active
/// layer fan out over the rayon pool; the program is read-only, so
/// concurrent evaluation is safe.
pub async fn bake_volume(program: &Program, resolution: usize) -> BakedVolume {
    let n = resolution;
    let mut volume = BakedVolume {
        distance: vec![0.0; n * n * n],
        material: vec![0.0; n * n * n],
        resolution: n,
    };

    // Voxel i maps to the center of its cell in [-1, 1]
    let half_texel = 1.0 / (2 * n) as f32;
    let span = (n - 1).max(1) as f32;
    let to_unit = |i: usize| 2.0 * (half_texel + i as f32 / span) - 1.0;

    tracing::debug!(resolution = n, cells = program.len(), "baking volume");

    for z in 0..n {
        let zu = to_unit(z);
        let layer = z * n * n;
        let dist_layer = &mut volume.distance[layer..layer + n * n];
        let mat_layer = &mut volume.material[layer..layer + n * n];

        dist_layer
            .par_chunks_mut(n)
            .zip(mat_layer.par_chunks_mut(n))
            .enumerate()
            .for_each(|(y, (dist_row, mat_row))| {
                let yu = to_unit(y);
                for x in 0..n {
                    let p = Vec3::new(to_unit(x), yu, zu);
                    if p.length() < GUARD_RADIUS {
                        let hit = eval(program, p);
                        dist_row[x] = hit.distance;
                        mat_row[x] = hit.material;
                    }
                }
            });

        tracing::trace!(layer = z, "baked layer");
        tokio::task::yield_now().await;
    }

    volume
}

/// Bake `program` at the atlas tile resolution and upload it into the
/// sprite slot's tile of the paired distance and material atlases.
///
/// `progress.started` is bumped synchronously before any sampling,
/// `progress.finished` once the upload is done; the slot's texture region
/// must not be sampled until the returned future resolves.
pub async fn bake_to_atlas<D, M>(
    program: &Program,
    slot: usize,
    distances: &mut D,
    materials: &mut M,
    progress: &LoadProgress,
) -> Result<(), BakeError>
where
    D: VolumeTarget,
    M: VolumeTarget,
{
    let capacity = ATLAS_SIDE * ATLAS_SIDE;
    if slot >= capacity {
        return Err(BakeError::SlotOutOfRange { slot, capacity });
    }

    progress.begin();
    let volume = bake_volume(program, TILE_EDGE).await;

    let (origin_x, origin_y) = tile_origin(slot);
    distances.upload(&volume.distance, origin_x, origin_y, TILE_EDGE);
    materials.upload(&volume.material, origin_x, origin_y, TILE_EDGE);

    progress.complete();
    tracing::debug!(slot, origin_x, origin_y, "bake uploaded");
    Ok(())
}
