//! Integration tests for the cooperative baking pipeline.

// Tests are allowed to use expect/unwrap for cleaner error messages
#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use std::future::Future;
use std::pin::pin;
use std::task::{Context, Poll, Waker};

use zond_bake::{
    ATLAS_SIDE, AtlasTexture, BakeError, GUARD_RADIUS, LoadProgress, TILE_EDGE, bake_to_atlas,
    bake_volume, tile_origin,
};
use zond_core::{box3, material, sphere};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

// ----------------------------------------------------------------------------
// Grid sampling
// ----------------------------------------------------------------------------

#[tokio::test(flavor = "current_thread")]
async fn union_bake_signs_and_materials() {
    init_tracing();
    let program = sphere(1.0)
        .set_material(material::GOLD)
        .union(&box3(1.0, 1.0, 1.0).set_material(material::CLAY));

    let n = 17;
    let volume = bake_volume(&program, n).await;
    assert_eq!(volume.distance.len(), n * n * n);
    assert_eq!(volume.material.len(), n * n * n);

    // Deep inside both operands near the center
    let center = volume.index(n / 2, n / 2, n / 2);
    assert!(volume.distance[center] < 0.0);
    // The box face is nearer than the sphere surface there, so it wins
    assert_eq!(volume.material[center], f32::from(material::CLAY));

    // Just off the +X face, outside both shapes but inside the guard sphere
    let edge = volume.index(n - 1, n / 2, n / 2);
    assert!(volume.distance[edge] > 0.0);
    assert_eq!(volume.material[edge], f32::from(material::CLAY));
}

#[tokio::test(flavor = "current_thread")]
async fn corner_voxels_keep_guard_sentinel() {
    let n = 17;
    let volume = bake_volume(&sphere(1.0), n).await;

    // The cube corner lies at radius ~sqrt(3), past the guard sphere; a
    // sphere of radius 1 would report ~0.63 there if it were sampled.
    for (x, y, z) in [(0, 0, 0), (n - 1, 0, 0), (n - 1, n - 1, n - 1)] {
        assert_eq!(volume.distance[volume.index(x, y, z)], 0.0);
        assert_eq!(volume.material[volume.index(x, y, z)], 0.0);
    }

    // Sanity: the guard admits the whole sprite volume
    assert!(GUARD_RADIUS > 1.0);
}

// ----------------------------------------------------------------------------
// Scheduling
// ----------------------------------------------------------------------------

#[tokio::test(flavor = "current_thread")]
async fn bake_yields_once_per_layer() {
    let program = sphere(1.0);
    let n = 9;
    let mut fut = pin!(bake_volume(&program, n));

    let waker = Waker::noop();
    let mut cx = Context::from_waker(waker);

    let mut quanta = 0;
    while fut.as_mut().poll(&mut cx).is_pending() {
        quanta += 1;
        assert!(quanta <= n, "bake suspended more often than once per layer");
    }
    assert_eq!(quanta, n);
}

#[tokio::test(flavor = "current_thread")]
async fn progress_completes_only_after_resolution() {
    let program = sphere(1.0);
    let progress = LoadProgress::new();
    let mut distances = AtlasTexture::new();
    let mut materials = AtlasTexture::new();

    {
        let mut fut = pin!(bake_to_atlas(
            &program,
            0,
            &mut distances,
            &mut materials,
            &progress,
        ));
        let waker = Waker::noop();
        let mut cx = Context::from_waker(waker);

        // Requested synchronously at the first poll, not finished until the
        // future resolves
        assert!(fut.as_mut().poll(&mut cx).is_pending());
        assert_eq!(progress.started(), 1);
        assert_eq!(progress.finished(), 0);

        loop {
            match fut.as_mut().poll(&mut cx) {
                Poll::Pending => assert_eq!(progress.finished(), 0),
                Poll::Ready(result) => {
                    result.expect("bake should succeed");
                    break;
                }
            }
        }
    }

    assert_eq!(progress.started(), 1);
    assert_eq!(progress.finished(), 1);
}

// ----------------------------------------------------------------------------
// Atlas upload
// ----------------------------------------------------------------------------

#[tokio::test(flavor = "current_thread")]
async fn bake_writes_into_requested_tile() {
    init_tracing();
    let program = sphere(1.0).set_material(material::JADE);
    let progress = LoadProgress::new();
    let mut distances = AtlasTexture::new();
    let mut materials = AtlasTexture::new();

    let slot = 7;
    bake_to_atlas(&program, slot, &mut distances, &mut materials, &progress)
        .await
        .expect("bake should succeed");

    let (origin_x, origin_y) = tile_origin(slot);
    let mid = TILE_EDGE / 2;

    // Center voxel of the tile is inside the sphere
    let d = distances.voxel(origin_x + mid, origin_y + mid, mid);
    assert!(d < 0.0);
    let m = materials.voxel(origin_x + mid, origin_y + mid, mid);
    assert_eq!(m, f32::from(material::JADE));

    // Slot 0 was never baked
    assert_eq!(distances.voxel(mid, mid, mid), 0.0);
}

#[tokio::test(flavor = "current_thread")]
async fn out_of_range_slot_is_rejected_without_progress() {
    let program = sphere(1.0);
    let progress = LoadProgress::new();
    let mut distances = AtlasTexture::new();
    let mut materials = AtlasTexture::new();

    let bad_slot = ATLAS_SIDE * ATLAS_SIDE;
    let result = bake_to_atlas(&program, bad_slot, &mut distances, &mut materials, &progress).await;
    assert!(matches!(result, Err(BakeError::SlotOutOfRange { .. })));
    assert_eq!(progress.started(), 0);
    assert_eq!(progress.finished(), 0);
}

// ----------------------------------------------------------------------------
// Loading-screen flow
// ----------------------------------------------------------------------------

#[tokio::test(flavor = "current_thread")]
async fn sequential_bakes_drive_fraction_to_one() {
    let progress = LoadProgress::new();
    let mut distances = AtlasTexture::new();
    let mut materials = AtlasTexture::new();

    let sprites = [
        sphere(0.8),
        box3(0.5, 0.5, 0.5).smooth(0.1),
        sphere(0.6).subtract(&sphere(0.4)),
    ];
    for (slot, program) in sprites.iter().enumerate() {
        bake_to_atlas(program, slot, &mut distances, &mut materials, &progress)
            .await
            .expect("bake should succeed");
    }

    assert_eq!(progress.started(), 3);
    assert_eq!(progress.finished(), 3);
    assert!((progress.fraction() - 1.0).abs() < f32::EPSILON);
}
