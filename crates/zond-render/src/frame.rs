//! Orthographic viewer frames.
//!
//! The standalone viewer renders one frame per tick by sphere tracing every
//! pixel against the live program, with a single directional light plus flat
//! ambient. This path is for authoring and debugging; shading is
//! intentionally minimal.

use std::path::Path;
use std::time::Instant;

use glam::Vec3;
use rayon::prelude::*;
use thiserror::Error;
use zond_core::Program;

use crate::raymarch::{MAX_DISTANCE, march, normal};

const LIGHT_DIR: Vec3 = Vec3::new(0.7, 0.4, 0.6);
const LIGHT_COLOR: Vec3 = Vec3::new(0.8, 0.7, 0.5);
const AMBIENT: Vec3 = Vec3::new(0.1, 0.2, 0.3);

/// Errors from the frame-dump helpers.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Orthographic camera for the viewer: parallel rays along `dir` through a
/// square view plane. The view basis is derived from the world Z axis, so
/// `dir` must not be parallel to Z.
#[derive(Debug, Clone, Copy)]
pub struct OrthoCamera {
    pub origin: Vec3,
    pub dir: Vec3,
    /// Half-extent of the view plane in world units.
    pub half_extent: f32,
}

impl Default for OrthoCamera {
    fn default() -> Self {
        Self {
            origin: Vec3::new(5.0, 0.0, 0.0),
            dir: Vec3::NEG_X,
            half_extent: 1.5,
        }
    }
}

/// Render a `width × width` orthographic frame into a flat RGB float
/// buffer (`width * width * 3` values, rows bottom to top). Misses shade
/// black.
pub fn render_frame(program: &Program, width: usize, camera: &OrthoCamera) -> Vec<f32> {
    let start = Instant::now();

    let view_right = camera.dir.cross(Vec3::Z);
    let view_up = camera.dir.cross(view_right);
    let span = (width - 1).max(1) as f32;

    let mut buf = vec![0.0f32; width * width * 3];
    buf.par_chunks_mut(width * 3)
        .enumerate()
        .for_each(|(py, row)| {
            let v = camera.half_extent * (2.0 * py as f32 / span - 1.0);
            for px in 0..width {
                let u = camera.half_extent * (2.0 * px as f32 / span - 1.0);
                let ro = camera.origin + view_right * u + view_up * v;

                let d = march(program, ro, camera.dir);
                let mut color = Vec3::ZERO;
                if d < MAX_DISTANCE {
                    let pos = ro + camera.dir * d;
                    let n = normal(program, pos);
                    let dif = n.dot(LIGHT_DIR).clamp(0.0, 1.0);
                    color = LIGHT_COLOR * dif + AMBIENT;
                }

                row[px * 3] = color.x;
                row[px * 3 + 1] = color.y;
                row[px * 3 + 2] = color.z;
            }
        });

    tracing::debug!(
        width,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "rendered viewer frame"
    );
    buf
}

/// Write a rendered frame to a PNG, flipping rows so +up is up.
pub fn save_frame_png(frame: &[f32], width: usize, path: &Path) -> Result<(), RenderError> {
    let w = width as u32;
    let mut img = image::RgbImage::new(w, w);
    for (py, row) in frame.chunks(width * 3).enumerate() {
        for px in 0..width {
            let pixel = image::Rgb([
                to_srgb_byte(row[px * 3]),
                to_srgb_byte(row[px * 3 + 1]),
                to_srgb_byte(row[px * 3 + 2]),
            ]);
            img.put_pixel(px as u32, w - 1 - py as u32, pixel);
        }
    }
    img.save(path)?;
    Ok(())
}

fn to_srgb_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}
