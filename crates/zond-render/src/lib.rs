//! # Zond Render
//!
//! CPU raymarching over compiled SDF programs.
//!
//! This crate drives [`zond_core::eval`] through a sphere-tracing loop to
//! answer ray queries, estimate surface normals and render orthographic
//! debug frames for the standalone viewer. The real-time path renders baked
//! volumes on the GPU and never goes through here.
//!
//! ```rust
//! use glam::Vec3;
//! use zond_core::sphere;
//! use zond_render::{march, MAX_DISTANCE};
//!
//! let hit = march(&sphere(1.0), Vec3::new(5.0, 0.0, 0.0), Vec3::NEG_X);
//! assert!(hit < MAX_DISTANCE);
//! ```

mod frame;
mod raymarch;

pub use frame::{OrthoCamera, RenderError, render_frame, save_frame_png};
pub use raymarch::{MAX_DISTANCE, MAX_STEPS, SURFACE_EPSILON, march, normal};
