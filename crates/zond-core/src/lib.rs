//! # Zond Core
//!
//! Signed-distance-field construction and evaluation.
//!
//! Shapes are assembled into a [`Program`]: a flat stream of four-float
//! instruction cells that can be evaluated on the CPU by [`eval`] or handed
//! as-is to a GPU consumer of the same cell layout. Every builder call
//! returns a *new* program, so sub-expressions can be reused freely:
//!
//! ```rust
//! use zond_core::prelude::*;
//!
//! let eye = sphere(0.1).set_material(material::BONE);
//! let head = sphere(0.5)
//!     .union(&eye.translate(0.2, 0.35, 0.2).symmetry(true, false, false))
//!     .set_material(material::JADE);
//!
//! let hit = eval(&head, Vec3::ZERO);
//! assert!(hit.distance < 0.0);
//! ```
//!
//! ## Units and Conventions
//!
//! - **Distances**: arbitrary units; baked sprites live in `[-1, 1]³`
//! - **Angles**: all rotation and aperture parameters are **radians**
//! - **Precision**: `f32` throughout, for interchangeability with the GPU
//! - **Coordinate system**: right-handed; cylinders and wedges extrude along Z

pub mod combine;
pub mod eval;
pub mod material;
pub mod op;
pub mod primitives;
pub mod program;

pub use combine::Sample;
pub use eval::eval;
pub use op::Op;
pub use program::{Cell, Program, box3, cylinder, sphere, wedge};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::combine::Sample;
    pub use crate::eval::eval;
    pub use crate::material;
    pub use crate::op::Op;
    pub use crate::program::{Cell, Program, box3, cylinder, sphere, wedge};

    // Math (re-export glam)
    pub use glam::{Vec2, Vec3};
}
