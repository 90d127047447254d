//! Boolean combination numerics over distance/material samples.
//!
//! Combinators operate on the two most recent samples produced during
//! evaluation: `a` is popped first, `b` second. For every operation except
//! plain union the builder emits its operand stream so that `a` is the
//! receiver of the call and `b` its argument; plain union appends arguments
//! after the receiver, so there `b` is the receiver. Materials are never
//! interpolated: exact union keeps the winning side's material, every other
//! combinator tags the result with `a`'s material.

/// A distance/material pair, the value produced by evaluating a program.
///
/// The material id is carried as `f32` because samples are baked verbatim
/// into float volume textures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub distance: f32,
    pub material: f32,
}

impl Sample {
    /// A sample infinitely far from any surface, tagged with the default
    /// material.
    pub const FAR: Self = Self {
        distance: f32::MAX,
        material: 0.0,
    };

    pub fn new(distance: f32, material: f32) -> Self {
        Self { distance, material }
    }
}

/// Exact union: the closer (more inside) sample wins; ties go to `b`.
pub fn union(a: Sample, b: Sample) -> Sample {
    if a.distance < b.distance { a } else { b }
}

/// Exact subtraction of `b` from `a`.
pub fn subtract(a: Sample, b: Sample) -> Sample {
    let carved = Sample::new(-b.distance, a.material);
    if a.distance > carved.distance { a } else { carved }
}

/// Exact intersection, keeping `a`'s material on both sides.
pub fn intersect(a: Sample, b: Sample) -> Sample {
    let clipped = Sample::new(b.distance, a.material);
    if a.distance > clipped.distance { a } else { clipped }
}

/// Polynomial smooth union with blend radius `k`.
pub fn smooth_union(a: Sample, b: Sample, k: f32) -> Sample {
    let h = saturate(0.5 + 0.5 * (a.distance - b.distance) / k);
    Sample::new(
        lerp(a.distance, b.distance, h) - k * h * (1.0 - h),
        a.material,
    )
}

/// Polynomial smooth subtraction of `b` from `a` with blend radius `k`.
pub fn smooth_subtract(a: Sample, b: Sample, k: f32) -> Sample {
    let h = saturate(0.5 - 0.5 * (a.distance + b.distance) / k);
    Sample::new(
        lerp(a.distance, -b.distance, h) + k * h * (1.0 - h),
        a.material,
    )
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn saturate(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}
