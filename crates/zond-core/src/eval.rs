//! Stack-machine evaluation of SDF programs.
//!
//! [`eval`] runs a single linear pass over a program's cells against four
//! cooperating stacks:
//!
//! - **position** — the query point under the active transform chain; shape
//!   cells read the top, push-transform cells push an inverse-transformed
//!   copy
//! - **sample** — distance/material pairs produced by shapes and folded by
//!   combinators
//! - **scale** — active uniform factors; closing a scale scope rescales the
//!   top sample's distance back to outer units
//! - **onion** — active shell thicknesses
//!
//! plus the material scope stack, seeded with the default palette id.
//!
//! A well-formed program leaves exactly one sample. Violations (underflow,
//! unbalanced push/pop pairs, a non-singleton final stack) are construction
//! bugs: they trip `debug_assert!`s while authoring and degrade to undefined
//! geometry in release builds, never a panic.
//!
//! Evaluation is a pure function of `(program, point)` — all stacks are
//! private to the call, so one program may be evaluated concurrently from
//! any number of threads.

use glam::{Vec2, Vec3};

use crate::combine::{self, Sample};
use crate::material;
use crate::op::Op;
use crate::primitives::{extrude, sd_box, sd_circle, sd_sector, sd_sphere};
use crate::program::Program;

/// Evaluate `program` at `point`, producing the final distance/material
/// sample.
pub fn eval(program: &Program, point: Vec3) -> Sample {
    let mut samples: Vec<Sample> = Vec::new();
    let mut positions: Vec<Vec3> = vec![point];
    let mut scales: Vec<f32> = Vec::new();
    let mut onions: Vec<f32> = Vec::new();
    let mut materials: Vec<f32> = vec![f32::from(material::DEFAULT)];

    for cell in program.cells() {
        let Some(op) = Op::from_raw(cell.op) else {
            debug_assert!(false, "unknown opcode {}", cell.op);
            continue;
        };

        let p = positions.last().copied().unwrap_or(point);

        match op {
            // === Shapes ===
            Op::Sphere => {
                let m = top_material(&materials);
                samples.push(Sample::new(sd_sphere(p, cell.x), m));
            }
            Op::Box3 => {
                let m = top_material(&materials);
                let d = sd_box(p, Vec3::new(cell.x, cell.y, cell.z));
                samples.push(Sample::new(d, m));
            }
            Op::Cylinder => {
                let m = top_material(&materials);
                let profile = sd_circle(Vec2::new(p.x, p.y), cell.x);
                samples.push(Sample::new(extrude(profile, p, cell.y), m));
            }
            Op::Wedge => {
                let m = top_material(&materials);
                let profile = sd_sector(Vec2::new(p.x, p.y), cell.x, cell.y);
                samples.push(Sample::new(extrude(profile, p, cell.z), m));
            }

            // === Combinators ===
            Op::Union => {
                let a = pop_sample(&mut samples);
                let b = pop_sample(&mut samples);
                samples.push(combine::union(a, b));
            }
            Op::SmoothUnion => {
                let a = pop_sample(&mut samples);
                let b = pop_sample(&mut samples);
                samples.push(combine::smooth_union(a, b, cell.x));
            }
            Op::Subtract => {
                let a = pop_sample(&mut samples);
                let b = pop_sample(&mut samples);
                samples.push(combine::subtract(a, b));
            }
            Op::SmoothSubtract => {
                let a = pop_sample(&mut samples);
                let b = pop_sample(&mut samples);
                samples.push(combine::smooth_subtract(a, b, cell.x));
            }
            Op::Intersect => {
                let a = pop_sample(&mut samples);
                let b = pop_sample(&mut samples);
                samples.push(combine::intersect(a, b));
            }

            // === Transforms ===
            Op::Translate => {
                positions.push(p - Vec3::new(cell.x, cell.y, cell.z));
            }
            Op::RotateXY => {
                let r = rotate(Vec2::new(p.x, p.y), cell.x);
                positions.push(Vec3::new(r.x, r.y, p.z));
            }
            Op::RotateXZ => {
                let r = rotate(Vec2::new(p.x, p.z), cell.x);
                positions.push(Vec3::new(r.x, p.y, r.y));
            }
            Op::RotateYZ => {
                let r = rotate(Vec2::new(p.y, p.z), cell.x);
                positions.push(Vec3::new(p.x, r.x, r.y));
            }
            Op::Elongate => {
                let h = Vec3::new(cell.x, cell.y, cell.z);
                positions.push(p - p.clamp(-h, h));
            }
            Op::Symmetry => {
                let mut q = p;
                if cell.x == 1.0 {
                    q.x = q.x.abs();
                }
                if cell.y == 1.0 {
                    q.y = q.y.abs();
                }
                if cell.z == 1.0 {
                    q.z = q.z.abs();
                }
                positions.push(q);
            }
            Op::PopTransform => {
                debug_assert!(positions.len() > 1, "transform pop underflow");
                positions.pop();
            }

            // === Scale ===
            Op::Scale => {
                scales.push(cell.x);
                positions.push(p / cell.x);
            }
            Op::PopScale => {
                debug_assert!(positions.len() > 1, "scale pop underflow");
                positions.pop();
                let k = scales.pop().unwrap_or(1.0);
                if let Some(top) = samples.last_mut() {
                    top.distance *= k;
                }
            }

            // === Modifiers ===
            Op::Smooth => {
                if let Some(top) = samples.last_mut() {
                    top.distance -= cell.x;
                }
            }
            Op::Onion => {
                onions.push(cell.x);
            }
            Op::PopOnion => {
                let thickness = onions.pop().unwrap_or(0.0);
                if let Some(top) = samples.last_mut() {
                    top.distance = top.distance.abs() - thickness;
                }
            }

            // === Materials ===
            Op::PushMaterial => {
                materials.push(cell.x);
            }
            // The outermost material stays as the default for shapes
            // outside any nested scope.
            Op::PopMaterial => {
                if materials.len() > 1 {
                    materials.pop();
                }
            }
        }
    }

    debug_assert_eq!(
        samples.len(),
        1,
        "program must leave exactly one sample on the stack"
    );
    debug_assert_eq!(positions.len(), 1, "unbalanced transform push/pop");
    debug_assert!(
        scales.is_empty() && onions.is_empty(),
        "unbalanced scale/onion push/pop"
    );
    samples.pop().unwrap_or(Sample::FAR)
}

fn top_material(materials: &[f32]) -> f32 {
    materials.last().copied().unwrap_or(0.0)
}

fn pop_sample(samples: &mut Vec<Sample>) -> Sample {
    debug_assert!(!samples.is_empty(), "combinator sample underflow");
    samples.pop().unwrap_or(Sample::FAR)
}

/// Counterclockwise rotation by `angle` radians.
fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(c * v.x - s * v.y, s * v.x + c * v.y)
}
