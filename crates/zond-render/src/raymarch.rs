//! Sphere tracing and normal estimation.

use glam::Vec3;
use zond_core::{Program, eval};

/// Iteration cap; rays that never converge count as misses.
pub const MAX_STEPS: u32 = 256;
/// Rays traveling past this distance are misses.
pub const MAX_DISTANCE: f32 = 15.0;
/// Distances below this count as a surface hit.
pub const SURFACE_EPSILON: f32 = 1e-4;

/// March a ray from `origin` along `dir`, returning the traveled distance.
///
/// A return value of [`MAX_DISTANCE`] or more means the ray missed; a miss
/// is a normal outcome, not an error.
pub fn march(program: &Program, origin: Vec3, dir: Vec3) -> f32 {
    let mut traveled = 0.0;
    for _ in 0..MAX_STEPS {
        let p = origin + dir * traveled;
        let d = eval(program, p).distance;
        if traveled > MAX_DISTANCE || d.abs() < SURFACE_EPSILON {
            break;
        }
        traveled += d;
    }
    traveled
}

/// Estimate the surface normal at `p` from four tetrahedral taps.
///
/// See <https://iquilezles.org/articles/normalsSDF>.
pub fn normal(program: &Program, p: Vec3) -> Vec3 {
    const E: f32 = 0.5773;
    const EPS: f32 = 0.0005;

    let mut n = Vec3::ZERO;
    for s in [
        Vec3::new(E, -E, -E),
        Vec3::new(-E, -E, E),
        Vec3::new(-E, E, -E),
        Vec3::new(E, E, E),
    ] {
        n += s * eval(program, p + s * EPS).distance;
    }
    n.normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use zond_core::{box3, sphere};

    #[test]
    fn ray_hits_unit_sphere_from_five_units_out() {
        let s = sphere(1.0);
        let d = march(&s, Vec3::new(5.0, 0.0, 0.0), Vec3::NEG_X);
        assert_abs_diff_eq!(d, 4.0, epsilon = 1e-3);
    }

    #[test]
    fn ray_aimed_away_misses() {
        let s = sphere(1.0);
        let d = march(&s, Vec3::new(5.0, 0.0, 0.0), Vec3::X);
        assert!(d >= MAX_DISTANCE);
    }

    #[test]
    fn grazing_ray_misses() {
        let s = sphere(1.0);
        let d = march(&s, Vec3::new(5.0, 2.0, 0.0), Vec3::NEG_X);
        assert!(d >= MAX_DISTANCE);
    }

    #[test]
    fn sphere_normal_points_radially() {
        let s = sphere(1.0);
        let n = normal(&s, Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(n.x, 1.0, epsilon = 1e-3);
        assert_abs_diff_eq!(n.y, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(n.z, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn box_face_normal_is_axis_aligned() {
        let b = box3(0.5, 0.5, 0.5);
        let n = normal(&b, Vec3::new(0.0, 0.5, 0.0));
        assert_relative_eq!(n.y, 1.0, epsilon = 1e-3);
    }
}
