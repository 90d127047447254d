//! Primitive distance formulas.
//!
//! All primitives are centered at the origin; the evaluator positions them
//! by transforming the query point. Formulas follow the usual
//! <https://iquilezles.org/articles/distfunctions/> forms.

use glam::{Vec2, Vec3};

/// Sphere of radius `r`.
pub fn sd_sphere(p: Vec3, r: f32) -> f32 {
    p.length() - r
}

/// Axis-aligned box with half-extents `b`.
pub fn sd_box(p: Vec3, b: Vec3) -> f32 {
    let q = p.abs() - b;
    q.max(Vec3::ZERO).length() + q.x.max(q.y.max(q.z)).min(0.0)
}

/// 2D disc of radius `r`, the profile of the Z-aligned cylinder.
pub fn sd_circle(p: Vec2, r: f32) -> f32 {
    p.length() - r
}

/// 2D disc sector of radius `r` spanning `aperture` radians to either side
/// of +Y. Apertures close to pi leave only a thin slit missing.
pub fn sd_sector(p: Vec2, aperture: f32, r: f32) -> f32 {
    let p = Vec2::new(p.x.abs(), p.y);
    let l = p.length() - r;
    let c = Vec2::new(aperture.sin(), aperture.cos());
    let s = (c.y * p.x - c.x * p.y).signum();
    let m = (p - c * p.dot(c).clamp(0.0, r)).length();
    l.max(m * s)
}

/// Extrude a 2D distance `d` along Z with half-depth `h`.
pub fn extrude(d: f32, p: Vec3, h: f32) -> f32 {
    let w = Vec2::new(d, p.z.abs() - h);
    w.x.max(w.y).min(0.0) + w.max(Vec2::ZERO).length()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn sphere_is_signed() {
        assert_relative_eq!(sd_sphere(Vec3::ZERO, 1.0), -1.0);
        assert_relative_eq!(sd_sphere(Vec3::new(2.0, 0.0, 0.0), 1.0), 1.0);
        assert_relative_eq!(sd_sphere(Vec3::new(0.0, 1.0, 0.0), 1.0), 0.0);
    }

    #[test]
    fn box_faces_and_corners() {
        let b = Vec3::new(1.0, 2.0, 3.0);
        // Straight out of the +X face
        assert_relative_eq!(sd_box(Vec3::new(1.5, 0.0, 0.0), b), 0.5);
        // Center is one unit from the nearest (X) face
        assert_relative_eq!(sd_box(Vec3::ZERO, b), -1.0);
        // Corner distance is euclidean
        let d = sd_box(Vec3::new(2.0, 3.0, 4.0), b);
        assert_relative_eq!(d, (3.0f32).sqrt(), epsilon = 1e-6);
    }

    #[test]
    fn extruded_circle_matches_cylinder_expectations() {
        // Inside: limited by the radius, not the caps
        let d2 = sd_circle(Vec2::ZERO, 0.5);
        assert_relative_eq!(extrude(d2, Vec3::ZERO, 1.0), -0.5);
        // Above the cap
        assert_relative_eq!(extrude(d2, Vec3::new(0.0, 0.0, 2.0), 1.0), 1.0);
    }

    #[test]
    fn sector_keeps_upper_half_at_right_angle_aperture() {
        let d_in = sd_sector(Vec2::new(0.4, 0.2), FRAC_PI_2, 1.0);
        let d_out = sd_sector(Vec2::new(0.4, -0.2), FRAC_PI_2, 1.0);
        assert_relative_eq!(d_in, -0.2, epsilon = 1e-6);
        assert_relative_eq!(d_out, 0.2, epsilon = 1e-6);
    }
}
