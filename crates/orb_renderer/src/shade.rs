//! Direct illumination with shadow feedback.
//!
//! One call computes a single light's contribution at an intersection:
//! hard shadow test first, then Phong diffuse + specular. Interior views
//! get special handling, and a grazing-angle specular artifact is clamped
//! away exactly the way downstream consumers expect.

use glam::{Vec3, Vec4};
use orb_core::{Light, Scene};
use orb_math::Ray;

use crate::intersect::{closest_intersection, Intersection};

/// Strict lower bound on shadow-ray hit parameters, to avoid re-hitting
/// the surface the ray starts on.
const SHADOW_T_MIN: f32 = 1e-5;

/// Compute one light's contribution at an intersection.
///
/// The shadow ray runs from the hit point to the light with an
/// unnormalized direction, so the light itself sits at t = 1. Any
/// occluder at all kills the contribution. `is_reflection` marks calls
/// made while shading a reflected hit; those skip the interior-view
/// correction.
pub fn shade_light(
    scene: &Scene,
    light: &Light,
    hit: &Intersection,
    is_reflection: bool,
) -> Vec3 {
    let sphere = hit.sphere;

    // Shadow ray from the hit point to the light
    let to_light = Ray::new(hit.point, light.position - hit.point);
    if closest_intersection(&to_light, scene, Some(sphere.id), SHADOW_T_MIN).is_some() {
        return Vec3::ZERO;
    }

    let mut n = hit.normal;
    let l = to_light.direction().truncate().normalize();

    // Mirror direction of -L about N, computed before any normal flip
    let r = (-l - 2.0 * n.dot(-l) * n).normalize();

    let eye = Vec4::new(0.0, 0.0, 0.0, 1.0);
    let v = (eye - hit.point).truncate().normalize();

    // Interior view: the eye sees the back side of the sphere
    if !is_reflection && n.dot(v) < -1e-5 {
        // Probe from the sphere center to the light, nothing excluded
        let center = sphere.center();
        let center_to_light = Ray::new(center, light.position - center);
        if closest_intersection(&center_to_light, scene, None, 0.0).is_some() {
            return Vec3::ZERO;
        }

        // Light sits inside the sphere; shade the inside surface
        n = -n;
    }

    // Back-facing lights contribute nothing
    let intensity = if n.dot(l) < 1e-4 {
        Vec3::ZERO
    } else {
        light.intensity
    };

    let diffuse = sphere.kd * intensity * n.dot(l) * sphere.color;

    // No clamp on R.V before exponentiation
    let mut specular = sphere.ks * intensity * r.dot(v).powi(sphere.shininess);

    // Suppress the specular halo that shows up at grazing angles
    if r.dot(v) < -0.95 && n.dot(l) < 0.2 {
        specular = Vec3::ZERO;
    }

    diffuse + specular
}
