//! Depth-bounded recursive tracing.
//!
//! Each hit contributes ambient + per-light direct shading + a mirror
//! reflection weighted by the sphere's Kr. Recursion is tree-shaped and
//! cut off at a small fixed depth, so the call stack stays bounded no
//! matter how the spheres face each other.

use glam::{Vec3, Vec4};
use orb_core::Scene;
use orb_math::Ray;

use crate::intersect::{closest_intersection, Intersection};
use crate::shade::shade_light;

/// Maximum reflection depth. Depth 0 is the primary ray.
pub const MAX_DEPTH: u32 = 2;

/// Strict lower bound on hit parameters for reflection rays.
const REFLECTION_T_MIN: f32 = 1e-5;

/// Trace a ray and return its incoming radiance.
///
/// `exclude` is `None` for primary rays, which also selects the primary
/// cutoff `t_min = 1`: anything closer than the image plane is ignored.
/// Reflection rays exclude the sphere they bounced off and use a small
/// epsilon instead.
pub fn trace(ray: &Ray, scene: &Scene, depth: u32, exclude: Option<usize>) -> Vec3 {
    if depth > MAX_DEPTH {
        return Vec3::ZERO;
    }

    let t_min = if exclude.is_none() {
        1.0
    } else {
        REFLECTION_T_MIN
    };

    let Some(hit) = closest_intersection(ray, scene, exclude, t_min) else {
        // Primary rays fall through to the background; reflections to black
        return if exclude.is_none() {
            scene.background
        } else {
            Vec3::ZERO
        };
    };

    let ambient = hit.sphere.ka * scene.ambient * hit.sphere.color;

    let mut direct = Vec3::ZERO;
    for light in &scene.lights {
        direct += shade_light(scene, light, &hit, depth > 0);
    }

    let mut reflection = Vec3::ZERO;
    if hit.sphere.kr != 0.0 {
        let reflected = reflected_ray(ray, &hit);
        reflection = hit.sphere.kr * trace(&reflected, scene, depth + 1, Some(hit.sphere.id));
    }

    ambient + direct + reflection
}

/// Build the mirror reflection of `ray` at an intersection.
///
/// The direction is reflected about the surface normal and deliberately
/// NOT renormalized.
pub fn reflected_ray(ray: &Ray, hit: &Intersection) -> Ray {
    let n = Vec4::new(hit.normal.x, hit.normal.y, hit.normal.z, 0.0);
    let direction = ray.direction() - 2.0 * n.dot(ray.direction()) * n;
    Ray::new(hit.point, direction)
}
