//! Ray-sphere intersection.
//!
//! Every sphere is the canonical unit sphere at the origin carried to world
//! space by its cached transform. Rays are pulled into object space through
//! the cached inverse, intersected against the unit sphere, and the winning
//! hit is reported in world space with the normal transported through the
//! inverse-transpose.

use glam::{Vec3, Vec4};
use orb_core::{Scene, Sphere};
use orb_math::Ray;

/// Record of the closest ray-sphere intersection.
pub struct Intersection<'a> {
    /// The sphere that was hit
    pub sphere: &'a Sphere,
    /// Point of intersection in world space (w = 1)
    pub point: Vec4,
    /// Unit surface normal in world space
    pub normal: Vec3,
    /// Parameter t along the original (untransformed) ray
    pub t: f32,
}

/// Find the closest intersection of `ray` with the scene's spheres.
///
/// `exclude` skips one sphere by id (used to suppress self-intersection of
/// secondary rays); `t_min` is the strict lower bound on accepted hit
/// parameters. Candidates must also be strictly closer than the best hit
/// so far, so on an exact tie the first sphere in scene order wins.
pub fn closest_intersection<'a>(
    ray: &Ray,
    scene: &'a Scene,
    exclude: Option<usize>,
    t_min: f32,
) -> Option<Intersection<'a>> {
    let mut best_t = f32::INFINITY;
    let mut best: Option<(&Sphere, Vec4, Vec4)> = None;

    for sphere in &scene.spheres {
        // Skip the sphere which the ray last bounced off of
        if exclude == Some(sphere.id) {
            continue;
        }

        // Transform the ray into the sphere's object frame
        let start_obj = sphere.to_object * ray.start();
        let dir_obj = sphere.to_object * ray.direction();

        // Quadratic for the unit sphere at the origin
        let d = dir_obj.truncate();
        let s = start_obj.truncate();
        let a = d.length_squared();
        let b = s.dot(d);
        let c = s.length_squared() - 1.0;

        let discriminant = b * b - a * c;
        if discriminant < 0.0 {
            continue;
        }

        let sqrt_d = discriminant.sqrt();

        // One root on tangency, two otherwise
        let roots = [(-b + sqrt_d) / a, (-b - sqrt_d) / a];
        let root_count = if discriminant > 0.0 { 2 } else { 1 };

        for &t in &roots[..root_count] {
            if t > t_min && t < best_t {
                best_t = t;
                best = Some((sphere, start_obj, dir_obj));
            }
        }
    }

    let (sphere, start_obj, dir_obj) = best?;

    // Hit point along the ORIGINAL ray, not the object-space one
    let point = ray.at(best_t);

    // On the unit sphere the object-space hit point IS the outward normal.
    // The w component of the transported vector is discarded.
    let normal_obj = start_obj + best_t * dir_obj;
    let normal = (sphere.normal_matrix * normal_obj).truncate().normalize();

    Some(Intersection {
        sphere,
        point,
        normal,
        t: best_t,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::UVec2;

    fn sphere(id: usize, position: Vec3, scale: Vec3) -> Sphere {
        Sphere::new(
            id,
            format!("s{id}"),
            position,
            scale,
            Vec3::new(1.0, 0.0, 0.0),
            1.0,
            0.0,
            0.0,
            0.0,
            10,
        )
    }

    fn scene_with(spheres: Vec<Sphere>) -> Scene {
        Scene {
            near: 1.0,
            left: -1.0,
            right: 1.0,
            bottom: -1.0,
            top: 1.0,
            resolution: UVec2::new(16, 16),
            spheres,
            ..Default::default()
        }
    }

    fn axial_ray() -> Ray {
        Ray::new(
            Vec4::new(0.0, 0.0, 0.0, 1.0),
            Vec4::new(0.0, 0.0, -1.0, 0.0),
        )
    }

    #[test]
    fn test_hit_unit_sphere_front_surface() {
        let scene = scene_with(vec![sphere(0, Vec3::new(0.0, 0.0, -3.0), Vec3::ONE)]);

        let hit = closest_intersection(&axial_ray(), &scene, None, 0.0)
            .expect("ray through the center should hit");

        assert!((hit.t - 2.0).abs() < 1e-5, "expected t=2, got {}", hit.t);
        assert!((hit.point.truncate() - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-5);
        assert!((hit.normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_miss_returns_none() {
        let scene = scene_with(vec![sphere(0, Vec3::new(0.0, 5.0, -3.0), Vec3::ONE)]);
        assert!(closest_intersection(&axial_ray(), &scene, None, 0.0).is_none());
    }

    #[test]
    fn test_t_min_skips_near_hits() {
        let scene = scene_with(vec![sphere(0, Vec3::new(0.0, 0.0, -3.0), Vec3::ONE)]);

        // Front surface at t=2 is filtered out; the back surface at t=4 wins
        let hit = closest_intersection(&axial_ray(), &scene, None, 3.0).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_exclusion_by_id() {
        let scene = scene_with(vec![
            sphere(0, Vec3::new(0.0, 0.0, -3.0), Vec3::ONE),
            sphere(1, Vec3::new(0.0, 0.0, -8.0), Vec3::ONE),
        ]);

        let hit = closest_intersection(&axial_ray(), &scene, Some(0), 0.0).unwrap();
        assert_eq!(hit.sphere.id, 1);
        assert!((hit.t - 7.0).abs() < 1e-5);
    }

    #[test]
    fn test_closest_sphere_wins() {
        let scene = scene_with(vec![
            sphere(0, Vec3::new(0.0, 0.0, -8.0), Vec3::ONE),
            sphere(1, Vec3::new(0.0, 0.0, -3.0), Vec3::ONE),
        ]);

        let hit = closest_intersection(&axial_ray(), &scene, None, 0.0).unwrap();
        assert_eq!(hit.sphere.id, 1);
    }

    #[test]
    fn test_normal_is_unit_length_under_nonuniform_scale() {
        let scene = scene_with(vec![sphere(
            0,
            Vec3::new(0.5, -0.25, -4.0),
            Vec3::new(2.0, 0.5, 1.0),
        )]);

        let ray = Ray::new(
            Vec4::new(0.0, 0.0, 0.0, 1.0),
            Vec4::new(0.1, -0.05, -1.0, 0.0),
        );
        let hit = closest_intersection(&ray, &scene, None, 0.0).unwrap();

        assert!(
            (hit.normal.length() - 1.0).abs() < 1e-5,
            "normal length {}",
            hit.normal.length()
        );
    }

    #[test]
    fn test_normal_uses_inverse_transpose() {
        // Squash along Y. At the +Y pole of the squashed sphere the
        // geometric normal still points straight up even though the shape
        // was scaled; the inverse-transpose guarantees that.
        let scene = scene_with(vec![sphere(
            0,
            Vec3::new(0.0, 0.0, -3.0),
            Vec3::new(2.0, 0.5, 1.0),
        )]);

        let ray = Ray::new(
            Vec4::new(0.0, 5.0, -3.0, 1.0),
            Vec4::new(0.0, -1.0, 0.0, 0.0),
        );
        let hit = closest_intersection(&ray, &scene, None, 0.0).unwrap();

        assert!((hit.point.truncate() - Vec3::new(0.0, 0.5, -3.0)).length() < 1e-5);
        assert!((hit.normal - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn test_parametric_consistency() {
        let scene = scene_with(vec![sphere(
            0,
            Vec3::new(1.0, 2.0, -6.0),
            Vec3::new(1.5, 2.0, 1.0),
        )]);

        let ray = Ray::new(
            Vec4::new(0.0, 0.0, 0.0, 1.0),
            Vec4::new(0.2, 0.35, -1.0, 0.0),
        );
        let hit = closest_intersection(&ray, &scene, None, 0.0).unwrap();

        let reconstructed = ray.at(hit.t);
        assert!((hit.point - reconstructed).length() < 1e-4);
    }

    #[test]
    fn test_inside_hit_reports_exit_surface() {
        // Eye inside the sphere: the only root above t_min is the exit
        let scene = scene_with(vec![sphere(0, Vec3::ZERO, Vec3::splat(2.0))]);

        let hit = closest_intersection(&axial_ray(), &scene, None, 0.0).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-5);
        assert!((hit.point.truncate() - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-5);
    }
}
