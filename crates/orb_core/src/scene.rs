//! Scene types for Orb.
//!
//! A scene is a view frustum, an ordered list of transformed spheres, an
//! ordered list of point lights, a background color, and an ambient term.
//! Everything here is a plain value type, built once by the loader and
//! read-only for the rest of the run.

use glam::{Mat4, UVec2, Vec3, Vec4};
use orb_math::Mat4Ext;

/// A sphere with a per-axis scale and a translation.
///
/// Geometrically this is the canonical unit sphere at the origin carried to
/// world space by `translate(position) * scale(scale)`. The inverse and
/// inverse-transpose of that transform are cached at construction: the
/// intersector works in object space through the inverse, and normals come
/// back to world space through the inverse-transpose.
#[derive(Clone, Debug)]
pub struct Sphere {
    /// Unique id within the scene, assigned in declaration order from 0
    pub id: usize,

    /// Sphere name (from the scene file)
    pub name: String,

    /// World-space translation
    pub position: Vec3,

    /// Per-axis scale; all components nonzero
    pub scale: Vec3,

    /// Object-to-world transform: `translate(position) * scale(scale)`
    pub to_world: Mat4,

    /// World-to-object transform (inverse of `to_world`)
    pub to_object: Mat4,

    /// Inverse-transpose of `to_world`; transports normals only
    pub normal_matrix: Mat4,

    /// Surface color (RGB, 0-1)
    pub color: Vec3,

    /// Ambient reflectance coefficient (0-1)
    pub ka: f32,

    /// Diffuse reflectance coefficient (0-1)
    pub kd: f32,

    /// Specular reflectance coefficient (0-1)
    pub ks: f32,

    /// Reflective coefficient (0-1); 0 disables the reflection ray
    pub kr: f32,

    /// Specular exponent
    pub shininess: i32,
}

impl Sphere {
    /// Create a new sphere, caching its transform matrices.
    ///
    /// All scale components must be nonzero; the loader rejects degenerate
    /// spheres before they reach the renderer.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: usize,
        name: impl Into<String>,
        position: Vec3,
        scale: Vec3,
        color: Vec3,
        ka: f32,
        kd: f32,
        ks: f32,
        kr: f32,
        shininess: i32,
    ) -> Self {
        let to_world = Mat4::from_translation(position) * Mat4::from_scale(scale);
        let to_object = to_world.inverse();
        let normal_matrix = to_world.inverse_transpose();

        Self {
            id,
            name: name.into(),
            position,
            scale,
            to_world,
            to_object,
            normal_matrix,
            color,
            ka,
            kd,
            ks,
            kr,
            shininess,
        }
    }

    /// The sphere center as a homogeneous point (w = 1).
    #[inline]
    pub fn center(&self) -> Vec4 {
        Vec4::new(self.position.x, self.position.y, self.position.z, 1.0)
    }
}

/// A point light.
#[derive(Clone, Debug)]
pub struct Light {
    /// Light name (from the scene file)
    pub name: String,

    /// World-space position as a homogeneous point (w = 1)
    pub position: Vec4,

    /// Emission intensity (RGB)
    pub intensity: Vec3,
}

impl Light {
    /// Create a new point light.
    pub fn new(name: impl Into<String>, position: Vec3, intensity: Vec3) -> Self {
        Self {
            name: name.into(),
            position: Vec4::new(position.x, position.y, position.z, 1.0),
            intensity,
        }
    }
}

/// A complete scene: frustum, spheres, lights, background and ambient.
///
/// The eye sits at the origin looking down -Z. `near` is the distance to
/// the image plane; `left`/`right`/`bottom`/`top` are the signed extents of
/// the image plane.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Distance from the eye to the image plane (positive)
    pub near: f32,
    /// Signed left extent of the image plane
    pub left: f32,
    /// Signed right extent of the image plane
    pub right: f32,
    /// Signed bottom extent of the image plane
    pub bottom: f32,
    /// Signed top extent of the image plane
    pub top: f32,

    /// Output resolution in pixels (width, height)
    pub resolution: UVec2,

    /// Spheres, in declaration order (ids match indices)
    pub spheres: Vec<Sphere>,

    /// Point lights, in declaration order
    pub lights: Vec<Light>,

    /// Background color (RGB, 0-1)
    pub background: Vec3,

    /// Ambient illumination (RGB, 0-1)
    pub ambient: Vec3,

    /// Output file name
    pub output: String,
}

impl Scene {
    /// Total pixel count of the output image.
    pub fn pixel_count(&self) -> u32 {
        self.resolution.x * self.resolution.y
    }
}
