//! Orb Renderer - Whitted-style recursive ray tracing on the CPU.
//!
//! Scenes are collections of affine-transformed spheres lit by point
//! lights. Each pixel gets one primary ray; shading is ambient + Phong
//! direct lighting with hard shadows, plus a depth-bounded mirror
//! reflection term.

mod camera;
mod framebuffer;
mod intersect;
mod ppm;
mod shade;
mod trace;

pub use camera::{primary_ray, primary_ray_with_center};
pub use framebuffer::{color_to_rgb, render, render_parallel, ImageBuffer};
pub use intersect::{closest_intersection, Intersection};
pub use ppm::{write_ppm, write_ppm_to, PpmFormat};
pub use shade::shade_light;
pub use trace::{reflected_ray, trace, MAX_DEPTH};

/// Re-export math and scene types for convenience
pub use orb_core::{Light, Scene, Sphere};
pub use orb_math::{Ray, Vec3, Vec4};
