//! Orb Core - Scene model and scene-file loading.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Light`
//! - **Scene loading**: line-keyword scene file parsing
//!
//! # Example
//!
//! ```ignore
//! use orb_core::load_scene;
//!
//! let scene = load_scene("scene.txt")?;
//! println!("Loaded {} spheres, {} lights",
//!     scene.spheres.len(),
//!     scene.lights.len());
//! ```

pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, parse_scene, SceneError, SceneResult};
pub use scene::{Light, Scene, Sphere};
