//! Scene file loading.
//!
//! Scene files are line-oriented: each non-empty line starts with a keyword
//! followed by whitespace-separated values.
//!
//! # Supported Keywords
//!
//! - `NEAR <n>`, `LEFT <l>`, `RIGHT <r>`, `BOTTOM <b>`, `TOP <t>`
//! - `RES <width> <height>`
//! - `SPHERE <name> <px py pz> <sx sy sz> <r g b> <ka kd ks kr> <n>`
//! - `LIGHT <name> <px py pz> <ir ig ib>`
//! - `BACK <r g b>`
//! - `AMBIENT <r g b>`
//! - `OUTPUT <filename>`
//!
//! Sphere ids are assigned in declaration order starting at 0. A sphere
//! with any zero scale component is rejected here so the renderer never
//! sees a transform without an inverse.

use std::fs;
use std::path::Path;

use glam::{UVec2, Vec3};
use thiserror::Error;

use crate::scene::{Light, Scene, Sphere};

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unrecognized keyword '{keyword}' at line {line}")]
    UnknownKeyword { line: usize, keyword: String },

    #[error("Keyword '{keyword}' at line {line} expects {expected} values")]
    MissingValue {
        line: usize,
        keyword: String,
        expected: usize,
    },

    #[error("Invalid number '{value}' at line {line}")]
    InvalidNumber { line: usize, value: String },

    #[error("Sphere '{name}' at line {line} has a zero scale component")]
    DegenerateScale { line: usize, name: String },
}

/// Result type for scene loading operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Load and parse a scene file from disk.
pub fn load_scene(path: impl AsRef<Path>) -> SceneResult<Scene> {
    let content = fs::read_to_string(path.as_ref())?;
    let scene = parse_scene(&content)?;

    log::info!(
        "Loaded scene '{}': {}x{}, {} spheres, {} lights",
        scene.output,
        scene.resolution.x,
        scene.resolution.y,
        scene.spheres.len(),
        scene.lights.len()
    );

    Ok(scene)
}

/// Parse scene file contents.
pub fn parse_scene(content: &str) -> SceneResult<Scene> {
    let mut scene = Scene::default();
    let mut sphere_index = 0;

    for (i, raw_line) in content.lines().enumerate() {
        let line = i + 1;
        let tokens: Vec<&str> = raw_line.split_whitespace().collect();

        // Skip empty lines
        if tokens.is_empty() {
            continue;
        }

        let keyword = tokens[0];
        let values = &tokens[1..];

        match keyword {
            "NEAR" => scene.near = parse_f32(values, 0, line, keyword, 1)?,
            "LEFT" => scene.left = parse_f32(values, 0, line, keyword, 1)?,
            "RIGHT" => scene.right = parse_f32(values, 0, line, keyword, 1)?,
            "BOTTOM" => scene.bottom = parse_f32(values, 0, line, keyword, 1)?,
            "TOP" => scene.top = parse_f32(values, 0, line, keyword, 1)?,

            "RES" => {
                let w = parse_u32(values, 0, line, keyword, 2)?;
                let h = parse_u32(values, 1, line, keyword, 2)?;
                scene.resolution = UVec2::new(w, h);
            }

            "SPHERE" => {
                let name = parse_str(values, 0, line, keyword, 15)?;
                let position = parse_vec3(values, 1, line, keyword, 15)?;
                let scale = parse_vec3(values, 4, line, keyword, 15)?;
                let color = parse_vec3(values, 7, line, keyword, 15)?;
                let ka = parse_f32(values, 10, line, keyword, 15)?;
                let kd = parse_f32(values, 11, line, keyword, 15)?;
                let ks = parse_f32(values, 12, line, keyword, 15)?;
                let kr = parse_f32(values, 13, line, keyword, 15)?;
                let shininess = parse_i32(values, 14, line, keyword, 15)?;

                if scale.x == 0.0 || scale.y == 0.0 || scale.z == 0.0 {
                    return Err(SceneError::DegenerateScale {
                        line,
                        name: name.to_string(),
                    });
                }

                scene.spheres.push(Sphere::new(
                    sphere_index,
                    name,
                    position,
                    scale,
                    color,
                    ka,
                    kd,
                    ks,
                    kr,
                    shininess,
                ));
                sphere_index += 1;
            }

            "LIGHT" => {
                let name = parse_str(values, 0, line, keyword, 7)?;
                let position = parse_vec3(values, 1, line, keyword, 7)?;
                let intensity = parse_vec3(values, 4, line, keyword, 7)?;
                scene.lights.push(Light::new(name, position, intensity));
            }

            "BACK" => scene.background = parse_vec3(values, 0, line, keyword, 3)?,
            "AMBIENT" => scene.ambient = parse_vec3(values, 0, line, keyword, 3)?,
            "OUTPUT" => scene.output = parse_str(values, 0, line, keyword, 1)?.to_string(),

            _ => {
                return Err(SceneError::UnknownKeyword {
                    line,
                    keyword: keyword.to_string(),
                })
            }
        }
    }

    Ok(scene)
}

fn parse_str<'a>(
    values: &[&'a str],
    index: usize,
    line: usize,
    keyword: &str,
    expected: usize,
) -> SceneResult<&'a str> {
    values.get(index).copied().ok_or(SceneError::MissingValue {
        line,
        keyword: keyword.to_string(),
        expected,
    })
}

fn parse_f32(
    values: &[&str],
    index: usize,
    line: usize,
    keyword: &str,
    expected: usize,
) -> SceneResult<f32> {
    let token = parse_str(values, index, line, keyword, expected)?;
    token.parse().map_err(|_| SceneError::InvalidNumber {
        line,
        value: token.to_string(),
    })
}

fn parse_u32(
    values: &[&str],
    index: usize,
    line: usize,
    keyword: &str,
    expected: usize,
) -> SceneResult<u32> {
    let token = parse_str(values, index, line, keyword, expected)?;
    token.parse().map_err(|_| SceneError::InvalidNumber {
        line,
        value: token.to_string(),
    })
}

fn parse_i32(
    values: &[&str],
    index: usize,
    line: usize,
    keyword: &str,
    expected: usize,
) -> SceneResult<i32> {
    let token = parse_str(values, index, line, keyword, expected)?;
    token.parse().map_err(|_| SceneError::InvalidNumber {
        line,
        value: token.to_string(),
    })
}

fn parse_vec3(
    values: &[&str],
    index: usize,
    line: usize,
    keyword: &str,
    expected: usize,
) -> SceneResult<Vec3> {
    Ok(Vec3::new(
        parse_f32(values, index, line, keyword, expected)?,
        parse_f32(values, index + 1, line, keyword, expected)?,
        parse_f32(values, index + 2, line, keyword, expected)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC_SCENE: &str = "\
NEAR 1
LEFT -1
RIGHT 1
BOTTOM -1
TOP 1
RES 600 600

SPHERE s1 0 0 -10 2 4 2 0.5 0 0 1 1 0.9 0 50
SPHERE s2 4 4 -10 1 2 1 0 0.5 0 1 1 0.9 0 50

LIGHT l1 0 0 -1 0.9 0.9 0.9
LIGHT l2 10 12 -3 0.9 0.9 0

BACK 1 1 1
AMBIENT 0.2 0.2 0.2
OUTPUT scene.ppm
";

    #[test]
    fn test_parse_basic_scene() {
        let scene = parse_scene(BASIC_SCENE).unwrap();

        assert_eq!(scene.near, 1.0);
        assert_eq!(scene.left, -1.0);
        assert_eq!(scene.right, 1.0);
        assert_eq!(scene.bottom, -1.0);
        assert_eq!(scene.top, 1.0);
        assert_eq!(scene.resolution, UVec2::new(600, 600));
        assert_eq!(scene.spheres.len(), 2);
        assert_eq!(scene.lights.len(), 2);
        assert_eq!(scene.background, Vec3::ONE);
        assert_eq!(scene.ambient, Vec3::splat(0.2));
        assert_eq!(scene.output, "scene.ppm");
    }

    #[test]
    fn test_sphere_ids_follow_declaration_order() {
        let scene = parse_scene(BASIC_SCENE).unwrap();

        assert_eq!(scene.spheres[0].id, 0);
        assert_eq!(scene.spheres[0].name, "s1");
        assert_eq!(scene.spheres[1].id, 1);
        assert_eq!(scene.spheres[1].name, "s2");
    }

    #[test]
    fn test_sphere_fields() {
        let scene = parse_scene(BASIC_SCENE).unwrap();
        let s = &scene.spheres[0];

        assert_eq!(s.position, Vec3::new(0.0, 0.0, -10.0));
        assert_eq!(s.scale, Vec3::new(2.0, 4.0, 2.0));
        assert_eq!(s.color, Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(s.ka, 1.0);
        assert_eq!(s.kd, 1.0);
        assert_eq!(s.ks, 0.9);
        assert_eq!(s.kr, 0.0);
        assert_eq!(s.shininess, 50);
    }

    #[test]
    fn test_light_position_has_unit_w() {
        let scene = parse_scene(BASIC_SCENE).unwrap();
        assert_eq!(scene.lights[0].position.w, 1.0);
        assert_eq!(scene.lights[0].intensity, Vec3::new(0.9, 0.9, 0.9));
    }

    #[test]
    fn test_unknown_keyword_is_rejected() {
        let err = parse_scene("BOGUS 1 2 3\n").unwrap_err();
        match err {
            SceneError::UnknownKeyword { line, keyword } => {
                assert_eq!(line, 1);
                assert_eq!(keyword, "BOGUS");
            }
            other => panic!("expected UnknownKeyword, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_value_is_rejected() {
        let err = parse_scene("RES 600\n").unwrap_err();
        assert!(matches!(err, SceneError::MissingValue { line: 1, .. }));
    }

    #[test]
    fn test_bad_number_is_rejected() {
        let err = parse_scene("NEAR abc\n").unwrap_err();
        match err {
            SceneError::InvalidNumber { value, .. } => assert_eq!(value, "abc"),
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_scale_is_rejected() {
        let err =
            parse_scene("SPHERE bad 0 0 -5 1 0 1 1 1 1 1 0 0 0 10\n").unwrap_err();
        assert!(matches!(err, SceneError::DegenerateScale { .. }));
    }
}
