// Transform utilities for Mat4
//
// Extends glam::Mat4 with the pieces a sphere tracer needs on top of what
// glam already provides (inverse(), transpose(), transform_point3()).

use glam::{Mat4, Vec3, Vec4};

/// Extension trait for Mat4 to provide additional transform utilities
pub trait Mat4Ext {
    /// Inverse followed by transpose. This is the matrix that transports
    /// normal vectors correctly under a non-uniform affine transform.
    fn inverse_transpose(&self) -> Mat4;

    /// Transform a vector in 3D space (applies rotation and scale, but NOT
    /// translation). Vectors have an implicit w=0 component.
    fn transform_vector3(&self, vector: Vec3) -> Vec3;
}

impl Mat4Ext for Mat4 {
    fn inverse_transpose(&self) -> Mat4 {
        self.inverse().transpose()
    }

    fn transform_vector3(&self, vector: Vec3) -> Vec3 {
        // Transform as direction (w=0) - translation should not affect vectors
        let v4 = Vec4::new(vector.x, vector.y, vector.z, 0.0);
        let transformed = *self * v4;
        Vec3::new(transformed.x, transformed.y, transformed.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_vector3_no_translation() {
        let mat = Mat4::from_translation(Vec3::new(10.0, 20.0, 30.0));
        let vector = Vec3::new(1.0, 0.0, 0.0);
        let transformed = mat.transform_vector3(vector);

        // Translation should NOT affect vectors (w=0)
        assert_eq!(transformed, vector);
    }

    #[test]
    fn test_inverse_transpose_identity() {
        let mat = Mat4::IDENTITY;
        let it = mat.inverse_transpose();

        assert_eq!(it, Mat4::IDENTITY);
    }

    #[test]
    fn test_inverse_transpose_preserves_normals_under_scale() {
        // Non-uniform scale: a surface tangent along X on a plane with
        // normal along Y stays perpendicular only if the normal goes
        // through the inverse-transpose.
        let mat = Mat4::from_scale(Vec3::new(2.0, 1.0, 1.0));

        let normal = Vec3::new(1.0, 1.0, 0.0).normalize();
        let tangent = Vec3::new(1.0, -1.0, 0.0).normalize();

        let transformed_tangent = mat.transform_vector3(tangent);
        let transformed_normal = mat.inverse_transpose().transform_vector3(normal);

        assert!(
            transformed_normal.dot(transformed_tangent).abs() < 1e-5,
            "normal should stay perpendicular to the transformed tangent, dot = {}",
            transformed_normal.dot(transformed_tangent)
        );
    }

    #[test]
    fn test_mat4_inverse_roundtrip() {
        let mat = Mat4::from_translation(Vec3::new(10.0, 20.0, 30.0))
            * Mat4::from_scale(Vec3::new(2.0, 3.0, 0.5));
        let inv = mat.inverse();

        let point = Vec3::new(1.0, 2.0, 3.0);
        let transformed = mat.transform_point3(point);
        let back = inv.transform_point3(transformed);

        // Should round-trip back to original
        assert!((back - point).length() < 0.001);
    }
}
