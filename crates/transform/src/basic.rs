//! Basic transforms: translation, rotation about a coordinate axis, scaling and shearing.

use transform_linalg::{vec3, vec4, Float, Mat4, Matrix, Vec3, Vector};

/// Returns a transform that translates points by `v`.
///
/// Vectors (with a *w* coordinate of 0) are unaffected by translations.
///
/// ```
/// # use transform::*;
/// let m = translate(vec3(1.0, 2.0, 3.0));
/// assert_eq!(m * vec4(1.0, 1.0, 1.0, 1.0), vec4(2.0, 3.0, 4.0, 1.0));
/// assert_eq!(m * vec4(1.0, 1.0, 1.0, 0.0), vec4(1.0, 1.0, 1.0, 0.0));
/// ```
pub fn translate<T: Float>(v: Vec3<T>) -> Mat4<T> {
    let mut m = Mat4::identity();
    m[3] = v.extend(T::ONE);
    m
}

/// Returns a transform that translates points by `(x, y, z)`.
pub fn translate_xyz<T: Float>(x: T, y: T, z: T) -> Mat4<T> {
    translate(vec3(x, y, z))
}

/// Returns a transform that rotates counter-clockwise by `rad` radians around the X axis, when
/// looking towards the origin from the positive X axis.
pub fn rotate_x<T: Float>(rad: T) -> Mat4<T> {
    let (o, l) = (T::ZERO, T::ONE);
    let (sin, cos) = (rad.sin(), rad.cos());
    Matrix::from_columns([
        [l, o, o, o],
        [o, cos, sin, o],
        [o, -sin, cos, o],
        [o, o, o, l],
    ])
}

/// Returns a transform that rotates counter-clockwise by `rad` radians around the Y axis, when
/// looking towards the origin from the positive Y axis.
pub fn rotate_y<T: Float>(rad: T) -> Mat4<T> {
    let (o, l) = (T::ZERO, T::ONE);
    let (sin, cos) = (rad.sin(), rad.cos());
    Matrix::from_columns([
        [cos, o, -sin, o],
        [o, l, o, o],
        [sin, o, cos, o],
        [o, o, o, l],
    ])
}

/// Returns a transform that rotates counter-clockwise by `rad` radians around the Z axis, when
/// looking towards the origin from the positive Z axis.
///
/// ```
/// # use transform::*;
/// let m = rotate_z(std::f64::consts::FRAC_PI_2);
/// approx::assert_relative_eq!(m * vec4(1.0, 0.0, 0.0, 1.0), vec4(0.0, 1.0, 0.0, 1.0));
/// ```
pub fn rotate_z<T: Float>(rad: T) -> Mat4<T> {
    let (o, l) = (T::ZERO, T::ONE);
    let (sin, cos) = (rad.sin(), rad.cos());
    Matrix::from_columns([
        [cos, sin, o, o],
        [-sin, cos, o, o],
        [o, o, l, o],
        [o, o, o, l],
    ])
}

/// Returns a transform that scales each coordinate by the corresponding element of `v`.
pub fn scale<T: Float>(v: Vec3<T>) -> Mat4<T> {
    Mat4::from_diagonal(v.extend(T::ONE))
}

/// Returns a transform that scales each coordinate by `x`, `y` and `z` respectively.
pub fn scale_xyz<T: Float>(x: T, y: T, z: T) -> Mat4<T> {
    scale(vec3(x, y, z))
}

/// Returns a transform that scales all coordinates by `s`.
pub fn scale_uniform<T: Float>(s: T) -> Mat4<T> {
    scale(Vector::splat(s))
}

/// Returns the transform from the coordinate system with the axes `x`, `y` and `z` to the
/// standard coordinate system.
///
/// The axes are expected to be orthonormal. The inverse transform is then the transpose of the
/// returned matrix.
///
/// ```
/// # use transform::*;
/// let m = change_basis(Vec3f::Y, Vec3f::Z, Vec3f::X);
/// assert_eq!(m * vec4(1.0, 2.0, 3.0, 1.0), vec4(3.0, 1.0, 2.0, 1.0));
/// assert_eq!(m.transpose() * vec4(3.0, 1.0, 2.0, 1.0), vec4(1.0, 2.0, 3.0, 1.0));
/// ```
pub fn change_basis<T: Float>(x: Vec3<T>, y: Vec3<T>, z: Vec3<T>) -> Mat4<T> {
    Matrix::from_columns([
        x.extend(T::ZERO),
        y.extend(T::ZERO),
        z.extend(T::ZERO),
        vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    ])
}

macro_rules! shears {
    ($($(#[$attr:meta])* $name:ident: $col:literal, $row:literal;)+) => {
        $(
            $(#[$attr])*
            pub fn $name<T: Float>(s: T) -> Mat4<T> {
                let mut m = Mat4::identity();
                m[$col][$row] = s;
                m
            }
        )+
    };
}

shears! {
    /// Returns a transform that shears the Y coordinate by `s` times the X coordinate.
    ///
    /// ```
    /// # use transform::*;
    /// assert_eq!(shear_xy(0.5) * vec4(2.0, 1.0, 0.0, 1.0), vec4(2.0, 2.0, 0.0, 1.0));
    /// ```
    shear_xy: 0, 1;
    /// Returns a transform that shears the Z coordinate by `s` times the X coordinate.
    shear_xz: 0, 2;
    /// Returns a transform that shears the X coordinate by `s` times the Y coordinate.
    shear_yx: 1, 0;
    /// Returns a transform that shears the Z coordinate by `s` times the Y coordinate.
    shear_yz: 1, 2;
    /// Returns a transform that shears the X coordinate by `s` times the Z coordinate.
    shear_zx: 2, 0;
    /// Returns a transform that shears the Y coordinate by `s` times the Z coordinate.
    shear_zy: 2, 1;
}

/// Applies the homogeneous transform `m` to the point `p`.
///
/// The point is extended with a *w* coordinate of 1, and the result is divided by its *w*
/// coordinate, so this also works for projective transforms.
pub fn transform_point<T: Float>(m: &Mat4<T>, p: Vec3<T>) -> Vec3<T> {
    let h = *m * p.extend(T::ONE);
    h.truncate() / h.w
}

/// Applies the homogeneous transform `m` to the direction vector `v`.
///
/// Directions have a *w* coordinate of 0, so they are not affected by translation.
pub fn transform_vector<T: Float>(m: &Mat4<T>, v: Vec3<T>) -> Vec3<T> {
    (*m * v.extend(T::ZERO)).truncate()
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;
    use transform_linalg::{determinant, Mat4f, SquareMatrix, Vec3f};

    use super::*;

    #[test]
    fn translation() {
        let m = translate(vec3(1.0f32, -2.0, 0.5));
        assert_eq!(m, translate_xyz(1.0, -2.0, 0.5));
        assert_eq!(transform_point(&m, Vec3f::ZERO), vec3(1.0, -2.0, 0.5));
        assert_eq!(transform_vector(&m, Vec3f::X), Vec3f::X);
        assert_eq!(m * translate(vec3(-1.0, 2.0, -0.5)), Mat4f::identity());
        assert_eq!(m.inverse(), translate(vec3(-1.0, 2.0, -0.5)));
    }

    #[test]
    fn axis_rotations() {
        let cases = [
            (rotate_x(FRAC_PI_2), Vec3f::Y, Vec3f::Z),
            (rotate_y(FRAC_PI_2), Vec3f::Z, Vec3f::X),
            (rotate_z(FRAC_PI_2), Vec3f::X, Vec3f::Y),
        ];
        for (m, from, to) in cases {
            assert_relative_eq!(transform_vector(&m, from), to, epsilon = 1e-6);
            assert_relative_eq!(determinant(&m), 1.0, epsilon = 1e-6);
            // Rotations are orthogonal.
            assert_relative_eq!(m * m.transpose(), Mat4f::identity(), epsilon = 1e-6);
        }

        // Two half turns are the identity.
        let half = rotate_x(PI);
        assert_relative_eq!(half * half, Mat4f::identity(), epsilon = 1e-6);
        assert_relative_eq!(rotate_z(0.25f32) * rotate_z(-0.25), Mat4f::identity(), epsilon = 1e-6);
    }

    #[test]
    fn scaling() {
        let m = scale_xyz(2.0f32, 3.0, 4.0);
        assert_eq!(m, scale(vec3(2.0, 3.0, 4.0)));
        assert_eq!(transform_point(&m, vec3(1.0, 1.0, 1.0)), vec3(2.0, 3.0, 4.0));
        assert_eq!(determinant(&m), 24.0);
        assert_eq!(scale_uniform(3.0f32), scale_xyz(3.0, 3.0, 3.0));
        assert_eq!(m[3], vec4(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn shearing() {
        let p = vec3(1.0f32, 2.0, 3.0);
        assert_eq!(transform_point(&shear_xy(2.0), p), vec3(1.0, 4.0, 3.0));
        assert_eq!(transform_point(&shear_xz(2.0), p), vec3(1.0, 2.0, 5.0));
        assert_eq!(transform_point(&shear_yx(2.0), p), vec3(5.0, 2.0, 3.0));
        assert_eq!(transform_point(&shear_yz(2.0), p), vec3(1.0, 2.0, 7.0));
        assert_eq!(transform_point(&shear_zx(2.0), p), vec3(7.0, 2.0, 3.0));
        assert_eq!(transform_point(&shear_zy(2.0), p), vec3(1.0, 8.0, 3.0));
        assert_eq!(determinant(&shear_zy(123.0f32)), 1.0);
    }

    #[test]
    fn basis() {
        let m = change_basis(Vec3f::X, Vec3f::Y, Vec3f::Z);
        assert_eq!(m, Mat4f::identity());

        let m = change_basis(Vec3f::Y, -Vec3f::X, Vec3f::Z);
        assert_relative_eq!(m, rotate_z(FRAC_PI_2), epsilon = 1e-6);
    }

    #[test]
    fn projective_point() {
        let mut m = Mat4f::identity();
        m[3][3] = 2.0;
        assert_eq!(transform_point(&m, vec3(2.0, 4.0, 6.0)), vec3(1.0, 2.0, 3.0));
        assert_eq!(transform_vector(&m, vec3(2.0, 4.0, 6.0)), vec3(2.0, 4.0, 6.0));
    }
}
