//! Camera, Euler and arbitrary-axis transforms.

use transform_linalg::{vec3, Float, Mat4, SquareMatrix, Vec3};

use crate::{change_basis, rotate_x, rotate_y, rotate_z, translate};

/// Orthonormal camera axes `(x, y, z)` for a camera at `camera_pos` facing `point_pos`.
///
/// `z` points from the target back to the camera. `up` must not be parallel to it.
fn camera_axes<T: Float>(
    camera_pos: Vec3<T>,
    up: Vec3<T>,
    point_pos: Vec3<T>,
) -> (Vec3<T>, Vec3<T>, Vec3<T>) {
    let z = (camera_pos - point_pos).normalize();
    let x = (-z.cross(up)).normalize();
    let y = z.cross(x);
    (x, y, z)
}

/// Moves `camera_pos` to the origin, then maps the standard axes onto the camera axes.
///
/// The camera axes are `z = normalize(camera_pos - point_pos)`, `x = normalize(-z × up)` and
/// `y = z × x`, and the result is `change_basis(x, y, z) * translate(-camera_pos)`.
/// [`view_matrix`] builds the matching view transform from the transposed basis.
///
/// ```
/// # use transform::*;
/// let m = look_at(vec3(0.0, 0.0, 5.0), Vec3f::Y, Vec3f::ZERO);
/// assert_eq!(transform_point(&m, vec3(0.0, 0.0, 5.0)), Vec3f::ZERO);
/// ```
pub fn look_at<T: Float>(camera_pos: Vec3<T>, up: Vec3<T>, point_pos: Vec3<T>) -> Mat4<T> {
    let (x, y, z) = camera_axes(camera_pos, up, point_pos);
    change_basis(x, y, z) * translate(-camera_pos)
}

/// Returns the view transform for a camera at `camera_pos` that is looking at `point_pos`.
///
/// The view transform maps `camera_pos` to the origin and `point_pos` onto the negative Z axis,
/// with `up` pointing roughly in the positive Y direction. It uses the same axes as [`look_at`],
/// but with the transposed basis.
///
/// ```
/// # use transform::*;
/// let view = view_matrix(vec3(0.0, 0.0, 5.0), Vec3f::Y, Vec3f::ZERO);
/// assert_eq!(transform_point(&view, Vec3f::ZERO), vec3(0.0, 0.0, -5.0));
/// ```
pub fn view_matrix<T: Float>(camera_pos: Vec3<T>, up: Vec3<T>, point_pos: Vec3<T>) -> Mat4<T> {
    let (x, y, z) = camera_axes(camera_pos, up, point_pos);
    change_basis(x, y, z).transpose() * translate(-camera_pos)
}

/// Returns the rotation described by the Euler angles `yaw` (around Y), `pitch` (around X) and
/// `roll` (around Z).
///
/// The rotations are applied in that order, so this is equal to
/// `rotate_z(roll) * rotate_x(pitch) * rotate_y(yaw)`.
pub fn euler<T: Float>(yaw: T, pitch: T, roll: T) -> Mat4<T> {
    rotate_z(roll) * rotate_x(pitch) * rotate_y(yaw)
}

/// Returns the rotation described by the Euler angles stored as `(yaw, pitch, roll)` in `angles`.
pub fn euler_vec<T: Float>(angles: Vec3<T>) -> Mat4<T> {
    euler(angles.x, angles.y, angles.z)
}

/// Computes the Euler angles of a rotation created with [`euler`].
///
/// Returns `(yaw, pitch, roll)`, with `pitch` in range `-π/2..=π/2`.
///
/// When `pitch` is ±π/2 (gimbal lock), yaw and roll rotate around the same axis and cannot be
/// told apart. In that case, `yaw` is 0 and the whole rotation is attributed to `roll`.
///
/// ```
/// # use transform::*;
/// let angles = vec3(0.5, -0.25, 1.0);
/// approx::assert_relative_eq!(extract_from_euler(&euler_vec(angles)), angles, epsilon = 1e-12);
/// ```
pub fn extract_from_euler<T: Float>(m: &Mat4<T>) -> Vec3<T> {
    let sin_pitch = m[1][2].clamp(-T::ONE, T::ONE);
    let pitch = sin_pitch.asin();
    if sin_pitch.abs() == T::ONE {
        log::trace!("gimbal lock while extracting Euler angles");
        let roll = m[0][1].atan2(m[0][0]);
        return vec3(T::ZERO, pitch, roll);
    }

    let yaw = (-m[0][2]).atan2(m[2][2]);
    let roll = (-m[1][0]).atan2(m[1][1]);
    vec3(yaw, pitch, roll)
}

/// Returns a transform that rotates by `rad` radians around `axis`.
///
/// The rotation is counter-clockwise when looking towards the origin from the tip of `axis`.
/// `axis` does not have to be normalized, but must not be zero.
///
/// ```
/// # use transform::*;
/// let m = rotate(vec3(0.0, 2.0, 0.0), 1.25);
/// approx::assert_relative_eq!(m, rotate_y(1.25), epsilon = 1e-12);
/// ```
pub fn rotate<T: Float>(axis: Vec3<T>, rad: T) -> Mat4<T> {
    let [ax, ay, az] = axis.map(T::abs).into_array();
    let x = axis.normalize();
    // Any vector orthogonal to `axis`. Zeroing the smallest component keeps it well-conditioned.
    let y = if ax <= ay && ax <= az {
        vec3(T::ZERO, -axis.z, axis.y)
    } else if ay <= ax && ay <= az {
        vec3(-axis.z, T::ZERO, axis.x)
    } else {
        vec3(-axis.y, axis.x, T::ZERO)
    }
    .normalize();
    let z = x.cross(y);

    let frame = change_basis(x, y, z);
    frame * rotate_x(rad) * frame.transpose()
}

/// Returns the matrix that transforms surface normals for the transform `m`.
///
/// This is the transposed inverse of the upper-left 3x3 part of `m`, embedded in a 4x4 matrix.
/// Translations do not affect normals, so the rest of `m` is ignored.
///
/// Returns [`None`] if the 3x3 part of `m` is not invertible.
///
/// ```
/// # use transform::*;
/// let m = scale_xyz(2.0, 1.0, 1.0);
/// let n = normal_matrix(&m).unwrap();
/// assert_eq!(transform_vector(&n, vec3(1.0, 1.0, 0.0)), vec3(0.5, 1.0, 0.0));
/// ```
pub fn normal_matrix<T: Float>(m: &Mat4<T>) -> Option<Mat4<T>> {
    let linear = m.resize::<3, 3>();
    Some(linear.try_inverse()?.transpose().embed())
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    use approx::assert_relative_eq;
    use transform_linalg::{vec4, Mat3f, Mat4f, Vec3f};

    use crate::{scale_xyz, shear_xy, transform_point, transform_vector};

    use super::*;

    #[test]
    fn look_at_composes_basis_and_translation() {
        let camera = vec3(1.0f32, 2.0, 3.0);
        let target = vec3(-2.0f32, 0.5, 1.0);
        let m = look_at(camera, Vec3f::Y, target);

        let z = (camera - target).normalize();
        let x = (-z.cross(Vec3f::Y)).normalize();
        let y = z.cross(x);
        assert_relative_eq!(m, change_basis(x, y, z) * translate(-camera), epsilon = 1e-6);
        assert_relative_eq!(m.row(0), vec4(0.5547, -0.3196, 0.7682, -2.2202), epsilon = 1e-4);

        assert_relative_eq!(transform_point(&m, camera), Vec3f::ZERO, epsilon = 1e-6);
        let view = view_matrix(camera, Vec3f::Y, target);
        assert_relative_eq!(m.resize::<3, 3>().transpose(), view.resize::<3, 3>(), epsilon = 1e-6);
    }

    #[test]
    fn view_matrix_maps_target() {
        let camera = vec3(1.0f32, 2.0, 3.0);
        let target = vec3(-2.0f32, 0.5, 1.0);
        let view = view_matrix(camera, Vec3f::Y, target);

        assert_relative_eq!(transform_point(&view, camera), Vec3f::ZERO, epsilon = 1e-6);
        let dist = camera.distance(target);
        assert_relative_eq!(transform_point(&view, target), vec3(0.0, 0.0, -dist), epsilon = 1e-5);

        // The up vector stays in the upper half of the YZ plane.
        let up = transform_vector(&view, Vec3f::Y);
        assert_relative_eq!(up.x, 0.0, epsilon = 1e-6);
        assert!(up.y > 0.0);

        // The view transform is rigid.
        let linear = view.resize::<3, 3>();
        assert_relative_eq!(linear * linear.transpose(), Mat3f::identity(), epsilon = 1e-6);
    }

    #[test]
    fn euler_composition() {
        assert_relative_eq!(euler(0.3f32, 0.0, 0.0), rotate_y(0.3));
        assert_relative_eq!(euler(0.0f32, 0.3, 0.0), rotate_x(0.3));
        assert_relative_eq!(euler(0.0f32, 0.0, 0.3), rotate_z(0.3));
        assert_eq!(euler_vec(vec3(0.1f32, 0.2, 0.3)), euler(0.1, 0.2, 0.3));

        // Yaw is applied first.
        let m = euler(FRAC_PI_2, FRAC_PI_2, 0.0);
        assert_relative_eq!(transform_vector(&m, Vec3f::Z), Vec3f::X, epsilon = 1e-6);
    }

    #[test]
    fn euler_round_trip() {
        let mut rng = fastrand::Rng::with_seed(0xe01e);
        for _ in 0..100 {
            let angles = vec3(
                (rng.f32() * 2.0 - 1.0) * 3.0,
                (rng.f32() * 2.0 - 1.0) * 1.5,
                (rng.f32() * 2.0 - 1.0) * 3.0,
            );
            let extracted = extract_from_euler(&euler_vec(angles));
            assert_relative_eq!(extracted, angles, epsilon = 1e-3);
        }
    }

    #[test]
    fn gimbal_lock() {
        let m = euler(0.25f32, FRAC_PI_2, 0.5);
        let angles = extract_from_euler(&m);
        assert_eq!(angles.x, 0.0);
        assert_relative_eq!(angles.y, FRAC_PI_2);
        // The extracted angles describe the same rotation.
        assert_relative_eq!(euler_vec(angles), m, epsilon = 1e-6);
    }

    #[test]
    fn arbitrary_axis() {
        assert_relative_eq!(rotate(Vec3f::X, 0.7), rotate_x(0.7), epsilon = 1e-6);
        assert_relative_eq!(rotate(Vec3f::Z * 3.0, -0.4), rotate_z(-0.4), epsilon = 1e-6);

        let axis = vec3(1.0f32, 1.0, 1.0);
        let m = rotate(axis, FRAC_PI_2 * 4.0 / 3.0);
        // A third of a turn around the diagonal permutes the coordinate axes.
        assert_relative_eq!(transform_vector(&m, Vec3f::X), Vec3f::Y, epsilon = 1e-5);
        assert_relative_eq!(transform_vector(&m, Vec3f::Y), Vec3f::Z, epsilon = 1e-5);
        // Points on the axis don't move.
        assert_relative_eq!(transform_point(&m, axis * 2.0), axis * 2.0, epsilon = 1e-5);
        assert_relative_eq!(m[3], vec4(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn normals() {
        // Rotations are their own normal matrix.
        let r = rotate(vec3(0.3f32, -1.0, 0.2), FRAC_PI_4);
        assert_relative_eq!(normal_matrix(&r).unwrap(), r, epsilon = 1e-6);

        // Normals stay perpendicular to transformed surfaces.
        let m = shear_xy(1.5f32) * scale_xyz(2.0, 0.5, 1.0);
        let n = normal_matrix(&m).unwrap();
        let tangent = vec3(1.0f32, -1.0, 0.0);
        let normal = vec3(1.0f32, 1.0, 0.0);
        let dot = transform_vector(&m, tangent).dot(transform_vector(&n, normal));
        assert_relative_eq!(dot, 0.0, epsilon = 1e-6);

        assert_eq!(normal_matrix(&Mat4f::ZERO), None);
    }
}
