use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::PI;

use crate::config::ORIENTATION_TOLERANCE;

/// Build an orientation from ZYZ Euler angles (active convention).
///
/// The resulting rotation is Rz(alpha) * Ry(beta) * Rz(gamma), applied to
/// column vectors on the left.
///
/// # Arguments
/// * `alpha` - first rotation about the z axis, radians
/// * `beta` - rotation about the intermediate y axis, radians
/// * `gamma` - final rotation about the z axis, radians
pub fn from_euler_zyz(alpha: f64, beta: f64, gamma: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Vector3::z_axis(), alpha)
        * UnitQuaternion::from_axis_angle(&Vector3::y_axis(), beta)
        * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), gamma)
}

/// Recover the ZYZ Euler angles of an orientation.
///
/// Returns (alpha, beta, gamma) with alpha, gamma in [0, 2π) and beta in
/// [0, π]. When beta is numerically 0 or π the decomposition is degenerate;
/// gamma is fixed to 0 and the full in-plane angle is reported as alpha.
pub fn euler_zyz_angles(q: &UnitQuaternion<f64>) -> (f64, f64, f64) {
    let r = q.to_rotation_matrix();
    let m = r.matrix();

    let cos_beta = m[(2, 2)].clamp(-1.0, 1.0);
    let beta = cos_beta.acos();
    let sin_beta = (1.0 - cos_beta * cos_beta).sqrt();

    if sin_beta > ORIENTATION_TOLERANCE {
        let alpha = m[(1, 2)].atan2(m[(0, 2)]);
        let gamma = m[(2, 1)].atan2(-m[(2, 0)]);
        (wrap_angle(alpha), beta, wrap_angle(gamma))
    } else if cos_beta > 0.0 {
        // Rotation collapses to Rz(alpha + gamma)
        let alpha = m[(1, 0)].atan2(m[(0, 0)]);
        (wrap_angle(alpha), 0.0, 0.0)
    } else {
        let alpha = (-m[(1, 0)]).atan2(-m[(0, 0)]);
        (wrap_angle(alpha), PI, 0.0)
    }
}

/// Wrap an angle into [0, 2π).
pub fn wrap_angle(angle: f64) -> f64 {
    let two_pi = 2.0 * PI;
    let wrapped = angle % two_pi;
    if wrapped < 0.0 {
        wrapped + two_pi
    } else {
        wrapped
    }
}
