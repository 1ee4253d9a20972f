use nalgebra::{Unit, UnitQuaternion, Vector3};
use std::f64::consts::PI;

use crate::config::ORIENTATION_TOLERANCE;

/// Rotation about an arbitrary Cartesian axis.
///
/// # Arguments
/// * `axis` - rotation axis, any non-zero length
/// * `angle` - rotation angle in radians
pub fn axial_rotation(axis: &Vector3<f64>, angle: f64) -> Result<UnitQuaternion<f64>, String> {
    if axis.norm() < ORIENTATION_TOLERANCE {
        return Err("Rotation axis has zero length".to_string());
    }
    Ok(UnitQuaternion::from_axis_angle(
        &Unit::new_normalize(*axis),
        angle,
    ))
}

/// The minimal rotation carrying direction `from` onto direction `to`.
///
/// Inputs need not be normalized. The antiparallel case has no unique
/// minimal rotation; any half-turn about an axis perpendicular to `from`
/// carries it onto `to`, and one is chosen deterministically.
pub fn rotation_carrying(from: &Vector3<f64>, to: &Vector3<f64>) -> Result<UnitQuaternion<f64>, String> {
    if from.norm() < ORIENTATION_TOLERANCE || to.norm() < ORIENTATION_TOLERANCE {
        return Err("Directions must have non-zero length".to_string());
    }
    match UnitQuaternion::rotation_between(from, to) {
        Some(q) => Ok(q),
        None => {
            let axis = perpendicular_axis(from);
            Ok(UnitQuaternion::from_axis_angle(
                &Unit::new_normalize(axis),
                PI,
            ))
        }
    }
}

/// One member of the rotational fiber carrying `pole` onto `pt`.
///
/// The full fiber is the one-parameter family obtained by first spinning
/// about `pole` by `angle` and then applying the carrying rotation; every
/// member maps `pole` to `pt`. Sweeping `angle` over [0, 2π) traverses the
/// whole family.
///
/// # Arguments
/// * `pole` - crystal direction, as a Cartesian vector
/// * `pt` - target direction in the sample frame
/// * `angle` - sweep parameter along the fiber, radians
pub fn rotate_to_family(
    pole: &Vector3<f64>,
    pt: &Vector3<f64>,
    angle: f64,
) -> Result<UnitQuaternion<f64>, String> {
    let carry = rotation_carrying(pole, pt)?;
    let spin = axial_rotation(pole, angle)?;
    Ok(carry * spin)
}

/// Any vector perpendicular to `v` (assumed non-zero).
fn perpendicular_axis(v: &Vector3<f64>) -> Vector3<f64> {
    let trial = if v.x.abs() < 0.9 * v.norm() {
        Vector3::x()
    } else {
        Vector3::y()
    };
    v.cross(&trial)
}
