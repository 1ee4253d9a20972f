use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::PI;

use crate::config::DEFAULT_POLE_DENSITY_STEPS;
use crate::rotations::fiber_rotations::rotate_to_family;

/// An orientation distribution function over SO(3).
///
/// Implementations provide the pointwise density; pole-figure integration
/// and the unit conversion are derived from it.
pub trait Odf {
    /// Density estimate at an orientation.
    ///
    /// Truncated expansions may legitimately return small negative values
    /// at poorly resolved orientations.
    fn value(&self, pt: &UnitQuaternion<f64>) -> f64;

    /// Conversion factor from probability density on SO(3) to multiples
    /// of the random (uniform) density.
    fn pdf_to_mrd(&self) -> f64 {
        8.0 * PI * PI
    }

    /// Pole density at sample direction `pt` for crystal direction `pole`.
    ///
    /// Integrates `value` over the rotational fiber carrying `pole` onto
    /// `pt`, sweeping `steps` equal angular increments over [0, 2π) with
    /// the endpoint excluded, and divides by 2π times the step count.
    fn pole_density_with_steps(
        &self,
        pt: &Vector3<f64>,
        pole: &Vector3<f64>,
        steps: usize,
    ) -> Result<f64, String> {
        if steps == 0 {
            return Err("Pole density integration needs at least one step".to_string());
        }
        let mut total = 0.0;
        for k in 0..steps {
            let angle = 2.0 * PI * k as f64 / steps as f64;
            total += self.value(&rotate_to_family(pole, pt, angle)?);
        }
        Ok(total / (2.0 * PI) / steps as f64)
    }

    /// Pole density with the default number of integration steps.
    fn pole_density(&self, pt: &Vector3<f64>, pole: &Vector3<f64>) -> Result<f64, String> {
        self.pole_density_with_steps(pt, pole, DEFAULT_POLE_DENSITY_STEPS)
    }
}
