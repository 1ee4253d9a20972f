use nalgebra::UnitQuaternion;
use num_complex::Complex64;
use std::f64::consts::PI;

use crate::rotations::euler_angles::euler_zyz_angles;

/// Factorial as f64. Exact through 22!, finite through 170!.
fn factorial(k: i32) -> f64 {
    (2..=k).map(|x| x as f64).product()
}

/// Wigner small-d matrix element d^n_{ij}(beta).
///
/// Explicit factorial-sum form; with beta in [0, π] both half-angle
/// factors are non-negative and the sum is numerically benign for the
/// moderate degrees used in texture expansions.
pub fn wigner_d(n: i32, i: i32, j: i32, beta: f64) -> f64 {
    debug_assert!(n >= 0 && i.abs() <= n && j.abs() <= n);
    let half = 0.5 * beta;
    let cos_half = half.cos();
    let sin_half = half.sin();

    let prefactor =
        (factorial(n + j) * factorial(n - j) * factorial(n + i) * factorial(n - i)).sqrt();

    let s_min = 0.max(j - i);
    let s_max = (n + j).min(n - i);
    let mut sum = 0.0;
    for s in s_min..=s_max {
        let sign = if (i - j + s) % 2 == 0 { 1.0 } else { -1.0 };
        let denom =
            factorial(n + j - s) * factorial(s) * factorial(i - j + s) * factorial(n - i - s);
        let cos_pow = 2 * n + j - i - 2 * s;
        let sin_pow = i - j + 2 * s;
        sum += sign * cos_half.powi(cos_pow) * sin_half.powi(sin_pow) / denom;
    }
    prefactor * sum
}

/// Orthonormalized generalized spherical harmonic Z^n_{ij} at an orientation.
///
/// With (alpha, beta, gamma) the ZYZ Euler angles of `pt`,
///
///   Z^n_{ij} = sqrt((2n+1)/(8π²)) · exp(-I·i·alpha) · d^n_{ij}(beta) · exp(-I·j·gamma)
///
/// The family is orthonormal under the unnormalized Haar measure on SO(3)
/// (total volume 8π²), so a unit-mass density has coefficient
/// 1/sqrt(8π²) on the (0,0,0) term alone.
pub fn harmonic_so3(n: i32, i: i32, j: i32, pt: &UnitQuaternion<f64>) -> Complex64 {
    let (alpha, beta, gamma) = euler_zyz_angles(pt);
    let norm = ((2 * n + 1) as f64 / (8.0 * PI * PI)).sqrt();
    let d = wigner_d(n, i, j, beta);
    let phase = Complex64::new(0.0, -(i as f64 * alpha + j as f64 * gamma)).exp();
    (norm * d) * phase
}
