use nalgebra::UnitQuaternion;
use std::f64::consts::PI;

use crate::rotations::euler_angles::from_euler_zyz;

/// Gauss-Legendre nodes and weights on [-1, 1].
///
/// Newton iteration on the three-term Legendre recurrence; nodes are
/// returned in ascending order.
pub fn gauss_legendre(n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut nodes = vec![0.0; n];
    let mut weights = vec![0.0; n];
    let nf = n as f64;

    for k in 0..(n + 1) / 2 {
        // Chebyshev-based initial guess for the k-th root from the right
        let mut x = (PI * (k as f64 + 0.75) / (nf + 0.5)).cos();
        let mut dp = 1.0;
        for _ in 0..100 {
            let mut p0 = 1.0;
            let mut p1 = x;
            for m in 2..=n {
                let mf = m as f64;
                let p2 = ((2.0 * mf - 1.0) * x * p1 - (mf - 1.0) * p0) / mf;
                p0 = p1;
                p1 = p2;
            }
            dp = nf * (x * p1 - p0) / (x * x - 1.0);
            let dx = p1 / dp;
            x -= dx;
            if dx.abs() < 1e-15 {
                break;
            }
        }
        nodes[k] = -x;
        nodes[n - 1 - k] = x;
        let w = 2.0 / ((1.0 - x * x) * dp * dp);
        weights[k] = w;
        weights[n - 1 - k] = w;
    }
    (nodes, weights)
}

/// Product quadrature over SO(3) with total weight 8π².
///
/// Gauss-Legendre in cos(beta) crossed with uniform periodic grids in
/// alpha and gamma. Sized so that products of two harmonics of degree up
/// to `order` integrate exactly: order+1 nodes handle polynomial degree
/// 2·order+1 in cos(beta), and 2·order+1 grid points resolve plane
/// frequencies through 2·order.
pub fn quadrature_so3(order: usize) -> (Vec<UnitQuaternion<f64>>, Vec<f64>) {
    let n_beta = order + 1;
    let n_plane = 2 * order + 1;
    let (xs, ws) = gauss_legendre(n_beta);
    let step = 2.0 * PI / n_plane as f64;

    let count = n_beta * n_plane * n_plane;
    let mut points = Vec::with_capacity(count);
    let mut weights = Vec::with_capacity(count);
    for (x, wb) in xs.iter().zip(ws.iter()) {
        let beta = x.clamp(-1.0, 1.0).acos();
        let w = wb * step * step;
        for p in 0..n_plane {
            let alpha = step * p as f64;
            for q in 0..n_plane {
                let gamma = step * q as f64;
                points.push(from_euler_zyz(alpha, beta, gamma));
                weights.push(w);
            }
        }
    }
    (points, weights)
}
