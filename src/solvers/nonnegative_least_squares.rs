use log::warn;
use nalgebra::{DMatrix, DVector};

use super::least_squares::solve_least_squares;
use crate::config::NNLS_ITERATION_FACTOR;

/// Non-negative least squares by the Lawson-Hanson active-set method.
///
/// Solves min ‖a·x − b‖ subject to x >= 0. A solve that cannot drive the
/// residual down within the iteration cap is not a hard failure: the best
/// feasible iterate found so far is returned. The default cap is
/// `NNLS_ITERATION_FACTOR` times the number of unknowns.
pub fn solve_nonnegative_least_squares(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    max_iterations: Option<usize>,
) -> Result<DVector<f64>, String> {
    let (rows, cols) = a.shape();
    if rows == 0 || cols == 0 {
        return Err(
            "Non-negative least-squares system must have at least one row and one column"
                .to_string(),
        );
    }
    if b.len() != rows {
        return Err(format!(
            "Right-hand side has length {} but the system has {} rows",
            b.len(),
            rows
        ));
    }

    let cap = max_iterations.unwrap_or(NNLS_ITERATION_FACTOR * cols);
    let tol = 10.0 * f64::EPSILON * a.amax() * rows.max(cols) as f64;

    let mut x = DVector::<f64>::zeros(cols);
    let mut passive = vec![false; cols];
    let mut iterations = 0usize;

    loop {
        let residual = b - a * &x;
        let gradient = a.transpose() * residual;

        // Most positive gradient among the free variables
        let mut candidate: Option<usize> = None;
        let mut best = tol;
        for k in 0..cols {
            if !passive[k] && gradient[k] > best {
                best = gradient[k];
                candidate = Some(k);
            }
        }
        let entering = match candidate {
            Some(k) => k,
            None => return Ok(x), // KKT conditions hold
        };
        passive[entering] = true;

        // Inner loop: restore feasibility of the passive-set solution
        loop {
            iterations += 1;
            if iterations > cap {
                warn!(
                    "nonnegative least squares stopped at the iteration cap ({}), returning the best feasible iterate",
                    cap
                );
                return Ok(x);
            }

            let active_cols: Vec<usize> = (0..cols).filter(|&k| passive[k]).collect();
            if active_cols.is_empty() {
                break; // everything was driven to the boundary; re-select from the gradient
            }
            let sub = a.select_columns(active_cols.iter());
            let z = solve_least_squares(&sub, b, None)?;

            if z.iter().all(|&value| value > tol) {
                x.fill(0.0);
                for (pos, &col) in active_cols.iter().enumerate() {
                    x[col] = z[pos];
                }
                break;
            }

            // Step from x toward z, stopping where the first passive
            // variable reaches the boundary
            let mut alpha = 1.0_f64;
            for (pos, &col) in active_cols.iter().enumerate() {
                if z[pos] <= tol {
                    let denom = x[col] - z[pos];
                    if denom > 0.0 {
                        alpha = alpha.min(x[col] / denom);
                    }
                }
            }
            for (pos, &col) in active_cols.iter().enumerate() {
                x[col] += alpha * (z[pos] - x[col]);
            }
            for &col in &active_cols {
                if x[col] <= tol {
                    x[col] = 0.0;
                    passive[col] = false;
                }
            }
        }
    }
}
