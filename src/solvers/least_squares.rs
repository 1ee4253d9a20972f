use nalgebra::{ComplexField, DMatrix, DVector};

/// Minimum-norm least-squares solution of a·x ≈ b by rank-truncated SVD.
///
/// Singular values below `rcond` times the largest singular value are
/// treated as zero, so rank-deficient systems are handled by automatic
/// truncation instead of failing. `rcond = None` selects
/// max(rows, cols) · machine epsilon.
///
/// Works for real and complex systems alike (`T` is `f64` or `Complex64`).
pub fn solve_least_squares<T>(
    a: &DMatrix<T>,
    b: &DVector<T>,
    rcond: Option<f64>,
) -> Result<DVector<T>, String>
where
    T: ComplexField<RealField = f64>,
{
    let (rows, cols) = a.shape();
    if rows == 0 || cols == 0 {
        return Err("Least-squares system must have at least one row and one column".to_string());
    }
    if b.len() != rows {
        return Err(format!(
            "Right-hand side has length {} but the system has {} rows",
            b.len(),
            rows
        ));
    }

    let svd = a.clone().svd(true, true);
    let sigma_max = svd.singular_values.max();
    let cutoff = rcond.unwrap_or_else(|| rows.max(cols) as f64 * f64::EPSILON) * sigma_max;
    svd.solve(b, cutoff).map_err(|message| message.to_string())
}
