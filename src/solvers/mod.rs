// Solvers module: dense numerical solvers used by the projection algorithms
// Rank-truncated SVD least squares plus an active-set non-negative variant

// ======================== MODULE DECLARATIONS ========================
pub mod least_squares;
pub mod nonnegative_least_squares;

mod _tests_nonnegative_least_squares;

// ======================== LEAST SQUARES ========================
pub use least_squares::solve_least_squares; // fn(a: &DMatrix<T>, b: &DVector<T>, rcond: Option<f64>) -> Result<DVector<T>, String> - minimum-norm SVD solve

// ======================== NON-NEGATIVE LEAST SQUARES ========================
pub use nonnegative_least_squares::solve_nonnegative_least_squares; // fn(a: &DMatrix<f64>, b: &DVector<f64>, max_iterations: Option<usize>) -> Result<DVector<f64>, String> - Lawson-Hanson NNLS
