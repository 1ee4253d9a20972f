// Constants

// Tolerances
pub const ORIENTATION_TOLERANCE: f64 = 1e-10; // For degenerate-axis and zero-vector checks
pub const NORMALIZATION_MASS_TOLERANCE: f64 = 1e-12; // Below this the quadrature mass is reported as degenerate

// Defaults
pub const DEFAULT_POLE_DENSITY_STEPS: usize = 10; // Fiber integration steps for pole densities
pub const NNLS_ITERATION_FACTOR: usize = 3; // Active-set iteration cap = factor * unknowns
