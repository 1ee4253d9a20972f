// ODF module: orientation distribution functions over the rotation group
// The Odf trait is the polymorphic density abstraction; HarmonicOdf is the
// generalized-spherical-harmonic expansion with its three fitting strategies

// ======================== MODULE DECLARATIONS ========================
pub mod orientation_distribution;
pub mod harmonic_odf;

mod _tests_harmonic_odf;

// ======================== ODF ABSTRACTION ========================
pub use orientation_distribution::Odf; // trait - density evaluation plus derived pole-density integration
// Odf provided methods:
//   value(&self, pt: &UnitQuaternion<f64>) -> f64                        - density at an orientation (required)
//   pdf_to_mrd(&self) -> f64                                             - conversion to multiples of random density (8π²)
//   pole_density(&self, pt, pole) -> Result<f64, String>                 - fiber integral with default step count
//   pole_density_with_steps(&self, pt, pole, steps) -> Result<f64, String> - fiber integral with explicit step count

// ======================== HARMONIC EXPANSION ========================
pub use harmonic_odf::{
    HarmonicOdf,      // struct - fixed-order harmonic expansion with projection algorithms
    ProjectionMethod, // enum - Series | LeastSquares | NonNegativeLeastSquares (FromStr accepts "series"/"ls"/"nnls")
};
