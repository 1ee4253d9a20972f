// Rotations module: SO(3) primitives consumed by the orientation distribution core
// Orientations are nalgebra unit quaternions; this module supplies the Euler-angle
// conversions and the rotational-fiber construction used by pole figures

// ======================== MODULE DECLARATIONS ========================
pub mod euler_angles;
pub mod fiber_rotations;


// ======================== EULER ANGLE CONVERSIONS ========================
pub use euler_angles::{
    from_euler_zyz,   // fn(alpha: f64, beta: f64, gamma: f64) -> UnitQuaternion<f64> - active ZYZ composition
    euler_zyz_angles, // fn(q: &UnitQuaternion<f64>) -> (f64, f64, f64) - recovers (alpha, beta, gamma)
    wrap_angle,       // fn(angle: f64) -> f64 - wraps an angle into [0, 2π)
};

// ======================== FIBER ROTATIONS ========================
pub use fiber_rotations::{
    axial_rotation,    // fn(axis: &Vector3<f64>, angle: f64) -> Result<UnitQuaternion<f64>, String> - rotation about an axis
    rotation_carrying, // fn(from: &Vector3<f64>, to: &Vector3<f64>) -> Result<UnitQuaternion<f64>, String> - minimal aligning rotation
    rotate_to_family,  // fn(pole: &Vector3<f64>, pt: &Vector3<f64>, angle: f64) -> Result<UnitQuaternion<f64>, String> - fiber member at a sweep angle
};
