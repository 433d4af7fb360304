//! Math utilities and types
//!
//! Provides the fundamental vector and matrix types used by the collision code.

pub use nalgebra::{Vector3, Matrix3, Rotation3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Pi / 4
    pub const QUARTER_PI: f32 = PI * 0.25;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Shared tolerance for every "touching" and "near-zero" decision.
    ///
    /// All shape pairs use this one value so that A-vs-B and B-vs-A agree.
    pub const EPSILON: f32 = 1.0e-5;

    /// Absolute direction cosine above which two box axes count as parallel
    pub const PARALLEL_CUTOFF: f32 = 1.0 - EPSILON;

    /// Looser tolerance for shape invariant checks (unit normals, orthonormal bases)
    pub const VALIDATION_TOLERANCE: f32 = 1.0e-3;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Mat3, Rotation3};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Clamp a value between min and max
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min { min } else if value > max { max } else { value }
    }

    /// Build a rotation basis from roll/pitch/yaw angles in radians
    pub fn rotation_from_euler(roll: f32, pitch: f32, yaw: f32) -> Mat3 {
        Rotation3::from_euler_angles(roll, pitch, yaw).into_inner()
    }
}

/// Extension trait for Mat3 used as a rotation basis
pub trait Mat3Ext {
    /// Local axis `index` (0 = x, 1 = y, 2 = z) as a world-space vector
    fn axis(&self, index: usize) -> Vec3;

    /// Whether the columns form an orthonormal basis within `tolerance`
    fn is_orthonormal(&self, tolerance: f32) -> bool;
}

impl Mat3Ext for Mat3 {
    fn axis(&self, index: usize) -> Vec3 {
        self.column(index).into_owned()
    }

    fn is_orthonormal(&self, tolerance: f32) -> bool {
        let gram = self.transpose() * self;
        (gram - Mat3::identity()).iter().all(|value| value.abs() <= tolerance)
    }
}
