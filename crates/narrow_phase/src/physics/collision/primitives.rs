//! Primitive collision shapes
//!
//! Provides the geometric primitives (planes, spheres, oriented boxes) that
//! the intersection and contact routines operate on. All primitives are
//! world-space value types.

use serde::{Serialize, Deserialize};

use crate::foundation::math::{Mat3, Mat3Ext, Vec3, constants::VALIDATION_TOLERANCE, utils};

/// Shape invariant violations
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ShapeError {
    /// Sphere radius is negative or not finite
    #[error("Invalid sphere radius: {0}")]
    InvalidRadius(f32),

    /// Box half-extent is negative or not finite
    #[error("Invalid box extent on axis {axis}: {value}")]
    InvalidExtent {
        /// Local axis index
        axis: usize,
        /// Offending half-extent
        value: f32,
    },

    /// Plane normal is not unit length
    #[error("Plane normal is not unit length (length {0})")]
    NonUnitNormal(f32),

    /// Box rotation columns are not an orthonormal basis
    #[error("Box rotation is not orthonormal")]
    NonOrthonormalRotation,

    /// A position or distance is NaN or infinite
    #[error("Non-finite coordinate in {0}")]
    NonFinite(&'static str),
}

/// An infinite plane `normal · p = distance`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Unit normal
    pub normal: Vec3,
    /// Signed distance of the plane from the origin along `normal`
    pub distance: f32,
}

impl Plane {
    /// Creates a plane from a unit normal and its distance from the origin
    pub const fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Creates a plane through `point` with the given normal (normalized here)
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let normal = normal.normalize();
        Self { normal, distance: normal.dot(&point) }
    }

    /// Signed distance from the plane to `point`; positive on the normal side
    pub fn signed_distance(&self, point: &Vec3) -> f32 {
        self.normal.dot(point) - self.distance
    }

    /// Projects `point` onto the plane
    pub fn project(&self, point: &Vec3) -> Vec3 {
        point - self.normal * self.signed_distance(point)
    }

    /// Check the plane invariants
    pub fn validate(&self) -> Result<(), ShapeError> {
        if !self.distance.is_finite() || !self.normal.iter().all(|v| v.is_finite()) {
            return Err(ShapeError::NonFinite("plane"));
        }
        let length = self.normal.magnitude();
        if (length - 1.0).abs() > VALIDATION_TOLERANCE {
            return Err(ShapeError::NonUnitNormal(length));
        }
        Ok(())
    }
}

/// A sphere for collision detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl Sphere {
    /// Creates a new sphere with the given center and radius
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check the sphere invariants
    pub fn validate(&self) -> Result<(), ShapeError> {
        if !self.center.iter().all(|v| v.is_finite()) {
            return Err(ShapeError::NonFinite("sphere"));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ShapeError::InvalidRadius(self.radius));
        }
        Ok(())
    }
}

/// An oriented bounding box
///
/// The columns of `rotation` are the box's local axes in world space and
/// `extents` holds the half-widths along those axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientedBox {
    /// Center in world space
    pub center: Vec3,
    /// Half-extents along each local axis
    pub extents: Vec3,
    /// Orthonormal basis; column `i` is local axis `i`
    pub rotation: Mat3,
}

impl OrientedBox {
    /// Creates a new box
    pub const fn new(center: Vec3, extents: Vec3, rotation: Mat3) -> Self {
        Self { center, extents, rotation }
    }

    /// Creates a box aligned with the world axes
    pub fn axis_aligned(center: Vec3, extents: Vec3) -> Self {
        Self::new(center, extents, Mat3::identity())
    }

    /// Local axis `index` in world space
    pub fn axis(&self, index: usize) -> Vec3 {
        self.rotation.axis(index)
    }

    /// Largest half-extent; radius of the sphere used for approximate contacts
    pub fn max_extent(&self) -> f32 {
        self.extents.x.max(self.extents.y).max(self.extents.z)
    }

    /// Sphere centered on the box with radius [`Self::max_extent`]
    pub fn bounding_sphere(&self) -> Sphere {
        Sphere::new(self.center, self.max_extent())
    }

    /// Computes the eight corners of the box
    ///
    /// Corner `k` takes the positive extent on local axis `i` when bit `i`
    /// of `k` is set.
    pub fn corners(&self) -> [Vec3; 8] {
        let half_axes = [
            self.axis(0) * self.extents.x,
            self.axis(1) * self.extents.y,
            self.axis(2) * self.extents.z,
        ];

        let mut corners = [self.center; 8];
        for (index, corner) in corners.iter_mut().enumerate() {
            for (axis, half_axis) in half_axes.iter().enumerate() {
                if index & (1 << axis) != 0 {
                    *corner += half_axis;
                } else {
                    *corner -= half_axis;
                }
            }
        }
        corners
    }

    /// Squared distance from `point` to the box and the closest point on it
    ///
    /// Points inside the box are their own closest point at distance zero.
    pub fn square_distance(&self, point: &Vec3) -> (f32, Vec3) {
        let local = self.rotation.transpose() * (point - self.center);

        let mut square_distance = 0.0;
        let mut clamped = local;
        for axis in 0..3 {
            let extent = self.extents[axis];
            let value = utils::clamp(local[axis], -extent, extent);
            let delta = local[axis] - value;
            square_distance += delta * delta;
            clamped[axis] = value;
        }

        (square_distance, self.center + self.rotation * clamped)
    }

    /// Closest point on (or in) the box to `point`
    pub fn closest_point(&self, point: &Vec3) -> Vec3 {
        self.square_distance(point).1
    }

    /// Check the box invariants
    pub fn validate(&self) -> Result<(), ShapeError> {
        if !self.center.iter().all(|v| v.is_finite()) {
            return Err(ShapeError::NonFinite("box"));
        }
        for axis in 0..3 {
            let value = self.extents[axis];
            if !value.is_finite() || value < 0.0 {
                return Err(ShapeError::InvalidExtent { axis, value });
            }
        }
        if !self.rotation.is_orthonormal(VALIDATION_TOLERANCE) {
            return Err(ShapeError::NonOrthonormalRotation);
        }
        Ok(())
    }
}
