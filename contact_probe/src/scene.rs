//! Scene files for the probe
//!
//! A scene is a list of named shapes plus the index pairs to test. When no
//! pairs are listed, every unordered pair of shapes is tested.

use narrow_phase::config::Config;
use narrow_phase::foundation::math::{utils::{deg_to_rad, rotation_from_euler}, Vec3};
use narrow_phase::physics::collision::{CollisionShape, OrientedBox, Plane, Sphere};
use serde::{Deserialize, Serialize};

/// Shape as written in a scene file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeDesc {
    /// Sphere from center and radius
    Sphere {
        /// Center
        center: [f32; 3],
        /// Radius
        radius: f32,
    },
    /// Plane from a (not necessarily unit) normal and a point on it
    Plane {
        /// Normal direction
        normal: [f32; 3],
        /// Any point on the plane
        point: [f32; 3],
    },
    /// Box from center, half-extents and roll/pitch/yaw in degrees
    Box {
        /// Center
        center: [f32; 3],
        /// Half-extents
        extents: [f32; 3],
        /// Roll, pitch, yaw in degrees
        #[serde(default)]
        rotation_degrees: [f32; 3],
    },
}

impl ShapeDesc {
    /// Convert to a world-space collision shape
    pub fn to_shape(&self) -> CollisionShape {
        match self {
            Self::Sphere { center, radius } => Sphere::new(Vec3::from(*center), *radius).into(),
            Self::Plane { normal, point } => {
                Plane::from_point_normal(Vec3::from(*point), Vec3::from(*normal)).into()
            }
            Self::Box { center, extents, rotation_degrees: [roll, pitch, yaw] } => OrientedBox::new(
                Vec3::from(*center),
                Vec3::from(*extents),
                rotation_from_euler(deg_to_rad(*roll), deg_to_rad(*pitch), deg_to_rad(*yaw)),
            )
            .into(),
        }
    }
}

/// Named shape entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneShape {
    /// Label used in the report
    pub name: String,
    /// Geometry
    pub shape: ShapeDesc,
}

/// Scene file contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeScene {
    /// Shapes in the scene
    pub shapes: Vec<SceneShape>,
    /// Index pairs to test; empty means all pairs
    pub pairs: Vec<(usize, usize)>,
}

impl Config for ProbeScene {}

impl ProbeScene {
    /// Pairs to test, with out-of-range indices dropped
    pub fn resolved_pairs(&self) -> Vec<(usize, usize)> {
        if self.pairs.is_empty() {
            let count = self.shapes.len();
            return (0..count)
                .flat_map(|a| (a + 1..count).map(move |b| (a, b)))
                .collect();
        }

        self.pairs
            .iter()
            .copied()
            .filter(|&(a, b)| {
                let valid = a < self.shapes.len() && b < self.shapes.len();
                if !valid {
                    log::warn!("Skipping pair ({}, {}): scene has {} shapes", a, b, self.shapes.len());
                }
                valid
            })
            .collect()
    }
}
