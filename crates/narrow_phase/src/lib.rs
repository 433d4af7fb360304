//! # Narrow Phase
//!
//! Narrow-phase collision detection for spheres, planes and oriented boxes.
//!
//! ## Features
//!
//! - **Boolean tests**: fast overlap predicates for every supported shape pair
//! - **Contact generation**: contact points, normals and penetration depths
//! - **Separating Axis Theorem**: 15-axis overlap test for oriented boxes
//! - **Shape dispatch**: one entry point over a tagged union of shapes
//! - **Configurable**: TOML/RON configuration for the contact policy
//!
//! ## Quick Start
//!
//! ```rust
//! use narrow_phase::prelude::*;
//!
//! let a = CollisionShape::Sphere(Sphere::new(Vec3::new(0.0, 0.0, 0.0), 1.0));
//! let b = CollisionShape::Sphere(Sphere::new(Vec3::new(1.5, 0.0, 0.0), 1.0));
//!
//! assert!(a.intersects(&b));
//!
//! let mut contacts = ContactList::new();
//! assert!(a.contact(&b, Some(&mut contacts)));
//! assert_eq!(contacts.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::many_single_char_names)]

pub mod core;
pub mod foundation;
pub mod config;
pub mod physics;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        foundation::math::{Vec3, Mat3, constants::EPSILON},
        physics::{
            CollisionShape, ShapeKind, NarrowPhase,
            collision::{
                Plane, Sphere, OrientedBox, ShapeError,
                IntersectionContact, ContactList,
            },
        },
        core::config::{NarrowPhaseConfig, BoxPlaneContactMode, Config, ConfigError},
    };
}
