//! Physics module for collision detection
//!
//! Provides narrow-phase intersection tests and contact generation for
//! spheres, planes and oriented boxes. Broad-phase culling and collision
//! response belong to the caller.

pub mod collision;
pub mod narrow_phase;

#[cfg(test)]
mod tests;

pub use collision::{
    CollisionShape,
    ShapeKind,
    IntersectionContact,
    ContactList,
};
pub use narrow_phase::{NarrowPhase, PairReport};
