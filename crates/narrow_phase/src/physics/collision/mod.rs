//! Narrow-phase intersection tests and contact generation
//!
//! Every routine here is a pure function of world-space value types: no
//! state survives a call, and the only output besides the returned `bool`
//! is the caller-owned contact list.
//!
//! # Module Organization
//!
//! - [`primitives`] - Planes, spheres and oriented boxes
//! - [`contact`] - Contact points and contact lists
//! - [`sphere`] - Sphere-sphere and plane-sphere tests
//! - [`obb`] - Box-box (SAT), box-plane and box-sphere tests
//! - [`shape`] - Tagged union over the primitives with pairwise dispatch
//!
//! # Contract
//!
//! - `*_intersect(a, b) -> bool` is the fast overlap predicate.
//! - `*_contact(a, b, contacts) -> bool` reports contact and appends to
//!   `contacts` when it is `Some`. Passing `None` asks for the boolean only.

pub mod primitives;
pub mod contact;
pub mod sphere;
pub mod obb;
pub mod shape;

// Re-export commonly used types
pub use primitives::{Plane, Sphere, OrientedBox, ShapeError};
pub use contact::{IntersectionContact, ContactList, sort_deepest_first};
pub use sphere::{
    sphere_sphere_intersect, sphere_sphere_contact,
    plane_sphere_intersect, plane_sphere_contact,
    CONCENTRIC_FALLBACK_NORMAL,
};
pub use obb::{
    box_box_intersect, box_box_contact,
    box_plane_intersect, box_plane_contact, box_plane_contact_approximate,
    box_sphere_intersect, box_sphere_contact,
};
pub use shape::{CollisionShape, ShapeKind};

pub(crate) use contact::reborrow;
