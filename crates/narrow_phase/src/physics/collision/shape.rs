//! Shape-pair dispatch
//!
//! Provides a tagged union over the primitive shapes so callers can test any
//! pair through one entry point.
//!
//! # Normal convention
//!
//! For pairs that contain a plane, contacts carry the plane normal no matter
//! which side of the call the plane is on. For every other pair the normal
//! points from the second shape toward the first, i.e. the direction in
//! which the first shape has to move to separate.

use serde::{Serialize, Deserialize};

use crate::core::config::BoxPlaneContactMode;
use super::contact::{reborrow, ContactList};
use super::obb::{
    box_box_contact, box_box_intersect, box_plane_contact, box_plane_contact_approximate,
    box_plane_intersect, box_sphere_contact, box_sphere_intersect,
};
use super::primitives::{OrientedBox, Plane, ShapeError, Sphere};
use super::sphere::{plane_sphere_contact, plane_sphere_intersect, sphere_sphere_contact, sphere_sphere_intersect};

/// Discriminant of a [`CollisionShape`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// [`Sphere`]
    Sphere,
    /// [`Plane`]
    Plane,
    /// [`OrientedBox`]
    Box,
}

/// World-space collision shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CollisionShape {
    /// A sphere
    Sphere(Sphere),
    /// An infinite plane
    Plane(Plane),
    /// An oriented box
    Box(OrientedBox),
}

impl CollisionShape {
    /// Kind of this shape
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Sphere(_) => ShapeKind::Sphere,
            Self::Plane(_) => ShapeKind::Plane,
            Self::Box(_) => ShapeKind::Box,
        }
    }

    /// Check the invariants of the wrapped primitive
    pub fn validate(&self) -> Result<(), ShapeError> {
        match self {
            Self::Sphere(sphere) => sphere.validate(),
            Self::Plane(plane) => plane.validate(),
            Self::Box(obb) => obb.validate(),
        }
    }

    /// Test if this shape intersects with another shape
    ///
    /// Symmetric: `a.intersects(&b) == b.intersects(&a)` for every pair.
    pub fn intersects(&self, other: &CollisionShape) -> bool {
        match (self, other) {
            (Self::Sphere(a), Self::Sphere(b)) => sphere_sphere_intersect(a, b),

            (Self::Plane(plane), Self::Sphere(sphere)) |
            (Self::Sphere(sphere), Self::Plane(plane)) => plane_sphere_intersect(plane, sphere),

            (Self::Box(a), Self::Box(b)) => box_box_intersect(a, b),

            (Self::Box(obb), Self::Plane(plane)) |
            (Self::Plane(plane), Self::Box(obb)) => box_plane_intersect(obb, plane),

            (Self::Box(obb), Self::Sphere(sphere)) |
            (Self::Sphere(sphere), Self::Box(obb)) => box_sphere_intersect(obb, sphere),

            (Self::Plane(_), Self::Plane(_)) => {
                log::trace!("Plane-plane pairs are not supported");
                false
            }
        }
    }

    /// Generate contacts against another shape
    ///
    /// Box-plane pairs use corner contacts. See [`Self::contact_with`].
    pub fn contact(&self, other: &CollisionShape, contacts: Option<&mut ContactList>) -> bool {
        self.contact_with(other, BoxPlaneContactMode::Corners, contacts)
    }

    /// Generate contacts against another shape with an explicit box-plane strategy
    ///
    /// Returns `true` when the shapes are in contact. Contacts are appended
    /// to `contacts` when it is `Some`; existing entries are left untouched.
    pub fn contact_with(
        &self,
        other: &CollisionShape,
        box_plane: BoxPlaneContactMode,
        contacts: Option<&mut ContactList>,
    ) -> bool {
        match (self, other) {
            (Self::Sphere(a), Self::Sphere(b)) => sphere_sphere_contact(a, b, contacts),

            (Self::Plane(plane), Self::Sphere(sphere)) |
            (Self::Sphere(sphere), Self::Plane(plane)) => plane_sphere_contact(plane, sphere, contacts),

            (Self::Box(a), Self::Box(b)) => box_box_contact(a, b, contacts),

            (Self::Box(obb), Self::Plane(plane)) |
            (Self::Plane(plane), Self::Box(obb)) => match box_plane {
                BoxPlaneContactMode::Corners => box_plane_contact(obb, plane, contacts),
                BoxPlaneContactMode::BoundingSphere => box_plane_contact_approximate(obb, plane, contacts),
            },

            (Self::Box(obb), Self::Sphere(sphere)) => box_sphere_contact(obb, sphere, contacts),
            (Self::Sphere(sphere), Self::Box(obb)) => {
                flip_appended(contacts, |contacts| box_sphere_contact(obb, sphere, contacts))
            }

            (Self::Plane(_), Self::Plane(_)) => {
                log::trace!("Plane-plane pairs are not supported");
                false
            }
        }
    }
}

impl From<Sphere> for CollisionShape {
    fn from(sphere: Sphere) -> Self {
        Self::Sphere(sphere)
    }
}

impl From<Plane> for CollisionShape {
    fn from(plane: Plane) -> Self {
        Self::Plane(plane)
    }
}

impl From<OrientedBox> for CollisionShape {
    fn from(obb: OrientedBox) -> Self {
        Self::Box(obb)
    }
}

/// Runs a generator with swapped arguments and flips the normals it appended
fn flip_appended(
    mut contacts: Option<&mut ContactList>,
    generate: impl FnOnce(Option<&mut ContactList>) -> bool,
) -> bool {
    let first = contacts.as_ref().map_or(0, |list| list.len());
    let hit = generate(reborrow(&mut contacts));

    if let Some(list) = contacts {
        for contact in &mut list[first..] {
            *contact = contact.flipped();
        }
    }
    hit
}
