//! Oriented box tests: box-box, box-plane and box-sphere
//!
//! Box-box overlap uses the Separating Axis Theorem over the 15 candidate
//! axes of two boxes: the 3 face normals of each box and the 9 cross
//! products of their edge directions. Everything is expressed in the frame
//! of the first box, so the test only needs the direction cosines
//! `C = A^T * B` between the two bases and the center offset projected
//! onto the first box's axes.
//!
//! Contacts for box-box and box-sphere use a sphere of radius
//! [`OrientedBox::max_extent`] in place of each box; box-plane contacts are
//! generated from the box corners.

use crate::foundation::math::{Mat3, Vec3, constants::{EPSILON, PARALLEL_CUTOFF}};
use super::contact::{sort_deepest_first, ContactList, IntersectionContact};
use super::primitives::{OrientedBox, Plane, Sphere};
use super::sphere::{plane_sphere_contact, sphere_sphere_contact};

/// Direction cosines between two box bases
struct BasisOverlap {
    /// `c[(i, j)] = A_i · B_j`
    c: Mat3,
    /// `|c|` element-wise
    abs_c: Mat3,
    /// Some pair of axes is parallel within [`PARALLEL_CUTOFF`]
    parallel_pair: bool,
}

impl BasisOverlap {
    fn new(a: &Mat3, b: &Mat3) -> Self {
        let c = a.transpose() * b;
        let abs_c = c.abs();
        let parallel_pair = abs_c.iter().any(|&cosine| cosine > PARALLEL_CUTOFF);
        Self { c, abs_c, parallel_pair }
    }
}

/// Separating Axis Theorem test for two oriented boxes
///
/// Returns `true` when no separating axis exists. If any pair of box axes
/// is parallel the edge-edge axes are skipped: their cross products
/// degenerate and the face axes already decide the result.
pub fn box_box_intersect(box0: &OrientedBox, box1: &OrientedBox) -> bool {
    debug_assert!(box0.validate().is_ok() && box1.validate().is_ok(), "invalid box");

    let e0 = &box0.extents;
    let e1 = &box1.extents;
    let basis = BasisOverlap::new(&box0.rotation, &box1.rotation);
    let (c, abs_c) = (&basis.c, &basis.abs_c);

    // Center offset in box0's frame
    let offset = box1.center - box0.center;
    let ad = box0.rotation.transpose() * offset;

    // Face normals of box0: L = A_i
    for i in 0..3 {
        let r0 = e0[i];
        let r1 = e1.dot(&abs_c.row(i).transpose());
        if ad[i].abs() > r0 + r1 {
            return false;
        }
    }

    // Face normals of box1: L = B_j
    for j in 0..3 {
        let r0 = e0.dot(&abs_c.column(j));
        let r1 = e1[j];
        let r = offset.dot(&box1.axis(j)).abs();
        if r > r0 + r1 {
            return false;
        }
    }

    if basis.parallel_pair {
        return true;
    }

    // Edge-edge axes: L = A_i x B_j
    for i in 0..3 {
        let (i1, i2) = ((i + 1) % 3, (i + 2) % 3);
        for j in 0..3 {
            let (j1, j2) = ((j + 1) % 3, (j + 2) % 3);
            let r0 = e0[i1] * abs_c[(i2, j)] + e0[i2] * abs_c[(i1, j)];
            let r1 = e1[j1] * abs_c[(i, j2)] + e1[j2] * abs_c[(i, j1)];
            let r = (ad[i2] * c[(i1, j)] - ad[i1] * c[(i2, j)]).abs();
            if r > r0 + r1 {
                return false;
            }
        }
    }

    true
}

/// Contact between two boxes
///
/// The exact overlap test above only answers yes/no; contacts come from
/// each box's [`OrientedBox::bounding_sphere`], so the normal points from
/// `box1`'s center toward `box0`'s. Returns whether the spheres produced a
/// contact, which can be `false` for boxes whose corners overlap outside
/// those spheres.
pub fn box_box_contact(box0: &OrientedBox, box1: &OrientedBox, contacts: Option<&mut ContactList>) -> bool {
    if !box_box_intersect(box0, box1) {
        return false;
    }

    sphere_sphere_contact(&box0.bounding_sphere(), &box1.bounding_sphere(), contacts)
}

/// Radius of the box projected onto `direction`
fn projected_radius(obb: &OrientedBox, direction: &Vec3) -> f32 {
    (0..3)
        .map(|axis| obb.extents[axis] * direction.dot(&obb.axis(axis)).abs())
        .sum()
}

/// Check if a box touches a plane from either side
pub fn box_plane_intersect(obb: &OrientedBox, plane: &Plane) -> bool {
    debug_assert!(obb.validate().is_ok() && plane.validate().is_ok(), "invalid box or plane");

    let radius = projected_radius(obb, &plane.normal);
    plane.signed_distance(&obb.center).abs() <= radius
}

/// Contact between a box and a plane from the penetrating corners
///
/// Every corner at or behind the plane (within [`EPSILON`]) becomes one
/// contact carrying the plane normal and a depth of minus its signed
/// distance. The appended contacts are ordered deepest first.
pub fn box_plane_contact(obb: &OrientedBox, plane: &Plane, contacts: Option<&mut ContactList>) -> bool {
    if !box_plane_intersect(obb, plane) {
        return false;
    }

    let Some(contacts) = contacts else {
        return true;
    };

    let first = contacts.len();
    contacts.extend(obb.corners().iter().filter_map(|corner| {
        let depth = -plane.signed_distance(corner);
        (depth >= -EPSILON).then(|| IntersectionContact::new(*corner, plane.normal, depth))
    }));
    sort_deepest_first(&mut contacts[first..]);

    true
}

/// Contact between a box and a plane using the box's bounding sphere
pub fn box_plane_contact_approximate(
    obb: &OrientedBox,
    plane: &Plane,
    contacts: Option<&mut ContactList>,
) -> bool {
    if !box_plane_intersect(obb, plane) {
        return false;
    }

    plane_sphere_contact(plane, &obb.bounding_sphere(), contacts)
}

/// Check if a box and a sphere overlap or touch
pub fn box_sphere_intersect(obb: &OrientedBox, sphere: &Sphere) -> bool {
    debug_assert!(obb.validate().is_ok() && sphere.validate().is_ok(), "invalid box or sphere");

    let (square_distance, _) = obb.square_distance(&sphere.center);
    sphere.radius - square_distance.sqrt() > -EPSILON
}

/// Contact between a box and a sphere
///
/// Uses the box's bounding sphere, so the normal points from the sphere's
/// center toward the box's center. Returns whether that approximation
/// produced a contact, which can be `false` for a sphere that reaches the
/// box near a corner but stays outside the bounding sphere.
pub fn box_sphere_contact(obb: &OrientedBox, sphere: &Sphere, contacts: Option<&mut ContactList>) -> bool {
    if !box_sphere_intersect(obb, sphere) {
        return false;
    }

    sphere_sphere_contact(&obb.bounding_sphere(), sphere, contacts)
}
