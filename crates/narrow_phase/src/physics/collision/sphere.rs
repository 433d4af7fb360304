//! Sphere-sphere and plane-sphere tests

use crate::foundation::math::{Vec3, constants::EPSILON};
use super::contact::{push_contact, ContactList, IntersectionContact};
use super::primitives::{Plane, Sphere};

/// Normal used when two sphere centers coincide and no direction is defined
pub const CONCENTRIC_FALLBACK_NORMAL: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Check if two spheres overlap or touch
pub fn sphere_sphere_intersect(s0: &Sphere, s1: &Sphere) -> bool {
    debug_assert!(s0.validate().is_ok() && s1.validate().is_ok(), "invalid sphere");

    let distance_squared = (s0.center - s1.center).magnitude_squared();
    let radius_sum = s0.radius + s1.radius;
    distance_squared <= radius_sum * radius_sum
}

/// Contact between two spheres
///
/// Appends one contact whose normal points from `s1` toward `s0`. The
/// contact point is the middle of the overlapping segment between the
/// two surfaces.
pub fn sphere_sphere_contact(s0: &Sphere, s1: &Sphere, contacts: Option<&mut ContactList>) -> bool {
    if !sphere_sphere_intersect(s0, s1) {
        return false;
    }

    let offset = s0.center - s1.center;
    let distance = offset.magnitude();
    let normal = if distance > EPSILON {
        offset / distance
    } else {
        log::trace!("Concentric spheres at {:?}, using fallback normal", s0.center);
        CONCENTRIC_FALLBACK_NORMAL
    };

    let depth = s0.radius + s1.radius - distance;
    let position = s1.center + normal * (s1.radius - depth * 0.5);

    push_contact(contacts, IntersectionContact::new(position, normal, depth));
    true
}

/// Check if a sphere touches a plane from either side
pub fn plane_sphere_intersect(plane: &Plane, sphere: &Sphere) -> bool {
    debug_assert!(plane.validate().is_ok() && sphere.validate().is_ok(), "invalid plane or sphere");

    plane.signed_distance(&sphere.center).abs() <= sphere.radius
}

/// Contact between a plane and a sphere
///
/// The normal is the plane normal and the contact point is the sphere's
/// deepest point along it. Depth is `radius - signed distance`, which lies
/// in `[0, 2 * radius]` whenever a contact is produced.
pub fn plane_sphere_contact(plane: &Plane, sphere: &Sphere, contacts: Option<&mut ContactList>) -> bool {
    if !plane_sphere_intersect(plane, sphere) {
        return false;
    }

    let distance = plane.signed_distance(&sphere.center);
    let depth = sphere.radius - distance;
    let position = sphere.center - plane.normal * sphere.radius;

    push_contact(contacts, IntersectionContact::new(position, plane.normal, depth));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOLERANCE: f32 = 1e-5;

    fn sphere(x: f32, y: f32, z: f32, radius: f32) -> Sphere {
        Sphere::new(Vec3::new(x, y, z), radius)
    }

    #[test]
    fn test_sphere_sphere_intersect_is_symmetric() {
        let cases = [
            (sphere(0.0, 0.0, 0.0, 1.0), sphere(1.5, 0.0, 0.0, 1.0)),
            (sphere(0.0, 0.0, 0.0, 1.0), sphere(3.0, 0.0, 0.0, 1.0)),
            (sphere(-1.0, 2.0, 0.5, 0.5), sphere(0.0, 1.0, 0.0, 2.0)),
            (sphere(0.0, 0.0, 0.0, 0.0), sphere(0.0, 0.0, 0.0, 0.0)),
        ];

        for (a, b) in cases {
            assert_eq!(sphere_sphere_intersect(&a, &b), sphere_sphere_intersect(&b, &a));
        }
    }

    #[test]
    fn test_sphere_sphere_touching_counts() {
        let a = sphere(0.0, 0.0, 0.0, 1.0);
        let b = sphere(2.0, 0.0, 0.0, 1.0);

        assert!(sphere_sphere_intersect(&a, &b));

        let mut contacts = ContactList::new();
        assert!(sphere_sphere_contact(&a, &b, Some(&mut contacts)));
        assert_relative_eq!(contacts[0].depth, 0.0, epsilon = TOLERANCE);
    }

    #[test]
    fn test_sphere_sphere_contact() {
        let a = sphere(0.0, 0.0, 0.0, 1.0);
        let b = sphere(1.5, 0.0, 0.0, 1.0);
        let mut contacts = ContactList::new();

        assert!(sphere_sphere_contact(&a, &b, Some(&mut contacts)));
        assert_eq!(contacts.len(), 1);

        let contact = contacts[0];
        assert_relative_eq!(contact.normal, Vec3::new(-1.0, 0.0, 0.0), epsilon = TOLERANCE);
        assert_relative_eq!(contact.depth, 0.5, epsilon = TOLERANCE);
        assert_relative_eq!(contact.position, Vec3::new(0.75, 0.0, 0.0), epsilon = TOLERANCE);
    }

    #[test]
    fn test_sphere_sphere_contact_properties() {
        let cases = [
            (sphere(0.0, 0.0, 0.0, 1.0), sphere(0.3, 0.4, -0.2, 0.5)),
            (sphere(1.0, 1.0, 1.0, 2.0), sphere(-1.0, 0.0, 2.0, 1.5)),
            (sphere(5.0, 0.0, 0.0, 0.1), sphere(5.0, 0.15, 0.0, 0.1)),
        ];

        for (a, b) in cases {
            let mut contacts = ContactList::new();
            if sphere_sphere_contact(&a, &b, Some(&mut contacts)) {
                let contact = contacts[0];
                assert!(contact.depth >= 0.0);
                assert_relative_eq!(contact.normal.magnitude(), 1.0, epsilon = TOLERANCE);
            }
        }
    }

    #[test]
    fn test_sphere_sphere_separated_appends_nothing() {
        let mut contacts = ContactList::new();
        assert!(!sphere_sphere_contact(
            &sphere(0.0, 0.0, 0.0, 1.0),
            &sphere(0.0, 3.0, 0.0, 1.0),
            Some(&mut contacts)
        ));
        assert!(contacts.is_empty());
    }

    #[test]
    fn test_concentric_spheres_use_fallback_normal() {
        let a = sphere(2.0, 2.0, 2.0, 1.0);
        let b = sphere(2.0, 2.0, 2.0, 0.5);
        let mut contacts = ContactList::new();

        assert!(sphere_sphere_contact(&a, &b, Some(&mut contacts)));

        let contact = contacts[0];
        assert_eq!(contact.normal, CONCENTRIC_FALLBACK_NORMAL);
        assert_relative_eq!(contact.depth, 1.5, epsilon = TOLERANCE);
        assert!(contact.position.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_sphere_sphere_contact_without_list() {
        let a = sphere(0.0, 0.0, 0.0, 1.0);
        let b = sphere(0.5, 0.0, 0.0, 1.0);
        assert!(sphere_sphere_contact(&a, &b, None));
    }

    #[test]
    fn test_plane_sphere() {
        let plane = Plane::new(Vec3::y(), 0.0);
        let s = sphere(0.0, 0.5, 0.0, 1.0);

        assert!(plane_sphere_intersect(&plane, &s));

        let mut contacts = ContactList::new();
        assert!(plane_sphere_contact(&plane, &s, Some(&mut contacts)));
        assert_eq!(contacts.len(), 1);
        assert_relative_eq!(contacts[0].normal, Vec3::y(), epsilon = TOLERANCE);
        assert_relative_eq!(contacts[0].depth, 0.5, epsilon = TOLERANCE);
        assert_relative_eq!(contacts[0].position, Vec3::new(0.0, -0.5, 0.0), epsilon = TOLERANCE);
    }

    #[test]
    fn test_plane_sphere_behind_plane() {
        let plane = Plane::new(Vec3::y(), 0.0);
        let mut contacts = ContactList::new();

        // Center behind the plane but still touching it
        assert!(plane_sphere_contact(&plane, &sphere(0.0, -0.5, 0.0, 1.0), Some(&mut contacts)));
        assert_relative_eq!(contacts[0].depth, 1.5, epsilon = TOLERANCE);

        // Fully behind: no contact, so never a negative depth
        assert!(!plane_sphere_contact(&plane, &sphere(0.0, -3.0, 0.0, 1.0), Some(&mut contacts)));
        assert_eq!(contacts.len(), 1);
        assert!(contacts.iter().all(|c| c.depth >= 0.0));
    }

    #[test]
    fn test_plane_sphere_separated() {
        let plane = Plane::from_point_normal(Vec3::new(0.0, 0.0, 1.0), Vec3::z());
        assert!(!plane_sphere_intersect(&plane, &sphere(0.0, 0.0, 2.5, 1.0)));
        assert!(plane_sphere_intersect(&plane, &sphere(0.0, 0.0, 2.0, 1.0)));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let a = sphere(0.1, 0.2, 0.3, 1.0);
        let b = sphere(0.9, -0.4, 0.3, 0.7);
        let mut first = ContactList::new();
        let mut second = ContactList::new();

        assert_eq!(
            sphere_sphere_contact(&a, &b, Some(&mut first)),
            sphere_sphere_contact(&a, &b, Some(&mut second))
        );
        assert_eq!(first, second);
    }
}
