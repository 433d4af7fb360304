//! Configured narrow-phase entry point
//!
//! The free functions in [`crate::physics::collision`] never fail and never
//! allocate. [`NarrowPhase`] layers the policy from [`NarrowPhaseConfig`]
//! on top of them: optional input validation, the box-plane contact
//! strategy, and a cap on contacts appended per query.
//!
//! Validation turns invalid shapes into a [`ShapeError`]. Without it, debug
//! builds still panic on them through the assertions in the shape tests.

use serde::{Serialize, Deserialize};

use crate::core::config::NarrowPhaseConfig;
use crate::physics::collision::{reborrow, sort_deepest_first, CollisionShape, ContactList, ShapeError};

/// Outcome of testing one shape pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairReport {
    /// Result of the boolean overlap test
    pub intersects: bool,
    /// Whether contact generation found the shapes touching
    pub touching: bool,
    /// Generated contacts, deepest first
    pub contacts: ContactList,
}

/// Narrow-phase collision queries driven by a [`NarrowPhaseConfig`]
///
/// Holds no per-query state, so one instance can serve any number of
/// threads.
#[derive(Debug, Clone, Default)]
pub struct NarrowPhase {
    config: NarrowPhaseConfig,
}

impl NarrowPhase {
    /// Create a narrow phase with the given configuration
    pub const fn new(config: NarrowPhaseConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub const fn config(&self) -> &NarrowPhaseConfig {
        &self.config
    }

    /// Boolean overlap test
    pub fn intersect(&self, a: &CollisionShape, b: &CollisionShape) -> Result<bool, ShapeError> {
        self.check_inputs(a, b)?;
        Ok(a.intersects(b))
    }

    /// Contact generation
    ///
    /// Appends at most `max_contacts` contacts to `contacts`. When a
    /// generator produces more, the deepest ones are kept.
    pub fn contact(
        &self,
        a: &CollisionShape,
        b: &CollisionShape,
        mut contacts: Option<&mut ContactList>,
    ) -> Result<bool, ShapeError> {
        self.check_inputs(a, b)?;

        let first = contacts.as_ref().map_or(0, |list| list.len());
        let touching = a.contact_with(b, self.config.box_plane_contacts, reborrow(&mut contacts));

        if let Some(list) = contacts {
            let appended = list.len() - first;
            if appended > self.config.max_contacts {
                log::debug!(
                    "Truncating {} {:?}-{:?} contacts to {}",
                    appended,
                    a.kind(),
                    b.kind(),
                    self.config.max_contacts
                );
                sort_deepest_first(&mut list[first..]);
                list.truncate(first + self.config.max_contacts);
            }
        }

        Ok(touching)
    }

    /// Run both queries for one pair and collect the results
    pub fn evaluate(&self, a: &CollisionShape, b: &CollisionShape) -> Result<PairReport, ShapeError> {
        let intersects = self.intersect(a, b)?;
        let mut contacts = ContactList::new();
        let touching = self.contact(a, b, Some(&mut contacts))?;
        sort_deepest_first(&mut contacts);

        log::trace!(
            "{:?}-{:?}: intersects={} touching={} contacts={}",
            a.kind(),
            b.kind(),
            intersects,
            touching,
            contacts.len()
        );

        Ok(PairReport { intersects, touching, contacts })
    }

    fn check_inputs(&self, a: &CollisionShape, b: &CollisionShape) -> Result<(), ShapeError> {
        if !self.config.validate_inputs {
            return Ok(());
        }

        a.validate().and_then(|()| b.validate()).map_err(|error| {
            log::warn!("Rejected {:?}-{:?} query: {}", a.kind(), b.kind(), error);
            error
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::BoxPlaneContactMode;
    use crate::foundation::math::Vec3;
    use crate::physics::collision::{IntersectionContact, OrientedBox, Plane, Sphere};

    fn floor() -> CollisionShape {
        Plane::new(Vec3::y(), 0.0).into()
    }

    fn sinking_box() -> CollisionShape {
        OrientedBox::axis_aligned(Vec3::new(0.0, 0.5, 0.0), Vec3::new(1.0, 1.0, 1.0)).into()
    }

    #[test]
    fn test_default_config_corner_contacts() {
        let narrow_phase = NarrowPhase::default();
        let report = narrow_phase.evaluate(&sinking_box(), &floor()).unwrap();

        assert!(report.intersects);
        assert!(report.touching);
        assert_eq!(report.contacts.len(), 4);
    }

    #[test]
    fn test_bounding_sphere_mode() {
        let config = NarrowPhaseConfig::new().with_box_plane_contacts(BoxPlaneContactMode::BoundingSphere);
        let report = NarrowPhase::new(config).evaluate(&sinking_box(), &floor()).unwrap();

        assert_eq!(report.contacts.len(), 1);
    }

    #[test]
    fn test_max_contacts_keeps_deepest() {
        let config = NarrowPhaseConfig::new().with_max_contacts(2);
        let narrow_phase = NarrowPhase::new(config);
        let tilted: CollisionShape = OrientedBox::new(
            Vec3::new(0.0, 0.8, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
            crate::foundation::math::utils::rotation_from_euler(0.3, 0.0, 0.2),
        )
        .into();

        let mut all = ContactList::new();
        assert!(tilted.contact(&floor(), Some(&mut all)));
        assert!(all.len() > 2);

        let marker = IntersectionContact::new(Vec3::zeros(), Vec3::x(), -1.0);
        let mut capped = vec![marker];
        assert!(narrow_phase.contact(&tilted, &floor(), Some(&mut capped)).unwrap());

        assert_eq!(capped.len(), 3);
        assert_eq!(capped[0], marker);
        assert_eq!(capped[1].depth, all[0].depth);
        assert_eq!(capped[2].depth, all[1].depth);
    }

    #[test]
    fn test_validation_rejects_invalid_shapes() {
        let narrow_phase = NarrowPhase::new(NarrowPhaseConfig::new().with_validation(true));
        let bad: CollisionShape = Sphere::new(Vec3::zeros(), -1.0).into();
        let good: CollisionShape = Sphere::new(Vec3::zeros(), 1.0).into();

        assert_eq!(narrow_phase.intersect(&bad, &good), Err(ShapeError::InvalidRadius(-1.0)));
        assert_eq!(narrow_phase.intersect(&good, &bad), Err(ShapeError::InvalidRadius(-1.0)));
        assert!(narrow_phase.contact(&good, &bad, None).is_err());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid sphere")]
    fn test_unvalidated_input_asserts_in_debug_builds() {
        let narrow_phase = NarrowPhase::new(NarrowPhaseConfig::new().with_validation(false));
        let bad: CollisionShape = Sphere::new(Vec3::zeros(), -1.0).into();
        let good: CollisionShape = Sphere::new(Vec3::zeros(), 1.0).into();

        let _ = narrow_phase.intersect(&bad, &good);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_unvalidated_input_is_not_rejected_in_release_builds() {
        let narrow_phase = NarrowPhase::new(NarrowPhaseConfig::new().with_validation(false));
        let bad: CollisionShape = Sphere::new(Vec3::zeros(), -1.0).into();
        let good: CollisionShape = Sphere::new(Vec3::zeros(), 1.0).into();

        assert!(narrow_phase.intersect(&bad, &good).is_ok());
        assert!(narrow_phase.contact(&bad, &good, None).is_ok());
    }

    #[test]
    fn test_contact_without_list() {
        let narrow_phase = NarrowPhase::default();
        let a: CollisionShape = Sphere::new(Vec3::zeros(), 1.0).into();
        let b: CollisionShape = Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0).into();

        assert_eq!(narrow_phase.contact(&a, &b, None), Ok(true));
    }

    #[test]
    fn test_shared_across_threads() {
        let narrow_phase = std::sync::Arc::new(NarrowPhase::default());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let narrow_phase = std::sync::Arc::clone(&narrow_phase);
                std::thread::spawn(move || {
                    let offset = 0.5 * i as f32;
                    let a: CollisionShape = Sphere::new(Vec3::zeros(), 1.0).into();
                    let b: CollisionShape = Sphere::new(Vec3::new(offset, 0.0, 0.0), 1.0).into();
                    narrow_phase.evaluate(&a, &b).unwrap()
                })
            })
            .collect();

        for handle in handles {
            let report = handle.join().unwrap();
            assert!(report.intersects);
            assert_eq!(report.contacts.len(), 1);
        }
    }
}
