//! Contact points produced by the contact generators

use serde::{Serialize, Deserialize};

use crate::foundation::math::Vec3;

/// A single contact between two shapes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntersectionContact {
    /// World-space contact point
    pub position: Vec3,
    /// Unit contact normal
    pub normal: Vec3,
    /// Penetration depth; positive when overlapping
    pub depth: f32,
}

impl IntersectionContact {
    /// Creates a new contact
    pub const fn new(position: Vec3, normal: Vec3, depth: f32) -> Self {
        Self { position, normal, depth }
    }

    /// Same contact seen from the other shape
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self { normal: -self.normal, ..*self }
    }
}

/// Caller-owned list of contacts; generators only ever append to it
pub type ContactList = Vec<IntersectionContact>;

/// Stable sort by descending depth
pub fn sort_deepest_first(contacts: &mut [IntersectionContact]) {
    contacts.sort_by(|a, b| b.depth.total_cmp(&a.depth));
}

/// Appends `contact` when the caller asked for contacts
pub(crate) fn push_contact(contacts: Option<&mut ContactList>, contact: IntersectionContact) {
    if let Some(contacts) = contacts {
        contacts.push(contact);
    }
}

/// Shorter-lived copy of an optional output list, so it can be passed on more than once
pub(crate) fn reborrow<'a>(contacts: &'a mut Option<&mut ContactList>) -> Option<&'a mut ContactList> {
    contacts.as_mut().map(|list| &mut **list)
}
